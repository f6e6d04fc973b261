use std::mem::take;
use std::ops::{Deref, DerefMut};

/// Default number of 16-bit cells, enough for the score and consecutive
/// matrices of typical pattern/text combinations.
pub const SLAB_CELLS_16: usize = 100 * 1024;
/// Default number of 32-bit cells, holding the folded text window and the
/// first-occurrence offsets.
pub const SLAB_CELLS_32: usize = 2048;

/// Caller-owned scratch memory reused across match calls.
///
/// Every worker thread holds its own slab; a slab must never be shared
/// between concurrent calls. The matcher carves sub-slices front to back per
/// call and falls back to plain heap vectors for requests that don't fit,
/// so any slab size is correct, merely slower when undersized.
///
/// The arena never zeroes its cells between calls. Each algorithm
/// initializes every cell it reads.
pub struct Slab {
    pub(crate) cells16: Vec<i16>,
    pub(crate) cells32: Vec<u32>,
}

impl Slab {
    pub fn new(cells16: usize, cells32: usize) -> Self {
        Slab {
            cells16: vec![0; cells16],
            cells32: vec![0; cells32],
        }
    }
}

impl Default for Slab {
    fn default() -> Self {
        Slab::new(SLAB_CELLS_16, SLAB_CELLS_32)
    }
}

/// A scratch slice carved from the arena, or heap-allocated when the arena
/// could not serve the request.
pub(crate) enum Scratch<'a, T> {
    Arena(&'a mut [T]),
    Heap(Vec<T>),
}

impl<T> Deref for Scratch<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        match self {
            Scratch::Arena(cells) => cells,
            Scratch::Heap(cells) => cells,
        }
    }
}

impl<T> DerefMut for Scratch<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        match self {
            Scratch::Arena(cells) => cells,
            Scratch::Heap(cells) => cells,
        }
    }
}

/// Split `len` cells off the front of the arena. An oversized request is
/// served from the heap and leaves the arena cursor untouched, so smaller
/// requests later in the same call can still be served in place.
pub(crate) fn carve<'a, T: Copy + Default>(arena: &mut &'a mut [T], len: usize) -> Scratch<'a, T> {
    if len <= arena.len() {
        let (cells, rest) = take(arena).split_at_mut(len);
        *arena = rest;
        Scratch::Arena(cells)
    } else {
        Scratch::Heap(vec![T::default(); len])
    }
}
