use std::sync::atomic::{AtomicBool, Ordering};

use crate::chars::rune;

static DEBUG: AtomicBool = AtomicBool::new(false);

/// When enabled, the optimal matcher dumps its score and consecutive
/// matrices to stdout after every fill.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

#[inline]
pub(crate) fn enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Print the `H` (score) and `C` (consecutive) matrices aligned under the
/// folded text window, one row per pattern character. Cells left of a
/// row's first reachable column were never written and print blank.
pub(crate) fn print_matrices(
    t: &[u32],
    pattern: &[char],
    f: &[u32],
    f0: usize,
    last_idx: usize,
    h: &[i16],
    c: &[i16],
) {
    let width = last_idx - f0 + 1;
    print!("    ");
    for col in f0..=last_idx {
        print!("{:>5}", rune(t[col]));
    }
    println!();
    for (label, matrix) in [("H", h), ("C", c)] {
        for (i, &pchar) in pattern.iter().enumerate() {
            print!("{label} {pchar} ");
            for col in f0..=last_idx {
                if col < f[i] as usize {
                    print!("{:>5}", "");
                } else {
                    print!("{:>5}", matrix[i * width + col - f0]);
                }
            }
            println!();
        }
    }
}
