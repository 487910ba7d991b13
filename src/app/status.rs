//! Labeled status lines keeping the linear run log scannable.

use std::fmt::Display;

pub fn ok(message: impl Display) {
    println!("[OK] {message}");
}

pub fn info(message: impl Display) {
    println!("[INFO] {message}");
}

pub fn warn(message: impl Display) {
    println!("[WARN] {message}");
}

/// Halting failures also land on stderr.
pub fn fail(message: impl Display) {
    eprintln!("[FAIL] {message}");
}
