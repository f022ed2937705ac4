//! Command implementations

pub mod check;
pub mod lookup;
pub mod simple;

pub use check::{check_guess, run_check};
pub use lookup::run_lookup;
pub use simple::{play, run_simple};
