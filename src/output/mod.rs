//! Terminal output formatting
//!
//! Display utilities for the banner, coloured feedback and celebrations.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_celebration, print_example, print_feedback, print_feedback_with_emoji,
    print_notice,
};
