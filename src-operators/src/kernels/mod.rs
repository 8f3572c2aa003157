//! Kernel implementations organized by category

pub mod expanded;
pub mod multimodal;
pub mod unimodal;

pub use expanded::*;
pub use multimodal::*;
pub use unimodal::*;
