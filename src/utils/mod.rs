//! Utility helpers: math on top of `glam`, generational handles, and logging.

pub mod allocator;
pub mod logging;
pub mod math;

pub use allocator::{Arena, Handle};
pub use math::*;
