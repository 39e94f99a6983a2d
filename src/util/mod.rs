//! Shared utilities for the render loop.

pub mod frame_timing;

pub use frame_timing::{FrameTick, FrameTiming};
