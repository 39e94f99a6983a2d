//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera, a damped orbit controller, and the
//! viewport state that drives the camera aspect and surface resolution.

/// Damped orbit controller (rotate, pan, dolly around a target).
pub mod controller;
/// Core camera struct and GPU uniform type.
pub mod core;
/// Logical size and pixel ratio of the output surface.
pub mod viewport;
