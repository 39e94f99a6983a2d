//! Tween timelines driving object transforms.
//!
//! [`Timeline`] is the generic append-only tween queue; [`Director`] wires
//! the two portfolio timelines to their triggers.

pub mod director;
pub mod easing;
pub mod timeline;

pub use director::Director;
pub use easing::EasingFunction;
pub use timeline::{Placement, StepInfo, Timeline, Tween, TweenDefaults};
