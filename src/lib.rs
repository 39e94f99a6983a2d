// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

//! GPU-rendered 3D portfolio scene built on wgpu.
//!
//! Folio lays out a handful of panels, a nav bar and extruded header text,
//! lights them with an ambient + directional rig, and lets the user orbit a
//! damped camera. A mouse press plays the "about" timeline and a
//! double-click plays the "contact" timeline.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - owns the scene, camera, timelines and
//!   renderer, and runs one frame at a time
//! - [`scene::Scene`] - the object collection plus lights and background
//! - [`options::Options`] - runtime configuration (layout, lighting, camera,
//!   display, assets)
//! - [`animation`] - persistent append-only tween timelines
//! - [`viewer::Viewer`] - standalone winit window driving the engine
//!
//! # Architecture
//!
//! Solid objects are built synchronously from two layout constants. Textures
//! and the header text are decoded on background threads and handed back
//! through [`assets::Pending`] handles that the frame loop drains without
//! blocking. Each frame advances the timelines, then the orbit damping, then
//! renders background, meshes, the light helper and the egui debug overlay.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod gui;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod viewer;

pub use engine::SceneEngine;
pub use error::FolioError;
pub use options::Options;
pub use viewer::Viewer;
