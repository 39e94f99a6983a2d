//! The two click-triggered timelines.
//!
//! "about" slides the header down and the side panels up; "contact" spins
//! the header upright, raises it and shrinks it. Both timelines persist for
//! the whole session and only ever grow.

use std::f32::consts::FRAC_PI_2;

use super::timeline::{Placement, Timeline, Tween};
use crate::scene::{ObjectId, Scene, TransformProperty};

/// Length of each "about" step in seconds.
pub const ABOUT_STEP_SECONDS: f32 = 1.0;
/// How far each panel step is pulled back over the step before it.
pub const ABOUT_OVERLAP_SECONDS: f32 = 1.0;
/// Header height once revealed.
pub const ABOUT_HEADER_Y: f32 = -9.0;
/// Side panel height once revealed.
pub const ABOUT_PANEL_Y: f32 = 1.0;

/// Header z rotation after "contact".
pub const CONTACT_HEADER_ROTATION_Z: f32 = FRAC_PI_2;
/// Header height after "contact".
pub const CONTACT_HEADER_Y: f32 = 1.0;
/// Header x/y scale after "contact"; z is left alone.
pub const CONTACT_HEADER_SCALE: (f32, f32) = (0.45, 0.25);

/// Owns the "about" and "contact" timelines.
#[derive(Debug, Clone)]
pub struct Director {
    about: Timeline,
    contact: Timeline,
}

impl Default for Director {
    fn default() -> Self {
        Self::new()
    }
}

impl Director {
    /// Two empty timelines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            about: Timeline::new("about"),
            contact: Timeline::new("contact"),
        }
    }

    fn resolve(scene: &Scene, name: &str) -> Option<ObjectId> {
        let id = scene.find(name);
        if id.is_none() {
            log::warn!("animation target {name:?} is not in the scene");
        }
        id
    }

    /// Queue the "about" reveal. Appends; never restarts.
    pub fn trigger_about(&mut self, scene: &Scene) {
        let steps = [
            ("header", ABOUT_HEADER_Y, Placement::End),
            (
                "leftPanel",
                ABOUT_PANEL_Y,
                Placement::Relative(-ABOUT_OVERLAP_SECONDS),
            ),
            (
                "rightPanel",
                ABOUT_PANEL_Y,
                Placement::Relative(-ABOUT_OVERLAP_SECONDS),
            ),
        ];
        for (name, y, placement) in steps {
            if let Some(id) = Self::resolve(scene, name) {
                let _ = self.about.add(
                    Tween::new(id, TransformProperty::Position)
                        .y(y)
                        .duration(ABOUT_STEP_SECONDS),
                    placement,
                );
            }
        }
        log::debug!("about timeline now {} steps", self.about.len());
    }

    /// Queue the "contact" transform. Appends; never restarts.
    pub fn trigger_contact(&mut self, scene: &Scene) {
        let Some(header) = Self::resolve(scene, "header") else {
            return;
        };
        let (sx, sy) = CONTACT_HEADER_SCALE;
        let _ = self
            .contact
            .add(
                Tween::new(header, TransformProperty::Rotation)
                    .z(CONTACT_HEADER_ROTATION_Z),
                Placement::End,
            )
            .add(
                Tween::new(header, TransformProperty::Position)
                    .y(CONTACT_HEADER_Y),
                Placement::End,
            )
            .add(
                Tween::new(header, TransformProperty::Scale).x(sx).y(sy),
                Placement::End,
            );
        log::debug!("contact timeline now {} steps", self.contact.len());
    }

    /// Advance both timelines; "about" writes first, so "contact" wins any
    /// property both touch in the same frame.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene) {
        self.about.advance(dt, scene);
        self.contact.advance(dt, scene);
    }

    /// Whether either timeline has motion left.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.about.is_active() || self.contact.is_active()
    }

    /// The "about" timeline.
    #[must_use]
    pub fn about(&self) -> &Timeline {
        &self.about
    }

    /// The "contact" timeline.
    #[must_use]
    pub fn contact(&self) -> &Timeline {
        &self.contact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;
    use crate::options::Options;

    fn scene() -> Scene {
        Scene::from_options(&Options::default())
    }

    fn y_of(scene: &Scene, name: &str) -> f32 {
        scene.named(name).unwrap().transform.position.y
    }

    #[test]
    fn about_moves_header_and_panels_together() {
        let mut scene = scene();
        let mut director = Director::new();
        let header_start = y_of(&scene, "header");
        assert_eq!(header_start, 9.0);

        director.trigger_about(&scene);
        director.advance(0.5, &mut scene);

        let eased = EasingFunction::QuadraticOut.evaluate(0.5);
        let expected = header_start + (ABOUT_HEADER_Y - header_start) * eased;
        assert!((y_of(&scene, "header") - expected).abs() < 1e-5);
        // panels start at -1 and run over the same second
        let panel = -1.0 + (ABOUT_PANEL_Y + 1.0) * eased;
        assert!((y_of(&scene, "leftPanel") - panel).abs() < 1e-5);
        assert!((y_of(&scene, "rightPanel") - panel).abs() < 1e-5);

        director.advance(0.5, &mut scene);
        assert_eq!(y_of(&scene, "header"), ABOUT_HEADER_Y);
        assert_eq!(y_of(&scene, "leftPanel"), ABOUT_PANEL_Y);
        assert_eq!(y_of(&scene, "rightPanel"), ABOUT_PANEL_Y);
        assert!(!director.is_animating());
    }

    #[test]
    fn about_steps_finish_at_the_same_time() {
        let scene = scene();
        let mut director = Director::new();
        director.trigger_about(&scene);
        let steps: Vec<_> = director.about().steps().collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.start == 0.0 && s.end == 1.0));
    }

    #[test]
    fn double_about_queues_after_first_set() {
        let mut scene = scene();
        let mut director = Director::new();
        director.trigger_about(&scene);
        director.trigger_about(&scene);

        let steps: Vec<_> = director.about().steps().collect();
        assert_eq!(steps.len(), 6);
        let first_end = steps[..3].iter().map(|s| s.end).fold(0.0, f32::max);
        assert!(steps[3..].iter().all(|s| s.start >= first_end));

        director.advance(1.0, &mut scene);
        assert_eq!(y_of(&scene, "header"), ABOUT_HEADER_Y);
        director.advance(1.0, &mut scene);
        // second set animates from where the first left off
        assert_eq!(y_of(&scene, "header"), ABOUT_HEADER_Y);
        assert!(!director.is_animating());
    }

    #[test]
    fn retrigger_mid_run_appends_without_reset() {
        let mut scene = scene();
        let mut director = Director::new();
        director.trigger_about(&scene);
        director.advance(0.5, &mut scene);
        director.trigger_about(&scene);
        let steps: Vec<_> = director.about().steps().collect();
        assert_eq!(steps[3].start, 1.0);
        assert_eq!(director.about().playhead(), 0.5);
    }

    #[test]
    fn contact_runs_strictly_in_sequence() {
        let mut scene = scene();
        let mut director = Director::new();
        let z_scale = scene.named("header").unwrap().transform.scale.z;
        director.trigger_contact(&scene);

        let steps: Vec<_> = director.contact().steps().collect();
        assert_eq!(steps.len(), 3);
        for pair in steps.windows(2) {
            assert!(pair[1].start >= pair[0].end);
        }

        // only the rotation has moved after the first step
        director.advance(0.5, &mut scene);
        let header = scene.named("header").unwrap().transform;
        assert_eq!(header.rotation.z, CONTACT_HEADER_ROTATION_Z);
        assert_eq!(header.position.y, 9.0);

        director.advance(1.0, &mut scene);
        let header = scene.named("header").unwrap().transform;
        assert_eq!(header.position.y, CONTACT_HEADER_Y);
        assert_eq!(header.scale.x, CONTACT_HEADER_SCALE.0);
        assert_eq!(header.scale.y, CONTACT_HEADER_SCALE.1);
        assert_eq!(header.scale.z, z_scale);
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut director = Director::new();
        director.trigger_about(&Scene::new());
        director.trigger_contact(&Scene::new());
        assert!(director.about().is_empty());
        assert!(director.contact().is_empty());
    }
}
