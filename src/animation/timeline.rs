//! Persistent tween timelines.
//!
//! A [`Timeline`] is an append-only queue of [`Tween`]s laid out on one
//! time axis. Adding tweens never resets the timeline: new steps are placed
//! relative to its current end, so re-triggering queues further motion.
//! The playhead advances by frame deltas and rests at the end while idle,
//! which means steps appended to an idle timeline start on the next frame.

use glam::Vec3;

use super::easing::EasingFunction;
use crate::scene::{ObjectId, Scene, TransformProperty};

/// Duration and easing used when a tween leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenDefaults {
    /// Seconds. Default: 0.5
    pub duration: f32,
    /// Default: `power1.out`
    pub easing: EasingFunction,
}

impl Default for TweenDefaults {
    fn default() -> Self {
        Self {
            duration: 0.5,
            easing: EasingFunction::QuadraticOut,
        }
    }
}

/// Where a tween is placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Placement {
    /// At the current end (sequential).
    #[default]
    End,
    /// Offset from the current end; `Relative(-1.0)` overlaps the previous
    /// second. Clamped to time 0.
    Relative(f32),
    /// At an absolute time in seconds.
    At(f32),
}

/// A property animation on one object. Axes left as `None` keep whatever
/// value they have when the tween runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Object to animate.
    pub target: ObjectId,
    /// Transform channel to animate.
    pub property: TransformProperty,
    /// Per-axis end values.
    pub to: [Option<f32>; 3],
    /// Seconds, or the timeline default.
    pub duration: Option<f32>,
    /// Curve, or the timeline default.
    pub easing: Option<EasingFunction>,
}

impl Tween {
    /// Tween with no target values yet.
    #[must_use]
    pub fn new(target: ObjectId, property: TransformProperty) -> Self {
        Self {
            target,
            property,
            to: [None; 3],
            duration: None,
            easing: None,
        }
    }

    /// Animate the x component to `value`.
    #[must_use]
    pub fn x(mut self, value: f32) -> Self {
        self.to[0] = Some(value);
        self
    }

    /// Animate the y component to `value`.
    #[must_use]
    pub fn y(mut self, value: f32) -> Self {
        self.to[1] = Some(value);
        self
    }

    /// Animate the z component to `value`.
    #[must_use]
    pub fn z(mut self, value: f32) -> Self {
        self.to[2] = Some(value);
        self
    }

    /// Override the duration in seconds.
    #[must_use]
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Override the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// A tween resolved onto the time axis.
#[derive(Debug, Clone)]
struct ScheduledTween {
    tween: Tween,
    start: f32,
    duration: f32,
    easing: EasingFunction,
    /// Captured the first time the playhead reaches `start`.
    from: Option<Vec3>,
    finished: bool,
}

impl ScheduledTween {
    fn progress(&self, playhead: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((playhead - self.start) / self.duration).min(1.0)
    }
}

/// Read-only view of a scheduled step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    /// Object animated.
    pub target: ObjectId,
    /// Channel animated.
    pub property: TransformProperty,
    /// Start time in seconds.
    pub start: f32,
    /// End time in seconds.
    pub end: f32,
    /// Whether the step has applied its final value.
    pub finished: bool,
}

/// Append-only queue of tweens sharing one playhead.
#[derive(Debug, Clone)]
pub struct Timeline {
    name: String,
    defaults: TweenDefaults,
    /// Sorted by start time; ties keep insertion order.
    steps: Vec<ScheduledTween>,
    playhead: f32,
    end: f32,
}

impl Timeline {
    /// Empty timeline with default tween settings.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_defaults(name, TweenDefaults::default())
    }

    /// Empty timeline with custom tween defaults.
    #[must_use]
    pub fn with_defaults(name: &str, defaults: TweenDefaults) -> Self {
        Self {
            name: name.to_owned(),
            defaults,
            steps: Vec::new(),
            playhead: 0.0,
            end: 0.0,
        }
    }

    /// Queue a tween. Returns `self` for chaining.
    pub fn add(&mut self, tween: Tween, placement: Placement) -> &mut Self {
        let duration =
            tween.duration.unwrap_or(self.defaults.duration).max(0.0);
        let easing = tween.easing.unwrap_or(self.defaults.easing);
        let start = match placement {
            Placement::End => self.end,
            Placement::Relative(offset) => (self.end + offset).max(0.0),
            Placement::At(time) => time.max(0.0),
        };
        let index = self.steps.partition_point(|s| s.start <= start);
        self.steps.insert(
            index,
            ScheduledTween {
                tween,
                start,
                duration,
                easing,
                from: None,
                finished: false,
            },
        );
        self.end = self.end.max(start + duration);
        self
    }

    /// Move the playhead forward by `dt` seconds and write every running
    /// step's interpolated value into `scene`.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene) {
        self.playhead = (self.playhead + dt.max(0.0)).min(self.end);
        let playhead = self.playhead;

        for step in &mut self.steps {
            if step.finished || step.start > playhead {
                continue;
            }
            let Some(object) = scene.object_mut(step.tween.target) else {
                log::warn!(
                    "timeline {:?}: target {:?} no longer exists",
                    self.name,
                    step.tween.target
                );
                step.finished = true;
                continue;
            };
            let property = step.tween.property;
            let from = *step
                .from
                .get_or_insert_with(|| object.transform.get(property));
            let t = step.progress(playhead);
            let eased = step.easing.evaluate(t);

            let mut value = object.transform.get(property);
            for (axis, target) in step.tween.to.iter().enumerate() {
                if let Some(target) = *target {
                    value[axis] = if eased >= 1.0 {
                        target
                    } else {
                        from[axis] + (target - from[axis]) * eased
                    };
                }
            }
            object.transform.set(property, value);
            step.finished = t >= 1.0;
        }
    }

    /// Whether any step still has motion left.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.steps.iter().any(|s| !s.finished)
    }

    /// Timeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current playhead in seconds.
    #[must_use]
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// End time of the last step in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.end
    }

    /// Number of steps ever queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing was ever queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in start-time order.
    pub fn steps(&self) -> impl Iterator<Item = StepInfo> + '_ {
        self.steps.iter().map(|s| StepInfo {
            target: s.tween.target,
            property: s.tween.property,
            start: s.start,
            end: s.start + s.duration,
            finished: s.finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Material, SceneObject, Shape};

    fn scene_with_box() -> (Scene, ObjectId) {
        let mut scene = Scene::new();
        let id = scene.add(SceneObject::primitive(
            "box",
            Shape::Cuboid {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            Material::standard(0xffffff),
            Vec3::new(0.0, 2.0, 0.0),
        ));
        (scene, id)
    }

    fn y(scene: &Scene, id: ObjectId) -> f32 {
        scene.object(id).unwrap().transform.position.y
    }

    #[test]
    fn sequential_steps_follow_each_other() {
        let (_, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl
            .add(Tween::new(id, TransformProperty::Position).y(1.0), Placement::End)
            .add(Tween::new(id, TransformProperty::Rotation).z(1.0), Placement::End);
        let steps: Vec<_> = tl.steps().collect();
        assert_eq!(steps[0].start, 0.0);
        assert_eq!(steps[0].end, 0.5);
        assert_eq!(steps[1].start, 0.5);
        assert_eq!(tl.duration(), 1.0);
    }

    #[test]
    fn relative_placement_overlaps() {
        let (_, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl
            .add(
                Tween::new(id, TransformProperty::Position).y(0.0).duration(1.0),
                Placement::End,
            )
            .add(
                Tween::new(id, TransformProperty::Position).x(0.0).duration(1.0),
                Placement::Relative(-1.0),
            );
        let steps: Vec<_> = tl.steps().collect();
        assert_eq!(steps[1].start, 0.0);
        assert_eq!(tl.duration(), 1.0);
    }

    #[test]
    fn relative_placement_clamps_at_zero() {
        let (_, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Position).y(0.0),
            Placement::Relative(-3.0),
        );
        assert_eq!(tl.steps().next().unwrap().start, 0.0);
    }

    #[test]
    fn interpolates_with_easing() {
        let (mut scene, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Position)
                .y(0.0)
                .duration(1.0)
                .easing(EasingFunction::Linear),
            Placement::End,
        );
        tl.advance(0.25, &mut scene);
        assert!((y(&scene, id) - 1.5).abs() < 1e-6);
        tl.advance(0.75, &mut scene);
        assert_eq!(y(&scene, id), 0.0);
        assert!(!tl.is_active());
    }

    #[test]
    fn untouched_axes_keep_their_value() {
        let (mut scene, id) = scene_with_box();
        scene.object_mut(id).unwrap().transform.scale.z = 3.0;
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Scale).x(0.45).y(0.25),
            Placement::End,
        );
        tl.advance(1.0, &mut scene);
        let scale = scene.object(id).unwrap().transform.scale;
        assert_eq!(scale, Vec3::new(0.45, 0.25, 3.0));
    }

    #[test]
    fn playhead_rests_at_end_so_new_steps_start_immediately() {
        let (mut scene, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Position).y(0.0).duration(1.0),
            Placement::End,
        );
        tl.advance(10.0, &mut scene);
        assert_eq!(tl.playhead(), 1.0);

        let _ = tl.add(
            Tween::new(id, TransformProperty::Position).y(4.0).duration(1.0),
            Placement::End,
        );
        assert!(tl.is_active());
        tl.advance(0.5, &mut scene);
        // started from 0.0, halfway under power1.out
        assert!((y(&scene, id) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn start_value_is_captured_when_step_begins() {
        let (mut scene, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl
            .add(
                Tween::new(id, TransformProperty::Position).y(10.0).duration(1.0),
                Placement::End,
            )
            .add(
                Tween::new(id, TransformProperty::Position)
                    .y(0.0)
                    .duration(1.0)
                    .easing(EasingFunction::Linear),
                Placement::End,
            );
        tl.advance(1.0, &mut scene);
        assert_eq!(y(&scene, id), 10.0);
        tl.advance(0.5, &mut scene);
        assert!((y(&scene, id) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn finished_steps_stop_writing() {
        let (mut scene, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Position).y(0.0),
            Placement::End,
        );
        tl.advance(1.0, &mut scene);
        scene.object_mut(id).unwrap().transform.position.y = 7.0;
        tl.advance(1.0, &mut scene);
        assert_eq!(y(&scene, id), 7.0);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let (mut scene, id) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(id, TransformProperty::Position).x(5.0).duration(0.0),
            Placement::End,
        );
        tl.advance(0.0, &mut scene);
        assert_eq!(scene.object(id).unwrap().transform.position.x, 5.0);
        assert!(!tl.is_active());
    }

    #[test]
    fn missing_target_is_skipped() {
        let (mut scene, _) = scene_with_box();
        let mut tl = Timeline::new("t");
        let _ = tl.add(
            Tween::new(ObjectId(42), TransformProperty::Position).x(5.0),
            Placement::End,
        );
        tl.advance(1.0, &mut scene);
        assert!(!tl.is_active());
    }
}
