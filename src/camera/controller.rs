use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Keeps the polar angle off the poles so the view never flips.
const POLAR_EPSILON: f32 = 1e-6;
/// Dolly factor per wheel step at zoom speed 1.
const DOLLY_STEP: f32 = 0.95;
/// Squared eye + target displacement below which an update counts as still.
const MOVE_EPSILON: f32 = 1e-8;

/// Radius/azimuth/polar coordinates around the orbit target, y up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    theta: f32,
    /// Polar angle from +Y.
    phi: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi = self.phi.sin();
        Vec3::new(
            self.radius * sin_phi * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * sin_phi * self.theta.cos(),
        )
    }
}

/// Orbit controller with inertial damping.
///
/// Input only accumulates pending motion; [`OrbitController::update`]
/// applies it. With damping on, each update applies `damping_factor` of the
/// pending rotation and pan and keeps the rest, so motion coasts to a stop.
/// Call `update` exactly once per rendered frame, before rendering.
#[derive(Debug, Clone)]
pub struct OrbitController {
    /// Camera driven by this controller.
    pub camera: Camera,

    theta_delta: f32,
    phi_delta: f32,
    pan_offset: Vec3,
    scale: f32,

    damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Controller around the origin using the configured camera settings.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            camera: Camera::from_options(options, aspect),
            theta_delta: 0.0,
            phi_delta: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
            damping: options.damping,
            damping_factor: options.damping_factor.clamp(0.0, 1.0),
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }

    /// Apply changed camera options without moving the camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.damping = options.damping;
        self.damping_factor = options.damping_factor.clamp(0.0, 1.0);
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
    }

    /// Set the projection aspect ratio.
    pub fn resize(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }

    /// Queue a rotation from a pointer drag of `delta` logical pixels over a
    /// viewport `viewport_height` pixels tall. A drag the full height turns
    /// one revolution.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.theta_delta -= TAU * delta.x / height * self.rotate_speed;
        self.phi_delta -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Queue a pan so the point under the cursor follows a drag of `delta`
    /// logical pixels.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        let offset = self.camera.eye - self.camera.target;
        let target_distance =
            offset.length() * (self.camera.fovy.to_radians() * 0.5).tan();
        let forward = -offset.normalize_or_zero();
        let right = forward.cross(self.camera.up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = 2.0 * target_distance / height * self.pan_speed;
        self.pan_offset += -right * (delta.x * scale) + up * (delta.y * scale);
    }

    /// Queue a dolly. Positive `steps` move toward the target.
    pub fn zoom(&mut self, steps: f32) {
        self.scale *= DOLLY_STEP.powf(self.zoom_speed * steps);
    }

    /// Apply pending motion to the camera and decay it. Returns whether the
    /// eye or target moved noticeably.
    pub fn update(&mut self) -> bool {
        let before = (self.camera.eye, self.camera.target);
        let target = self.camera.target;
        let mut spherical = Spherical::from_offset(self.camera.eye - target);

        let factor = if self.damping { self.damping_factor } else { 1.0 };
        spherical.theta += self.theta_delta * factor;
        spherical.phi += self.phi_delta * factor;
        spherical.phi = spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        spherical.radius = (spherical.radius * self.scale)
            .clamp(self.min_distance, self.max_distance);

        let target = target + self.pan_offset * factor;
        self.camera.target = target;
        self.camera.eye = target + spherical.to_offset();

        if self.damping {
            let keep = 1.0 - self.damping_factor;
            self.theta_delta *= keep;
            self.phi_delta *= keep;
            self.pan_offset *= keep;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let moved = (self.camera.eye - before.0).length_squared()
            + (self.camera.target - before.1).length_squared();
        moved > MOVE_EPSILON
    }

    /// Distance from eye to target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        (self.camera.eye - self.camera.target).length()
    }

    /// Current azimuth around +Y in radians.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        Spherical::from_offset(self.camera.eye - self.camera.target).theta
    }

    /// Current polar angle from +Y in radians.
    #[must_use]
    pub fn polar(&self) -> f32 {
        Spherical::from_offset(self.camera.eye - self.camera.target).phi
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn controller(damping: bool) -> OrbitController {
        let options = CameraOptions {
            damping,
            ..CameraOptions::default()
        };
        OrbitController::new(&options, 1.0)
    }

    #[test]
    fn starts_on_positive_z() {
        let c = controller(true);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 20.0));
        assert!(c.azimuth().abs() < 1e-6);
        assert!((c.polar() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn update_without_input_is_stationary() {
        let mut c = controller(true);
        for _ in 0..10 {
            assert!(!c.update());
        }
        assert!((c.distance() - 20.0).abs() < 1e-4);
        assert!(c.camera.eye.abs_diff_eq(Vec3::new(0.0, 0.0, 20.0), 1e-4));
    }

    #[test]
    fn damped_rotation_coasts_and_decays() {
        let mut c = controller(true);
        c.rotate(Vec2::new(-100.0, 0.0), 600.0);
        let total = TAU * 100.0 / 600.0;

        let mut last = c.azimuth();
        let mut steps = Vec::new();
        for _ in 0..5 {
            assert!(c.update());
            let now = c.azimuth();
            steps.push(now - last);
            last = now;
        }
        assert!((steps[0] - total * 0.05).abs() < 1e-5);
        // each frame moves 95% as far as the previous one
        for pair in steps.windows(2) {
            assert!((pair[1] / pair[0] - 0.95).abs() < 1e-3);
        }
        assert!((c.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn damped_rotation_converges_to_full_drag() {
        let mut c = controller(true);
        c.rotate(Vec2::new(-60.0, 0.0), 600.0);
        let total = TAU * 60.0 / 600.0;
        for _ in 0..600 {
            let _ = c.update();
        }
        assert!((c.azimuth() - total).abs() < 1e-3);
    }

    #[test]
    fn undamped_rotation_applies_at_once() {
        let mut c = controller(false);
        c.rotate(Vec2::new(-150.0, 0.0), 600.0);
        assert!(c.update());
        assert!((c.azimuth() - FRAC_PI_2).abs() < 1e-4);
        assert!(!c.update());
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut c = controller(false);
        c.rotate(Vec2::new(0.0, 10_000.0), 100.0);
        let _ = c.update();
        assert!(c.camera.eye.is_finite());
        // pinned just short of straight overhead
        assert!(c.camera.eye.y > 19.9);
    }

    #[test]
    fn zoom_scales_distance() {
        let mut c = controller(true);
        c.zoom(1.0);
        let _ = c.update();
        assert!((c.distance() - 19.0).abs() < 1e-3);
        c.zoom(-1.0);
        let _ = c.update();
        assert!((c.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_target_with_eye() {
        let mut c = controller(false);
        c.pan(Vec2::new(-100.0, 0.0), 600.0);
        let _ = c.update();
        assert!(c.camera.target.x > 0.0);
        assert!((c.camera.eye.x - c.camera.target.x).abs() < 1e-4);
        assert!((c.distance() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn resize_sets_aspect() {
        let mut c = controller(true);
        c.resize(16.0 / 9.0);
        assert_eq!(c.camera.aspect, 16.0 / 9.0);
    }
}
