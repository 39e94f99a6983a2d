//! Output surface dimensions.
//!
//! Sizes are kept in logical pixels; the surface is allocated at
//! `size * pixel_ratio`, where the pixel ratio is the device's, capped.

/// Logical size plus effective pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    pixel_ratio: f64,
    max_pixel_ratio: f64,
}

impl Viewport {
    /// Viewport of the given logical size; `max_pixel_ratio` caps the
    /// device pixel ratio passed to [`Viewport::resize`].
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
        max_pixel_ratio: f64,
    ) -> Self {
        let mut viewport = Self {
            width: 1.0,
            height: 1.0,
            pixel_ratio: 1.0,
            max_pixel_ratio,
        };
        viewport.resize(width, height, device_pixel_ratio);
        viewport
    }

    /// Re-derive state from a new window size and device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.pixel_ratio = device_pixel_ratio.min(self.max_pixel_ratio).max(f64::MIN_POSITIVE);
    }

    /// Change the pixel-ratio cap, keeping the current size.
    pub fn set_max_pixel_ratio(&mut self, max: f64, device_pixel_ratio: f64) {
        self.max_pixel_ratio = max;
        self.resize(self.width, self.height, device_pixel_ratio);
    }

    /// Logical `(width, height)`.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    /// Effective pixel ratio, at most the configured cap.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Surface size in physical pixels, never zero.
    #[must_use]
    pub fn render_size(&self) -> (u32, u32) {
        let scale = |v: f64| ((v * self.pixel_ratio).round() as u32).max(1);
        (scale(self.width), scale(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_size_and_aspect() {
        let mut vp = Viewport::new(800.0, 600.0, 1.0, 2.0);
        vp.resize(1280.0, 720.0, 1.0);
        assert_eq!(vp.size(), (1280.0, 720.0));
        assert_eq!(vp.aspect(), (1280.0_f64 / 720.0) as f32);
        assert_eq!(vp.render_size(), (1280, 720));
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        let mut vp = Viewport::new(100.0, 50.0, 3.0, 2.0);
        assert_eq!(vp.pixel_ratio(), 2.0);
        assert_eq!(vp.render_size(), (200, 100));
        vp.resize(100.0, 50.0, 1.5);
        assert_eq!(vp.pixel_ratio(), 1.5);
        assert_eq!(vp.render_size(), (150, 75));
    }

    #[test]
    fn zero_size_is_clamped() {
        let vp = Viewport::new(0.0, 0.0, 1.0, 2.0);
        assert_eq!(vp.render_size(), (1, 1));
        assert!(vp.aspect().is_finite());
    }

    #[test]
    fn cap_change_keeps_size() {
        let mut vp = Viewport::new(400.0, 300.0, 3.0, 2.0);
        vp.set_max_pixel_ratio(1.0, 3.0);
        assert_eq!(vp.size(), (400.0, 300.0));
        assert_eq!(vp.render_size(), (400, 300));
    }
}
