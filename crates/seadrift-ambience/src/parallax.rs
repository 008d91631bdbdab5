//! Pointer-driven parallax easing.

use seadrift_core::{StyleSink, StyleValue};

/// Property holding the eased horizontal pointer component.
pub const PROP_MOUSE_X: &str = "--mouse-x";
/// Property holding the eased vertical pointer component.
pub const PROP_MOUSE_Y: &str = "--mouse-y";

/// Fraction of the remaining distance covered each frame.
const EASE: f64 = 0.05;

/// Smooths the pointer position toward a normalized target and publishes the
/// result every frame. Not constructed at all under reduced motion.
#[derive(Debug, Default)]
pub struct ParallaxTracker {
    target_x: f64,
    target_y: f64,
    current_x: f64,
    current_y: f64,
}

impl ParallaxTracker {
    /// Create a tracker at rest at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the target from raw pointer coordinates within the surface
    /// extent, normalized to [-1, 1] on each axis.
    pub fn set_target(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.target_x = (x / width.max(1.0)) * 2.0 - 1.0;
        self.target_y = (y / height.max(1.0)) * 2.0 - 1.0;
    }

    /// Ease the current vector toward the target and publish both components,
    /// rounded to four decimal places.
    pub fn tick(&mut self, sink: &mut impl StyleSink) {
        self.current_x += (self.target_x - self.current_x) * EASE;
        self.current_y += (self.target_y - self.current_y) * EASE;
        sink.set_property(PROP_MOUSE_X, StyleValue::Scalar(round4(self.current_x)));
        sink.set_property(PROP_MOUSE_Y, StyleValue::Scalar(round4(self.current_y)));
    }

    /// The current eased vector.
    pub fn current(&self) -> (f64, f64) {
        (self.current_x, self.current_y)
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use seadrift_core::StyleMap;

    #[test]
    fn one_tick_covers_five_percent() {
        let mut tracker = ParallaxTracker::new();
        let mut style = StyleMap::new();
        tracker.set_target(100.0, 100.0, 100.0, 100.0); // normalized (1, 1)
        tracker.tick(&mut style);

        assert_eq!(tracker.current(), (0.05, 0.05));
        assert_eq!(style.scalar(PROP_MOUSE_X), Some(0.05));
        assert_eq!(style.scalar(PROP_MOUSE_Y), Some(0.05));
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        let mut tracker = ParallaxTracker::new();
        let mut style = StyleMap::new();
        tracker.set_target(100.0, 100.0, 100.0, 100.0);

        let mut previous = 0.0;
        for _ in 0..1000 {
            tracker.tick(&mut style);
            let (x, _) = tracker.current();
            assert!(x >= previous);
            assert!(x <= 1.0);
            previous = x;
        }
        assert!(previous > 0.999);
    }

    #[test]
    fn published_components_are_rounded() {
        let mut tracker = ParallaxTracker::new();
        let mut style = StyleMap::new();
        tracker.set_target(75.0, 25.0, 100.0, 100.0); // normalized (0.5, -0.5)
        tracker.tick(&mut style);

        assert_eq!(style.scalar(PROP_MOUSE_X), Some(0.025));
        assert_eq!(style.scalar(PROP_MOUSE_Y), Some(-0.025));
    }

    #[test]
    fn normalization_spans_the_surface() {
        let mut tracker = ParallaxTracker::new();
        tracker.set_target(0.0, 0.0, 200.0, 50.0);
        let mut style = StyleMap::new();
        for _ in 0..2000 {
            tracker.tick(&mut style);
        }
        let (x, y) = tracker.current();
        assert!((x + 1.0).abs() < 1e-6);
        assert!((y + 1.0).abs() < 1e-6);
    }
}
