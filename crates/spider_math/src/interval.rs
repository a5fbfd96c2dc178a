/// A closed or open range of ray parameters / channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// The `[0, 1]` range used to clamp color channels.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Every parameter strictly in front of a ray origin, skipping `epsilon`.
    ///
    /// Used as the acceptance range for hits so that a ray leaving a
    /// surface does not immediately re-hit it.
    pub fn forward(epsilon: f32) -> Self {
        Self::new(epsilon, f32::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
