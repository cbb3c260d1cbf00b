use glam::Vec3;

/// One instantaneous acceleration reading.
/// Consumed immediately by the classifier, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub accel: Vec3,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            accel: Vec3::new(x, y, z),
        }
    }

    /// Build a sample from the optional axes a sensor event carries.
    /// Missing or NaN axes read as 0.
    pub fn from_axes(x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Self {
        fn axis(v: Option<f32>) -> f32 {
            v.filter(|v| !v.is_nan()).unwrap_or(0.0)
        }
        Self::new(axis(x), axis(y), axis(z))
    }

    /// Euclidean length of the acceleration vector.
    pub fn magnitude(&self) -> f32 {
        self.accel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(MotionSample::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    }

    #[test]
    fn missing_axes_read_as_zero() {
        let sample = MotionSample::from_axes(Some(3.0), None, Some(4.0));
        assert_eq!(sample.accel, Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(sample.magnitude(), 5.0);

        let empty = MotionSample::from_axes(None, None, None);
        assert_eq!(empty.magnitude(), 0.0);
    }

    #[test]
    fn nan_axis_reads_as_zero() {
        let sample = MotionSample::from_axes(Some(f32::NAN), Some(6.0), Some(8.0));
        assert_eq!(sample.magnitude(), 10.0);
    }
}
