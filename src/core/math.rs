// Math utilities for positions along the approach axis

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Absolute separation of two points on the approach axis
pub fn distance_1d(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// Check whether two points are strictly closer than `threshold`
pub fn within_range(a: f32, b: f32, threshold: f32) -> bool {
    distance_1d(a, b) < threshold
}

/// Move `current` toward `target` by at most `step`, never past it
pub fn step_toward(current: f32, target: f32, step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= step {
        target
    } else {
        current + step * delta.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_relative_eq!(distance_1d(-100.0, 500.0), 600.0);
        assert_relative_eq!(distance_1d(500.0, -100.0), 600.0);
    }

    #[test]
    fn test_within_range_is_strict() {
        assert!(within_range(0.0, 224.0, 225.0));
        assert!(!within_range(0.0, 225.0, 225.0));
        assert!(!within_range(-100.0, 500.0, 225.0));
    }

    #[test]
    fn test_step_toward_moves_in_both_directions() {
        assert_relative_eq!(step_toward(-100.0, 500.0, 3.0), -97.0);
        assert_relative_eq!(step_toward(500.0, -100.0, 3.0), 497.0);
    }

    #[test]
    fn test_step_toward_does_not_overshoot() {
        assert_relative_eq!(step_toward(499.0, 500.0, 3.0), 500.0);
        assert_relative_eq!(step_toward(500.0, 500.0, 3.0), 500.0);
    }
}
