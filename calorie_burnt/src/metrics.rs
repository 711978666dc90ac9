//! Distance, speed and calories from step count.
//!
//! Length of a step is scaled from height:
//!
//! ```notrust
//! distance = steps * height * 0.45 / 1000
//! speed    = distance / hours
//! calories = weight * speed * minutes / 60
//! ```
//!
//! Walking burns half of what running burns with the same speed.

use time::Duration;

use crate::{Error, RangeError};

/// Coefficient to calculate step length based on height
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
/// Meters in one kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour
pub const MIN_IN_H: f64 = 60.0;
/// Walking calories relative to running calories
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

const SECONDS_IN_MINUTE: f64 = 60.0;

/// Body measurements provided with every calculation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Biometrics {
    pub const fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

#[inline]
pub fn minutes(duration: Duration) -> f64 {
    duration.as_seconds_f64() / SECONDS_IN_MINUTE
}

#[inline]
pub fn hours(duration: Duration) -> f64 {
    minutes(duration) / MIN_IN_H
}

/// Distance in kilometers.
///
/// # Params
/// - `steps` - number of steps
/// - `height` - height of person in centimeters
#[inline]
pub fn distance(steps: u64, height: f64) -> f64 {
    (steps as f64 * height * STEP_LENGTH_COEFFICIENT) / M_IN_KM
}

/// Mean speed in km/h. Returns `0.0` for non positive duration.
pub fn mean_speed(steps: u64, height: f64, duration: Duration) -> f64 {
    if !duration.is_positive() {
        return 0.0;
    }

    distance(steps, height) / hours(duration)
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), RangeError> {
    // NaN is rejected as well
    if value > 0.0 {
        return Ok(());
    }

    Err(RangeError::NonPositive { name, value })
}

/// Calories burnt during running.
///
/// # Params
/// - `steps` - number of steps
/// - `weight` - weight of person in kilograms
/// - `height` - height of person in centimeters
/// - `duration` - duration of training
pub fn running_calories_burnt(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, Error> {
    if steps == 0 {
        return Err(RangeError::Steps(0).into());
    }

    ensure_positive("weight", weight)?;
    ensure_positive("height", height)?;

    if !duration.is_positive() {
        return Err(RangeError::Duration(duration).into());
    }

    let speed = mean_speed(steps, height, duration);

    Ok((weight * speed * minutes(duration)) / MIN_IN_H)
}

/// Calories burnt during walking. Same params as [`running_calories_burnt`].
pub fn walking_calories_burnt(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, Error> {
    Ok(running_calories_burnt(steps, weight, height, duration)? * WALKING_CALORIES_COEFFICIENT)
}

impl ComputedMetrics {
    /// Metrics with height scaled step length. Calories are scaled by activity kind.
    pub fn new(
        kind: crate::ActivityKind,
        steps: u64,
        Biometrics {
            weight_kg,
            height_cm,
        }: Biometrics,
        duration: Duration,
    ) -> Result<Self, Error> {
        let calories = running_calories_burnt(steps, weight_kg, height_cm, duration)?
            * kind.calories_coefficient();

        Ok(Self {
            distance_km: distance(steps, height_cm),
            mean_speed_kmh: mean_speed(steps, height_cm, duration),
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivityKind, ErrorKind};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON * expected.abs().max(1.0),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_distance() {
        assert_close(distance(1000, 175.0), 78.75);
        assert_close(distance(1, 100.0), 0.045);
        assert_eq!(distance(0, 175.0), 0.0);
    }

    #[test]
    fn test_mean_speed() {
        assert_close(mean_speed(1000, 175.0, Duration::minutes(30)), 157.5);
        assert_close(mean_speed(2000, 180.0, Duration::hours(2)), 81.0);
    }

    #[test]
    fn test_mean_speed_non_positive_duration() {
        assert_eq!(mean_speed(1000, 175.0, Duration::ZERO), 0.0);
        assert_eq!(mean_speed(1000, 175.0, Duration::minutes(-5)), 0.0);
    }

    #[test]
    fn test_speed_by_time_is_distance() {
        let durations = [
            Duration::seconds(1),
            Duration::minutes(7),
            Duration::minutes(45),
            Duration::minutes(90),
            Duration::hours(5),
        ];

        for steps in [1, 17, 500, 12_345, 100_000] {
            for height in [120.0, 175.0, 201.5] {
                for duration in durations {
                    assert_close(
                        mean_speed(steps, height, duration) * hours(duration),
                        distance(steps, height),
                    );
                }
            }
        }
    }

    #[test]
    fn test_running_calories() {
        let calories = running_calories_burnt(1000, 70.0, 175.0, Duration::minutes(30)).unwrap();

        assert_close(calories, 5512.5);
    }

    #[test]
    fn test_walking_is_half_of_running() {
        for (steps, weight, height, duration) in [
            (1, 40.0, 150.0, Duration::seconds(30)),
            (1000, 70.0, 175.0, Duration::minutes(30)),
            (8_000, 95.5, 190.0, Duration::minutes(80)),
            (25_000, 62.3, 168.0, Duration::hours(3)),
        ] {
            let running = running_calories_burnt(steps, weight, height, duration).unwrap();
            let walking = walking_calories_burnt(steps, weight, height, duration).unwrap();

            assert_close(walking, running * 0.5);
        }
    }

    #[test]
    fn test_non_positive_input() {
        let duration = Duration::minutes(30);

        let cases = [
            running_calories_burnt(0, 70.0, 175.0, duration),
            running_calories_burnt(1000, 0.0, 175.0, duration),
            running_calories_burnt(1000, -70.0, 175.0, duration),
            running_calories_burnt(1000, f64::NAN, 175.0, duration),
            running_calories_burnt(1000, 70.0, 0.0, duration),
            running_calories_burnt(1000, 70.0, 175.0, Duration::ZERO),
            running_calories_burnt(1000, 70.0, 175.0, -duration),
        ];

        for result in cases {
            assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Range));
        }
    }

    #[test]
    fn test_walking_propagates_error() {
        assert_eq!(
            walking_calories_burnt(1000, 70.0, -1.0, Duration::minutes(30)),
            Err(Error::Range(RangeError::NonPositive {
                name: "height",
                value: -1.0
            }))
        );
    }

    #[test]
    fn test_training_metrics() {
        let biometrics = Biometrics::new(70.0, 175.0);
        let duration = Duration::minutes(30);

        let running =
            ComputedMetrics::new(ActivityKind::Running, 1000, biometrics, duration).unwrap();
        let walking =
            ComputedMetrics::new(ActivityKind::Walking, 1000, biometrics, duration).unwrap();

        assert_close(running.distance_km, 78.75);
        assert_close(running.mean_speed_kmh, 157.5);
        assert_close(running.calories, 5512.5);

        assert_eq!(walking.distance_km, running.distance_km);
        assert_eq!(walking.mean_speed_kmh, running.mean_speed_kmh);
        assert_close(walking.calories, 2756.25);
    }
}
