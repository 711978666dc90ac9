//! # Steps
//!
//! Daily summary from number of steps and time spent walking.
//!
//! Record format is `<steps>,<duration>`, e.g. `1000,30m`.
//!
//! Distance in summary uses fixed step length of [`STEP_LENGTH`] meters,
//! calories are walking calories from [`calorie_burnt`].
//!
//! ```notrust
//! Количество шагов: 1000.
//! Дистанция составила 0.65 км.
//! Вы сожгли 2756.25 ккал.
//! ```

mod record;
mod report;

pub use self::{record::*, report::*};

use calorie_burnt::M_IN_KM;

/// Average length of a step in meters
pub const STEP_LENGTH: f64 = 0.65;

/// Distance in kilometers with fixed step length
#[inline]
pub fn step_distance(steps: u64) -> f64 {
    (steps as f64 * STEP_LENGTH) / M_IN_KM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_distance() {
        assert_eq!(step_distance(0), 0.0);
        assert!((step_distance(1000) - 0.65).abs() < 1e-12);
        assert!((step_distance(20_000) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_step_distance_ignores_height() {
        // Height scaled distance gives different result for the same steps
        assert!((step_distance(1000) - calorie_burnt::distance(1000, 175.0)).abs() > 1.0);
    }
}
