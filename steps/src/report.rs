use std::fmt;

use calorie_burnt::{Biometrics, Error, walking_calories_burnt};

use crate::{parse_package, step_distance};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayReport {
    pub steps: u64,
    /// Distance with fixed step length
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            steps,
            distance_km,
            calories,
        } = self;

        writeln!(f, "Количество шагов: {steps}.")?;
        writeln!(f, "Дистанция составила {distance_km:.2} км.")?;
        writeln!(f, "Вы сожгли {calories:.2} ккал.")
    }
}

/// Result of day summary. Failures are not propagated to the caller of
/// [`day_action_info`], error is kept here only for inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutcome {
    Report(DayReport),
    Empty(Error),
}

impl DayOutcome {
    pub const fn report(&self) -> Option<&DayReport> {
        match self {
            Self::Report(report) => Some(report),
            Self::Empty(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Report(_) => None,
            Self::Empty(error) => Some(error),
        }
    }

    /// Rendered report or empty string
    pub fn into_text(self) -> String {
        match self {
            Self::Report(report) => report.to_string(),
            Self::Empty(_) => String::new(),
        }
    }
}

/// Summary of `<steps>,<duration>` record. Errors are logged and turned into [`DayOutcome::Empty`].
pub fn day_summary(data: &str, biometrics: Biometrics) -> DayOutcome {
    let record = match parse_package(data) {
        Ok(record) => record,
        Err(error) => {
            tracing::warn!(%error, "failed to retrieve data");
            return DayOutcome::Empty(error);
        }
    };

    let calories = match walking_calories_burnt(
        record.steps,
        biometrics.weight_kg,
        biometrics.height_cm,
        record.duration,
    ) {
        Ok(calories) => calories,
        Err(error) => {
            tracing::warn!(%error, "failed to calculate spent calories");
            return DayOutcome::Empty(error);
        }
    };

    DayOutcome::Report(DayReport {
        steps: record.steps,
        distance_km: step_distance(record.steps),
        calories,
    })
}

/// Text summary of a day.
///
/// Never fails: on invalid record or biometrics it returns an empty string,
/// so empty result is the only failure signal.
///
/// # Params
/// - `data` - record like `1000,30m`
/// - `weight` - weight of person in kilograms
/// - `height` - height of person in centimeters
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    day_summary(data, Biometrics::new(weight, height)).into_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_burnt::{ErrorKind, RangeError};
    use rayon::prelude::*;

    #[test]
    fn test_day_report() {
        assert_eq!(
            day_action_info("1000,45m", 70.0, 175.0),
            "Количество шагов: 1000.\n\
             Дистанция составила 0.65 км.\n\
             Вы сожгли 2756.25 ккал.\n"
        );
    }

    #[test]
    fn test_day_summary_values() {
        let outcome = day_summary("2000,1h", Biometrics::new(80.0, 180.0));
        let report = outcome.report().copied().unwrap();

        assert_eq!(report.steps, 2000);
        assert!((report.distance_km - 1.3).abs() < 1e-12);
        // 2000 * 180 * 0.45 / 1000 = 162 km/h, 80 * 162 * 60 / 60 / 2
        assert!((report.calories - 6480.0).abs() < 1e-9);
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_negative_steps_are_swallowed() {
        assert_eq!(day_action_info("-5,10m", 70.0, 175.0), "");

        let outcome = day_summary("-5,10m", Biometrics::new(70.0, 175.0));
        assert_eq!(outcome, DayOutcome::Empty(Error::Range(RangeError::Steps(-5))));
        assert!(outcome.report().is_none());
    }

    #[test]
    fn test_parse_errors_are_swallowed() {
        for data in ["", "500", " 500,45m", "0,45m", "500,abc", "500,-1h", "500,бег,1h"] {
            assert_eq!(day_action_info(data, 70.0, 175.0), "", "data: {data:?}");
        }
    }

    #[test]
    fn test_calories_errors_are_swallowed() {
        let outcome = day_summary("500,45m", Biometrics::new(0.0, 175.0));

        assert_eq!(outcome.error().map(Error::kind), Some(ErrorKind::Range));
        assert_eq!(day_action_info("500,45m", 70.0, -1.0), "");
    }

    #[test]
    fn test_independent_callers() {
        let records = (1..=2000).map(|steps| format!("{steps},30m")).collect::<Vec<_>>();

        let sequential = records
            .iter()
            .map(|data| day_action_info(data, 70.0, 175.0))
            .collect::<Vec<_>>();
        let parallel = records
            .par_iter()
            .map(|data| day_action_info(data, 70.0, 175.0))
            .collect::<Vec<_>>();

        assert_eq!(sequential, parallel);
        assert!(parallel.iter().all(|this| !this.is_empty()));
    }
}
