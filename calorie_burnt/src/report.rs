use std::fmt;

use crate::{ActivityRecord, Biometrics, ComputedMetrics, TrainingError, hours};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingReport {
    pub record: ActivityRecord,
    pub metrics: ComputedMetrics,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ComputedMetrics {
            distance_km,
            mean_speed_kmh,
            calories,
        } = self.metrics;

        writeln!(f, "Тип тренировки: {}", self.record.label())?;
        writeln!(f, "Длительность: {:.2} ч.", hours(self.record.duration))?;
        writeln!(f, "Дистанция: {distance_km:.2} км.")?;
        writeln!(f, "Скорость: {mean_speed_kmh:.2} км/ч")?;
        writeln!(f, "Сожгли калорий: {calories:.2}")
    }
}

/// Parse `<steps>,<activity>,<duration>` record and calculate its metrics
pub fn training_report(
    data: &str,
    biometrics: Biometrics,
) -> Result<TrainingReport, TrainingError> {
    let record = ActivityRecord::parse_training(data).map_err(TrainingError::Parse)?;
    let metrics = record
        .metrics(biometrics)
        .map_err(TrainingError::Calories)?;

    tracing::debug!(
        steps = record.steps,
        activity = record.label(),
        distance_km = metrics.distance_km,
        calories = metrics.calories,
        "training metrics calculated"
    );

    Ok(TrainingReport { record, metrics })
}

/// Text report of training.
///
/// # Params
/// - `data` - record like `1000,бег,30m`
/// - `weight` - weight of person in kilograms
/// - `height` - height of person in centimeters
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String, TrainingError> {
    training_report(data, Biometrics::new(weight, height)).map(|this| this.to_string())
}
