use time::Duration;

use crate::{
    Activity, ActivityKind, Biometrics, ComputedMetrics, Error, FormatError, RangeError,
};

/// Number of fields in `<steps>,<activity>,<duration>` record
pub const TRAINING_FIELDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityRecord {
    /// Always at least 1
    pub steps: u64,
    /// `None` for records which don't name activity
    pub activity: Option<Activity>,
    /// Always positive
    pub duration: Duration,
}

/// Split record into exactly `N` comma separated fields. Fields are not trimmed.
pub fn split_fields<const N: usize>(data: &str) -> Result<[&str; N], Error> {
    let fields = data.split(',').collect::<Vec<_>>();
    let found = fields.len();

    <[&str; N]>::try_from(fields)
        .map_err(|_| FormatError::FieldCount { expected: N, found }.into())
}

/// Parse steps field. Sign is permitted so negative values are reported as out of range.
pub fn steps_from_str(raw: &str) -> Result<u64, Error> {
    let steps = raw
        .parse::<i64>()
        .map_err(|source| FormatError::Steps {
            input: raw.to_owned(),
            source,
        })?;

    if steps < 1 {
        return Err(RangeError::Steps(steps).into());
    }

    u64::try_from(steps).map_err(|_| RangeError::Steps(steps).into())
}

/// Parse duration field with [`activity_duration::parse`] and check it's positive
pub fn duration_from_str(raw: &str) -> Result<Duration, Error> {
    let duration = activity_duration::parse(raw)?;

    if !duration.is_positive() {
        return Err(RangeError::Duration(duration).into());
    }

    Ok(duration)
}

impl ActivityRecord {
    /// Records without activity are counted as walking
    pub fn kind(&self) -> ActivityKind {
        self.activity
            .as_ref()
            .map_or(ActivityKind::Walking, |this| this.kind)
    }

    /// Label as it was written in the record, empty if there is no activity
    pub fn label(&self) -> &str {
        self.activity
            .as_ref()
            .map_or("", |this| this.label.as_str())
    }

    pub fn metrics(&self, biometrics: Biometrics) -> Result<ComputedMetrics, Error> {
        ComputedMetrics::new(self.kind(), self.steps, biometrics, self.duration)
    }

    /// Parse `<steps>,<activity>,<duration>` record, e.g. `3000,Бег,1h`.
    ///
    /// All fields are trimmed before parsing.
    pub fn parse_training(data: &str) -> Result<Self, Error> {
        let [steps, activity, duration] = split_fields::<TRAINING_FIELDS>(data)?;

        let steps = steps_from_str(steps.trim())?;
        let activity = activity.parse::<Activity>()?;
        let duration = duration_from_str(duration.trim())?;

        Ok(Self {
            steps,
            activity: Some(activity),
            duration,
        })
    }
}
