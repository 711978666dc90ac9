use calorie_burnt::{
    ActivityRecord, Error, FormatError, duration_from_str, split_fields, steps_from_str,
};

/// Number of fields in `<steps>,<duration>` record
pub const DAY_FIELDS: usize = 2;

/// Parse `<steps>,<duration>` record, e.g. `1000,30m`.
///
/// Unlike [`ActivityRecord::parse_training`] steps field is not trimmed and
/// surrounding whitespace is a format error. Duration field is trimmed.
pub fn parse_package(data: &str) -> Result<ActivityRecord, Error> {
    let [steps, duration] = split_fields::<DAY_FIELDS>(data)?;

    if steps != steps.trim() {
        return Err(FormatError::StepsWhitespace(steps.to_owned()).into());
    }

    Ok(ActivityRecord {
        steps: steps_from_str(steps)?,
        activity: None,
        duration: duration_from_str(duration.trim())?,
    })
}
