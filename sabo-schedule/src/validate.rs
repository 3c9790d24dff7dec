use chrono::NaiveDateTime;

/// Minute-precision wire format shared by slot values and custom proposals.
pub const DATETIME_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Invalid datetime `{0}`, expected YYYY-MM-DDTHH:MM")]
    InvalidDatetime(String),

    #[error("Proposed datetime {0} is not in the future")]
    InPast(String),
}

/// Parse a player-entered datetime, rejecting instants at or before `now`.
pub fn parse_proposed_datetime(
    input: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ScheduleError> {
    let parsed = NaiveDateTime::parse_from_str(input, DATETIME_MINUTE_FORMAT)
        .map_err(|_| ScheduleError::InvalidDatetime(input.to_string()))?;

    if parsed <= now {
        return Err(ScheduleError::InPast(input.to_string()));
    }

    Ok(parsed)
}
