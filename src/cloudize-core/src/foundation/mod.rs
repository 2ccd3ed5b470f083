use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::{FormatDateFailed, InvalidUserName, NoUserName};
use time::{Date, OffsetDateTime, macros::format_description};

/// Name of the user running the process, as reported by the OS.
pub fn get_user_name() -> Result<String, FoundationError> {
    let user = whoami::fallible::username().map_err(NoUserName)?;
    validate_user_name(user)
}

/// A user name ends up as a single segment of a remote key.
pub fn validate_user_name(user: String) -> Result<String, FoundationError> {
    if user.is_empty() || user.contains('/') {
        Err(InvalidUserName(user))
    } else {
        Ok(user)
    }
}

/// Today's date in the local time zone, or in UTC when the local offset
/// cannot be determined (e.g. multi-threaded processes on some platforms).
pub fn get_current_date() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, FoundationError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(FormatDateFailed)
}
