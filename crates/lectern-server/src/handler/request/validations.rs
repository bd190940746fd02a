//! Request validation helpers.

use std::borrow::Cow;

use validator::ValidationError;

/// Maximum length of a description field.
pub const MAX_DESCRIPTION_LEN: u64 = 4096;

/// Creates a [`ValidationError`] with a user-facing message.
pub fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Course codes are letters, digits, spaces, `-` and `_`, and start with a letter or digit.
pub fn validate_course_code(code: &str) -> Result<(), ValidationError> {
    let mut chars = code.chars();
    let leading = chars.next().is_some_and(|c| c.is_ascii_alphanumeric());
    let rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'));

    if leading && rest {
        Ok(())
    } else {
        Err(validation_error(
            "course_code",
            "must start with a letter or digit and contain only letters, digits, spaces, '-' and '_'",
        ))
    }
}

/// Rejects an end date that is not after the start date.
pub fn validate_date_order(
    starts_at: Option<jiff::Timestamp>,
    ends_at: Option<jiff::Timestamp>,
) -> Result<(), ValidationError> {
    match (starts_at, ends_at) {
        (Some(starts_at), Some(ends_at)) if ends_at <= starts_at => Err(validation_error(
            "date_order",
            "endsAt must be after startsAt",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};

    use super::*;

    #[test]
    fn course_codes() {
        assert!(validate_course_code("CS 101").is_ok());
        assert!(validate_course_code("math-2_b").is_ok());
        assert!(validate_course_code(" CS101").is_err());
        assert!(validate_course_code("CS/101").is_err());
        assert!(validate_course_code("").is_err());
    }

    #[test]
    fn date_order() -> anyhow::Result<()> {
        let now = Timestamp::now();
        let later = now.checked_add(1.hour())?;

        assert!(validate_date_order(Some(now), Some(later)).is_ok());
        assert!(validate_date_order(Some(later), Some(now)).is_err());
        assert!(validate_date_order(Some(now), Some(now)).is_err());
        assert!(validate_date_order(None, Some(now)).is_ok());
        Ok(())
    }
}
