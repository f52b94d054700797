//! Models
//!
//! Data structures matching the API's JSON, plus the drafts and patches the
//! frontend sends back.

mod goal;
mod habit;
mod workout;

pub use goal::{Goal, GoalDraft, GoalPatch, GoalType};
pub use habit::{Frequency, Habit, HabitDraft, HabitLog, HabitLogEntry, HabitPatch};
pub use workout::{ExerciseEntry, ExerciseSummary, Workout, WorkoutDetail, WorkoutDraft, WorkoutPatch};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The API renders missing dates as `null` or the literal string `"None"`;
/// anything that is not `YYYY-MM-DD` reads as absent.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let date_part = s.get(..10).unwrap_or(&s);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }))
}

/// Nullable columns arrive as `null`; read them as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unset numeric form fields go out as `null`.
fn zero_as_null<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value == 0 {
        serializer.serialize_none()
    } else {
        serializer.serialize_u32(*value)
    }
}

fn zero_f64_as_null<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *value == 0.0 {
        serializer.serialize_none()
    } else {
        serializer.serialize_f64(*value)
    }
}

fn empty_as_null<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_empty() {
        serializer.serialize_none()
    } else {
        serializer.serialize_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Dated {
        #[serde(default, deserialize_with = "lenient_date")]
        date: Option<NaiveDate>,
    }

    fn parse(json: &str) -> Option<NaiveDate> {
        serde_json::from_str::<Dated>(json).unwrap().date
    }

    #[derive(Deserialize)]
    struct Counted {
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn test_lenient_date() {
        assert_eq!(parse(r#"{"date":"2025-12-31"}"#), NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(parse(r#"{"date":"2025-12-31T00:00:00"}"#), NaiveDate::from_ymd_opt(2025, 12, 31));
        assert_eq!(parse(r#"{"date":"None"}"#), None);
        assert_eq!(parse(r#"{"date":null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
    }

    #[test]
    fn test_null_as_default() {
        let counted: Counted = serde_json::from_str(r#"{"count":null,"label":null}"#).unwrap();
        assert_eq!(counted.count, 0);
        assert_eq!(counted.label, "");

        let counted: Counted = serde_json::from_str(r#"{"count":4,"label":"run"}"#).unwrap();
        assert_eq!(counted.count, 4);
        assert_eq!(counted.label, "run");

        let counted: Counted = serde_json::from_str("{}").unwrap();
        assert_eq!(counted.count, 0);
    }
}
