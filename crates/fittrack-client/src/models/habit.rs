use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_date, null_as_default, today};

const DEFAULT_REMINDER: &str = "09:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    #[serde(other)]
    Other,
}

impl Frequency {
    pub const CHOICES: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|f| f.as_str() == s)
            .unwrap_or(Frequency::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub frequency: Frequency,
    /// `HH:MM`
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminder_time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub next_occurrence: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitDraft {
    pub name: String,
    pub frequency: Frequency,
    pub reminder_time: String,
    pub description: String,
    pub next_occurrence: NaiveDate,
}

impl Default for HabitDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            frequency: Frequency::Daily,
            reminder_time: DEFAULT_REMINDER.to_string(),
            description: String::new(),
            next_occurrence: today(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HabitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<NaiveDate>,
}

impl HabitPatch {
    pub fn apply(&self, habit: &mut Habit) {
        if let Some(name) = &self.name {
            habit.name = name.clone();
        }
        if let Some(frequency) = self.frequency {
            habit.frequency = frequency;
        }
        if let Some(reminder_time) = &self.reminder_time {
            habit.reminder_time = reminder_time.clone();
        }
        if let Some(description) = &self.description {
            habit.description = Some(description.clone());
        }
        if let Some(next_occurrence) = self.next_occurrence {
            habit.next_occurrence = Some(next_occurrence);
        }
    }
}

/// One completion record from `GET /habits/{id}/logs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    pub id: u32,
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body for `POST /habits/{id}/log`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitLogEntry {
    pub completed: bool,
    /// RFC 3339
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HabitLogEntry {
    /// Completed now
    pub fn completed_now() -> Self {
        Self {
            completed: true,
            timestamp: chrono::Utc::now().to_rfc3339(),
            amount: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_habit_from_api() {
        let value = json!({
            "id": 2, "name": "Stretch", "frequency": "weekly", "reminder_time": "07:30",
            "description": "10 minutes", "next_occurrence": "2025-07-04",
            "created_at": "Tue, 01 Jul 2025 10:00:00 GMT", "updated_at": null
        });
        let habit: Habit = serde_json::from_value(value).unwrap();
        assert_eq!(habit.frequency, Frequency::Weekly);
        assert_eq!(habit.next_occurrence, NaiveDate::from_ymd_opt(2025, 7, 4));
    }

    #[test]
    fn test_draft_defaults() {
        let draft = HabitDraft::default();
        assert_eq!(draft.frequency, Frequency::Daily);
        assert_eq!(draft.reminder_time, "09:00");
        assert!(draft.name.is_empty());
    }

    #[test]
    fn test_log_entry_body() {
        let entry = HabitLogEntry::completed_now();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["completed"], json!(true));
        assert!(value.get("amount").is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
    }

    #[test]
    fn test_frequency_from_str() {
        assert_eq!(Frequency::from_str("monthly"), Frequency::Monthly);
        assert_eq!(Frequency::from_str("hourly"), Frequency::Other);
    }
}
