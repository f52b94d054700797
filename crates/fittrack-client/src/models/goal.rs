use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{lenient_date, null_as_default};

/// Goal category; unknown values from the server read as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    Fitness,
    Weight,
    Habit,
    Skill,
    #[serde(other)]
    Other,
}

impl GoalType {
    pub const ALL: [GoalType; 5] = [
        GoalType::Fitness,
        GoalType::Weight,
        GoalType::Habit,
        GoalType::Skill,
        GoalType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Fitness => "fitness",
            GoalType::Weight => "weight",
            GoalType::Habit => "habit",
            GoalType::Skill => "skill",
            GoalType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .unwrap_or(GoalType::Other)
    }

    /// Accent colour used when rendering goals of this type
    pub fn color(&self) -> &'static str {
        match self {
            GoalType::Fitness => "cyan",
            GoalType::Weight => "purple",
            GoalType::Habit => "blue",
            GoalType::Skill => "emerald",
            GoalType::Other => "violet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub user_id: u32,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub goal_type: GoalType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub progress: u32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Goal {
    /// Progress as a whole percentage, capped at 100.
    pub fn progress_percentage(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        let pct = (f64::from(self.progress) / f64::from(self.target) * 100.0).round();
        (pct as u32).min(100)
    }

    /// Days left until the deadline (negative once it has passed).
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.deadline.map(|deadline| (deadline - today).num_days())
    }
}

/// Creation form state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalDraft {
    pub name: String,
    pub goal_type: GoalType,
    pub target: u32,
    pub progress: u32,
    pub deadline: Option<NaiveDate>,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            goal_type: GoalType::Fitness,
            target: 0,
            progress: 0,
            deadline: None,
        }
    }
}

/// Partial update; only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl GoalPatch {
    pub fn progress(progress: u32) -> Self {
        Self {
            progress: Some(progress),
            ..Default::default()
        }
    }

    pub fn apply(&self, goal: &mut Goal) {
        if let Some(name) = &self.name {
            goal.name = name.clone();
        }
        if let Some(goal_type) = self.goal_type {
            goal.goal_type = goal_type;
        }
        if let Some(target) = self.target {
            goal.target = target;
        }
        if let Some(progress) = self.progress {
            goal.progress = progress;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = Some(deadline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn goal(progress: u32, target: u32) -> Goal {
        Goal {
            id: 1,
            user_id: 7,
            name: "Run 5k".into(),
            goal_type: GoalType::Fitness,
            target,
            progress,
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(goal(0, 5).progress_percentage(), 0);
        assert_eq!(goal(1, 3).progress_percentage(), 33);
        assert_eq!(goal(2, 3).progress_percentage(), 67);
        assert_eq!(goal(9, 5).progress_percentage(), 100);
        assert_eq!(goal(3, 0).progress_percentage(), 0);
    }

    #[test]
    fn test_days_remaining() {
        let g = goal(0, 5);
        assert_eq!(g.days_remaining(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()), Some(30));
        assert_eq!(g.days_remaining(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()), Some(-2));
    }

    #[test]
    fn test_goal_type_strings_and_colors() {
        assert_eq!(GoalType::from_str("weight"), GoalType::Weight);
        assert_eq!(GoalType::from_str("cardio"), GoalType::Other);
        assert_eq!(GoalType::Skill.color(), "emerald");
        let parsed: GoalType = serde_json::from_value(json!("cardio")).unwrap();
        assert_eq!(parsed, GoalType::Other);
    }

    #[test]
    fn test_goal_from_api() {
        let value = json!({
            "id": 4, "user_id": 7, "name": "Lose weight", "type": "weight",
            "target": 10, "progress": 2, "deadline": "None",
            "created_at": "Tue, 01 Jul 2025 10:00:00 GMT", "updated_at": null
        });
        let goal: Goal = serde_json::from_value(value).unwrap();
        assert_eq!(goal.goal_type, GoalType::Weight);
        assert_eq!(goal.deadline, None);
        assert_eq!(goal.updated_at, None);
    }

    #[test]
    fn test_draft_body_matches_create_endpoint() {
        let draft = GoalDraft {
            name: "Run 5k".into(),
            target: 5,
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "name": "Run 5k", "goal_type": "fitness", "target": 5,
                "progress": 0, "deadline": "2025-12-31"
            })
        );
    }

    #[test]
    fn test_patch_sends_only_set_fields() {
        let patch = GoalPatch::progress(3);
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "progress": 3 }));

        let mut g = goal(0, 5);
        patch.apply(&mut g);
        assert_eq!(g.progress, 3);
        assert_eq!(g.name, "Run 5k");
    }
}
