use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{empty_as_null, lenient_date, null_as_default, today, zero_as_null, zero_f64_as_null};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: u32,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub workout_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One exercise as returned inside a workout's detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub muscle_group: Option<String>,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `GET /workouts/{id}`: the workout plus its exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    #[serde(default)]
    pub exercises: Vec<ExerciseSummary>,
}

impl From<Workout> for WorkoutDetail {
    fn from(workout: Workout) -> Self {
        Self {
            workout,
            exercises: Vec::new(),
        }
    }
}

/// Exercise queued on the creation form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExerciseEntry {
    pub exercise_id: u32,
    /// Display only, never sent
    #[serde(skip)]
    pub exercise_name: String,
    #[serde(serialize_with = "zero_as_null")]
    pub sets: u32,
    #[serde(serialize_with = "zero_as_null")]
    pub reps: u32,
    #[serde(serialize_with = "zero_f64_as_null")]
    pub weight: f64,
    #[serde(serialize_with = "zero_as_null")]
    pub duration: u32,
    #[serde(serialize_with = "empty_as_null")]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDraft {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32,
    pub date: NaiveDate,
    pub notes: String,
    pub exercises: Vec<ExerciseEntry>,
}

impl Default for WorkoutDraft {
    fn default() -> Self {
        Self {
            workout_type: String::new(),
            duration: 0,
            date: today(),
            notes: String::new(),
            exercises: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub workout_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutPatch {
    pub fn apply(&self, workout: &mut Workout) {
        if let Some(workout_type) = &self.workout_type {
            workout.workout_type = workout_type.clone();
        }
        if let Some(duration) = self.duration {
            workout.duration = duration;
        }
        if let Some(date) = self.date {
            workout.date = Some(date);
        }
        if let Some(notes) = &self.notes {
            workout.notes = Some(notes.clone());
        }
    }
}
