//! REST Resources
//!
//! Each resource type names its endpoint, the envelope key its list comes back
//! under, and the typed shapes it exchanges with the server.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    Goal, GoalDraft, GoalPatch, Habit, HabitDraft, HabitPatch, Workout, WorkoutDetail,
    WorkoutDraft, WorkoutPatch,
};

/// A server-managed entity type exposed as `/{PATH}` and `/{PATH}/{id}`.
pub trait Resource: Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    /// List element
    type Item: Debug + Clone + PartialEq + DeserializeOwned + Send + Sync + 'static;
    /// What the detail view holds; usually the item itself
    type Selected: Debug + Clone + PartialEq + Send + Sync + 'static;
    /// Creation form state; `Default` is the empty form
    type Draft: Debug + Clone + PartialEq + Default + Serialize + Send + Sync + 'static;
    /// Partial update payload
    type Patch: Debug + Clone + Serialize + Send + Sync + 'static;

    const PATH: &'static str;
    const LIST_KEY: &'static str;
    /// Human name used in prompts and error messages
    const SINGULAR: &'static str;

    fn item_id(item: &Self::Item) -> u32;

    fn selected_id(selected: &Self::Selected) -> u32;

    fn select(item: &Self::Item) -> Self::Selected;

    fn apply_patch(selected: &mut Self::Selected, patch: &Self::Patch);

    fn item_path(id: u32) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Goals;

impl Resource for Goals {
    type Item = Goal;
    type Selected = Goal;
    type Draft = GoalDraft;
    type Patch = GoalPatch;

    const PATH: &'static str = "goals";
    const LIST_KEY: &'static str = "goals";
    const SINGULAR: &'static str = "goal";

    fn item_id(item: &Goal) -> u32 {
        item.id
    }

    fn selected_id(selected: &Goal) -> u32 {
        selected.id
    }

    fn select(item: &Goal) -> Goal {
        item.clone()
    }

    fn apply_patch(selected: &mut Goal, patch: &GoalPatch) {
        patch.apply(selected);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Workouts;

impl Resource for Workouts {
    type Item = Workout;
    type Selected = WorkoutDetail;
    type Draft = WorkoutDraft;
    type Patch = WorkoutPatch;

    const PATH: &'static str = "workouts";
    const LIST_KEY: &'static str = "workouts";
    const SINGULAR: &'static str = "workout";

    fn item_id(item: &Workout) -> u32 {
        item.id
    }

    fn selected_id(selected: &WorkoutDetail) -> u32 {
        selected.workout.id
    }

    fn select(item: &Workout) -> WorkoutDetail {
        WorkoutDetail::from(item.clone())
    }

    fn apply_patch(selected: &mut WorkoutDetail, patch: &WorkoutPatch) {
        patch.apply(&mut selected.workout);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Habits;

impl Resource for Habits {
    type Item = Habit;
    type Selected = Habit;
    type Draft = HabitDraft;
    type Patch = HabitPatch;

    const PATH: &'static str = "habits";
    const LIST_KEY: &'static str = "habits";
    const SINGULAR: &'static str = "habit";

    fn item_id(item: &Habit) -> u32 {
        item.id
    }

    fn selected_id(selected: &Habit) -> u32 {
        selected.id
    }

    fn select(item: &Habit) -> Habit {
        item.clone()
    }

    fn apply_patch(selected: &mut Habit, patch: &HabitPatch) {
        patch.apply(selected);
    }
}
