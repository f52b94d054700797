//! Workout-specific hook operations: detail view and the exercise list on
//! the creation form.

use super::ResourceHook;
use crate::error::{ApiError, ApiResult};
use crate::models::{ExerciseEntry, WorkoutDetail};
use crate::resource::{Resource, Workouts};

const DETAIL_KEY: &str = "workout";

impl ResourceHook<Workouts> {
    /// Load a workout with its exercises into the selection.
    ///
    /// Failures are only logged; the page keeps whatever it showed before.
    pub async fn fetch_details(&self, id: u32) -> bool {
        if !self.ensure_session() {
            return false;
        }
        match self.fetch_detail(id).await {
            Ok(detail) => {
                self.select(Some(detail));
                true
            }
            Err(ApiError::Unauthorized { .. }) => {
                self.sign_out();
                false
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to load workout details");
                false
            }
        }
    }

    pub fn add_exercise(&self, entry: ExerciseEntry) {
        self.edit_draft(|draft| draft.exercises.push(entry));
    }

    /// Out-of-range indexes are ignored.
    pub fn remove_exercise(&self, index: usize) {
        self.edit_draft(|draft| {
            if index < draft.exercises.len() {
                draft.exercises.remove(index);
            }
        });
    }

    async fn fetch_detail(&self, id: u32) -> ApiResult<WorkoutDetail> {
        let mut envelope = self.client.get(&Workouts::item_path(id)).await?;
        envelope.take(DETAIL_KEY)
    }
}
