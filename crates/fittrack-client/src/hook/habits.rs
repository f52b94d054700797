//! Habit-specific hook operations: completion logging and log history.

use super::ResourceHook;
use crate::error::{ApiError, ApiResult};
use crate::models::{HabitLog, HabitLogEntry};
use crate::resource::{Habits, Resource};

const LOGS_KEY: &str = "logs";

impl ResourceHook<Habits> {
    /// Mark the habit done for today.
    pub async fn log_completion(&self, id: u32) -> bool {
        if !self.ensure_session() {
            return false;
        }
        let path = format!("{}/log", Habits::item_path(id));

        match self.client.post(&path, &HabitLogEntry::completed_now()).await {
            Ok(_) => {
                tracing::info!(id, "habit logged");
                true
            }
            Err(err) => {
                self.fail(err, "log habit");
                false
            }
        }
    }

    /// Completion history, newest first. Failures yield an empty list.
    pub async fn fetch_logs(&self, id: u32) -> Vec<HabitLog> {
        if !self.ensure_session() {
            return Vec::new();
        }
        match self.fetch_log_list(id).await {
            Ok(logs) => logs,
            Err(ApiError::Unauthorized { .. }) => {
                self.sign_out();
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "failed to load habit logs");
                Vec::new()
            }
        }
    }

    /// Logs for `id`, or `None` when the selection moved elsewhere while the
    /// request was in flight.
    pub async fn fetch_selected_logs(&self, id: u32) -> Option<Vec<HabitLog>> {
        let logs = self.fetch_logs(id).await;
        if self.state.borrow().is_selected(id) {
            Some(logs)
        } else {
            tracing::debug!(id, "habit no longer selected, dropping logs");
            None
        }
    }

    async fn fetch_log_list(&self, id: u32) -> ApiResult<Vec<HabitLog>> {
        let path = format!("{}/logs", Habits::item_path(id));
        let mut envelope = self.client.get(&path).await?;
        envelope.take(LOGS_KEY)
    }
}
