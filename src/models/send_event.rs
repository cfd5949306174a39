use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::template::TriggerType;

/// Audit record for a completed hand-off. Written once when a dispatch
/// carries a job id, never read back for control flow.
#[derive(Debug, Clone, Serialize)]
pub struct SendEvent {
    pub id: Uuid,
    pub phone_number: String,
    pub job_id: String,
    pub trigger_type: TriggerType,
    pub message_length: usize,
    pub created_at: DateTime<Utc>,
}

impl SendEvent {
    pub fn new(
        phone_number: String,
        job_id: String,
        trigger_type: TriggerType,
        message_length: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number,
            job_id,
            trigger_type,
            message_length,
            created_at: Utc::now(),
        }
    }
}

/// Append-only in-memory send history.
#[derive(Debug, Default)]
pub struct SendEventLog {
    events: Vec<SendEvent>,
}

impl SendEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: SendEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[SendEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
