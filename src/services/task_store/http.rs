// HTTP-backed task store

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::models::task::Task;

use super::{SchedulePatch, StoreError, TaskStore};

/// Client for the task-persistence backend.
///
/// `GET {base}/projects/{id}/tasks` and `PUT {base}/tasks/{id}`; dates
/// travel as ISO-8601 strings per the task wire format.
#[derive(Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

impl HttpTaskStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build task store HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl TaskStore for HttpTaskStore {
    async fn fetch_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("projects/{}/tasks", project_id)))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }
        Ok(response.json().await?)
    }

    async fn update_schedule(
        &self,
        task_id: &str,
        patch: SchedulePatch,
    ) -> Result<Task, StoreError> {
        let response = self
            .client
            .put(self.url(&format!("tasks/{}", task_id)))
            .json(&patch)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(task_id.to_string()));
        }
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_strips_trailing_slash() {
        let store = HttpTaskStore::new("http://localhost:7878/api/").unwrap();
        assert_eq!(
            store.url("tasks/t-1"),
            "http://localhost:7878/api/tasks/t-1"
        );
    }
}
