use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::ticket::{Ticket, TicketFeed};
use crate::error::{AppError, AppResult};
use crate::services::TicketSource;

/// Reads a saved copy of the ticket feed from disk.
pub struct FileTicketSource {
    path: PathBuf,
}

impl FileTicketSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TicketSource for FileTicketSource {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>> {
        tracing::debug!(path = %self.path.display(), "reading tickets");

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            AppError::Fetch(format!("failed to read {}: {err}", self.path.display()))
        })?;
        let feed: TicketFeed = serde_json::from_str(&contents).map_err(|err| {
            AppError::Fetch(format!("invalid ticket file {}: {err}", self.path.display()))
        })?;

        Ok(feed.tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_feed_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickets.json");
        std::fs::write(
            &path,
            r#"{"tickets": [{"id": 1, "title": "B", "status": "open", "userId": 4, "priority": 2}]}"#,
        )
        .unwrap();

        let tickets = FileTicketSource::new(&path).fetch_tickets().await.unwrap();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].user_id, "4");
    }

    #[tokio::test]
    async fn missing_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileTicketSource::new(dir.path().join("absent.json"))
            .fetch_tickets()
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Fetch(_)));
    }

    #[tokio::test]
    async fn invalid_file_is_a_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let cases = [
            ("wrong-shape.json", r#"{"items": []}"#),
            ("broken.json", "{ not json"),
        ];
        for (name, contents) in cases {
            let path = dir.path().join(name);
            std::fs::write(&path, contents).unwrap();

            let err = FileTicketSource::new(&path)
                .fetch_tickets()
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Fetch(_)), "{name}: {err}");
            assert!(err.to_string().contains("invalid ticket file"), "{name}: {err}");
        }
    }
}
