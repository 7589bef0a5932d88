use async_trait::async_trait;
use reqwest::{Client, header::ACCEPT};

use crate::domain::ticket::{Ticket, TicketFeed};
use crate::error::{AppError, AppResult};
use crate::services::TicketSource;

pub struct HttpTicketSource {
    http: Client,
    url: String,
}

impl HttpTicketSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>> {
        tracing::debug!(url = %self.url, "requesting tickets");

        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Fetch(format!("request to {} failed: {err}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Fetch(format!(
                "ticket endpoint responded with {status}: {body}"
            )));
        }

        let feed: TicketFeed = response
            .json()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to parse ticket response: {err}")))?;

        tracing::debug!(count = feed.tickets.len(), "received tickets");
        Ok(feed.tickets)
    }
}
