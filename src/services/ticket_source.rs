use async_trait::async_trait;

use crate::domain::ticket::Ticket;
use crate::error::AppResult;

#[async_trait]
pub trait TicketSource: Send + Sync {
    async fn fetch_tickets(&self) -> AppResult<Vec<Ticket>>;
}
