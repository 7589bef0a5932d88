pub mod file;
pub mod http;
pub mod terminal;

use std::sync::Arc;

use crate::services::TicketSource;

/// Picks the source implementation from the configured location.
pub fn ticket_source(location: &str) -> Arc<dyn TicketSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(http::HttpTicketSource::new(location))
    } else {
        Arc::new(file::FileTicketSource::new(location))
    }
}
