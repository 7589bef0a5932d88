use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "identifier")]
    pub id: String,
    pub title: String,
    pub status: String,
    #[serde(rename = "userId", deserialize_with = "identifier")]
    pub user_id: String,
    pub priority: i64,
}

/// Payload returned by the ticket endpoint. Other top-level fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TicketFeed {
    pub tickets: Vec<Ticket>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Text(String),
    Number(i64),
}

// Identifiers show up both as "CAM-1" and as bare integers depending on the feed.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawIdentifier::deserialize(deserializer)? {
        RawIdentifier::Text(value) => value,
        RawIdentifier::Number(value) => value.to_string(),
    })
}

/// Two open tickets (ids 1 and 2) and one done ticket (id 3), each with its own user.
#[cfg(test)]
pub(crate) fn sample_tickets() -> Vec<Ticket> {
    [("1", "B", "open", 2), ("2", "A", "open", 5), ("3", "C", "done", 1)]
        .into_iter()
        .map(|(id, title, status, priority)| Ticket {
            id: id.to_string(),
            title: title.to_string(),
            status: status.to_string(),
            user_id: format!("usr-{id}"),
            priority,
        })
        .collect()
}
