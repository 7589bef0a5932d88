use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::options::{BoardOptions, Grouping, Sorting};
use crate::domain::ticket::Ticket;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Text(String),
    Priority(i64),
}

impl GroupKey {
    fn for_ticket(ticket: &Ticket, grouping: Grouping) -> Self {
        match grouping {
            Grouping::Status => GroupKey::Text(ticket.status.clone()),
            Grouping::User => GroupKey::Text(ticket.user_id.clone()),
            Grouping::Priority => GroupKey::Priority(ticket.priority),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Text(value) => f.write_str(value),
            GroupKey::Priority(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub key: GroupKey,
    pub tickets: Vec<Ticket>,
}

/// Partitions tickets by the grouping attribute.
///
/// Status and user buckets come out in first-seen order. Priority buckets come
/// out highest priority first. Tickets keep their input order inside a bucket.
pub fn group_tickets(tickets: &[Ticket], grouping: Grouping) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut slots: HashMap<GroupKey, usize> = HashMap::new();

    for ticket in tickets {
        let key = GroupKey::for_ticket(ticket, grouping);
        let slot = *slots.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                tickets: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].tickets.push(ticket.clone());
    }

    if grouping == Grouping::Priority {
        groups.sort_by(|a, b| b.key.cmp(&a.key));
    }

    groups
}

/// Reorders the tickets of every group. Group order is left untouched and the
/// input is not modified.
pub fn sort_groups(groups: &[Group], sorting: Sorting) -> Vec<Group> {
    groups
        .iter()
        .map(|group| {
            let mut tickets = group.tickets.clone();
            match sorting {
                Sorting::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
                Sorting::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            }
            Group {
                key: group.key.clone(),
                tickets,
            }
        })
        .collect()
}

pub fn build_board(tickets: &[Ticket], options: &BoardOptions) -> Vec<Group> {
    let grouped = group_tickets(tickets, options.grouping);
    sort_groups(&grouped, options.sorting)
}

/// Collation-style title order: letters first (accents and case folded away),
/// then accents (unaccented first), then case (lowercase first).
pub fn compare_titles(left: &str, right: &str) -> Ordering {
    base_letters(left)
        .cmp(&base_letters(right))
        .then_with(|| folded_case(left).cmp(&folded_case(right)))
        .then_with(|| compare_case(left, right))
}

fn base_letters(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn folded_case(title: &str) -> String {
    title.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_case(left: &str, right: &str) -> Ordering {
    left.nfd()
        .zip(right.nfd())
        .find(|(l, r)| l != r)
        .map(|(l, r)| match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => l.cmp(&r),
        })
        .unwrap_or_else(|| left.nfd().count().cmp(&right.nfd().count()))
}
