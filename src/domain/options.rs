use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Status,
    User,
    Priority,
}

impl Grouping {
    pub const ALL: [Grouping; 3] = [Grouping::Status, Grouping::User, Grouping::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grouping::Status => "status",
            Grouping::User => "user",
            Grouping::Priority => "priority",
        }
    }
}

impl FromStr for Grouping {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "status" => Ok(Grouping::Status),
            "user" => Ok(Grouping::User),
            "priority" => Ok(Grouping::Priority),
            _ => Err(AppError::InvalidOption {
                option: "grouping",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sorting {
    #[default]
    Priority,
    Title,
}

impl Sorting {
    pub const ALL: [Sorting; 2] = [Sorting::Priority, Sorting::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sorting::Priority => "priority",
            Sorting::Title => "title",
        }
    }
}

impl FromStr for Sorting {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "priority" => Ok(Sorting::Priority),
            "title" => Ok(Sorting::Title),
            _ => Err(AppError::InvalidOption {
                option: "sorting",
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping and sorting selection handed to the pipeline on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardOptions {
    pub grouping: Grouping,
    pub sorting: Sorting,
}

impl BoardOptions {
    pub fn new(grouping: Grouping, sorting: Sorting) -> Self {
        Self { grouping, sorting }
    }
}
