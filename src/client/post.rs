use std::fmt;
use serde::{Serialize, Deserialize};

use crate::{
    Error,
    error::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "not started")]
    NotStarted,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::NotStarted => "not started",
            PostStatus::InProgress => "in progress",
            PostStatus::Completed  => "completed",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "not started" => Ok(PostStatus::NotStarted),
            "in progress" => Ok(PostStatus::InProgress),
            "completed"   => Ok(PostStatus::Completed),
            _ => Err(Error::Argument(format!("Unknown post status {}", value)))
        }
    }
}

impl Default for PostStatus {
    // The service defaults newly created posts to "in progress".
    fn default() -> Self {
        PostStatus::InProgress
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A deadline-bound task item scoped to one group. `name` is the name
/// of the group the post belongs to; `id` is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    id          : u64,
    name        : String,
    description : String,
    time_posted : String,
    deadline    : String,
    status      : PostStatus,
}

impl Post {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn time_posted(&self) -> &str {
        &self.time_posted
    }

    pub fn deadline(&self) -> &str {
        &self.deadline
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    /// The deadline in the local date-time form the edit input expects.
    pub fn deadline_input(&self) -> Result<String> {
        super::deadline::to_input(&self.deadline)
    }
}

#[cfg(test)]
impl Post {
    pub(crate) fn with_fields(
        id: u64,
        name: &str,
        description: &str,
        deadline: &str,
        status: PostStatus
    ) -> Self {
        Self {
            id,
            name        : name.to_string(),
            description : description.to_string(),
            time_posted : "2025-01-01 09:00:00".to_string(),
            deadline    : deadline.to_string(),
            status,
        }
    }
}
