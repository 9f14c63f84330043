use std::fmt;

/// A destructive operation parked until the user answers the
/// confirmation prompt. Declining performs no request and no state
/// change; requesting a new confirmation replaces an unanswered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    LeaveGroup(String),
    DeleteGroup(String),
    DeletePost(u64),
}

impl fmt::Display for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmAction::LeaveGroup(name) =>
                write!(f, "leave group {}", name),
            ConfirmAction::DeleteGroup(name) =>
                write!(f, "delete group {}", name),
            ConfirmAction::DeletePost(id) =>
                write!(f, "delete post {}", id),
        }
    }
}
