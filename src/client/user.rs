use serde::Deserialize;

/// The authenticated session subject, resolved once at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    name: String,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }
}