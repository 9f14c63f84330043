use serde::Deserialize;

/// A joinable collection identified by its name. Groups are never
/// edited in place: they are created, joined, left, and deleted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    name        : String,
    description : String,
    creator_name: String,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn creator_name(&self) -> &str {
        &self.creator_name
    }

    pub fn is_created_by(&self, user_name: &str) -> bool {
        self.creator_name == user_name
    }
}

#[cfg(test)]
impl Group {
    pub(crate) fn with_fields(name: &str, description: &str, creator: &str) -> Self {
        Self {
            name        : name.to_string(),
            description : description.to_string(),
            creator_name: creator.to_string(),
        }
    }
}
