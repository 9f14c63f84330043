use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupMember {
    username: String,
}

impl GroupMember {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Membership snapshot for exactly one group. Viewing another group's
/// members replaces the whole snapshot; rosters are not cached across
/// groups.
#[derive(Debug, Clone)]
pub struct MemberRoster {
    group  : String,
    members: Vec<GroupMember>,
}

impl MemberRoster {
    pub(crate) fn new(group: String, members: Vec<GroupMember>) -> Self {
        Self { group, members }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
impl GroupMember {
    pub(crate) fn with_username(username: &str) -> Self {
        Self { username: username.to_string() }
    }
}
