use std::collections::{HashMap, HashSet};
use log::debug;

use super::{
    group::Group,
    group_member::MemberRoster,
    post::Post,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheName {
    MyGroups,
    AllGroups,
    CreatedGroups,
    Posts,
}

impl CacheName {
    pub const ALL: [CacheName; 4] = [
        CacheName::MyGroups,
        CacheName::AllGroups,
        CacheName::CreatedGroups,
        CacheName::Posts,
    ];
}

/// A completed fetch for one cache, applied wholesale. One variant per
/// cache, so a payload cannot name a cache it does not fit.
pub(crate) enum CachePayload {
    MyGroups(Vec<Group>),
    AllGroups(Vec<Group>),
    CreatedGroups(Vec<Group>),
    Posts(Vec<Post>),
}

/// Lazily populated member counts, keyed by group name. A `pending`
/// marker keeps a second fetch for the same name from being issued
/// while the first is still in flight.
#[derive(Default)]
pub struct MemberCounts {
    counts : HashMap<String, usize>,
    pending: HashSet<String>,
}

impl MemberCounts {
    pub fn get(&self, group_name: &str) -> Option<usize> {
        self.counts.get(group_name).copied()
    }

    pub fn is_pending(&self, group_name: &str) -> bool {
        self.pending.contains(group_name)
    }

    /// Claims the fetch for a name. Returns false when the count is
    /// already cached or a fetch is already in flight.
    pub(crate) fn begin(&mut self, group_name: &str) -> bool {
        if self.counts.contains_key(group_name) ||
            self.pending.contains(group_name) {
            return false;
        }
        self.pending.insert(group_name.to_string());
        true
    }

    pub(crate) fn complete(&mut self, group_name: &str, count: usize) {
        self.pending.remove(group_name);
        self.counts.insert(group_name.to_string(), count);
    }

    pub(crate) fn abort(&mut self, group_name: &str) {
        self.pending.remove(group_name);
    }

    /// Drops a cached entry so the next projection refetches it. Joins
    /// and leaves call this for the affected group.
    pub(crate) fn invalidate(&mut self, group_name: &str) {
        self.counts.remove(group_name);
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
        self.pending.clear();
    }
}

/// The client-side copies of the server-held collections. Each of the
/// four sequence caches is replaced wholesale on refresh; there is no
/// incremental merge. `epoch` is a request token: a refresh captures it
/// before suspending, and a completion carrying a stale token is
/// dropped instead of overwriting newer state.
#[derive(Default)]
pub struct Caches {
    my_groups     : Vec<Group>,
    all_groups    : Vec<Group>,
    created_groups: Vec<Group>,
    posts         : Vec<Post>,

    member_counts : MemberCounts,
    roster        : Option<MemberRoster>,

    epoch         : u64,
}

impl Caches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn my_groups(&self) -> &[Group] {
        &self.my_groups
    }

    pub fn all_groups(&self) -> &[Group] {
        &self.all_groups
    }

    pub fn created_groups(&self) -> &[Group] {
        &self.created_groups
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn member_counts(&self) -> &MemberCounts {
        &self.member_counts
    }

    pub(crate) fn member_counts_mut(&mut self) -> &mut MemberCounts {
        &mut self.member_counts
    }

    pub fn roster(&self) -> Option<&MemberRoster> {
        self.roster.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Exact-name membership lookup against MyGroups.
    pub fn is_member(&self, group_name: &str) -> bool {
        self.my_groups.iter().any(|g| g.name() == group_name)
    }

    /// Applies a completed fetch, unless the caches were reset while it
    /// was in flight.
    pub(crate) fn store(&mut self, epoch: u64, payload: CachePayload) -> bool {
        if epoch != self.epoch {
            debug!("Dropping stale cache completion (epoch {} != {})",
                epoch, self.epoch);
            return false;
        }

        match payload {
            CachePayload::MyGroups(groups) =>
                self.my_groups = groups,
            CachePayload::AllGroups(groups) =>
                self.all_groups = groups,
            CachePayload::CreatedGroups(groups) =>
                self.created_groups = groups,
            CachePayload::Posts(posts) =>
                self.posts = posts,
        }
        true
    }

    /// Replaces the one-group roster snapshot and settles that group's
    /// member count from the roster length.
    pub(crate) fn store_roster(&mut self, epoch: u64, roster: MemberRoster) -> bool {
        if epoch != self.epoch {
            debug!("Dropping stale roster completion (epoch {} != {})",
                epoch, self.epoch);
            return false;
        }

        self.member_counts.complete(roster.group(), roster.size());
        self.roster = Some(roster);
        true
    }

    /// Local removal after a successful group deletion; no refetch.
    pub(crate) fn remove_group(&mut self, group_name: &str) {
        self.my_groups.retain(|g| g.name() != group_name);
        self.all_groups.retain(|g| g.name() != group_name);
        self.created_groups.retain(|g| g.name() != group_name);
        self.member_counts.invalidate(group_name);
        if self.roster.as_ref().map(|r| r.group() == group_name).unwrap_or(false) {
            self.roster = None;
        }
    }

    /// Clears everything and bumps the epoch so in-flight completions
    /// land on the floor.
    pub(crate) fn reset_all(&mut self) {
        self.my_groups.clear();
        self.all_groups.clear();
        self.created_groups.clear();
        self.posts.clear();
        self.member_counts.clear();
        self.roster = None;
        self.epoch += 1;
    }
}
