//! Derives what the interface should show from the caches plus the
//! view state. Projection is a pure function: it never issues a fetch
//! itself, it reports which member counts are missing so the caller
//! can load them explicitly.

use super::{
    caches::Caches,
    group::Group,
    post::Post,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    MyGroups,
    AllGroups,
    Created,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    None,
    Asc,
    Desc,
}

/// Immutable view state. Every change produces a new value; nothing in
/// the projection depends on ambient mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_tab : ActiveTab,
    search_term: String,
    sort_order : SortOrder,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab : ActiveTab::MyGroups,
            search_term: String::new(),
            sort_order : SortOrder::None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn with_tab(&self, tab: ActiveTab) -> Self {
        let mut next = self.clone();
        next.active_tab = tab;
        next
    }

    pub fn with_search(&self, term: &str) -> Self {
        let mut next = self.clone();
        next.search_term = term.to_string();
        next
    }

    pub fn with_sort(&self, order: SortOrder) -> Self {
        let mut next = self.clone();
        next.sort_order = order;
        next
    }
}

/// One group row ready for display. A missing member count renders as
/// a placeholder until its lazy load completes.
#[derive(Debug)]
pub struct GroupRow<'a> {
    group       : &'a Group,
    member_count: Option<usize>,
    member      : bool,
}

impl<'a> GroupRow<'a> {
    pub fn group(&self) -> &'a Group {
        self.group
    }

    pub fn member_count(&self) -> Option<usize> {
        self.member_count
    }

    pub fn is_member(&self) -> bool {
        self.member
    }
}

pub struct GroupProjection<'a> {
    rows          : Vec<GroupRow<'a>>,
    missing_counts: Vec<String>,
}

impl<'a> GroupProjection<'a> {
    pub fn rows(&self) -> &[GroupRow<'a>] {
        &self.rows
    }

    /// Group names whose counts should be fetched now: absent from the
    /// count cache and not already in flight, de-duplicated.
    pub fn missing_counts(&self) -> &[String] {
        &self.missing_counts
    }
}

pub(crate) fn project_groups<'a>(
    caches: &'a Caches,
    view: &ViewState
) -> GroupProjection<'a> {
    let base: &[Group] = match view.active_tab() {
        ActiveTab::MyGroups  => caches.my_groups(),
        ActiveTab::AllGroups => caches.all_groups(),
        ActiveTab::Created   => caches.created_groups(),
    };

    let term = view.search_term().to_lowercase();
    let counts = caches.member_counts();

    let mut rows = Vec::new();
    let mut missing: Vec<String> = Vec::new();
    for group in base {
        if !term.is_empty() &&
            !group.name().to_lowercase().contains(&term) {
            continue;
        }

        let count = counts.get(group.name());
        if count.is_none() &&
            !counts.is_pending(group.name()) &&
            !missing.iter().any(|n| n.as_str() == group.name()) {
            missing.push(group.name().to_string());
        }

        rows.push(GroupRow {
            group,
            member_count: count,
            member: caches.is_member(group.name()),
        });
    }

    GroupProjection {
        rows,
        missing_counts: missing
    }
}

pub(crate) fn project_posts<'a>(
    caches: &'a Caches,
    view: &ViewState
) -> Vec<&'a Post> {
    let term = view.search_term().to_lowercase();

    let mut rows = caches.posts()
        .iter()
        .filter(|p| {
            term.is_empty() || p.name().to_lowercase().contains(&term)
        })
        .collect::<Vec<_>>();

    // Wire deadlines are fixed-width, lexicographic order is
    // chronological; SortOrder::None keeps arrival order.
    match view.sort_order() {
        SortOrder::None => {},
        SortOrder::Asc  => rows.sort_by(|a, b| a.deadline().cmp(b.deadline())),
        SortOrder::Desc => rows.sort_by(|a, b| b.deadline().cmp(a.deadline())),
    }
    rows
}
