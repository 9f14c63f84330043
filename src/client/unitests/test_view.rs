use crate::client::{
    caches::{Caches, CachePayload},
    group::Group,
    post::{Post, PostStatus},
    view::{self, ActiveTab, SortOrder, ViewState},
};

fn caches_with_groups() -> Caches {
    let mut caches = Caches::new();
    let epoch = caches.epoch();

    caches.store(epoch, CachePayload::AllGroups(vec![
        Group::with_fields("algo", "study group", "alice"),
        Group::with_fields("Algorithms II", "follow-up", "alice"),
        Group::with_fields("chess", "casual play", "bob"),
    ]));
    caches.store(epoch, CachePayload::MyGroups(vec![
        Group::with_fields("chess", "casual play", "bob"),
    ]));
    caches.store(epoch, CachePayload::CreatedGroups(vec![
        Group::with_fields("chess", "casual play", "bob"),
    ]));
    caches
}

fn caches_with_posts() -> Caches {
    let mut caches = Caches::new();
    let epoch = caches.epoch();

    caches.store(epoch, CachePayload::Posts(vec![
        Post::with_fields(1, "algo", "hw2", "2025-02-01 12:00:00", PostStatus::NotStarted),
        Post::with_fields(2, "chess", "club night", "2025-01-05 19:30:00", PostStatus::InProgress),
        Post::with_fields(3, "algo", "hw1", "2025-01-10 18:00:00", PostStatus::Completed),
    ]));
    caches
}

#[test]
fn test_tab_selects_base_collection() {
    let caches = caches_with_groups();

    let view = ViewState::new().with_tab(ActiveTab::AllGroups);
    assert_eq!(view::project_groups(&caches, &view).rows().len(), 3);

    let view = view.with_tab(ActiveTab::MyGroups);
    assert_eq!(view::project_groups(&caches, &view).rows().len(), 1);

    let view = view.with_tab(ActiveTab::Created);
    assert_eq!(view::project_groups(&caches, &view).rows().len(), 1);
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let caches = caches_with_groups();
    let view = ViewState::new()
        .with_tab(ActiveTab::AllGroups)
        .with_search("ALGO");

    let projection = view::project_groups(&caches, &view);
    let names = projection.rows()
        .iter()
        .map(|r| r.group().name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["algo", "Algorithms II"]);
}

#[test]
fn test_empty_term_yields_full_collection() {
    let caches = caches_with_groups();
    let view = ViewState::new().with_tab(ActiveTab::AllGroups);

    let projection = view::project_groups(&caches, &view);
    assert_eq!(projection.rows().len(), caches.all_groups().len());
}

#[test]
fn test_rows_carry_membership() {
    let caches = caches_with_groups();
    let view = ViewState::new().with_tab(ActiveTab::AllGroups);

    for row in view::project_groups(&caches, &view).rows() {
        assert_eq!(row.is_member(), row.group().name() == "chess");
    }
}

#[test]
fn test_missing_counts_reported_once() {
    let mut caches = caches_with_groups();
    caches.member_counts_mut().begin("algo");
    caches.member_counts_mut().complete("algo", 4);
    caches.member_counts_mut().begin("chess"); // in flight

    let view = ViewState::new().with_tab(ActiveTab::AllGroups);
    let projection = view::project_groups(&caches, &view);

    // cached and in-flight names are excluded
    assert_eq!(projection.missing_counts(), ["Algorithms II"]);

    let algo = projection.rows()
        .iter()
        .find(|r| r.group().name() == "algo")
        .unwrap();
    assert_eq!(algo.member_count(), Some(4));

    let chess = projection.rows()
        .iter()
        .find(|r| r.group().name() == "chess")
        .unwrap();
    assert_eq!(chess.member_count(), None);
}

#[test]
fn test_posts_filter() {
    let caches = caches_with_posts();
    let view = ViewState::new().with_search("alg");

    let rows = view::project_posts(&caches, &view);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|p| p.name() == "algo"));
}

#[test]
fn test_posts_sort_none_preserves_arrival_order() {
    let caches = caches_with_posts();
    let view = ViewState::new();

    let ids = view::project_posts(&caches, &view)
        .iter()
        .map(|p| p.id())
        .collect::<Vec<_>>();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn test_posts_sort_by_deadline() {
    let caches = caches_with_posts();

    let view = ViewState::new().with_sort(SortOrder::Asc);
    let rows = view::project_posts(&caches, &view);
    for pair in rows.windows(2) {
        assert!(pair[0].deadline() <= pair[1].deadline());
    }
    assert_eq!(rows[0].id(), 2);

    let view = view.with_sort(SortOrder::Desc);
    let rows = view::project_posts(&caches, &view);
    for pair in rows.windows(2) {
        assert!(pair[0].deadline() >= pair[1].deadline());
    }
    assert_eq!(rows[0].id(), 1);
}

#[test]
fn test_view_state_updates_produce_new_values() {
    let view = ViewState::new();
    let searched = view.with_search("algo");

    assert_eq!(view.search_term(), "");
    assert_eq!(searched.search_term(), "algo");
    assert_eq!(view.active_tab(), searched.active_tab());
}
