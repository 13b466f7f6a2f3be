use salesrep_api::domain::sales_rep::{SalesRep, SortBy, SortOrder};
use salesrep_api::repository::{DieselRepository, SalesRepListQuery, SalesRepReader};

mod common;

fn rep(id: i32, name: &str, role: &str, region: &str, status: &str, amount: f64) -> SalesRep {
    SalesRep {
        id,
        name: name.to_string(),
        role: role.to_string(),
        region: region.to_string(),
        email: format!("rep{id}@example.com"),
        deal_status: status.to_string(),
        deal_amount: amount,
    }
}

fn seed() -> Vec<SalesRep> {
    vec![
        rep(1, "Alice", "Manager", "West", "Closed Won", 120000.0),
        rep(2, "Bob", "Account Executive", "East", "In Progress", 45000.0),
        rep(3, "Carol", "Manager", "West", "Closed Lost", 80000.0),
        rep(4, "Dave", "Account Executive", "North", "In Progress", 45000.0),
        rep(5, "Alice", "Sales Engineer", "South", "Closed Won", 99000.0),
    ]
}

fn setup(name: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(name);
    common::insert_sales_reps(test_db.pool(), &seed());
    let repo = DieselRepository::new(test_db.pool().clone());
    (test_db, repo)
}

#[test]
fn test_filters_are_conjunctive() {
    let (_db, repo) = setup("test_filters_are_conjunctive.db");

    let (total, items) = repo
        .list_sales_reps(
            SalesRepListQuery::new()
                .role("Manager")
                .region("West")
                .deal_status("Closed Won"),
        )
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    let alice = &items[0];
    assert_eq!(alice.id, 1);
    assert_eq!(alice.role, "Manager");
    assert_eq!(alice.region, "West");
    assert_eq!(alice.deal_status, "Closed Won");
}

#[test]
fn test_no_filters_returns_everything() {
    let (_db, repo) = setup("test_no_filters_returns_everything.db");

    let (total, items) = repo.list_sales_reps(SalesRepListQuery::new()).unwrap();

    assert_eq!(total, 5);
    assert_eq!(items.len(), 5);
    // Default ordering is id ascending.
    let ids: Vec<i32> = items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_amount_filter_is_exact() {
    let (_db, repo) = setup("test_amount_filter_is_exact.db");

    let (total, items) = repo
        .list_sales_reps(SalesRepListQuery::new().deal_amount(45000.0))
        .unwrap();

    assert_eq!(total, 2);
    let ids: Vec<i32> = items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn test_total_is_independent_of_pagination() {
    let (_db, repo) = setup("test_total_is_independent_of_pagination.db");

    let (total_all, _) = repo.list_sales_reps(SalesRepListQuery::new()).unwrap();
    let (total_paged, items) = repo
        .list_sales_reps(SalesRepListQuery::new().paginate(2, 2))
        .unwrap();

    assert_eq!(total_all, 5);
    assert_eq!(total_paged, 5);
    assert_eq!(items.len(), 2);
}

#[test]
fn test_pages_concatenate_to_full_result() {
    let (_db, repo) = setup("test_pages_concatenate_to_full_result.db");

    let (_, full) = repo
        .list_sales_reps(SalesRepListQuery::new().sort(SortBy::Name, SortOrder::Asc))
        .unwrap();

    let mut collected = Vec::new();
    for page in 1..=3 {
        let (_, items) = repo
            .list_sales_reps(
                SalesRepListQuery::new()
                    .sort(SortBy::Name, SortOrder::Asc)
                    .paginate(page, 2),
            )
            .unwrap();
        collected.extend(items);
    }

    assert_eq!(collected, full);
}

#[test]
fn test_sort_by_name_breaks_ties_by_id() {
    let (_db, repo) = setup("test_sort_by_name_breaks_ties_by_id.db");

    let (_, ascending) = repo
        .list_sales_reps(SalesRepListQuery::new().sort(SortBy::Name, SortOrder::Asc))
        .unwrap();
    let names: Vec<&str> = ascending.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Alice", "Bob", "Carol", "Dave"]);
    // The two Alices arrive in id order.
    assert_eq!(ascending[0].id, 1);
    assert_eq!(ascending[1].id, 5);

    let (_, descending) = repo
        .list_sales_reps(SalesRepListQuery::new().sort(SortBy::Name, SortOrder::Desc))
        .unwrap();
    let names: Vec<&str> = descending.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Dave", "Carol", "Bob", "Alice", "Alice"]);
    assert_eq!(descending[3].id, 1);
    assert_eq!(descending[4].id, 5);
}

#[test]
fn test_sort_by_region_descending() {
    let (_db, repo) = setup("test_sort_by_region_descending.db");

    let (_, items) = repo
        .list_sales_reps(SalesRepListQuery::new().sort(SortBy::Region, SortOrder::Desc))
        .unwrap();

    let regions: Vec<&str> = items.iter().map(|r| r.region.as_str()).collect();
    let mut expected = regions.clone();
    expected.sort();
    expected.reverse();
    assert_eq!(regions, expected);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let (_db, repo) = setup("test_page_past_the_end_is_empty.db");

    let (total, items) = repo
        .list_sales_reps(SalesRepListQuery::new().paginate(99, 5))
        .unwrap();

    assert_eq!(total, 5);
    assert!(items.is_empty());
}

#[test]
fn test_page_zero_is_treated_as_first_page() {
    let (_db, repo) = setup("test_page_zero_is_treated_as_first_page.db");

    let (_, from_zero) = repo
        .list_sales_reps(SalesRepListQuery::new().paginate(0, 2))
        .unwrap();
    let (_, from_one) = repo
        .list_sales_reps(SalesRepListQuery::new().paginate(1, 2))
        .unwrap();

    assert_eq!(from_zero, from_one);
}

#[test]
fn test_get_by_id() {
    let (_db, repo) = setup("test_get_by_id.db");

    let rep = repo.get_sales_rep_by_id(3).unwrap().expect("rep exists");
    assert_eq!(rep.name, "Carol");

    assert!(repo.get_sales_rep_by_id(999).unwrap().is_none());
}
