//! Unit tests for `DepartmentRepo`.

use std::sync::Arc;

use employee_tracker::models::department::Department;
use employee_tracker::persistence::{db, department_repo::DepartmentRepo};

#[tokio::test]
async fn insert_then_list_returns_single_row() {
    let db = db::connect_memory().await.expect("db");
    let repo = DepartmentRepo::new(Arc::new(db));

    let saved = repo.insert("Engineering").await.expect("insert");
    assert_eq!(saved.id, 1);

    let all = repo.list_all().await.expect("list");
    assert_eq!(
        all,
        vec![Department {
            id: 1,
            name: "Engineering".into()
        }]
    );
}

#[tokio::test]
async fn duplicate_names_are_kept_once_per_insert() {
    let db = db::connect_memory().await.expect("db");
    let repo = DepartmentRepo::new(Arc::new(db));

    repo.insert("Sales").await.expect("first");
    repo.insert("Legal").await.expect("second");
    repo.insert("Sales").await.expect("third");

    let all = repo.list_all().await.expect("list");
    let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Sales", "Legal", "Sales"]);
    let ids: Vec<i64> = all.iter().map(|d| d.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn list_on_empty_table_is_empty() {
    let db = db::connect_memory().await.expect("db");
    let repo = DepartmentRepo::new(Arc::new(db));
    assert!(repo.list_all().await.expect("list").is_empty());
}
