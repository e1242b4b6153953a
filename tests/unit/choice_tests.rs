//! Unit tests for `Choices` label resolution.

use std::collections::HashSet;

use employee_tracker::choice::Choices;
use employee_tracker::models::department::Department;
use employee_tracker::AppError;

fn dept(id: i64, name: &str) -> Department {
    Department {
        id,
        name: name.to_owned(),
    }
}

fn build(departments: &[Department]) -> Choices<i64> {
    Choices::from_records(departments, |d| d.name.clone(), |d| d.id)
}

fn assert_distinct<K: Copy>(choices: &Choices<K>) {
    let unique: HashSet<&String> = choices.labels().iter().collect();
    assert_eq!(unique.len(), choices.labels().len(), "labels: {:?}", choices.labels());
}

#[test]
fn keeps_fetch_order_and_plain_labels() {
    let choices = build(&[dept(3, "Sales"), dept(1, "Engineering")]);

    assert_eq!(choices.labels(), ["Sales", "Engineering"]);
    assert_eq!(choices.key_at(0).expect("first"), 3);
    assert_eq!(choices.key_at(1).expect("second"), 1);
}

#[test]
fn duplicate_labels_are_disambiguated_by_id() {
    let choices = build(&[dept(1, "Sales"), dept(2, "Legal"), dept(4, "Sales")]);

    assert_eq!(choices.labels(), ["Sales (id 1)", "Legal", "Sales (id 4)"]);
    assert_eq!(choices.key_at(2).expect("second sales"), 4);
    assert_eq!(choices.label_at(2), Some("Sales (id 4)"));
}

#[test]
fn clashing_suffixed_label_is_suffixed_again() {
    let choices = build(&[dept(1, "Sales"), dept(2, "Sales"), dept(3, "Sales (id 2)")]);

    assert_distinct(&choices);
    assert_eq!(
        choices.labels(),
        ["Sales (id 1)", "Sales (id 2)", "Sales (id 2) (id 3)"]
    );
    assert_eq!(choices.key_at(1).expect("id 2"), 2);
    assert_eq!(choices.key_at(2).expect("id 3"), 3);
}

#[test]
fn record_named_like_none_label_is_suffixed() {
    let choices = build(&[dept(1, "None")]).optional("None");

    assert_distinct(&choices);
    assert_eq!(choices.labels(), ["None", "None (id 1)"]);
    assert_eq!(choices.key_at(0).expect("none"), None);
    assert_eq!(choices.key_at(1).expect("record"), Some(1));
}

#[test]
fn empty_records_give_empty_choices() {
    let choices = build(&[]);
    assert!(choices.is_empty());
    assert!(choices.labels().is_empty());
}

#[test]
fn out_of_range_index_is_not_found() {
    let choices = build(&[dept(1, "Sales")]);
    assert!(matches!(choices.key_at(1), Err(AppError::NotFound(_))));
    assert_eq!(choices.label_at(1), None);
}

#[test]
fn optional_prepends_none_entry() {
    let choices = build(&[dept(7, "Sales")]).optional("None");

    assert_eq!(choices.labels(), ["None", "Sales"]);
    assert_eq!(choices.key_at(0).expect("none"), None);
    assert_eq!(choices.key_at(1).expect("sales"), Some(7));
}

#[test]
fn optional_on_empty_list_offers_only_none() {
    let choices = build(&[]).optional("None");
    assert!(!choices.is_empty());
    assert_eq!(choices.labels(), ["None"]);
    assert_eq!(choices.key_at(0).expect("none"), None);
}
