// ABOUTME: Integration tests for the SQLite appointment store
// ABOUTME: Covers ordering, filters, slot uniqueness, updates, and deletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barbershop_booking::models::{AppointmentDraft, AppointmentId, ListFilter, MonthKey};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(name: &str, day: NaiveDate, slot: &str) -> AppointmentDraft {
    AppointmentDraft {
        client_name: name.to_owned(),
        service_type: "Haircut".to_owned(),
        date: day,
        time_slot: slot.to_owned(),
    }
}

#[tokio::test]
async fn test_insert_and_get() {
    let store = common::create_test_store().await.unwrap();

    let created = store
        .insert(&draft("Ana", date(2999, 1, 10), "09:00"))
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.client_name, "Ana");
    assert_eq!(fetched.date, date(2999, 1, 10));
    assert_eq!(fetched.time_slot, "09:00");

    assert!(store.get(AppointmentId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_direct_insert_of_taken_slot_is_rejected() {
    let store = common::create_test_store().await.unwrap();
    let day = date(2999, 1, 10);

    store.insert(&draft("Ana", day, "09:00")).await.unwrap();
    let err = store.insert(&draft("Bia", day, "09:00")).await.unwrap_err();
    assert!(err.is_unique_violation(), "unexpected error: {err}");

    // Same slot on another day and another slot on the same day are fine
    store
        .insert(&draft("Bia", date(2999, 1, 11), "09:00"))
        .await
        .unwrap();
    store.insert(&draft("Bia", day, "09:30")).await.unwrap();
}

#[tokio::test]
async fn test_list_orders_by_date_then_slot() {
    let store = common::create_test_store().await.unwrap();
    store
        .insert(&draft("C", date(2999, 1, 11), "09:00"))
        .await
        .unwrap();
    store
        .insert(&draft("B", date(2999, 1, 10), "13:00"))
        .await
        .unwrap();
    store
        .insert(&draft("A", date(2999, 1, 10), "09:30"))
        .await
        .unwrap();

    let names: Vec<String> = store
        .list(ListFilter::All)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.client_name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let day = store
        .list(ListFilter::Date(date(2999, 1, 10)))
        .await
        .unwrap();
    assert_eq!(day.len(), 2);
    assert!(day.iter().all(|a| a.date == date(2999, 1, 10)));
}

#[tokio::test]
async fn test_month_filter_matches_only_that_month() {
    let store = common::create_test_store().await.unwrap();
    store
        .insert(&draft("Jan", date(2024, 1, 31), "09:00"))
        .await
        .unwrap();
    store
        .insert(&draft("Feb late", date(2024, 2, 29), "09:00"))
        .await
        .unwrap();
    store
        .insert(&draft("Feb early", date(2024, 2, 1), "17:30"))
        .await
        .unwrap();
    store
        .insert(&draft("Mar", date(2024, 3, 1), "09:00"))
        .await
        .unwrap();

    let feb = store
        .list(ListFilter::Month(MonthKey::new(2024, 2).unwrap()))
        .await
        .unwrap();
    let names: Vec<&str> = feb.iter().map(|a| a.client_name.as_str()).collect();
    assert_eq!(names, vec!["Feb early", "Feb late"]);
}

#[tokio::test]
async fn test_find_by_slot_honors_exclusion() {
    let store = common::create_test_store().await.unwrap();
    let day = date(2999, 1, 10);
    let held = store.insert(&draft("Ana", day, "09:00")).await.unwrap();

    let found = store.find_by_slot(day, "09:00", None).await.unwrap();
    assert_eq!(found.map(|a| a.id), Some(held.id));

    assert!(store
        .find_by_slot(day, "09:00", Some(held.id))
        .await
        .unwrap()
        .is_none());
    assert!(store
        .find_by_slot(day, "09:30", None)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_update_and_delete() {
    let store = common::create_test_store().await.unwrap();
    let day = date(2999, 1, 10);
    let created = store.insert(&draft("Ana", day, "09:00")).await.unwrap();

    let updated = store
        .update(created.id, &draft("Ana Maria", day, "10:00"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.client_name, "Ana Maria");
    assert_eq!(updated.time_slot, "10:00");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    assert!(store
        .update(AppointmentId::new(), &draft("Nobody", day, "11:00"))
        .await
        .unwrap()
        .is_none());

    assert!(store.delete(created.id).await.unwrap());
    assert!(!store.delete(created.id).await.unwrap());
    assert!(store.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_into_taken_slot_is_rejected() {
    let store = common::create_test_store().await.unwrap();
    let day = date(2999, 1, 10);
    store.insert(&draft("Ana", day, "09:00")).await.unwrap();
    let other = store.insert(&draft("Bia", day, "09:30")).await.unwrap();

    let err = store
        .update(other.id, &draft("Bia", day, "09:00"))
        .await
        .unwrap_err();
    assert!(err.is_unique_violation());
}

#[tokio::test]
async fn test_file_store_persists_across_reopen() {
    use barbershop_booking::config::environment::DatabaseUrl;
    use barbershop_booking::database::open_store;

    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("nested").join("appointments.db"),
    };

    let id = {
        let store = open_store(&url).await.unwrap();
        store
            .insert(&draft("Ana", date(2999, 1, 10), "09:00"))
            .await
            .unwrap()
            .id
    };

    let reopened = open_store(&url).await.unwrap();
    assert!(reopened.get(id).await.unwrap().is_some());
}
