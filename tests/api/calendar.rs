use chrono::{Datelike, Days, Months};

use reqwest::StatusCode;

use serde_json::Value;

use crate::helpers::{area, event, today, MemoryStore, TestApp};

fn events_in(calendar: &Value) -> Vec<String> {
    calendar["days"]
        .as_array()
        .expect("Missing calendar days")
        .iter()
        .flat_map(|day| day["events"].as_array().cloned().unwrap_or_default())
        .map(|event| event["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn current_month_is_shown_by_default() {
    let store = MemoryStore {
        events: vec![event("Hoy", today(), None)],
        ..Default::default()
    };
    let app = TestApp::spawn(store).await;

    let res = app.calendar(&[]).await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());
    let calendar: Value = res.json().await.expect("Failed to parse calendar");

    assert_eq!("current", calendar["month"]);
    assert_eq!("all", calendar["area"]);
    assert_eq!(false, calendar["can_go_previous"]);
    assert_eq!(true, calendar["can_go_next"]);
    assert_eq!(12, calendar["months"].as_array().unwrap().len());

    let days = calendar["days"].as_array().unwrap();
    assert_eq!(0, days.len() % 7);

    let todays: Vec<_> = days.iter().filter(|day| day["is_today"] == true).collect();
    assert_eq!(1, todays.len());
    assert_eq!(today().to_string(), todays[0]["date"]);
    assert_eq!(true, todays[0]["in_reference_month"]);
    assert_eq!("Hoy", todays[0]["events"][0]["name"]);
}

#[tokio::test]
async fn past_events_are_not_listed() {
    let yesterday = today() - Days::new(1);
    let store = MemoryStore {
        events: vec![event("Ayer", yesterday, None), event("Hoy", today(), None)],
        ..Default::default()
    };
    let app = TestApp::spawn(store).await;

    let calendar: Value = app
        .calendar(&[])
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse calendar");

    assert_eq!(vec!["Hoy".to_string()], events_in(&calendar));
}

#[tokio::test]
async fn area_filter_narrows_events() {
    let sports = area("Deportes", "#4A90E2");
    let store = MemoryStore {
        events: vec![
            event("Partido", today(), Some(&sports)),
            event("Concierto", today(), None),
        ],
        areas: vec![sports.clone()],
        ..Default::default()
    };
    let app = TestApp::spawn(store).await;

    let area_id = sports.id.to_string();
    let calendar: Value = app
        .calendar(&[("area", &area_id)])
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse calendar");

    assert_eq!(area_id, calendar["area"]);
    assert_eq!(vec!["Partido".to_string()], events_in(&calendar));

    let calendar: Value = app
        .calendar(&[("area", "all")])
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse calendar");

    assert_eq!(2, events_in(&calendar).len());
}

#[tokio::test]
async fn next_month_can_be_selected_and_navigated() {
    let app = TestApp::spawn(MemoryStore::default()).await;
    let next = today().checked_add_months(Months::new(1)).unwrap();
    let next_value = format!("{:04}-{:02}", next.year(), next.month());

    let calendar: Value = app
        .calendar(&[("nav", "next")])
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse calendar");
    assert_eq!(next_value, calendar["month"]);
    assert_eq!(true, calendar["can_go_previous"]);

    let calendar: Value = app
        .calendar(&[("month", &next_value), ("nav", "prev")])
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse calendar");
    assert_eq!("current", calendar["month"]);
}

#[tokio::test]
async fn navigation_outside_window_is_rejected() {
    let app = TestApp::spawn(MemoryStore::default()).await;
    let beyond = today().checked_add_months(Months::new(13)).unwrap();
    let beyond_value = format!("{:04}-{:02}", beyond.year(), beyond.month());

    let test_cases = vec![
        ("previous month", vec![("nav", "prev".to_string())]),
        ("too far ahead", vec![("month", beyond_value)]),
    ];

    for (desc, query) in test_cases {
        let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let res = app.calendar(&query).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "The API did not fail with 400 Bad Request when the request was {}",
            desc
        );
    }
}

#[tokio::test]
async fn malformed_selectors_are_rejected() {
    let app = TestApp::spawn(MemoryStore::default()).await;

    let test_cases = vec![
        ("unknown area", ("area", "deportes")),
        ("malformed month", ("month", "2025-4")),
        ("unknown navigation", ("nav", "sideways")),
    ];

    for (desc, param) in test_cases {
        let res = app.calendar(&[param]).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "The API did not fail with 400 Bad Request when the request had {}",
            desc
        );
    }
}
