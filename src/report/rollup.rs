use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use serde::Serialize;

use uuid::Uuid;

use crate::model::{Area, AreaTag, Event, Registration, View};

/// Registrations per view as a percentage, rounded to one decimal place.
///
/// Zero views yield a rate of `0.0`.
pub fn conversion_rate(views: u64, registrations: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    let rate = registrations as f64 / views as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Number of distinct, non-null visitor IDs
pub fn unique_visitors<'a>(views: impl IntoIterator<Item = &'a View>) -> u64 {
    views
        .into_iter()
        .filter_map(|view| view.visitor_id.as_deref())
        .collect::<HashSet<_>>()
        .len() as u64
}

/// Statistics of a single event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStats {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub area: Option<AreaTag>,
    pub total_views: u64,
    pub unique_visitors: u64,
    pub total_registrations: u64,
    pub conversion_rate: f64,
    pub registrations: Vec<Registration>,
}

/// Statistics of every area, grouped by area name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStats {
    pub name: String,
    pub color: String,
    pub total_events: u64,
    pub total_views: u64,
    pub total_registrations: u64,
}

/// Site-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_events: u64,
    pub total_views: u64,
    /// Distinct visitors across all views, not the sum of per-event counts
    pub unique_visitors: u64,
    pub total_registrations: u64,
    pub active_subscribers: u64,
    pub conversion_rate: f64,
}

/// Per-event statistics, in the order of `events`.
///
/// Views and registrations are joined to events by event ID; records pointing
/// at unknown events are not attributed to any event.
pub fn event_stats(
    events: &[Event],
    views: &[View],
    registrations: &[Registration],
) -> Vec<EventStats> {
    let mut views_by_event: HashMap<Uuid, Vec<&View>> = HashMap::new();
    for view in views {
        views_by_event.entry(view.event_id).or_default().push(view);
    }
    let mut registrations_by_event: HashMap<Uuid, Vec<&Registration>> = HashMap::new();
    for registration in registrations {
        registrations_by_event
            .entry(registration.event_id)
            .or_default()
            .push(registration);
    }

    events
        .iter()
        .map(|event| {
            let event_views = views_by_event.get(&event.id).map(Vec::as_slice).unwrap_or(&[]);
            let event_registrations: Vec<Registration> = registrations_by_event
                .get(&event.id)
                .map(|found| found.iter().map(|r| (*r).clone()).collect())
                .unwrap_or_default();

            let total_views = event_views.len() as u64;
            let total_registrations = event_registrations.len() as u64;

            EventStats {
                id: event.id,
                name: event.name.clone(),
                date: event.date,
                area: event.area.clone(),
                total_views,
                unique_visitors: unique_visitors(event_views.iter().copied()),
                total_registrations,
                conversion_rate: conversion_rate(total_views, total_registrations),
                registrations: event_registrations,
            }
        })
        .collect()
}

/// Per-area statistics, one entry per area in the order of `areas`.
///
/// Events are attributed to an area when the name of their joined area equals
/// the area's name. Events without a joined area, or whose area name matches
/// no area, are left out.
pub fn area_stats(areas: &[Area], events: &[EventStats]) -> Vec<AreaStats> {
    areas
        .iter()
        .map(|area| {
            let in_area = events.iter().filter(|event| {
                event
                    .area
                    .as_ref()
                    .map_or(false, |tag| tag.name == area.name)
            });

            let (total_events, total_views, total_registrations) =
                in_area.fold((0, 0, 0), |(count, views, registrations), event| {
                    (
                        count + 1,
                        views + event.total_views,
                        registrations + event.total_registrations,
                    )
                });

            AreaStats {
                name: area.name.clone(),
                color: area.color.clone(),
                total_events,
                total_views,
                total_registrations,
            }
        })
        .collect()
}

/// Site-wide statistics over every record given
pub fn global_stats(
    events: &[Event],
    views: &[View],
    registrations: &[Registration],
    active_subscribers: u64,
) -> GlobalStats {
    let total_views = views.len() as u64;
    let total_registrations = registrations.len() as u64;

    GlobalStats {
        total_events: events.len() as u64,
        total_views,
        unique_visitors: unique_visitors(views),
        total_registrations,
        active_subscribers,
        conversion_rate: conversion_rate(total_views, total_registrations),
    }
}
