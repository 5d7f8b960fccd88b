//! Show partitioning and venue grouping
//!
//! "Past" and "upcoming" are always relative to the request timestamp passed
//! in by the caller.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::db::VenueSummary;

/// Anything with a start time that can be split into past/upcoming
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

/// Shows split around a point in time
#[derive(Debug, Clone, Serialize)]
pub struct ShowPartition<T> {
    /// Shows that started before `now`, most recent first
    pub past: Vec<T>,
    /// Shows starting at or after `now`, in input order
    pub upcoming: Vec<T>,
}

impl<T> ShowPartition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn total(&self) -> usize {
        self.past.len() + self.upcoming.len()
    }
}

/// Split shows into past (`start < now`) and upcoming (`start >= now`)
///
/// Input is expected in chronological order; past shows are reversed so the
/// most recent one comes first.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: NaiveDateTime) -> ShowPartition<T> {
    let (mut past, upcoming): (Vec<T>, Vec<T>) =
        shows.into_iter().partition(|show| show.start_time() < now);
    past.reverse();
    ShowPartition { past, upcoming }
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Group venues by distinct (city, state), sorted by city then state
///
/// Venues within an area are sorted by name.
pub fn group_by_area(mut venues: Vec<VenueSummary>) -> Vec<Area> {
    venues.sort_by(|a, b| {
        (&a.city, &a.state, &a.name).cmp(&(&b.city, &b.state, &b.name))
    });

    let mut areas: Vec<Area> = Vec::new();
    for venue in venues {
        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(venue);
            }
            _ => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[derive(Debug, Clone, PartialEq)]
    struct Slot(NaiveDateTime);

    impl Scheduled for Slot {
        fn start_time(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn summary(id: i64, name: &str, city: &str, state: &str) -> VenueSummary {
        VenueSummary {
            id,
            name: name.into(),
            city: city.into(),
            state: state.into(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn test_partition_counts_sum_to_total() {
        let now = base();
        let shows: Vec<Slot> = (-3..4).map(|d| Slot(now + Duration::days(d))).collect();
        let total = shows.len();
        let partition = partition_shows(shows, now);
        assert_eq!(partition.past_count() + partition.upcoming_count(), total);
        assert_eq!(partition.total(), total);
        assert_eq!(partition.past_count(), 3);
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let now = base();
        let partition = partition_shows(vec![Slot(now)], now);
        assert_eq!(partition.upcoming, vec![Slot(now)]);
        assert!(partition.past.is_empty());
    }

    #[test]
    fn test_past_shows_most_recent_first() {
        let now = base();
        let older = Slot(now - Duration::days(10));
        let newer = Slot(now - Duration::days(1));
        let later = Slot(now + Duration::days(1));
        let partition = partition_shows(vec![older.clone(), newer.clone(), later.clone()], now);
        assert_eq!(partition.past, vec![newer, older]);
        assert_eq!(partition.upcoming, vec![later]);
    }

    #[test]
    fn test_group_by_area_sorted() {
        let venues = vec![
            summary(1, "The Musical Hop", "San Francisco", "CA"),
            summary(2, "The Dueling Pianos Bar", "New York", "NY"),
            summary(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            summary(4, "Another Room", "San Francisco", "NV"),
        ];
        let areas = group_by_area(venues);

        let keys: Vec<(&str, &str)> = areas.iter().map(|a| (a.city.as_str(), a.state.as_str())).collect();
        assert_eq!(
            keys,
            vec![("New York", "NY"), ("San Francisco", "CA"), ("San Francisco", "NV")]
        );

        let sf: Vec<i64> = areas[1].venues.iter().map(|v| v.id).collect();
        assert_eq!(sf, vec![3, 1]);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
