// Summary card service - Use case for follower deltas over a date range
use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::dataset_repository::DatasetRepository;
use crate::application::filtering::rows_in_range;
use crate::domain::dashboard::{SummaryCard, SummarySnapshot};
use crate::domain::records::{Channel, FollowerRecord, Region};

#[derive(Clone)]
pub struct SummaryService {
    repository: Arc<dyn DatasetRepository>,
}

impl SummaryService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    /// Cards for the region's channels over the selected range, or the
    /// no-data marker when the range matches no rows.
    pub fn cards(&self, region: Region, start: NaiveDate, end: NaiveDate) -> SummarySnapshot {
        let rows = rows_in_range(self.repository.follower_rows(region), start, end);
        compute_summaries(&rows)
    }
}

/// One card per channel in canonical order. Expects `rows` sorted by date
/// ascending: the first row anchors the range start, the last carries the
/// latest values.
pub fn compute_summaries(rows: &[FollowerRecord]) -> SummarySnapshot {
    if rows.is_empty() {
        return SummarySnapshot::NoData;
    }
    let first = &rows[0];
    let last = &rows[rows.len() - 1];

    let cards = Channel::ALL
        .into_iter()
        .map(|channel| {
            let start_value = first.channel(channel);
            let latest = last.channel(channel);
            SummaryCard::new(channel, latest, percent_change(start_value, latest))
        })
        .collect();
    SummarySnapshot::Ready { cards }
}

/// Percent change from `start` to `end`. A zero start value yields 0%, not a
/// division fault.
pub fn percent_change(start: f64, end: f64) -> f64 {
    if start == 0.0 {
        0.0
    } else {
        (end - start) / start * 100.0
    }
}
