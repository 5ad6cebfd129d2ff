// Chart, summary card, and control catalog models handed to the rendering layer
use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::records::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(name: String, points: Vec<ChartPoint>) -> Self {
        Self { name, points }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub title: String,
    pub series: Vec<ChartSeries>,
}

impl ChartResult {
    pub fn new(title: String, series: Vec<ChartSeries>) -> Self {
        Self { title, series }
    }

    /// A valid chart shell with no series.
    pub fn empty(title: &str) -> Self {
        Self::new(title.to_string(), Vec::new())
    }
}

/// Latest follower count for a channel and its percent change over the
/// selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub channel: Channel,
    pub latest: f64,
    pub percent_change: f64,
}

impl SummaryCard {
    pub fn new(channel: Channel, latest: f64, percent_change: f64) -> Self {
        Self {
            channel,
            latest,
            percent_change,
        }
    }
}

/// Outcome of a summary computation: one card per channel, or a single
/// no-data marker when the range matches no rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummarySnapshot {
    NoData,
    Ready { cards: Vec<SummaryCard> },
}

/// Everything the rendering layer needs to populate its controls.
#[derive(Debug, Clone, Serialize)]
pub struct ControlCatalog {
    pub title: String,
    pub regions: Vec<RegionOption>,
    pub campaigns: Vec<String>,
    pub metrics: Vec<&'static str>,
    pub channels: Vec<&'static str>,
    pub date_bounds: Option<DateBounds>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Min and max selectable dates for the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}
