// Chart service - Use case for assembling campaign and follower line charts
use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::dataset_repository::DatasetRepository;
use crate::application::filtering::{campaign_rows_in_range, rows_in_range};
use crate::domain::dashboard::{ChartPoint, ChartResult, ChartSeries};
use crate::domain::records::{CampaignRecord, Channel, FollowerRecord, Metric, Region};
use crate::domain::selection::ChannelSelection;

pub const CAMPAIGN_CHART_TITLE: &str = "Paid Campaign Performance";
pub const FOLLOWER_CHART_TITLE: &str = "Follower Trends Over Time";

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn DatasetRepository>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    /// One series per selected campaign and metric pair. Empty campaign or
    /// metric selections produce a chart shell with no series.
    pub fn campaign_chart(
        &self,
        campaigns: &[String],
        metrics: &[Metric],
        start: NaiveDate,
        end: NaiveDate,
    ) -> ChartResult {
        let rows = campaign_rows_in_range(self.repository.campaign_rows(), start, end, campaigns);
        ChartResult::new(
            CAMPAIGN_CHART_TITLE.to_string(),
            build_campaign_series(&rows, campaigns, metrics),
        )
    }

    /// One series per latched channel over the region's rows in range. With
    /// no channel ever clicked the chart has no series.
    pub fn follower_chart(
        &self,
        region: Region,
        start: NaiveDate,
        end: NaiveDate,
        selection: &ChannelSelection,
    ) -> ChartResult {
        let selected = selection.selected();
        if selected.is_empty() {
            return ChartResult::empty(FOLLOWER_CHART_TITLE);
        }
        let rows = rows_in_range(self.repository.follower_rows(region), start, end);
        ChartResult::new(
            FOLLOWER_CHART_TITLE.to_string(),
            build_follower_series(&rows, &selected),
        )
    }
}

/// Series named "{campaign} - {metric}" for every pair, points restricted to
/// that campaign's rows. Pairs with no rows in range contribute no series.
pub fn build_campaign_series(
    rows: &[CampaignRecord],
    campaigns: &[String],
    metrics: &[Metric],
) -> Vec<ChartSeries> {
    let mut series = Vec::new();
    for campaign in campaigns {
        for &metric in metrics {
            let points: Vec<ChartPoint> = rows
                .iter()
                .filter(|row| &row.campaign == campaign)
                .map(|row| ChartPoint::new(row.date, row.metric(metric)))
                .collect();
            if !points.is_empty() {
                series.push(ChartSeries::new(
                    format!("{} - {}", campaign, metric.label()),
                    points,
                ));
            }
        }
    }
    series
}

/// Series named by channel, points taken from that channel's column.
pub fn build_follower_series(rows: &[FollowerRecord], channels: &[Channel]) -> Vec<ChartSeries> {
    let mut series = Vec::new();
    for &channel in channels {
        let points: Vec<ChartPoint> = rows
            .iter()
            .map(|row| ChartPoint::new(row.date, row.channel(channel)))
            .collect();
        if !points.is_empty() {
            series.push(ChartSeries::new(channel.label().to_string(), points));
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign_row(date: &str, campaign: &str, clicks: f64) -> CampaignRecord {
        CampaignRecord {
            date: date.parse().unwrap(),
            campaign: campaign.to_string(),
            sales: 0.0,
            checkouts: 0.0,
            clicks,
            leads: 0.0,
            reach: 0.0,
            impressions: 0.0,
            cost_per_results: 0.0,
            amount_spent: 0.0,
        }
    }

    fn follower_row(date: &str, values: [f64; 4]) -> FollowerRecord {
        FollowerRecord {
            date: date.parse().unwrap(),
            linkedin: values[0],
            twitter: values[1],
            instagram: values[2],
            facebook: values[3],
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    struct StaticRepository {
        campaign: Vec<CampaignRecord>,
        followers: Vec<FollowerRecord>,
    }

    impl DatasetRepository for StaticRepository {
        fn campaign_rows(&self) -> &[CampaignRecord] {
            &self.campaign
        }

        fn follower_rows(&self, _region: Region) -> &[FollowerRecord] {
            &self.followers
        }

        fn campaign_names(&self) -> Vec<String> {
            let mut names: Vec<String> = Vec::new();
            for row in &self.campaign {
                if !names.contains(&row.campaign) {
                    names.push(row.campaign.clone());
                }
            }
            names
        }

        fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
            Some((self.campaign.first()?.date, self.campaign.last()?.date))
        }
    }

    fn service() -> ChartService {
        ChartService::new(Arc::new(StaticRepository {
            campaign: vec![
                campaign_row("2024-01-01", "Summer", 12.0),
                campaign_row("2024-01-02", "Winter", 7.0),
                campaign_row("2024-01-15", "Summer", 20.0),
            ],
            followers: vec![
                follower_row("2024-01-01", [100.0, 200.0, 300.0, 400.0]),
                follower_row("2024-01-02", [110.0, 210.0, 310.0, 410.0]),
            ],
        }))
    }

    #[test]
    fn test_campaign_series_named_after_pair() {
        let chart = service().campaign_chart(
            &["Summer".to_string()],
            &[Metric::Clicks],
            date("2024-01-01"),
            date("2024-01-31"),
        );
        assert_eq!(chart.title, CAMPAIGN_CHART_TITLE);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Summer - Clicks");
        assert_eq!(
            chart.series[0].points,
            vec![
                ChartPoint::new(date("2024-01-01"), 12.0),
                ChartPoint::new(date("2024-01-15"), 20.0),
            ]
        );
    }

    #[test]
    fn test_campaign_series_cross_product() {
        let chart = service().campaign_chart(
            &["Summer".to_string(), "Winter".to_string()],
            &[Metric::Clicks, Metric::Sales],
            date("2024-01-01"),
            date("2024-01-31"),
        );
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Summer - Clicks",
                "Summer - Sales",
                "Winter - Clicks",
                "Winter - Sales",
            ]
        );
    }

    #[test]
    fn test_empty_selection_yields_empty_chart() {
        let chart = service().campaign_chart(&[], &[], date("2024-01-01"), date("2024-01-31"));
        assert!(chart.series.is_empty());
        assert_eq!(chart.title, CAMPAIGN_CHART_TITLE);

        let chart = service().campaign_chart(
            &["Summer".to_string()],
            &[],
            date("2024-01-01"),
            date("2024-01-31"),
        );
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_follower_chart_without_clicks_is_empty() {
        let chart = service().follower_chart(
            Region::AndhraPradesh,
            date("2024-01-01"),
            date("2024-01-31"),
            &ChannelSelection::new(),
        );
        assert_eq!(chart.title, FOLLOWER_CHART_TITLE);
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_follower_chart_plots_clicked_channels_only() {
        let mut selection = ChannelSelection::new();
        selection.record_click(Channel::Instagram);
        selection.record_click(Channel::LinkedIn);

        let chart = service().follower_chart(
            Region::Telangana,
            date("2024-01-01"),
            date("2024-01-31"),
            &selection,
        );
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["LinkedIn", "Instagram"]);
        assert_eq!(
            chart.series[1].points,
            vec![
                ChartPoint::new(date("2024-01-01"), 300.0),
                ChartPoint::new(date("2024-01-02"), 310.0),
            ]
        );
    }
}
