// Date-range and campaign filters over loaded rows
use chrono::NaiveDate;

use crate::domain::records::{CampaignRecord, FollowerRecord};

/// A row carrying an observation date.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for CampaignRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for FollowerRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Rows with `start <= date <= end`, inclusive on both ends, original order
/// preserved. An inverted range (`end < start`) matches nothing.
pub fn rows_in_range<R: Dated + Clone>(rows: &[R], start: NaiveDate, end: NaiveDate) -> Vec<R> {
    rows.iter()
        .filter(|row| {
            let date = row.date();
            start <= date && date <= end
        })
        .cloned()
        .collect()
}

/// Date filter plus campaign-name membership. An empty selection keeps
/// nothing: no selection means no data shown, not "show all".
pub fn campaign_rows_in_range(
    rows: &[CampaignRecord],
    start: NaiveDate,
    end: NaiveDate,
    selected: &[String],
) -> Vec<CampaignRecord> {
    rows.iter()
        .filter(|row| selected.contains(&row.campaign))
        .filter(|row| start <= row.date && row.date <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower_row(date: &str, linkedin: f64) -> FollowerRecord {
        FollowerRecord {
            date: date.parse().unwrap(),
            linkedin,
            twitter: 0.0,
            instagram: 0.0,
            facebook: 0.0,
        }
    }

    fn campaign_row(date: &str, campaign: &str) -> CampaignRecord {
        CampaignRecord {
            date: date.parse().unwrap(),
            campaign: campaign.to_string(),
            sales: 0.0,
            checkouts: 0.0,
            clicks: 0.0,
            leads: 0.0,
            reach: 0.0,
            impressions: 0.0,
            cost_per_results: 0.0,
            amount_spent: 0.0,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_range_is_inclusive_on_both_ends() {
        let rows = vec![
            follower_row("2024-01-01", 10.0),
            follower_row("2024-01-02", 11.0),
            follower_row("2024-01-03", 12.0),
            follower_row("2024-01-04", 13.0),
        ];
        let kept = rows_in_range(&rows, date("2024-01-02"), date("2024-01-03"));
        assert_eq!(kept, vec![rows[1].clone(), rows[2].clone()]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let rows = vec![follower_row("2024-01-02", 10.0)];
        let kept = rows_in_range(&rows, date("2024-01-05"), date("2024-01-01"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_range_preserves_original_order() {
        let rows = vec![
            follower_row("2024-01-03", 3.0),
            follower_row("2024-01-01", 1.0),
            follower_row("2024-01-02", 2.0),
        ];
        let kept = rows_in_range(&rows, date("2024-01-01"), date("2024-01-03"));
        assert_eq!(kept, rows);
    }

    #[test]
    fn test_empty_campaign_selection_keeps_nothing() {
        let rows = vec![campaign_row("2024-01-01", "Summer")];
        let kept = campaign_rows_in_range(&rows, date("2024-01-01"), date("2024-01-31"), &[]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_campaign_selection_combines_with_date_range() {
        let rows = vec![
            campaign_row("2024-01-01", "Summer"),
            campaign_row("2024-01-02", "Winter"),
            campaign_row("2024-02-01", "Summer"),
        ];
        let selected = vec!["Summer".to_string()];
        let kept = campaign_rows_in_range(&rows, date("2024-01-01"), date("2024-01-31"), &selected);
        assert_eq!(kept, vec![rows[0].clone()]);
    }
}
