// Repository trait for the loaded analytics tables
use chrono::NaiveDate;

use crate::domain::records::{CampaignRecord, FollowerRecord, Region};

/// Read access to the three tables loaded at startup. All data sits in
/// memory after the load, so access is synchronous; implementations never
/// mutate a table once loaded.
pub trait DatasetRepository: Send + Sync {
    /// Ad-campaign rows, date ascending.
    fn campaign_rows(&self) -> &[CampaignRecord];

    /// Follower rows for a region, date ascending.
    fn follower_rows(&self, region: Region) -> &[FollowerRecord];

    /// Distinct campaign names in first-appearance order.
    fn campaign_names(&self) -> Vec<String>;

    /// Min and max date of the ad table, or None when it is empty.
    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)>;
}
