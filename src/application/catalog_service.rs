// Catalog service - Use case for populating the rendering layer's controls
use std::sync::Arc;

use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dashboard::{ControlCatalog, DateBounds, RegionOption};
use crate::domain::records::{Channel, Metric, Region};

pub const DASHBOARD_TITLE: &str = "Strategy Genesis Panel";

#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn DatasetRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn DatasetRepository>) -> Self {
        Self { repository }
    }

    /// Region, campaign, metric, and channel options plus the date-picker
    /// bounds taken from the ad table.
    pub fn catalog(&self) -> ControlCatalog {
        ControlCatalog {
            title: DASHBOARD_TITLE.to_string(),
            regions: Region::ALL
                .iter()
                .map(|region| RegionOption {
                    value: region.key(),
                    label: region.display_name(),
                })
                .collect(),
            campaigns: self.repository.campaign_names(),
            metrics: Metric::ALL.iter().map(|metric| metric.label()).collect(),
            channels: Channel::ALL.iter().map(|channel| channel.label()).collect(),
            date_bounds: self
                .repository
                .date_bounds()
                .map(|(min, max)| DateBounds { min, max }),
        }
    }
}
