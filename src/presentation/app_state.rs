// Application state for HTTP handlers
use std::sync::Arc;

use parking_lot::RwLock;

use crate::application::catalog_service::CatalogService;
use crate::application::chart_service::ChartService;
use crate::application::dataset_repository::DatasetRepository;
use crate::application::summary_service::SummaryService;
use crate::domain::selection::ChannelSelection;

pub struct AppState {
    pub catalog_service: CatalogService,
    pub summary_service: SummaryService,
    pub chart_service: ChartService,
    pub repository: Arc<dyn DatasetRepository>,
    /// The only mutable state in the process: the channel-card click
    /// counters. Process-global; a multi-session deployment would scope one
    /// of these per session.
    pub selection: RwLock<ChannelSelection>,
}
