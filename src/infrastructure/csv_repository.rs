// CSV-backed dataset repository
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;
use tracing::info;

use crate::application::dataset_repository::DatasetRepository;
use crate::domain::records::{CampaignRecord, FollowerRecord, Metric, Region};
use crate::infrastructure::config::DataSettings;

const ADS_TABLE: &str = "ADs";
const TELANGANA_TABLE: &str = "Telangana";
const AP_TABLE: &str = "AP";

/// Startup load failure. Any of these means the process has nothing to
/// serve, so the caller aborts instead of degrading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("table {table}: {source}")]
    Read {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("table {table}: missing column \"{column}\"")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("table {table} row {row}: invalid date \"{value}\"")]
    InvalidDate {
        table: &'static str,
        row: usize,
        value: String,
    },
    #[error("table {table} row {row}, column \"{column}\": invalid number \"{value}\"")]
    InvalidNumber {
        table: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// The three analytics tables, loaded once and immutable afterwards.
pub struct CsvDatasetRepository {
    campaign_rows: Vec<CampaignRecord>,
    telangana_rows: Vec<FollowerRecord>,
    ap_rows: Vec<FollowerRecord>,
}

impl CsvDatasetRepository {
    pub fn load(settings: &DataSettings) -> Result<Self, LoadError> {
        let campaign_rows =
            read_campaign_table(open_table(ADS_TABLE, &settings.table_path(&settings.ads_table))?)?;
        let telangana_rows = read_follower_table(
            TELANGANA_TABLE,
            open_table(TELANGANA_TABLE, &settings.table_path(&settings.telangana_table))?,
        )?;
        let ap_rows = read_follower_table(
            AP_TABLE,
            open_table(AP_TABLE, &settings.table_path(&settings.ap_table))?,
        )?;

        info!("{}: {} rows loaded", ADS_TABLE, campaign_rows.len());
        info!("{}: {} rows loaded", TELANGANA_TABLE, telangana_rows.len());
        info!("{}: {} rows loaded", AP_TABLE, ap_rows.len());

        Ok(Self {
            campaign_rows,
            telangana_rows,
            ap_rows,
        })
    }
}

impl DatasetRepository for CsvDatasetRepository {
    fn campaign_rows(&self) -> &[CampaignRecord] {
        &self.campaign_rows
    }

    fn follower_rows(&self, region: Region) -> &[FollowerRecord] {
        match region {
            Region::AndhraPradesh => &self.ap_rows,
            Region::Telangana => &self.telangana_rows,
        }
    }

    fn campaign_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for row in &self.campaign_rows {
            if !names.contains(&row.campaign) {
                names.push(row.campaign.clone());
            }
        }
        names
    }

    fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        // Rows are sorted at load time, so the ends are the bounds.
        let first = self.campaign_rows.first()?;
        let last = self.campaign_rows.last()?;
        Some((first.date, last.date))
    }
}

fn open_table(
    table: &'static str,
    path: &Path,
) -> Result<csv::Reader<std::fs::File>, LoadError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Read { table, source })
}

fn read_campaign_table<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<CampaignRecord>, LoadError> {
    const TABLE: &str = ADS_TABLE;
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Read { table: TABLE, source })?
        .clone();

    let date_col = column(TABLE, &headers, "Date")?;
    let campaign_col = column(TABLE, &headers, "Campaign name")?;
    let mut metric_cols = [0usize; Metric::ALL.len()];
    for (slot, metric) in metric_cols.iter_mut().zip(Metric::ALL) {
        *slot = column(TABLE, &headers, metric.label())?;
    }

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Read { table: TABLE, source })?;
        let metric_value = |metric: Metric| {
            number(
                TABLE,
                row,
                metric.label(),
                field(&record, metric_cols[metric as usize]),
            )
        };
        rows.push(CampaignRecord {
            date: date(TABLE, row, field(&record, date_col))?,
            campaign: field(&record, campaign_col).to_string(),
            sales: metric_value(Metric::Sales)?,
            checkouts: metric_value(Metric::Checkouts)?,
            clicks: metric_value(Metric::Clicks)?,
            leads: metric_value(Metric::Leads)?,
            reach: metric_value(Metric::Reach)?,
            impressions: metric_value(Metric::Impressions)?,
            cost_per_results: metric_value(Metric::CostPerResults)?,
            amount_spent: metric_value(Metric::AmountSpent)?,
        });
    }

    rows.sort_by_key(|row| row.date);
    Ok(rows)
}

fn read_follower_table<R: io::Read>(
    table: &'static str,
    mut reader: csv::Reader<R>,
) -> Result<Vec<FollowerRecord>, LoadError> {
    let headers = reader
        .headers()
        .map_err(|source| LoadError::Read { table, source })?
        .clone();

    let date_col = column(table, &headers, "Date")?;
    let linkedin_col = column(table, &headers, "LinkedIn")?;
    let twitter_col = column(table, &headers, "Twitter")?;
    let instagram_col = column(table, &headers, "Instagram")?;
    let facebook_col = column(table, &headers, "Facebook")?;
    // Part of the table schema; derived output only uses the per-channel
    // columns, but its absence still means a malformed table.
    column(table, &headers, "Number of Followers")?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| LoadError::Read { table, source })?;
        rows.push(FollowerRecord {
            date: date(table, row, field(&record, date_col))?,
            linkedin: number(table, row, "LinkedIn", field(&record, linkedin_col))?,
            twitter: number(table, row, "Twitter", field(&record, twitter_col))?,
            instagram: number(table, row, "Instagram", field(&record, instagram_col))?,
            facebook: number(table, row, "Facebook", field(&record, facebook_col))?,
        });
    }

    rows.sort_by_key(|row| row.date);
    Ok(rows)
}

fn column(
    table: &'static str,
    headers: &StringRecord,
    name: &'static str,
) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(LoadError::MissingColumn {
            table,
            column: name,
        })
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

fn date(table: &'static str, row: usize, value: &str) -> Result<NaiveDate, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidDate {
        table,
        row,
        value: value.to_string(),
    })
}

fn number(
    table: &'static str,
    row: usize,
    column: &'static str,
    value: &str,
) -> Result<f64, LoadError> {
    value.parse().map_err(|_| LoadError::InvalidNumber {
        table,
        row,
        column,
        value: value.to_string(),
    })
}
