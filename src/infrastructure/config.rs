use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub dir: String,
    pub ads_table: String,
    pub telangana_table: String,
    pub ap_table: String,
}

impl DataSettings {
    pub fn table_path(&self, file: &str) -> PathBuf {
        Path::new(&self.dir).join(file)
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/settings"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_path_joins_data_dir() {
        let data = DataSettings {
            dir: "data".to_string(),
            ads_table: "ads.csv".to_string(),
            telangana_table: "telangana.csv".to_string(),
            ap_table: "ap.csv".to_string(),
        };
        assert_eq!(
            data.table_path(&data.ads_table),
            PathBuf::from("data/ads.csv")
        );
    }
}
