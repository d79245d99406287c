use serde::Deserialize;
use anyhow::Result;
use dotenvy::dotenv;
use std::path::PathBuf;

fn default_port() -> u16 {
    9090
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sheet_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        let sheet_path = std::env::var("SHEET_FILE_PATH")
            .unwrap_or_else(|_| "Data/capbudg.xls".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", raw, e))?,
            Err(_) => default_port(),
        };

        Ok(Config {
            sheet_path: PathBuf::from(sheet_path),
            port,
        })
    }
}
