use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;
use pxl::connector::debezium_postgres::DebeziumPostgresSettings;
use pxl::settings::{UpdaterSettings, DEFAULT_CONNECTOR_ARN};
use pxl::yaml::load_settings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, env = "CONNECTOR_ARN", default_value = DEFAULT_CONNECTOR_ARN)]
    pub connector_arn: String,

    /// YAML file with Debezium PostgreSQL connector settings
    #[arg(long, env = "CONNECTOR_SETTINGS_FILE")]
    pub settings_file: Option<PathBuf>,

    /// Secrets Manager secret holding the database credentials
    #[arg(long, env = "CONNECTOR_SECRET_ID")]
    pub secret_id: Option<String>,

    #[arg(long, env = "FAIL_ON_ERROR", value_parser = BoolishValueParser::new())]
    pub fail_on_error: bool,
}

impl Args {
    pub fn to_postgres_settings(&self) -> Result<DebeziumPostgresSettings> {
        let mut settings = match &self.settings_file {
            Some(path) => load_settings(path)
                .with_context(|| format!("cannot load settings file {}", path.display()))?,
            None => DebeziumPostgresSettings::default(),
        };
        if let Some(secret_id) = &self.secret_id {
            settings.secret_id = secret_id.clone();
        }
        Ok(settings)
    }

    pub fn to_updater_settings(&self) -> Result<UpdaterSettings> {
        let postgres = self.to_postgres_settings()?;
        let settings = UpdaterSettings::new(&self.connector_arn, &postgres, self.fail_on_error)?;
        Ok(settings)
    }
}
