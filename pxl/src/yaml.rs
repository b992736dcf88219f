use crate::connector::debezium_postgres::DebeziumPostgresSettings;
use crate::error::PxlResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn load_settings(path: &Path) -> PxlResult<DebeziumPostgresSettings> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let settings: DebeziumPostgresSettings = serde_yaml::from_str(&contents)?;
    Ok(settings)
}
