use crate::connector::arn::ConnectorRef;
use crate::connector::config::ConnectorConfig;
use crate::connector::debezium_postgres::DebeziumPostgresSettings;
use crate::error::PxlResult;
use std::str::FromStr;

pub const DEFAULT_CONNECTOR_ARN: &str = "arn:aws:kafkaconnect:us-east-1:173881142689:connector/ecommerce-cdc/0d897e8a-83c2-48ee-b616-37d1b4d51c0b-2";

/// Everything an invocation needs, read once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdaterSettings {
    pub connector: ConnectorRef,
    pub connector_config: ConnectorConfig,
    /// Return an error from the handler when describe or update fails instead
    /// of the fixed success response.
    pub fail_on_error: bool,
}

impl UpdaterSettings {
    pub fn new(
        connector_arn: &str,
        postgres: &DebeziumPostgresSettings,
        fail_on_error: bool,
    ) -> PxlResult<Self> {
        Ok(UpdaterSettings {
            connector: ConnectorRef::from_str(connector_arn)?,
            connector_config: postgres.to_connector_config(),
            fail_on_error,
        })
    }
}
