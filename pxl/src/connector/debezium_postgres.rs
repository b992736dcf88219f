use crate::connector::config::ConnectorConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONNECTOR_CLASS: &str = "io.debezium.connector.postgresql.PostgresConnector";
pub const DEFAULT_SECRET_ID: &str = "application/debezium_postgre_kafka_sink";

/// Reference to a key of a Secrets Manager secret, resolved by the MSK Connect
/// config provider when the connector configuration is applied.
pub fn secrets_manager_ref(secret_id: &str, key: &str) -> String {
    format!("${{secretsmanager:{}:{}}}", secret_id, key)
}

/// Debezium PostgreSQL source settings. Credentials are never held here, only
/// the secret they live in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DebeziumPostgresSettings {
    pub secret_id: String,
    pub db: String,
    pub slot_name: String,
    pub tasks_max: u32,
    pub schema_include_list: String,
    pub plugin_name: String,
    pub topic_prefix: String,
    pub name: String,
    pub table_include_list: String,
    pub additional: BTreeMap<String, String>,
}

impl Default for DebeziumPostgresSettings {
    fn default() -> Self {
        DebeziumPostgresSettings {
            secret_id: DEFAULT_SECRET_ID.to_string(),
            db: "ecommerce".to_string(),
            slot_name: "debezium".to_string(),
            tasks_max: 1,
            schema_include_list: "public".to_string(),
            plugin_name: "pgoutput".to_string(),
            topic_prefix: "ecommerce-cdc".to_string(),
            name: "ecommerce-cdc".to_string(),
            table_include_list: "public.customers,public.orders".to_string(),
            additional: BTreeMap::from([("test".to_string(), "msk_test".to_string())]),
        }
    }
}

impl DebeziumPostgresSettings {
    pub fn to_connector_config(&self) -> ConnectorConfig {
        let secret = |key| secrets_manager_ref(&self.secret_id, key);

        let mut config = ConnectorConfig::new();
        for (key, value) in &self.additional {
            config.set(key.as_str(), value.as_str());
        }

        config
            .set("connector.class", CONNECTOR_CLASS)
            .set("database.dbname", self.db.as_str())
            .set("database.user", secret("username"))
            .set("database.password", secret("password"))
            .set("database.hostname", secret("host"))
            .set("database.port", secret("port"))
            .set("slot.name", self.slot_name.as_str())
            .set("tasks.max", self.tasks_max.to_string())
            .set("schema.include.list", self.schema_include_list.as_str())
            .set("plugin.name", self.plugin_name.as_str())
            .set("topic.prefix", self.topic_prefix.as_str())
            .set("name", self.name.as_str())
            .set("table.include.list", self.table_include_list.as_str());
        config
    }
}
