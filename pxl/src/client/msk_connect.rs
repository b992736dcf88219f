use crate::client::ConnectorClient;
use crate::connector::arn::ConnectorRef;
use crate::connector::config::ConnectorConfig;
use crate::connector::description::{ConnectorDescription, UpdateResponse};
use crate::connector::state::ConnectorState;
use crate::connector::version::ConnectorVersion;
use crate::error::{PxlError, PxlResult};
use async_trait::async_trait;
use aws_sdk_kafkaconnect::error::DisplayErrorContext;
use aws_sdk_kafkaconnect::operation::describe_connector::builders::DescribeConnectorFluentBuilder;
use aws_sdk_kafkaconnect::operation::update_connector::builders::UpdateConnectorFluentBuilder;
use aws_sdk_kafkaconnect::types::ConnectorState as SdkConnectorState;
use aws_sdk_kafkaconnect::Client;
use log::{debug, warn};

pub struct MskConnectClient {
    client: Client,
}

impl MskConnectClient {
    pub fn new(client: Client) -> Self {
        MskConnectClient { client }
    }

    fn describe_request(&self, connector: &ConnectorRef) -> DescribeConnectorFluentBuilder {
        self.client
            .describe_connector()
            .connector_arn(connector.arn())
    }

    fn update_request(
        &self,
        connector: &ConnectorRef,
        version: &ConnectorVersion,
        config: &ConnectorConfig,
    ) -> UpdateConnectorFluentBuilder {
        self.client
            .update_connector()
            .connector_arn(connector.arn())
            .current_version(version.as_str())
            .set_connector_configuration(Some(config.to_hash_map()))
    }
}

fn convert_state(state: Option<&SdkConnectorState>) -> Option<ConnectorState> {
    let state = state?;
    match state.as_str().parse() {
        Ok(state) => Some(state),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

#[async_trait]
impl ConnectorClient for MskConnectClient {
    async fn describe_connector(
        &self,
        connector: &ConnectorRef,
    ) -> PxlResult<ConnectorDescription> {
        debug!("DescribeConnector {}", connector);
        let output = self
            .describe_request(connector)
            .send()
            .await
            .map_err(|err| PxlError::DescribeFailure(DisplayErrorContext(&err).to_string()))?;

        Ok(ConnectorDescription {
            name: output.connector_name().map(str::to_string),
            current_version: output.current_version().map(ConnectorVersion::new),
            state: convert_state(output.connector_state()),
        })
    }

    async fn update_connector(
        &self,
        connector: &ConnectorRef,
        version: &ConnectorVersion,
        config: &ConnectorConfig,
    ) -> PxlResult<UpdateResponse> {
        debug!(
            "UpdateConnector {} at version {} with {} properties",
            connector,
            version,
            config.len()
        );
        let output = self
            .update_request(connector, version, config)
            .send()
            .await
            .map_err(|err| PxlError::UpdateFailure(DisplayErrorContext(&err).to_string()))?;

        Ok(UpdateResponse {
            connector_arn: output.connector_arn().map(str::to_string),
            state: convert_state(output.connector_state()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::debezium_postgres::DebeziumPostgresSettings;
    use crate::settings::DEFAULT_CONNECTOR_ARN;
    use aws_sdk_kafkaconnect::config::{BehaviorVersion, Region};
    use std::str::FromStr;

    fn client() -> MskConnectClient {
        let config = aws_sdk_kafkaconnect::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        MskConnectClient::new(Client::from_conf(config))
    }

    #[test]
    fn test_describe_request() {
        let connector = ConnectorRef::from_str(DEFAULT_CONNECTOR_ARN).unwrap();
        let request = client().describe_request(&connector);
        assert_eq!(
            request.as_input().get_connector_arn().as_deref(),
            Some(DEFAULT_CONNECTOR_ARN)
        );
    }

    #[test]
    fn test_update_request() {
        let connector = ConnectorRef::from_str(DEFAULT_CONNECTOR_ARN).unwrap();
        let config = DebeziumPostgresSettings::default().to_connector_config();
        let request = client().update_request(&connector, &ConnectorVersion::new("7"), &config);
        let input = request.as_input();

        assert_eq!(input.get_connector_arn().as_deref(), Some(DEFAULT_CONNECTOR_ARN));
        assert_eq!(input.get_current_version().as_deref(), Some("7"));

        let sent = input.get_connector_configuration().as_ref().unwrap();
        assert_eq!(sent.len(), 14);
        assert_eq!(sent, &config.to_hash_map());
        assert_eq!(
            sent.get("connector.class").map(String::as_str),
            Some("io.debezium.connector.postgresql.PostgresConnector")
        );
        assert_eq!(sent.get("tasks.max").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_convert_state() {
        assert_eq!(
            convert_state(Some(&SdkConnectorState::Updating)),
            Some(ConnectorState::Updating)
        );
        assert_eq!(convert_state(None), None);
        assert_eq!(
            convert_state(Some(&SdkConnectorState::from("NOT_A_STATE"))),
            None
        );
    }
}
