use crate::client::ConnectorClient;
use crate::connector::arn::ConnectorRef;
use crate::connector::config::ConnectorConfig;
use crate::connector::description::UpdateResponse;
use crate::connector::version::ConnectorVersion;
use crate::error::missing_value::MissingValueError;
use crate::error::{PxlError, PxlResult};
use log::{error, info};

/// Terminal state of one describe-then-update run.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(UpdateResponse),
    DescribeFailed(PxlError),
    UpdateFailed(PxlError),
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated(_))
    }

    pub fn into_result(self) -> PxlResult<UpdateResponse> {
        match self {
            UpdateOutcome::Updated(response) => Ok(response),
            UpdateOutcome::DescribeFailed(err) | UpdateOutcome::UpdateFailed(err) => Err(err),
        }
    }
}

pub async fn fetch_version<C>(client: &C, connector: &ConnectorRef) -> PxlResult<ConnectorVersion>
where
    C: ConnectorClient + ?Sized,
{
    let result = client
        .describe_connector(connector)
        .await
        .and_then(|description| {
            description
                .current_version
                .ok_or_else(|| MissingValueError::new("currentVersion").into())
        });

    match result {
        Ok(version) => {
            info!("Current connector version: {}", version);
            Ok(version)
        }
        Err(err) => {
            error!("Error retrieving connector details: {}", err);
            Err(err)
        }
    }
}

pub async fn update<C>(
    client: &C,
    connector: &ConnectorRef,
    version: &ConnectorVersion,
    config: &ConnectorConfig,
) -> PxlResult<UpdateResponse>
where
    C: ConnectorClient + ?Sized,
{
    match client.update_connector(connector, version, config).await {
        Ok(response) => {
            info!("Connector {} updated successfully:", connector.name());
            info!("{:?}", response);
            Ok(response)
        }
        Err(err) => {
            error!("Error updating the connector: {}", err);
            Err(err)
        }
    }
}

/// Fetches the current version and updates the connector with it. No retries:
/// a stale version or any other failure ends the run.
pub async fn update_connector<C>(
    client: &C,
    connector: &ConnectorRef,
    config: &ConnectorConfig,
) -> UpdateOutcome
where
    C: ConnectorClient + ?Sized,
{
    let version = match fetch_version(client, connector).await {
        Ok(version) => version,
        Err(err) => return UpdateOutcome::DescribeFailed(err),
    };

    match update(client, connector, &version, config).await {
        Ok(response) => UpdateOutcome::Updated(response),
        Err(err) => UpdateOutcome::UpdateFailed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockConnectorClient;
    use crate::connector::description::ConnectorDescription;
    use crate::connector::state::ConnectorState;
    use mockall::predicate::eq;
    use std::str::FromStr;

    fn connector() -> ConnectorRef {
        ConnectorRef::from_str("arn:aws:kafkaconnect:us-east-1:123456789012:connector/orders/abc-1")
            .unwrap()
    }

    fn config() -> ConnectorConfig {
        [("tasks.max", "1")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_fetch_version() {
        let mut client = MockConnectorClient::new();
        client
            .expect_describe_connector()
            .with(eq(connector()))
            .times(1)
            .returning(|_| {
                Ok(ConnectorDescription {
                    current_version: Some(ConnectorVersion::new("3")),
                    ..Default::default()
                })
            });

        let version = fetch_version(&client, &connector()).await.unwrap();
        assert_eq!(version, ConnectorVersion::new("3"));
    }

    #[tokio::test]
    async fn test_fetch_version_missing() {
        let mut client = MockConnectorClient::new();
        client
            .expect_describe_connector()
            .returning(|_| Ok(ConnectorDescription::default()));

        let result = fetch_version(&client, &connector()).await;
        assert!(matches!(
            result,
            Err(PxlError::MissingValueError(MissingValueError {
                field_name: "currentVersion"
            }))
        ));
    }

    #[tokio::test]
    async fn test_update_connector_describe_failure_skips_update() {
        let mut client = MockConnectorClient::new();
        client
            .expect_describe_connector()
            .times(1)
            .returning(|_| Err(PxlError::DescribeFailure("access denied".to_string())));
        client.expect_update_connector().never();

        let outcome = update_connector(&client, &connector(), &config()).await;
        assert!(matches!(
            outcome,
            UpdateOutcome::DescribeFailed(PxlError::DescribeFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_update_connector_update_failure() {
        let mut client = MockConnectorClient::new();
        client.expect_describe_connector().returning(|_| {
            Ok(ConnectorDescription {
                current_version: Some(ConnectorVersion::new("4")),
                ..Default::default()
            })
        });
        client
            .expect_update_connector()
            .times(1)
            .returning(|_, _, _| Err(PxlError::UpdateFailure("stale version".to_string())));

        let outcome = update_connector(&client, &connector(), &config()).await;
        assert!(!outcome.is_updated());
        assert!(matches!(
            outcome.into_result(),
            Err(PxlError::UpdateFailure(msg)) if msg == "stale version"
        ));
    }

    #[tokio::test]
    async fn test_update_connector_success() {
        let mut client = MockConnectorClient::new();
        client.expect_describe_connector().returning(|_| {
            Ok(ConnectorDescription {
                current_version: Some(ConnectorVersion::new("4")),
                ..Default::default()
            })
        });
        client
            .expect_update_connector()
            .with(eq(connector()), eq(ConnectorVersion::new("4")), eq(config()))
            .times(1)
            .returning(|connector, _, _| {
                Ok(UpdateResponse {
                    connector_arn: Some(connector.arn().to_string()),
                    state: Some(ConnectorState::Updating),
                })
            });

        let outcome = update_connector(&client, &connector(), &config()).await;
        let response = outcome.into_result().unwrap();
        assert_eq!(response.state, Some(ConnectorState::Updating));
        assert_eq!(response.connector_arn.as_deref(), Some(connector().arn()));
    }
}
