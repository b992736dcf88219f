use crate::client::ConnectorClient;
use crate::error::PxlResult;
use crate::event::object_changes;
use crate::settings::UpdaterSettings;
use crate::updater::{update_connector, UpdateOutcome};
use lambda_runtime::LambdaEvent;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const HANDLED_BODY: &str = "Handled config change";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn handled() -> Self {
        HandlerResponse {
            status_code: 200,
            body: HANDLED_BODY.to_string(),
        }
    }
}

/// Reacts to a config change notification by pushing the configured
/// connector properties to MSK Connect. The event content is only logged.
pub struct ConfigChangeHandler<C> {
    client: C,
    settings: UpdaterSettings,
}

impl<C: ConnectorClient> ConfigChangeHandler<C> {
    pub fn new(client: C, settings: UpdaterSettings) -> Self {
        ConfigChangeHandler { client, settings }
    }

    /// Always answers `{200, "Handled config change"}`, whether or not the
    /// update went through, unless `fail_on_error` is set.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> PxlResult<HandlerResponse> {
        let (payload, context) = event.into_parts();
        info!("Received event: {}", payload);
        info!(
            "Received context: request_id={} function_arn={} deadline={}",
            context.request_id, context.invoked_function_arn, context.deadline
        );
        if let Some(changes) = object_changes(&payload) {
            for change in &changes {
                debug!(
                    "{} {}",
                    change.event_name.as_deref().unwrap_or("unknown event"),
                    change.location()
                );
            }
        }

        let outcome = self.update().await;
        if !outcome.is_updated() {
            if self.settings.fail_on_error {
                outcome.into_result()?;
            } else {
                warn!(
                    "Connector {} was not updated, reporting success anyway",
                    self.settings.connector.name()
                );
            }
        }

        Ok(HandlerResponse::handled())
    }

    pub async fn update(&self) -> UpdateOutcome {
        update_connector(
            &self.client,
            &self.settings.connector,
            &self.settings.connector_config,
        )
        .await
    }
}
