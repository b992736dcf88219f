use crate::connector::state::ConnectorState;
use crate::connector::version::ConnectorVersion;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ConnectorDescription {
    pub name: Option<String>,
    pub current_version: Option<ConnectorVersion>,
    pub state: Option<ConnectorState>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct UpdateResponse {
    pub connector_arn: Option<String>,
    pub state: Option<ConnectorState>,
}
