use crate::error::PxlError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectorState {
    #[serde(rename = "RUNNING")]
    Running,

    #[serde(rename = "CREATING")]
    Creating,

    #[serde(rename = "UPDATING")]
    Updating,

    #[serde(rename = "DELETING")]
    Deleting,

    #[serde(rename = "FAILED")]
    Failed,
}

impl FromStr for ConnectorState {
    type Err = PxlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RUNNING" => Ok(ConnectorState::Running),
            "CREATING" => Ok(ConnectorState::Creating),
            "UPDATING" => Ok(ConnectorState::Updating),
            "DELETING" => Ok(ConnectorState::Deleting),
            "FAILED" => Ok(ConnectorState::Failed),
            _ => Err(PxlError::UnknownConnectorState(s.to_string())),
        }
    }
}

impl Display for ConnectorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ConnectorState::Running => "RUNNING",
            ConnectorState::Creating => "CREATING",
            ConnectorState::Updating => "UPDATING",
            ConnectorState::Deleting => "DELETING",
            ConnectorState::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}
