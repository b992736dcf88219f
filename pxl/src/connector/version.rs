use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Optimistic concurrency token returned by DescribeConnector. UpdateConnector
/// is rejected by the service when it no longer matches.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConnectorVersion(String);

impl ConnectorVersion {
    pub fn new(version: impl Into<String>) -> Self {
        ConnectorVersion(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConnectorVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
