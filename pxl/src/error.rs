pub mod missing_value;

use crate::error::missing_value::MissingValueError;
use std::fmt::{self, Display};

pub type PxlResult<T> = Result<T, PxlError>;

#[derive(Debug)]
pub enum PxlError {
    DescribeFailure(String),
    UpdateFailure(String),
    MissingValueError(MissingValueError),
    InvalidConnectorArn(String),
    UnknownConnectorState(String),
    StdIoError(std::io::Error),
    SerdeYamlError(serde_yaml::Error),
}

impl std::error::Error for PxlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PxlError::MissingValueError(err) => Some(err),
            PxlError::StdIoError(err) => Some(err),
            PxlError::SerdeYamlError(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for PxlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PxlError::DescribeFailure(msg) => write!(f, "describe connector failed: {}", msg),
            PxlError::UpdateFailure(msg) => write!(f, "update connector failed: {}", msg),
            PxlError::MissingValueError(err) => write!(f, "{}", err),
            PxlError::InvalidConnectorArn(arn) => write!(f, "Invalid connector ARN '{}'", arn),
            PxlError::UnknownConnectorState(state) => {
                write!(f, "Unknown connector state '{}'", state)
            }
            PxlError::StdIoError(err) => write!(f, "{}", err),
            PxlError::SerdeYamlError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for PxlError {
    fn from(error: std::io::Error) -> Self {
        PxlError::StdIoError(error)
    }
}

impl From<MissingValueError> for PxlError {
    fn from(error: MissingValueError) -> Self {
        PxlError::MissingValueError(error)
    }
}

impl From<serde_yaml::Error> for PxlError {
    fn from(error: serde_yaml::Error) -> Self {
        PxlError::SerdeYamlError(error)
    }
}
