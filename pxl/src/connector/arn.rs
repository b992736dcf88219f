use crate::error::{PxlError, PxlResult};
use std::fmt::{self, Display};
use std::str::FromStr;

/// ARN of an MSK Connect connector, e.g.
/// `arn:aws:kafkaconnect:us-east-1:123456789012:connector/my-connector/<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorRef {
    arn: String,
    region: String,
    name: String,
}

impl ConnectorRef {
    pub fn arn(&self) -> &str {
        &self.arn
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for ConnectorRef {
    type Err = PxlError;

    fn from_str(s: &str) -> PxlResult<Self> {
        let invalid = || PxlError::InvalidConnectorArn(s.to_string());

        let parts: Vec<&str> = s.splitn(6, ':').collect();
        if parts.len() != 6 || parts[0] != "arn" || parts[2] != "kafkaconnect" {
            return Err(invalid());
        }

        let region = parts[3];
        if region.is_empty() {
            return Err(invalid());
        }

        let mut resource = parts[5].split('/');
        let name = match (resource.next(), resource.next(), resource.next()) {
            (Some("connector"), Some(name), Some(id)) if !name.is_empty() && !id.is_empty() => {
                name
            }
            _ => return Err(invalid()),
        };

        Ok(ConnectorRef {
            arn: s.to_string(),
            region: region.to_string(),
            name: name.to_string(),
        })
    }
}

impl Display for ConnectorRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.arn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:kafkaconnect:us-east-1:173881142689:connector/ecommerce-cdc/0d897e8a-83c2-48ee-b616-37d1b4d51c0b-2";

    #[test]
    fn test_from_str() {
        let connector = ConnectorRef::from_str(ARN).unwrap();
        assert_eq!(connector.arn(), ARN);
        assert_eq!(connector.region(), "us-east-1");
        assert_eq!(connector.name(), "ecommerce-cdc");
        assert_eq!(connector.to_string(), ARN);
    }

    #[test]
    fn test_from_str_other_partition() {
        let arn = "arn:aws-cn:kafkaconnect:cn-north-1:123456789012:connector/orders/abc";
        let connector = ConnectorRef::from_str(arn).unwrap();
        assert_eq!(connector.region(), "cn-north-1");
        assert_eq!(connector.name(), "orders");
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(ConnectorRef::from_str("").is_err());
        assert!(ConnectorRef::from_str("ecommerce-cdc").is_err());
        assert!(
            ConnectorRef::from_str("arn:aws:kafka:us-east-1:123456789012:cluster/demo/abc").is_err()
        );
        assert!(
            ConnectorRef::from_str("arn:aws:kafkaconnect::123456789012:connector/demo/abc")
                .is_err()
        );
        assert!(
            ConnectorRef::from_str("arn:aws:kafkaconnect:us-east-1:123456789012:connector/demo")
                .is_err()
        );
        assert!(matches!(
            ConnectorRef::from_str("arn:aws:kafkaconnect:us-east-1:1:worker-configuration/a/b"),
            Err(PxlError::InvalidConnectorArn(_))
        ));
    }
}
