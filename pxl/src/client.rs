pub mod msk_connect;

use crate::connector::arn::ConnectorRef;
use crate::connector::config::ConnectorConfig;
use crate::connector::description::{ConnectorDescription, UpdateResponse};
use crate::connector::version::ConnectorVersion;
use crate::error::PxlResult;
use async_trait::async_trait;

/// The two MSK Connect calls the updater makes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectorClient: Send + Sync {
    async fn describe_connector(&self, connector: &ConnectorRef)
        -> PxlResult<ConnectorDescription>;

    async fn update_connector(
        &self,
        connector: &ConnectorRef,
        version: &ConnectorVersion,
        config: &ConnectorConfig,
    ) -> PxlResult<UpdateResponse>;
}

#[async_trait]
impl<T: ConnectorClient + ?Sized> ConnectorClient for &T {
    async fn describe_connector(
        &self,
        connector: &ConnectorRef,
    ) -> PxlResult<ConnectorDescription> {
        (**self).describe_connector(connector).await
    }

    async fn update_connector(
        &self,
        connector: &ConnectorRef,
        version: &ConnectorVersion,
        config: &ConnectorConfig,
    ) -> PxlResult<UpdateResponse> {
        (**self).update_connector(connector, version, config).await
    }
}
