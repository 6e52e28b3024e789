//! The service client.

use std::sync::Arc;
use std::time::Instant;

use dms_model::operations::*;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::codec::{decode_response, encode_request};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::operation::{self, Operation};
use crate::transport::Transport;

/// Client for the Database Migration Service API.
///
/// Cloning is cheap; clones share the configuration and transport.
///
/// ```ignore
/// let client = DmsClient::new(ClientConfig::from_env()?, transport)?;
/// let endpoints = client
///     .describe_endpoints(DescribeEndpointsRequest::default().max_records(20))
///     .await?;
/// ```
#[derive(Debug)]
pub struct DmsClient<T> {
    config: Arc<ClientConfig>,
    transport: Arc<T>,
}

impl<T> Clone for DmsClient<T> {
    fn clone(&self) -> Self {
        DmsClient {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> DmsClient<T> {
    /// Build a client. Fails if `config` does not validate.
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(DmsClient {
            config: Arc::new(config),
            transport: Arc::new(transport),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `input` as `Op` and decode the result.
    pub async fn call<Op: Operation>(&self, input: Op::Input) -> Result<Op::Output> {
        let request = encode_request::<Op>(&input)?
            .with_endpoint(self.config.endpoint())
            .with_header("User-Agent", self.config.user_agent());

        let span = info_span!(
            "dms.call",
            operation = Op::NAME,
            invocation_id = %request.invocation_id,
        );

        async move {
            let started = Instant::now();
            info!(
                event = "call.started",
                amz_target = %request.target,
                body_bytes = request.body.len(),
            );

            let outcome = match self.transport.send(request).await {
                Ok(response) => {
                    debug!(event = "call.response", status = response.status);
                    let status = response.status;
                    decode_response::<Op>(response).map(|output| (status, output))
                }
                Err(e) => Err(ClientError::from(e)),
            };

            let duration_ms = started.elapsed().as_millis() as u64;
            match outcome {
                Ok((status, output)) => {
                    info!(event = "call.succeeded", status = status, duration_ms = duration_ms);
                    Ok(output)
                }
                Err(e) => {
                    warn!(
                        event = "call.failed",
                        duration_ms = duration_ms,
                        status = e.status(),
                        request_id = e.request_id(),
                        error = %e,
                    );
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}

macro_rules! define_client_methods {
    ($($op:ident($input:ident, $output:ident) => $method:ident,)+) => {
        impl<T: Transport> DmsClient<T> {
            $(
                #[doc = concat!("Calls `", stringify!($op), "`.")]
                pub async fn $method(&self, input: $input) -> Result<$output> {
                    self.call::<operation::$op>(input).await
                }
            )+
        }
    };
}

with_operations!(define_client_methods);
