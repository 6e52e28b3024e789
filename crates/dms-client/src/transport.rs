//! Transport seam
//!
//! The client only encodes and decodes; moving bytes to the service
//! (signing, HTTP, retries) belongs to a [`Transport`] implementation.
//! An in-memory implementation for tests lives in [`crate::fakes`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::codec::{WireRequest, WireResponse};

/// Failures below the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// A scripted transport had nothing queued for the target.
    #[error("no response available for {target}")]
    NoResponse { target: String },

    #[error("transport failure: {0}")]
    Other(String),
}

/// Sends one encoded request and returns the raw response.
///
/// Any HTTP status is a successful send; only failures to obtain a
/// response are `TransportError`s.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, TransportError>;
}
