//! DMS Client: typed calls to AWS Database Migration Service
//!
//! Layers:
//! - `operation`: one marker type per service operation, tying its name to
//!   its request/result shapes
//! - `codec`: JSON 1.1 request encoding and response/error decoding
//! - `transport`: the async seam that moves bytes (signing and HTTP live
//!   behind it)
//! - `client`: `DmsClient`, one async method per operation
//!
//! In-memory fakes for testing are provided via the `fakes` module.

#[macro_use]
mod macros;

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod fakes;
pub mod operation;
pub mod transport;

pub use client::DmsClient;
pub use codec::{decode_error, decode_response, encode_request, WireRequest, WireResponse};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use operation::{lookup, Operation, OperationInfo, OPERATIONS, OPERATION_NAMES};
pub use transport::{Transport, TransportError};

pub use dms_model as model;
