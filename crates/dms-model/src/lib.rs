//! DMS Model: typed shapes for AWS Database Migration Service
//!
//! Mirrors the request/response shapes of the `2016-01-01` API:
//! - `shapes`: records nested inside requests and results (endpoints,
//!   replication instances, tasks, certificates, ...)
//! - `operations`: one `<Operation>Request` / `<Operation>Result` pair per
//!   service operation
//! - `enums`: closed value sets with strict reverse lookup
//! - `error`: local model errors and the service's named exceptions
//!
//! Every shape field is optional, list fields are copied on set, and
//! equality/hashing are structural. Shapes serialize to the JSON 1.1 wire
//! form (PascalCase members, absent fields omitted).

#[macro_use]
mod macros;

pub mod enums;
pub mod error;
pub mod operations;
pub mod primitives;
pub mod shapes;

pub use enums::*;
pub use error::{ModelError, Result, ServiceError};
pub use operations::*;
pub use primitives::{Blob, Timestamp};
pub use shapes::*;

/// Service API version these shapes were modelled from.
pub const API_VERSION: &str = "2016-01-01";

/// Prefix of the `X-Amz-Target` header for every operation.
pub const TARGET_PREFIX: &str = "AmazonDMSv20160101";
