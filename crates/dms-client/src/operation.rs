//! Operation descriptors
//!
//! Every service operation is a zero-sized marker type implementing
//! [`Operation`], which ties the operation name to its request and result
//! shapes. [`OPERATIONS`] carries the same table in a form that can be
//! searched by name at runtime.

use serde::de::DeserializeOwned;
use serde::Serialize;

use dms_model::operations::*;
use dms_model::TARGET_PREFIX;

use crate::error::{ClientError, Result};

/// A single service operation.
pub trait Operation: Send + Sync + 'static {
    /// Request shape sent to the service.
    type Input: Serialize + DeserializeOwned + Send + Sync;
    /// Result shape returned by the service.
    type Output: Serialize + DeserializeOwned + Send;

    /// Operation name as it appears on the wire.
    const NAME: &'static str;

    /// Value of the `X-Amz-Target` header, `AmazonDMSv20160101.<NAME>`.
    fn target() -> String {
        target_for(Self::NAME)
    }
}

/// `X-Amz-Target` value for an operation name.
pub fn target_for(name: &str) -> String {
    format!("{TARGET_PREFIX}.{name}")
}

/// Runtime view of an [`Operation`].
#[derive(Debug, Clone, Copy)]
pub struct OperationInfo {
    pub name: &'static str,
    canonicalize: fn(&[u8]) -> serde_json::Result<Vec<u8>>,
}

impl OperationInfo {
    pub fn target(&self) -> String {
        target_for(self.name)
    }

    /// Parse `json` as this operation's request shape and re-encode it.
    ///
    /// The output is the exact body the client would send: unknown members
    /// dropped, absent members omitted, enum literals checked.
    pub fn canonical_request(&self, json: &[u8]) -> Result<Vec<u8>> {
        (self.canonicalize)(json).map_err(|e| ClientError::Deserialize {
            operation: self.name,
            message: e.to_string(),
        })
    }
}

fn canonicalize<Op: Operation>(json: &[u8]) -> serde_json::Result<Vec<u8>> {
    let input: Op::Input = serde_json::from_slice(json)?;
    serde_json::to_vec(&input)
}

macro_rules! define_operations {
    ($($op:ident($input:ident, $output:ident) => $method:ident,)+) => {
        $(
            #[doc = concat!("The `", stringify!($op), "` operation.")]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $op;

            impl Operation for $op {
                type Input = $input;
                type Output = $output;
                const NAME: &'static str = stringify!($op);
            }
        )+

        /// Every operation name, in alphabetical order.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($op)),+];

        /// Every operation, in the same order as [`OPERATION_NAMES`].
        pub static OPERATIONS: &[OperationInfo] = &[$(
            OperationInfo {
                name: stringify!($op),
                canonicalize: canonicalize::<$op>,
            }
        ),+];
    };
}

with_operations!(define_operations);

/// Find an operation by its exact wire name.
pub fn lookup(name: &str) -> Option<&'static OperationInfo> {
    OPERATIONS.iter().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_count() {
        assert_eq!(OPERATION_NAMES.len(), 47);
        assert_eq!(OPERATIONS.len(), OPERATION_NAMES.len());
    }

    #[test]
    fn test_names_are_sorted_and_unique() {
        let mut sorted = OPERATION_NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, OPERATION_NAMES);
    }

    #[test]
    fn test_target_header() {
        assert_eq!(
            CreateEndpoint::target(),
            "AmazonDMSv20160101.CreateEndpoint"
        );
        assert_eq!(
            lookup("DescribeTableStatistics").unwrap().target(),
            "AmazonDMSv20160101.DescribeTableStatistics"
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("ReloadTables").is_some());
        assert!(lookup("reloadTables").is_none());
        assert!(lookup("ReloadTable").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_canonical_request_drops_unknown_members() {
        let op = lookup("DeleteEndpoint").unwrap();
        let body = op
            .canonical_request(br#"{"EndpointArn":"arn:x","Bogus":1}"#)
            .unwrap();
        assert_eq!(body, br#"{"EndpointArn":"arn:x"}"#);
    }

    #[test]
    fn test_canonical_request_rejects_bad_enum() {
        let op = lookup("StartReplicationTask").unwrap();
        let err = op
            .canonical_request(br#"{"StartReplicationTaskType":"restart"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Deserialize {
                operation: "StartReplicationTask",
                ..
            }
        ));
    }
}
