//! Shapes shared across resource families: tags, filters, certificates,
//! connections, quotas and maintenance.

use crate::enums::{RefreshSchemasStatusTypeValue, ReplicationEndpointTypeValue};
use crate::primitives::{Blob, Timestamp};

shape! {
    /// A user-defined key/value pair attached to a resource.
    Tag {
        /// 1-128 Unicode characters; cannot start with `aws:` or `dms:`.
        key: String,
        /// 1-256 Unicode characters.
        value: String,
    }

    /// Narrows a `Describe*` call to records whose `name` matches one of
    /// `values`.
    Filter {
        name: String,
        values: Vec<String>,
    }

    /// Usage and limit of one account quota.
    AccountQuota {
        /// e.g. `ReplicationInstances`, `AllocatedStorage`, `Endpoints`.
        account_quota_name: String,
        used: i64,
        max: i64,
    }

    /// An SSL certificate usable by endpoints.
    Certificate {
        certificate_identifier: String,
        certificate_creation_date: Timestamp,
        certificate_pem: String,
        /// Oracle wallet, for Oracle endpoints.
        certificate_wallet: Blob,
        certificate_arn: String,
        certificate_owner: String,
        valid_from_date: Timestamp,
        valid_to_date: Timestamp,
        signing_algorithm: String,
        key_length: i32,
    }

    /// Status of the connection between a replication instance and an
    /// endpoint.
    Connection {
        replication_instance_arn: String,
        endpoint_arn: String,
        /// `successful`, `testing`, `failed` or `deleting`.
        status: String,
        last_failure_message: String,
        endpoint_identifier: String,
        replication_instance_identifier: String,
    }

    /// An engine DMS can use as a source or target.
    SupportedEndpointType {
        engine_name: String,
        #[serde(rename = "SupportsCDC")]
        supports_cdc: bool,
        endpoint_type: ReplicationEndpointTypeValue,
        /// Earliest replication instance version that supports this engine.
        replication_instance_engine_minimum_version: String,
        engine_display_name: String,
    }

    /// Status of the last schema refresh for an endpoint.
    RefreshSchemasStatus {
        endpoint_arn: String,
        replication_instance_arn: String,
        status: RefreshSchemasStatusTypeValue,
        last_refresh_date: Timestamp,
        last_failure_message: String,
    }

    /// A maintenance action waiting to be applied to a resource.
    PendingMaintenanceAction {
        action: String,
        auto_applied_after_date: Timestamp,
        forced_apply_date: Timestamp,
        opt_in_status: String,
        current_apply_date: Timestamp,
        description: String,
    }

    /// Pending maintenance actions of one resource.
    ResourcePendingMaintenanceActions {
        resource_identifier: String,
        pending_maintenance_action_details: Vec<PendingMaintenanceAction>,
    }
}

impl Tag {
    /// Shorthand for a fully populated tag.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag::default().key(key).value(value)
    }
}

impl Filter {
    /// Shorthand for a filter on `name` matching any of `values`.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::default()
            .name(name)
            .values(values.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_new() {
        let filter = Filter::new("endpoint-type", ["source", "target"]);
        assert_eq!(filter.name.as_deref(), Some("endpoint-type"));
        assert_eq!(
            filter.values,
            Some(vec!["source".to_string(), "target".to_string()])
        );
    }

    #[test]
    fn test_supports_cdc_wire_name() {
        let json = r#"{"EngineName":"oracle","SupportsCDC":true,"EndpointType":"source"}"#;
        let supported: SupportedEndpointType = serde_json::from_str(json).unwrap();
        assert_eq!(supported.supports_cdc, Some(true));
        assert_eq!(supported.endpoint_type, Some(ReplicationEndpointTypeValue::Source));
    }

    #[test]
    fn test_certificate_wallet_round_trip() {
        let cert = Certificate::default()
            .certificate_identifier("oracle-wallet")
            .certificate_wallet(vec![0u8, 1, 2, 255]);
        let json = serde_json::to_string(&cert).unwrap();
        assert!(json.contains("\"CertificateWallet\":\"AAEC/w==\""));

        let back: Certificate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cert);
    }
}
