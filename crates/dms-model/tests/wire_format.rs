//! JSON 1.1 wire-form tests for requests and results.

use dms_model::*;
use serde_json::{json, Value};

#[test]
fn request_omits_absent_members() {
    let request = DescribeReplicationTasksRequest::default()
        .max_records(50)
        .without_settings(true);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({ "MaxRecords": 50, "WithoutSettings": true }));
}

#[test]
fn empty_request_serializes_to_empty_object() {
    let value = serde_json::to_value(DescribeAccountAttributesRequest::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn create_task_request_uses_service_literals() {
    let request = CreateReplicationTaskRequest::default()
        .replication_task_identifier("orders-cdc")
        .source_endpoint_arn("arn:src")
        .target_endpoint_arn("arn:tgt")
        .replication_instance_arn("arn:ri")
        .migration_type(MigrationTypeValue::FullLoadAndCdc)
        .table_mappings(r#"{"rules":[]}"#)
        .cdc_start_time(Timestamp::from_secs(1_600_000_000).unwrap());

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["MigrationType"], "full-load-and-cdc");
    assert_eq!(value["CdcStartTime"], 1_600_000_000);
    assert_eq!(value["TableMappings"], r#"{"rules":[]}"#);
    assert!(value.get("Tags").is_none());
}

#[test]
fn subnet_group_result_parses_nested_members() {
    let body = json!({
        "ReplicationSubnetGroup": {
            "ReplicationSubnetGroupIdentifier": "dms-private",
            "ReplicationSubnetGroupDescription": "private subnets",
            "VpcId": "vpc-0abc",
            "SubnetGroupStatus": "Complete",
            "Subnets": [
                {
                    "SubnetIdentifier": "subnet-a",
                    "SubnetAvailabilityZone": { "Name": "us-east-1a" },
                    "SubnetStatus": "Active"
                }
            ]
        }
    });

    let result: CreateReplicationSubnetGroupResult = serde_json::from_value(body).unwrap();
    let group = result.replication_subnet_group.unwrap();
    assert_eq!(group.vpc_id.as_deref(), Some("vpc-0abc"));
    let subnets = group.subnets.unwrap();
    assert_eq!(subnets.len(), 1);
    assert_eq!(
        subnets[0]
            .subnet_availability_zone
            .as_ref()
            .and_then(|az| az.name.as_deref()),
        Some("us-east-1a")
    );
}

#[test]
fn certificates_result_parses_timestamps_and_wallets() {
    let body = json!({
        "Marker": "next",
        "Certificates": [
            {
                "CertificateIdentifier": "rds-ca",
                "CertificateCreationDate": 1585000000.5,
                "ValidToDate": 1900000000,
                "CertificateWallet": "d2FsbGV0",
                "KeyLength": 2048
            }
        ]
    });

    let result: DescribeCertificatesResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.marker.as_deref(), Some("next"));
    let cert = &result.certificates.as_ref().unwrap()[0];
    assert_eq!(cert.certificate_creation_date.unwrap().secs(), 1_585_000_000);
    assert_eq!(cert.valid_to_date.unwrap().secs(), 1_900_000_000);
    assert_eq!(cert.certificate_wallet.as_ref().unwrap().as_bytes(), b"wallet");
    assert_eq!(cert.key_length, Some(2048));
}

#[test]
fn unknown_members_are_ignored_on_results() {
    let body = json!({ "Tags": [], "FutureField": { "Nested": true } });
    let result: ListTagsForResourceResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.tag_list, None);
}

#[test]
fn unknown_enum_literal_fails_the_parse() {
    let body = json!({ "ReplicationTask": { "MigrationType": "incremental" } });
    let err = serde_json::from_value::<StartReplicationTaskResult>(body).unwrap_err();
    assert!(err.to_string().contains("invalid MigrationTypeValue value"));
}

#[test]
fn explicit_null_reads_as_absent() {
    let body = json!({ "Marker": null, "Endpoints": null });
    let result: DescribeEndpointsResult = serde_json::from_value(body).unwrap();
    assert_eq!(result, DescribeEndpointsResult::default());
}

#[test]
fn replication_instance_keeps_service_acronyms() {
    let instance = ReplicationInstance::default()
        .replication_instance_identifier("ri-1")
        .multi_az(true);

    let value: Value = serde_json::to_value(&instance).unwrap();
    assert_eq!(value["MultiAZ"], true);
    assert!(value.get("MultiAz").is_none());
}
