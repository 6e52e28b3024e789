//! Replication instances, subnet groups and replication tasks.

use crate::enums::{MigrationTypeValue, ReleaseStatusValues};
use crate::primitives::Timestamp;

shape! {
    /// A replication instance: the compute that runs replication tasks.
    ReplicationInstance {
        /// Stored lowercase; 1-63 alphanumerics or hyphens, starting with a
        /// letter.
        replication_instance_identifier: String,
        replication_instance_class: String,
        /// `available`, `creating`, `deleted`, `deleting`, `failed`,
        /// `modifying`, `upgrading`, `rebooting`, `storage-full`, ...
        replication_instance_status: String,
        /// Storage in gigabytes.
        allocated_storage: i32,
        instance_create_time: Timestamp,
        vpc_security_groups: Vec<VpcSecurityGroupMembership>,
        availability_zone: String,
        replication_subnet_group: ReplicationSubnetGroup,
        preferred_maintenance_window: String,
        pending_modified_values: ReplicationPendingModifiedValues,
        #[serde(rename = "MultiAZ")]
        multi_az: bool,
        engine_version: String,
        auto_minor_version_upgrade: bool,
        kms_key_id: String,
        replication_instance_arn: String,
        replication_instance_public_ip_address: String,
        replication_instance_private_ip_address: String,
        replication_instance_public_ip_addresses: Vec<String>,
        replication_instance_private_ip_addresses: Vec<String>,
        publicly_accessible: bool,
        secondary_availability_zone: String,
        /// Expiration of the free replication instance.
        free_until: Timestamp,
        /// Comma-separated DNS name servers.
        dns_name_servers: String,
    }

    /// Values that change when a pending modification is applied.
    ReplicationPendingModifiedValues {
        replication_instance_class: String,
        allocated_storage: i32,
        #[serde(rename = "MultiAZ")]
        multi_az: bool,
        engine_version: String,
    }

    /// Membership of a replication instance in a VPC security group.
    VpcSecurityGroupMembership {
        vpc_security_group_id: String,
        status: String,
    }

    /// A set of subnets a replication instance may be placed in.
    ReplicationSubnetGroup {
        replication_subnet_group_identifier: String,
        replication_subnet_group_description: String,
        vpc_id: String,
        subnet_group_status: String,
        subnets: Vec<Subnet>,
    }

    /// A subnet inside a replication subnet group.
    Subnet {
        subnet_identifier: String,
        subnet_availability_zone: AvailabilityZone,
        subnet_status: String,
    }

    /// An Availability Zone by name.
    AvailabilityZone {
        name: String,
    }

    /// A replication instance class that can be ordered in the region.
    OrderableReplicationInstance {
        engine_version: String,
        replication_instance_class: String,
        /// Storage type, e.g. `gp2`.
        storage_type: String,
        min_allocated_storage: i32,
        max_allocated_storage: i32,
        default_allocated_storage: i32,
        included_allocated_storage: i32,
        availability_zones: Vec<String>,
        release_status: ReleaseStatusValues,
    }

    /// Size of a task's log on a replication instance.
    ReplicationInstanceTaskLog {
        replication_task_name: String,
        replication_task_arn: String,
        /// Bytes.
        replication_instance_task_log_size: i64,
    }

    /// A replication task.
    ReplicationTask {
        replication_task_identifier: String,
        source_endpoint_arn: String,
        target_endpoint_arn: String,
        replication_instance_arn: String,
        migration_type: MigrationTypeValue,
        /// Table mappings as a JSON document.
        table_mappings: String,
        /// Task settings as a JSON document.
        replication_task_settings: String,
        status: String,
        last_failure_message: String,
        stop_reason: String,
        replication_task_creation_date: Timestamp,
        replication_task_start_date: Timestamp,
        cdc_start_position: String,
        cdc_stop_position: String,
        recovery_checkpoint: String,
        replication_task_arn: String,
        replication_task_stats: ReplicationTaskStats,
        /// Supplemental data the task uses to transform and validate data.
        task_data: String,
    }

    /// Progress statistics of a replication task.
    ReplicationTaskStats {
        full_load_progress_percent: i32,
        elapsed_time_millis: i64,
        tables_loaded: i32,
        tables_loading: i32,
        tables_queued: i32,
        tables_errored: i32,
        fresh_start_date: Timestamp,
        start_date: Timestamp,
        stop_date: Timestamp,
        full_load_start_date: Timestamp,
        full_load_finish_date: Timestamp,
    }

    /// Outcome of a premigration assessment run on a task.
    ReplicationTaskAssessmentResult {
        replication_task_identifier: String,
        replication_task_arn: String,
        replication_task_last_assessment_date: Timestamp,
        assessment_status: String,
        assessment_results_file: String,
        /// Assessment results as a JSON document.
        assessment_results: String,
        s3_object_url: String,
    }

    /// Per-table statistics of a replication task.
    TableStatistics {
        schema_name: String,
        table_name: String,
        inserts: i64,
        deletes: i64,
        updates: i64,
        ddls: i64,
        full_load_rows: i64,
        full_load_condtnl_chk_failed_rows: i64,
        full_load_error_rows: i64,
        full_load_start_time: Timestamp,
        full_load_end_time: Timestamp,
        full_load_reloaded: bool,
        last_update_time: Timestamp,
        table_state: String,
        validation_pending_records: i64,
        validation_failed_records: i64,
        validation_suspended_records: i64,
        validation_state: String,
        validation_state_details: String,
    }

    /// A table named for reload.
    TableToReload {
        schema_name: String,
        table_name: String,
    }
}
