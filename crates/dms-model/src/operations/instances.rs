//! Replication instance lifecycle, maintenance and account limits.

use crate::shapes::{
    AccountQuota, Filter, OrderableReplicationInstance, ReplicationInstance,
    ReplicationInstanceTaskLog, ResourcePendingMaintenanceActions, Tag,
};

shape! {
    CreateReplicationInstanceRequest {
        replication_instance_identifier: String,
        /// Gigabytes.
        allocated_storage: i32,
        /// e.g. `dms.t2.micro`, `dms.c4.large`, `dms.r4.xlarge`.
        replication_instance_class: String,
        vpc_security_group_ids: Vec<String>,
        availability_zone: String,
        replication_subnet_group_identifier: String,
        /// `ddd:hh24:mi-ddd:hh24:mi`, UTC, at least 30 minutes.
        preferred_maintenance_window: String,
        /// Cannot be combined with `availability_zone`.
        #[serde(rename = "MultiAZ")]
        multi_az: bool,
        engine_version: String,
        auto_minor_version_upgrade: bool,
        tags: Vec<Tag>,
        kms_key_id: String,
        publicly_accessible: bool,
        dns_name_servers: String,
    }

    CreateReplicationInstanceResult {
        replication_instance: ReplicationInstance,
    }

    ModifyReplicationInstanceRequest {
        replication_instance_arn: String,
        allocated_storage: i32,
        /// Apply now rather than in the next maintenance window.
        apply_immediately: bool,
        replication_instance_class: String,
        vpc_security_group_ids: Vec<String>,
        preferred_maintenance_window: String,
        #[serde(rename = "MultiAZ")]
        multi_az: bool,
        engine_version: String,
        /// Required for a major engine version change.
        allow_major_version_upgrade: bool,
        auto_minor_version_upgrade: bool,
        replication_instance_identifier: String,
    }

    ModifyReplicationInstanceResult {
        replication_instance: ReplicationInstance,
    }

    DeleteReplicationInstanceRequest {
        replication_instance_arn: String,
    }

    DeleteReplicationInstanceResult {
        replication_instance: ReplicationInstance,
    }

    RebootReplicationInstanceRequest {
        replication_instance_arn: String,
        /// Reboot with failover; only for Multi-AZ instances.
        force_failover: bool,
    }

    RebootReplicationInstanceResult {
        replication_instance: ReplicationInstance,
    }

    DescribeReplicationInstancesRequest {
        /// Filter names: `replication-instance-arn`,
        /// `replication-instance-id`, `replication-instance-class`,
        /// `engine-version`.
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeReplicationInstancesResult {
        marker: String,
        replication_instances: Vec<ReplicationInstance>,
    }

    DescribeOrderableReplicationInstancesRequest {
        max_records: i32,
        marker: String,
    }

    DescribeOrderableReplicationInstancesResult {
        orderable_replication_instances: Vec<OrderableReplicationInstance>,
        marker: String,
    }

    DescribeReplicationInstanceTaskLogsRequest {
        replication_instance_arn: String,
        max_records: i32,
        marker: String,
    }

    DescribeReplicationInstanceTaskLogsResult {
        replication_instance_arn: String,
        replication_instance_task_logs: Vec<ReplicationInstanceTaskLog>,
        marker: String,
    }

    ApplyPendingMaintenanceActionRequest {
        replication_instance_arn: String,
        /// `os-upgrade`, `system-update` or `db-upgrade`.
        apply_action: String,
        /// `immediate`, `next-maintenance` or `undo-opt-in`.
        opt_in_type: String,
    }

    ApplyPendingMaintenanceActionResult {
        resource_pending_maintenance_actions: ResourcePendingMaintenanceActions,
    }

    DescribePendingMaintenanceActionsRequest {
        replication_instance_arn: String,
        filters: Vec<Filter>,
        marker: String,
        max_records: i32,
    }

    DescribePendingMaintenanceActionsResult {
        pending_maintenance_actions: Vec<ResourcePendingMaintenanceActions>,
        marker: String,
    }

    DescribeAccountAttributesRequest {}

    DescribeAccountAttributesResult {
        account_quotas: Vec<AccountQuota>,
        /// Unique identifier used in S3 bucket names created by the service.
        unique_account_identifier: String,
    }
}
