//! Replication task lifecycle, assessments and table statistics.

use crate::enums::{MigrationTypeValue, ReloadOptionValue, StartReplicationTaskTypeValue};
use crate::primitives::Timestamp;
use crate::shapes::{
    Filter, ReplicationTask, ReplicationTaskAssessmentResult, TableStatistics, TableToReload, Tag,
};

shape! {
    CreateReplicationTaskRequest {
        replication_task_identifier: String,
        source_endpoint_arn: String,
        target_endpoint_arn: String,
        replication_instance_arn: String,
        migration_type: MigrationTypeValue,
        /// Table mappings as JSON, or `file://` path on the CLI.
        table_mappings: String,
        replication_task_settings: String,
        /// Mutually exclusive with `cdc_start_position`.
        cdc_start_time: Timestamp,
        cdc_start_position: String,
        cdc_stop_position: String,
        tags: Vec<Tag>,
        task_data: String,
    }

    CreateReplicationTaskResult {
        replication_task: ReplicationTask,
    }

    ModifyReplicationTaskRequest {
        replication_task_arn: String,
        replication_task_identifier: String,
        migration_type: MigrationTypeValue,
        table_mappings: String,
        replication_task_settings: String,
        cdc_start_time: Timestamp,
        cdc_start_position: String,
        cdc_stop_position: String,
        task_data: String,
    }

    ModifyReplicationTaskResult {
        replication_task: ReplicationTask,
    }

    DeleteReplicationTaskRequest {
        replication_task_arn: String,
    }

    DeleteReplicationTaskResult {
        replication_task: ReplicationTask,
    }

    DescribeReplicationTasksRequest {
        /// Filter names: `replication-task-arn`, `replication-task-id`,
        /// `migration-type`, `endpoint-arn`, `replication-instance-arn`.
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
        /// Omit task settings from the response.
        without_settings: bool,
    }

    DescribeReplicationTasksResult {
        marker: String,
        replication_tasks: Vec<ReplicationTask>,
    }

    StartReplicationTaskRequest {
        replication_task_arn: String,
        start_replication_task_type: StartReplicationTaskTypeValue,
        cdc_start_time: Timestamp,
        cdc_start_position: String,
        cdc_stop_position: String,
    }

    StartReplicationTaskResult {
        replication_task: ReplicationTask,
    }

    StopReplicationTaskRequest {
        replication_task_arn: String,
    }

    StopReplicationTaskResult {
        replication_task: ReplicationTask,
    }

    StartReplicationTaskAssessmentRequest {
        replication_task_arn: String,
    }

    StartReplicationTaskAssessmentResult {
        replication_task: ReplicationTask,
    }

    DescribeReplicationTaskAssessmentResultsRequest {
        /// Required when `marker` is absent.
        replication_task_arn: String,
        max_records: i32,
        marker: String,
    }

    DescribeReplicationTaskAssessmentResultsResult {
        marker: String,
        /// S3 bucket holding the assessment results.
        bucket_name: String,
        replication_task_assessment_results: Vec<ReplicationTaskAssessmentResult>,
    }

    DescribeTableStatisticsRequest {
        replication_task_arn: String,
        /// 10-500, default 100.
        max_records: i32,
        marker: String,
        /// Filter names: `schema-name`, `table-name`, `table-state`.
        filters: Vec<Filter>,
    }

    DescribeTableStatisticsResult {
        replication_task_arn: String,
        table_statistics: Vec<TableStatistics>,
        marker: String,
    }

    ReloadTablesRequest {
        replication_task_arn: String,
        tables_to_reload: Vec<TableToReload>,
        /// Defaults to `data-reload` on the service side.
        reload_option: ReloadOptionValue,
    }

    ReloadTablesResult {
        replication_task_arn: String,
    }
}
