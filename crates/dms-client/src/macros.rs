//! The operation table, shared by every generator in this crate.

/// Invokes `$callback!` with one `Name(Request, Result) => method` entry
/// per service operation, in alphabetical order.
macro_rules! with_operations {
    ($callback:ident) => {
        $callback! {
            AddTagsToResource(AddTagsToResourceRequest, AddTagsToResourceResult) => add_tags_to_resource,
            ApplyPendingMaintenanceAction(ApplyPendingMaintenanceActionRequest, ApplyPendingMaintenanceActionResult) => apply_pending_maintenance_action,
            CreateEndpoint(CreateEndpointRequest, CreateEndpointResult) => create_endpoint,
            CreateEventSubscription(CreateEventSubscriptionRequest, CreateEventSubscriptionResult) => create_event_subscription,
            CreateReplicationInstance(CreateReplicationInstanceRequest, CreateReplicationInstanceResult) => create_replication_instance,
            CreateReplicationSubnetGroup(CreateReplicationSubnetGroupRequest, CreateReplicationSubnetGroupResult) => create_replication_subnet_group,
            CreateReplicationTask(CreateReplicationTaskRequest, CreateReplicationTaskResult) => create_replication_task,
            DeleteCertificate(DeleteCertificateRequest, DeleteCertificateResult) => delete_certificate,
            DeleteConnection(DeleteConnectionRequest, DeleteConnectionResult) => delete_connection,
            DeleteEndpoint(DeleteEndpointRequest, DeleteEndpointResult) => delete_endpoint,
            DeleteEventSubscription(DeleteEventSubscriptionRequest, DeleteEventSubscriptionResult) => delete_event_subscription,
            DeleteReplicationInstance(DeleteReplicationInstanceRequest, DeleteReplicationInstanceResult) => delete_replication_instance,
            DeleteReplicationSubnetGroup(DeleteReplicationSubnetGroupRequest, DeleteReplicationSubnetGroupResult) => delete_replication_subnet_group,
            DeleteReplicationTask(DeleteReplicationTaskRequest, DeleteReplicationTaskResult) => delete_replication_task,
            DescribeAccountAttributes(DescribeAccountAttributesRequest, DescribeAccountAttributesResult) => describe_account_attributes,
            DescribeCertificates(DescribeCertificatesRequest, DescribeCertificatesResult) => describe_certificates,
            DescribeConnections(DescribeConnectionsRequest, DescribeConnectionsResult) => describe_connections,
            DescribeEndpointTypes(DescribeEndpointTypesRequest, DescribeEndpointTypesResult) => describe_endpoint_types,
            DescribeEndpoints(DescribeEndpointsRequest, DescribeEndpointsResult) => describe_endpoints,
            DescribeEventCategories(DescribeEventCategoriesRequest, DescribeEventCategoriesResult) => describe_event_categories,
            DescribeEventSubscriptions(DescribeEventSubscriptionsRequest, DescribeEventSubscriptionsResult) => describe_event_subscriptions,
            DescribeEvents(DescribeEventsRequest, DescribeEventsResult) => describe_events,
            DescribeOrderableReplicationInstances(DescribeOrderableReplicationInstancesRequest, DescribeOrderableReplicationInstancesResult) => describe_orderable_replication_instances,
            DescribePendingMaintenanceActions(DescribePendingMaintenanceActionsRequest, DescribePendingMaintenanceActionsResult) => describe_pending_maintenance_actions,
            DescribeRefreshSchemasStatus(DescribeRefreshSchemasStatusRequest, DescribeRefreshSchemasStatusResult) => describe_refresh_schemas_status,
            DescribeReplicationInstanceTaskLogs(DescribeReplicationInstanceTaskLogsRequest, DescribeReplicationInstanceTaskLogsResult) => describe_replication_instance_task_logs,
            DescribeReplicationInstances(DescribeReplicationInstancesRequest, DescribeReplicationInstancesResult) => describe_replication_instances,
            DescribeReplicationSubnetGroups(DescribeReplicationSubnetGroupsRequest, DescribeReplicationSubnetGroupsResult) => describe_replication_subnet_groups,
            DescribeReplicationTaskAssessmentResults(DescribeReplicationTaskAssessmentResultsRequest, DescribeReplicationTaskAssessmentResultsResult) => describe_replication_task_assessment_results,
            DescribeReplicationTasks(DescribeReplicationTasksRequest, DescribeReplicationTasksResult) => describe_replication_tasks,
            DescribeSchemas(DescribeSchemasRequest, DescribeSchemasResult) => describe_schemas,
            DescribeTableStatistics(DescribeTableStatisticsRequest, DescribeTableStatisticsResult) => describe_table_statistics,
            ImportCertificate(ImportCertificateRequest, ImportCertificateResult) => import_certificate,
            ListTagsForResource(ListTagsForResourceRequest, ListTagsForResourceResult) => list_tags_for_resource,
            ModifyEndpoint(ModifyEndpointRequest, ModifyEndpointResult) => modify_endpoint,
            ModifyEventSubscription(ModifyEventSubscriptionRequest, ModifyEventSubscriptionResult) => modify_event_subscription,
            ModifyReplicationInstance(ModifyReplicationInstanceRequest, ModifyReplicationInstanceResult) => modify_replication_instance,
            ModifyReplicationSubnetGroup(ModifyReplicationSubnetGroupRequest, ModifyReplicationSubnetGroupResult) => modify_replication_subnet_group,
            ModifyReplicationTask(ModifyReplicationTaskRequest, ModifyReplicationTaskResult) => modify_replication_task,
            RebootReplicationInstance(RebootReplicationInstanceRequest, RebootReplicationInstanceResult) => reboot_replication_instance,
            RefreshSchemas(RefreshSchemasRequest, RefreshSchemasResult) => refresh_schemas,
            ReloadTables(ReloadTablesRequest, ReloadTablesResult) => reload_tables,
            RemoveTagsFromResource(RemoveTagsFromResourceRequest, RemoveTagsFromResourceResult) => remove_tags_from_resource,
            StartReplicationTask(StartReplicationTaskRequest, StartReplicationTaskResult) => start_replication_task,
            StartReplicationTaskAssessment(StartReplicationTaskAssessmentRequest, StartReplicationTaskAssessmentResult) => start_replication_task_assessment,
            StopReplicationTask(StopReplicationTaskRequest, StopReplicationTaskResult) => stop_replication_task,
            TestConnection(TestConnectionRequest, TestConnectionResult) => test_connection,
        }
    };
}
