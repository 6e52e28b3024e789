//! Record shapes returned inside results and nested inside requests.

mod common;
mod endpoint;
mod events;
mod replication;

pub use common::{
    AccountQuota, Certificate, Connection, Filter, PendingMaintenanceAction, RefreshSchemasStatus,
    ResourcePendingMaintenanceActions, SupportedEndpointType, Tag,
};
pub use endpoint::{
    DmsTransferSettings, DynamoDbSettings, ElasticsearchSettings, Endpoint, KafkaSettings,
    KinesisSettings, MongoDbSettings, NeptuneSettings, RedshiftSettings, S3Settings,
};
pub use events::{Event, EventCategoryGroup, EventSubscription};
pub use replication::{
    AvailabilityZone, OrderableReplicationInstance, ReplicationInstance,
    ReplicationInstanceTaskLog, ReplicationPendingModifiedValues, ReplicationSubnetGroup,
    ReplicationTask, ReplicationTaskAssessmentResult, ReplicationTaskStats, Subnet,
    TableStatistics, TableToReload, VpcSecurityGroupMembership,
};
