//! Replication subnet groups.

use crate::shapes::{Filter, ReplicationSubnetGroup, Tag};

shape! {
    CreateReplicationSubnetGroupRequest {
        /// Lowercase; no spaces, underscores or periods; not `default`.
        replication_subnet_group_identifier: String,
        replication_subnet_group_description: String,
        /// Must span at least two Availability Zones.
        subnet_ids: Vec<String>,
        tags: Vec<Tag>,
    }

    /// Wraps the group that was created.
    CreateReplicationSubnetGroupResult {
        replication_subnet_group: ReplicationSubnetGroup,
    }

    ModifyReplicationSubnetGroupRequest {
        replication_subnet_group_identifier: String,
        replication_subnet_group_description: String,
        subnet_ids: Vec<String>,
    }

    ModifyReplicationSubnetGroupResult {
        replication_subnet_group: ReplicationSubnetGroup,
    }

    DeleteReplicationSubnetGroupRequest {
        replication_subnet_group_identifier: String,
    }

    DeleteReplicationSubnetGroupResult {}

    DescribeReplicationSubnetGroupsRequest {
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeReplicationSubnetGroupsResult {
        marker: String,
        replication_subnet_groups: Vec<ReplicationSubnetGroup>,
    }
}
