//! Service events and event notification subscriptions.

use crate::enums::SourceType;
use crate::primitives::Timestamp;

shape! {
    /// An event raised by the service for one of its resources.
    Event {
        /// Identifier of the source, e.g. a replication instance name.
        source_identifier: String,
        source_type: SourceType,
        message: String,
        event_categories: Vec<String>,
        date: Timestamp,
    }

    /// Event categories available for one source type.
    EventCategoryGroup {
        /// `replication-instance` or `replication-task`.
        source_type: String,
        event_categories: Vec<String>,
    }

    /// An SNS notification subscription for service events.
    EventSubscription {
        customer_aws_id: String,
        cust_subscription_id: String,
        sns_topic_arn: String,
        /// `creating`, `modifying`, `deleting`, `active`, `no-permission`,
        /// `topic-not-exist`.
        status: String,
        subscription_creation_time: String,
        source_type: String,
        source_ids_list: Vec<String>,
        event_categories_list: Vec<String>,
        enabled: bool,
    }
}
