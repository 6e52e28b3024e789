//! Events, event categories and event notification subscriptions.

use crate::enums::SourceType;
use crate::primitives::Timestamp;
use crate::shapes::{Event, EventCategoryGroup, EventSubscription, Filter, Tag};

shape! {
    CreateEventSubscriptionRequest {
        /// Fewer than 255 characters.
        subscription_name: String,
        sns_topic_arn: String,
        /// `replication-instance` or `replication-task`; all sources when
        /// absent.
        source_type: String,
        event_categories: Vec<String>,
        source_ids: Vec<String>,
        /// Defaults to true on the service side.
        enabled: bool,
        tags: Vec<Tag>,
    }

    CreateEventSubscriptionResult {
        event_subscription: EventSubscription,
    }

    ModifyEventSubscriptionRequest {
        subscription_name: String,
        sns_topic_arn: String,
        source_type: String,
        event_categories: Vec<String>,
        enabled: bool,
    }

    ModifyEventSubscriptionResult {
        event_subscription: EventSubscription,
    }

    DeleteEventSubscriptionRequest {
        subscription_name: String,
    }

    DeleteEventSubscriptionResult {
        event_subscription: EventSubscription,
    }

    DescribeEventSubscriptionsRequest {
        subscription_name: String,
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeEventSubscriptionsResult {
        marker: String,
        event_subscriptions_list: Vec<EventSubscription>,
    }

    DescribeEventCategoriesRequest {
        source_type: String,
        filters: Vec<Filter>,
    }

    DescribeEventCategoriesResult {
        event_category_group_list: Vec<EventCategoryGroup>,
    }

    DescribeEventsRequest {
        source_identifier: String,
        source_type: SourceType,
        start_time: Timestamp,
        end_time: Timestamp,
        /// Minutes of history to return.
        duration: i32,
        event_categories: Vec<String>,
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeEventsResult {
        marker: String,
        events: Vec<Event>,
    }
}
