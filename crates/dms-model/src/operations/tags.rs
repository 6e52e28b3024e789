//! Resource tagging.

use crate::shapes::Tag;

shape! {
    AddTagsToResourceRequest {
        /// Any taggable resource ARN.
        resource_arn: String,
        tags: Vec<Tag>,
    }

    AddTagsToResourceResult {}

    ListTagsForResourceRequest {
        resource_arn: String,
    }

    ListTagsForResourceResult {
        tag_list: Vec<Tag>,
    }

    RemoveTagsFromResourceRequest {
        resource_arn: String,
        tag_keys: Vec<String>,
    }

    RemoveTagsFromResourceResult {}
}
