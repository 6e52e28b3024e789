//! Endpoint lifecycle, connection tests and schema discovery.

use crate::enums::{DmsSslModeValue, ReplicationEndpointTypeValue};
use crate::shapes::{
    Connection, DmsTransferSettings, DynamoDbSettings, ElasticsearchSettings, Endpoint, Filter,
    KafkaSettings, KinesisSettings, MongoDbSettings, NeptuneSettings, RedshiftSettings,
    RefreshSchemasStatus, S3Settings, SupportedEndpointType, Tag,
};

shape! {
    CreateEndpointRequest {
        /// Must begin with a letter; letters, digits and hyphens only.
        endpoint_identifier: String,
        endpoint_type: ReplicationEndpointTypeValue,
        /// `mysql`, `oracle`, `postgres`, `mariadb`, `aurora`,
        /// `aurora-postgresql`, `redshift`, `s3`, `db2`, `azuredb`, `sybase`,
        /// `dynamodb`, `mongodb`, `kinesis`, `kafka`, `elasticsearch`,
        /// `documentdb`, `sqlserver` or `neptune`.
        engine_name: String,
        username: String,
        password: String,
        server_name: String,
        port: i32,
        database_name: String,
        extra_connection_attributes: String,
        /// KMS key for the connection parameters; the account default key
        /// is used when absent.
        kms_key_id: String,
        tags: Vec<Tag>,
        certificate_arn: String,
        ssl_mode: DmsSslModeValue,
        service_access_role_arn: String,
        external_table_definition: String,
        dynamo_db_settings: DynamoDbSettings,
        s3_settings: S3Settings,
        dms_transfer_settings: DmsTransferSettings,
        mongo_db_settings: MongoDbSettings,
        kinesis_settings: KinesisSettings,
        kafka_settings: KafkaSettings,
        elasticsearch_settings: ElasticsearchSettings,
        neptune_settings: NeptuneSettings,
        redshift_settings: RedshiftSettings,
    }

    CreateEndpointResult {
        endpoint: Endpoint,
    }

    ModifyEndpointRequest {
        endpoint_arn: String,
        endpoint_identifier: String,
        endpoint_type: ReplicationEndpointTypeValue,
        engine_name: String,
        username: String,
        password: String,
        server_name: String,
        port: i32,
        database_name: String,
        extra_connection_attributes: String,
        certificate_arn: String,
        ssl_mode: DmsSslModeValue,
        service_access_role_arn: String,
        external_table_definition: String,
        dynamo_db_settings: DynamoDbSettings,
        s3_settings: S3Settings,
        dms_transfer_settings: DmsTransferSettings,
        mongo_db_settings: MongoDbSettings,
        kinesis_settings: KinesisSettings,
        kafka_settings: KafkaSettings,
        elasticsearch_settings: ElasticsearchSettings,
        neptune_settings: NeptuneSettings,
        redshift_settings: RedshiftSettings,
    }

    ModifyEndpointResult {
        endpoint: Endpoint,
    }

    DeleteEndpointRequest {
        endpoint_arn: String,
    }

    DeleteEndpointResult {
        endpoint: Endpoint,
    }

    DescribeEndpointsRequest {
        /// Filter names: `endpoint-arn`, `endpoint-type`, `endpoint-id`,
        /// `engine-name`.
        filters: Vec<Filter>,
        /// 20-100, default 100.
        max_records: i32,
        marker: String,
    }

    DescribeEndpointsResult {
        marker: String,
        endpoints: Vec<Endpoint>,
    }

    DescribeEndpointTypesRequest {
        /// Filter names: `engine-name`, `endpoint-type`.
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeEndpointTypesResult {
        marker: String,
        supported_endpoint_types: Vec<SupportedEndpointType>,
    }

    TestConnectionRequest {
        replication_instance_arn: String,
        endpoint_arn: String,
    }

    TestConnectionResult {
        connection: Connection,
    }

    DeleteConnectionRequest {
        endpoint_arn: String,
        replication_instance_arn: String,
    }

    DeleteConnectionResult {
        connection: Connection,
    }

    DescribeConnectionsRequest {
        /// Filter names: `endpoint-arn`, `replication-instance-arn`.
        filters: Vec<Filter>,
        max_records: i32,
        marker: String,
    }

    DescribeConnectionsResult {
        marker: String,
        connections: Vec<Connection>,
    }

    RefreshSchemasRequest {
        endpoint_arn: String,
        replication_instance_arn: String,
    }

    RefreshSchemasResult {
        refresh_schemas_status: RefreshSchemasStatus,
    }

    DescribeRefreshSchemasStatusRequest {
        endpoint_arn: String,
    }

    DescribeRefreshSchemasStatusResult {
        refresh_schemas_status: RefreshSchemasStatus,
    }

    DescribeSchemasRequest {
        endpoint_arn: String,
        max_records: i32,
        marker: String,
    }

    DescribeSchemasResult {
        marker: String,
        schemas: Vec<String>,
    }
}
