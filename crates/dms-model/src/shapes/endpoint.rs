//! Endpoints and their engine-specific settings.

use crate::enums::{
    AuthMechanismValue, AuthTypeValue, CompressionTypeValue, DataFormatValue, DmsSslModeValue,
    EncodingTypeValue, EncryptionModeValue, MessageFormatValue, NestingLevelValue,
    ParquetVersionValue, ReplicationEndpointTypeValue,
};

shape! {
    /// Connection details for a source or target data store.
    ///
    /// Returned by `CreateEndpoint`, `ModifyEndpoint`, `DeleteEndpoint` and
    /// `DescribeEndpoints`. Passwords never come back from the service.
    Endpoint {
        /// User-assigned identifier; 1-255 alphanumerics or hyphens.
        endpoint_identifier: String,
        endpoint_type: ReplicationEndpointTypeValue,
        /// Database engine name (`mysql`, `oracle`, `postgres`, `s3`, ...).
        engine_name: String,
        /// Expanded engine name, e.g. "Amazon Aurora MySQL".
        engine_display_name: String,
        username: String,
        server_name: String,
        port: i32,
        database_name: String,
        extra_connection_attributes: String,
        status: String,
        kms_key_id: String,
        endpoint_arn: String,
        certificate_arn: String,
        ssl_mode: DmsSslModeValue,
        service_access_role_arn: String,
        external_table_definition: String,
        /// Value returned by a call to CreateEndpoint that can be used for
        /// cross-account validation.
        external_id: String,
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

    /// Settings for a DynamoDB target.
    DynamoDbSettings {
        service_access_role_arn: String,
    }

    /// Settings for the DMS transfer type source endpoint.
    DmsTransferSettings {
        service_access_role_arn: String,
        bucket_name: String,
    }

    /// Settings for an Elasticsearch target.
    ElasticsearchSettings {
        service_access_role_arn: String,
        /// Endpoint for the Elasticsearch cluster. HTTPS is used if no
        /// scheme is given.
        endpoint_uri: String,
        /// Maximum percentage of records that can fail during full load.
        full_load_error_percentage: i32,
        /// Seconds DMS retries failed API requests to the cluster.
        error_retry_duration: i32,
    }

    /// Settings for an Apache Kafka target.
    KafkaSettings {
        /// Broker location, `broker-hostname-or-ip:port`.
        broker: String,
        topic: String,
    }

    /// Settings for a Kinesis Data Streams target.
    KinesisSettings {
        stream_arn: String,
        message_format: MessageFormatValue,
        service_access_role_arn: String,
        include_transaction_details: bool,
        include_partition_value: bool,
        partition_include_schema_table: bool,
        include_table_alter_operations: bool,
        include_control_details: bool,
    }

    /// Settings for a MongoDB source.
    MongoDbSettings {
        username: String,
        password: String,
        server_name: String,
        port: i32,
        database_name: String,
        auth_type: AuthTypeValue,
        auth_mechanism: AuthMechanismValue,
        nesting_level: NestingLevelValue,
        /// Only meaningful when `nesting_level` is `none`; "true" or "false".
        extract_doc_id: String,
        /// Number of documents previewed to determine document organization.
        docs_to_investigate: String,
        auth_source: String,
        kms_key_id: String,
    }

    /// Settings for an Amazon Neptune target.
    NeptuneSettings {
        service_access_role_arn: String,
        s3_bucket_name: String,
        s3_bucket_folder: String,
        error_retry_duration: i32,
        /// Maximum size in KB of migrated graph data stored in a .csv file.
        max_file_size: i32,
        max_retry_count: i32,
        iam_auth_enabled: bool,
    }

    /// Settings for an Amazon Redshift target.
    RedshiftSettings {
        accept_any_date: bool,
        after_connect_script: String,
        bucket_folder: String,
        bucket_name: String,
        connection_timeout: i32,
        database_name: String,
        date_format: String,
        empty_as_null: bool,
        encryption_mode: EncryptionModeValue,
        file_transfer_upload_streams: i32,
        load_timeout: i32,
        max_file_size: i32,
        password: String,
        port: i32,
        remove_quotes: bool,
        replace_invalid_chars: String,
        replace_chars: String,
        server_name: String,
        service_access_role_arn: String,
        server_side_encryption_kms_key_id: String,
        time_format: String,
        trim_blanks: bool,
        truncate_columns: bool,
        username: String,
        write_buffer_size: i32,
    }

    /// Settings for an Amazon S3 source or target.
    S3Settings {
        service_access_role_arn: String,
        external_table_definition: String,
        /// Row delimiter for .csv output, default newline.
        csv_row_delimiter: String,
        /// Column delimiter for .csv output, default comma.
        csv_delimiter: String,
        bucket_folder: String,
        bucket_name: String,
        compression_type: CompressionTypeValue,
        encryption_mode: EncryptionModeValue,
        server_side_encryption_kms_key_id: String,
        data_format: DataFormatValue,
        encoding_type: EncodingTypeValue,
        /// Maximum size of an encoded dictionary page of a column, in bytes.
        dict_page_size_limit: i32,
        /// Number of rows in one Parquet row group.
        row_group_length: i32,
        /// Size of one data page in bytes.
        data_page_size: i32,
        parquet_version: ParquetVersionValue,
        enable_statistics: bool,
        include_op_for_full_load: bool,
        cdc_inserts_only: bool,
        timestamp_column_name: String,
        parquet_timestamp_in_millisecond: bool,
        cdc_inserts_and_updates: bool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_wire_names() {
        let endpoint = Endpoint::default()
            .endpoint_arn("arn:aws:dms:us-east-1:123456789012:endpoint:ABC")
            .ssl_mode(DmsSslModeValue::VerifyFull)
            .port(5432)
            .s3_settings(S3Settings::default().bucket_name("landing"));

        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "EndpointArn": "arn:aws:dms:us-east-1:123456789012:endpoint:ABC",
                "SslMode": "verify-full",
                "Port": 5432,
                "S3Settings": { "BucketName": "landing" }
            })
        );
    }

    #[test]
    fn test_s3_settings_parse() {
        let json = r#"{
            "BucketName": "lake",
            "DataFormat": "parquet",
            "EncodingType": "rle-dictionary",
            "ParquetVersion": "parquet-2-0",
            "CdcInsertsOnly": true,
            "DictPageSizeLimit": 1048576
        }"#;
        let settings: S3Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.bucket_name.as_deref(), Some("lake"));
        assert_eq!(settings.data_format, Some(DataFormatValue::Parquet));
        assert_eq!(settings.encoding_type, Some(EncodingTypeValue::RleDictionary));
        assert_eq!(settings.parquet_version, Some(ParquetVersionValue::Parquet20));
        assert_eq!(settings.cdc_inserts_only, Some(true));
        assert_eq!(settings.dict_page_size_limit, Some(1_048_576));
        assert!(settings.compression_type.is_none());
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let err = serde_json::from_str::<S3Settings>(r#"{"EncodingType":"delta"}"#).unwrap_err();
        assert!(err.to_string().contains("EncodingTypeValue"));
    }

    #[test]
    fn test_unknown_members_ignored() {
        let endpoint: Endpoint =
            serde_json::from_str(r#"{"EndpointIdentifier":"src","SomeFutureField":1}"#).unwrap();
        assert_eq!(endpoint.endpoint_identifier.as_deref(), Some("src"));
    }
}
