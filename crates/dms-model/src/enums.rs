//! Closed value sets used by shape fields.
//!
//! Each set is keyed by its wire literal. Lookups are case-sensitive and
//! fail on empty or unknown input. Every set exposes `as_str`, `values`,
//! `from_value`, `FromStr`, `TryFrom<&str>` and serde support.

enum_values! {
    /// Authentication mechanism used against a MongoDB source.
    AuthMechanismValue {
        Default => "default",
        MongodbCr => "mongodb_cr",
        ScramSha1 => "scram_sha_1",
    }

    /// Authentication type used against a MongoDB source.
    AuthTypeValue {
        No => "no",
        Password => "password",
    }

    /// Compression applied to objects written to S3.
    CompressionTypeValue {
        None => "none",
        Gzip => "gzip",
    }

    /// Output format for S3 targets.
    DataFormatValue {
        Csv => "csv",
        Parquet => "parquet",
    }

    /// SSL mode for an endpoint connection.
    DmsSslModeValue {
        None => "none",
        Require => "require",
        VerifyCa => "verify-ca",
        VerifyFull => "verify-full",
    }

    /// Parquet column encoding for S3 targets.
    EncodingTypeValue {
        Plain => "plain",
        PlainDictionary => "plain-dictionary",
        RleDictionary => "rle-dictionary",
    }

    /// Server-side encryption mode for S3 and Redshift staging.
    EncryptionModeValue {
        SseS3 => "sse-s3",
        SseKms => "sse-kms",
    }

    /// Record format for Kinesis targets.
    MessageFormatValue {
        Json => "json",
        JsonUnformatted => "json-unformatted",
    }

    /// Migration type of a replication task.
    MigrationTypeValue {
        FullLoad => "full-load",
        Cdc => "cdc",
        FullLoadAndCdc => "full-load-and-cdc",
    }

    /// Document nesting mode for a MongoDB source.
    NestingLevelValue {
        None => "none",
        One => "one",
    }

    /// Parquet file format version.
    ParquetVersionValue {
        Parquet10 => "parquet-1-0",
        Parquet20 => "parquet-2-0",
    }

    /// Outcome of a schema refresh.
    RefreshSchemasStatusTypeValue {
        Successful => "successful",
        Failed => "failed",
        Refreshing => "refreshing",
    }

    /// Release channel of an orderable replication instance.
    ReleaseStatusValues {
        Beta => "beta",
    }

    /// Reload behaviour for `ReloadTables`.
    ReloadOptionValue {
        DataReload => "data-reload",
        ValidateOnly => "validate-only",
    }

    /// Whether an endpoint is a migration source or target.
    ReplicationEndpointTypeValue {
        Source => "source",
        Target => "target",
    }

    /// Source of a service event.
    SourceType {
        ReplicationInstance => "replication-instance",
    }

    /// How `StartReplicationTask` starts the task.
    StartReplicationTaskTypeValue {
        StartReplication => "start-replication",
        ResumeProcessing => "resume-processing",
        ReloadTarget => "reload-target",
    }
}

macro_rules! by_type_name {
    ($($name:ident),+ $(,)?) => {
        /// Names of every enum value set, in alphabetical order.
        pub const ENUM_TYPE_NAMES: &[&str] = &[$(stringify!($name)),+];

        /// Wire literals of the set called `type_name`, if there is one.
        pub fn literals_for(type_name: &str) -> Option<&'static [&'static str]> {
            match type_name {
                $(stringify!($name) => Some($name::values()),)+
                _ => None,
            }
        }

        /// Strict lookup of `value` in the set called `type_name`.
        ///
        /// `None` if no such set exists; otherwise the canonical literal or
        /// the lookup error.
        pub fn check_value(type_name: &str, value: &str) -> Option<$crate::Result<&'static str>> {
            match type_name {
                $(stringify!($name) => Some($name::from_value(value).map(|v| v.as_str())),)+
                _ => None,
            }
        }
    };
}

by_type_name! {
    AuthMechanismValue,
    AuthTypeValue,
    CompressionTypeValue,
    DataFormatValue,
    DmsSslModeValue,
    EncodingTypeValue,
    EncryptionModeValue,
    MessageFormatValue,
    MigrationTypeValue,
    NestingLevelValue,
    ParquetVersionValue,
    RefreshSchemasStatusTypeValue,
    ReleaseStatusValues,
    ReloadOptionValue,
    ReplicationEndpointTypeValue,
    SourceType,
    StartReplicationTaskTypeValue,
}
