//! dmsctl - offline tooling for the AWS Database Migration Service API
//!
//! ## Commands
//!
//! - `operations`: list every operation and its `X-Amz-Target`
//! - `render`: validate a JSON request and print the exact wire request
//! - `enum`: list or check the literals of an enum value set
//! - `decode-error`: classify a service error response body

mod telemetry;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};

use dms_client::codec::{
    CONTENT_TYPE, CONTENT_TYPE_HEADER, ERROR_TYPE_HEADER, REQUEST_ID_HEADER, TARGET_HEADER,
};
use dms_client::{decode_error, lookup, ClientConfig, WireResponse, OPERATIONS};
use dms_model::{check_value, literals_for, ServiceError, ENUM_TYPE_NAMES};

#[derive(Parser)]
#[command(name = "dmsctl")]
#[command(author = "Stevedores Org")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and render AWS Database Migration Service requests", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    /// Service region
    #[arg(long, global = true, env = "DMS_REGION")]
    region: Option<String>,

    /// Endpoint URL override
    #[arg(long, global = true, env = "DMS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every operation with its X-Amz-Target
    Operations {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a JSON request and print the wire request
    Render {
        /// Operation name, e.g. CreateEndpoint
        operation: String,

        /// JSON request file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the body
        #[arg(long)]
        pretty: bool,
    },

    /// List enum value sets, list a set's literals, or check one literal
    Enum {
        /// Enum type, e.g. DmsSslModeValue
        type_name: Option<String>,

        /// Literal to check against the set
        value: Option<String>,
    },

    /// Classify a service error response body
    DecodeError {
        /// Error body file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// HTTP status of the response
        #[arg(long, default_value = "400")]
        status: u16,

        /// Value of the x-amzn-ErrorType header, if any
        #[arg(long)]
        error_type: Option<String>,

        /// Value of the x-amzn-RequestId header, if any
        #[arg(long)]
        request_id: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_tracing(cli.json, cli.verbose);

    let config = client_config(cli.region.as_deref(), cli.endpoint_url.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Operations { format } => cmd_operations(format, &mut stdout),
        Commands::Render {
            operation,
            input,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            cmd_render(&config, &operation, &raw, pretty, &mut stdout)
        }
        Commands::Enum { type_name, value } => {
            cmd_enum(type_name.as_deref(), value.as_deref(), &mut stdout)
        }
        Commands::DecodeError {
            input,
            status,
            error_type,
            request_id,
            format,
        } => {
            let raw = read_input(input.as_deref())?;
            let mut response = WireResponse::new(status, raw);
            if let Some(error_type) = error_type {
                response = response.with_header(ERROR_TYPE_HEADER, error_type);
            }
            if let Some(request_id) = request_id {
                response = response.with_header(REQUEST_ID_HEADER, request_id);
            }
            cmd_decode_error(&response, format, &mut stdout)
        }
    }
}

fn client_config(region: Option<&str>, endpoint_url: Option<&str>) -> Result<ClientConfig> {
    let mut config = ClientConfig::default();
    if let Some(region) = region {
        config = config.with_region(region);
    }
    if let Some(endpoint_url) = endpoint_url {
        config = config.with_endpoint(endpoint_url);
    }
    config.validate().context("Invalid client configuration")?;
    debug!(event = "config.resolved", region = config.region(), endpoint = %config.endpoint());
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[derive(Serialize)]
struct OperationRow {
    name: &'static str,
    target: String,
}

fn cmd_operations(format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let rows: Vec<OperationRow> = OPERATIONS
        .iter()
        .map(|op| OperationRow {
            name: op.name,
            target: op.target(),
        })
        .collect();

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
        OutputFormat::Text => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for row in &rows {
                writeln!(out, "{:<width$}  {}", row.name, row.target)?;
            }
        }
    }
    Ok(())
}

fn cmd_render(
    config: &ClientConfig,
    operation: &str,
    raw: &[u8],
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let op = lookup(operation).with_context(|| {
        format!("Unknown operation {operation:?} (run `dmsctl operations` to list them)")
    })?;

    let raw: &[u8] = if raw.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        raw
    };
    let body = op
        .canonical_request(raw)
        .with_context(|| format!("Input is not a valid {operation} request"))?;
    info!(event = "render.completed", operation = op.name, body_bytes = body.len());

    writeln!(out, "POST {}/", config.endpoint())?;
    writeln!(out, "{TARGET_HEADER}: {}", op.target())?;
    writeln!(out, "{CONTENT_TYPE_HEADER}: {CONTENT_TYPE}")?;
    writeln!(out)?;
    if pretty {
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        out.write_all(&body)?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_enum(type_name: Option<&str>, value: Option<&str>, out: &mut impl Write) -> Result<()> {
    let Some(type_name) = type_name else {
        for name in ENUM_TYPE_NAMES {
            writeln!(out, "{name}")?;
        }
        return Ok(());
    };

    let literals = literals_for(type_name).with_context(|| {
        format!("Unknown enum type {type_name:?} (run `dmsctl enum` to list them)")
    })?;

    match value {
        None => {
            for literal in literals {
                writeln!(out, "{literal}")?;
            }
        }
        Some(value) => match check_value(type_name, value) {
            Some(Ok(literal)) => writeln!(out, "{literal}")?,
            Some(Err(e)) => bail!("{e}; expected one of: {}", literals.join(", ")),
            None => bail!("Unknown enum type {type_name:?}"),
        },
    }
    Ok(())
}

#[derive(Serialize)]
struct DecodedError<'a> {
    code: &'a str,
    message: &'a str,
    status: u16,
    request_id: Option<&'a str>,
    modelled: bool,
}

fn cmd_decode_error(
    response: &WireResponse,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    if response.is_success() {
        bail!("Status {} is not an error status", response.status);
    }

    let err = decode_error(response);
    let Some(service) = err.service_error() else {
        bail!("Response did not decode to a service error: {err}");
    };
    let decoded = DecodedError {
        code: service.code(),
        message: service.message(),
        status: response.status,
        request_id: err.request_id(),
        modelled: !matches!(service, ServiceError::Unhandled { .. }),
    };

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&decoded)?)?,
        OutputFormat::Text => {
            writeln!(out, "code:       {}", decoded.code)?;
            writeln!(out, "message:    {}", decoded.message)?;
            writeln!(out, "status:     {}", decoded.status)?;
            if let Some(request_id) = decoded.request_id {
                writeln!(out, "request id: {request_id}")?;
            }
            writeln!(out, "modelled:   {}", if decoded.modelled { "yes" } else { "no" })?;
        }
    }
    Ok(())
}
