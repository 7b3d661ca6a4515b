/*
[INPUT]:  Process arguments
[OUTPUT]: Parsed command line
[POS]:    CLI layer - argument definitions
[UPDATE]: When adding commands or flags
*/

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "comprehend", version, about = "Encode and decode Amazon Comprehend API calls")]
pub struct Cli {
    /// Tracing filter directives, e.g. `debug` or `comprehend_model=trace`
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
    /// Settings file (YAML). Defaults to ./comprehend.yaml when present
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every operation with its X-Amz-Target value
    Operations,
    /// Encode a YAML/JSON request document into a wire request
    Encode {
        #[arg(long = "operation", value_name = "NAME")]
        operation: String,
        #[arg(long = "input", value_name = "PATH")]
        input: PathBuf,
        #[arg(long = "region", value_name = "REGION")]
        region: Option<String>,
        #[arg(long = "endpoint", value_name = "URL")]
        endpoint: Option<String>,
    },
    /// Decode a response body for an operation
    Decode {
        #[arg(long = "operation", value_name = "NAME")]
        operation: String,
        #[arg(long = "input", value_name = "PATH")]
        input: PathBuf,
        /// HTTP status the body came with
        #[arg(long = "status", value_name = "CODE", default_value_t = 200)]
        status: u16,
    },
}
