use crate::types::{FieldArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "datasieve")]
#[command(about = "Validate, submit, and inspect classified payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml (defaults to the system data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Service endpoint, e.g. http://localhost:3001 (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive submission form
    Form,

    /// Check a payload file against the submission contract
    Validate {
        /// Payload file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Submit a payload and print the projected response
    Submit {
        /// Payload file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Response field to display (repeatable; defaults to all fields)
        #[arg(long = "select", value_name = "FIELD")]
        select: Vec<FieldArg>,
    },

    /// List the selectable response fields
    Fields,

    /// Show or change the configured endpoint
    Endpoint {
        #[command(subcommand)]
        command: EndpointCommand,
    },
}

#[derive(Subcommand)]
pub enum EndpointCommand {
    /// Print the endpoint submissions currently go to
    Show,

    /// Persist a new endpoint in config.toml
    Set { url: String },
}
