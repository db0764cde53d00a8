use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "placement", version, about = "Campus placement predictor")]
pub struct Args {
    /// TOML file with client settings.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Base URL of the scoring API, e.g. http://localhost:5001/api
    #[arg(long, env = "PLACEMENT_API_BASE", global = true)]
    pub api_base: Option<String>,
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a single candidate.
    Predict {
        #[arg(long, allow_hyphen_values = true)]
        cgpa: String,
        #[arg(long, allow_hyphen_values = true)]
        iq: String,
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// Read `<cgpa> <iq>` lines from stdin.
    Interactive {
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// Show summary statistics from the API.
    Stats,
    /// Show the sample dataset.
    Samples {
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
    /// Run the demo scoring API.
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        #[arg(long, default_value_t = 5001)]
        port: u16,
        /// Student CSV (`cgpa,iq,placement` columns) backing /api/stats.
        #[arg(long, default_value = "placement.csv")]
        dataset: PathBuf,
    },
}
