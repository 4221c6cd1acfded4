//! Layer Bench CLI
//!
//! Aggregates BFT workflow benchmark results and attributes latency
//! to the commit layer (L1) and the workflow layer (L2).

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use layer_bench::commands::{
    display_schema, display_version, execute_compare, execute_inspect, validate_args,
    validate_inspect_args, validate_report_file, CompareArgs, InspectArgs,
};
use layer_bench::parser::Configuration;
use layer_bench::utils::config::{DATA_DIR_ENV, DEFAULT_REQUEST_COUNT};

/// Layer Bench - L1/L2 latency analysis for BFT benchmarks
#[derive(Parser, Debug)]
#[command(name = "layer-bench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare L1 node configurations for a fixed L2 node count
    Compare {
        /// Number of L2 nodes
        #[arg(long)]
        l2_nodes: u32,

        /// L1 node counts to compare (3f+1 pattern)
        #[arg(long, value_delimiter = ',', default_value = "4,7,10,13,16")]
        l1_nodes: Vec<u32>,

        /// Requests per benchmark run
        #[arg(short = 'n', long, default_value_t = DEFAULT_REQUEST_COUNT)]
        requests: u32,

        /// Directory containing benchmark_n_*_l1_*_l2_*.csv files
        #[arg(short, long, env = DATA_DIR_ENV, default_value = ".")]
        data_dir: PathBuf,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "comparison.json")]
        output: PathBuf,

        /// Output path for the layer latency CSV
        #[arg(long)]
        layer_csv: Option<PathBuf>,

        /// Output path for the per-step latency CSV
        #[arg(long)]
        steps_csv: Option<PathBuf>,

        /// Output path for the per-step LaTeX table
        #[arg(long)]
        latex: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Inspect the per-step latency distribution of one result set
    Inspect {
        /// Requests per benchmark run
        #[arg(short = 'n', long, default_value_t = DEFAULT_REQUEST_COUNT)]
        requests: u32,

        /// Number of L1 nodes
        #[arg(long)]
        l1_nodes: u32,

        /// Number of L2 nodes
        #[arg(long)]
        l2_nodes: u32,

        /// Directory containing the benchmark result file
        #[arg(short, long, env = DATA_DIR_ENV, default_value = ".")]
        data_dir: PathBuf,

        /// Output path for the JSON inspection (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a comparison report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            l2_nodes,
            l1_nodes,
            requests,
            data_dir,
            output,
            layer_csv,
            steps_csv,
            latex,
            summary,
        } => {
            let args = CompareArgs {
                data_dir,
                request_count: requests,
                l1_node_counts: l1_nodes,
                l2_node_count: l2_nodes,
                output_json: output,
                layer_csv,
                steps_csv,
                latex,
                print_summary: summary,
            };

            validate_args(&args)?;
            execute_compare(args)?;
        }

        Commands::Inspect {
            requests,
            l1_nodes,
            l2_nodes,
            data_dir,
            output,
        } => {
            let args = InspectArgs {
                data_dir,
                configuration: Configuration::new(requests, l1_nodes, l2_nodes),
                output_json: output,
            };

            validate_inspect_args(&args)?;
            execute_inspect(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
