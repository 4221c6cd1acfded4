//! Layer Bench
//!
//! Latency aggregation and L1/L2 layer attribution for BFT workflow
//! benchmark results.
//!
//! This crate provides the core implementation for the
//! `layer-bench` CLI tool: loading benchmark result sets, attributing
//! step latencies to the commit layer (L1) or the workflow layer (L2),
//! comparing node configurations and exporting reports and tables.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install layer-bench
//! layer-bench compare --l2-nodes 1 --summary
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
