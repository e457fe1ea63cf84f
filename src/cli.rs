use clap::Parser;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::AppError;
use crate::models::{Bounds, HeapReport};
use crate::services::{best_heap_size, FixedMemory, MemoryProbe, SystemMemory};
use crate::utils::memory::parse_memory_to_bytes;

/// Delivers the calculated amount of RAM to use for a process
#[derive(Debug, Parser)]
#[command(
    name = "heap-percent",
    version,
    after_help = "Sizes may be integers in bytes, or may have the following case-insensitive \
                  suffixes: b, k, kb, kib, m, mb, mib, g, gb, gib, t, tb, tib. \
                  Single-letter suffixes are binary (1k = 1024 bytes)."
)]
pub struct Cli {
    /// The minimum allowed RAM for the process; defaults to 2GiB, set to zero if you want
    /// it to run no matter what
    #[arg(long = "min", visible_alias = "min-allowed-ram")]
    pub min: Option<String>,

    /// The maximum allowed RAM for the process; defaults to 30GiB, set to a very high
    /// number if you don't care about maximum heap size, ie 100TiB
    #[arg(long = "max", visible_alias = "max-allowed-ram")]
    pub max: Option<String>,

    /// The total system RAM; will be detected if not set
    #[arg(short, long)]
    pub total: Option<String>,

    /// The RAM percentage to attempt to occupy
    #[arg(short, long, allow_negative_numbers = true)]
    pub percent: f64,

    /// Print a JSON report instead of the heap size
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn report(&self, settings: &Settings) -> Result<HeapReport, AppError> {
        let min = parse_memory_to_bytes(self.min.as_deref().unwrap_or(&settings.min_allowed_ram))?;
        let max = parse_memory_to_bytes(self.max.as_deref().unwrap_or(&settings.max_allowed_ram))?;
        let bounds = Bounds::new(min, max);
        debug!(min, max, "parsed heap bounds");

        let (total_ram, detected) = match &self.total {
            Some(total) => (FixedMemory(parse_memory_to_bytes(total)?).total_memory(), false),
            None => (SystemMemory.total_memory(), true),
        };
        info!(total_ram, detected, "using total memory");

        let heap_size = best_heap_size(total_ram, self.percent, bounds)?;

        Ok(HeapReport::new(total_ram, detected, self.percent, bounds, heap_size))
    }

    pub fn render(&self, report: &HeapReport) -> serde_json::Result<String> {
        if self.json {
            serde_json::to_string_pretty(report)
        } else {
            Ok(report.heap.clone())
        }
    }
}
