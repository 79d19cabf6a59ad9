//! Configuration settings for the gfroots engine.
//!
//! This module defines the knobs that control representation selection,
//! root-search progress reporting and the default shapes used by the
//! analysis components. Polynomials themselves are never part of the
//! configuration; they are supplied per field at construction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::galois::MAX_TABLE_DEGREE;

/// Configuration settings for the gfroots engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Largest degree for which a table-based field is built
    table_degree_limit: u32,
    /// Number of scanned elements between root-search progress reports
    progress_interval: u64,
    /// Default sampling stride for the bit-balance analyzer
    chip_cnt: u64,
    /// Number of chips in a syndrome table
    chips: u32,
    /// Width of a chip symbol in bits
    symbol_bits: u32,
    /// Verbose output flag
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_degree_limit: 20,
            progress_interval: 1_000_000,
            chip_cnt: 1,
            chips: 3,
            symbol_bits: 4,
            verbose: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file. Missing keys take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the largest degree for which lookup tables are built.
    ///
    /// Fields above this degree use direct shift-and-reduce multiplication.
    pub fn with_table_degree_limit(mut self, table_degree_limit: u32) -> Self {
        self.table_degree_limit = table_degree_limit;
        self
    }

    /// Sets how many scanned elements pass between root-search progress reports.
    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Sets the default bit-balance sampling stride.
    pub fn with_chip_cnt(mut self, chip_cnt: u64) -> Self {
        self.chip_cnt = chip_cnt;
        self
    }

    /// Sets the number of chips in a syndrome table.
    pub fn with_chips(mut self, chips: u32) -> Self {
        self.chips = chips;
        self
    }

    /// Sets the chip symbol width in bits.
    pub fn with_symbol_bits(mut self, symbol_bits: u32) -> Self {
        self.symbol_bits = symbol_bits;
        self
    }

    /// Sets the verbose output flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the largest degree for which lookup tables are built.
    pub fn table_degree_limit(&self) -> u32 {
        self.table_degree_limit
    }

    /// Returns the root-search progress interval.
    pub fn progress_interval(&self) -> u64 {
        self.progress_interval
    }

    /// Returns the default bit-balance sampling stride.
    pub fn chip_cnt(&self) -> u64 {
        self.chip_cnt
    }

    /// Returns the number of chips in a syndrome table.
    pub fn chips(&self) -> u32 {
        self.chips
    }

    /// Returns the chip symbol width in bits.
    pub fn symbol_bits(&self) -> u32 {
        self.symbol_bits
    }

    /// Returns whether verbose output is enabled.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, or an error if it's invalid
    pub fn validate(&self) -> crate::Result<()> {
        if self.table_degree_limit == 0 || self.table_degree_limit > MAX_TABLE_DEGREE {
            return Err(crate::Error::InvalidConfiguration(format!(
                "Table degree limit ({}) must be between 1 and {}",
                self.table_degree_limit, MAX_TABLE_DEGREE
            )));
        }

        if self.progress_interval == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "Progress interval must be greater than zero".to_string(),
            ));
        }

        if self.chip_cnt == 0 {
            return Err(crate::Error::InvalidConfiguration(
                "Chip count must be greater than zero".to_string(),
            ));
        }

        if self.symbol_bits == 0 || self.symbol_bits > 16 {
            return Err(crate::Error::InvalidConfiguration(format!(
                "Symbol width ({}) must be between 1 and 16 bits",
                self.symbol_bits
            )));
        }

        Ok(())
    }
}
