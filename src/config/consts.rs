// src/config/consts.rs

// Config
pub const DEFAULT_CONFIG_FILE: &str = "pbp_recon.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_REPORT_FILE: &str = "reconciliation";
pub const DEFAULT_SUMMARY_FILE: &str = "summary.json";

// Concurrency
pub const DEFAULT_WORKERS: usize = 4;
