//! Server configuration.

use std::path::PathBuf;

use clap::Parser;
use roster_core::StoreConfig;

/// Roster HTTP/REST API server command line arguments.
#[derive(Debug, Parser)]
#[command(name = "roster-server")]
#[command(about = "HTTP/REST API server for roster")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Path to the storage directory.
    #[arg(short, long, default_value = "./roster_data")]
    pub data_path: PathBuf,

    /// Page cache capacity in megabytes.
    #[arg(long, default_value_t = 64)]
    pub cache_mb: u64,

    /// Flush interval (ms). 0 flushes on every write.
    #[arg(long, default_value_t = 1000)]
    pub flush_ms: u64,

    /// Disable on-disk compression.
    #[arg(long)]
    pub no_compression: bool,

    /// Load the demo dataset into an empty store before serving.
    #[arg(long)]
    pub seed_demo: bool,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Path to the storage directory.
    pub data_path: PathBuf,
    /// Page cache capacity in bytes.
    pub cache_capacity: u64,
    /// Flush interval in milliseconds. None flushes on every write.
    pub flush_every_ms: Option<u64>,
    /// Enable on-disk compression.
    pub compression: bool,
    /// Load the demo dataset into an empty store before serving.
    pub seed_demo: bool,
}

impl From<&Args> for ServerConfig {
    fn from(args: &Args) -> Self {
        Self {
            listen_addr: args.listen.clone(),
            data_path: args.data_path.clone(),
            cache_capacity: args.cache_mb * 1024 * 1024,
            flush_every_ms: (args.flush_ms > 0).then_some(args.flush_ms),
            compression: !args.no_compression,
            seed_demo: args.seed_demo,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            data_path: PathBuf::from("./roster_data"),
            cache_capacity: 64 * 1024 * 1024,
            flush_every_ms: Some(1000),
            compression: true,
            seed_demo: false,
        }
    }
}

impl ServerConfig {
    /// Store configuration for the configured data directory.
    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(&self.data_path)
            .with_cache_capacity(self.cache_capacity)
            .with_flush_every_ms(self.flush_every_ms);
        if self.compression {
            config
        } else {
            config.without_compression()
        }
    }
}
