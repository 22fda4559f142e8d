//! Demo-runner configuration, mirroring the teacher's `gamecore::config`
//! pattern: a serde struct with a `Default` impl and a `serdeconv`-backed
//! `load`. The core workspace members take no configuration of their own
//! (§6.4: port 22023 is documented, not configurable) — everything here is
//! specific to the replay binary, an external-collaborator stand-in.

use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration for the `observe` replay binary.
#[derive(Serialize, Deserialize)]
pub struct ObserverConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print the full structural snapshot after every recognized datagram,
    /// rather than just the coarse digest.
    #[serde(default)]
    pub full_snapshots: bool,
}

impl Default for ObserverConfig {
    fn default() -> ObserverConfig {
        ObserverConfig { log_level: default_log_level(), full_snapshots: false }
    }
}

impl ObserverConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> ObserverConfig {
        serdeconv::from_toml_file(path).expect("Error loading observer configuration file")
    }
}
