// clampcore/src/config.rs
//! Startup configuration.
//!
//! Priority, lowest to highest:
//! - compiled-in defaults
//! - optional JSON document named by `CLAMPCORE_CONFIG`
//! - environment variables (`CLAMPCORE_PLATFORM`, `CLAMPCORE_STATS`,
//!   `CLAMPCORE_VERBOSE`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::{bounds::BoundsRange, compute::Mode, platform::PlatformTag};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Platform label override; detected from the compile target when unset.
    pub platform: Option<PlatformTag>,
    /// Instrumentation toggle, fixed for the process lifetime.
    pub stats_enabled: bool,
    /// Clamping range applied to every computation.
    pub bounds: BoundsRange,
    /// Initialization tag handed to the compute module.
    pub mode: Mode,
    /// Dump the resolved config to stderr at startup.
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            platform: None,
            stats_enabled: true,
            bounds: BoundsRange::default(),
            mode: Mode::A,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Resolve the effective configuration for this process.
    pub fn resolve() -> Result<Self> {
        let mut cfg = AppConfig::default();

        if let Ok(path) = env::var("CLAMPCORE_CONFIG") {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            cfg = serde_json::from_str(&raw)
                .with_context(|| format!("parsing config file {path}"))?;
        }

        // Environment variables override everything
        if let Ok(v) = env::var("CLAMPCORE_PLATFORM") {
            cfg.platform = Some(PlatformTag::from_str_ic(&v));
        }
        if let Ok(v) = env::var("CLAMPCORE_STATS") {
            cfg.stats_enabled = parse_bool(&v);
        }
        if env::var("CLAMPCORE_VERBOSE").is_ok() {
            cfg.verbose = true;
        }

        // An inverted range from a config document is a configuration bug;
        // surface it before any computation happens.
        cfg.bounds = cfg.bounds.validated().context("invalid bounds in config")?;
        Ok(cfg)
    }

    /// Platform override if set, compile-target detection otherwise.
    pub fn platform_tag(&self) -> PlatformTag {
        self.platform.unwrap_or_else(PlatformTag::detect)
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/* ================================== Tests ================================== */
