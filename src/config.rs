//! Environment configuration.
//!
//! Read once at startup. Every variable is optional; unset or blank values
//! fall back to the defaults below.
//!
//! - `BLOCKFALL_WIDTH`: board columns (default: 10)
//! - `BLOCKFALL_HEIGHT`: board rows (default: 20)
//! - `BLOCKFALL_DROP_MS`: gravity interval in milliseconds (default: 1000)
//! - `BLOCKFALL_BLOCK_SIZE`: canvas pixels per cell (default: 2)
//! - `BLOCKFALL_SEED`: piece RNG seed (default: derived from the clock)
//! - `BLOCKFALL_STACK_OUT`: `continue` or `end` (default: continue)
//! - `BLOCKFALL_LOG_PATH`: log file; no logging when unset
//! - `RUST_LOG`: log filter (default: info)

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, ensure, Result};

use crate::core::{GameConfig, StackOut};
use crate::types::DEFAULT_BLOCK_SIZE;

const MIN_SIDE: usize = 4;
const MAX_SIDE: usize = 64;
const MAX_BLOCK_SIZE: u16 = 16;

/// Everything the binary needs to start a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub block_size: u16,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup; tests pass a map instead of the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let width = parse_var(&get, "BLOCKFALL_WIDTH")?.unwrap_or(defaults.game.width);
        let height = parse_var(&get, "BLOCKFALL_HEIGHT")?.unwrap_or(defaults.game.height);
        let drop_interval_ms =
            parse_var(&get, "BLOCKFALL_DROP_MS")?.unwrap_or(defaults.game.drop_interval_ms);
        let block_size = parse_var(&get, "BLOCKFALL_BLOCK_SIZE")?.unwrap_or(defaults.block_size);
        let seed = match parse_var(&get, "BLOCKFALL_SEED")? {
            Some(seed) => seed,
            None => clock_seed(),
        };
        let stack_out = match get("BLOCKFALL_STACK_OUT") {
            Some(raw) => match StackOut::from_str(raw.trim()) {
                Some(policy) => policy,
                None => bail!("BLOCKFALL_STACK_OUT={:?}: expected `continue` or `end`", raw),
            },
            None => defaults.game.stack_out,
        };

        ensure!(
            (MIN_SIDE..=MAX_SIDE).contains(&width),
            "BLOCKFALL_WIDTH={} out of range {}..={}",
            width,
            MIN_SIDE,
            MAX_SIDE
        );
        ensure!(
            (MIN_SIDE..=MAX_SIDE).contains(&height),
            "BLOCKFALL_HEIGHT={} out of range {}..={}",
            height,
            MIN_SIDE,
            MAX_SIDE
        );
        ensure!(drop_interval_ms > 0, "BLOCKFALL_DROP_MS must be positive");
        ensure!(
            (1..=MAX_BLOCK_SIZE).contains(&block_size),
            "BLOCKFALL_BLOCK_SIZE={} out of range 1..={}",
            block_size,
            MAX_BLOCK_SIZE
        );

        Ok(Self {
            game: GameConfig {
                width,
                height,
                drop_interval_ms,
                seed,
                stack_out,
            },
            block_size,
            log_path: get("BLOCKFALL_LOG_PATH").map(PathBuf::from),
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }
}

fn parse_var<T>(get: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match get(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("{}={:?}: {}", name, raw, e)),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
