use chrono::Local;
use rand::{Rng, RngCore};

use crate::compose::compose;
use crate::error::MorphError;
use crate::names::pick;

// Common file name prefixes seen on Windows hosts.
const LOG_PREFIXES: &[&str] = &["log", "trace", "debug", "error", "event", "setup", "install"];
const TEMP_PREFIXES: &[&str] = &["tmp", "temp", "cache", "backup", "old", "bak"];
const DATA_PREFIXES: &[&str] = &["data", "update", "config", "settings", "info"];
const BATCH_ACTIONS: &[&str] = &["setup", "install", "update", "cleanup", "init", "start"];
const EXE_PREFIXES: &[&str] = &[
    "svc", "setup", "update", "install", "helper", "agent", "manager", "host",
];
const EXE_SUFFIXES: &[&str] = &["host", "svc", "mngr", "agent", "helper", "exe"];

const HEX: &[u8] = b"0123456789ABCDEF";

fn today(_rng: &mut dyn RngCore) -> String {
    Local::now().format("%Y%m%d").to_string()
}

fn clock(_rng: &mut dyn RngCore) -> String {
    Local::now().format("%H%M%S").to_string()
}

fn log_number(rng: &mut dyn RngCore) -> String {
    rng.gen_range(0u32..=9999).to_string()
}

fn temp_number(rng: &mut dyn RngCore) -> String {
    rng.gen_range(1000u32..=99999).to_string()
}

fn small_number(rng: &mut dyn RngCore) -> String {
    rng.gen_range(1u32..=99).to_string()
}

fn hex_tag(rng: &mut dyn RngCore) -> String {
    (0..6)
        .map(|_| HEX[rng.gen_range(0..HEX.len())] as char)
        .collect()
}

/// Generate a plausible log file name, always `.log`.
pub fn generate_log(rng: &mut dyn RngCore) -> Result<String, MorphError> {
    let name = compose(
        rng,
        &[
            "{prefix}_{date}",   // log_20260807
            "{prefix}{number:04}", // trace0123
            "{prefix}_{time}",   // error_153042
            "{prefix}",
        ],
        &[
            ("prefix", |rng| pick(rng, LOG_PREFIXES)),
            ("date", today),
            ("number", log_number),
            ("time", clock),
        ],
    )?;
    Ok(name + ".log")
}

/// Generate a plausible temporary file name.
///
/// `extension` is appended verbatim (pass `".tmp"` for the usual case);
/// an empty extension appends nothing.
pub fn generate_temp(rng: &mut dyn RngCore, extension: &str) -> Result<String, MorphError> {
    let name = compose(
        rng,
        &[
            "{prefix}{hex}",     // tmp4A3F2E
            "{prefix}_{number}", // temp_12345
            "~{prefix}{number}", // ~tmp1234
            "{prefix}",
        ],
        &[
            ("prefix", |rng| pick(rng, TEMP_PREFIXES)),
            ("hex", hex_tag),
            ("number", temp_number),
        ],
    )?;
    Ok(name + extension)
}

/// Generate a plausible data file name, same extension rule as temp files.
pub fn generate_data(rng: &mut dyn RngCore, extension: &str) -> Result<String, MorphError> {
    let name = compose(
        rng,
        &[
            "{prefix}",
            "{prefix}_{number}", // settings_42
            "{prefix}_{date}",   // config_20260807
        ],
        &[
            ("prefix", |rng| pick(rng, DATA_PREFIXES)),
            ("number", small_number),
            ("date", today),
        ],
    )?;
    Ok(name + extension)
}

/// Generate a plausible batch file name, always `.bat`.
pub fn generate_batch(rng: &mut dyn RngCore) -> Result<String, MorphError> {
    let name = compose(
        rng,
        &["{prefix}", "{prefix}_{number}", "{prefix}_tmp"],
        &[
            ("prefix", |rng| pick(rng, BATCH_ACTIONS)),
            ("number", small_number),
        ],
    )?;
    Ok(name + ".bat")
}

/// Generate a plausible executable name, always `.exe`.
pub fn generate_executable(rng: &mut dyn RngCore) -> Result<String, MorphError> {
    let name = compose(
        rng,
        &["{prefix}{suffix}", "{prefix}"], // svchost.exe, agent.exe
        &[
            ("prefix", |rng| pick(rng, EXE_PREFIXES)),
            ("suffix", |rng| pick(rng, EXE_SUFFIXES)),
        ],
    )?;
    Ok(name + ".exe")
}
