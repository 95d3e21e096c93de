use std::fs;
use std::path::Path;

use crate::cli::{parse_processes, ConfigFormatArg, InputArgs};
use crate::error::{Error, Result};
use crate::models::{AlgoConfig, Limits, SimConfig};

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}

/// Merges an optional config file with command line flags.
///
/// `--algo` and `--quantum` override the file. Processes given on the
/// command line replace the file's list instead of extending it.
pub fn build_config(args: &InputArgs) -> Result<SimConfig> {
    merge_config(args, None)
}

/// Like [`build_config`] but tolerates a missing algorithm, for commands
/// that run every algorithm anyway.
pub fn build_comparison_config(args: &InputArgs) -> Result<SimConfig> {
    merge_config(args, Some(AlgoConfig::Fcfs))
}

fn merge_config(args: &InputArgs, fallback_algo: Option<AlgoConfig>) -> Result<SimConfig> {
    let file = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };
    let cli_processes = parse_processes(&args.processes, &args.process)?;

    let algo: AlgoConfig = match (args.algo, &file) {
        (Some(algo), _) => algo.into(),
        (None, Some(file)) => file.algo,
        (None, None) => fallback_algo.ok_or(Error::MissingAlgorithm)?,
    };
    let (file_quantum, file_processes, limits) = match file {
        Some(file) => (file.quantum, file.processes, file.limits),
        None => (None, Vec::new(), Limits::default()),
    };

    Ok(SimConfig {
        algo,
        quantum: args.quantum.or(file_quantum),
        processes: if cli_processes.is_empty() {
            file_processes
        } else {
            cli_processes
        },
        limits,
    })
}

pub fn render_config(config: &SimConfig, format: ConfigFormatArg) -> Result<String> {
    match format {
        ConfigFormatArg::Toml => toml::to_string(config)
            .map_err(|err| Error::Output(format!("failed to write TOML: {}", err))),
        ConfigFormatArg::Json => serde_json::to_string_pretty(config)
            .map(|json| json + "\n")
            .map_err(|err| Error::Output(format!("failed to write JSON: {}", err))),
    }
}
