use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::{AlgoConfig, ProcessConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cpu-sched-sim",
    about = "Simulate FCFS, SJF, round-robin and priority CPU scheduling",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub run: RunArgs,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Log scheduling decisions to stderr (-v debug, -vv trace)"
    )]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one algorithm (the default when no subcommand is given)
    Run(RunArgs),
    /// Run every algorithm on the same process set
    Compare(CompareArgs),
    /// Print the supported algorithm names
    ListAlgorithms,
    /// Print the merged configuration without simulating
    ShowConfig(InputArgs),
    /// Print a random process set as a config file
    Generate(GenerateArgs),
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct InputArgs {
    #[arg(long, help = "TOML or JSON config file")]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub algo: Option<AlgoArg>,
    #[arg(long, help = "Round-robin time slice (default 2)")]
    pub quantum: Option<u64>,
    #[arg(
        long,
        default_value = "",
        help = "Comma separated name:arrival:burst[:priority] entries"
    )]
    pub processes: String,
    #[arg(long = "process", help = "Repeatable name:arrival:burst[:priority] entry")]
    pub process: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
    #[arg(long, help = "Shorthand for --format summary")]
    pub summary: bool,
}

impl RunArgs {
    pub fn effective_format(&self) -> FormatArg {
        if self.summary {
            FormatArg::Summary
        } else {
            self.format
        }
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 5)]
    pub count: usize,
    #[arg(long, help = "Seed for reproducible output; random when omitted")]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = 10)]
    pub max_arrival: u64,
    #[arg(long, default_value_t = 10)]
    pub max_burst: u64,
    #[arg(long, default_value_t = 5)]
    pub max_priority: u32,
    #[arg(long, value_enum, default_value_t = AlgoArg::Fcfs)]
    pub algo: AlgoArg,
    #[arg(long)]
    pub quantum: Option<u64>,
    #[arg(long, value_enum, default_value_t = ConfigFormatArg::Toml)]
    pub output: ConfigFormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgoArg {
    Fcfs,
    Sjf,
    #[value(alias = "rr")]
    RoundRobin,
    Priority,
}

impl From<AlgoArg> for AlgoConfig {
    fn from(value: AlgoArg) -> Self {
        match value {
            AlgoArg::Fcfs => AlgoConfig::Fcfs,
            AlgoArg::Sjf => AlgoConfig::Sjf,
            AlgoArg::RoundRobin => AlgoConfig::RoundRobin,
            AlgoArg::Priority => AlgoConfig::Priority,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    #[default]
    Human,
    Summary,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormatArg {
    Toml,
    Json,
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

/// Parses the `--processes` list followed by every `--process` entry.
///
/// A blank `--processes` value contributes nothing, so it can be combined
/// with repeated `--process` flags. Range checks happen in the engine.
pub fn parse_processes(csv: &str, entries: &[String]) -> Result<Vec<ProcessConfig>> {
    let mut processes = Vec::new();

    if !csv.trim().is_empty() {
        for entry in csv.split(',') {
            processes.push(parse_process_entry(entry)?);
        }
    }
    for entry in entries {
        processes.push(parse_process_entry(entry)?);
    }

    Ok(processes)
}

fn parse_process_entry(entry: &str) -> Result<ProcessConfig> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyProcessEntry);
    }

    let parts: Vec<&str> = trimmed.split(':').map(str::trim).collect();
    if !(3..=4).contains(&parts.len()) || parts.iter().any(|part| part.is_empty()) {
        return Err(Error::InvalidProcessEntry(trimmed.to_string()));
    }

    let arrival_time: u64 = parts[1]
        .parse()
        .map_err(|_| Error::InvalidArrivalTime(trimmed.to_string()))?;
    let burst_time: u64 = parts[2]
        .parse()
        .map_err(|_| Error::InvalidBurstTime(trimmed.to_string()))?;
    let priority: u32 = match parts.get(3) {
        Some(value) => value
            .parse()
            .map_err(|_| Error::InvalidPriority(trimmed.to_string()))?,
        None => 1,
    };

    Ok(ProcessConfig {
        name: parts[0].to_string(),
        arrival_time,
        burst_time,
        priority,
        color: None,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_processes;

    fn csv(input: &str) -> crate::error::Result<Vec<crate::models::ProcessConfig>> {
        parse_processes(input, &[])
    }

    #[test]
    fn parse_processes_accepts_valid_list() {
        let processes = csv("A:0:5, B:1:3:2").unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[0].name, "A");
        assert_eq!(processes[0].arrival_time, 0);
        assert_eq!(processes[0].burst_time, 5);
        assert_eq!(processes[0].priority, 1);
        assert_eq!(processes[1].name, "B");
        assert_eq!(processes[1].priority, 2);
    }

    #[test]
    fn parse_processes_appends_repeated_entries() {
        let entries = vec!["x:2:1".to_string(), "y:0:4:3".to_string()];
        let processes = parse_processes("", &entries).unwrap();
        let names: Vec<&str> = processes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn parse_processes_allows_blank_list() {
        assert!(csv("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_processes_rejects_invalid_format() {
        let err = csv("A:0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid process entry 'A:0': expected name:arrival:burst[:priority]"
        );
        assert!(csv("A:0:1:2:3").is_err());
        assert!(csv(":0:1").is_err());
    }

    #[test]
    fn parse_processes_rejects_negative_arrival() {
        let err = csv("A:-1:3").unwrap_err();
        assert_eq!(err.to_string(), "invalid arrival time in 'A:-1:3'");
    }

    #[test]
    fn parse_processes_rejects_bad_numbers() {
        assert_eq!(
            csv("A:0:five").unwrap_err().to_string(),
            "invalid burst time in 'A:0:five'"
        );
        assert_eq!(
            csv("A:0:5:high").unwrap_err().to_string(),
            "invalid priority in 'A:0:5:high'"
        );
    }

    #[test]
    fn parse_processes_rejects_empty_segments() {
        let err = csv("A:0:1,,B:0:1").unwrap_err();
        assert_eq!(err.to_string(), "processes must not contain empty entries");
        let err = csv("A:0:1,").unwrap_err();
        assert_eq!(err.to_string(), "processes must not contain empty entries");
    }
}
