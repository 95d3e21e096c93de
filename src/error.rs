use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("processes must not be empty")]
    EmptyProcesses,
    #[error("processes must not contain empty entries")]
    EmptyProcessEntry,
    #[error("too many processes: {count} (max {max})")]
    TooManyProcesses { count: usize, max: usize },
    #[error("invalid process entry '{0}': expected name:arrival:burst[:priority]")]
    InvalidProcessEntry(String),
    #[error("duplicate process id {0}")]
    DuplicateProcessId(usize),
    #[error("process name must not be empty")]
    EmptyProcessName,
    #[error("process name '{name}' is longer than {max} characters")]
    ProcessNameTooLong { name: String, max: usize },
    #[error("invalid arrival time in '{0}'")]
    InvalidArrivalTime(String),
    #[error("arrival time must be <= {max} for '{name}' (got {value})")]
    ArrivalTimeOutOfRange { name: String, value: u64, max: u64 },
    #[error("invalid burst time in '{0}'")]
    InvalidBurstTime(String),
    #[error("burst time must be > 0 for '{0}'")]
    InvalidBurstTimeValue(String),
    #[error("burst time must be <= {max} for '{name}' (got {value})")]
    BurstTimeOutOfRange { name: String, value: u64, max: u64 },
    #[error("invalid priority in '{0}'")]
    InvalidPriority(String),
    #[error("priority must be between 1 and {max} for '{name}' (got {value})")]
    PriorityOutOfRange { name: String, value: u32, max: u32 },
    #[error("schedule for '{name}' would run past the end of the simulation clock")]
    ClockOverflow { name: String },
    #[error("quantum must be greater than 0")]
    QuantumZero,
    #[error("algorithm is required (use --algo or a config file)")]
    MissingAlgorithm,
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
    #[error("{0}")]
    Output(String),
}

/// Coarse classification of [`Error`] for callers that only need to know
/// which side of the boundary is at fault.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The process set is empty or a process violates its field constraints.
    InvalidInput,
    /// A simulation parameter (the round-robin quantum) is out of range.
    InvalidParameter,
    Config,
    Cli,
    Output,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyProcesses
            | Error::EmptyProcessEntry
            | Error::TooManyProcesses { .. }
            | Error::InvalidProcessEntry(_)
            | Error::DuplicateProcessId(_)
            | Error::EmptyProcessName
            | Error::ProcessNameTooLong { .. }
            | Error::InvalidArrivalTime(_)
            | Error::ArrivalTimeOutOfRange { .. }
            | Error::InvalidBurstTime(_)
            | Error::InvalidBurstTimeValue(_)
            | Error::BurstTimeOutOfRange { .. }
            | Error::InvalidPriority(_)
            | Error::PriorityOutOfRange { .. }
            | Error::ClockOverflow { .. } => ErrorKind::InvalidInput,
            Error::QuantumZero => ErrorKind::InvalidParameter,
            Error::ConfigIo(_) | Error::ConfigParse(_) | Error::UnsupportedConfigFormat(_) => {
                ErrorKind::Config
            }
            Error::Cli(_) | Error::MissingAlgorithm => ErrorKind::Cli,
            Error::Output(_) => ErrorKind::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
