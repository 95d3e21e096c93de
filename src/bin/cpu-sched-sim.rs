use cpu_sched_sim::cli::{self, Command, CompareArgs, FormatArg, GenerateArgs, InputArgs, RunArgs};
use cpu_sched_sim::config::{build_comparison_config, build_config, render_config};
use cpu_sched_sim::engine;
use cpu_sched_sim::error::Result;
use cpu_sched_sim::logging;
use cpu_sched_sim::models::{AlgoConfig, SimConfig};
use cpu_sched_sim::output::{
    write_comparison, write_comparison_json, Formatter, HumanFormatter, JsonFormatter,
    SummaryFormatter,
};
use cpu_sched_sim::workload::{random_processes, WorkloadSpec};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args()?;
    logging::init(args.verbose);

    match args.command {
        None => run_one(&args.run),
        Some(Command::Run(run_args)) => run_one(&run_args),
        Some(Command::Compare(compare_args)) => run_compare(&compare_args),
        Some(Command::ListAlgorithms) => {
            for algo in AlgoConfig::ALL {
                println!("{}", algo);
            }
            Ok(())
        }
        Some(Command::ShowConfig(input)) => show_config(&input),
        Some(Command::Generate(generate_args)) => generate(&generate_args),
    }
}

fn run_one(args: &RunArgs) -> Result<()> {
    let config = build_config(&args.input)?;
    let report = engine::run_simulation(&config)?;

    let formatter = formatter_for(args.effective_format());
    print!("{}", formatter.write(&report)?);

    Ok(())
}

fn run_compare(args: &CompareArgs) -> Result<()> {
    let config = build_comparison_config(&args.input)?;
    let reports = engine::compare(&config)?;

    match args.format {
        FormatArg::Json => print!("{}", write_comparison_json(&reports)?),
        FormatArg::Human | FormatArg::Summary => print!("{}", write_comparison(&reports)),
    }

    Ok(())
}

fn show_config(input: &InputArgs) -> Result<()> {
    let config = build_config(input)?;
    engine::validate_config(&config)?;

    println!("Algorithm: {}", config.algo);
    if config.algo.is_preemptive() {
        println!("Quantum: {}", config.effective_quantum());
    }
    println!("Processes:");
    for process in engine::build_processes(&config.processes) {
        println!(
            "- {} (arrival: {}, burst: {}, priority: {})",
            process.name, process.arrival_time, process.burst_time, process.priority
        );
    }

    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<()> {
    let spec = WorkloadSpec {
        count: args.count,
        max_arrival_time: args.max_arrival,
        max_burst_time: args.max_burst,
        max_priority: args.max_priority,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = SimConfig {
        algo: args.algo.into(),
        quantum: args.quantum,
        processes: random_processes(&spec, seed),
        limits: spec.limits(),
    };

    print!("{}", render_config(&config, args.output)?);

    Ok(())
}

fn formatter_for(format: FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
