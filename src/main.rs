use anyhow::{bail, Context, Result};
use clap::Parser;

use pagesim::{parse_capacity, parse_sequence, Policy, SimulationConfig, SimulationResult};

#[derive(Parser)]
#[command(author, version, about = "PageSim - replay a page reference string under FIFO, LRU or Optimal")]
struct Cli {
    /// Replacement policy: fifo, lru, optimal, or all to compare them
    #[arg(short, long, default_value = "fifo")]
    policy: String,

    /// Number of physical frames
    #[arg(short, long, default_value = "3")]
    frames: String,

    /// Show only this step (1-based) instead of the whole run
    #[arg(short, long)]
    step: Option<usize>,

    /// Page references, separated by commas and/or spaces
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    references: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let sequence = parse_sequence(&cli.references.join(" ")).context("Invalid page references")?;
    let capacity = parse_capacity(&cli.frames).context("Invalid frame count")?;

    let policies = if cli.policy.eq_ignore_ascii_case("all") {
        Policy::ALL.to_vec()
    } else {
        vec![cli.policy.parse::<Policy>()?]
    };

    let mut results = Vec::with_capacity(policies.len());
    for policy in policies {
        let config = SimulationConfig::new(policy, capacity)?;
        results.push(config.run(&sequence));
    }

    for result in &results {
        match cli.step {
            Some(step) => print_step(result, step)?,
            None => print_run(result),
        }
    }

    if results.len() > 1 {
        println!("Comparison:");
        for result in &results {
            println!("  {:<8} {}", result.policy().name(), result.fault_label());
        }
    }

    Ok(())
}

fn print_run(result: &SimulationResult) {
    println!("{} Algorithm ({} frames)", result.policy(), result.capacity());
    for record in result.history() {
        println!("  {}", record);
    }
    println!("{}", result.fault_label());
    println!("{}", result.stats());
    println!();
}

fn print_step(result: &SimulationResult, step: usize) -> Result<()> {
    if step == 0 || step > result.len() {
        bail!("Step {} is out of range (1..={})", step, result.len());
    }
    let mut replay = result.replay();
    replay.seek(step - 1);
    if let Some(record) = replay.current() {
        println!("{} Algorithm ({} frames)", result.policy(), result.capacity());
        println!("  {}", replay.label());
        println!("  {}", record);
        println!("  Page Faults: {}", replay.faults_so_far());
    }
    Ok(())
}
