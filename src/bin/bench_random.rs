use std::path::Path;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;

use cnfdecide::bench::{BenchConfig, Case, run_suite};
use cnfdecide::instances::random::{DEFAULT_GRID, DEFAULT_SEED, RandomSpec, random_cnf};
use cnfdecide::sat::SolverKind;

#[derive(Debug, Parser)]
#[command(name = "bench_random")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    #[arg(long)]
    csv: String,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    repeats: usize,
    /// vars:clauses:width, repeatable; replaces the default grid
    #[arg(long)]
    grid: Vec<String>,
    #[arg(long, default_value = "resolution,dp,dpll")]
    solvers: String,
    #[arg(long = "timeout_ms", default_value_t = 30000)]
    timeout_ms: u64,
    #[arg(long, default_value_t = false)]
    progress: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cnfdecide::logging::init(cli.verbose);
    run_from_args(&cli)
}

fn run_from_args(cli: &Cli) -> Result<()> {
    let grid = if cli.grid.is_empty() {
        DEFAULT_GRID.to_vec()
    } else {
        cli.grid
            .iter()
            .map(|g| parse_grid_point(g))
            .collect::<Result<Vec<_>>>()?
    };
    let solvers = cli
        .solvers
        .split(',')
        .map(|s| s.trim().parse::<SolverKind>())
        .collect::<Result<Vec<_>>>()?;
    let cfg = BenchConfig {
        solvers,
        oracle: None,
        timeout: Duration::from_millis(cli.timeout_ms),
    };

    let mut cases = Vec::new();
    for spec in grid {
        for r in 0..cli.repeats {
            let seed = cli.seed.wrapping_add(r as u64);
            let name = format!(
                "{}v/{}c/w{}/s{}",
                spec.vars, spec.clauses, spec.width, seed
            );
            cases.push(Case::new(name, random_cnf(spec, seed)?, None));
        }
    }

    let reports = run_suite(&cases, &cfg, Some(Path::new(&cli.csv)))?;
    if cli.progress {
        for report in &reports {
            println!("{}", report.name);
            for row in &report.rows {
                println!("{}", row.summary_line());
            }
        }
    }
    let mismatches = reports.iter().filter(|r| !r.agreed()).count();
    println!("rows={} mismatches={}", reports.len() * cfg.solvers.len(), mismatches);
    Ok(())
}

fn parse_grid_point(s: &str) -> Result<RandomSpec> {
    let parts = s.split(':').collect::<Vec<_>>();
    if parts.len() != 3 {
        bail!("grid point '{}' must look like vars:clauses:width", s);
    }
    Ok(RandomSpec::new(
        parts[0].parse()?,
        parts[1].parse()?,
        parts[2].parse()?,
    ))
}
