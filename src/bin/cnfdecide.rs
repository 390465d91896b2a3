use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use cnfdecide::bench::{BenchConfig, Case, CaseReport, run_case};
use cnfdecide::cnf::dimacs::to_dimacs;
use cnfdecide::instances::catalog;
use cnfdecide::instances::random::{RandomSpec, random_cnf};
use cnfdecide::oracle::Oracle;
use cnfdecide::sat::SolverKind;

#[derive(Debug, Parser)]
#[command(name = "cnfdecide")]
#[command(about = "Resolution, DP and DPLL satisfiability side by side")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Examples {
        #[arg(long, default_value = "resolution,dp,dpll")]
        solvers: String,
        #[arg(long)]
        oracle: Option<String>,
        #[arg(long = "timeout_ms", default_value_t = 30000)]
        timeout_ms: u64,
    },
    Random {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value = "resolution,dp,dpll")]
        solvers: String,
        #[arg(long)]
        oracle: Option<String>,
        #[arg(long = "timeout_ms", default_value_t = 30000)]
        timeout_ms: u64,
    },
    Gen {
        #[arg(long)]
        vars: u32,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        emit: String,
    },
    Check {
        #[arg(long, default_value_t = 6)]
        vars: u32,
        #[arg(long, default_value_t = 12)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value = "truth-table")]
        oracle: String,
        #[arg(long = "timeout_ms", default_value_t = 30000)]
        timeout_ms: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cnfdecide::logging::init(cli.verbose);
    match cli.command {
        Cmd::Examples {
            solvers,
            oracle,
            timeout_ms,
        } => examples_cmd(bench_config(&solvers, oracle.as_deref(), timeout_ms)?),
        Cmd::Random {
            vars,
            clauses,
            width,
            seed,
            count,
            solvers,
            oracle,
            timeout_ms,
        } => random_cmd(
            RandomSpec::new(vars, clauses, width),
            seed,
            count,
            bench_config(&solvers, oracle.as_deref(), timeout_ms)?,
        ),
        Cmd::Gen {
            vars,
            clauses,
            width,
            seed,
            emit,
        } => gen_cmd(RandomSpec::new(vars, clauses, width), seed, &emit),
        Cmd::Check {
            vars,
            clauses,
            width,
            seed,
            count,
            oracle,
            timeout_ms,
        } => check_cmd(
            RandomSpec::new(vars, clauses, width),
            seed,
            count,
            bench_config("resolution,dp,dpll", Some(oracle.as_str()), timeout_ms)?,
        ),
    }
}

fn bench_config(solvers: &str, oracle: Option<&str>, timeout_ms: u64) -> Result<BenchConfig> {
    let solvers = solvers
        .split(',')
        .map(|s| s.trim().parse::<SolverKind>())
        .collect::<Result<Vec<_>>>()?;
    if solvers.is_empty() {
        bail!("at least one solver is required");
    }
    let oracle = oracle.map(str::parse::<Oracle>).transpose()?;
    Ok(BenchConfig {
        solvers,
        oracle,
        timeout: Duration::from_millis(timeout_ms),
    })
}

fn examples_cmd(cfg: BenchConfig) -> Result<()> {
    println!("=== Hand-Crafted Examples ===");
    for example in catalog::all()? {
        let case = Case::new(example.name, example.formula, Some(example.expected));
        print_report(&run_case(&case, &cfg));
    }
    Ok(())
}

fn random_cmd(spec: RandomSpec, seed: u64, count: usize, cfg: BenchConfig) -> Result<()> {
    println!("=== Random Benchmarks ===");
    for i in 0..count {
        let s = seed.wrapping_add(i as u64);
        let formula = random_cnf(spec, s)?;
        let name = format!(
            "{} vars, {} clauses, size={}, seed={}",
            spec.vars, spec.clauses, spec.width, s
        );
        print_report(&run_case(&Case::new(name, formula, None), &cfg));
    }
    Ok(())
}

fn gen_cmd(spec: RandomSpec, seed: u64, emit: &str) -> Result<()> {
    let formula = random_cnf(spec, seed)?;
    std::fs::write(emit, to_dimacs(&formula)).with_context(|| format!("writing {}", emit))?;
    println!(
        "GEN: wrote {} | vars={} clauses={} width={} seed={}",
        emit,
        formula.max_var(),
        formula.len(),
        spec.width,
        seed
    );
    Ok(())
}

fn check_cmd(spec: RandomSpec, seed: u64, count: usize, cfg: BenchConfig) -> Result<()> {
    let mut disagreements = 0usize;
    let mut sat = 0usize;
    for i in 0..count {
        let s = seed.wrapping_add(i as u64);
        let case = Case::new(format!("seed={}", s), random_cnf(spec, s)?, None);
        let report = run_case(&case, &cfg);
        if report.oracle.is_some_and(|(_, v)| v.is_sat()) {
            sat += 1;
        }
        if !report.agreed() {
            disagreements += 1;
            println!("DISAGREE {}", report.name);
            print_report(&report);
        }
    }
    println!(
        "CHECK: {} instances, {} sat, {} disagreements",
        count, sat, disagreements
    );
    if disagreements > 0 {
        bail!("{} instances disagree", disagreements);
    }
    Ok(())
}

fn print_report(report: &CaseReport) {
    println!("\n{}:", report.name);
    for row in &report.rows {
        println!("{}", row.summary_line());
    }
    if let Some((oracle, verdict)) = report.oracle {
        println!("  {:<10} -> {}", oracle.name(), verdict);
    }
    if !report.agreed() {
        println!("  MISMATCH");
    }
}
