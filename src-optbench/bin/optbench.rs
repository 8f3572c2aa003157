//! Catalog inspection CLI
//!
//! `optbench list` prints every function in the catalog (add `--json` for
//! machine-readable output); `optbench eval <spec> --point ...` evaluates
//! one function at a point, where `<spec>` is `cec<year>/f<index>` or a
//! common name.

use std::error::Error;
use std::sync::LazyLock;

use clap::{Parser, Subcommand};
use ndarray::Array1;
use regex::Regex;

use optbench::{BenchmarkFunction, SUCCESS_TOL, registry};

static CEC_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cec(\d{4})/[fF](\d{1,2})$").expect("spec pattern"));

#[derive(Parser)]
#[command(name = "optbench", about = "Benchmark function catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every function in the catalog
    List {
        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },
    /// Evaluate one function at a point
    Eval {
        /// `cec<year>/f<index>` or a common name, e.g. `cec2015/f3`, `ackley`
        spec: String,
        /// Comma-separated coordinates; the dimension follows the point
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        point: Vec<f64>,
    },
}

fn build(spec: &str, ndim: Option<usize>) -> Result<Box<dyn BenchmarkFunction>, Box<dyn Error>> {
    if let Some(caps) = CEC_SPEC_RE.captures(spec) {
        let year: u16 = caps[1].parse()?;
        let index: usize = caps[2].parse()?;
        Ok(registry::cec(year, index, ndim)?)
    } else {
        Ok(registry::named(spec, ndim)?)
    }
}

fn catalog_entries() -> Result<Vec<(String, Box<dyn BenchmarkFunction>)>, Box<dyn Error>> {
    let mut entries = Vec::new();
    for &year in registry::CEC_YEARS {
        let len = registry::cec_len(year).unwrap_or(0);
        for index in 1..=len {
            entries.push((format!("cec{}/f{}", year, index), registry::cec(year, index, None)?));
        }
    }
    for &name in registry::named_names() {
        entries.push((name.to_string(), registry::named(name, None)?));
    }
    Ok(entries)
}

fn list(json: bool) -> Result<(), Box<dyn Error>> {
    let entries = catalog_entries()?;
    if json {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(key, f)| {
                serde_json::json!({
                    "key": key,
                    "name": f.name(),
                    "formula": f.formula(),
                    "ndim": f.ndim(),
                    "bounds": f.bounds(),
                    "f_global": f.f_global(),
                    "properties": f.properties(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (key, f) in &entries {
            println!("{:<24} D={:<3} f*={:<8} {}", key, f.ndim(), f.f_global(), f.name());
        }
        println!("{} functions", entries.len());
    }
    Ok(())
}

fn eval(spec: &str, point: Vec<f64>) -> Result<(), Box<dyn Error>> {
    let ndim = if point.is_empty() { None } else { Some(point.len()) };
    let f = build(spec, ndim)?;
    let x = if point.is_empty() { f.x_global().clone() } else { Array1::from_vec(point) };

    let value = f.evaluate(&x)?;
    println!("{}", f.name());
    println!("  f(x)      = {}", value);
    println!("  f_global  = {}", f.f_global());
    println!("  succeeded = {}", f.is_succeed(&x, SUCCESS_TOL)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::List { json } => list(json),
        Command::Eval { spec, point } => eval(&spec, point),
    }
}
