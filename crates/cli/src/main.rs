//! `numkit`: evaluate formulas, find roots, and solve linear systems from the
//! command line.

mod render;

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use numkit_expr::Expression;
use numkit_solvers::{
    equation::{self, Status, bisection, secant},
    linear::gauss::{self, AugmentedMatrix},
};
use serde_json::json;

/// Exit code when a root finder runs out of iterations.
const EXIT_MAX_ITERS: u8 = 2;

/// Numerical methods with full iteration traces
#[derive(Parser)]
#[command(
    name = "numkit",
    version,
    about = "Evaluate formulas, find roots, and solve linear systems",
    after_help = r#"
Formulas use the variable x, the operators + - * / ^, the constants pi (π)
and e, and the functions sin cos tan log ln sqrt exp abs. Juxtaposition
multiplies: 2x, 3(x+1), (x+1)(x-1).

Exit codes:
  0  converged or solved
  1  invalid input or solver failure
  2  root finder reached the iteration limit

Environment Variables:
  NUMKIT_LOG_LEVEL=debug       Set log level (error, warn, info, debug, trace)
"#
)]
#[command(propagate_version = true)]
struct Cli {
    /// Set log level
    #[arg(
        long,
        value_enum,
        env = "NUMKIT_LOG_LEVEL",
        default_value = "warn",
        global = true
    )]
    log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula at a point
    Eval {
        /// Formula in x
        formula: String,

        /// Value of x
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
    },

    /// Find a root by bisection on [a, b]
    Bisection {
        /// Formula in x
        formula: String,

        /// Left end of the interval
        #[arg(short, allow_negative_numbers = true)]
        a: f64,

        /// Right end of the interval
        #[arg(short, allow_negative_numbers = true)]
        b: f64,

        #[command(flatten)]
        limits: Limits,
    },

    /// Find a root by the secant method from two starting points
    Secant {
        /// Formula in x
        formula: String,

        /// First starting point
        #[arg(long, allow_negative_numbers = true)]
        x0: f64,

        /// Second starting point
        #[arg(long, allow_negative_numbers = true)]
        x1: f64,

        #[command(flatten)]
        limits: Limits,
    },

    /// Solve a linear system by Gaussian elimination
    Gauss {
        /// Rows of the augmented matrix, entries separated by commas
        #[arg(
            value_parser = parse_row,
            allow_hyphen_values = true,
            required_unless_present = "size"
        )]
        rows: Vec<Row>,

        /// Print an all-zero matrix template of this size instead of solving
        #[arg(long, conflicts_with = "rows")]
        size: Option<usize>,
    },
}

/// One comma-separated row of an augmented matrix.
#[derive(Clone, Debug, PartialEq)]
struct Row(Vec<f64>);

/// Stopping criteria shared by the root finders.
#[derive(clap::Args)]
struct Limits {
    /// Convergence tolerance
    #[arg(long, default_value_t = 1e-4)]
    tol: f64,

    /// Iteration limit
    #[arg(long, default_value_t = 100)]
    max_iters: usize,
}

impl Limits {
    fn config(&self) -> Result<equation::Config> {
        equation::Config::new(self.max_iters, self.tol).context("invalid solver limits")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    debug!("numkit v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Eval { formula, x } => eval(&formula, x, cli.json),
        Commands::Bisection {
            formula,
            a,
            b,
            limits,
        } => run_bisection(&formula, [a, b], &limits, cli.json),
        Commands::Secant {
            formula,
            x0,
            x1,
            limits,
        } => run_secant(&formula, [x0, x1], &limits, cli.json),
        Commands::Gauss { rows, size } => match size {
            Some(n) => template(n, cli.json),
            None => run_gauss(rows, cli.json),
        },
    }
}

fn parse_formula(formula: &str) -> Result<Expression> {
    Expression::parse(formula).with_context(|| format!("failed to parse formula `{formula}`"))
}

fn parse_row(text: &str) -> Result<Row, String> {
    text.split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .map_err(|_| format!("`{entry}` is not a number"))
        })
        .collect::<Result<_, _>>()
        .map(Row)
}

fn eval(formula: &str, x: f64, as_json: bool) -> Result<ExitCode> {
    let expression = parse_formula(formula)?;
    let value = expression
        .try_eval(x)
        .with_context(|| format!("cannot evaluate `{formula}`"))?;

    if as_json {
        println!("{}", json!({ "formula": formula, "x": x, "value": value }));
    } else {
        println!("f({x}) = {value}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_bisection(
    formula: &str,
    bracket: [f64; 2],
    limits: &Limits,
    as_json: bool,
) -> Result<ExitCode> {
    let expression = parse_formula(formula)?;
    let config = limits.config()?;

    let observer = |record: &bisection::Record| {
        info!(
            "iteration {}: c = {}, error = {}",
            record.iter, record.c, record.error
        );
        None
    };
    let solution = match bisection::solve(&expression, bracket, &config, observer) {
        Ok(solution) => solution,
        Err(err) => {
            if let Some(trace) = err.trace().filter(|trace| !trace.is_empty()) {
                print!("{}", render::Table(trace));
            }
            return Err(err).context("bisection failed");
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", render::Table(&solution.trace));
        println!("{}", render::Summary(&solution));
    }
    Ok(exit_code(solution.status))
}

fn run_secant(
    formula: &str,
    points: [f64; 2],
    limits: &Limits,
    as_json: bool,
) -> Result<ExitCode> {
    let expression = parse_formula(formula)?;
    let config = limits.config()?;

    let observer = |record: &secant::Record| {
        info!(
            "iteration {}: x2 = {}, error = {}",
            record.iter, record.x2, record.error
        );
        None
    };
    let solution = match secant::solve(&expression, points, &config, observer) {
        Ok(solution) => solution,
        Err(err) => {
            if let Some(trace) = err.trace().filter(|trace| !trace.is_empty()) {
                print!("{}", render::Table(trace));
            }
            return Err(err).context("secant method failed");
        }
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        print!("{}", render::Table(&solution.trace));
        println!("{}", render::Summary(&solution));
    }
    Ok(exit_code(solution.status))
}

fn run_gauss(rows: Vec<Row>, as_json: bool) -> Result<ExitCode> {
    if rows.is_empty() {
        bail!("no matrix rows given");
    }
    let rows = rows.into_iter().map(|Row(values)| values).collect();
    let matrix = AugmentedMatrix::new(rows).context("invalid augmented matrix")?;
    let solution = gauss::solve_default(&matrix).context("gaussian elimination failed")?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{matrix}");
        println!();
        print!("{}", render::StepLog(&solution));
        println!();
        print!("{}", render::Variables(&solution.solution));
    }
    Ok(ExitCode::SUCCESS)
}

fn template(n: usize, as_json: bool) -> Result<ExitCode> {
    let config = gauss::Config::default();
    if n < config.min_size() || n > config.max_size() {
        bail!(
            "size {n} is outside the supported range {}..={}",
            config.min_size(),
            config.max_size()
        );
    }
    let matrix = AugmentedMatrix::zeros(n)?;

    if as_json {
        println!("{}", serde_json::to_string(&matrix)?);
    } else {
        println!("{matrix}");
    }
    Ok(ExitCode::SUCCESS)
}

fn exit_code(status: Status) -> ExitCode {
    match status {
        Status::MaxIters => ExitCode::from(EXIT_MAX_ITERS),
        Status::Converged | Status::StoppedByObserver => ExitCode::SUCCESS,
    }
}
