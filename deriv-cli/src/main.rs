//! The `deriv` driver.
//!
//! ```text
//! deriv [output_file] [tangent_input] [taylor_input] [differentiate_input]
//! ```
//!
//! Missing arguments are prompted for on standard input; answering with an empty line quits.
//! Each input file carries one scenario, line by line:
//!
//! - tangent: the expression, the variable, the point of contact;
//! - Taylor: the expression, the variable, the expansion point, the order;
//! - differentiation: the expression, the variable.
//!
//! The driver parses each expression, walks it through the corresponding transforms, and emits
//! a typeset report with one section per scenario, invoking the plotting back-end along the
//! way. Exit code 0 on success; every error kind maps to its own non-zero code (see
//! [`Error::exit_code`]).

mod error;
mod plot;
mod report;

use deriv_engine::transforms::{difference, tangent, taylor};
use deriv_engine::Expr;
use error::Error;
use log::info;
use plot::Plotter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use report::Report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

fn main() {
    env_logger::init();

    match run() {
        Ok(()) => {}
        Err(err) => {
            err.report_to_stderr();
            process::exit(err.exit_code());
        }
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let output_path = arg_or_prompt(&args, 0, "output file")?;
    let tangent_path = arg_or_prompt(&args, 1, "tangent input file")?;
    let taylor_path = arg_or_prompt(&args, 2, "Taylor input file")?;
    let diff_path = arg_or_prompt(&args, 3, "differentiation input file")?;

    let out = File::create(&output_path).map_err(|source| Error::OpenFile {
        path: output_path.clone(),
        source,
    })?;

    let mut report = Report::new(BufWriter::new(out), seeded_rng());
    let mut plotter = Plotter::new();

    report.preamble()?;
    tangent_section(&mut report, &mut plotter, &tangent_path)?;
    taylor_section(&mut report, &mut plotter, &taylor_path)?;
    diff_section(&mut report, &mut plotter, &diff_path)?;
    report.finish()?;

    info!("report written to {output_path}");
    Ok(())
}

fn tangent_section<W: Write>(
    report: &mut Report<W>,
    plotter: &mut Plotter,
    path: &str,
) -> Result<(), Error> {
    let input = InputFile::read(path)?;
    let mut expr = input.expression()?;
    let var = input.field(1, "variable")?;
    let at: f64 = input.parse_field(2, "point")?;

    report.section("Getting superhard tangent")?;
    report.paragraph(&format!("We are looking for the tangent at ${var} = {at}$."))?;
    report.step(&expr)?;

    expr.simplify();
    report.step(&expr)?;

    let line = tangent(&mut expr, &var, at)?;
    report.step(&line)?;

    let image = plotter.render(&[&expr, &line])?;
    report.image(&image)?;
    Ok(())
}

fn taylor_section<W: Write>(
    report: &mut Report<W>,
    plotter: &mut Plotter,
    path: &str,
) -> Result<(), Error> {
    let input = InputFile::read(path)?;
    let mut expr = input.expression()?;
    let var = input.field(1, "variable")?;
    let at: f64 = input.parse_field(2, "expansion point")?;
    let order: usize = input.parse_field(3, "order")?;

    report.section("Getting superhard Taylor series")?;
    report.paragraph(&format!(
        "We expand to order {order} around ${var} = {at}$.",
    ))?;
    report.step(&expr)?;

    expr.simplify();
    report.step(&expr)?;

    let poly = taylor(&mut expr, &var, at, order)?;
    report.step(&poly)?;

    let image = plotter.render(&[&expr, &poly])?;
    report.image(&image)?;

    let gap = difference(&expr, &poly);
    report.paragraph("The truncation error, for the sceptics:")?;
    report.step(&gap)?;
    let image = plotter.render(&[&gap])?;
    report.image(&image)?;
    Ok(())
}

fn diff_section<W: Write>(
    report: &mut Report<W>,
    plotter: &mut Plotter,
    path: &str,
) -> Result<(), Error> {
    let input = InputFile::read(path)?;
    let mut expr = input.expression()?;
    let var = input.field(1, "variable")?;

    report.section("Calculating too easy differentiation")?;
    report.step(&expr)?;

    expr.simplify();
    report.step(&expr)?;

    let derived = expr.differentiate(&var)?;
    report.step(&derived)?;

    let image = plotter.render(&[&expr, &derived])?;
    report.image(&image)?;
    Ok(())
}

/// One scenario input file, split into trimmed lines.
struct InputFile {
    path: String,
    lines: Vec<String>,
}

impl InputFile {
    fn read(path: &str) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::OpenFile {
            path: path.to_owned(),
            source,
        })?;
        let lines = text.lines().map(|line| line.trim().to_owned()).collect();
        Ok(Self {
            path: path.to_owned(),
            lines,
        })
    }

    /// Parses the expression on the first line.
    fn expression(&self) -> Result<Expr, Error> {
        let text = match self.lines.first() {
            Some(line) if !line.is_empty() => line.clone(),
            _ => {
                return Err(Error::NoExpression {
                    path: self.path.clone(),
                })
            }
        };

        Expr::parse(&text).map_err(|source| Error::Parse { source, input: text })
    }

    fn field(&self, index: usize, what: &str) -> Result<String, Error> {
        match self.lines.get(index) {
            Some(line) if !line.is_empty() => Ok(line.clone()),
            _ => Err(Error::MalformedInput {
                path: self.path.clone(),
                reason: format!("line {} should hold the {what}", index + 1),
            }),
        }
    }

    fn parse_field<T: std::str::FromStr>(&self, index: usize, what: &str) -> Result<T, Error> {
        let line = self.field(index, what)?;
        line.parse().map_err(|_| Error::MalformedInput {
            path: self.path.clone(),
            reason: format!("`{line}` is not a valid {what}"),
        })
    }
}

/// Takes the argument at `index`, or prompts for it. An empty answer quits.
fn arg_or_prompt(args: &[String], index: usize, what: &str) -> Result<String, Error> {
    if let Some(value) = args.get(index) {
        return Ok(value.clone());
    }

    print!("Enter the {what} name (empty line quits): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let line = line.trim();

    if line.is_empty() {
        return Err(Error::UserQuit);
    }
    Ok(line.to_owned())
}

/// The report's random source: seedable through `DERIV_SEED` for reproducible output.
fn seeded_rng() -> StdRng {
    match std::env::var("DERIV_SEED").ok().and_then(|seed| seed.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
