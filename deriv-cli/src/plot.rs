//! The plotting back-end: writes a script for the external `gnuplot` tool and runs it.
//!
//! Plotting is best-effort: a missing or failing `gnuplot` is logged and the report simply
//! references an image that was not produced, instead of aborting the whole run.

use deriv_engine::fmt::plot::plot_expression;
use deriv_engine::Expr;
use log::warn;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Line colors handed to the plotting tool, in curve order.
const COLORS: [&str; 3] = ["red", "blue", "green"];

/// Renders plots into numbered image files next to the report.
pub struct Plotter {
    script_dir: PathBuf,
    counter: usize,
}

impl Plotter {
    pub fn new() -> Self {
        Self {
            script_dir: std::env::temp_dir(),
            counter: 0,
        }
    }

    /// Plots the given curves into one image, returning the image file name.
    pub fn render(&mut self, curves: &[&Expr]) -> io::Result<String> {
        self.counter += 1;
        let image = format!("deriv_plot_{}.png", self.counter);
        let script_path = self.script_dir.join(format!("deriv_plot_{}.gp", self.counter));

        let mut script = String::new();
        // writing into a String cannot fail
        let _ = writeln!(script, "set terminal png size 800,600");
        let _ = writeln!(script, "set output '{image}'");
        let _ = writeln!(script, "set grid");

        let _ = write!(script, "plot ");
        for (index, expr) in curves.iter().enumerate() {
            if index > 0 {
                let _ = write!(script, ", ");
            }
            let _ = write!(
                script,
                "({}) title \"{}\" lc rgb \"{}\"",
                plot_expression(expr),
                expr,
                COLORS[index % COLORS.len()],
            );
        }
        let _ = writeln!(script);

        std::fs::write(&script_path, script)?;

        match Command::new("gnuplot").arg(&script_path).status() {
            Ok(status) if status.success() => {}
            Ok(status) => warn!("gnuplot exited with {status} for {image}"),
            Err(err) => warn!("could not launch gnuplot: {err}"),
        }

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_names_are_numbered() {
        let mut plotter = Plotter::new();
        let expr = Expr::parse("x ^ 2").unwrap();
        let first = plotter.render(&[&expr]).unwrap();
        let second = plotter.render(&[&expr]).unwrap();
        assert_eq!(first, "deriv_plot_1.png");
        assert_eq!(second, "deriv_plot_2.png");
    }
}
