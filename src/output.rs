//! Output formatting for query results
//!
//! Text mode prints one line per pattern that occurs, `N: p1, p2, ...`,
//! with the pattern number and positions counted from 1 unless configured
//! otherwise. Patterns that do not occur print nothing. JSON mode prints
//! one object per pattern, matched or not.

use crate::config::OutputFormat;
use crate::query::QueryOutcome;
use serde::Serialize;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

/// One JSON result line
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    pattern: usize,
    positions: &'a [usize],
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_us: Option<f64>,
}

/// Writes query results to a (possibly colored) stream
pub struct Reporter<W: WriteColor> {
    out: W,
    format: OutputFormat,
    one_based: bool,
    timing: bool,
    /// Reused position buffer after base adjustment
    shifted: Vec<usize>,
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W, format: OutputFormat, one_based: bool, timing: bool) -> Self {
        Self {
            out,
            format,
            one_based,
            timing,
            shifted: Vec::new(),
        }
    }

    /// Report a single pattern result
    pub fn report(&mut self, outcome: &QueryOutcome) -> io::Result<()> {
        let offset = usize::from(self.one_based);
        self.shifted.clear();
        self.shifted
            .extend(outcome.positions.iter().map(|&p| p + offset));

        match self.format {
            OutputFormat::Text => self.report_text(outcome),
            OutputFormat::Json => self.report_json(outcome),
        }
    }

    fn report_text(&mut self, outcome: &QueryOutcome) -> io::Result<()> {
        if !self.shifted.is_empty() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(self.out, "{}", outcome.number)?;
            self.out.reset()?;
            write!(self.out, ": ")?;

            for (i, pos) in self.shifted.iter().enumerate() {
                if i > 0 {
                    write!(self.out, ", ")?;
                }
                write!(self.out, "{}", pos)?;
            }
            writeln!(self.out)?;
        }

        if self.timing {
            if let Some(elapsed) = outcome.elapsed {
                self.out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                writeln!(self.out, "time: {:.6}ms", elapsed.as_secs_f64() * 1000.0)?;
                self.out.reset()?;
            }
        }

        Ok(())
    }

    fn report_json(&mut self, outcome: &QueryOutcome) -> io::Result<()> {
        let record = JsonRecord {
            pattern: outcome.number,
            positions: &self.shifted,
            elapsed_us: outcome
                .elapsed
                .filter(|_| self.timing)
                .map(|e| e.as_secs_f64() * 1_000_000.0),
        };

        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
