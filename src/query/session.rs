//! Query session
//!
//! Answers a stream of patterns against one finished tree, numbering them
//! as they arrive and handing each result to the reporter.

use super::collector::{LeafCollector, counting_sort};
use super::matcher::Matcher;
use crate::index::suffix_tree::SuffixTree;
use crate::output::Reporter;
use std::io;
use std::time::{Duration, Instant};
use termcolor::WriteColor;
use tracing::{debug, info};

/// Result of one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// 1-based sequence number of the pattern in the session
    pub number: usize,
    /// Occurrence positions, 0-based and ascending
    pub positions: Vec<usize>,
    /// Query time, when timing is enabled
    pub elapsed: Option<Duration>,
}

/// Totals for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub patterns: usize,
    /// Patterns with at least one occurrence
    pub matched: usize,
    pub occurrences: usize,
}

pub struct QuerySession<'t> {
    matcher: Matcher<'t>,
    collector: LeafCollector<'t>,
    timing: bool,
    summary: SessionSummary,
}

impl<'t> QuerySession<'t> {
    pub fn new(tree: &'t SuffixTree, timing: bool) -> Self {
        Self {
            matcher: Matcher::new(tree),
            collector: LeafCollector::new(tree),
            timing,
            summary: SessionSummary::default(),
        }
    }

    /// Answer the next pattern
    pub fn run(&mut self, pattern: &[u8]) -> QueryOutcome {
        let start = self.timing.then(Instant::now);

        let mut positions = Vec::new();
        if let Some(locus) = self.matcher.locate(pattern) {
            self.collector.collect_into(locus, &mut positions);
            counting_sort(&mut positions);
        }

        let elapsed = start.map(|s| s.elapsed());

        self.summary.patterns += 1;
        if !positions.is_empty() {
            self.summary.matched += 1;
            self.summary.occurrences += positions.len();
        }

        debug!(
            number = self.summary.patterns,
            pattern_len = pattern.len(),
            occurrences = positions.len(),
            "pattern answered"
        );

        QueryOutcome {
            number: self.summary.patterns,
            positions,
            elapsed,
        }
    }

    /// Answer every pattern in order and report each result
    pub fn run_all<I, P, W>(&mut self, patterns: I, reporter: &mut Reporter<W>) -> io::Result<SessionSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
        W: WriteColor,
    {
        for pattern in patterns {
            let outcome = self.run(pattern.as_ref());
            reporter.report(&outcome)?;
        }
        reporter.flush()?;

        info!(
            patterns = self.summary.patterns,
            matched = self.summary.matched,
            occurrences = self.summary.occurrences,
            "session finished"
        );

        Ok(self.summary)
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use termcolor::Buffer;

    #[test]
    fn test_numbers_patterns_in_order() {
        let tree = SuffixTree::build(b"banana\n");
        let mut session = QuerySession::new(&tree, false);

        let first = session.run(b"ana");
        let second = session.run(b"xyz");
        let third = session.run(b"na");

        assert_eq!(first.number, 1);
        assert_eq!(first.positions, vec![1, 3]);
        assert_eq!(second.number, 2);
        assert!(second.positions.is_empty());
        assert_eq!(third.number, 3);
        assert_eq!(third.positions, vec![2, 4]);
        assert!(first.elapsed.is_none());
    }

    #[test]
    fn test_timing_records_elapsed() {
        let tree = SuffixTree::build(b"abc\n");
        let mut session = QuerySession::new(&tree, true);
        assert!(session.run(b"b").elapsed.is_some());
    }

    #[test]
    fn test_run_all_reports_and_summarizes() {
        let tree = SuffixTree::build(b"banana\n");
        let mut session = QuerySession::new(&tree, false);
        let mut reporter = Reporter::new(Buffer::no_color(), OutputFormat::Text, true, false);

        let patterns: [&[u8]; 3] = [b"ana", b"xyz", b"na"];
        let summary = session.run_all(patterns, &mut reporter).unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                patterns: 3,
                matched: 2,
                occurrences: 4,
            }
        );
        let out = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
        assert_eq!(out, "1: 2, 4\n3: 3, 5\n");
    }
}
