use crate::config::OutputFormat;
use crate::index::build::BuiltTree;
use crate::index::suffix_tree::TreeStats;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Stats as emitted in JSON mode
#[derive(Debug, Serialize)]
struct StatsReport {
    #[serde(flatten)]
    tree: TreeStats,
    build_ms: f64,
}

/// Display tree statistics
pub fn show_stats<W: Write>(out: &mut W, built: &BuiltTree, format: OutputFormat) -> Result<()> {
    let stats = built.tree.stats();
    let build_ms = built.elapsed.as_secs_f64() * 1000.0;

    if format == OutputFormat::Json {
        let report = StatsReport {
            tree: stats,
            build_ms,
        };
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    writeln!(out)?;
    writeln!(out, "Text size:        {}", format_size(stats.text_len as u64))?;
    writeln!(out, "Nodes:            {}", stats.node_count)?;
    writeln!(out, "Leaves:           {}", stats.leaf_count)?;
    writeln!(out, "Internal nodes:   {}", stats.internal_count)?;
    writeln!(out, "Max depth:        {}", stats.max_depth)?;
    writeln!(out)?;
    writeln!(out, "Build time:       {:.3} ms", build_ms)?;

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build::build_tree;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(7), "7 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn test_text_stats() {
        let built = build_tree(b"banana\n");
        let mut out = Vec::new();
        show_stats(&mut out, &built, OutputFormat::Text).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Text size:        7 bytes"));
        assert!(out.contains("Leaves:           7"));
        assert!(out.contains("Internal nodes:   3"));
    }

    #[test]
    fn test_json_stats() {
        let built = build_tree(b"banana\n");
        let mut out = Vec::new();
        show_stats(&mut out, &built, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["text_len"], 7);
        assert_eq!(value["node_count"], 12);
        assert!(value["build_ms"].is_number());
    }
}
