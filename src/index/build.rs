use crate::index::suffix_tree::{SuffixTree, SuffixTreeBuilder};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};
use tracing::info;

/// Texts shorter than this build without a progress bar
pub const PROGRESS_THRESHOLD: usize = 4 * 1024 * 1024;

/// Bytes fed to the builder between progress updates
const CHUNK_SIZE: usize = 256 * 1024;

/// A finished tree and how long construction took
pub struct BuiltTree {
    pub tree: SuffixTree,
    pub elapsed: Duration,
}

/// Build the suffix tree for `text`
pub fn build_tree(text: &[u8]) -> BuiltTree {
    build_tree_with_progress(text, true)
}

/// Build the suffix tree for `text` with optional silent mode
pub fn build_tree_with_progress(text: &[u8], silent: bool) -> BuiltTree {
    let start = Instant::now();

    let progress = if !silent && text.len() >= PROGRESS_THRESHOLD {
        let bar = ProgressBar::new(text.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message("Building suffix tree...");
        Some(bar)
    } else {
        None
    };

    let mut builder = SuffixTreeBuilder::with_capacity(text.len());
    for chunk in text.chunks(CHUNK_SIZE) {
        builder.extend(chunk);
        if let Some(bar) = &progress {
            bar.inc(chunk.len() as u64);
        }
    }
    let tree = builder.finish();
    let elapsed = start.elapsed();

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    info!(
        text_len = tree.len(),
        nodes = tree.node_count(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "suffix tree built"
    );

    BuiltTree { tree, elapsed }
}
