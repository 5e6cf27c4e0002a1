use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use stx::config::{ColorMode, OutputFormat, SessionConfig};
use stx::index::build_tree_with_progress;
use stx::index::stats::show_stats;
use stx::output::Reporter;
use stx::query::QuerySession;
use stx::utils::{InputData, parse_input};
use termcolor::{BufferedStandardStream, ColorChoice};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stx")]
#[command(about = "Suffix-tree substring index: build once, query many patterns")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    search: SearchArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Args, Default)]
struct SearchArgs {
    /// Input: a text line followed by pattern lines (default: stdin)
    input: Option<PathBuf>,

    /// Print the query time of every pattern
    #[arg(long)]
    timing: bool,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Report positions counting from 0
    #[arg(long)]
    zero_based: bool,

    /// Never show the build progress bar
    #[arg(long)]
    no_progress: bool,

    /// JSON config file (flags take precedence)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer every pattern line against the text line (default)
    Search(SearchArgs),
    /// Show suffix tree statistics for the text line
    Stats {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print every edge of the suffix tree of the text line
    Dump {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },
}

impl SearchArgs {
    /// Config file (or defaults) with command-line overrides applied
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if self.timing {
            config.timing = true;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.zero_based {
            config.one_based = false;
        }
        if self.no_progress {
            config.progress = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Search(args)) => run_search(args)?,
        Some(Commands::Stats { input, format }) => {
            let data = InputData::open(input.as_deref())?;
            let (text, _) = parse_input(&data);
            let built = build_tree_with_progress(&text, false);

            let stdout = io::stdout();
            let mut out = stdout.lock();
            show_stats(&mut out, &built, format)?;
        }
        Some(Commands::Dump { input }) => {
            let data = InputData::open(input.as_deref())?;
            let (text, _) = parse_input(&data);
            let built = build_tree_with_progress(&text, false);

            let mut out = BufWriter::new(io::stdout().lock());
            built.tree.dump(&mut out).context("Failed to write tree")?;
            out.flush()?;
        }
        None => run_search(cli.search)?,
    }

    Ok(())
}

fn run_search(args: SearchArgs) -> Result<()> {
    let config = args.session_config()?;
    debug!(?config, "session config");

    let data = InputData::open(args.input.as_deref())?;
    let (text, patterns) = parse_input(&data);
    let built = build_tree_with_progress(&text, !config.progress);

    let out = BufferedStandardStream::stdout(color_choice(config.color));
    let mut reporter = Reporter::new(out, config.format, config.one_based, config.timing);
    let mut session = QuerySession::new(&built.tree, config.timing);

    session
        .run_all(patterns, &mut reporter)
        .context("Failed to write results")?;

    Ok(())
}

/// `auto` only colors a terminal
fn color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Auto if !io::stdout().is_terminal() => ColorChoice::Never,
        mode => mode.choice(),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
