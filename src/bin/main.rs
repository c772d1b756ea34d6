use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use lexicon_core::plot::{Plot, Setting};
use lexicon_core::retention::RetentionMode;
use lexicon_core::{GrammaticalCategory, Lexicon, LexiconCompiler, LexiconConfig, RuleTagger};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexicon")]
#[command(about = "Compile part-of-speech word lists from a text corpus", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Data directory (overrides the config file)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a lexicon from gutenberg/clean/<name>.txt
    Compile {
        name: String,

        /// How rejected words are treated while the corpus is traversed
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show word counts from the last compilation
    Stats { name: String },

    /// Pick a plot type for a setting
    Plot {
        setting: String,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Cumulative,
    EvictEachStep,
}

impl From<ModeArg> for RetentionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Cumulative => RetentionMode::Cumulative,
            ModeArg::EvictEachStep => RetentionMode::EvictEachStep,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => LexiconConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LexiconConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Commands::Compile { name, mode } => {
            if let Some(mode) = mode {
                config.mode = mode.into();
            }
            let compiler = LexiconCompiler::new(config, RuleTagger::new());
            let report = compiler
                .compile(&name)
                .with_context(|| format!("Failed to compile lexicon '{}'", name))?;

            println!(
                "{} {} from {} documents",
                "Compiled".green().bold(),
                report.name.as_str().bold(),
                report.documents
            );
            for (category, words) in &report.surviving {
                println!("  {:<14} {}", category.as_str(), words);
            }
        }
        Commands::Stats { name } => {
            let layout = config.layout();
            let snapshot = Lexicon::load_counts(&layout, &name)
                .with_context(|| format!("No compiled counts for lexicon '{}'", name))?;
            let rule = config.retention_rule();

            println!("{} ({} documents)", snapshot.name.as_str().bold(), snapshot.documents);
            println!("  {:<14} {:>8} {:>10} {:>8}", "category", "words", "total", "kept");
            for category in GrammaticalCategory::ALL {
                let Some(table) = snapshot.tables.get(&category) else {
                    continue;
                };
                let kept = rule.surviving(table).len();
                println!(
                    "  {:<14} {:>8} {:>10} {:>8}",
                    category.as_str(),
                    table.len(),
                    table.total(),
                    kept.to_string().cyan()
                );
            }
        }
        Commands::Plot { setting, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let plot = Plot::generate(&Setting::new(&setting), &mut rng);
            info!(setting = %setting, plot = %plot.plot_type, "plot selected");
            println!("{}", plot.plot_type);
        }
    }

    Ok(())
}
