use projectbrief::{
    analyzer::ArchiveAnalyzer,
    error::{AnalyzerError, Result},
    logging,
    utils::normalize_user_input_path,
    Config,
};
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Summarize a zipped software project", long_about = None)]
struct Cli {
    /// Zip archive to summarize
    archive: String,

    /// Config file (defaults to <config dir>/projectbrief/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deepest folder level shown in the structure listing
    #[arg(short = 'd', long)]
    max_depth: Option<usize>,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.log_level) {
        eprintln!("{} {}", "[WARNING]".yellow(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(depth) = cli.max_depth {
        config.analysis.max_depth = depth;
        config.validate()?;
    }

    let archive = normalize_user_input_path(&cli.archive);
    if !archive.is_file() {
        return Err(AnalyzerError::Validation(format!(
            "Archive does not exist: '{}'",
            archive.display()
        )));
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Analyzing {}", archive.display()));

    let result = ArchiveAnalyzer::new(config.analysis).analyze(&archive);
    pb.finish_and_clear();
    let summary = result?;

    match cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, summary.render())?;
            info!("Summary written to {}", path.display());
            println!("{} {}", "Summary written to".green(), path.display());
        }
        None => print!("{}", summary),
    }

    Ok(())
}
