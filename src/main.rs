use clap::Parser;
use seoinject::application::{apply_templates, init::init, preview, ApplyOptions};
use seoinject::cli::{format_report, Cli, Commands};
use seoinject::error::SeoError;
use seoinject::infrastructure::FileSystemRepository;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "seoinject=debug"
    } else {
        "seoinject=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn repository(config: Option<PathBuf>) -> Result<FileSystemRepository, SeoError> {
    match config {
        Some(path) => Ok(FileSystemRepository::from_config_path(path)),
        None => FileSystemRepository::discover(),
    }
}

fn run(cli: Cli) -> Result<(), SeoError> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            Ok(())
        }
        Commands::Apply {
            dry_run,
            templates_dir,
        } => {
            let repo = repository(cli.config)?;
            let report = apply_templates(
                &repo,
                ApplyOptions {
                    templates_dir,
                    dry_run,
                },
            )?;

            println!("{}", format_report(&report));

            match report.errored() {
                0 => Ok(()),
                n => Err(SeoError::BatchFailed(n)),
            }
        }
        Commands::Preview { file } => {
            let repo = repository(cli.config)?;
            print!("{}", preview(&repo, &file)?);
            Ok(())
        }
    }
}
