use anyhow::{Context, Result, bail, ensure};
use chatmark_config::Config;
use chatmark_engine::{format, render::render_message};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, path::PathBuf};

mod app;
mod render;
mod transcripts;

use app::{App, run_app};

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(about = "Formats and searches chat transcripts")]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a directory of transcripts in the terminal
    View {
        /// Transcript directory (defaults to `transcripts_path` from the config file)
        dir: Option<PathBuf>,
    },
    /// Print one message rendered as HTML
    Html {
        /// Message file to render
        file: PathBuf,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let config_path = Config::config_path();
    log::debug!("Config path: {}", config_path.display());

    match args.command {
        Commands::View { dir } => {
            let config = load_config()?;
            view(dir, config)
        }
        Commands::Html { file } => {
            let config = load_config()?;
            let message = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read message file {}", file.display()))?;
            println!("{}", render_message(&format(&message), &config.html));
            Ok(())
        }
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save()?;
            println!("Wrote {}", config_path.display());
            Ok(())
        }
    }
}

fn load_config() -> Result<Config> {
    Ok(Config::load()
        .context("Failed to load config file")?
        .unwrap_or_default())
}

fn view(dir: Option<PathBuf>, config: Config) -> Result<()> {
    let from_config = dir.is_none();
    let Some(dir) = dir.or(config.transcripts_path) else {
        bail!(
            "No transcript directory provided and none configured.\n\
             Pass one as `chatmark view <DIR>` or set `transcripts_path` in {}",
            Config::config_path().display()
        );
    };

    let source = if from_config {
        format!(" from config file '{}'", Config::config_path().display())
    } else {
        String::new()
    };
    ensure!(
        dir.is_dir(),
        "Transcript path '{}'{} is not a directory",
        dir.display(),
        source
    );

    let entries = transcripts::load_dir(&dir)?;
    log::info!("Loaded {} transcripts", entries.len());
    let mut app = App::new(entries, config.search.mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
