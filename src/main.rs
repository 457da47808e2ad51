// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use character_catalog::{
    html, logging, text, Action, Browser, CatalogSource, Category, Config, Display, FileSource,
    LoadError,
};

/// Character Catalog - browse characters by name or world
#[derive(Parser, Debug)]
#[command(name = "character-catalog")]
#[command(version)]
#[command(about = "Browse a catalog of characters: search by text or filter by world")]
struct Args {
    /// Catalog JSON document
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal browser (default)
    Browse,
    /// Print the cards matching a search term
    Search {
        /// Text matched against name, title and description
        term: String,
    },
    /// Print the cards of one world: real-world or other-world
    Category {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// Print every card
    List,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::default()
        .with_data_path(args.data)
        .with_log_file(args.log_file);

    match args.command {
        None | Some(Command::Browse) => run_ui_mode(&config),
        Some(Command::Search { term }) => run_once(&config, Action::Search(term), args.format),
        Some(Command::Category { category }) => run_once(&config, category.into(), args.format),
        Some(Command::List) => run_once(&config, Action::Start, args.format),
    }
}

fn run_once(config: &Config, action: Action, format: Format) -> Result<()> {
    logging::init("warn", config.log_file.as_deref())?;

    let mut browser = Browser::new();
    let loaded = execute(&mut browser, &FileSource::new(&config.data_path), action);

    // The failure message is printed too, then the exit status reports it
    print_display(browser.display(), format);
    loaded.with_context(|| format!("Failed to load catalog: {}", config.data_path.display()))?;
    Ok(())
}

/// Load the catalog and run one action against it. A failed load leaves
/// the failure message on display and skips the action.
fn execute(
    browser: &mut Browser,
    source: &impl CatalogSource,
    action: Action,
) -> Result<usize, LoadError> {
    let count = browser.load(source)?;
    browser.dispatch(action);
    Ok(count)
}

fn print_display(display: &Display, format: Format) {
    let output = match format {
        Format::Text => text::render_display(display),
        Format::Html => html::render_display(display),
    };
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    // Terminal output belongs to the UI; logs only go to a file
    let directive = if config.log_file.is_some() { "info" } else { "off" };
    logging::init(directive, config.log_file.as_deref())?;

    let mut browser = Browser::new();
    // A failed load is already on screen as the feedback message
    let _ = browser.load(&FileSource::new(&config.data_path));

    let mut app = ui::App::new(browser);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use web UI: cargo run --bin catalog-server --features server");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use character_catalog::{InlineSource, LOAD_FAILURE_MESSAGE};

    const CATALOG: &str = r#"[
        {"nome":"Coraline","titulo":"A Garota","descricao":"...","idade_aproximada":11,"link":"x"}
    ]"#;

    #[test]
    fn test_execute_runs_action_after_load() {
        let mut browser = Browser::new();
        let count = execute(&mut browser, &InlineSource(CATALOG.to_string()), Action::Start).unwrap();

        assert_eq!(count, 1);
        assert_eq!(browser.display().card_count(), 1);
    }

    #[test]
    fn test_execute_reports_failed_load() {
        let mut browser = Browser::new();
        let result = execute(&mut browser, &InlineSource("not json".to_string()), Action::Start);

        assert!(matches!(result, Err(LoadError::Parse(_))));
        assert_eq!(browser.display(), &Display::Message(LOAD_FAILURE_MESSAGE.to_string()));
        assert!(text::render_display(browser.display()).contains(LOAD_FAILURE_MESSAGE));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut browser = Browser::new();
        let source = FileSource::new("/nonexistent/catalog.json");

        let err = execute(&mut browser, &source, Action::Start)
            .with_context(|| "Failed to load catalog")
            .unwrap_err();

        assert!(err.to_string().contains("Failed to load catalog"));
        assert!(browser.display().is_message());
    }
}
