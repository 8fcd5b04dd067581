//! Command-line driver.
//!
//! Feeds key tokens to a session backed by the JSON item file and prints the
//! view after each one.
//!
//! ```text
//! keylist M i l k save            # type "Milk" and create it
//! keylist hold:toggle             # long-press toggle (select)
//! keylist item:3 item-hold:2      # tap row 3, long-press row 2
//! echo "L E save" | keylist       # tokens from stdin
//! ```

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use keylist::app::keyboard::{self, Gesture};
use keylist::app::services::{AutoConfirm, Confirm, RandomIds, Services};
use keylist::app::{AppState, Event, Key};
use keylist::storage::JsonStore;
use keylist::{observability, Config, ItemId, KeylistError, Result};

#[derive(Parser)]
#[command(name = "keylist", about = "Checklist editor driven by a virtual keyboard", version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Item file (overrides the configuration)
    #[arg(short, long)]
    data_file: Option<String>,

    /// Trace filter, e.g. `debug` (overrides the configuration)
    #[arg(long)]
    trace_level: Option<String>,

    /// Approve delete prompts without asking
    #[arg(short, long)]
    yes: bool,

    /// Inputs: a key (`M`, `save`, `space`), `hold:<key>`, `item:<id>` or
    /// `item-hold:<id>`. Read from stdin when omitted.
    keys: Vec<String>,
}

/// Asks on stdout and reads the answer from stdin.
struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Parses one input token. `Ok(None)` means the gesture does nothing.
fn parse_token(token: &str) -> Result<Option<Event>> {
    if let Some(id) = token.strip_prefix("item-hold:") {
        return Ok(Some(Event::ItemLongPressed(ItemId::from(id))));
    }
    if let Some(id) = token.strip_prefix("item:") {
        return Ok(Some(Event::ItemPressed(ItemId::from(id))));
    }

    let (gesture, key) = match token.strip_prefix("hold:") {
        Some(key) => (Gesture::LongPress, key),
        None => (Gesture::Press, token),
    };
    let key: Key = key.parse()?;

    Ok(keyboard::resolve(key, gesture).map(Event::Key))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.data_file.is_some() {
        config.data_file.clone_from(&cli.data_file);
    }
    if cli.trace_level.is_some() {
        config.trace_level.clone_from(&cli.trace_level);
    }
    Ok(config)
}

fn print_view(app: &AppState<JsonStore>) -> Result<()> {
    let view = app.view()?;
    let mut out = io::stdout().lock();
    write!(out, "{}", keylist::ui::render(&view))?;
    writeln!(out)?;
    Ok(())
}

fn apply(app: &mut AppState<JsonStore>, token: &str, services: &mut Services<'_>) -> Result<()> {
    match parse_token(token)? {
        Some(event) => {
            app.dispatch(&event, services)?;
        }
        None => tracing::debug!(token, "gesture ignored"),
    }
    print_view(app)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    observability::init_tracing(&config);

    let mut app = keylist::initialize(&config)?;
    let mut ids = RandomIds;
    let mut auto = AutoConfirm(true);
    let mut prompt = PromptConfirm;
    let confirm: &mut dyn Confirm = if cli.yes { &mut auto } else { &mut prompt };
    let mut services = Services::new(confirm, &mut ids);

    print_view(&app)?;

    if !cli.keys.is_empty() {
        for token in &cli.keys {
            apply(&mut app, token, &mut services)?;
        }
        return Ok(());
    }

    // one read_line per iteration so the delete prompt can share stdin
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        for token in line.split_whitespace() {
            match apply(&mut app, token, &mut services) {
                Ok(()) => {}
                Err(e @ KeylistError::Key(_)) => eprintln!("{e}"),
                Err(e) => return Err(e),
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keylist: {e}");
            ExitCode::FAILURE
        }
    }
}
