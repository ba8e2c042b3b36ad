//! # Session Loop
//!
//! Builds the [`AppContext`] (config, seeded store, controller), then reads one
//! command per line until `quit` or end of input. Each line is parsed into a
//! [`SessionCommand`], dispatched to the matching `AddressBookApi` event, and
//! the regions named in the returned `Refresh` are re-rendered.
//!
//! Input comes from a line editor with history when stdin is a terminal, and
//! from plain stdin lines otherwise, so sessions can be scripted:
//!
//! ```text
//! printf 'search smith\nselect 1\nset company Acme\n' | addressbook --seed 7
//! ```
//!
//! Errors raised by a single command are printed and the session goes on;
//! only setup failures end the process.

use super::logging;
use super::render::{
    print_messages, render_editor, render_fields, render_list, ListLayout,
};
use super::setup::{get_session_help, Cli, SessionCommand, SessionLine};
use addressbook::api::{AddressBookApi, CmdMessage, CmdResult};
use addressbook::config::AddressBookConfig;
use addressbook::error::{AddressBookError, Result};
use addressbook::sample;
use addressbook::store::memory::InMemoryStore;
use clap::Parser;
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, IsTerminal, StdinLock};
use std::path::PathBuf;

const PROMPT: &str = "addressbook> ";

struct AppContext {
    api: AddressBookApi<InMemoryStore>,
    layout: ListLayout,
    use_color: bool,
}

enum Flow {
    Continue,
    Quit,
}

enum LineInput {
    Interactive(DefaultEditor),
    Piped(StdinLock<'static>),
}

impl LineInput {
    fn open() -> Result<Self> {
        if io::stdin().is_terminal() {
            let editor =
                DefaultEditor::new().map_err(|e| AddressBookError::Terminal(e.to_string()))?;
            Ok(Self::Interactive(editor))
        } else {
            Ok(Self::Piped(io::stdin().lock()))
        }
    }

    /// Next input line, or `None` at end of input (or Ctrl-C / Ctrl-D).
    fn read_line(&mut self) -> Result<Option<String>> {
        match self {
            LineInput::Interactive(editor) => match editor.readline(PROMPT) {
                Ok(line) => {
                    let _ = editor.add_history_entry(line.as_str());
                    Ok(Some(line))
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
                Err(e) => Err(AddressBookError::Terminal(e.to_string())),
            },
            LineInput::Piped(stdin) => {
                let mut buffer = Vec::new();
                if stdin.read_until(b'\n', &mut buffer)? == 0 {
                    return Ok(None);
                }
                let line = String::from_utf8_lossy(&buffer);
                Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
            }
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;
    print_list(&ctx);

    let mut input = LineInput::open()?;
    while let Some(line) = input.read_line()? {
        if let Flow::Quit = handle_line(&mut ctx, &line) {
            break;
        }
    }
    tracing::debug!("session ended");
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(default_config_dir);
    let config = match &config_dir {
        Some(dir) => AddressBookConfig::load(dir)?,
        None => AddressBookConfig::default(),
    };
    tracing::debug!(?config_dir, ?config, "configuration loaded");

    let count = cli.count.unwrap_or(config.sample_size);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut store = InMemoryStore::new();
    sample::seed(&mut store, &mut rng, count);

    Ok(AppContext {
        api: AddressBookApi::new(store),
        layout: ListLayout {
            line_width: config.line_width,
            limit: config.list_limit,
        },
        use_color: !cli.no_color && console::Term::stdout().features().colors_supported(),
    })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "addressbook", "addressbook").map(|d| d.config_dir().to_path_buf())
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    if line.trim().is_empty() {
        return Flow::Continue;
    }

    let command = match SessionLine::parse_line(line) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            eprint!("{}", e);
            return Flow::Continue;
        }
    };

    let outcome = match command {
        SessionCommand::List => {
            print_list(ctx);
            Ok(())
        }
        SessionCommand::Search { text } => handle_event(ctx, |api| api.search_text_changed(&text)),
        SessionCommand::Select { index } => handle_event(ctx, |api| api.select_index(index)),
        SessionCommand::Deselect => handle_event(ctx, |api| api.selection_changed(None)),
        SessionCommand::Show => {
            print_editor(ctx);
            Ok(())
        }
        SessionCommand::Set { field, value } => {
            handle_event(ctx, |api| api.edit_field(&field, value))
        }
        SessionCommand::Add => handle_event(ctx, |api| api.add_contact()),
        SessionCommand::Remove => handle_event(ctx, |api| api.remove_selected()),
        SessionCommand::Fields => {
            print!("{}", render_fields(ctx.use_color));
            Ok(())
        }
        SessionCommand::Help => {
            print!("{}", get_session_help());
            Ok(())
        }
        SessionCommand::Quit => return Flow::Quit,
    };

    if let Err(e) = outcome {
        tracing::debug!(error = %e, "command failed");
        print_messages(&[CmdMessage::error(e.to_string())], ctx.use_color);
    }
    Flow::Continue
}

/// Raises one controller event and re-renders whatever it invalidated.
fn handle_event<F>(ctx: &mut AppContext, event: F) -> Result<()>
where
    F: FnOnce(&mut AddressBookApi<InMemoryStore>) -> Result<CmdResult>,
{
    let result = event(&mut ctx.api)?;
    if result.refresh.list {
        print_list(ctx);
    }
    if result.refresh.editor {
        print_editor(ctx);
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn print_list(ctx: &AppContext) {
    print!(
        "{}",
        render_list(
            ctx.api.list(),
            ctx.api.selection(),
            ctx.layout,
            ctx.use_color
        )
    );
}

fn print_editor(ctx: &AppContext) {
    print!("{}", render_editor(ctx.api.editor(), ctx.use_color));
}
