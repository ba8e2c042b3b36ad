use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", bin_name = "addressbook", version)]
#[command(about = "Searchable in-memory address book", long_about = None)]
pub struct Cli {
    /// Number of random sample contacts to start with
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for the sample data generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding config.json
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Show the contact list
    #[command(visible_alias = "ls", display_order = 1)]
    List,

    /// Filter by name or company (no text clears the filter)
    #[command(visible_alias = "/", display_order = 2)]
    Search {
        #[arg(
            num_args = 0..,
            default_value = "",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        text: String,
    },

    /// Select a contact by its list number
    #[command(visible_alias = "s", display_order = 3)]
    Select { index: usize },

    /// Clear the selection
    #[command(display_order = 4)]
    Deselect,

    /// Show the editor for the selected contact
    #[command(display_order = 5)]
    Show,

    /// Set a field of the selected contact (no value clears it)
    #[command(display_order = 6)]
    Set {
        /// Field key or label, e.g. first-name
        field: String,

        #[arg(
            num_args = 0..,
            default_value = "",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        value: String,
    },

    /// Add a new contact at the top and select it
    #[command(visible_alias = "new", display_order = 7)]
    Add,

    /// Remove the selected contact
    #[command(visible_alias = "rm", display_order = 8)]
    Remove,

    /// List the field names accepted by `set`
    #[command(display_order = 9)]
    Fields,

    /// Print this help
    #[command(display_order = 10)]
    Help,

    /// Leave the session
    #[command(visible_alias = "exit", display_order = 11)]
    Quit,
}

impl SessionLine {
    /// Parses a raw input line. Words are split on whitespace, except that
    /// search text and `set` values keep the rest of the line as typed.
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        let mut parsed = Self::try_parse_from(line.split_whitespace())?;
        let (_, args) = split_word(line);
        match &mut parsed.command {
            SessionCommand::Search { text } => *text = args.to_string(),
            SessionCommand::Set { value, .. } => *value = split_word(args).1.to_string(),
            _ => {}
        }
        Ok(parsed)
    }
}

/// Splits off the first word. Only the single separator after it is consumed.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    input.split_once(char::is_whitespace).unwrap_or((input, ""))
}

/// Returns the session help: one line per command with its aliases.
pub fn get_session_help() -> String {
    let cmd = SessionLine::command();

    let rows: Vec<(String, String)> = cmd
        .get_subcommands()
        .filter(|sc| !sc.is_hide_set())
        .map(|sc| {
            let mut names = vec![sc.get_name().to_string()];
            names.extend(sc.get_visible_aliases().map(str::to_string));
            let about = sc.get_about().map(|a| a.to_string()).unwrap_or_default();
            (names.join(", "), about)
        })
        .collect();

    let width = rows.iter().map(|(n, _)| n.len()).max().unwrap_or(0) + 2;

    let mut output = String::from("Commands:\n");
    for (names, about) in rows {
        output.push_str(&format!("  {names:<width$}{about}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
        SessionLine::command().debug_assert();
    }

    #[test]
    fn parses_search_with_spaces() {
        let line = SessionLine::parse_line("search peter smith").unwrap();
        assert!(matches!(line.command, SessionCommand::Search { text } if text == "peter smith"));
    }

    #[test]
    fn parses_empty_search() {
        let line = SessionLine::parse_line("search").unwrap();
        assert!(matches!(line.command, SessionCommand::Search { text } if text.is_empty()));
    }

    #[test]
    fn parses_set_with_multi_word_value() {
        let line = SessionLine::parse_line("set mobile-phone +358 40-123").unwrap();
        match line.command {
            SessionCommand::Set { field, value } => {
                assert_eq!(field, "mobile-phone");
                assert_eq!(value, "+358 40-123");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn keeps_spacing_of_set_value() {
        let line = SessionLine::parse_line("set street 12  Main   St ").unwrap();
        match line.command {
            SessionCommand::Set { field, value } => {
                assert_eq!(field, "street");
                assert_eq!(value, "12  Main   St ");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn keeps_spacing_of_search_text() {
        let line = SessionLine::parse_line("/ a  b").unwrap();
        assert!(matches!(line.command, SessionCommand::Search { text } if text == "a  b"));
    }

    #[test]
    fn set_without_value_clears() {
        let line = SessionLine::parse_line("set city").unwrap();
        assert!(matches!(line.command, SessionCommand::Set { value, .. } if value.is_empty()));
    }

    #[test]
    fn parses_aliases() {
        assert!(matches!(
            SessionLine::parse_line("rm").unwrap().command,
            SessionCommand::Remove
        ));
        assert!(matches!(
            SessionLine::parse_line("s 3").unwrap().command,
            SessionCommand::Select { index: 3 }
        ));
        assert!(matches!(
            SessionLine::parse_line("exit").unwrap().command,
            SessionCommand::Quit
        ));
    }

    #[test]
    fn rejects_non_numeric_index() {
        assert!(SessionLine::parse_line("select first").is_err());
    }

    #[test]
    fn help_lists_commands() {
        let help = get_session_help();
        assert!(help.contains("search, /"));
        assert!(help.contains("quit, exit"));
        assert!(help.contains("remove, rm"));
    }
}
