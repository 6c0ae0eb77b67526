use crate::{
    DEFAULT_CSV_DELIMITER, DEFAULT_MOVES_PATH, MoveCategory, MoveType, MovesViewError,
    MovesViewResult, ViewAction, ViewState, Vocabulary,
};

use clap::Parser;
use std::path::PathBuf;

// https://stackoverflow.com/questions/74068168/clap-rs-not-printing-colors-during-help
fn get_styles() -> clap::builder::Styles {
    let cyan = anstyle::Color::Ansi(anstyle::AnsiColor::Cyan);
    let green = anstyle::Color::Ansi(anstyle::AnsiColor::Green);
    let yellow = anstyle::Color::Ansi(anstyle::AnsiColor::Yellow);

    clap::builder::Styles::styled()
        .placeholder(anstyle::Style::new().fg_color(Some(yellow)))
        .usage(anstyle::Style::new().fg_color(Some(cyan)).bold())
        .header(
            anstyle::Style::new()
                .fg_color(Some(cyan))
                .bold()
                .underline(),
        )
        .literal(anstyle::Style::new().fg_color(Some(green)))
}

// https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template
const APPLET_TEMPLATE: &str = "\
{before-help}
{about-with-newline}
{usage-heading} {usage}

{all-args}
{after-help}";

const EX1: &str = r#" moves-view "scraped data/moves.csv""#;
const EX2: &str = r#" moves-view moves.csv -t Fire -c Special"#;
const EX3: &str = r#" moves-view moves.csv -s burn"#;
const EX4: &str = r#" moves-view moves_semicolon.csv -d ";""#;

/// Command-line arguments for the Moves View application.
#[derive(Parser, Debug, Clone)]
#[command(
    // Read from `Cargo.toml`.
    author, version, about,
    long_about = None,
    next_line_help = true,
    help_template = APPLET_TEMPLATE,
    styles=get_styles(),
    after_help = format!("EXAMPLES:\n{EX1}\n{EX2}\n{EX3}\n{EX4}")
)]
pub struct Arguments {
    /// CSV delimiter character. [Default: ',']
    #[arg(
        short = 'd',
        long,
        default_value = DEFAULT_CSV_DELIMITER,
        help = "CSV delimiter character",
        long_help = "Sets the CSV delimiter.\n\
        If the header does not contain the move columns, common separators (, ; | \\t) are tried.",
        value_parser = validate_delimiter
    )]
    pub delimiter: String,

    /// Path to the moves CSV file.
    #[arg(
        value_name = "FILE_PATH",
        default_value = DEFAULT_MOVES_PATH,
        required = false,
        help = "Path to the moves CSV file [Optional]",
        long_help = "Path to the moves CSV file.\n\
        Required columns: Name, Type, Cat., Power, Acc., PP, Effect, Prob. (%).\n\
        If the file does not exist, the window opens empty; load a file from the menu or by drag-drop."
    )]
    pub path: PathBuf,

    /// Initial search text (matched against name and effect).
    #[arg(
        short = 's',
        long,
        value_name = "TEXT",
        help = "Initial search text, matched against move name and effect"
    )]
    pub search: Option<String>,

    /// Initial type filter.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Initial type filter (e.g. Fire, Water) [Default: All]",
        value_parser = parse_move_type
    )]
    pub move_type: Option<MoveType>,

    /// Initial category filter.
    #[arg(
        short = 'c',
        long,
        value_name = "CATEGORY",
        help = "Initial category filter (Physical, Special, Status, Z-Move) [Default: All]",
        value_parser = parse_move_category
    )]
    pub category: Option<MoveCategory>,
}

impl Arguments {
    /// Build `Arguments` struct.
    pub fn build() -> Arguments {
        Arguments::parse()
    }

    /// The view state the window opens with: the default view narrowed by the
    /// filters given on the command line.
    pub fn initial_state(&self) -> ViewState {
        let mut state = ViewState::default();
        if let Some(search) = &self.search {
            state = state.apply(ViewAction::SetSearchText(search.clone()));
        }
        state = state.apply(ViewAction::SetTypeFilter(self.move_type));
        state.apply(ViewAction::SetCategoryFilter(self.category))
    }
}

// --- Validation Functions ---

/// clap validator for '--delimiter': exactly one single-byte character.
fn validate_delimiter(s: &str) -> MovesViewResult<String> {
    if s.len() == 1 {
        Ok(s.to_string())
    } else {
        Err(MovesViewError::InvalidArgument {
            arg_name: "--delimiter".to_string(),
            reason: format!("'{s}' must be a single ASCII character"),
        })
    }
}

/// Parses a vocabulary label, listing the accepted values on failure.
fn parse_label<T: Vocabulary>(s: &str, arg_name: &str) -> MovesViewResult<T> {
    T::from_label(s).ok_or_else(|| {
        let accepted: Vec<&str> = T::ALL.iter().map(|value| value.label()).collect();
        MovesViewError::InvalidArgument {
            arg_name: arg_name.to_string(),
            reason: format!("'{s}' is not one of: {}", accepted.join(", ")),
        }
    })
}

fn parse_move_type(s: &str) -> MovesViewResult<MoveType> {
    parse_label(s, "--type")
}

fn parse_move_category(s: &str) -> MovesViewResult<MoveCategory> {
    parse_label(s, "--category")
}

//----------------------------------------------------------------------------//
//                                   Tests                                    //
//----------------------------------------------------------------------------//
