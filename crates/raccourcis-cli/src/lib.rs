//! Command-line access to the bundled reference sheets.
//!
//! The binary is a thin wrapper around [`run`]; commands write to any
//! [`std::io::Write`] so they can be exercised in tests.

mod commands;
mod error;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use raccourcis_core::{Lang, LangPolicy};

pub use error::CliError;

/// Environment variables consulted for the display language, in order.
const LANG_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Parser)]
#[command(
    name = "raccourcis-cli",
    version,
    about = "Browse, search and check the Raccourcis cheat sheets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List sheets with their categories and entry counts
    List(LangArgs),

    /// Search entries, grouped by sheet and category
    Search {
        query: String,
        /// Restrict the search to one sheet
        #[arg(long, short)]
        sheet: Option<String>,
        #[command(flatten)]
        lang: LangArgs,
        /// Print code examples under each entry
        #[arg(long, short)]
        examples: bool,
    },

    /// Print a whole sheet
    Show {
        sheet: String,
        #[command(flatten)]
        lang: LangArgs,
        #[arg(long, short)]
        examples: bool,
    },

    /// Check content and translations for completeness
    Check {
        /// Treat warnings (single-language fields, empty categories) as errors
        #[arg(long)]
        strict: bool,
    },

    /// Export resolved entries as JSON
    Export {
        /// Export only this sheet
        #[arg(long, short)]
        sheet: Option<String>,
        #[command(flatten)]
        lang: LangArgs,
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct LangArgs {
    /// Display language (`en` or `fr`); defaults to $LANG, then French
    #[arg(long, short = 'l')]
    pub lang: Option<Lang>,
}

impl LangArgs {
    /// Resolve against the given environment values.
    pub fn resolve<'a>(&self, env: impl IntoIterator<Item = &'a str>) -> Lang {
        LangPolicy::new(self.lang, Lang::default()).resolve(None, env)
    }

    fn resolve_from_env(&self) -> Lang {
        let values: Vec<String> = LANG_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .filter(|value| !value.is_empty())
            .collect();
        let lang = self.resolve(values.iter().map(String::as_str));
        log::debug!("display language: {lang}");
        lang
    }
}

/// Whether a command succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but found problems (`check` with errors).
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Execute a parsed command, writing its output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<Outcome, CliError> {
    match &cli.command {
        Command::List(lang) => commands::list::run(out, lang.resolve_from_env()),
        Command::Search {
            query,
            sheet,
            lang,
            examples,
        } => commands::search::run(
            out,
            query,
            sheet.as_deref(),
            lang.resolve_from_env(),
            *examples,
        ),
        Command::Show {
            sheet,
            lang,
            examples,
        } => commands::show::run(out, sheet, lang.resolve_from_env(), *examples),
        Command::Check { strict } => commands::check::run(out, *strict),
        Command::Export {
            sheet,
            lang,
            pretty,
        } => commands::export::run(out, sheet.as_deref(), lang.resolve_from_env(), *pretty),
    }
}
