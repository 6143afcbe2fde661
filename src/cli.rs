//! Command-line definitions for soprano.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use chat::ParseLimits;
use chat::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES};
use clap::{ArgGroup, Parser};

use crate::error::{Result, SopranoError};

#[derive(Parser, Debug)]
#[command(name = "soprano")]
#[command(about = "Build and visualize chat components")]
#[command(
    long_about = "Build and visualize chat components.

Reads a JSON chat component and prints it as ANSI terminal text, as ANSI
with the escape character spelled out for pasting into source code, or as
HTML. Without an output flag the component is previewed on the terminal.

EXAMPLES:
    soprano --ansi '{\"text\":\"Hi\",\"color\":\"gold\"}'
    soprano --html --file message.json
    echo '{\"text\":\"Hi\"}' | soprano -e"
)]
#[command(version)]
#[command(group(ArgGroup::new("output").multiple(false)))]
pub struct Cli {
    /// The JSON chat component
    #[arg(value_name = "JSON", conflicts_with_all = ["input", "file"])]
    pub component: Option<String>,

    /// The JSON chat component, as an option
    #[arg(short, long, value_name = "JSON", conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the JSON chat component from a file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output the chat component with ANSI sequences and exit
    #[arg(short, long, group = "output")]
    pub ansi: bool,

    /// Output the chat component with escaped ANSI sequences and exit
    #[arg(short = 'e', long = "escaped-ansi", visible_alias = "escansi", group = "output")]
    pub escaped_ansi: bool,

    /// Output the chat component as HTML and exit
    #[arg(short = 'H', long, group = "output")]
    pub html: bool,

    /// Leave out the trailing reset sequence in ANSI output
    #[arg(long)]
    pub no_reset: bool,

    /// Maximum component nesting depth
    #[arg(long, value_name = "LEVELS", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of components
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_NODES)]
    pub max_nodes: usize,

    /// Write log messages to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What to do with a parsed component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Ansi,
    EscapedAnsi,
    Html,
    Preview,
}

impl Cli {
    pub fn mode(&self) -> OutputMode {
        if self.ansi {
            OutputMode::Ansi
        } else if self.escaped_ansi {
            OutputMode::EscapedAnsi
        } else if self.html {
            OutputMode::Html
        } else {
            OutputMode::Preview
        }
    }

    pub fn limits(&self) -> ParseLimits {
        ParseLimits {
            max_depth: self.max_depth,
            max_nodes: self.max_nodes,
        }
    }

    /// Returns the component text from the argument, `--input`, `--file`,
    /// or piped stdin, in that order.
    pub fn read_input(&self) -> Result<String> {
        if let Some(json) = self.component.as_ref().or(self.input.as_ref()) {
            return Ok(json.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path).map_err(|source| SopranoError::File {
                path: path.display().to_string(),
                source,
            });
        }

        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            return Err(SopranoError::MissingInput);
        }
        let mut json = String::new();
        stdin.read_to_string(&mut json)?;
        Ok(json)
    }
}
