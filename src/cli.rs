//! Command-line interface implementation for rat.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{expand_path, Config, ROOT_ENV, SELECT_CMD_ENV};
use crate::error::{Error, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for rat.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "rat: boilerplate manager",
    long_about = None,
    override_usage = "rat [OPTIONS] [BOILERPLATE] <PROJECT>"
)]
pub struct Args {
    /// Optional boilerplate name followed by the project path.
    /// Without a boilerplate name the selector command picks one.
    #[arg(value_name = "ARGS", num_args = 0..=2)]
    pub targets: Vec<String>,

    /// Show boilerplate list
    #[arg(short, long)]
    pub list: bool,

    /// Directory holding the boilerplates (default: ~/.rat)
    #[arg(long, env = ROOT_ENV)]
    pub root: Option<String>,

    /// Interactive filter command used to pick a boilerplate, e.g. "peco"
    #[arg(long, env = SELECT_CMD_ENV)]
    pub select_cmd: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Materialize {
        boilerplate: Option<String>,
        project: PathBuf,
    },
}

impl Args {
    /// Resolves flags and positionals into an [`Action`].
    ///
    /// # Errors
    /// * `Error::UsageError` if no project path is given
    /// * `Error::ConfigError` if the project path cannot be expanded
    pub fn action(&self) -> Result<Action> {
        if self.list {
            return Ok(Action::List);
        }

        let (boilerplate, project) = match self.targets.as_slice() {
            [project] => (None, project),
            [boilerplate, project] => (Some(boilerplate.clone()), project),
            [] => return Err(Error::UsageError("Please set 'project-name'".to_string())),
            _ => return Err(Error::UsageError("Too many arguments".to_string())),
        };

        Ok(Action::Materialize {
            boilerplate,
            project: expand_path(project)?,
        })
    }

    /// Builds the [`Config`] from the root and selector settings.
    pub fn config(&self) -> Result<Config> {
        Config::new(self.root.as_deref(), self.select_cmd.as_deref())
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if neither a project nor `--list` is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    let args = Args::try_parse().unwrap_or_else(|e| e.exit());
    if !args.list && args.targets.is_empty() {
        Args::command()
            .help_template(
                r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
            )
            .print_help()
            .ok();
        std::process::exit(1);
    }
    args
}
