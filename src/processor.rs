//! Orchestration of catalog listing, selection and copying.

use crate::catalog::list_templates;
use crate::config::Config;
use crate::copier::copy_tree;
use crate::error::Result;
use crate::loader::load_template;
use crate::selector::{select_template, CommandRunner};
use log::info;
use std::path::{Path, PathBuf};

/// Entry point for the operations exposed to the command line.
pub struct Processor<'a> {
    root: &'a Path,
    select_cmd: Option<&'a str>,
    runner: &'a dyn CommandRunner,
}

impl<'a> Processor<'a> {
    pub fn new(
        root: &'a Path,
        select_cmd: Option<&'a str>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            root,
            select_cmd,
            runner,
        }
    }

    pub fn from_config(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self::new(&config.root, config.select_cmd.as_deref(), runner)
    }

    /// Names of the available boilerplates.
    pub fn list(&self) -> Result<Vec<String>> {
        list_templates(self.root)
    }

    /// Copies boilerplate `boilerplate` into `destination`, asking the selector
    /// when no name is given. Returns the directory that was copied.
    pub fn materialize<P: AsRef<Path>>(
        &self,
        boilerplate: Option<&str>,
        destination: P,
    ) -> Result<PathBuf> {
        let destination = destination.as_ref();
        let name = select_template(self.runner, self.root, boilerplate, self.select_cmd)?;
        let template_dir = load_template(self.root, &name)?;

        copy_tree(&template_dir, destination)?;

        info!("Created '{}' from boilerplate '{}'.", destination.display(), name);
        Ok(template_dir)
    }
}
