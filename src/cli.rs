//! Command-line interface implementation for wpmake.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::installer::{build_install_tasks, InstallTask};
use crate::loader::default_template_dir;

/// Command-line arguments structure for wpmake.
#[derive(Parser, Debug)]
#[command(author, version, about = "wpmake: WordPress theme scaffolding tool", long_about = None)]
pub struct Args {
    /// Directory where the theme will be generated
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Directory holding the `theme` and `shared` template roots [default: installed templates]
    #[arg(long, value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers as JSON from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Read answers from a JSON or YAML file
    #[arg(long, value_name = "FILE", conflicts_with = "stdin")]
    pub answers: Option<PathBuf>,

    /// Accept the default answer for every question without prompting
    #[arg(short = 'y', long)]
    pub defaults: bool,

    /// Skip every package install
    #[arg(long)]
    pub skip_install: bool,

    /// Skip `npm install`
    #[arg(long)]
    pub skip_npm: bool,

    /// Skip `bower install`
    #[arg(long)]
    pub skip_bower: bool,

    /// Skip `composer install`
    #[arg(long)]
    pub skip_composer: bool,
}

impl Args {
    /// The template directory given on the command line, or the installed one.
    pub fn template_dir(&self) -> PathBuf {
        self.template_dir.clone().unwrap_or_else(default_template_dir)
    }

    /// Installer tasks configured by the skip flags.
    pub fn install_tasks(&self) -> Vec<InstallTask> {
        let skipped: Vec<&str> = [
            ("npm", self.skip_npm),
            ("bower", self.skip_bower),
            ("composer", self.skip_composer),
        ]
        .into_iter()
        .filter_map(|(name, skip)| skip.then_some(name))
        .collect();

        build_install_tasks(self.skip_install, &skipped)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
