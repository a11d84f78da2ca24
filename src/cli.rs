//! Command-line interface implementation for repodoc.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_CONFIG_FILE;
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for repodoc.
#[derive(Parser, Debug)]
#[command(author, version, about = "repodoc: generate licences, documentation and community files for a repository", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Take template variables from the configuration file instead of the arguments
    #[arg(short = 'u', long = "use-config-file", global = true)]
    pub use_config: bool,

    /// Configuration file to read and update
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config_file: PathBuf,

    /// Directory of *.j2 templates to use instead of the built-in ones.
    /// `now`, `range`, `dict`, `namespace`, `debug`, `cycler`, `joiner` and `lipsum`
    /// are reserved function names and are never read as template variables
    #[arg(short, long, value_name = "DIR", global = true)]
    pub templates: Option<PathBuf>,

    /// Directory generated files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the variables a template uses
    #[command(name = "get-vars", alias = "get_vars")]
    GetVars {
        /// Template name, e.g. README.md or README.md.j2
        #[arg(value_name = "TEMPLATE")]
        template: String,

        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// List the available templates by group
    Templates,

    /// Initialise, inspect or change the configuration file
    Config(ConfigArgs),

    /// Generate a LICENCE file
    Licence(LicenceArgs),

    /// Generate README.md
    Readme(ReadmeArgs),

    /// Generate community health files under .github
    #[command(name = "community-health", aliases = ["community_health", "comh", "ch"])]
    CommunityHealth(CommunityHealthArgs),

    /// Generate MANIFEST.in, setup.cfg and setup.py
    #[command(name = "pypi-project", aliases = ["pypi_project", "pypi"])]
    PypiProject(PypiProjectArgs),

    /// Generate Sphinx documentation skeleton
    #[command(name = "sphinx-docs", aliases = ["sphinx_docs", "docs", "sphinx"])]
    SphinxDocs(SphinxDocsArgs),

    /// Generate .gitignore, .gitattributes and .mailmap from the configuration file
    #[command(name = "dot-files", aliases = ["dot_files", "dots"])]
    DotFiles,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ConfigArgs {
    /// Print the whole configuration
    #[arg(short, long)]
    pub list: bool,

    /// Write a configuration with every known variable set to its default
    #[arg(long)]
    pub init: bool,

    /// Print the value of a variable
    #[arg(long, value_name = "NAME")]
    pub get: Option<String>,

    /// Set a variable, lists are comma separated
    #[arg(long, num_args = 2, value_names = ["NAME", "VALUE"])]
    pub set: Option<Vec<String>>,

    /// Set a variable, appending to it if it holds a list
    #[arg(long, num_args = 2, value_names = ["NAME", "VALUE"])]
    pub add: Option<Vec<String>>,
}

#[derive(ClapArgs, Debug)]
pub struct LicenceArgs {
    /// Licence to generate, e.g. MIT
    #[arg(value_name = "LICENCE", default_value = "MIT")]
    pub licence: String,

    /// Author name
    #[arg(short, long)]
    pub author_name: Option<String>,

    /// Program name
    #[arg(short, long, required = true)]
    pub program_name: String,
}

#[derive(ClapArgs, Debug)]
pub struct ReadmeArgs {
    /// GitHub user or organisation owning the repository
    #[arg(long)]
    pub author_username: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo_name: Option<String>,

    /// Add a Read the Docs badge
    #[arg(long)]
    pub readthedocs: bool,
}

#[derive(ClapArgs, Debug)]
pub struct CommunityHealthArgs {
    /// Author email address, used as the security and conduct contact
    #[arg(long)]
    pub author_email: Option<String>,

    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// GitHub user or organisation owning the repository
    #[arg(long)]
    pub author_username: Option<String>,

    /// Licence named in the contributing guide
    #[arg(long)]
    pub licence: Option<String>,

    /// Program name
    #[arg(long)]
    pub program_name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct PypiProjectArgs {
    /// Author email address
    #[arg(long)]
    pub author_email: Option<String>,

    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// GitHub user or organisation owning the repository
    #[arg(long)]
    pub author_username: Option<String>,

    /// Console entry points, comma separated
    #[arg(long, value_delimiter = ',')]
    pub console_scripts: Vec<String>,

    /// Requirements, comma separated
    #[arg(long, value_delimiter = ',')]
    pub install_requires: Vec<String>,

    /// Python package name
    #[arg(long)]
    pub package_name: Option<String>,

    /// One-line program description
    #[arg(long)]
    pub program_description: Option<String>,

    /// Program name
    #[arg(long)]
    pub program_name: Option<String>,

    /// Program version
    #[arg(long)]
    pub version: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SphinxDocsArgs {
    /// Author name
    #[arg(long)]
    pub author_name: Option<String>,

    /// Program name
    #[arg(long)]
    pub program_name: Option<String>,

    /// Program version
    #[arg(long)]
    pub version: Option<String>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingSubcommand
                || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            {
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
