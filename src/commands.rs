//! Subcommand implementations.
//! Every generating command builds a context, renders its templates and writes
//! them under the output directory.

use crate::catalog::{Catalog, Group};
use crate::cli::{
    Args, Command, CommunityHealthArgs, ConfigArgs, LicenceArgs, PypiProjectArgs, ReadmeArgs,
    SphinxDocsArgs,
};
use crate::config::{load_context, ConfigFile};
use crate::constants::README_TEMPLATE;
use crate::context::{Context, Value};
use crate::error::Result;
use crate::extractor::template_variables;
use crate::renderer::{MiniJinjaRenderer, Rendered, TemplateRenderer};
use crate::writer::write_rendered;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Options {
    pub use_config: bool,
    pub config_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Options {
    /// Context from the configuration file when requested, from `names`/`values` otherwise.
    fn context(&self, names: &[&str], values: Vec<Value>) -> Result<Context> {
        if self.use_config {
            load_context(&self.config_file)
        } else {
            Ok(Context::from_pairs(names, values))
        }
    }
}

/// Builds the catalog and runs the selected command.
pub fn run(args: Args) -> Result<()> {
    let catalog = match &args.templates {
        Some(dir) => Catalog::from_dir(dir)?,
        None => Catalog::builtin()?,
    };
    let options = Options {
        use_config: args.use_config,
        config_file: args.config_file,
        output_dir: args.output_dir,
    };
    execute(&catalog, &options, args.command)
}

/// Runs one command against an explicit catalog.
pub fn execute(catalog: &Catalog, options: &Options, command: Command) -> Result<()> {
    match command {
        Command::GetVars { template, json } => get_vars(catalog, &template, json),
        Command::Templates => list_templates(catalog),
        Command::Config(config_args) => config(catalog, options, config_args),
        Command::Licence(licence_args) => licence(catalog, options, licence_args),
        Command::Readme(readme_args) => readme(catalog, options, readme_args),
        Command::CommunityHealth(ch_args) => community_health(catalog, options, ch_args),
        Command::PypiProject(pypi_args) => pypi_project(catalog, options, pypi_args),
        Command::SphinxDocs(docs_args) => sphinx_docs(catalog, options, docs_args),
        Command::DotFiles => dot_files(catalog, options),
    }
}

fn text(value: Option<String>) -> Value {
    Value::String(value.unwrap_or_default())
}

fn write(rendered: &Rendered, output_dir: &Path) -> Result<()> {
    let written = write_rendered(rendered, output_dir)?;
    debug!("Wrote {} bytes to {}", rendered.content.len(), written.display());
    println!("Written '{}'.", rendered.path);
    Ok(())
}

/// Renders and writes every template of `group`, stopping at the first failure.
pub fn generate_group(
    catalog: &Catalog,
    group: Group,
    context: &Context,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let renderer = MiniJinjaRenderer::new(catalog)?;
    let templates = catalog.templates_in(group);
    if templates.is_empty() {
        warn!("No {group} templates in the catalog");
    }

    let mut written = Vec::with_capacity(templates.len());
    for identifier in templates {
        let rendered = renderer.render(identifier, context)?;
        write(&rendered, output_dir)?;
        written.push(output_dir.join(&rendered.path));
    }
    Ok(written)
}

fn get_vars(catalog: &Catalog, template: &str, json: bool) -> Result<()> {
    let identifier = catalog.resolve(template)?;
    let variables: Vec<String> = template_variables(catalog, identifier)?.into_iter().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&variables)?);
    } else {
        print!("{}", serde_yaml::to_string(&variables)?);
    }
    Ok(())
}

fn list_templates(catalog: &Catalog) -> Result<()> {
    for group in Group::ALL {
        let templates = catalog.templates_in(group);
        if templates.is_empty() {
            continue;
        }
        println!("{group}:");
        for identifier in templates {
            println!("  {identifier}");
        }
    }
    Ok(())
}

fn config(catalog: &Catalog, options: &Options, args: ConfigArgs) -> Result<()> {
    if args.init {
        let config = ConfigFile::init(&options.config_file, catalog)?;
        println!("Generated configuration in '{}'.", config.path().display());
        return Ok(());
    }

    let mut config = ConfigFile::open(&options.config_file)?;
    if args.list {
        print!("{}", serde_yaml::to_string(config.context())?);
    }
    if let Some(key) = args.get {
        match config.get(&key) {
            Some(value) => println!("{value}"),
            None => warn!("'{}' is not set in '{}'", key, config.path().display()),
        }
    }
    if let Some([key, value]) = args.add.as_deref() {
        config.add(key, value)?;
        println!("Updated configuration in '{}'.", config.path().display());
    }
    if let Some([key, value]) = args.set.as_deref() {
        config.set(key, value)?;
        println!("Updated configuration in '{}'.", config.path().display());
    }
    Ok(())
}

fn licence(catalog: &Catalog, options: &Options, args: LicenceArgs) -> Result<()> {
    let context = options.context(
        &["author_name", "program_name"],
        vec![text(args.author_name), Value::from(args.program_name)],
    )?;
    let renderer = MiniJinjaRenderer::new(catalog)?;
    write(&renderer.render_licence(&args.licence, &context)?, &options.output_dir)
}

fn readme(catalog: &Catalog, options: &Options, args: ReadmeArgs) -> Result<()> {
    let context = options.context(
        &["author_username", "readthedocs", "repo_name"],
        vec![text(args.author_username), Value::Bool(args.readthedocs), text(args.repo_name)],
    )?;
    let renderer = MiniJinjaRenderer::new(catalog)?;
    write(&renderer.render(README_TEMPLATE, &context)?, &options.output_dir)
}

fn community_health(catalog: &Catalog, options: &Options, args: CommunityHealthArgs) -> Result<()> {
    let context = options.context(
        &["author_email", "author_name", "author_username", "licence", "program_name"],
        vec![
            text(args.author_email),
            text(args.author_name),
            text(args.author_username),
            text(args.licence),
            text(args.program_name),
        ],
    )?;
    generate_group(catalog, Group::CommunityHealth, &context, &options.output_dir)?;
    Ok(())
}

fn pypi_project(catalog: &Catalog, options: &Options, args: PypiProjectArgs) -> Result<()> {
    let context = options.context(
        &[
            "author_email",
            "author_name",
            "author_username",
            "console_scripts",
            "install_requires",
            "package_name",
            "program_description",
            "program_name",
            "version",
        ],
        vec![
            text(args.author_email),
            text(args.author_name),
            text(args.author_username),
            Value::List(args.console_scripts),
            Value::List(args.install_requires),
            text(args.package_name),
            text(args.program_description),
            text(args.program_name),
            text(args.version),
        ],
    )?;
    generate_group(catalog, Group::Packaging, &context, &options.output_dir)?;
    Ok(())
}

fn sphinx_docs(catalog: &Catalog, options: &Options, args: SphinxDocsArgs) -> Result<()> {
    let context = options.context(
        &["author_name", "program_name", "version"],
        vec![text(args.author_name), text(args.program_name), text(args.version)],
    )?;
    generate_group(catalog, Group::Documentation, &context, &options.output_dir)?;
    Ok(())
}

fn dot_files(catalog: &Catalog, options: &Options) -> Result<()> {
    let context = load_context(&options.config_file)?;
    generate_group(catalog, Group::Dotfile, &context, &options.output_dir)?;
    Ok(())
}
