//! Template rendering for repodoc.
//! Binds a context to a catalogued template and resolves where the result goes.
use crate::catalog::{output_path, Catalog, Group};
use crate::constants::LICENCE_OUTPUT;
use crate::context::Context;
use crate::error::{Error, Result};
use chrono::Local;
use cruet::Inflector;
use indexmap::IndexMap;
use log::debug;
use minijinja::{Environment, ErrorKind};
use std::fmt::Write;

/// A rendered template and the relative path it should be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub path: String,
    pub content: String,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a catalogued template.
    ///
    /// # Arguments
    /// * `identifier` - Catalog identifier of the template
    /// * `context` - Variables for rendering; missing ones render empty
    ///
    /// # Returns
    /// * `Result<Rendered>` - Content and output path (identifier minus suffix)
    fn render(&self, identifier: &str, context: &Context) -> Result<Rendered>;

    /// Renders the licence called `licence` (e.g. `MIT`) to `LICENCE`.
    fn render_licence(&self, licence: &str, context: &Context) -> Result<Rendered>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment holding every catalog template
    env: Environment<'static>,
    /// Licence name to template identifier
    licences: IndexMap<String, String>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with every template of `catalog` loaded.
    ///
    /// # Errors
    /// * `Error::AssetError` if a template fails to parse
    pub fn new(catalog: &Catalog) -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_function("now", now);
        env.add_filter("snake_case", snake_case);
        env.add_filter("kebab_case", kebab_case);
        env.add_filter("title_case", title_case);

        for (identifier, source) in catalog.iter() {
            env.add_template_owned(identifier.to_string(), source.to_string()).map_err(|e| {
                Error::AssetError { identifier: identifier.to_string(), source: e }
            })?;
        }

        Ok(Self { env, licences: catalog.map_for_group(Group::Licence) })
    }

    /// Licence names this renderer can produce.
    pub fn licence_names(&self) -> Vec<&str> {
        self.licences.keys().map(String::as_str).collect()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, identifier: &str, context: &Context) -> Result<Rendered> {
        let template = self.env.get_template(identifier).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => {
                Error::TemplateNotFoundError { identifier: identifier.to_string() }
            }
            _ => Error::RenderError(e),
        })?;

        debug!("Rendering '{identifier}'");
        let content = template.render(context)?;
        Ok(Rendered { path: output_path(identifier).to_string(), content })
    }

    fn render_licence(&self, licence: &str, context: &Context) -> Result<Rendered> {
        let identifier =
            self.licences.get(licence).ok_or_else(|| Error::UnknownLicenceError {
                licence: licence.to_string(),
                available: self.licence_names().join(", "),
            })?;
        let rendered = self.render(identifier, context)?;
        Ok(Rendered { path: LICENCE_OUTPUT.to_string(), ..rendered })
    }
}

/// `now(format)`: current local time, `%Y-%m-%d` unless a strftime format is given.
fn now(format: Option<String>) -> std::result::Result<String, minijinja::Error> {
    let format = format.unwrap_or_else(|| "%Y-%m-%d".to_string());
    let mut out = String::new();
    write!(out, "{}", Local::now().format(&format)).map_err(|_| {
        minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("invalid date format '{format}'"),
        )
    })?;
    Ok(out)
}

fn snake_case(value: minijinja::Value) -> String {
    value.to_string().to_snake_case()
}

fn kebab_case(value: minijinja::Value) -> String {
    value.to_string().to_kebab_case()
}

fn title_case(value: minijinja::Value) -> String {
    value.to_string().to_title_case()
}
