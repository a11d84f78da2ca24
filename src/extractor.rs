//! Static variable extraction.
//! Parses a template without rendering it and collects the names it reads from
//! the context.

use crate::catalog::Catalog;
use crate::constants::TEMPLATE_GLOBALS;
use crate::error::{Error, Result};
use minijinja::Environment;
use std::collections::BTreeSet;

/// Returns the free variables of a template source.
///
/// Names bound inside the template (loop targets, `set`, macro arguments) are not
/// reported, neither are the globals of the rendering environment
/// (`TEMPLATE_GLOBALS`).
///
/// # Errors
/// * `Error::AssetError` if the source is not a valid template
pub fn extract_variables(source: &str) -> Result<BTreeSet<String>> {
    extract_named("<source>", source)
}

fn extract_named(identifier: &str, source: &str) -> Result<BTreeSet<String>> {
    let env = Environment::new();
    let template = env.template_from_str(source).map_err(|e| Error::AssetError {
        identifier: identifier.to_string(),
        source: e,
    })?;

    Ok(template
        .undeclared_variables(false)
        .into_iter()
        .filter(|name| !TEMPLATE_GLOBALS.contains(&name.as_str()))
        .collect())
}

/// Variables of one catalogued template.
pub fn template_variables(catalog: &Catalog, identifier: &str) -> Result<BTreeSet<String>> {
    extract_named(identifier, catalog.source(identifier)?)
}

/// Union of the variables of several templates.
pub fn variables_for<'a, I>(catalog: &Catalog, identifiers: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut variables = BTreeSet::new();
    for identifier in identifiers {
        variables.extend(template_variables(catalog, identifier)?);
    }
    Ok(variables)
}

/// Union of the variables of every template in the catalog.
pub fn all_variables(catalog: &Catalog) -> Result<BTreeSet<String>> {
    variables_for(catalog, catalog.list_templates())
}
