//! Template catalog: the read-only set of templates repodoc can generate.
//! Identifiers are relative, `/` separated paths ending in `.j2`, classified
//! into groups by their path.

use crate::assets::BUILTIN_TEMPLATES;
use crate::constants::{
    COMMUNITY_HEALTH_PREFIX, DOCS_PREFIX, LICENCE_PREFIX, PACKAGING_TEMPLATES,
    READTHEDOCS_TEMPLATE, TEMPLATE_SUFFIX,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

/// Classification bucket used to generate related outputs together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Licence,
    Documentation,
    CommunityHealth,
    Packaging,
    Dotfile,
    RootMisc,
}

impl Group {
    pub const ALL: [Group; 6] = [
        Group::Licence,
        Group::Documentation,
        Group::CommunityHealth,
        Group::Packaging,
        Group::Dotfile,
        Group::RootMisc,
    ];
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Group::Licence => "licences",
            Group::Documentation => "documentation",
            Group::CommunityHealth => "community health",
            Group::Packaging => "packaging",
            Group::Dotfile => "dotfiles",
            Group::RootMisc => "misc",
        };
        write!(f, "{name}")
    }
}

/// Classifies a template identifier. Identifiers matching no rule land in
/// [`Group::RootMisc`].
pub fn group_of(identifier: &str) -> Group {
    if identifier.starts_with(LICENCE_PREFIX) {
        Group::Licence
    } else if identifier.starts_with(DOCS_PREFIX) || identifier == READTHEDOCS_TEMPLATE {
        Group::Documentation
    } else if identifier.starts_with(COMMUNITY_HEALTH_PREFIX) {
        Group::CommunityHealth
    } else if PACKAGING_TEMPLATES.contains(&identifier) {
        Group::Packaging
    } else if !identifier.contains('/') && identifier.starts_with('.') {
        Group::Dotfile
    } else {
        Group::RootMisc
    }
}

/// Output path of a template: its identifier without the template suffix.
pub fn output_path(identifier: &str) -> &str {
    identifier.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(identifier)
}

/// Last path component of the output path, e.g. `bug_report.md` for
/// `.github/ISSUE_TEMPLATE/bug_report.md.j2`.
pub fn base_name(identifier: &str) -> &str {
    let output = output_path(identifier);
    output.rsplit('/').next().unwrap_or(output)
}

/// Immutable, sorted collection of template sources keyed by identifier.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: IndexMap<String, String>,
}

impl Catalog {
    /// Builds the catalog from the templates embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_sources(BUILTIN_TEMPLATES.iter().copied())
    }

    /// Builds a catalog from `(identifier, source)` pairs.
    ///
    /// # Errors
    /// * `Error::CatalogError` if an identifier is repeated or two templates of
    ///   one group resolve to the same output path
    pub fn from_sources<I, K, V>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut templates = IndexMap::new();
        for (identifier, source) in sources {
            let identifier = identifier.into().replace('\\', "/");
            if templates.insert(identifier.clone(), source.into()).is_some() {
                return Err(Error::CatalogError(format!(
                    "template '{identifier}' is defined twice"
                )));
            }
        }
        templates.sort_keys();

        let mut outputs = HashSet::new();
        for identifier in templates.keys() {
            let output = output_path(identifier);
            if !outputs.insert((group_of(identifier), output)) {
                return Err(Error::CatalogError(format!(
                    "more than one template in the {} group writes '{output}'",
                    group_of(identifier)
                )));
            }
        }

        debug!("Catalog built with {} templates.", templates.len());
        Ok(Self { templates })
    }

    /// Loads every `*.j2` file below `template_dir`.
    pub fn from_dir<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        if !template_dir.is_dir() {
            return Err(Error::CatalogError(format!(
                "template directory '{}' does not exist",
                template_dir.display()
            )));
        }

        let mut sources = Vec::new();
        for entry in WalkDir::new(template_dir).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || !path.to_string_lossy().ends_with(TEMPLATE_SUFFIX)
            {
                continue;
            }
            let relative = path
                .strip_prefix(template_dir)
                .map_err(|e| Error::CatalogError(e.to_string()))?;
            let identifier = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            debug!("Loading template '{}' from {}", identifier, path.display());
            sources.push((identifier, std::fs::read_to_string(path)?));
        }

        Self::from_sources(sources)
    }

    /// All identifiers, sorted.
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates.iter().map(|(id, source)| (id.as_str(), source.as_str()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.templates.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Raw source of a template.
    pub fn source(&self, identifier: &str) -> Result<&str> {
        self.templates
            .get(identifier)
            .map(String::as_str)
            .ok_or_else(|| Error::TemplateNotFoundError { identifier: identifier.to_string() })
    }

    /// Accepts a template name with or without the template suffix.
    pub fn resolve(&self, name: &str) -> Result<&str> {
        let candidates = [name.to_string(), format!("{name}{TEMPLATE_SUFFIX}")];
        candidates
            .iter()
            .find_map(|candidate| self.templates.get_key_value(candidate.as_str()))
            .map(|(identifier, _)| identifier.as_str())
            .ok_or_else(|| Error::TemplateNotFoundError { identifier: name.to_string() })
    }

    /// Identifiers of one group, in catalog order.
    pub fn templates_in(&self, group: Group) -> Vec<&str> {
        self.templates
            .keys()
            .map(String::as_str)
            .filter(|identifier| group_of(identifier) == group)
            .collect()
    }

    /// Maps base names to identifiers for one group.
    pub fn map_for_group(&self, group: Group) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for identifier in self.templates_in(group) {
            let name = base_name(identifier).to_string();
            if let Some(previous) = map.insert(name.clone(), identifier.to_string()) {
                warn!("'{previous}' and '{identifier}' share the name '{name}', using the latter");
            }
        }
        map
    }
}
