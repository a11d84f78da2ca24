//! Common constants used throughout the repodoc application.

/// Suffix every template identifier carries; the output path is the identifier without it.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Default name of the persisted configuration file
pub const DEFAULT_CONFIG_FILE: &str = "repodoc_config.yml";

/// Output file name of a rendered licence, whichever licence text was chosen
pub const LICENCE_OUTPUT: &str = "LICENCE";

pub const LICENCE_PREFIX: &str = "licences/";
pub const DOCS_PREFIX: &str = "docs/";
pub const COMMUNITY_HEALTH_PREFIX: &str = ".github/";

/// Root-level documentation template that is not under the docs prefix
pub const READTHEDOCS_TEMPLATE: &str = "readthedocs.yml.j2";

/// Packaging templates, listed explicitly rather than derived by prefix
pub const PACKAGING_TEMPLATES: [&str; 3] = ["MANIFEST.in.j2", "setup.cfg.j2", "setup.py.j2"];

pub const README_TEMPLATE: &str = "README.md.j2";

/// Variables holding ordered lists (comma separated on the command line)
pub const LIST_VARIABLES: [&str; 2] = ["install_requires", "console_scripts"];

/// Variables holding booleans
pub const BOOL_VARIABLES: [&str; 1] = ["readthedocs"];

/// Globals of the rendering environment: `now` plus MiniJinja's built-in
/// functions. Templates call them, but they are never context variables, so a
/// template cannot use these names for its own variables.
pub const TEMPLATE_GLOBALS: [&str; 8] =
    ["now", "range", "dict", "namespace", "debug", "cycler", "joiner", "lipsum"];
