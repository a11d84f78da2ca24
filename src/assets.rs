//! Built-in template sources, embedded at compile time.

macro_rules! template {
    ($name:literal) => {
        ($name, include_str!(concat!("../templates/", $name)))
    };
}

/// Every built-in template as `(identifier, source)`.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    template!(".gitattributes.j2"),
    template!(".github/CODE_OF_CONDUCT.md.j2"),
    template!(".github/CONTRIBUTING.rst.j2"),
    template!(".github/FUNDING.yml.j2"),
    template!(".github/ISSUE_TEMPLATE/bug_report.md.j2"),
    template!(".github/ISSUE_TEMPLATE/config.yml.j2"),
    template!(".github/ISSUE_TEMPLATE/feature_request.md.j2"),
    template!(".github/PULL_REQUEST_TEMPLATE.md.j2"),
    template!(".github/SECURITY.md.j2"),
    template!(".github/SUPPORT.md.j2"),
    template!(".gitignore.j2"),
    template!(".mailmap.j2"),
    template!("MANIFEST.in.j2"),
    template!("README.md.j2"),
    template!("docs/Makefile.j2"),
    template!("docs/api.rst.j2"),
    template!("docs/conf.py.j2"),
    template!("docs/contents.rst.j2"),
    template!("docs/index.rst.j2"),
    template!("docs/make.bat.j2"),
    template!("docs/requirements.txt.j2"),
    template!("licences/BSD-3-Clause.j2"),
    template!("licences/ISC.j2"),
    template!("licences/MIT.j2"),
    template!("licences/Unlicense.j2"),
    template!("readthedocs.yml.j2"),
    template!("setup.cfg.j2"),
    template!("setup.py.j2"),
];
