use repodoc::catalog::{output_path, Catalog};
use repodoc::context::{Context, Value};
use repodoc::error::Error;
use repodoc::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn builtin_renderer() -> (Catalog, MiniJinjaRenderer) {
    let catalog = Catalog::builtin().unwrap();
    let renderer = MiniJinjaRenderer::new(&catalog).unwrap();
    (catalog, renderer)
}

#[test]
fn test_output_path_for_every_template() {
    let (catalog, renderer) = builtin_renderer();
    let context = Context::defaults(&catalog).unwrap();

    for identifier in catalog.list_templates() {
        let rendered = renderer.render(identifier, &context).unwrap();
        assert_eq!(rendered.path, output_path(identifier));
        assert_eq!(format!("{}.j2", rendered.path), identifier);
    }
}

#[test]
fn test_every_template_renders_with_empty_context() {
    let (catalog, renderer) = builtin_renderer();
    let context = Context::new();
    for identifier in catalog.list_templates() {
        assert!(renderer.render(identifier, &context).is_ok(), "{identifier}");
    }
}

#[test]
fn test_missing_variable_renders_empty() {
    let catalog =
        Catalog::from_sources([("docs/index.rst.j2", "Project [{{ program_name }}] v{{ version }}")])
            .unwrap();
    let renderer = MiniJinjaRenderer::new(&catalog).unwrap();

    let mut context = Context::new();
    context.insert("version", "1.0");
    let rendered = renderer.render("docs/index.rst.j2", &context).unwrap();
    assert_eq!(rendered.content, "Project [] v1.0");
}

#[test]
fn test_defaults_then_render() {
    let catalog = Catalog::from_sources([(
        "docs/index.rst.j2",
        "Welcome to {{ program_name }} ({{ version }})\n",
    )])
    .unwrap();
    let context = Context::defaults(&catalog).unwrap();
    assert_eq!(context.keys().collect::<Vec<_>>(), vec!["program_name", "version"]);

    let renderer = MiniJinjaRenderer::new(&catalog).unwrap();
    let rendered = renderer.render("docs/index.rst.j2", &context).unwrap();
    assert_eq!(rendered.path, "docs/index.rst");
    assert_eq!(rendered.content, "Welcome to  ()\n");
}

#[test]
fn test_defaults_keep_builtin_globals_callable() {
    let catalog = Catalog::from_sources([(
        "docs/index.rst.j2",
        "{% for i in range(2) %}{{ i }}{% endfor %}\
         {% set ns = namespace(a=1) %}{{ ns.a }}{{ program_name }}",
    )])
    .unwrap();
    let context = Context::defaults(&catalog).unwrap();
    assert_eq!(context.keys().collect::<Vec<_>>(), vec!["program_name"]);

    let renderer = MiniJinjaRenderer::new(&catalog).unwrap();
    let rendered = renderer.render("docs/index.rst.j2", &Context::new()).unwrap();
    assert_eq!(rendered.content, "011");
    let rendered = renderer.render("docs/index.rst.j2", &context).unwrap();
    assert_eq!(rendered.content, "011");
}

#[test]
fn test_render_licence() {
    let (_, renderer) = builtin_renderer();
    let context = Context::from_pairs(&["author_name", "program_name"], vec!["Jane Doe", "tool"]);

    let rendered = renderer.render_licence("MIT", &context).unwrap();
    assert_eq!(rendered.path, "LICENCE");
    assert!(rendered.content.starts_with("MIT License\n"));
    assert!(rendered.content.contains("Jane Doe"));
    assert!(rendered.content.contains("of tool and associated"));

    let rendered = renderer.render_licence("ISC", &context).unwrap();
    assert_eq!(rendered.path, "LICENCE");
    assert!(rendered.content.starts_with("ISC License\n"));
}

#[test]
fn test_render_unknown_licence() {
    let (_, renderer) = builtin_renderer();
    match renderer.render_licence("WTFPL", &Context::new()) {
        Err(Error::UnknownLicenceError { licence, available }) => {
            assert_eq!(licence, "WTFPL");
            assert!(available.contains("MIT"));
        }
        other => panic!("Expected UnknownLicenceError, got {other:?}"),
    }
}

#[test]
fn test_licence_names() {
    let (_, renderer) = builtin_renderer();
    assert_eq!(renderer.licence_names(), vec!["BSD-3-Clause", "ISC", "MIT", "Unlicense"]);
}

#[test]
fn test_render_lists() {
    let (_, renderer) = builtin_renderer();
    let mut context = Context::new();
    context.insert("install_requires", vec!["requests".to_string(), "pyyaml".to_string()]);
    context.insert("console_scripts", vec!["tool=tool.cli:main".to_string()]);

    let rendered = renderer.render("setup.cfg.j2", &context).unwrap();
    assert_eq!(rendered.path, "setup.cfg");
    assert!(rendered.content.contains("install_requires =\n    requests\n    pyyaml\n"));
    assert!(rendered.content.contains("console_scripts =\n    tool=tool.cli:main\n"));
}

#[test]
fn test_render_bool_and_filters() {
    let (_, renderer) = builtin_renderer();
    let mut context = Context::new();
    context.insert("repo_name", "my_repo");
    context.insert("author_username", "jdoe");
    context.insert("readthedocs", Value::Bool(true));

    let rendered = renderer.render("README.md.j2", &context).unwrap();
    assert!(rendered.content.starts_with("# my_repo\n"));
    assert!(rendered.content.contains("https://my-repo.readthedocs.io/en/latest/"));

    context.insert("readthedocs", false);
    let rendered = renderer.render("README.md.j2", &context).unwrap();
    assert!(!rendered.content.contains("readthedocs"));
}

#[test]
fn test_render_unknown_template() {
    let (_, renderer) = builtin_renderer();
    assert!(matches!(
        renderer.render("CHANGELOG.md.j2", &Context::new()),
        Err(Error::TemplateNotFoundError { .. })
    ));
}

#[test]
fn test_invalid_template_in_catalog() {
    let catalog = Catalog::from_sources([("README.md.j2", "{{ broken ")]).unwrap();
    match MiniJinjaRenderer::new(&catalog) {
        Err(Error::AssetError { identifier, .. }) => assert_eq!(identifier, "README.md.j2"),
        Err(other) => panic!("Expected AssetError, got {other:?}"),
        Ok(_) => panic!("Expected AssetError"),
    }
}
