use repodoc::catalog::Catalog;
use repodoc::context::{Context, Value};

#[test]
fn test_from_pairs() {
    let context = Context::from_pairs(
        &["author_name", "program_name"],
        vec!["Jane Doe", "tool"],
    );
    assert_eq!(context.len(), 2);
    assert_eq!(context.get("author_name"), Some(&Value::from("Jane Doe")));
    assert_eq!(context.get("program_name"), Some(&Value::from("tool")));
}

#[test_log::test]
fn test_from_pairs_truncates_on_mismatch() {
    let context = Context::from_pairs(&["a", "b", "c"], vec!["1", "2"]);
    assert_eq!(context.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    let context = Context::from_pairs(&["a"], vec!["1", "2", "3"]);
    assert_eq!(context.len(), 1);
    assert_eq!(context.get("a"), Some(&Value::from("1")));
}

#[test]
fn test_defaults_are_typed() {
    let catalog = Catalog::builtin().unwrap();
    let context = Context::defaults(&catalog).unwrap();

    assert_eq!(context.get("readthedocs"), Some(&Value::Bool(false)));
    assert_eq!(context.get("install_requires"), Some(&Value::List(vec![])));
    assert_eq!(context.get("console_scripts"), Some(&Value::List(vec![])));
    assert_eq!(context.get("program_name"), Some(&Value::from("")));
    assert!(!context.contains("now"));
}

#[test]
fn test_defaults_cover_every_template_and_are_sorted() {
    let catalog = Catalog::builtin().unwrap();
    let context = Context::defaults(&catalog).unwrap();
    let keys: Vec<&str> = context.keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(keys.len(), 12);
}

#[test]
fn test_defaults_are_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(Context::defaults(&catalog).unwrap(), Context::defaults(&catalog).unwrap());
}

#[test]
fn test_defaults_of_empty_catalog() {
    let catalog = Catalog::from_sources(Vec::<(String, String)>::new()).unwrap();
    assert!(Context::defaults(&catalog).unwrap().is_empty());
}

#[test]
fn test_context_serializes_as_mapping() {
    let mut context = Context::new();
    context.insert("program_name", "tool");
    context.insert("readthedocs", true);
    context.insert("install_requires", vec!["a".to_string(), "b".to_string()]);

    let yaml = serde_yaml::to_string(&context).unwrap();
    assert_eq!(yaml, "program_name: tool\nreadthedocs: true\ninstall_requires:\n- a\n- b\n");
}
