use repodoc::error::Error;
use repodoc::renderer::Rendered;
use repodoc::writer::{prepare_destination, write_rendered};
use std::fs;
use tempfile::TempDir;

fn rendered(path: &str, content: &str) -> Rendered {
    Rendered { path: path.to_string(), content: content.to_string() }
}

#[test]
fn test_prepare_destination_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let dest = prepare_destination(".github/ISSUE_TEMPLATE/config.yml", temp_dir.path()).unwrap();

    assert_eq!(dest, temp_dir.path().join(".github/ISSUE_TEMPLATE/config.yml"));
    assert!(temp_dir.path().join(".github/ISSUE_TEMPLATE").is_dir());
    assert!(!dest.exists());
}

#[test]
fn test_write_rendered() {
    let temp_dir = TempDir::new().unwrap();
    let written = write_rendered(&rendered("docs/conf.py", "project = 'tool'\n"), temp_dir.path())
        .unwrap();

    assert_eq!(written, temp_dir.path().join("docs/conf.py"));
    assert_eq!(fs::read_to_string(written).unwrap(), "project = 'tool'\n");
}

#[test]
fn test_write_rendered_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    write_rendered(&rendered("LICENCE", "old"), temp_dir.path()).unwrap();
    let written = write_rendered(&rendered("LICENCE", "new"), temp_dir.path()).unwrap();

    assert_eq!(fs::read_to_string(written).unwrap(), "new");
}

#[test]
fn test_write_failure_keeps_earlier_outputs() {
    let temp_dir = TempDir::new().unwrap();
    write_rendered(&rendered("README.md", "# tool\n"), temp_dir.path()).unwrap();

    // A regular file where a directory is needed.
    fs::write(temp_dir.path().join("docs"), "not a directory").unwrap();
    let result = write_rendered(&rendered("docs/conf.py", "x"), temp_dir.path());

    assert!(matches!(result, Err(Error::WriteError { .. })));
    assert_eq!(fs::read_to_string(temp_dir.path().join("README.md")).unwrap(), "# tool\n");
}
