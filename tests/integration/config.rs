use std::fs;

use pytoc::driver::{Backend, TranslateBackend};
use pytoc::util::config::{load_config, ConfigError};
use tempfile::tempdir;

#[test]
fn test_config_file_changes_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[codegen]\nindent = \"\\t\"\nplaceholder = \"dummy\"\n\n[repl]\nprompt = \"py> \"\n",
    )
    .unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.repl.prompt, "py> ");
    assert_eq!(config.repl.quit_command, ":q");

    let c = TranslateBackend::new(&config).eval("a = 1\n").unwrap();
    assert!(c.contains("value_t dummy, a;\n"));
    assert!(c.contains("int main(void) {\n\ta = 1;\n\treturn 0;\n}\n"));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempdir().unwrap();
    let err = load_config(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_malformed_config_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[codegen\n").unwrap();
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
