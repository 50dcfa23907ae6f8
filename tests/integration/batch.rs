use std::fs;

use pytoc::driver::{run_batch, ParseBackend, TranslateBackend};
use pytoc::util::config::Config;
use tempfile::tempdir;

#[test]
fn test_translate_file_to_outfile() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.py");
    let output = dir.path().join("prog.c");
    fs::write(&input, "x = 2\nprint(x * 3)\n").unwrap();

    run_batch(&mut TranslateBackend::default(), &input, Some(&output)).unwrap();

    let c = fs::read_to_string(&output).unwrap();
    assert!(c.starts_with("#include <stdio.h>\n"));
    assert!(c.contains("    x = 2;\n    printf(\"%ld\\n\", (long)((x * 3)));\n"));
}

#[test]
fn test_parse_file_to_outfile() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.py");
    let output = dir.path().join("tree.txt");
    fs::write(&input, "print()\n").unwrap();

    let mut backend = ParseBackend::new(&Config::default(), false);
    run_batch(&mut backend, &input, Some(&output)).unwrap();

    let tree = fs::read_to_string(&output).unwrap();
    assert!(tree.starts_with("Interior `file` with `1` children\n"));
    assert!(tree.contains("Identifier: `print`"));
}

#[test]
fn test_syntax_error_fails_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.py");
    let output = dir.path().join("bad.c");
    fs::write(&input, "if 1\n    x = 1\n").unwrap();

    let err = run_batch(&mut TranslateBackend::default(), &input, Some(&output)).unwrap_err();
    assert!(err.to_string().starts_with("could not process"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("nope.py");
    let err = run_batch(&mut TranslateBackend::default(), &input, None).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}

#[test]
fn test_translate_file_helper() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("prog.py");
    fs::write(&input, "y = 1").unwrap();
    let c = pytoc::translate_file(&input).unwrap();
    assert!(c.contains("value_t __pytoc_unused, y;"));
}
