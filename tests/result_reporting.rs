// tests/result_reporting.rs

//! The `RunResult` surface: success, output splitting into lines, dry-run
//! synthesis.

use shellstack::result::RunResult;

#[test]
fn failed_real_result() {
    let result = RunResult::new("test -f /path/to/file", 1, "This is the\noutput");

    assert_eq!(result.command_line, "test -f /path/to/file");
    assert_eq!(result.exit_code, 1);
    assert!(!result.was_successful());
    assert_eq!(result.output, "This is the\noutput");
    assert_eq!(result.output_lines(), ["This is the", "output"]);
    assert!(!result.dry_run);
}

#[test]
fn successful_real_result() {
    let result = RunResult::new("true", 0, "");

    assert!(result.was_successful());
    assert!(!result.dry_run);
}

#[test]
fn dry_run_result_is_a_synthetic_success() {
    let result = RunResult::dry_run("test -f /path/to/file");

    assert_eq!(result.command_line, "test -f /path/to/file");
    assert_eq!(result.exit_code, RunResult::EXIT_OK);
    assert!(result.was_successful());
    assert!(result.dry_run);
    assert_eq!(
        result.output,
        "Dryrun: test -f /path/to/file would have been executed."
    );
}
