use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANUSCRIPT: &str = "# HEAD\nThe Lamp\nLamp\nMara Quill\n## Arrival\nThe boat put in at dawn.\n";

fn md2smf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("md2smf").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_manuscript_from_stdin() {
    let dir = TempDir::new().unwrap();
    md2smf(&dir)
        .write_stdin(MANUSCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r"{\rtf1"))
        .stdout(predicate::str::contains("Quill / Lamp / "))
        .stdout(predicate::str::contains(r"{Your Name \tab about 0 words \par}"))
        .stdout(predicate::str::contains(r"{Chapter 1 \par}"));
}

#[test]
fn flags_switch_on_names_and_monospace() {
    let dir = TempDir::new().unwrap();
    md2smf(&dir)
        .args(["-m", "-c"])
        .write_stdin(MANUSCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r"{Chapter 1: Arrival \par}"))
        .stdout(predicate::str::contains(r"\hich\f3"));
}

#[test]
fn word_count_mode_prints_report() {
    let dir = TempDir::new().unwrap();
    md2smf(&dir)
        .arg("-w")
        .write_stdin("# HEAD\nT\nS\nA\n> TODO: fix ending\nOne two three.\n")
        .assert()
        .success()
        .stdout("Word count: 6\nRemaining to-dos: 1\n");
}

#[test]
fn missing_sentinel_exits_with_manuscript_code() {
    let dir = TempDir::new().unwrap();
    md2smf(&dir)
        .write_stdin("The Lamp\nLamp\nMara Quill\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "first line of document must be '# HEAD', not 'The Lamp'",
        ));
}

#[test]
fn missing_head_file_exits_with_io_code() {
    let dir = TempDir::new().unwrap();
    md2smf(&dir)
        .args(["-f", "absent.txt"])
        .write_stdin(MANUSCRIPT)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unable to read head file"));
}

#[test]
fn head_file_replaces_placeholder() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("head.txt"), "Mara Quill\n12 Harbour Rd\n").unwrap();

    md2smf(&dir)
        .args(["--head-file", "head.txt"])
        .write_stdin(MANUSCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains(r"{Mara Quill \tab about 0 words \par}"))
        .stdout(predicate::str::contains(r"{12 Harbour Rd \par}"))
        .stdout(predicate::str::contains("Your Name").not());
}
