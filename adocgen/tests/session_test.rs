//! End-to-end tests driving the adocgen binary with scripted stdin.

use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run the binary in `dir` feeding `input` to stdin, and wait for exit.
fn run_session(dir: &Path, args: &[&str], input: &str) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_adocgen"))
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn adocgen");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("failed to write session script");

    let output = child.wait_with_output().expect("failed to wait for adocgen");
    assert!(
        output.status.success(),
        "adocgen exited with {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_full_session_produces_expected_document() {
    let dir = tempfile::tempdir().unwrap();

    let script = "\
My Project\n\
Jane Doe\n\
y\n\
= 2 Overview\n\
-l first point\n\
-c Build Log\n\
-code sh\n\
cargo build\n\
end-code\n\
end-c\n\
-t\n\
2\n\
Name\n\
Value\n\
alpha\n\
1\n\
n\n\
exit\n";

    run_session(dir.path(), &[], script);

    let written = std::fs::read_to_string(dir.path().join("output.adoc")).unwrap();
    let expected = "\
= My Project\n\
Jane Doe\n\
:doctype: article\n\
:encoding: utf-8\n\
:lang: en\n\
:source-highlighter: highlightjs\n\
:toc: left\n\
:toclevels: 3\n\
\n\
\n\
== Overview\n\
\n\
* first point\n\
\n\
.Build Log\n\
[%collapsible]\n\
====\n\
[source,sh]\n\
----\n\
cargo build\n\
----\n\
\n\
====\n\
\n\
|===\n\
|Name |Value\n\
\n\
|alpha |1\n\
\n\
|===\n\
\n";

    assert_eq!(written, expected);
}

#[test]
fn test_metadata_flags_skip_prompts_and_custom_output() {
    let dir = tempfile::tempdir().unwrap();

    // No metadata lines in the script: the flags supply them.
    let script = "-l only line\nexit\n";
    run_session(
        dir.path(),
        &[
            "--title",
            "Flagged",
            "--author",
            "CLI User",
            "--toc",
            "false",
            "--output",
            "notes.adoc",
        ],
        script,
    );

    let written = std::fs::read_to_string(dir.path().join("notes.adoc")).unwrap();
    assert!(written.starts_with("= Flagged\nCLI User\n"));
    assert!(!written.contains(":toc:"));
    assert!(written.ends_with("* only line\n\n"));
}

#[test]
fn test_config_file_overrides_attributes_and_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("adocgen.toml"),
        "output = \"doc.adoc\"\n\n[attributes]\nlang = \"de\"\ntoclevels = 2\n",
    )
    .unwrap();

    let script = "Titel\nAutor\ny\nexit\n";
    run_session(dir.path(), &[], script);

    let written = std::fs::read_to_string(dir.path().join("doc.adoc")).unwrap();
    assert!(written.contains(":lang: de\n"));
    assert!(written.contains(":toclevels: 2\n"));
    assert!(written.contains(":doctype: article\n"));
}

#[test]
fn test_stream_end_without_exit_still_saves() {
    let dir = tempfile::tempdir().unwrap();

    // Stream ends while a section is open; everything is finalized.
    let script = "T\nA\nn\n-c Open\n-l inside\n";
    run_session(dir.path(), &[], script);

    let written = std::fs::read_to_string(dir.path().join("output.adoc")).unwrap();
    assert!(written.contains(".Open\n[%collapsible]\n====\n* inside\n\n====\n\n"));
}

#[test]
fn test_invalid_commands_do_not_derail_the_session() {
    let dir = tempfile::tempdir().unwrap();

    let script = "T\nA\nn\n= 9 Too Deep\n= x Bad\nnot-a-command\n-l kept\nexit\n";
    run_session(dir.path(), &[], script);

    let written = std::fs::read_to_string(dir.path().join("output.adoc")).unwrap();
    assert!(!written.contains("Too Deep"));
    assert!(!written.contains("Bad"));
    assert!(written.ends_with("* kept\n\n"));
}
