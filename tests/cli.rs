use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

#[test]
fn convert_to_html_via_cli() {
    let file = source_file("# Title [t]\nHello");
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG").arg(file.path());

    let output_pred = predicate::str::starts_with("<article id=\"t\" class=\"\">")
        .and(predicate::str::contains("        <p id=\"\" class=\"\">Hello</p>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn indent_override() {
    let file = source_file("# Title\nHello");
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG")
        .arg(file.path())
        .arg("--indent")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\n  <p id=\"\" class=\"\">Hello</p>"));
}

#[test]
fn config_file_changes_file_icon() {
    let file = source_file("# T\n{a.txt}[A file](files/a.txt)");
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[file_upload]\nicon_src = \"icons/doc.svg\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG")
        .arg(file.path())
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("src=\"icons/doc.svg\""));
}

#[test]
fn tokens_json_format() {
    let file = source_file("# Title\n- item");
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG")
        .arg(file.path())
        .arg("--format")
        .arg("tokens-json");

    cmd.assert().success().stdout(
        predicate::str::contains("\"kind\": \"header\"")
            .and(predicate::str::contains("\"kind\": \"list-entry\"")),
    );
}

#[test]
fn invalid_direction_is_reported_on_stderr() {
    let file = source_file("# T\n{ [u-d]");
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("class=\"content-container\""))
        .stderr(predicate::str::contains("Defined direction is invalid; input: u-d"));
}

#[test]
fn deeply_nested_input_converts() {
    let file = source_file(&format!("# T\n{}", "{\n".repeat(100_000)));
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.env_remove("RUST_LOG")
        .arg(file.path())
        .arg("--indent")
        .arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("</div>\n</section>\n</article>\n"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("html")
            .and(predicate::str::contains("tokens-json"))
            .and(predicate::str::contains("ast-json")),
    );
}

#[test]
fn unknown_format_fails() {
    let file = source_file("# T");
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.arg(file.path()).arg("--format").arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format 'xml'"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("folio");
    cmd.arg("/no/such/file.folio");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
