#![allow(missing_docs)]
#![allow(unused_results)]
#![allow(unused_crate_dependencies)]
#![allow(clippy::pedantic)]

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn test_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

fn cmd() -> Command {
    Command::cargo_bin("yaraparser").unwrap()
}

#[test]
fn test_no_arguments() {
    cmd().assert().failure();
}

#[test]
fn test_invalid_path() {
    cmd()
        .arg("do_not_exist")
        .assert()
        .stdout("")
        .stderr(predicate::str::contains(
            "Cannot read rules file do_not_exist: ",
        ))
        .code(1);

    // A read failure aborts before the following files.
    let rule_file = test_file(b"rule a {}");
    cmd()
        .arg("do_not_exist")
        .arg(rule_file.path())
        .assert()
        .stdout("")
        .code(1);
}

#[test]
fn test_parse_file() {
    let rule_file = test_file(
        br#"
// Detects foo
rule my_rule : tag1 tag2 {
    meta:
        author = "me"
        date = "2024"
    strings:
        $b = "bar"
        $a = "foo"
    conditions:
        all of them
}"#,
    );

    cmd()
        .arg(rule_file.path())
        .assert()
        .stdout(
            "rule my_rule : tag1 tag2\n    \
             meta author = \"me\"\n    \
             meta date = \"2024\"\n    \
             string $a = \"foo\"\n    \
             string $b = \"bar\"\n",
        )
        .stderr("")
        .success();
}

#[test]
fn test_parse_multiple_files() {
    let file1 = test_file(b"rule first {}");
    let file2 = test_file(br#"rule second { meta: a = "b" }"#);

    cmd()
        .arg(file1.path())
        .arg(file2.path())
        .assert()
        .stdout("rule first\nrule second\n    meta a = \"b\"\n")
        .success();
}

#[test]
fn test_parse_error() {
    let bad = test_file(b"rule foo : {}");
    let good = test_file(b"rule good {}");

    // The diagnostic is printed, and the next file is still parsed.
    cmd()
        .arg(bad.path())
        .arg(good.path())
        .assert()
        .stdout("rule good\n")
        .stderr(
            predicate::str::contains("error: invalid tag name")
                .and(predicate::str::contains("at least one tag must follow ':'")),
        )
        .code(2);

    let truncated = test_file(br#"rule foo { meta: author = "me""#);
    cmd()
        .arg(truncated.path())
        .assert()
        .stdout("")
        .stderr(predicate::str::contains("error: found EOF, expecting '}'"))
        .code(2);
}

#[test]
fn test_no_condition_skip() {
    let rule_file = test_file(b"rule a { conditions: all of them }");

    cmd().arg(rule_file.path()).assert().stdout("rule a\n").success();

    cmd()
        .arg("--no-condition-skip")
        .arg(rule_file.path())
        .assert()
        .stdout("")
        .stderr(predicate::str::contains(
            r#"error: found "all", expecting a section name"#,
        ))
        .code(2);
}

#[test]
fn test_tokens() {
    let rule_file = test_file(b"rule a { $b }");

    cmd()
        .arg("--tokens")
        .arg(rule_file.path())
        .assert()
        .stdout(
            r#"rule "rule"
whitespace " "
identifier "a"
whitespace " "
open brace "{"
whitespace " "
variable identifier "$b"
whitespace " "
close brace "}"
EOF ""
"#,
        )
        .success();

    // Tokens are printed even if the file is not a valid rule.
    let rule_file = test_file(b"#");
    cmd()
        .arg("-t")
        .arg(rule_file.path())
        .assert()
        .stdout("illegal \"#\"\nEOF \"\"\n")
        .success();
}
