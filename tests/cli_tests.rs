//! CLI integration tests using the REAL txnpack binary

mod common;

use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::txnpack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root"))
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--disable-large-txn-ops"));
}

#[test]
fn test_version_output() {
    common::txnpack_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("txnpack"));
}

#[test]
fn test_out_dir_is_required() {
    common::txnpack_cmd()
        .args(["--root", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--out-dir"));
}

#[test]
fn test_list_prints_file_names_and_writes_nothing() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", b"\x01\x02\x03");

    common::txnpack_cmd()
        .arg("--out-dir")
        .arg(&root.out)
        .arg("--list")
        .assert()
        .success()
        .stdout("transaction.rs\nall_txn_pkg.rs\n");

    assert!(!root.out.exists());
}

#[test]
fn test_generate_reports_status() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[7u8; 2048]);
    root.write_txn("opA/params.json", b"{\"m\": 64}");

    root.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Embedded 2 transaction(s), 1 indexed"))
        .stdout(predicate::str::contains("Declarations generated:"))
        .stdout(predicate::str::contains("Definitions generated:"))
        .stdout(predicate::str::contains("created"));

    assert!(root.output_exists("transaction.rs"));
    assert!(root.output_exists("all_txn_pkg.rs"));
}

#[test]
fn test_quiet_prints_nothing() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[7u8; 64]);

    root.cmd().arg("--quiet").assert().success().stdout("");
    assert!(root.output_exists("transaction.rs"));
}

#[test]
fn test_verbose_prints_each_resource() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[7u8; 64]);
    root.write_txn("opB/weights.bin", &[8u8; 64]);

    root.cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("opA_weights 64 ->"))
        .stdout(predicate::str::contains("opB_weights 64 ->"));
}

#[test]
fn test_root_from_env() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[1u8; 16]);

    common::txnpack_cmd()
        .env("DD_ROOT", &root.root)
        .arg("--out-dir")
        .arg(&root.out)
        .arg("--quiet")
        .assert()
        .success();

    assert!(root.read_output("transaction.rs").contains("pub fn get_opa_weights()"));
}

#[test]
fn test_missing_root_argument() {
    let root = common::TestRoot::new();

    common::txnpack_cmd()
        .arg("--out-dir")
        .arg(&root.out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid configuration"))
        .stderr(predicate::str::contains("DD_ROOT"));
}

#[test]
fn test_nonexistent_root() {
    let root = common::TestRoot::new();

    common::txnpack_cmd()
        .arg("--root")
        .arg(root.temp.path().join("missing"))
        .arg("--out-dir")
        .arg(&root.out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Transaction root not found"));

    assert!(!root.out.exists());
}

#[test]
fn test_invalid_encoding_value() {
    let root = common::TestRoot::new();
    root.cmd()
        .args(["--encoding", "base64"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("byte-array"));
}

#[test]
fn test_zero_chunk_limit() {
    let root = common::TestRoot::new();
    root.cmd()
        .args(["--chunk-limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_limit must be greater than zero"));
}

#[test]
fn test_config_file_is_applied() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[1u8; 16]);
    root.write_txn("opA/meta.json", b"{}");
    let config = root.write_file(
        "txnpack.yaml",
        "index_exclusions: [meta]\nencoding: escaped-text\n",
    );

    root.cmd()
        .arg("--config")
        .arg(&config)
        .arg("--quiet")
        .assert()
        .success();

    let decls = root.read_output("transaction.rs");
    assert!(decls.contains("static REGISTRY_INDEX: [&str; 1] = [\n    \"opA_weights\",\n];"));
    assert!(root.read_output("all_txn_pkg.rs").contains("b\"\\x78"));
}

#[test]
fn test_broken_config_file() {
    let root = common::TestRoot::new();
    let config = root.write_file("txnpack.yaml", "chunk_size: 10\n");

    root.cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_escaped_text_chunk_limit_below_one_escape() {
    let root = common::TestRoot::new();
    root.write_txn("opA/weights.bin", &[1u8; 16]);

    root.cmd()
        .args(["--encoding", "escaped-text", "--chunk-limit", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "chunk_limit must be at least 4 with escaped-text encoding",
        ));

    assert!(!root.out.exists());
}
