use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_source_file_aborts_the_run() {
    let ctx = TestContext::new();
    ctx.write_localized("a.dtd", "<!ENTITY a \"A\">\n");
    let config = ctx.write_config(
        "config",
        "a.dtd:a = a.properties:a\nmissing.dtd:b = a.properties:b\na.dtd:a = later.properties:a\n",
    );

    ctx.migrate(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Source file not found: missing.dtd"));

    assert!(ctx.read_localized("a.properties").contains("a=A"));
    assert!(!ctx.localized("later.properties").exists());
}

#[test]
fn source_path_outside_repository_aborts_the_run() {
    let ctx = TestContext::new();
    let config = ctx.write_config("config", "../../../etc/hosts:a = a.properties:a\n");

    ctx.migrate(&config).assert().failure().stderr(predicate::str::contains("Error:"));

    assert!(!ctx.localized("a.properties").exists());
}
