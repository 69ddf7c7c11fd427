use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_entity_is_reported_and_remaining_entries_migrate() {
    let ctx = TestContext::new();
    ctx.write_localized("a.dtd", "<!ENTITY present \"Here\">\n");
    let config = ctx.write_config(
        "config",
        "a.dtd:absent = a.properties:absent\na.dtd:present = a.properties:present\n",
    );

    ctx.migrate(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("a.dtd:absent: entity not found"))
        .stdout(predicate::str::contains("1 failure(s)"));

    let content = ctx.read_localized("a.properties");
    assert!(content.contains("present=Here"));
    assert!(!content.contains("absent="));
}

#[test]
fn malformed_dtd_fails_only_its_entries() {
    let ctx = TestContext::new();
    ctx.write_localized("broken.dtd", "<!ENTITY a \"never closed>\n");
    ctx.write_localized("ok.dtd", "<!ENTITY b \"Fine\">\n");
    let config =
        ctx.write_config("config", "broken.dtd:a = x.properties:a\nok.dtd:b = x.properties:b\n");

    ctx.migrate(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to parse broken.dtd"));

    assert!(ctx.read_localized("x.properties").contains("b=Fine"));
}
