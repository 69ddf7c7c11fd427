use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn malformed_mapping_lines_are_skipped_with_a_warning() {
    let ctx = TestContext::new();
    ctx.write_localized("a.dtd", "<!ENTITY a \"A\">\n");
    let config = ctx.write_config(
        "config",
        "# webconsole strings\n\nthis is not a mapping\na.dtd:a = a.properties\na.dtd:a = a.properties:foo bar\na.dtd:a = a.properties:a\n",
    );

    ctx.migrate(&config)
        .assert()
        .success()
        .stderr(predicate::str::contains("config:3"))
        .stderr(predicate::str::contains("config:4"))
        .stderr(predicate::str::contains("config:5"))
        .stdout(predicate::str::contains("1 mapping(s) found"))
        .stdout(predicate::str::contains("3 line(s) skipped"));

    let content = ctx.read_localized("a.properties");
    assert!(content.contains("a=A"));
    assert!(!content.contains("foo bar"));
}
