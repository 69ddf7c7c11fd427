use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

const LICENSE_HEADER: &str = "# This Source Code Form is subject to the terms of the Mozilla Public\n";

#[test]
fn migrate_creates_properties_file_with_header_and_note() {
    let ctx = TestContext::new();
    ctx.write_localized("strings.dtd", "<!ENTITY foo \"Hello\">\n");
    let config = ctx.write_config("config", "strings.dtd:foo = strings.properties:foo\n");

    ctx.migrate(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"))
        .stdout(predicate::str::contains("strings.dtd:foo -> strings.properties:foo (new file)"))
        .stdout(predicate::str::contains("Migrated 1 entry"));

    let content = ctx.read_localized("strings.properties");
    assert!(content.starts_with(LICENSE_HEADER));
    assert!(content.ends_with("\n# LOCALIZATION NOTE (foo): LOCALIZATION NOTE MISSING\nfoo=Hello\n"));
}

#[test]
fn migrate_appends_to_existing_properties_file() {
    let ctx = TestContext::new();
    ctx.write_localized("inspector.dtd", "<!ENTITY eyedropper.label \"Grab a color\">\n");
    ctx.write_localized("inspector.properties", "# existing\nmarkupView.more=More\n");
    let config = ctx.write_config(
        "config",
        "inspector.dtd:eyedropper.label = inspector.properties:inspector.eyedropper.label\n",
    );

    ctx.migrate(&config).assert().success();

    ctx.localized_child("inspector.properties").assert(
        "# existing\nmarkupView.more=More\n\n# LOCALIZATION NOTE (inspector.eyedropper.label): LOCALIZATION NOTE MISSING\ninspector.eyedropper.label=Grab a color\n",
    );
}

#[test]
fn migrate_creates_missing_destination_directories() {
    let ctx = TestContext::new();
    ctx.write_localized("locales/en-US/a.dtd", "<!ENTITY a \"A\">\n");
    let config = ctx.write_config("config", "locales/en-US/a.dtd:a = shared/new/a.properties:a\n");

    ctx.migrate(&config).assert().success();

    ctx.localized_child("shared/new/a.properties").assert(predicate::str::contains("a=A"));
}
