use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn repository_settings_customize_base_dir_and_note() {
    let ctx = TestContext::new();
    fs::write(
        ctx.repo().join("migrate.toml"),
        "[migration]\nbase_dir = \"mobile/android\"\nlicense_header = \"# Custom header\"\nnote_template = \"Migrated from {{ source_file }}:{{ source_key }}\"\n",
    )
    .unwrap();
    fs::create_dir_all(ctx.repo().join("mobile/android")).unwrap();
    fs::write(ctx.repo().join("mobile/android/app.dtd"), "<!ENTITY app.name \"Fennec\">\n").unwrap();
    let config = ctx.write_config("config", "app.dtd:app.name = app.properties:app.name\n");

    ctx.migrate(&config).assert().success();

    let content = fs::read_to_string(ctx.repo().join("mobile/android/app.properties")).unwrap();
    assert_eq!(content, "# Custom header\n\n# Migrated from app.dtd:app.name\napp.name=Fennec\n");
}

#[test]
fn invalid_settings_abort_before_writing() {
    let ctx = TestContext::new();
    ctx.write_localized("a.dtd", "<!ENTITY a \"A\">\n");
    let settings = ctx.write_config("bad.toml", "[notes]\ntimeout_secs = 0\n");
    let config = ctx.write_config("config", "a.dtd:a = a.properties:a\n");

    ctx.migrate(&config)
        .arg("--settings")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs must be greater than 0"));

    assert!(!ctx.localized("a.properties").exists());
}
