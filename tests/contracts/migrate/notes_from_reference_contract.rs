use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn reference_notes_are_copied_from_directory() {
    let ctx = TestContext::new();
    ctx.write_localized("toolbox.dtd", "<!ENTITY toolbox.title \"Outils\">\n<!ENTITY options \"Options\">\n");
    ctx.write_localized(
        "reference/toolbox.properties",
        "# LOCALIZATION NOTE (toolbox.title): Title of the toolbox window.\ntoolbox.title=Developer Tools\n",
    );
    let config = ctx.write_config(
        "config",
        "toolbox.dtd:toolbox.title = toolbox.properties:toolbox.title\ntoolbox.dtd:options = toolbox.properties:options\n",
    );

    ctx.migrate(&config)
        .arg("--notes-from")
        .arg("devtools/client/reference")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes: reading reference notes from"));

    let content = ctx.read_localized("toolbox.properties");
    assert!(content.contains(
        "\n# LOCALIZATION NOTE (toolbox.title): Title of the toolbox window.\ntoolbox.title=Outils\n"
    ));
    assert!(content.contains("\n# LOCALIZATION NOTE (options): LOCALIZATION NOTE MISSING\noptions=Options\n"));
}

#[test]
fn reference_notes_are_fetched_over_http() {
    let ctx = TestContext::new();
    ctx.write_localized("toolbox.dtd", "<!ENTITY toolbox.title \"Outils\">\n");
    let config =
        ctx.write_config("config", "toolbox.dtd:toolbox.title = toolbox.properties:toolbox.title\n");

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/en-US/toolbox.properties")
        .with_status(200)
        .with_body("# LOCALIZATION NOTE (toolbox.title): Remote note.\ntoolbox.title=Developer Tools\n")
        .expect(1)
        .create();

    ctx.migrate(&config)
        .arg("--notes-from")
        .arg(format!("{}/en-US", server.url()))
        .assert()
        .success();

    mock.assert();
    assert!(ctx
        .read_localized("toolbox.properties")
        .contains("# LOCALIZATION NOTE (toolbox.title): Remote note.\ntoolbox.title=Outils\n"));
}

#[test]
fn unreachable_reference_falls_back_to_default_note() {
    let ctx = TestContext::new();
    ctx.write_localized("a.dtd", "<!ENTITY a \"A\">\n");
    let config = ctx.write_config("config", "a.dtd:a = a.properties:a\n");

    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/en-US/a.properties").with_status(500).create();

    ctx.migrate(&config)
        .arg("--notes-from")
        .arg(format!("{}/en-US/", server.url()))
        .assert()
        .success()
        .stderr(predicate::str::contains("using default note for a.properties"));

    assert!(ctx
        .read_localized("a.properties")
        .contains("# LOCALIZATION NOTE (a): LOCALIZATION NOTE MISSING\na=A\n"));
}
