use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, PARSE_ERROR_FILTER};

#[test]
fn test_short_member_name() -> Result<()> {
    let test = CliTest::with_file(
        "src/format.js",
        r#"/**
 * Formats a string.
 *
 * @function format
 * @param {string} str
 */
function format(str) {
    return str;
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/format.js",
        r#"/**
 * @function Highcharts.format
 */
function format(str) {
    /**
     * @function inner
     */
    function inner() {}
    return inner(str);
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_nested_doclets_are_not_checked() -> Result<()> {
    let test = CliTest::with_file(
        "ts/Core/Chart.ts",
        r#"/**
 * @class
 * @name Highcharts.Chart
 */
class Chart {
    /**
     * @function redraw
     */
    redraw(): void {}
}

/**
 * @typedef {string} Highcharts.DashStyleValue
 */
"#,
    )?;

    assert_cmd_snapshot!(test.check_command().arg("member-fullname"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.js", "function (")?;

    insta::with_settings!({ filters => vec![PARSE_ERROR_FILTER] }, {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_config_scope_prefixes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".jsdoctreerc.json", r#"{ "scopePrefixes": ["MyLib."] }"#)?;
    test.write_file(
        "lib/a.ts",
        "/** @function MyLib.a */\nexport function a(): void {}\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".jsdoctreerc.json",
        r#"{
         "ignores": ["**/generated/**"]
     }"#,
    )?;
    test.write_file("generated/a.js", "/** @function a */\nfunction a() {}\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".jsdoctreerc.json", "{ not json")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("dump"));

    Ok(())
}
