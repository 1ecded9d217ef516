use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, PARSE_ERROR_FILTER};

const CHART: &str = r#"/**
 * The chart class.
 *
 * @class
 * @name Highcharts.Chart
 */
class Chart {
    /**
     * Redraws the chart.
     *
     * @param {boolean} [animation]
     */
    redraw(animation) {
        return animation;
    }
}
"#;

#[test]
fn test_dump_text() -> Result<()> {
    let test = CliTest::with_file("chart.js", CHART)?;

    assert_cmd_snapshot!(test.dump_command().arg("chart.js"));

    Ok(())
}

#[test]
fn test_dump_json() -> Result<()> {
    let test = CliTest::with_file("chart.js", CHART)?;

    let output = test
        .dump_command()
        .args(["--format", "json", "chart.js"])
        .output()?;

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;

    let chart = &json["chart.js"]["children"][0];
    assert_eq!(chart["depth"], 1);
    assert_eq!(chart["doclet"]["codeName"], "Chart");

    // doclet -> scope -> method doclet
    let redraw = &chart["children"][0]["children"][0];
    assert_eq!(redraw["depth"], 3);
    assert_eq!(redraw["doclet"]["codeLine"], 13);
    assert_eq!(redraw["doclet"]["codeName"], "redraw");

    Ok(())
}

#[test]
fn test_dump_scans_source_root() -> Result<()> {
    let test = CliTest::with_file("src/a.ts", "/** A. */\nexport const a = 1;\n")?;
    test.write_file("src/b.ts", "export const b = 2;\n")?;

    assert_cmd_snapshot!(test.dump_command());

    Ok(())
}

#[test]
fn test_dump_parse_error_goes_to_stderr() -> Result<()> {
    let test = CliTest::with_file("broken.js", "class {")?;

    insta::with_settings!({ filters => vec![PARSE_ERROR_FILTER] }, {
        assert_cmd_snapshot!(test.dump_command().args(["--format", "json", "broken.js"]));
    });

    Ok(())
}
