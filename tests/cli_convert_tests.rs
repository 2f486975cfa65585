//! End-to-end tests for `twcolors convert`, `notations` and `versions`.

mod fixtures;
use fixtures::*;

const FALLBACK: &str = "Sorry, something went wrong.";

fn convert(hex: &str, notation: &str) -> String {
    let dir = temp_config_dir();
    run_ok(&["convert", hex, "--notation", notation], dir.path())
        .trim_end()
        .to_string()
}

// ============================================================================
// Notations
// ============================================================================

#[test]
fn test_convert_blue_500_in_every_notation() {
    let dir = temp_config_dir();
    let expected = [
        ("hex", "#3b82f6"),
        ("hex (alpha)", "#3b82f6ff"),
        ("hex (no '#')", "3b82f6"),
        ("rgb", "rgb(59 130 246)"),
        ("rgb (legacy)", "rgb(59, 130, 246)"),
        ("rgba", "rgba(59 130 246/1)"),
        ("rgba (legacy)", "rgba(59, 130, 246, 1)"),
        ("lab", "lab(56% 18 -64)"),
        ("hsl", "hsl(217, 91% 60%)"),
        ("hsla", "hsla(217, 91%, 60%, 1)"),
        ("hwb", "hwb(217deg 23% 4%)"),
        ("cmyk", "cmyk(76% 47% 0% 4%)"),
        ("tailwind name", "blue-500"),
    ];

    for (notation, value) in expected {
        let stdout = run_ok(
            &[
                "convert", "#3b82f6", "--notation", notation, "--family", "blue", "--shade", "500",
            ],
            dir.path(),
        );
        assert_eq!(stdout.trim_end(), value, "notation {notation}");
    }
}

#[test]
fn test_convert_tailwind_name() {
    let dir = temp_config_dir();
    let stdout = run_ok(
        &[
            "convert",
            "#0ea5e9",
            "--notation",
            "tailwind name",
            "--family",
            "lightBlue",
            "--shade",
            "500",
        ],
        dir.path(),
    );
    assert_eq!(stdout.trim_end(), "lightBlue-500");
}

#[test]
fn test_convert_extremes() {
    assert_eq!(convert("#ff0000", "lab"), "lab(53% 80 67)");
    assert_eq!(convert("#000000", "cmyk"), "cmyk(0% 0% 0% 100%)");
    assert_eq!(convert("#ffffff", "hsl"), "hsl(0, 0% 100%)");
}

#[test]
fn test_convert_defaults_to_saved_notation() {
    let dir = temp_config_dir();
    assert_eq!(run_ok(&["convert", "#ef4444"], dir.path()).trim_end(), "#ef4444");

    run_ok(&["config", "set", "--notation", "rgb"], dir.path());
    assert_eq!(
        run_ok(&["convert", "#ef4444"], dir.path()).trim_end(),
        "rgb(239 68 68)"
    );
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_convert_unknown_notation_prints_fallback() {
    assert_eq!(convert("#3b82f6", "oklch"), FALLBACK);
    // Tags are case-sensitive
    assert_eq!(convert("#3b82f6", "HEX"), FALLBACK);
}

#[test]
fn test_convert_malformed_hex_prints_fallback() {
    assert_eq!(convert("#zzzzzz", "rgb"), FALLBACK);
    assert_eq!(convert("#fff", "hsl"), FALLBACK);
}

#[test]
fn test_convert_json() {
    let dir = temp_config_dir();
    let result = run_json(
        &["convert", "#3b82f6", "--notation", "rgb", "--json"],
        dir.path(),
    );

    assert_eq!(result["input"], "#3b82f6");
    assert_eq!(result["notation"], "rgb");
    assert_eq!(result["value"], "rgb(59 130 246)");
}

// ============================================================================
// Listings
// ============================================================================

#[test]
fn test_notations_lists_all_tags() {
    let dir = temp_config_dir();
    let tags = run_json(&["notations", "--json"], dir.path());
    let tags = tags.as_array().expect("Should be an array");

    assert_eq!(tags.len(), 13);
    assert_eq!(tags[0], "hex");
    assert!(tags.iter().any(|tag| tag == "tailwind name"));
    assert_eq!(tags[12], "tailwind name");
}

#[test]
fn test_versions_reports_catalog_sizes() {
    let dir = temp_config_dir();
    let versions = run_json(&["versions", "--json"], dir.path());
    let versions = versions.as_array().expect("Should be an array");

    let sizes: Vec<_> = versions
        .iter()
        .map(|v| {
            (
                v["version"].as_str().unwrap().to_string(),
                v["families"].as_u64().unwrap(),
                v["colors"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        sizes,
        vec![
            ("v1".to_string(), 10, 90),
            ("v2".to_string(), 22, 220),
            ("v3".to_string(), 22, 242),
        ]
    );
    assert_eq!(versions[2]["selected"], true);
}
