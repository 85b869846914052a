use clap::Parser;
use raccourcis_cli::{run, Cli, CliError, Outcome};

fn exec(args: &[&str]) -> Result<(Outcome, String), CliError> {
    let cli = Cli::try_parse_from(std::iter::once("raccourcis-cli").chain(args.iter().copied()))
        .expect("arguments parse");
    let mut out = Vec::new();
    let outcome = run(&cli, &mut out)?;
    Ok((outcome, String::from_utf8(out).expect("utf-8 output")))
}

#[test]
fn test_list() {
    let (outcome, out) = exec(&["list", "--lang", "en"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert!(out.contains("vim"));
    assert!(out.contains("Vim Commands"));
    assert!(out.contains("makefiles"));
}

#[test]
fn test_search_single_sheet() {
    let (_, out) = exec(&["search", "dd", "--sheet", "vim", "--lang", "en"]).unwrap();
    assert!(out.starts_with("Vim Commands [vim]"));
    assert!(!out.contains("[terminal]"));
}

#[test]
fn test_search_language_changes_matches() {
    let (_, en) = exec(&["search", "regroupement", "--sheet", "java", "--lang", "en"]).unwrap();
    assert!(en.starts_with("No match"));
    let (_, fr) = exec(&["search", "regroupement", "--sheet", "java", "--lang", "fr"]).unwrap();
    assert!(fr.starts_with("Java [java]"));
    assert!(fr.contains("Regroupement de classes"));
}

#[test]
fn test_search_no_match_is_success() {
    let (outcome, out) = exec(&["search", "zzzzzz", "--lang", "en"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(out, "No match for \"zzzzzz\".\n");
}

#[test]
fn test_show_unknown_sheet() {
    let err = exec(&["show", "cobol"]).unwrap_err();
    assert!(matches!(err, CliError::UnknownSheet(ref id) if id == "cobol"));
}

#[test]
fn test_show_with_examples() {
    let (_, out) = exec(&["show", "c", "--lang", "en", "--examples"]).unwrap();
    assert!(out.contains("malloc"));
    assert!(out.contains("      | "));
}

#[test]
fn test_check_passes_unless_strict() {
    let (outcome, out) = exec(&["check"]).unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert!(out.contains("0 errors"));

    // Several sheets carry French-only descriptions
    let (outcome, _) = exec(&["check", "--strict"]).unwrap();
    assert_eq!(outcome, Outcome::Failure);
}

#[test]
fn test_export_sheet() {
    let (_, out) = exec(&["export", "--sheet", "vim", "--lang", "en"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["id"], "vim");
    assert_eq!(json["title"], "Vim Commands");
    let first = &json["categories"][0]["entries"][0];
    assert!(first["label"].is_string());
    assert!(first.get("category").is_none());
}

#[test]
fn test_export_all() {
    let (_, out) = exec(&["export", "--pretty"]).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(9));
}
