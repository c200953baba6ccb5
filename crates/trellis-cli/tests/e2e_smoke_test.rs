use std::{fs, path::PathBuf};

use tempfile::tempdir;

use trellis_cli::{Args, Command, Format, run, run_with_output};

/// Collects all .yaml files from a directory
fn collect_yaml_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("yaml")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn args(command: Command) -> Args {
    Args {
        command,
        config: None,
        log_level: "off".to_string(),
    }
}

fn render(input: &PathBuf, output: &PathBuf, format: Format) -> Args {
    args(Command::Render {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        format,
    })
}

/// Runs a command and returns what it printed.
fn captured(args: &Args) -> String {
    let mut out = Vec::new();
    run_with_output(args, &mut out).expect("command should succeed");
    String::from_utf8(out).expect("output is UTF-8")
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_fixtures = collect_yaml_files(fixtures_path());

    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in tests/fixtures/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            fixture_path.file_stem().unwrap().to_string_lossy()
        ));

        if let Err(e) = run(&render(fixture_path, &output_path, Format::Svg)) {
            failed_fixtures.push((fixture_path.clone(), e));
            continue;
        }

        let svg = fs::read_to_string(&output_path).unwrap();
        assert!(svg.contains("</svg>"), "{} rendered an incomplete SVG", fixture_path.display());
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_fixtures = collect_yaml_files(fixtures_path().join("errors"));

    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            fixture_path.file_stem().unwrap().to_string_lossy()
        ));

        if run(&render(fixture_path, &output_path, Format::Svg)).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
        assert!(!output_path.exists(), "no output for a rejected fixture");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) should have failed",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_render_json() {
    let temp_dir = tempdir().unwrap();
    let output_path = temp_dir.path().join("dc1.json");

    run(&render(
        &fixtures_path().join("dc1.yaml"),
        &output_path,
        Format::Json,
    ))
    .unwrap();

    let json = fs::read_to_string(&output_path).unwrap();
    assert!(json.contains("\"spine3-leaf4\""));
    assert!(json.contains("#ffd700"));
}

#[test]
fn e2e_check_command() {
    let input = fixtures_path().join("multi_protocol.yaml");
    let printed = captured(&args(Command::Check {
        input: input.to_string_lossy().to_string(),
    }));
    assert!(printed.contains("valid fabric `campus`"));
    assert!(!printed.contains("warning"));

    let defaulted = captured(&args(Command::Check {
        input: fixtures_path().join("minimal.yaml").to_string_lossy().to_string(),
    }));
    assert!(defaulted.contains("valid fabric `minimal`"));
    assert!(defaulted.contains("warning[W300]"));
    assert!(defaulted.contains("warning[W301]"));

    let broken = fixtures_path().join("errors").join("wrong_kind.yaml");
    let result = run(&args(Command::Check {
        input: broken.to_string_lossy().to_string(),
    }));
    assert!(result.is_err());
}

#[test]
fn e2e_new_then_check() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("new.yaml");

    run(&args(Command::New {
        name: "fresh".to_string(),
        output: Some(path.to_string_lossy().to_string()),
    }))
    .unwrap();

    let printed = captured(&args(Command::Check {
        input: path.to_string_lossy().to_string(),
    }));
    assert!(printed.contains("valid fabric `fresh`"));
}

#[test]
fn e2e_quick_command() {
    let printed = captured(&args(Command::Quick {
        preset: Some("large ospf".to_string()),
        spines: 2,
        leaves: 3,
        protocol: "EBGP".to_string(),
        name: "myfabric-1".to_string(),
        list: false,
        output: None,
    }));
    assert_eq!(printed.matches("eda.nokia.com/role=spine").count(), 4);
    assert_eq!(printed.matches("eda.nokia.com/role=leaf").count(), 6);
    assert!(printed.contains("protocol: OSPF"));

    let listed = captured(&args(Command::Quick {
        preset: None,
        spines: 2,
        leaves: 3,
        protocol: "EBGP".to_string(),
        name: "myfabric-1".to_string(),
        list: true,
        output: None,
    }));
    assert_eq!(listed.lines().count(), 4);
    assert!(listed.contains("Small ISIS"));

    let unknown = run(&args(Command::Quick {
        preset: Some("Huge".to_string()),
        spines: 2,
        leaves: 3,
        protocol: "EBGP".to_string(),
        name: "myfabric-1".to_string(),
        list: false,
        output: None,
    }));
    assert!(unknown.is_err());
}

#[test]
fn e2e_info_command() {
    let printed = captured(&args(Command::Info {
        input: fixtures_path().join("dc1.yaml").to_string_lossy().to_string(),
    }));
    assert!(printed.contains("Name:             dc1"));
    assert!(printed.contains("Spines:           3"));
    assert!(printed.contains("ASN pool:         asn-pool"));
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nshow_legend = false\n").unwrap();
    let output_path = temp_dir.path().join("out.svg");

    let mut render_args = render(
        &fixtures_path().join("minimal.yaml"),
        &output_path,
        Format::Svg,
    );
    render_args.config = Some(config_path.to_string_lossy().to_string());
    run(&render_args).unwrap();

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(!svg.contains("inter-switch link"));
}
