mod common;

use common::tcxsplit;
use predicates::prelude::*;
use tcxsplit_testing::{TestWorld, fixtures};

#[test]
fn test_split_writes_files() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::gap_inside_track().build());

    tcxsplit(&world)
        .args(["split", "export.tcx", "--output-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export.tcx: 2 activities"))
        .stdout(predicate::str::contains("Wrote 2 files"));

    assert_eq!(
        world.output_files(),
        vec!["2014-05-10 08:00:00 AM.tcx", "2014-05-12 03:33:20 PM.tcx"]
    );
}

#[test]
fn test_single_activity_writes_nothing() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::continuous().build());

    tcxsplit(&world)
        .args(["split", "export.tcx", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 activity"))
        .stdout(predicate::str::contains("No gap found; nothing to write"));

    assert!(world.output_files().is_empty());
}

#[test]
fn test_dry_run_report() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::three_activities().build());

    let output = tcxsplit(&world)
        .args(["split", "export.tcx", "-o", "out", "--dry-run"])
        .output()
        .expect("run tcxsplit");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 report");
    insta::assert_snapshot!("dry_run_three_activities", stdout);
    assert!(world.output_files().is_empty());
}

#[test]
fn test_gap_threshold_flag() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::three_activities().build());

    tcxsplit(&world)
        .args(["split", "export.tcx", "-o", "out", "--gap-threshold", "20000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 activity (gap threshold 20000s)"));

    assert!(world.output_files().is_empty());
}

#[test]
fn test_config_file_sets_threshold_and_flag_wins() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::three_activities().build());
    let config = world.write_input("tcxsplit.toml", "gap_threshold_seconds = 20000.0\n");

    tcxsplit(&world)
        .arg("--config")
        .arg(&config)
        .args(["inspect", "export.tcx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 activity"));

    tcxsplit(&world)
        .arg("--config")
        .arg(&config)
        .args(["inspect", "export.tcx", "--gap-threshold", "7200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 activities"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_used() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::three_activities().build());
    let config_dir = world.root().join("config").join("tcxsplit");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "gap_threshold_seconds = 20000.0\n",
    )
    .unwrap();

    tcxsplit(&world)
        .args(["inspect", "export.tcx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 activity"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::continuous().build());

    tcxsplit(&world)
        .args(["--config", "nowhere.toml", "inspect", "export.tcx"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("nowhere.toml"));
}

#[test]
fn test_invalid_threshold_fails() {
    let world = TestWorld::new();
    world.write_input("export.tcx", &fixtures::continuous().build());

    tcxsplit(&world)
        .args(["split", "export.tcx", "--gap-threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("gap threshold must be a positive number"));
}

#[test]
fn test_malformed_input_fails_without_output() {
    let world = TestWorld::new();
    let broken = fixtures::gap_inside_track()
        .build()
        .replace("      </Lap>\n", "");
    world.write_input("export.tcx", &broken);

    tcxsplit(&world)
        .args(["split", "export.tcx", "-o", "out"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Malformed input"));

    assert!(world.output_files().is_empty());
}

#[test]
fn test_missing_input_fails() {
    let world = TestWorld::new();

    tcxsplit(&world)
        .args(["split", "absent.tcx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.tcx"));
}
