use tcxsplit_runtime::{Config, Error, inspect_file, split_file};
use tcxsplit_testing::{TestWorld, fixtures};

fn config_for(world: &TestWorld) -> Config {
    Config {
        output_dir: Some(world.output_dir().to_path_buf()),
        ..Config::default()
    }
}

#[test]
fn test_split_writes_one_file_per_activity() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::gap_inside_track().build());

    let report = split_file(&input, &config_for(&world), false).expect("split succeeds");

    assert!(report.written);
    assert_eq!(report.activity_count(), 2);
    assert_eq!(
        world.output_files(),
        vec!["2014-05-10 08:00:00 AM.tcx", "2014-05-12 03:33:20 PM.tcx"]
    );

    let second = world.read_output("2014-05-12 03:33:20 PM.tcx");
    assert!(second.contains("<Id>2014-05-12T15:33:20.000Z</Id>"));
    assert!(second.contains("<DistanceMeters>950.0</DistanceMeters>"));
}

#[test]
fn test_single_activity_writes_nothing() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::continuous().build());

    let report = split_file(&input, &config_for(&world), false).expect("split succeeds");

    assert!(!report.written);
    assert_eq!(report.activity_count(), 1);
    assert_eq!(report.files().count(), 0);
    assert!(world.output_files().is_empty());
}

#[test]
fn test_dry_run_plans_names_only() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::three_activities().build());

    let report = split_file(&input, &config_for(&world), true).expect("dry run succeeds");

    assert!(!report.written);
    let planned: Vec<_> = report
        .files()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        planned,
        vec![
            "2014-05-10 08:00:00 AM.tcx",
            "2014-05-10 10:46:40 AM.tcx",
            "2014-05-10 01:33:20 PM.tcx",
        ]
    );
    assert!(world.output_files().is_empty());
}

#[test]
fn test_names_colliding_at_filename_resolution_get_suffixes() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::three_activities().build());
    let config = Config {
        filename_format: "%Y-%m-%d".to_string(),
        ..config_for(&world)
    };

    split_file(&input, &config, false).expect("split succeeds");

    assert_eq!(
        world.output_files(),
        vec!["2014-05-10 (2).tcx", "2014-05-10 (3).tcx", "2014-05-10.tcx"]
    );
}

#[test]
fn test_existing_files_are_never_overwritten() {
    let world = TestWorld::new();
    std::fs::write(world.output_dir().join("2014-05-10 08:00:00 AM.tcx"), "keep me").unwrap();
    let input = world.write_input("export.tcx", &fixtures::gap_inside_track().build());

    split_file(&input, &config_for(&world), false).expect("split succeeds");

    assert_eq!(world.read_output("2014-05-10 08:00:00 AM.tcx"), "keep me");
    assert!(
        world
            .output_files()
            .contains(&"2014-05-10 08:00:00 AM (2).tcx".to_string())
    );
}

#[test]
fn test_malformed_input_writes_nothing() {
    let world = TestWorld::new();
    let broken = fixtures::gap_inside_track()
        .build()
        .replace("<Time>2014-05-12T15:33:20.000Z</Time>", "<Time>yesterday</Time>");
    let input = world.write_input("export.tcx", &broken);

    let err = split_file(&input, &config_for(&world), false).unwrap_err();

    assert!(matches!(err, Error::Parse(_)));
    assert!(err.to_string().contains("yesterday"));
    assert!(world.output_files().is_empty());
}

#[test]
fn test_missing_input_is_a_read_error() {
    let world = TestWorld::new();
    let missing = world.root().join("nope.tcx");

    let err = inspect_file(&missing, &config_for(&world)).unwrap_err();

    assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn test_inspect_reports_without_writing() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::gap_between_laps().build());

    let report = inspect_file(&input, &config_for(&world)).expect("inspect succeeds");

    assert_eq!(report.activity_count(), 2);
    assert_eq!(report.sessions[1].summary.laps, 1);
    assert!(report.sessions[1].summary.split);
    assert_eq!(report.files().count(), 0);
    assert!(world.output_files().is_empty());
}

#[test]
fn test_output_dir_is_created() {
    let world = TestWorld::new();
    let input = world.write_input("export.tcx", &fixtures::gap_inside_track().build());
    let nested = world.root().join("rides").join("2014");
    let config = Config {
        output_dir: Some(nested.clone()),
        ..Config::default()
    };

    split_file(&input, &config, false).expect("split succeeds");

    assert!(nested.join("2014-05-10 08:00:00 AM.tcx").exists());
}

#[test]
fn test_non_utf8_input_is_still_split() {
    let world = TestWorld::new();
    let text = fixtures::gap_inside_track().build();
    let (head, tail) = text.split_once("Forerunner 410").expect("device name");
    // Latin-1 "café"
    let bytes = [head.as_bytes(), &b"caf\xE9"[..], tail.as_bytes()].concat();
    let input = world.root().join("latin1.tcx");
    std::fs::write(&input, &bytes).unwrap();

    let report = split_file(&input, &config_for(&world), false).expect("split succeeds");

    assert_eq!(report.activity_count(), 2);
    let first = world.read_output("2014-05-10 08:00:00 AM.tcx");
    assert!(first.contains("<Name>caf\u{FFFD}</Name>"));
}
