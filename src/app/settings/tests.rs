use super::*;
use clap::Parser;
use tempfile::NamedTempFile;

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["aqi-forecast"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

#[test]
fn defaults_use_presets_and_first_location() {
    let (settings, index, path) = load_runtime_settings(&cli(&[]), false).expect("load");
    assert!(path.is_none());
    assert_eq!(settings.locations, preset_locations());
    assert_eq!(index, 0);
    assert_eq!(settings.refresh_interval_secs, DEFAULT_REFRESH_SECS);
}

#[test]
fn city_argument_selects_preset_case_insensitively() {
    let (settings, index, _) = load_runtime_settings(&cli(&["mumbai"]), false).expect("load");
    assert_eq!(settings.locations[index].name, "Mumbai");
}

#[test]
fn unknown_city_without_coordinates_is_an_error() {
    let err = load_runtime_settings(&cli(&["Atlantis"]), false).expect_err("unknown city");
    assert!(err.to_string().contains("Atlantis"));
}

#[test]
fn coordinates_are_added_as_a_saved_location() {
    let (settings, index, _) =
        load_runtime_settings(&cli(&["Pune", "--lat", "18.52", "--lon", "73.85"]), false)
            .expect("load");
    assert_eq!(index, preset_locations().len());
    assert_eq!(settings.locations[index].name, "Pune");
}

#[test]
fn refresh_interval_override_is_floored() {
    let (settings, _, _) =
        load_runtime_settings(&cli(&["--refresh-interval", "3"]), false).expect("load");
    assert_eq!(settings.refresh_interval_secs, 10);
}

#[test]
fn last_location_index_falls_back_to_first() {
    let mut settings = RuntimeSettings::default();
    settings.last_location = Some("Kolkata".to_string());
    assert_eq!(settings.last_location_index(), 4);

    settings.last_location = Some("Nowhere".to_string());
    assert_eq!(settings.last_location_index(), 0);
}

#[test]
fn upsert_replaces_same_name() {
    let mut settings = RuntimeSettings::default();
    let idx = settings.upsert_location(Location::new("delhi", 1.0, 2.0));
    assert_eq!(idx, 1);
    assert_eq!(settings.locations.len(), preset_locations().len());
    assert!((settings.locations[1].latitude - 1.0).abs() < f64::EPSILON);
}

#[test]
fn settings_roundtrip_through_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("settings.json");
    let settings = RuntimeSettings {
        locations: vec![Location::new("Home", 10.0, 20.0)],
        last_location: Some("Home".to_string()),
        refresh_interval_secs: 900,
    };

    save_runtime_settings(&path, &settings).expect("save settings");
    assert_eq!(read_settings(&path), Some(settings));
}

#[test]
fn corrupt_or_partial_files_are_tolerated() {
    let file = NamedTempFile::new().expect("create temp settings file");
    std::fs::write(file.path(), "{not json").expect("write");
    assert!(read_settings(file.path()).is_none());

    std::fs::write(file.path(), r#"{"last_location":"Delhi"}"#).expect("write");
    let partial = read_settings(file.path()).expect("partial settings parse");
    assert_eq!(partial.locations, preset_locations());
    assert_eq!(partial.last_location_index(), 1);
}

#[test]
fn missing_file_reads_as_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    assert!(read_settings(&dir.path().join("absent.json")).is_none());
}

#[test]
fn explicit_refresh_interval_overrides_saved_value() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let saved = RuntimeSettings {
        refresh_interval_secs: 300,
        ..RuntimeSettings::default()
    };
    save_runtime_settings(&dir.path().join("settings.json"), &saved).expect("save settings");

    unsafe {
        std::env::set_var(CONFIG_DIR_ENV, dir.path());
    }
    let from_disk = load_runtime_settings(&cli(&[]), true);
    let default_valued = load_runtime_settings(&cli(&["--refresh-interval", "600"]), true);
    unsafe {
        std::env::remove_var(CONFIG_DIR_ENV);
    }

    let (settings, _, path) = from_disk.expect("load saved");
    assert_eq!(path, Some(dir.path().join("settings.json")));
    assert_eq!(settings.refresh_interval_secs, 300);

    let (settings, _, _) = default_valued.expect("load with override");
    assert_eq!(settings.refresh_interval_secs, 600);
}
