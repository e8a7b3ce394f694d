// Pattern files in, final-state files out.

use std::fs;
use std::io::Write;

use conway::{LifeConfig, LifeError, Pattern, World, render};
use tempfile::{NamedTempFile, tempdir};

fn temp_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush");
    file
}

#[test_log::test]
fn block_file_is_centered() {
    let file = temp_file(b"***\n***\n***\n");

    let mut world = World::create(10, 10).unwrap();
    let stamped = world.load_pattern(file.path()).unwrap();

    assert_eq!(stamped, 9);
    for y in 0..10 {
        for x in 0..10 {
            let inside = (3..=5).contains(&x) && (3..=5).contains(&y);
            assert_eq!(world.get(x, y), inside, "({x}, {y})");
        }
    }
}

#[test_log::test]
fn non_utf8_file_loads_with_stray_bytes_dead() {
    let file = temp_file(b"*\xE9*\n");

    let pattern = Pattern::load(file.path()).unwrap();
    assert_eq!((pattern.width(), pattern.height()), (3, 1));
    assert_eq!(pattern.cells().len(), 2);

    let mut world = World::create(5, 3).unwrap();
    assert_eq!(world.load_pattern(file.path()).unwrap(), 2);
    assert!(world.get(1, 1));
    assert!(!world.get(2, 1));
    assert!(world.get(3, 1));
}

#[test_log::test]
fn empty_file_fails_without_touching_the_world() {
    let file = temp_file(b"\n\n\n");

    let mut world = World::create(10, 10).unwrap();
    let err = world.load_pattern(file.path()).unwrap_err();

    assert!(matches!(err, LifeError::EmptyPattern { width: 0, height: 0 }));
    assert!(world.cells().iter().all(|&c| c == 0));
}

#[test_log::test]
fn missing_file_fails_without_touching_the_world() {
    let dir = tempdir().unwrap();
    let mut world = World::create(4, 4).unwrap();
    let err = world.load_pattern(dir.path().join("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, LifeError::PatternRead { .. }));
    assert!(err.is_pattern_load());
    assert_eq!(world.population(), 0);
}

#[test_log::test]
fn saved_state_reloads_as_the_same_pattern() {
    let mut world = World::create(6, 4).unwrap();
    world.stamp(&Pattern::builtin("glider").unwrap()).unwrap();
    world.step_n(2);

    let dir = tempdir().unwrap();
    let path = dir.path().join("final.txt");
    render::save_state(&path, &world).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.len() == 6));
    assert!(!text.contains("Generation"));

    // a full-size dump stamps back at offset (0, 0)
    let mut copy = World::create(6, 4).unwrap();
    copy.load_pattern(&path).unwrap();
    assert_eq!(copy.cells(), world.cells());
}

#[test_log::test]
fn save_overwrites_previous_output() {
    let file = temp_file("stale contents that are longer than the grid\n".repeat(5).as_bytes());

    let world = World::create(2, 1).unwrap();
    render::save_state(file.path(), &world).unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), "..\n");
}

#[test_log::test]
fn unwritable_output_is_reported() {
    let world = World::create(2, 2).unwrap();
    let dir = tempdir().unwrap();

    // a directory cannot be opened as a file
    let err = render::save_state(dir.path(), &world).unwrap_err();

    assert!(matches!(err, LifeError::OutputWrite { .. }));
}

#[test_log::test]
fn config_file_round_trip() {
    let config = LifeConfig {
        width: 32,
        height: 16,
        scale: 4,
        seed: Some(9),
        pattern: Some("pulsar".into()),
        ..LifeConfig::default()
    };
    let file = temp_file(serde_json::to_string_pretty(&config).unwrap().as_bytes());

    assert_eq!(LifeConfig::from_json_file(file.path()).unwrap(), config);
}

#[test_log::test]
fn malformed_config_file_is_a_parse_error() {
    let file = temp_file(b"{ \"width\": \"wide\" }");
    let err = LifeConfig::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, LifeError::ConfigParse { .. }));
}
