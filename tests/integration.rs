//! Integration tests for lifegrid

use lifegrid::{board, simulate, Config, LifeError, ShadowGrid, StatsHistory};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_board(path: &Path, contents: &str) {
    fs::write(path, contents).expect("Failed to write board file");
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_roundtrip_sorts_and_dedups() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");

    write_board(&input, "4,0\n0,3\n\n2,2\n0,3\n1,4\n");

    let grid = board::load(&input, 5, 5).unwrap();
    board::save(&grid, &output).unwrap();

    assert_eq!(read_lines(&output), vec!["0,3", "1,4", "2,2", "4,0"]);
}

#[test]
fn test_save_appends_no_extension() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("result");

    let grid = lifegrid::Grid::new(3, 3).unwrap();
    board::save(&grid, &output).unwrap();

    assert!(output.exists());
    assert!(read_lines(&output).is_empty());
}

#[test]
fn test_blinker_file_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("blinker.txt");
    write_board(&input, "1,2\n2,2\n3,2\n");

    for (generations, expected) in [
        (1, vec!["2,1", "2,2", "2,3"]),
        (2, vec!["1,2", "2,2", "3,2"]),
        (7, vec!["2,1", "2,2", "2,3"]),
    ] {
        let output = dir.path().join(format!("out_{}", generations));
        let config =
            Config::from_args(input.clone(), output.clone(), 5, 5, generations, 1).unwrap();

        let (report, _) = simulate(&config).unwrap();

        assert_eq!(report.generations, generations);
        assert_eq!(report.final_population, 3);
        assert_eq!(read_lines(&output), expected);
    }
}

#[test]
fn test_zero_generations_reproduces_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    write_board(&input, "9,9\n0,0\n5,5\n");

    let config = Config::from_args(input, output.clone(), 10, 10, 0, 1).unwrap();
    simulate(&config).unwrap();

    assert_eq!(read_lines(&output), vec!["0,0", "5,5", "9,9"]);
}

#[test]
fn test_load_reports_malformed_line_number() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    write_board(&input, "1,1\n2,2\nnot a cell\n");

    match board::load(&input, 5, 5) {
        Err(LifeError::MalformedCoordinate { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text, "not a cell");
        }
        other => panic!("expected MalformedCoordinate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_load_tolerates_invalid_utf8_around_coordinate() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    fs::write(&input, b"1,1\n2,2 # caf\xe9\r\n").unwrap();

    let grid = board::load(&input, 5, 5).unwrap();
    let cells: Vec<_> = grid.live_cells().collect();
    assert_eq!(cells, vec![(1, 1), (2, 2)]);
}

#[test]
fn test_load_invalid_utf8_without_coordinate_is_malformed() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("junk.txt");
    fs::write(&input, b"1,1\n\xff\xfe\n").unwrap();

    assert!(matches!(
        board::load(&input, 5, 5),
        Err(LifeError::MalformedCoordinate { line: 2, .. })
    ));
}

#[test]
fn test_load_rejects_out_of_bounds() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("oob.txt");

    write_board(&input, "4,2\n");
    assert!(board::load(&input, 5, 3).is_ok());

    write_board(&input, "5,3\n");
    assert!(matches!(
        board::load(&input, 5, 3),
        Err(LifeError::OutOfBoundsCoordinate { x: 5, y: 3, width: 5, height: 3 })
    ));
}

#[test]
fn test_missing_input_is_open_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    assert!(matches!(
        board::load(&missing, 5, 5),
        Err(LifeError::FileOpen { .. })
    ));
}

#[test]
fn test_unwritable_output_is_write_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("out.txt");
    let grid = lifegrid::Grid::new(2, 2).unwrap();

    assert!(matches!(
        board::save(&grid, &output),
        Err(LifeError::FileWrite { .. })
    ));
}

#[test]
fn test_failed_load_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    write_board(&input, "1,1\n7,7\n");

    let config = Config::from_args(input, output.clone(), 5, 5, 3, 1).unwrap();
    assert!(simulate(&config).is_err());
    assert!(!output.exists());
}

#[test]
fn test_invalid_dimensions_rejected_before_load() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    // Dimension check fires first, even though the input does not exist
    assert!(matches!(
        Config::from_args(missing.clone(), missing, 0, 5, 1, 1),
        Err(LifeError::InvalidDimension { name: "width", .. })
    ));
}

#[test]
fn test_yaml_config_run_with_stats() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("glider.txt");
    let output = dir.path().join("glider.out");
    let config_path = dir.path().join("lifegrid.yaml");
    let stats_path = dir.path().join("stats.json");

    write_board(&input, "0,1\n1,2\n2,0\n2,1\n2,2\n");

    let mut config = Config::default();
    config.board.input = input;
    config.board.output = output.clone();
    config.simulation.width = 10;
    config.simulation.height = 10;
    config.simulation.generations = 4;
    config.logging.stats_interval = 2;
    config.save(&config_path).unwrap();

    let loaded = Config::from_file(&config_path).unwrap();
    let (_, history) = simulate(&loaded).unwrap();
    history.save(&stats_path).unwrap();

    assert_eq!(read_lines(&output), vec!["1,2", "2,3", "3,1", "3,2", "3,3"]);
    assert_eq!(history.population_series(), vec![(0, 5), (2, 5), (4, 5)]);

    let json = fs::read_to_string(&stats_path).unwrap();
    let parsed: StatsHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.snapshots.len(), 3);
}

#[test]
fn test_engine_and_world_agree_on_random_board() {
    let start = lifegrid::Grid::random(40, 30, 0.35, 12345).unwrap();

    let mut grid = start.clone();
    let mut shadow = ShadowGrid::for_grid(&grid);
    lifegrid::world::run(&mut grid, &mut shadow, 50);

    let mut world = lifegrid::World::new(start);
    world.run(50);

    assert_eq!(world.grid(), &grid);
    assert_eq!(world.population(), grid.live_count());
}
