mod common;

use common::{parse_ascii, pos};
use keymaze::generator::{fallback_grid, GeneratorSettings, MazeGenerator};
use keymaze::level::FALLBACK_SPAWN;
use keymaze::pathfinding::{find_path, is_reachable};
use keymaze::{CellTag, Level};

#[test]
fn test_fallback_level_end_to_end() {
    let level = Level::new(fallback_grid());
    assert_eq!(level.bounds(), (7, 10));
    assert_eq!(level.start_position(), Some(pos(1, 1)));

    let goals: Vec<_> = level
        .grid()
        .positions()
        .filter(|p| level.is_goal(p.r, p.c))
        .collect();
    assert_eq!(goals, vec![pos(5, 8)]);

    assert!(is_reachable(level.grid(), pos(1, 1), pos(5, 8)));
}

#[test]
fn test_in_bounds_edges() {
    let levels = [
        Level::new(fallback_grid()),
        Level::new(MazeGenerator::new(GeneratorSettings::default()).generate_seeded(3)),
        Level::from_rows(&[vec![0]]).unwrap(),
    ];
    for level in &levels {
        let (rows, cols) = level.bounds();
        assert!(!level.in_bounds(-1, 0));
        assert!(!level.in_bounds(rows, 0));
        assert!(!level.in_bounds(0, -1));
        assert!(!level.in_bounds(0, cols));
        assert!(level.in_bounds(0, 0));
        assert!(level.in_bounds(rows - 1, cols - 1));
    }
}

#[test]
fn test_classify_never_reports_start() {
    let generator = MazeGenerator::new(GeneratorSettings::hard());
    for seed in 0..50 {
        let level = Level::new(generator.generate_seeded(seed));
        assert!(level.start_position().is_some());
        let (rows, cols) = level.bounds();
        for r in 0..rows {
            for c in 0..cols {
                assert_ne!(level.classify(r, c), CellTag::Start);
            }
        }
    }
}

#[test]
fn test_collect_key_twice_matches_once() {
    let grid = parse_ascii(
        "
        #####
        #S.K#
        #..G#
        #####
        ",
    )
    .unwrap();

    let mut once = Level::new(grid.clone());
    once.collect_key(1, 3);

    let mut twice = Level::new(grid);
    twice.collect_key(1, 3);
    twice.collect_key(1, 3);

    assert_eq!(once.grid(), twice.grid());
    assert_eq!(twice.classify(1, 3), CellTag::Floor);
}

#[test]
fn test_level_without_start() {
    let level = Level::new(
        parse_ascii(
            "
            ####
            #.K#
            #.G#
            ####
            ",
        )
        .unwrap(),
    );
    assert_eq!(level.start_position(), None);
    assert_eq!(level.spawn_position(), FALLBACK_SPAWN);
    assert_eq!(level.classify(1, 1), CellTag::Floor);
}

#[test]
fn test_levels_from_same_grid_are_independent() {
    let authored = fallback_grid();
    let mut first = Level::new(authored.clone());
    let second = Level::new(authored.clone());

    assert!(first.collect_key(3, 4));
    assert!(second.is_key(3, 4));
    assert_eq!(authored.tag(3, 4), CellTag::Key);
    assert_eq!(authored.tag(1, 1), CellTag::Start);
}

#[test]
fn test_path_through_fallback_level() {
    let level = Level::new(fallback_grid());
    let start = level.start_position().unwrap();
    let key = level.key_position().unwrap();
    let goal = level.goal_position().unwrap();

    let to_key = find_path(level.grid(), start, key).unwrap();
    let to_goal = find_path(level.grid(), key, goal).unwrap();
    assert_eq!(to_key.len(), 6);
    assert_eq!(to_goal.len(), 7);
    for step in to_key.iter().chain(to_goal.iter()) {
        assert!(!level.is_wall(step.r, step.c));
    }
}
