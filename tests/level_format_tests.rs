//! Level file format tests against the shipped JSON shape: camelCase
//! keys, string-keyed star thresholds, `desiredLevel`, `solutionSteps`,
//! and passthrough metadata.

use tubesort::level::{Difficulty, LevelDefinition, LevelIndex};
use tubesort::TubeId;

/// A level file as the converter writes it (including fields the engine
/// does not use, like `moves`).
const LEVEL_JSON: &str = r#"{
    "levelId": 3,
    "name": "Level 3 - Puzzle 17",
    "difficulty": "medium",
    "tubes": [
        {"id": 0, "balls": ["blue", "blue", "blue"], "capacity": 4},
        {"id": 1, "balls": [], "capacity": 3},
        {"id": 2, "balls": ["blue"], "capacity": 2}
    ],
    "colors": ["blue"],
    "moves": 0,
    "minMoves": 2,
    "stars": {"1": 12, "2": 7, "3": 2},
    "originalFile": "distribution_23555_4_17_solution.json",
    "puzzleType": "liquid_pouring",
    "desiredLevel": 2,
    "solutionSteps": [[0, 1], [1, 2]]
}"#;

const INDEX_JSON: &str = r#"{
    "version": "1.0.0",
    "totalLevels": 2,
    "levels": [
        {"id": 1, "file": "level-001.json", "name": "Level 1", "difficulty": "easy",
         "unlocked": true, "completed": false, "stars": 0, "bestMoves": null},
        {"id": 2, "file": "level-002.json", "name": "Level 2", "difficulty": "hard",
         "unlocked": false, "completed": false, "stars": 0, "bestMoves": null}
    ]
}"#;

#[test]
fn test_parse_shipped_level_file() {
    let level: LevelDefinition = serde_json::from_str(LEVEL_JSON).unwrap();

    assert_eq!(level.level_id, 3);
    assert_eq!(level.difficulty, Some(Difficulty::Medium));
    assert_eq!(level.tubes.len(), 3);
    assert_eq!(level.tubes[0].balls, vec!["blue"; 3]);
    assert_eq!(level.min_moves, 2);
    assert_eq!(level.stars.three, 2);
    assert_eq!(level.desired_level, 2);
    assert_eq!(
        level.solution_steps,
        vec![
            (TubeId::new(0), TubeId::new(1)),
            (TubeId::new(1), TubeId::new(2)),
        ]
    );
    assert_eq!(level.puzzle_type.as_deref(), Some("liquid_pouring"));

    level.validate().unwrap();
}

#[test]
fn test_level_file_round_trip() {
    let level: LevelDefinition = serde_json::from_str(LEVEL_JSON).unwrap();
    let json = serde_json::to_value(&level).unwrap();

    // The keys a reader of the shipped format depends on.
    assert_eq!(json["levelId"], 3);
    assert_eq!(json["minMoves"], 2);
    assert_eq!(json["desiredLevel"], 2);
    assert_eq!(json["stars"]["3"], 2);
    assert_eq!(json["difficulty"], "medium");
    assert_eq!(json["solutionSteps"][0][1], 1);
}

#[test]
fn test_parse_shipped_index_file() {
    let index: LevelIndex = serde_json::from_str(INDEX_JSON).unwrap();

    assert_eq!(index.total_levels, 2);
    assert_eq!(index.levels.len(), 2);
    assert!(index.get(1).unwrap().unlocked);
    assert_eq!(index.get(2).unwrap().difficulty, Some(Difficulty::Hard));
    assert_eq!(index.get(1).unwrap().best_moves, None);
    assert_eq!(index.next_after(1).unwrap().id, 2);
}

#[test]
fn test_built_board_matches_level_contents() {
    let level: LevelDefinition = serde_json::from_str(LEVEL_JSON).unwrap();
    let board = level.build_board().unwrap();

    assert_eq!(board.tube_count(), 3);
    assert_eq!(board.target_fill(), 2);
    assert_eq!(board.total_balls(), 4);
    assert_eq!(board.tube(TubeId::new(0)).unwrap().len(), 3);
    assert_eq!(board.tube(TubeId::new(2)).unwrap().capacity(), 2);
}
