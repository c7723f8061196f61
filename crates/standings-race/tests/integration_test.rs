//! Integration tests for standings-race crate.
//!
//! These tests drive full runs against season files on disk, with the
//! renderer mocked out.

use mockall::mock;
use standings_common::test_utils::{create_temp_dir, init_test_logging, sample_season, season_json, write_season_file};
use standings_common::{Result, StandingsError};
use standings_config::Config;
use standings_graphs::{AnimationRenderer, RenderSummary, StandingsTable};
use standings_race::{exit_status, RunOutcome, StandingsRace};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::TempDir;

mock! {
    pub Renderer {}

    impl AnimationRenderer for Renderer {
        fn render(&self, table: &StandingsTable, output: &Path) -> Result<RenderSummary>;
        fn name(&self) -> &'static str;
    }
}

fn mock_renderer() -> MockRenderer {
    let mut renderer = MockRenderer::new();
    renderer.expect_name().return_const("mock");
    renderer
}

fn config_for(dir: &TempDir, season: &str) -> Config {
    let mut config = Config {
        season: season.to_string(),
        ..Config::default()
    };
    config.data.data_dir = dir.path().to_path_buf();
    config.output.output_dir = dir.path().join("out");
    config
}

#[test]
fn test_run_renders_every_round() {
    init_test_logging();
    let dir = create_temp_dir();
    write_season_file(dir.path(), "2025", "jp.1", &sample_season());
    let config = config_for(&dir, "2025");
    let expected_output = dir.path().join("out").join("j1_2025_points.gif");

    let mut renderer = mock_renderer();
    let output = expected_output.clone();
    renderer
        .expect_render()
        .withf(move |table, path| {
            table.rounds() == [1, 2, 3] && table.points(3, "Kashima") == Some(7) && path == output.as_path()
        })
        .times(1)
        .returning(|table, path| {
            Ok(RenderSummary {
                path: path.to_path_buf(),
                frames: table.rounds().len(),
            })
        });

    let outcome = StandingsRace::new(config).run_with(&renderer).unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Rendered(RenderSummary {
            path: expected_output,
            frames: 3,
        })
    );
}

#[test]
fn test_run_without_results_skips_rendering() {
    init_test_logging();
    let dir = create_temp_dir();
    let doc = season_json(&[
        ("Matchday 1", "Kashima", "Urawa", None),
        ("Matchday 1", "Kobe", "Machida", None),
    ]);
    write_season_file(dir.path(), "2026", "jp.1", &doc);

    let mut renderer = mock_renderer();
    renderer.expect_render().times(0);

    let outcome = StandingsRace::new(config_for(&dir, "2026")).run_with(&renderer).unwrap();

    assert_eq!(outcome, RunOutcome::NoCompletedMatches);
    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_missing_season_exits_with_one() {
    init_test_logging();
    let dir = create_temp_dir();

    let mut renderer = mock_renderer();
    renderer.expect_render().times(0);

    let err = StandingsRace::new(config_for(&dir, "1999"))
        .run_with(&renderer)
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.exit_code(), ExitCode::from(1));
    assert!(err.to_string().contains("1999"));
}

#[test]
fn test_malformed_season_is_fatal() {
    init_test_logging();
    let dir = create_temp_dir();
    let season_dir = dir.path().join("2025");
    std::fs::create_dir_all(&season_dir).unwrap();
    std::fs::write(season_dir.join("jp.1.json"), r#"{"name": "J1 2025"}"#).unwrap();

    let mut renderer = mock_renderer();
    renderer.expect_render().times(0);

    let err = StandingsRace::new(config_for(&dir, "2025"))
        .run_with(&renderer)
        .unwrap_err();

    assert!(!err.is_not_found());
    assert!(matches!(
        err,
        standings_race::RaceError::Standings(StandingsError::Parse { .. })
    ));
}

#[test]
fn test_renderer_failure_propagates() {
    init_test_logging();
    let dir = create_temp_dir();
    write_season_file(dir.path(), "2025", "jp.1", &sample_season());

    let mut renderer = mock_renderer();
    renderer
        .expect_render()
        .times(1)
        .returning(|_, _| Err(StandingsError::graph("encoder failed")));

    let err = StandingsRace::new(config_for(&dir, "2025"))
        .run_with(&renderer)
        .unwrap_err();

    assert!(!err.is_not_found());
    assert!(err.to_string().contains("encoder failed"));
}

#[test]
fn test_explicit_output_path_is_used() {
    init_test_logging();
    let dir = create_temp_dir();
    write_season_file(dir.path(), "2025", "jp.1", &sample_season());
    let mut config = config_for(&dir, "2025");
    let explicit = dir.path().join("custom.gif");
    config.output.path = Some(explicit.clone());

    let mut renderer = mock_renderer();
    renderer
        .expect_render()
        .withf(move |_, path| path == explicit.as_path())
        .times(1)
        .returning(|_, path| {
            Ok(RenderSummary {
                path: PathBuf::from(path),
                frames: 3,
            })
        });

    let outcome = StandingsRace::new(config).run_with(&renderer).unwrap();
    assert!(matches!(outcome, RunOutcome::Rendered(summary) if summary.path.ends_with("custom.gif")));
}

fn rendering_renderer() -> MockRenderer {
    let mut renderer = mock_renderer();
    renderer.expect_render().returning(|table, path| {
        Ok(RenderSummary {
            path: path.to_path_buf(),
            frames: table.rounds().len(),
        })
    });
    renderer
}

#[test]
fn test_exit_status_success_when_rendered() {
    init_test_logging();
    let dir = create_temp_dir();
    write_season_file(dir.path(), "2025", "jp.1", &sample_season());

    let result = StandingsRace::new(config_for(&dir, "2025")).run_with(&rendering_renderer());

    assert!(matches!(result, Ok(RunOutcome::Rendered(_))));
    assert_eq!(exit_status(&result), Some(ExitCode::SUCCESS));
}

#[test]
fn test_exit_status_success_without_results() {
    init_test_logging();
    let dir = create_temp_dir();
    let doc = season_json(&[("Matchday 1", "Kashima", "Urawa", None)]);
    write_season_file(dir.path(), "2026", "jp.1", &doc);

    let result = StandingsRace::new(config_for(&dir, "2026")).run_with(&rendering_renderer());

    assert_eq!(result.as_ref().ok(), Some(&RunOutcome::NoCompletedMatches));
    assert_eq!(exit_status(&result), Some(ExitCode::SUCCESS));
}

#[test]
fn test_exit_status_one_for_missing_season() {
    init_test_logging();
    let dir = create_temp_dir();

    let result = StandingsRace::new(config_for(&dir, "1999")).run_with(&rendering_renderer());

    assert_eq!(exit_status(&result), Some(ExitCode::from(1)));
}

#[test]
fn test_exit_status_fatal_for_bad_round_label() {
    init_test_logging();
    let dir = create_temp_dir();
    let doc = season_json(&[("Final", "Kashima", "Urawa", Some((1, 0)))]);
    write_season_file(dir.path(), "2025", "jp.1", &doc);

    let result = StandingsRace::new(config_for(&dir, "2025")).run_with(&rendering_renderer());

    assert!(result.is_err());
    assert_eq!(exit_status(&result), None);
}
