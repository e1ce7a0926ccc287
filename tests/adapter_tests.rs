//! Host glue: background generation feeding a session that is saved and resumed

use std::fs;
use std::path::PathBuf;

use word_search::adapter::{AdapterConfig, GenerationWorker, ProgressStore, SessionStore};
use word_search::catalog::LevelCatalog;
use word_search::engine::GameSession;
use word_search::types::Language;

fn scratch_config(name: &str) -> AdapterConfig {
    let data_dir: PathBuf =
        std::env::temp_dir().join(format!("word-search-it-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&data_dir);
    AdapterConfig {
        data_dir,
        ..AdapterConfig::default()
    }
}

#[test]
fn test_generate_play_save_resume() -> anyhow::Result<()> {
    let config = scratch_config("resume");
    let catalog = LevelCatalog::new();
    let sessions = SessionStore::from_config(&config);
    let mut worker = GenerationWorker::new(config.max_pending_results)?;

    let (level, block) = catalog.level_with_block(42, config.language).unwrap();
    worker.request(level, block);
    let mut session = GameSession::new();
    worker.wait().unwrap().begin(&mut session)?;

    let first = session.words()[0].cells.clone();
    session.submit_selection(&first).unwrap();
    session.tick();
    assert!(sessions.save_session(&session)?);

    let now = word_search::adapter::unix_now();
    let summary = sessions.summary(now).unwrap();
    assert_eq!(summary.level_id, 42);
    assert_eq!(summary.progress(), "1/8");

    let resumed = sessions.resume(&catalog, config.language, now).unwrap();
    assert_eq!(resumed.words(), session.words());
    assert_eq!(resumed.found_cells(), session.found_cells());

    sessions.clear()?;
    assert!(!sessions.has_session(now));
    let _ = fs::remove_dir_all(&config.data_dir);
    Ok(())
}

#[test]
fn test_idle_session_is_not_saved() -> anyhow::Result<()> {
    let config = scratch_config("idle");
    let sessions = SessionStore::from_config(&config);
    assert!(!sessions.save_session(&GameSession::new())?);
    assert!(!sessions.path().exists());
    Ok(())
}

#[test]
fn test_resume_in_other_language_is_rejected() -> anyhow::Result<()> {
    let config = scratch_config("lang");
    let catalog = LevelCatalog::new();
    let sessions = SessionStore::from_config(&config);
    let mut session = GameSession::new();
    session.start(&catalog, 5, Language::En)?;
    assert!(sessions.save_session(&session)?);

    let now = word_search::adapter::unix_now();
    assert!(sessions.resume(&catalog, Language::Es, now).is_none());
    assert!(!sessions.path().exists());
    let _ = fs::remove_dir_all(&config.data_dir);
    Ok(())
}

#[test]
fn test_progress_survives_restart() -> anyhow::Result<()> {
    let config = scratch_config("progress");
    let catalog = LevelCatalog::new();
    let store = ProgressStore::from_config(&config);
    let now = word_search::adapter::unix_now();

    let mut progress = store.load(now);
    let mut session = GameSession::new();
    session.start(&catalog, 1, config.language)?;
    let placed: Vec<_> = session.words().iter().map(|w| w.cells.clone()).collect();
    for cells in placed {
        session.submit_selection(&cells);
    }
    progress.apply_completion(&session.complete(&progress).unwrap());
    store.save(&progress)?;

    let reloaded = store.load(now);
    assert_eq!(reloaded, progress);
    assert_eq!(reloaded.current_level_id, 2);
    let _ = fs::remove_dir_all(&config.data_dir);
    Ok(())
}
