use anyhow::Result;
use paddl::core::config::ExplorerConfig;
use paddl::core::errors::ErrorKind;
use paddl::services::explorer::{AppState, Command, Effect, Explorer};
use paddl::services::fs::listing::{list_dir, ListParams, SEARCH_PLACEHOLDER};
use paddl::services::fs::{LocalFs, SystemLauncher};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn start(root: &Path) -> Result<(Explorer<LocalFs, SystemLauncher>, AppState)> {
    let config = ExplorerConfig {
        start_dir: root.to_path_buf(),
        ..ExplorerConfig::default()
    };
    let explorer = Explorer::new(LocalFs, SystemLauncher, config);
    let state = explorer.initial_state(vec![root.to_path_buf()])?;
    Ok((explorer, state))
}

fn names(state: &AppState) -> Vec<&str> {
    state.entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn search_and_hidden_toggle_filter_live() -> Result<()> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    fs::create_dir(root.join("Music"))?;
    fs::create_dir(root.join(".music-cache"))?;
    fs::write(root.join("music.txt"), "x")?;
    fs::write(root.join("video.mp4"), "x")?;
    let (explorer, state) = start(&root)?;
    assert_eq!(names(&state), vec!["Music", "music.txt", "video.mp4"]);

    let t = explorer.handle(&state, Command::SetQuery("MUS".to_string()));
    assert_eq!(names(&t.state), vec!["Music", "music.txt"]);

    let t = explorer.handle(&t.state, Command::ToggleHidden);
    assert!(t.state.show_hidden);
    assert_eq!(names(&t.state), vec![".music-cache", "Music", "music.txt"]);
    assert!(t.effects.contains(&Effect::TreeChanged));

    let t = explorer.handle(&t.state, Command::SetQuery(SEARCH_PLACEHOLDER.to_string()));
    assert_eq!(t.state.entries.len(), 4);
    Ok(())
}

#[test]
fn query_survives_navigation() -> Result<()> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    fs::create_dir(root.join("sub"))?;
    fs::write(root.join("sub/keep.rs"), "x")?;
    fs::write(root.join("sub/drop.md"), "x")?;
    let (explorer, state) = start(&root)?;

    let t = explorer.handle(&state, Command::SetQuery(".rs".to_string()));
    let t = explorer.handle(&t.state, Command::Navigate(root.join("sub")));
    assert_eq!(names(&t.state), vec!["keep.rs"]);
    Ok(())
}

#[test]
fn missing_target_leaves_state_unchanged() -> Result<()> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    fs::write(root.join("here.txt"), "x")?;
    let (explorer, state) = start(&root)?;

    let t = explorer.handle(&state, Command::Navigate(root.join("nowhere")));
    assert_eq!(t.state, state);
    assert!(matches!(
        t.effects.as_slice(),
        [Effect::ShowError { title, .. }] if title == "PaddlMs Explorer"
    ));
    Ok(())
}

#[test]
fn refresh_after_cwd_vanished_reports_not_found() -> Result<()> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    let doomed = root.join("doomed");
    fs::create_dir(&doomed)?;
    fs::write(doomed.join("f"), "x")?;
    let (explorer, state) = start(&root)?;
    let t = explorer.handle(&state, Command::Navigate(doomed.clone()));
    assert_eq!(names(&t.state), vec!["f"]);

    fs::remove_dir_all(&doomed)?;
    let refreshed = explorer.handle(&t.state, Command::Refresh);
    assert!(refreshed.error_message().is_some());
    assert_eq!(names(&refreshed.state), vec!["f"]);

    let err = list_dir(
        &LocalFs,
        ListParams {
            path: &doomed,
            query: "",
            show_hidden: false,
        },
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

#[test]
fn tree_follows_navigation_and_expansion() -> Result<()> {
    let tmp = tempdir()?;
    let root = fs::canonicalize(tmp.path())?;
    fs::create_dir_all(root.join("a/b"))?;
    fs::create_dir(root.join("c"))?;
    let (explorer, state) = start(&root)?;

    let t = explorer.handle(&state, Command::Navigate(root.join("a/b")));
    let rows: Vec<_> = t
        .state
        .tree
        .visible_rows()
        .into_iter()
        .map(|r| (r.depth, r.label))
        .collect();
    assert_eq!(
        rows[1..],
        [
            (1, "a".to_string()),
            (2, "b".to_string()),
            (1, "c".to_string())
        ]
    );

    let t = explorer.handle(&t.state, Command::CollapseNode(root.join("a")));
    assert_eq!(t.state.tree.visible_rows().len(), 3);

    let t = explorer.handle(&t.state, Command::ExpandNode(root.join("c")));
    assert!(t.state.tree.visible_rows().iter().any(|r| r.expanded && r.label == "c"));
    Ok(())
}
