// tests/integration_test.rs - End-to-end flows through the app

mod common;

use common::{commit_all, init_repo, project_dir, write_file};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quill::app::App;
use quill::command_panel::PanelMode;
use quill::config::QuillConfig;
use quill::editor::WELCOME_TEXT;
use quill::event::AppEvent;
use quill::mode::Focus;
use quill::services::FileStatus;
use std::fs;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_open_edit_save_from_tree() {
    let (_dir, root) = project_dir();
    let path = write_file(&root, "notes.txt", "Hello\nWorld\n");
    let mut app = App::new(root, &QuillConfig::default());
    assert_eq!(app.editor.text(), WELCOME_TEXT);

    assert!(app.dir_tree.select_path(&path));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.current_path.as_deref(), Some(path.as_path()));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Editor);
    press(&mut app, KeyCode::End);
    type_text(&mut app, "!");
    ctrl(&mut app, 's');

    assert_eq!(fs::read_to_string(&path).unwrap(), "Hello!\nWorld\n");
    assert_eq!(app.last_status.as_deref(), Some("Saved: notes.txt"));
}

#[test]
fn test_search_selects_and_opens_file() {
    let (_dir, root) = project_dir();
    write_file(&root, "main.py", "print('main')\n");
    write_file(&root, "maintenance.txt", "todo\n");
    write_file(&root, "other.go", "package main\n");
    write_file(&root, "node_modules/main.js", "");
    let mut app = App::new(root.clone(), &QuillConfig::default());

    ctrl(&mut app, 'p');
    assert_eq!(app.command_panel.mode(), PanelMode::Search);
    type_text(&mut app, "mai");

    let names: Vec<String> = app
        .command_panel
        .results()
        .iter()
        .map(|r| r.entry.name.clone())
        .collect();
    assert!(names.contains(&"main.py".to_string()));
    assert!(names.contains(&"maintenance.txt".to_string()));
    assert!(!names.contains(&"main.js".to_string()));

    let chosen = app.command_panel.results()[0].entry.path.clone();
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.command_panel.mode(), PanelMode::Status);
    assert!(app.command_panel.query().is_empty());
    assert!(app.command_panel.results().is_empty());
    assert_eq!(app.editor.current_path, Some(chosen));
    assert_eq!(app.focus, Focus::Tree);
}

#[test]
fn test_empty_query_shows_nothing() {
    let (_dir, root) = project_dir();
    write_file(&root, "main.py", "");
    let mut app = App::new(root, &QuillConfig::default());

    ctrl(&mut app, 'p');
    assert!(app.command_panel.results().is_empty());
    type_text(&mut app, "m");
    press(&mut app, KeyCode::Backspace);
    assert!(app.command_panel.results().is_empty());
}

#[test]
fn test_search_limit_from_config() {
    let (_dir, root) = project_dir();
    for i in 0..8 {
        write_file(&root, &format!("file{}.rs", i), "");
    }
    let config = QuillConfig {
        search_limit: 3,
        ..QuillConfig::default()
    };
    let mut app = App::new(root, &config);

    ctrl(&mut app, 'p');
    type_text(&mut app, "file");
    assert_eq!(app.command_panel.results().len(), 3);
}

#[test]
fn test_unreadable_file_shows_error_in_editor() {
    let (_dir, root) = project_dir();
    let path = root.join("binary.dat");
    fs::write(&path, [0xffu8, 0xfe, 0xfd]).unwrap();
    let mut app = App::new(root, &QuillConfig::default());

    app.post(AppEvent::open_file(path.clone()));
    app.dispatch_pending();

    assert!(app.editor.text().starts_with("Error reading file:"));
    assert_eq!(app.editor.current_path, Some(path));
}

#[test]
fn test_git_statuses_reach_tree_and_search() {
    let (_dir, root) = project_dir();
    let repo = init_repo(&root);
    write_file(&root, "a.py", "a = 1\n");
    commit_all(&repo, "initial");
    write_file(&root, "a.py", "a = 2 # changed\n");
    let untracked = write_file(&root, "b.py", "b = 1\n");

    let mut app = App::new(root.clone(), &QuillConfig::default());
    assert_eq!(app.last_status.as_deref(), Some("Branch: main"));
    assert_eq!(
        app.dir_tree.status_for(&root.join("a.py")),
        Some(FileStatus::Modified)
    );
    assert_eq!(
        app.command_panel.status_for(&untracked),
        Some(FileStatus::Untracked)
    );

    let rows = app.dir_tree.rows();
    let b_row = rows.iter().find(|r| r.name == "b.py").unwrap();
    assert_eq!(b_row.status, Some(FileStatus::Untracked));

    ctrl(&mut app, 'p');
    type_text(&mut app, "b.py");
    assert_eq!(app.command_panel.results()[0].entry.path, untracked);
}

#[tokio::test]
async fn test_bootstrap_matches_synchronous_startup() {
    let (_dir, root) = project_dir();
    write_file(&root, "src/lib.rs", "");
    write_file(&root, "README.md", "");

    let app = App::bootstrap(root.clone(), &QuillConfig::default())
        .await
        .unwrap();
    assert_eq!(app.command_panel.file_count(), 2);
    assert_eq!(app.base_path, root);
    assert!(app.last_status.as_deref().unwrap().starts_with("Branch: "));
}
