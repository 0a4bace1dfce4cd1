//! Walkthrough of one editing session against the state engine.
//!
//! Covers: dashboard, script analysis, storyboard editing, keyboard dispatch
//!
//! Run with: cargo run --example editor_session

use reelboard::{
    analyze, frames_from_suggestions, resolve, AdFormat, Key, KeyEvent, ProjectBoard,
    ShortcutAction, StoryboardStore,
};

fn main() {
    println!("========================================");
    println!(" Reelboard Editor Session");
    println!("========================================\n");

    dashboard_walkthrough();
    script_walkthrough();
    storyboard_walkthrough();
    keyboard_walkthrough();
}

// -----------------------------------------------------------------------------
// 1. Dashboard
// -----------------------------------------------------------------------------
fn dashboard_walkthrough() {
    println!("Dashboard: open, search, create");

    let mut board = ProjectBoard::with_sample_projects();
    println!("  {} projects on the dashboard", board.len());

    for hit in board.search("campaign") {
        println!("  search 'campaign' -> {} [{}]", hit.title, hit.status.label());
    }

    let id = board.create("Espresso Maker Launch", AdFormat::Portrait);
    println!("  created '{}' as {}\n", board.get(&id).unwrap().title, id);
}

// -----------------------------------------------------------------------------
// 2. Script to storyboard
// -----------------------------------------------------------------------------
fn script_walkthrough() {
    println!("Script: analyze and seed a storyboard");

    let script = "\
[SCENE 1 - OPENING]
A busy professional struggles with the morning routine.

[SCENE 2 - PROBLEM]
Coffee spills, keys missing - chaos everywhere.

[SCENE 3 - SOLUTION]
The product saves the morning.";

    let suggestions = analyze(script).expect("script is not empty");
    for s in &suggestions {
        println!("  {}% {} — {}", s.confidence, s.scene, s.suggestion);
    }

    let store = StoryboardStore::from_frames(frames_from_suggestions(&suggestions))
        .expect("fresh ids never collide");
    println!("  seeded a board with {} frames\n", store.len());
}

// -----------------------------------------------------------------------------
// 3. Storyboard editing
// -----------------------------------------------------------------------------
fn storyboard_walkthrough() {
    println!("Storyboard: reorder, multi-select, group lock");

    let mut store = StoryboardStore::with_starter_frames();

    // Drag the call-to-action card to the front.
    store.reorder("5", 0).unwrap();
    store.retime();

    let snapshot = store.snapshot();
    let order: Vec<&str> = snapshot.frames.iter().map(|f| f.scene.as_str()).collect();
    println!("  order after drag: {:?}", order);

    // Shift-click three frames, then lock their brand treatment as a group.
    for id in ["1", "2", "3"] {
        store.toggle_multi_select(id, true);
    }
    let locked = store.toggle_lock_selected(reelboard::LockKind::Brand);
    println!("  group brand lock -> {}", locked);

    // Duplicate the selection; copies land at the end and selection clears.
    for id in ["1", "2", "3"] {
        store.toggle_multi_select(id, true);
    }
    let copies = store.bulk_duplicate_selected();
    println!("  duplicated {} frames, {} total", copies.len(), store.len());

    println!(
        "  total runtime: {}\n",
        reelboard::storyboard::timeline::total_duration(store.frames())
    );
}

// -----------------------------------------------------------------------------
// 4. Keyboard dispatch
// -----------------------------------------------------------------------------
fn keyboard_walkthrough() {
    println!("Keyboard: suppression while typing");

    let select_all = KeyEvent::new(Key::Char('a')).with_meta();
    let delete = KeyEvent::new(Key::Delete);

    let while_typing = resolve(&select_all, true).unwrap();
    assert_eq!(while_typing.action, ShortcutAction::SelectAll);
    println!("  Cmd+A while typing -> {:?}", while_typing.action);

    assert!(resolve(&delete, true).is_none());
    println!("  Delete while typing -> suppressed");

    let idle = resolve(&delete, false).unwrap();
    println!("  Delete on the canvas -> {:?}", idle.action);
}
