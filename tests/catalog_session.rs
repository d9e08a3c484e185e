//! Drives the application layer against a catalog file on disk.

use std::io::Write;
use toolshelf::app::CatalogStatus;
use toolshelf::catalog::Catalog;
use toolshelf::{handle_event, initialize, Action, AppState, Config, Event, SortOption};

fn tool(id: &str, name: &str, category: &str, price: &str, rating: f64, features: &[&str]) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name": "{name}",
            "description": "{name} does things",
            "category": "{category}",
            "price": "{price}",
            "rating": {rating},
            "reviewCount": 100,
            "imageUrl": "https://img.example.com/{id}.png",
            "websiteUrl": "https://{id}.example.com",
            "features": {features},
            "pros": ["Fast"],
            "cons": ["Pricey"],
            "pricingDetails": "From $10/month",
            "dateAdded": "2024-02-01",
            "trending": false,
            "topRated": false
        }}"#,
        features = serde_json::to_string(features).unwrap()
    )
}

fn write_catalog(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(body.as_bytes()).unwrap();
    file
}

fn sample_catalog() -> tempfile::NamedTempFile {
    let tools = [
        tool("scribe", "Scribe", "writing-ai", "free", 4.1, &["Grammar"]),
        tool("echo", "Echo", "audio-ai", "paid", 4.6, &["Voice cloning", "Dubbing"]),
        tool("pixel", "Pixel", "image-ai", "freemium", 3.9, &["Upscaling"]),
    ];
    write_catalog(&format!(r#"{{"version": 1, "tools": [{}]}}"#, tools.join(",")))
}

fn send(state: &mut AppState, events: &[Event]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        let (_, emitted) = handle_event(state, event).unwrap();
        actions.extend(emitted);
    }
    actions
}

fn loaded_state(file: &tempfile::NamedTempFile) -> AppState {
    let config = Config {
        catalog_file: Some(file.path().to_string_lossy().into_owned()),
        sort: SortOption::TopRated,
        ..Config::default()
    };
    let mut state = initialize(&config);
    assert!(matches!(state.status, CatalogStatus::Loading { .. }));

    let result = Catalog::from_file(file.path()).map_err(|e| e.to_string());
    send(&mut state, &[Event::CatalogLoaded(result)]);
    state
}

#[test]
fn file_catalog_loads_with_configured_sort() {
    let file = sample_catalog();
    let state = loaded_state(&file);

    assert_eq!(state.status, CatalogStatus::Ready);
    assert_eq!(state.visible, vec!["echo", "scribe", "pixel"]);
    assert!(state.intro.is_visible());
}

#[test]
fn search_details_and_clear_all() {
    let file = sample_catalog();
    let mut state = loaded_state(&file);

    send(&mut state, &[Event::SearchMode]);
    for c in "VOICE".chars() {
        send(&mut state, &[Event::Char(c)]);
    }
    assert_eq!(state.visible, vec!["echo"]);
    assert!(!state.intro.is_visible());

    send(&mut state, &[Event::FocusResults, Event::OpenDetails]);
    assert_eq!(state.selection.id(), Some("echo"));

    let actions = send(&mut state, &[Event::OpenWebsite]);
    assert_eq!(
        actions,
        vec![Action::OpenWebsite {
            url: "https://echo.example.com".to_string()
        }]
    );

    send(&mut state, &[Event::CloseDetails, Event::ClearAll]);
    assert!(!state.selection.is_open());
    assert_eq!(state.filters.search, "");
    assert_eq!(state.visible.len(), 3);
    assert!(state.intro.is_visible());
}

#[test]
fn filter_bar_cycles_hide_and_restore_intro() {
    let file = sample_catalog();
    let mut state = loaded_state(&file);

    send(&mut state, &[Event::CyclePrice { forward: true }]);
    assert_eq!(state.visible, vec!["scribe"]);
    assert!(!state.intro.is_visible());

    send(&mut state, &[Event::CyclePrice { forward: false }]);
    assert_eq!(state.visible.len(), 3);
    assert!(state.intro.is_visible());
}

#[test]
fn duplicate_ids_fail_the_whole_file() {
    let body = format!(
        "[{}, {}]",
        tool("same", "One", "chatbots", "free", 4.0, &[]),
        tool("same", "Two", "chatbots", "free", 4.0, &[])
    );
    let file = write_catalog(&body);

    let err = Catalog::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("duplicate tool id: same"));

    let mut state = AppState::loading(file.path().to_string_lossy(), toolshelf::Theme::default());
    send(&mut state, &[Event::CatalogLoaded(Err(err.to_string()))]);
    assert!(matches!(state.status, CatalogStatus::Failed { .. }));

    let vm = state.compute_viewmodel(30, 100);
    let empty = vm.empty_state.unwrap();
    assert!(empty.is_error);
    assert!(state.visible.is_empty());
}

#[test]
fn unknown_category_rejects_the_file() {
    let file = write_catalog(&format!(
        "[{}]",
        tool("odd", "Odd", "robotics", "free", 4.0, &[])
    ));

    assert!(Catalog::from_file(file.path()).is_err());
}
