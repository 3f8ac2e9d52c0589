//! End-to-end browsing flows through the public API, using the built-in
//! catalog (47 books, 36 per page) unless a test supplies its own file.

use book_catalog::app::Choice;
use book_catalog::ui::list::RowKey;
use book_catalog::ui::theme::Rgb;
use book_catalog::ui::viewmodel::{HitTarget, OverlayInfo, LIST_TOP_LINE};
use book_catalog::{handle_event, initialize, AppState, Config, Event, ThemeVariant};
use std::io::Write;

fn startup() -> AppState {
    initialize(&Config::default())
}

fn search(state: &mut AppState, title: &str) {
    handle_event(state, &Event::OpenSearch);
    for c in title.chars() {
        handle_event(state, &Event::Char(c));
    }
    handle_event(state, &Event::SubmitSearch);
}

fn visible_titles(state: &AppState) -> Vec<String> {
    state.view.list.items().iter().map(|item| item.title.clone()).collect()
}

#[test]
fn startup_shows_first_page_of_builtin_catalog() {
    let state = startup();

    assert_eq!(state.catalog.books().len(), 47);
    assert_eq!(state.view.list.len(), 36);
    assert_eq!(state.view.list.show_more.label, "Show more (11)");
    assert!(!state.view.list.show_more.disabled);
    assert!(!state.view.list.empty_message_shown);

    let vm = state.compute_viewmodel(24, 100);
    assert_eq!(vm.header.title, " Book Catalog (47) ");
    assert_eq!(vm.rows[0].title, "Foundation");
    assert_eq!(vm.rows[0].author, "Isaac Asimov");
}

#[test]
fn show_more_reveals_the_rest() {
    let mut state = startup();
    handle_event(&mut state, &Event::ShowMore);

    assert_eq!(state.view.list.len(), 47);
    assert_eq!(state.session.cursor.pages(), 2);
    assert_eq!(visible_titles(&state)[36], "Frankenstein");
}

#[test]
fn title_search_is_case_insensitive_and_keeps_label() {
    let mut lower = startup();
    search(&mut lower, "dune");
    let mut upper = startup();
    search(&mut upper, "DUNE");

    assert_eq!(visible_titles(&lower), vec!["Dune", "Dune Messiah", "Children of Dune"]);
    assert_eq!(visible_titles(&lower), visible_titles(&upper));
    assert!(lower.view.list.show_more.disabled);
    assert_eq!(lower.view.list.show_more.label, "Show more (11)");
    assert!(lower.view.search.open);
}

#[test]
fn genre_and_author_narrow_together() {
    let mut state = startup();
    handle_event(&mut state, &Event::OpenSearch);
    handle_event(&mut state, &Event::NextField);
    handle_event(&mut state, &Event::CycleOption { forward: true });
    handle_event(&mut state, &Event::SubmitSearch);

    assert_eq!(state.session.criteria.genre, Choice::Id("g-scifi".into()));
    assert_eq!(state.session.matches.len(), 17);
    assert!(state.view.list.show_more.disabled);

    handle_event(&mut state, &Event::NextField);
    handle_event(&mut state, &Event::CycleOption { forward: true });
    handle_event(&mut state, &Event::SubmitSearch);

    assert_eq!(state.session.criteria.author, Choice::Id("a-asimov".into()));
    assert_eq!(
        visible_titles(&state),
        vec!["Foundation", "I, Robot", "The Caves of Steel", "The Gods Themselves", "The End of Eternity"]
    );
}

#[test]
fn empty_search_shows_message_then_recovers() {
    let mut state = startup();
    search(&mut state, "zzz no such book");

    assert!(state.view.list.is_empty());
    assert!(state.view.list.empty_message_shown);
    assert!(state.compute_viewmodel(24, 80).empty_state.is_some());

    for _ in 0.."zzz no such book".len() {
        handle_event(&mut state, &Event::Backspace);
    }
    handle_event(&mut state, &Event::SubmitSearch);

    assert_eq!(state.view.list.len(), 36);
    assert!(!state.view.list.empty_message_shown);
    assert!(!state.view.list.show_more.disabled);
}

#[test]
fn clicking_a_later_page_row_opens_that_book() {
    let mut state = startup();
    handle_event(&mut state, &Event::ShowMore);
    handle_event(&mut state, &Event::ItemClicked { row: RowKey(40) });

    let detail = state.view.detail.book.clone().unwrap();
    assert_eq!(detail.title, "Jane Eyre");
    assert_eq!(detail.author, "Charlotte Bronte");
    assert_eq!(detail.year, 1847);
    assert_eq!(detail.genres, vec!["Classics", "Romance"]);

    let vm = state.compute_viewmodel(30, 100);
    assert!(matches!(vm.overlay, Some(OverlayInfo::Detail(ref d)) if d.title == "Jane Eyre"));

    handle_event(&mut state, &Event::CloseDetail);
    assert!(!state.view.detail.open);
}

#[test]
fn clicks_resolve_through_the_drawn_frame() {
    let mut state = startup();
    let vm = state.compute_viewmodel(24, 80);

    let Some(HitTarget::Row(row)) = vm.hit_test(LIST_TOP_LINE + 2) else {
        panic!("expected a list row");
    };
    handle_event(&mut state, &Event::ItemClicked { row });
    assert_eq!(state.view.detail.book.as_ref().map(|d| d.title.as_str()), Some("The Caves of Steel"));

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.hit_test(LIST_TOP_LINE), None);
    handle_event(&mut state, &Event::CloseDetail);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.hit_test(vm.show_more.line), Some(HitTarget::ShowMore));
}

#[test]
fn settings_switch_between_day_and_night() {
    let mut state = initialize(&Config { color_scheme: Some("dark".into()), ..Config::default() });
    assert_eq!(state.view.settings.form.theme(), ThemeVariant::Night);
    assert_eq!(state.view.style.color_dark, Rgb::WHITE);
    assert_eq!(state.view.style.color_light, Rgb::NEAR_BLACK);

    handle_event(&mut state, &Event::OpenSettings);
    handle_event(&mut state, &Event::CycleOption { forward: true });
    handle_event(&mut state, &Event::SubmitSettings);

    assert!(!state.view.settings.open);
    assert_eq!(state.view.style.color_dark, Rgb::NEAR_BLACK);
    assert_eq!(state.view.style.color_light, Rgb::WHITE);
}

#[test]
fn catalog_file_replaces_builtin_catalog() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let books: Vec<String> = (0..5)
        .map(|i| {
            format!(
                r#"{{"id": "b{i}", "title": "Volume {i}", "author": "a1", "image": "",
                    "description": "Part {i}", "published": "2010-03-0{}T12:00:00.000Z", "genres": ["g1"]}}"#,
                i + 1
            )
        })
        .collect();
    write!(
        file,
        r#"{{"books_per_page": 2,
            "authors": [{{"id": "a1", "name": "Serial Writer"}}],
            "genres": [{{"id": "g1", "name": "Saga"}}],
            "books": [{}]}}"#,
        books.join(",")
    )
    .unwrap();

    let config = Config {
        catalog_file: Some(file.path().to_string_lossy().into_owned()),
        ..Config::default()
    };
    let mut state = initialize(&config);

    assert_eq!(state.catalog.books().len(), 5);
    assert_eq!(state.view.list.len(), 2);
    assert_eq!(state.view.list.show_more.label, "Show more (3)");

    handle_event(&mut state, &Event::ShowMore);
    handle_event(&mut state, &Event::ShowMore);
    assert_eq!(visible_titles(&state).last().map(String::as_str), Some("Volume 4"));

    handle_event(&mut state, &Event::ShowMore);
    assert_eq!(state.view.list.len(), 5);
    assert_eq!(state.session.cursor.pages(), 4);
}
