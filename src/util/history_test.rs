use super::*;

use std::cell::RefCell;

use nav::table::app_routes;

/// Recording stand-in for `use_navigate`'s closure.
struct Recorded {
    calls: RefCell<Vec<(String, bool)>>,
}

impl Recorded {
    fn new() -> Self {
        Self { calls: RefCell::new(Vec::new()) }
    }

    fn navigate(&self) -> impl Fn(&str, NavigateOptions) + '_ {
        |path, options| {
            self.calls.borrow_mut().push((path.to_owned(), options.replace));
        }
    }
}

// =============================================================
// reset_to
// =============================================================

#[test]
fn reset_to_replaces_the_current_entry() {
    let recorded = Recorded::new();
    reset_to(&recorded.navigate(), "/login");
    assert_eq!(*recorded.calls.borrow(), vec![("/login".to_owned(), true)]);
}

// =============================================================
// reset_to_named
// =============================================================

#[test]
fn reset_to_named_builds_the_path_from_the_table() {
    let recorded = Recorded::new();
    let table = app_routes();
    reset_to_named(&recorded.navigate(), &table, "note", &[("noteId", "n-1")]);
    assert_eq!(*recorded.calls.borrow(), vec![("/sandbox/notes/n-1".to_owned(), true)]);
}

#[test]
fn reset_to_named_encodes_parameter_values() {
    let recorded = Recorded::new();
    let table = app_routes();
    reset_to_named(&recorded.navigate(), &table, "deck", &[("deckId", "unit 1")]);
    assert_eq!(*recorded.calls.borrow(), vec![("/sandbox/cards/unit%201".to_owned(), true)]);
}

#[test]
fn reset_to_named_unknown_name_stays_put() {
    let recorded = Recorded::new();
    let table = app_routes();
    reset_to_named(&recorded.navigate(), &table, "lost", &[]);
    assert!(recorded.calls.borrow().is_empty());
}

#[test]
fn reset_to_named_missing_param_stays_put() {
    let recorded = Recorded::new();
    let table = app_routes();
    reset_to_named(&recorded.navigate(), &table, "note", &[]);
    assert!(recorded.calls.borrow().is_empty());
}
