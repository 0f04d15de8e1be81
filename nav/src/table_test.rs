use super::*;

fn table() -> RouteTable {
    app_routes()
}

fn match_screen(path: &str) -> Option<Screen> {
    table().match_path(path).map(|m| m.screen)
}

// --- matching: top level ---

#[test]
fn root_path_matches_splash() {
    let hit = table().match_path("/").expect("root should match");
    assert_eq!(hit.screen, Screen::Splash);
    assert_eq!(hit.name, "splash");
    assert!(hit.params.is_empty());
}

#[test]
fn auth_pages_match() {
    assert_eq!(match_screen("/login"), Some(Screen::Login));
    assert_eq!(match_screen("/signup"), Some(Screen::Signup));
    assert_eq!(match_screen("/forgot-password"), Some(Screen::ForgotPassword));
}

#[test]
fn sandbox_home_matches() {
    let hit = table().match_path("/sandbox").expect("sandbox should match");
    assert_eq!(hit.screen, Screen::SandboxHome);
    assert!(hit.params.is_empty());
}

#[test]
fn settings_tree_matches() {
    assert_eq!(match_screen("/settings"), Some(Screen::SettingsHome));
    assert_eq!(match_screen("/settings/profile"), Some(Screen::Profile));
    assert_eq!(match_screen("/settings/subscription"), Some(Screen::Subscription));
    assert_eq!(match_screen("/settings/preferences"), Some(Screen::Preferences));
}

// --- matching: sandbox modules ---

#[test]
fn module_index_matches_without_params() {
    let hit = table().match_path("/sandbox/calendar").expect("calendar should match");
    assert_eq!(hit.screen, Screen::Calendar);
    assert_eq!(hit.name, "calendar");
    assert!(hit.params.is_empty());
}

#[test]
fn module_paths_bind_their_parameter() {
    let cases = [
        ("/sandbox/calendar/ev42", "eventId", "ev42", Screen::Calendar),
        ("/sandbox/todo/groceries", "listId", "groceries", Screen::Todo),
        ("/sandbox/notes/abc123", "noteId", "abc123", Screen::Notes),
        ("/sandbox/whiteboard/b7", "boardId", "b7", Screen::Whiteboard),
        ("/sandbox/cards/deck-1", "deckId", "deck-1", Screen::Cards),
    ];
    for (path, key, value, screen) in cases {
        let hit = table().match_path(path).expect("module path should match");
        assert_eq!(hit.screen, screen, "screen for {path}");
        assert_eq!(hit.params.get(key), Some(value), "param for {path}");
    }
}

#[test]
fn captured_segments_are_percent_decoded() {
    let hit = table()
        .match_path("/sandbox/notes/meeting%20notes")
        .expect("encoded segment should match");
    assert_eq!(hit.params.get("noteId"), Some("meeting notes"));
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(match_screen("/sandbox/calendar/"), Some(Screen::Calendar));
    assert_eq!(match_screen("/settings/"), Some(Screen::SettingsHome));
}

#[test]
fn repeated_separators_are_tolerated() {
    assert_eq!(match_screen("//sandbox//notes"), Some(Screen::Notes));
}

// --- matching: misses ---

#[test]
fn unknown_top_level_path_does_not_match() {
    assert_eq!(match_screen("/nope"), None);
}

#[test]
fn unknown_module_does_not_match() {
    assert_eq!(match_screen("/sandbox/music"), None);
}

#[test]
fn paths_deeper_than_the_tree_do_not_match() {
    assert_eq!(match_screen("/sandbox/notes/abc/extra"), None);
    assert_eq!(match_screen("/settings/profile/extra"), None);
}

#[test]
fn module_segments_require_their_parent() {
    assert_eq!(match_screen("/calendar"), None);
    assert_eq!(match_screen("/notes/abc"), None);
}

// --- matching: commit semantics ---

#[test]
fn first_matching_sibling_wins() {
    let table = RouteTable {
        roots: vec![
            Route::literal("a", "lit", Screen::Notes),
            Route::param("x", "capture", Screen::Todo),
        ],
    };
    let hit = table.match_path("/a").expect("literal should win");
    assert_eq!(hit.name, "lit");
    let hit = table.match_path("/b").expect("param should take the rest");
    assert_eq!(hit.name, "capture");
    assert_eq!(hit.params.get("x"), Some("b"));
}

#[test]
fn committed_branches_are_not_revisited() {
    // Once "a" commits to the first sibling, a miss among its children fails
    // the whole match instead of falling through to the catch-all param.
    let table = RouteTable {
        roots: vec![
            Route::literal("a", "first", Screen::Notes)
                .children(vec![Route::literal("b", "first-b", Screen::Notes)]),
            Route::param("x", "catch-all", Screen::Todo)
                .children(vec![Route::literal("z", "catch-z", Screen::Todo)]),
        ],
    };
    assert_eq!(table.match_path("/a/z"), None);
    assert!(table.match_path("/other/z").is_some());
}

// --- table shape ---

fn walk(nodes: &[Route], visit: &mut impl FnMut(&Route)) {
    for node in nodes {
        visit(node);
        walk(&node.children, visit);
    }
}

#[test]
fn route_names_are_unique() {
    let table = table();
    let mut names = Vec::new();
    walk(&table.roots, &mut |node| names.push(node.name));
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len(), "duplicate route name in table");
}

#[test]
fn sibling_patterns_do_not_overlap() {
    fn check(nodes: &[Route]) {
        let mut literals = Vec::new();
        let mut param_count = 0;
        for node in nodes {
            match node.pattern {
                Pattern::Literal(literal) => literals.push(literal),
                Pattern::Param(_) => param_count += 1,
            }
            check(&node.children);
        }
        let mut deduped = literals.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), literals.len(), "duplicate literal sibling");
        assert!(param_count <= 1, "more than one param sibling");
    }
    check(&table().roots);
}

#[test]
fn every_screen_has_a_title() {
    let table = table();
    let mut titles = Vec::new();
    walk(&table.roots, &mut |node| titles.push(node.screen.title()));
    assert!(titles.iter().all(|t| !t.is_empty()));
}

// --- reverse lookup ---

#[test]
fn path_for_static_routes() {
    let table = table();
    assert_eq!(table.path_for("splash", &[]), Some("/".to_owned()));
    assert_eq!(table.path_for("login", &[]), Some("/login".to_owned()));
    assert_eq!(table.path_for("sandbox", &[]), Some("/sandbox".to_owned()));
    assert_eq!(table.path_for("profile", &[]), Some("/settings/profile".to_owned()));
}

#[test]
fn path_for_substitutes_parameters() {
    let table = table();
    assert_eq!(
        table.path_for("note", &[("noteId", "abc123")]),
        Some("/sandbox/notes/abc123".to_owned())
    );
    assert_eq!(
        table.path_for("deck", &[("deckId", "physics")]),
        Some("/sandbox/cards/physics".to_owned())
    );
}

#[test]
fn path_for_encodes_parameter_values() {
    let table = table();
    assert_eq!(
        table.path_for("note", &[("noteId", "a/b c")]),
        Some("/sandbox/notes/a%2Fb%20c".to_owned())
    );
}

#[test]
fn path_for_ignores_surplus_parameters() {
    let table = table();
    assert_eq!(
        table.path_for("todo", &[("listId", "unused")]),
        Some("/sandbox/todo".to_owned())
    );
}

#[test]
fn path_for_missing_parameter_is_none() {
    assert_eq!(table().path_for("note", &[]), None);
}

#[test]
fn path_for_unknown_name_is_none() {
    assert_eq!(table().path_for("lost", &[]), None);
}

#[test]
fn path_for_round_trips_through_match() {
    let table = table();
    let names = [
        ("calendar-event", &[("eventId", "ev1")][..]),
        ("todo-list", &[("listId", "l1")][..]),
        ("note", &[("noteId", "n1")][..]),
        ("board", &[("boardId", "b1")][..]),
        ("deck", &[("deckId", "d1")][..]),
        ("settings", &[][..]),
    ];
    for (name, params) in names {
        let path = table.path_for(name, params).expect("named route should build");
        let hit = table.match_path(&path).expect("built path should match");
        assert_eq!(hit.name, name, "round trip for {name}");
    }
}
