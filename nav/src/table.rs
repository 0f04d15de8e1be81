//! The declarative route tree and its matching rules.
//!
//! DESIGN
//! ======
//! Routes form an ordered tree. Each node owns one path segment pattern, and
//! a path matches by strict hierarchical descent: the parent segment must
//! match before children are consulted, and the first structurally matching
//! sibling commits with no backtracking. The table is non-overlapping by
//! construction (one param sibling at most per level, behind the literals),
//! so commit-on-first-match never loses a route.
//!
//! The same tree drives reverse lookup: every node carries a stable name, and
//! [`RouteTable::path_for`] rebuilds the path from the root chain, so links
//! never hardcode path strings.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::path::{decode_component, encode_component};

/// Rendering target for a matched route.
///
/// The app layer maps each variant onto a page component; this crate never
/// renders anything itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Signup,
    ForgotPassword,
    SandboxHome,
    Calendar,
    Todo,
    Notes,
    Whiteboard,
    Cards,
    SettingsHome,
    Profile,
    Subscription,
    Preferences,
}

impl Screen {
    /// Document title shown while this screen is up.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Splash => "Satchel",
            Self::Login => "Sign in",
            Self::Signup => "Create account",
            Self::ForgotPassword => "Reset password",
            Self::SandboxHome => "Sandbox",
            Self::Calendar => "Calendar",
            Self::Todo => "Todo",
            Self::Notes => "Notes",
            Self::Whiteboard => "Whiteboard",
            Self::Cards => "Flashcards",
            Self::SettingsHome => "Settings",
            Self::Profile => "Profile",
            Self::Subscription => "Subscription",
            Self::Preferences => "Preferences",
        }
    }
}

/// One path segment pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches exactly this segment. The empty literal is the index node and
    /// matches only the bare `/` path.
    Literal(&'static str),
    /// Matches any single non-empty segment and binds it under this key.
    Param(&'static str),
}

impl Pattern {
    fn matches(self, segment: &str) -> bool {
        match self {
            Self::Literal(literal) => !literal.is_empty() && literal == segment,
            Self::Param(_) => !segment.is_empty(),
        }
    }
}

/// A node in the route tree.
#[derive(Clone, Debug)]
pub struct Route {
    pattern: Pattern,
    name: &'static str,
    screen: Screen,
    children: Vec<Route>,
}

impl Route {
    /// A leaf matching the literal `segment`.
    #[must_use]
    pub fn literal(segment: &'static str, name: &'static str, screen: Screen) -> Self {
        Self {
            pattern: Pattern::Literal(segment),
            name,
            screen,
            children: Vec::new(),
        }
    }

    /// A leaf matching any single segment, binding it under `key`.
    #[must_use]
    pub fn param(key: &'static str, name: &'static str, screen: Screen) -> Self {
        Self {
            pattern: Pattern::Param(key),
            name,
            screen,
            children: Vec::new(),
        }
    }

    /// Attach child routes, consulted only after this node matched.
    #[must_use]
    pub fn children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }
}

/// Path parameters captured while descending the tree, in binding order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    bindings: Vec<(&'static str, String)>,
}

impl Params {
    /// The value bound under `key`, already percent-decoded.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the match captured any parameter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A successful match: what to render and what the path bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub screen: Screen,
    pub name: &'static str,
    pub params: Params,
}

/// The ordered forest of top-level routes.
#[derive(Clone, Debug)]
pub struct RouteTable {
    roots: Vec<Route>,
}

impl RouteTable {
    /// Resolve `path` to a screen and its bound parameters.
    ///
    /// Returns `None` when no route covers the path, including paths that run
    /// deeper than the tree. Trailing slashes and repeated separators are
    /// tolerated; captured segments come back percent-decoded.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        Self::descend(&self.roots, &segments, Params::default())
    }

    fn descend(nodes: &[Route], segments: &[&str], mut params: Params) -> Option<RouteMatch> {
        let Some((head, rest)) = segments.split_first() else {
            // Out of segments: only an index node can match here.
            return nodes
                .iter()
                .find(|node| node.pattern == Pattern::Literal(""))
                .map(|node| RouteMatch {
                    screen: node.screen,
                    name: node.name,
                    params,
                });
        };

        let node = nodes.iter().find(|node| node.pattern.matches(head))?;
        if let Pattern::Param(key) = node.pattern {
            params.bindings.push((key, decode_component(head)));
        }
        if rest.is_empty() {
            Some(RouteMatch {
                screen: node.screen,
                name: node.name,
                params,
            })
        } else {
            Self::descend(&node.children, rest, params)
        }
    }

    /// Build the path for the route named `name`, substituting parameters.
    ///
    /// Returns `None` when the name is unknown or a required parameter is
    /// missing from `params`. Surplus pairs are ignored and values are
    /// percent-encoded into their segment.
    #[must_use]
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        let mut chain = Vec::new();
        if !Self::find_named(&self.roots, name, &mut chain) {
            return None;
        }
        let mut segments = Vec::new();
        for pattern in chain {
            match pattern {
                Pattern::Literal("") => {}
                Pattern::Literal(literal) => segments.push(literal.to_owned()),
                Pattern::Param(key) => {
                    let (_, value) = params.iter().find(|(candidate, _)| *candidate == key)?;
                    segments.push(encode_component(value));
                }
            }
        }
        Some(format!("/{}", segments.join("/")))
    }

    fn find_named(nodes: &[Route], name: &str, chain: &mut Vec<Pattern>) -> bool {
        for node in nodes {
            chain.push(node.pattern);
            if node.name == name || Self::find_named(&node.children, name, chain) {
                return true;
            }
            chain.pop();
        }
        false
    }
}

/// The full Satchel route table.
///
/// Paths, names, and parameter keys declared here are the single source of
/// truth; the Leptos route declarations in the app crate mirror them and the
/// table tests keep the two honest.
#[must_use]
pub fn app_routes() -> RouteTable {
    RouteTable {
        roots: vec![
            Route::literal("", "splash", Screen::Splash),
            Route::literal("login", "login", Screen::Login),
            Route::literal("signup", "signup", Screen::Signup),
            Route::literal("forgot-password", "forgot-password", Screen::ForgotPassword),
            Route::literal("sandbox", "sandbox", Screen::SandboxHome).children(vec![
                Route::literal("calendar", "calendar", Screen::Calendar)
                    .children(vec![Route::param("eventId", "calendar-event", Screen::Calendar)]),
                Route::literal("todo", "todo", Screen::Todo)
                    .children(vec![Route::param("listId", "todo-list", Screen::Todo)]),
                Route::literal("notes", "notes", Screen::Notes)
                    .children(vec![Route::param("noteId", "note", Screen::Notes)]),
                Route::literal("whiteboard", "whiteboard", Screen::Whiteboard)
                    .children(vec![Route::param("boardId", "board", Screen::Whiteboard)]),
                Route::literal("cards", "cards", Screen::Cards)
                    .children(vec![Route::param("deckId", "deck", Screen::Cards)]),
            ]),
            Route::literal("settings", "settings", Screen::SettingsHome).children(vec![
                Route::literal("profile", "profile", Screen::Profile),
                Route::literal("subscription", "subscription", Screen::Subscription),
                Route::literal("preferences", "preferences", Screen::Preferences),
            ]),
        ],
    }
}
