//! # Navigation Shell
//!
//! Path → view mapping and bottom tab bar rules, independent of the router that
//! drives them in the browser.
//!
//! ## Routes
//!
//! | Path       | Route                 | Tab bar |
//! |------------|-----------------------|---------|
//! | `/`        | [`Route::Home`]       | shown   |
//! | `/market`  | [`Route::Market`]     | shown   |
//! | `/trade`   | [`Route::Trade`]      | shown   |
//! | `/assets`  | [`Route::Assets`]     | shown   |
//! | `/install` | [`Route::Install`]    | hidden  |
//! | other      | [`Route::NotFound`]   | shown   |
//!
//! Paths are matched after removing the deployment base path.

/// A view of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Market,
    Trade,
    Assets,
    Install,
    NotFound,
}

impl Route {
    /// Resolve an app-relative path (base already stripped).
    pub fn from_path(path: &str) -> Self {
        match normalize(path) {
            "/" => Route::Home,
            "/market" => Route::Market,
            "/trade" => Route::Trade,
            "/assets" => Route::Assets,
            "/install" => Route::Install,
            _ => Route::NotFound,
        }
    }

    /// App-relative path of the route; `None` for [`Route::NotFound`].
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Market => Some("/market"),
            Route::Trade => Some("/trade"),
            Route::Assets => Some("/assets"),
            Route::Install => Some("/install"),
            Route::NotFound => None,
        }
    }

    /// Full-screen routes render without the tab bar.
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Route::Install)
    }
}

/// Entry of the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab {
    pub route: Route,
    pub path: &'static str,
    pub label: &'static str,
}

pub const TABS: [Tab; 4] = [
    Tab { route: Route::Home, path: "/", label: "Home" },
    Tab { route: Route::Market, path: "/market", label: "Market" },
    Tab { route: Route::Trade, path: "/trade", label: "Trade" },
    Tab { route: Route::Assets, path: "/assets", label: "Assets" },
];

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Remove the deployment base (e.g. `/pwa/`) from a browser path.
///
/// Paths outside the base are returned unchanged.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

/// Tab highlight rule: `/` matches exactly, other tabs match their path and
/// anything below it. Full-screen routes highlight nothing.
pub fn is_tab_active(tab_path: &str, current_path: &str) -> bool {
    let current = normalize(current_path);
    if Route::from_path(current).is_full_screen() {
        return false;
    }
    if tab_path == "/" {
        return current == "/";
    }
    match current.strip_prefix(tab_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Current location as seen by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationShell {
    base: String,
    path: String,
    route: Route,
}

impl NavigationShell {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            path: "/".to_string(),
            route: Route::Home,
        }
    }

    /// Record a browser location change.
    pub fn navigate(&mut self, browser_path: &str) -> Route {
        let path = normalize(strip_base(browser_path, &self.base)).to_string();
        let route = Route::from_path(&path);
        if route != self.route {
            tracing::debug!(from = ?self.route, to = ?route, "Route changed");
        }
        self.path = path;
        self.route = route;
        route
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn shows_tab_bar(&self) -> bool {
        !self.route.is_full_screen()
    }

    pub fn active_tab(&self) -> Option<&'static Tab> {
        TABS.iter().find(|tab| is_tab_active(tab.path, &self.path))
    }

    /// Browser href for an app-relative path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }
}
