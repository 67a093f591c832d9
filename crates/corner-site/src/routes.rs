// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Static route table keyed by URL fragment.

/// Page bodies the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// About the crew.
    About,
    /// Post listing / post detail.
    Blog,
    /// Contact details.
    Contact,
    /// Fallback for unknown fragments.
    NotFound,
}

/// One entry of the route table.
#[derive(Debug, PartialEq, Eq)]
pub struct Route {
    /// Exact fragment, including the leading `#`.
    pub fragment: &'static str,
    /// Display name (nav label, heading, title prefix).
    pub name: &'static str,
    /// Page body.
    pub page: Page,
}

/// Navigable routes, in nav order.
pub static ROUTES: [Route; 4] = [
    Route {
        fragment: "#/",
        name: "Home",
        page: Page::Home,
    },
    Route {
        fragment: "#/about",
        name: "About",
        page: Page::About,
    },
    Route {
        fragment: "#/blog",
        name: "Blog",
        page: Page::Blog,
    },
    Route {
        fragment: "#/contact",
        name: "Contact",
        page: Page::Contact,
    },
];

/// Returned for any fragment not in [`ROUTES`].
pub static NOT_FOUND: Route = Route {
    fragment: "",
    name: "Page not found",
    page: Page::NotFound,
};

/// Exact-match lookup; no normalization, prefix matching or query handling.
pub fn resolve(fragment: &str) -> &'static Route {
    ROUTES
        .iter()
        .find(|route| route.fragment == fragment)
        .unwrap_or(&NOT_FOUND)
}

/// Lookup used at startup: an empty hash (or a bare `#`) lands on Home.
pub fn resolve_initial(hash: &str) -> &'static Route {
    if hash.len() < 2 {
        return &ROUTES[0];
    }
    resolve(hash)
}

/// Document title for a route: `"<route name> - <app name>"`.
pub fn page_title(route: &Route, app_name: &str) -> String {
    format!("{} - {}", route.name, app_name)
}
