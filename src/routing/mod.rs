//! Client-side route table: URL paths to pages.

mod page;
mod pattern;
mod scroll;
mod table;

pub use page::Page;
pub use pattern::{Params, RoutePattern, pathname, split_path};
pub use scroll::{ScrollReset, Viewport};
pub use table::{RouteMatch, RouteTable};

use std::sync::OnceLock;

use crate::common::RouteError;

static ROUTES: OnceLock<RouteTable<Page>> = OnceLock::new();

/// Builds the application's route table from [`Page::ALL`].
pub fn build_routes() -> Result<RouteTable<Page>, RouteError> {
    RouteTable::from_entries(Page::ALL.into_iter().map(|page| (page.pattern(), page)))
}

pub fn app_routes() -> &'static RouteTable<Page> {
    ROUTES.get_or_init(|| build_routes().expect("Invalid built-in route table"))
}

/// Selects the page for a path, or `None` when nothing matches.
pub fn resolve(path: &str) -> Option<RouteMatch<Page>> {
    app_routes().resolve(path)
}

/// Concrete href for a page.
pub fn href(page: Page, params: &Params) -> Result<String, RouteError> {
    RoutePattern::parse(page.pattern())?.fill(params)
}

pub fn recipe_href(recipe_id: i64) -> String {
    format!("/recipes/{recipe_id}")
}

pub fn account_href(user_id: i64) -> String {
    format!("/users/{user_id}")
}
