// SPDX-License-Identifier: MPL-2.0
//! Route table and matching.
//!
//! The table mirrors the shape of a client-side admin router: business
//! records nested under a layout parent, standalone error pages, and a
//! terminal catch-all that redirects everything unmatched to the
//! not-found page. Matching is synchronous and in-memory; a navigation
//! either settles on a record or degrades to the not-found path.

pub mod title;

use tracing::{debug, warn};

/// Sentinel path matching any otherwise-unmatched navigation.
pub const CATCH_ALL: &str = "/:pathMatch(.*)*";

/// Path of the not-found page.
pub const NOT_FOUND_PATH: &str = "/404";

/// Redirect chains longer than this are treated as cycles.
const MAX_REDIRECT_HOPS: usize = 8;

/// A loosely typed metadata value.
///
/// Route declarations are data, and data sometimes carries a title that
/// is not a string; the title hook treats anything but `Str` as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Str(String),
    Num(i64),
    Flag(bool),
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Str(value.to_string())
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        MetaValue::Num(value)
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Flag(value)
    }
}

/// Declarative metadata attached to a route record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Translation key of the page title.
    pub title: Option<MetaValue>,
    /// Named transition to play when entering the route.
    pub transition: Option<String>,
    /// Whether menus should skip this record.
    pub hidden: bool,
}

/// Identifier of the view a record renders. The views themselves live
/// outside this scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef(String);

impl ViewRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// One declared route.
///
/// Children compose their paths under the parent, so a layout parent at
/// `/` with a child at `""` matches `/` with the child's metadata.
#[derive(Debug, Clone, Default)]
pub struct RouteRecord {
    pub path: String,
    pub name: Option<String>,
    pub view: Option<ViewRef>,
    pub meta: RouteMeta,
    pub redirect: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn view(mut self, view: ViewRef) -> Self {
        self.view = Some(view);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<MetaValue>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: impl Into<String>) -> Self {
        self.meta.transition = Some(transition.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.meta.hidden = true;
        self
    }

    #[must_use]
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The path the navigation settled on.
    pub path: String,
    pub name: Option<String>,
    pub meta: RouteMeta,
    /// Whether at least one redirect was followed on the way.
    pub redirected: bool,
}

struct FlatRoute {
    segments: Vec<String>,
    catch_all: bool,
    name: Option<String>,
    meta: RouteMeta,
    redirect: Option<String>,
}

/// The route table with its flattened matching index.
pub struct Router {
    routes: Vec<RouteRecord>,
    flat: Vec<FlatRoute>,
}

impl Router {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        let mut flat = Vec::new();
        flatten_into(&routes, &[], &mut flat);
        Self { routes, flat }
    }

    /// The shipped table: layout group, standalone error page, terminal
    /// catch-all redirect.
    #[must_use]
    pub fn with_default_routes() -> Self {
        Self::new(default_routes())
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Resolves `path`, chasing redirects.
    ///
    /// Unmatched paths behave as the table's catch-all dictates; a table
    /// without a catch-all, a dangling redirect, or a redirect cycle all
    /// degrade to the not-found path with empty metadata rather than
    /// erroring or looping.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let mut segments = split_segments(path);
        let mut redirected = false;
        for _ in 0..=MAX_REDIRECT_HOPS {
            let Some(route) = self.lookup(&segments) else {
                break;
            };
            if let Some(target) = &route.redirect {
                debug!(from = %format_path(&segments), to = %target, "following redirect");
                redirected = true;
                segments = split_segments(target);
                continue;
            }
            return Resolution {
                path: format_path(&segments),
                name: route.name.clone(),
                meta: route.meta.clone(),
                redirected,
            };
        }
        warn!(path, "navigation did not settle; degrading to the not-found path");
        Resolution {
            path: NOT_FOUND_PATH.to_string(),
            name: None,
            meta: RouteMeta::default(),
            redirected: true,
        }
    }

    fn lookup(&self, segments: &[String]) -> Option<&FlatRoute> {
        self.flat
            .iter()
            .find(|route| !route.catch_all && route.segments == segments)
            .or_else(|| self.flat.iter().find(|route| route.catch_all))
    }
}

/// The route configuration the application ships with.
#[must_use]
pub fn default_routes() -> Vec<RouteRecord> {
    vec![
        // Business records live under the layout parent.
        RouteRecord::new("/")
            .view(ViewRef::new("layout/index"))
            .children(vec![RouteRecord::new("")
                .named("Dashboard")
                .view(ViewRef::new("dashboard/index"))
                .title("route.dashboard")]),
        // Standalone pages, no layout.
        RouteRecord::new(NOT_FOUND_PATH)
            .named("NotFound")
            .view(ViewRef::new("error-page/404"))
            .title("route.notFound"),
        // Terminal fallback.
        RouteRecord::new(CATCH_ALL).redirect_to(NOT_FOUND_PATH),
    ]
}

fn flatten_into(records: &[RouteRecord], parent: &[String], out: &mut Vec<FlatRoute>) {
    for record in records {
        if record.path == CATCH_ALL {
            out.push(FlatRoute {
                segments: Vec::new(),
                catch_all: true,
                name: record.name.clone(),
                meta: record.meta.clone(),
                redirect: record.redirect.clone(),
            });
            continue;
        }
        let mut segments = parent.to_vec();
        segments.extend(split_segments(&record.path));
        if record.children.is_empty() || record.redirect.is_some() {
            out.push(FlatRoute {
                segments: segments.clone(),
                catch_all: false,
                name: record.name.clone(),
                meta: record.meta.clone(),
                redirect: record.redirect.clone(),
            });
        }
        flatten_into(&record.children, &segments, out);
    }
}

fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn format_path(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
