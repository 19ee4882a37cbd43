//! Route tree, guards, loader, and the navigation pipeline.
//!
//! The tree has a root layout and two children:
//!
//! | Route        | Pattern | Guard                      | Loader        |
//! |--------------|---------|----------------------------|---------------|
//! | `Index`      | `/`     | host set → `/fs`           | -             |
//! | `FilesSplat` | `/*`    | host unset → `/?redirect=` | preload only  |
//!
//! A navigation attempt moves through [`NavPhase`]: the guard runs first; a
//! redirect ends the attempt, otherwise the loader runs and the route either
//! renders or fails. A newer attempt supersedes an older one, whose result is
//! dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::config::{MAX_REDIRECTS, REDIRECT_PARAM};
use crate::core::api::FilesSource;
use crate::core::error::RouteError;
use crate::core::host::HostStore;
use crate::core::query::QueryClient;
use crate::models::{AppRoute, Location, extract_path_parts};

// ============================================================================
// Route Tree
// ============================================================================

/// Children of the root layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteId {
    Index,
    FilesSplat,
}

/// Path pattern of a child route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches one path exactly
    Exact(&'static str),
    /// Matches any path, capturing it without the leading slash
    Splat,
}

impl PathPattern {
    /// `Some(splat)` on match; the splat is `None` for exact patterns.
    fn matches(&self, path: &str) -> Option<Option<String>> {
        let trimmed = path.trim_matches('/');
        match self {
            Self::Exact(pattern) => (pattern.trim_matches('/') == trimmed).then_some(None),
            Self::Splat => Some(Some(trimmed.to_string())),
        }
    }
}

/// Static description of a child route.
#[derive(Clone, Debug)]
pub struct RouteDef {
    pub id: RouteId,
    pub pattern: PathPattern,
    pub has_loader: bool,
}

/// Result of matching a path against the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub id: RouteId,
    pub splat: Option<String>,
}

/// Immutable route tree: the root layout with one level of children.
#[derive(Clone, Debug)]
pub struct RouteTree {
    children: Vec<RouteDef>,
}

impl RouteTree {
    pub fn new() -> Self {
        Self {
            children: vec![
                RouteDef {
                    id: RouteId::Index,
                    pattern: PathPattern::Exact("/"),
                    has_loader: false,
                },
                RouteDef {
                    id: RouteId::FilesSplat,
                    pattern: PathPattern::Splat,
                    has_loader: true,
                },
            ],
        }
    }

    /// Definition of the child a resolved route belongs to.
    pub fn def_of(&self, route: &AppRoute) -> Option<&RouteDef> {
        let id = match route {
            AppRoute::Index { .. } => RouteId::Index,
            AppRoute::Files { .. } => RouteId::FilesSplat,
        };
        self.children.iter().find(|def| def.id == id)
    }

    /// First child whose pattern matches `path`.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.children.iter().find_map(|def| {
            def.pattern
                .matches(path)
                .map(|splat| RouteMatch { id: def.id, splat })
        })
    }

    /// Match a location and validate its search parameters.
    pub fn resolve(&self, location: &Location) -> Option<AppRoute> {
        let matched = self.match_path(&location.path)?;
        match matched.id {
            RouteId::Index => Some(AppRoute::Index {
                redirect: location.search_param(REDIRECT_PARAM).map(str::to_string),
            }),
            RouteId::FilesSplat => Some(AppRoute::files(matched.splat.unwrap_or_default())),
        }
    }
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Context, Guards, Loader
// ============================================================================

/// Shared context handed to every guard and loader.
#[derive(Clone)]
pub struct RouterContext {
    pub query_client: QueryClient,
    pub host: Rc<dyn HostStore>,
    pub files: Rc<dyn FilesSource>,
}

/// Navigation target produced by a guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: AppRoute,
    /// Replace the current history entry instead of pushing
    pub replace: bool,
}

impl Redirect {
    /// Location the redirect leads to, on the same page as `from_href`.
    pub fn location_from(&self, from_href: &str) -> Location {
        self.to.location_on(from_href)
    }

    /// Update the browser URL.
    pub fn apply(&self) {
        if self.replace {
            self.to.replace();
        } else {
            self.to.push();
        }
    }
}

/// Guard verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(Redirect),
}

/// Index guard: a configured host skips the host form.
pub async fn index_guard(host: &dyn HostStore) -> GuardOutcome {
    match host.get() {
        Some(_) => GuardOutcome::Redirect(Redirect {
            to: AppRoute::default_files(),
            replace: true,
        }),
        None => GuardOutcome::Proceed,
    }
}

/// Files guard: without a host, send the user to the host form and carry
/// the requested URL along.
pub async fn files_guard(host: &dyn HostStore, location: &Location) -> GuardOutcome {
    match host.get() {
        Some(_) => GuardOutcome::Proceed,
        None => GuardOutcome::Redirect(Redirect {
            to: AppRoute::Index {
                redirect: Some(location.href.clone()),
            },
            replace: true,
        }),
    }
}

/// Files loader. Only primes the query cache, and only when preloading.
pub async fn files_loader(ctx: &RouterContext, splat: &str, preload: bool) -> Result<(), RouteError> {
    if !preload {
        return Ok(());
    }
    let parts = extract_path_parts(splat);
    let options = ctx.files.files_query(&parts);
    ctx.query_client.fetch_query(&options).await?;
    Ok(())
}

// ============================================================================
// Navigation
// ============================================================================

/// Phase of the current navigation attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    #[default]
    Idle,
    GuardEvaluating,
    Redirecting,
    Loading,
    Rendering,
    ErrorRendering,
}

/// Outcome of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Redirect(Redirect),
    Render(AppRoute),
    Failed { route: AppRoute, error: RouteError },
}

/// Runs navigation attempts against a route tree. Cheap to clone.
#[derive(Clone)]
pub struct Navigator {
    tree: Rc<RouteTree>,
    ctx: RouterContext,
    generation: Rc<Cell<u64>>,
    phase: Rc<Cell<NavPhase>>,
}

impl Navigator {
    pub fn new(tree: RouteTree, ctx: RouterContext) -> Self {
        Self {
            tree: Rc::new(tree),
            ctx,
            generation: Rc::new(Cell::new(0)),
            phase: Rc::new(Cell::new(NavPhase::Idle)),
        }
    }

    pub fn context(&self) -> &RouterContext {
        &self.ctx
    }

    pub fn phase(&self) -> NavPhase {
        self.phase.get()
    }

    /// Identifier of the most recently started attempt.
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Start a navigation attempt.
    ///
    /// The attempt is registered immediately, so any attempt started later
    /// supersedes this one even if this future has not been polled yet.
    /// Resolves to `None` when superseded.
    pub fn navigate(&self, location: Location) -> impl Future<Output = Option<Navigation>> + 'static {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        let this = self.clone();
        async move { this.run(ticket, location).await }
    }

    /// Navigate and follow guard redirects, calling `on_redirect` for each hop.
    pub async fn navigate_following<F>(&self, mut location: Location, on_redirect: F) -> Option<Navigation>
    where
        F: Fn(&Redirect),
    {
        for _ in 0..=MAX_REDIRECTS {
            let outcome = self.navigate(location.clone()).await?;
            let ticket = self.generation();
            match outcome {
                Navigation::Redirect(redirect) => {
                    on_redirect(&redirect);
                    // Another attempt started while the redirect was applied.
                    if !self.is_current(ticket) {
                        return None;
                    }
                    location = redirect.location_from(&location.href);
                }
                settled => return Some(settled),
            }
        }
        leptos::logging::warn!("redirect limit reached at {}", location.href);
        None
    }

    /// Speculatively run guard and loader ahead of a navigation.
    ///
    /// Only primes the query cache. Failures are logged and dropped; the
    /// real navigation surfaces them.
    pub async fn preload(&self, location: Location) {
        let Some(route) = self.tree.resolve(&location) else {
            return;
        };
        if let GuardOutcome::Redirect(_) = self.guard(&route, &location).await {
            return;
        }
        if let Err(err) = self.load(&route, true).await {
            leptos::logging::warn!("preload of {} failed: {}", location.path, err);
        }
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    fn enter(&self, ticket: u64, phase: NavPhase) -> Option<()> {
        if !self.is_current(ticket) {
            return None;
        }
        self.phase.set(phase);
        Some(())
    }

    async fn guard(&self, route: &AppRoute, location: &Location) -> GuardOutcome {
        match route {
            AppRoute::Index { .. } => index_guard(self.ctx.host.as_ref()).await,
            AppRoute::Files { .. } => files_guard(self.ctx.host.as_ref(), location).await,
        }
    }

    /// Run the route's loader, if its definition has one.
    async fn load(&self, route: &AppRoute, preload: bool) -> Result<(), RouteError> {
        if !self.tree.def_of(route).is_some_and(|def| def.has_loader) {
            return Ok(());
        }
        match route {
            AppRoute::Files { splat } => files_loader(&self.ctx, splat, preload).await,
            AppRoute::Index { .. } => Ok(()),
        }
    }

    async fn run(&self, ticket: u64, location: Location) -> Option<Navigation> {
        self.enter(ticket, NavPhase::GuardEvaluating)?;
        let route = self.tree.resolve(&location).unwrap_or_else(AppRoute::index);

        let outcome = self.guard(&route, &location).await;
        if let GuardOutcome::Redirect(redirect) = outcome {
            self.enter(ticket, NavPhase::Redirecting)?;
            return Some(Navigation::Redirect(redirect));
        }

        self.enter(ticket, NavPhase::Loading)?;
        match self.load(&route, false).await {
            Ok(()) => {
                self.enter(ticket, NavPhase::Rendering)?;
                Some(Navigation::Render(route))
            }
            Err(error) => {
                self.enter(ticket, NavPhase::ErrorRendering)?;
                Some(Navigation::Failed { route, error })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::core::error::FetchError;
    use crate::core::host::MemoryHostStore;
    use crate::core::query::QueryOptions;
    use crate::models::{FileListing, PathRef};

    const ORIGIN: &str = "http://localhost:8080/";

    fn at(hash: &str) -> Location {
        Location::parse(&format!("{}{}", ORIGIN, hash))
    }

    /// Files source recording every descriptor request and fetch.
    #[derive(Default)]
    struct RecordingFiles {
        requested: RefCell<Vec<PathRef>>,
        fetches: Rc<Cell<usize>>,
        status: Option<u16>,
    }

    impl FilesSource for RecordingFiles {
        fn files_query(&self, parts: &PathRef) -> QueryOptions<FileListing> {
            self.requested.borrow_mut().push(parts.clone());
            let fetches = Rc::clone(&self.fetches);
            let status = self.status;
            QueryOptions::new(vec!["files".to_string(), parts.remote.clone(), parts.path.clone()], move || {
                fetches.set(fetches.get() + 1);
                async move {
                    match status {
                        Some(code) => Err(FetchError::HttpError(code)),
                        None => Ok(FileListing::default()),
                    }
                }
            })
        }
    }

    fn context(host: Option<&str>, files: Rc<RecordingFiles>) -> RouterContext {
        RouterContext {
            query_client: QueryClient::new(),
            host: Rc::new(MemoryHostStore::new(host)),
            files,
        }
    }

    fn navigator(host: Option<&str>) -> (Navigator, Rc<RecordingFiles>) {
        let files = Rc::new(RecordingFiles::default());
        (Navigator::new(RouteTree::new(), context(host, files.clone())), files)
    }

    #[test]
    fn test_match_path() {
        let tree = RouteTree::new();
        assert_eq!(
            tree.match_path("/"),
            Some(RouteMatch { id: RouteId::Index, splat: None })
        );
        assert_eq!(
            tree.match_path("/anything/here"),
            Some(RouteMatch {
                id: RouteId::FilesSplat,
                splat: Some("anything/here".to_string()),
            })
        );
    }

    #[test]
    fn test_only_files_route_has_loader() {
        let tree = RouteTree::new();
        assert!(!tree.def_of(&AppRoute::index()).is_some_and(|d| d.has_loader));
        assert!(tree.def_of(&AppRoute::files("fs")).is_some_and(|d| d.has_loader));
    }

    #[test]
    fn test_resolve_validates_search() {
        let tree = RouteTree::new();
        assert_eq!(
            tree.resolve(&at("#/?redirect=http%3A%2F%2Fh%2F&junk=1")),
            Some(AppRoute::Index {
                redirect: Some("http://h/".to_string())
            })
        );
        assert_eq!(tree.resolve(&at("#/fs/a%20b")), Some(AppRoute::files("fs/a b")));
    }

    #[tokio::test]
    async fn test_files_without_host_redirects_to_index() {
        let (nav, files) = navigator(None);
        let location = at("#/remote1/a/b");

        let result = nav.navigate(location.clone()).await;
        assert_eq!(
            result,
            Some(Navigation::Redirect(Redirect {
                to: AppRoute::Index {
                    redirect: Some(location.href.clone())
                },
                replace: true,
            }))
        );
        assert_eq!(nav.phase(), NavPhase::Redirecting);
        assert!(files.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_index_with_host_redirects_to_files() {
        let (nav, _) = navigator(Some("http://localhost:5572"));

        let result = nav.navigate(at("#/")).await;
        assert_eq!(
            result,
            Some(Navigation::Redirect(Redirect {
                to: AppRoute::files("fs"),
                replace: true,
            }))
        );
    }

    #[tokio::test]
    async fn test_index_with_host_never_renders_form() {
        let (nav, _) = navigator(Some("http://localhost:5572"));
        let hops = RefCell::new(Vec::new());

        let result = nav
            .navigate_following(at("#/"), |r| hops.borrow_mut().push(r.to.clone()))
            .await;
        assert_eq!(result, Some(Navigation::Render(AppRoute::files("fs"))));
        assert_eq!(hops.into_inner(), vec![AppRoute::files("fs")]);
        assert_eq!(nav.phase(), NavPhase::Rendering);
    }

    #[tokio::test]
    async fn test_index_without_host_renders_form() {
        let (nav, _) = navigator(None);
        let result = nav.navigate(at("#/")).await;
        assert_eq!(result, Some(Navigation::Render(AppRoute::index())));
    }

    #[tokio::test]
    async fn test_redirect_round_trip_through_index() {
        let (nav, _) = navigator(None);
        let requested = at("#/gdrive/my%20docs");

        let result = nav.navigate_following(requested.clone(), |_| {}).await;
        assert_eq!(
            result,
            Some(Navigation::Render(AppRoute::Index {
                redirect: Some(requested.href),
            }))
        );
    }

    #[tokio::test]
    async fn test_preload_primes_cache_once() {
        let (nav, files) = navigator(Some("http://localhost:5572"));

        nav.preload(at("#/remote1/a/b")).await;
        assert_eq!(
            *files.requested.borrow(),
            vec![PathRef::new("remote1", "a/b")]
        );
        assert_eq!(files.fetches.get(), 1);
        // Preloading never moves the visible navigation.
        assert_eq!(nav.phase(), NavPhase::Idle);
    }

    #[tokio::test]
    async fn test_navigation_load_does_not_fetch() {
        let (nav, files) = navigator(Some("http://localhost:5572"));

        let result = nav.navigate(at("#/remote1/a/b")).await;
        assert_eq!(result, Some(Navigation::Render(AppRoute::files("remote1/a/b"))));
        assert!(files.requested.borrow().is_empty());
        assert_eq!(files.fetches.get(), 0);
    }

    #[tokio::test]
    async fn test_preload_without_host_skips_loader() {
        let (nav, files) = navigator(None);
        nav.preload(at("#/remote1/a")).await;
        assert!(files.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_loader_classifies_http_errors() {
        let files = Rc::new(RecordingFiles {
            status: Some(404),
            ..Default::default()
        });
        let ctx = context(Some("http://h"), files);
        assert_eq!(
            files_loader(&ctx, "fs/missing", true).await,
            Err(RouteError::InvalidPath)
        );

        let files = Rc::new(RecordingFiles {
            status: Some(500),
            ..Default::default()
        });
        let ctx = context(Some("http://h"), files);
        assert_eq!(
            files_loader(&ctx, "fs", true).await,
            Err(RouteError::Server)
        );
    }

    #[tokio::test]
    async fn test_newer_navigation_supersedes_older() {
        let (nav, _) = navigator(Some("http://localhost:5572"));

        let first = nav.navigate(at("#/fs/a"));
        let second = nav.navigate(at("#/fs/b"));

        assert_eq!(first.await, None);
        assert_eq!(second.await, Some(Navigation::Render(AppRoute::files("fs/b"))));
    }

    /// Host store that flips between set and unset on every read.
    struct FlippingHost {
        set: Cell<bool>,
    }

    impl HostStore for FlippingHost {
        fn get(&self) -> Option<String> {
            let set = !self.set.get();
            self.set.set(set);
            set.then(|| "http://localhost:5572".to_string())
        }

        fn set(&self, _host: &str) -> Result<(), crate::core::error::HostError> {
            Ok(())
        }

        fn clear(&self) -> Result<(), crate::core::error::HostError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_redirect_loop_stops_at_limit() {
        let ctx = RouterContext {
            query_client: QueryClient::new(),
            host: Rc::new(FlippingHost { set: Cell::new(false) }),
            files: Rc::new(RecordingFiles::default()),
        };
        let nav = Navigator::new(RouteTree::new(), ctx);
        let hops = RefCell::new(Vec::new());

        let result = nav
            .navigate_following(at("#/"), |r| hops.borrow_mut().push(r.to.clone()))
            .await;

        assert_eq!(result, None);
        let hops = hops.into_inner();
        assert_eq!(hops.len(), MAX_REDIRECTS + 1);
        assert_eq!(hops[0], AppRoute::files("fs"));
        assert!(matches!(hops[1], AppRoute::Index { redirect: Some(_) }));
    }

    #[tokio::test]
    async fn test_newer_navigation_stops_redirect_chain() {
        let (nav, _) = navigator(Some("http://localhost:5572"));
        let newer = nav.clone();
        let hops = Cell::new(0);

        let result = nav
            .navigate_following(at("#/"), |_| {
                hops.set(hops.get() + 1);
                let _ = newer.navigate(at("#/fs/other"));
            })
            .await;

        assert_eq!(result, None);
        assert_eq!(hops.get(), 1);
    }

    #[test]
    fn test_redirect_location_keeps_page() {
        let redirect = Redirect {
            to: AppRoute::files("fs"),
            replace: true,
        };
        let next = redirect.location_from("http://localhost:8080/app/#/?redirect=x");
        assert_eq!(next.href, "http://localhost:8080/app/#/fs");
        assert_eq!(next.path, "/fs");
    }
}
