// 🎛️ Command dispatch - named user actions mapped onto the core
//
// Front ends (terminal, web, one-shot CLI) translate their own input events
// into an `Action` and hand it to `Browser::dispatch`. The browser owns the
// session: the catalog store, the card container and the screen state.

use crate::error::LoadError;
use crate::filter::{filter_by_text, filter_category, normalize_term, Category};
use crate::record::Record;
use crate::render::{CardContainer, Display};
use crate::screen::{Screen, ScreenController, ScreenState};
use crate::store::{CatalogSource, CatalogStore};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Shown when the catalog cannot be loaded
pub const LOAD_FAILURE_MESSAGE: &str = "Ops! Não foi possível carregar os personagens.";

/// Feedback for a search without results. `term` is shown normalized.
pub fn no_results_message(term: &str) -> String {
    format!(
        "Nenhum personagem encontrado com o termo \"{}\". Tente novamente!",
        term
    )
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Everything a user can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Intro screen "start" button: show the whole catalog
    Start,
    /// Back to the intro screen
    Home,
    /// Search field changed
    Search(String),
    /// "Real world" category button
    RealWorld,
    /// "Other world" category button
    OtherWorld,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Home => "home",
            Action::Search(_) => "search",
            Action::RealWorld => "real-world",
            Action::OtherWorld => "other-world",
        }
    }
}

impl From<Category> for Action {
    fn from(category: Category) -> Self {
        match category {
            Category::RealWorld => Action::RealWorld,
            Category::OtherWorld => Action::OtherWorld,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Search(term) => write!(f, "search({:?})", term),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses the no-argument button actions by name
impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "iniciar" => Ok(Action::Start),
            "home" | "inicio" | "início" => Ok(Action::Home),
            "real-world" | "mundo-real" => Ok(Action::RealWorld),
            "other-world" | "outro-mundo" => Ok(Action::OtherWorld),
            other => Err(format!("unknown action: {}", other)),
        }
    }
}

// ============================================================================
// BROWSER SESSION
// ============================================================================

/// One browsing session over a shared, load-once catalog
#[derive(Debug, Clone)]
pub struct Browser {
    store: Arc<CatalogStore>,
    container: CardContainer,
    screen: ScreenState,
}

impl Browser {
    /// Fresh session over an empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(CatalogStore::new()))
    }

    /// Session over a store that may already be loaded (shared by the server)
    pub fn with_store(store: Arc<CatalogStore>) -> Self {
        Browser {
            store,
            container: CardContainer::new(),
            screen: ScreenState::new(),
        }
    }

    /// Load the catalog. On failure the fixed failure message is shown on
    /// the catalog screen and the error is returned; nothing is retried.
    pub fn load(&mut self, source: &impl CatalogSource) -> Result<usize, LoadError> {
        let result = self.store.load(source).map(<[Record]>::len);
        self.report_load(result)
    }

    /// Same as `load`, for a document fetched elsewhere
    pub fn load_str(&mut self, json: &str) -> Result<usize, LoadError> {
        let result = self.store.load_str(json).map(<[Record]>::len);
        self.report_load(result)
    }

    fn report_load(&mut self, result: Result<usize, LoadError>) -> Result<usize, LoadError> {
        match &result {
            // Re-entry leaves the session exactly as it was
            Err(LoadError::AlreadyLoaded) => warn!("catalog load called again, ignored"),
            Err(e) => {
                error!("failed to load catalog: {}", e);
                self.show_load_failure();
            }
            Ok(_) => {}
        }
        result
    }

    /// Present the load failure message, e.g. in a session opened over a
    /// store whose load already failed
    pub fn show_load_failure(&mut self) {
        self.container.render_message(LOAD_FAILURE_MESSAGE, &mut self.screen);
    }

    /// Run one user action and return what is displayed afterwards
    pub fn dispatch(&mut self, action: Action) -> &Display {
        debug!(action = %action, "dispatch");

        match action {
            Action::Start => {
                self.screen.show_catalog();
                let all: Vec<&Record> = self.store.get_all().iter().collect();
                self.container.render(&all);
            }
            Action::Home => self.screen.show_intro(),
            Action::Search(term) => self.search(&term),
            Action::RealWorld => self.show_category(Category::RealWorld),
            Action::OtherWorld => self.show_category(Category::OtherWorld),
        }

        self.container.display()
    }

    fn search(&mut self, term: &str) {
        let normalized = normalize_term(term);
        if normalized.is_empty() {
            self.container.render(&[]);
            return;
        }

        let found = filter_by_text(self.store.get_all(), &normalized);
        if found.is_empty() {
            self.container
                .render_message(no_results_message(&normalized), &mut self.screen);
        } else {
            self.container.render(&found);
        }
    }

    fn show_category(&mut self, category: Category) {
        self.screen.show_catalog();
        let found = filter_category(self.store.get_all(), category);
        self.container.render(&found);
    }

    pub fn display(&self) -> &Display {
        self.container.display()
    }

    pub fn screen(&self) -> Screen {
        self.screen.current()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
