use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};

use crate::catalog::{self, Article, Product};
use crate::chat::Assistant;
use crate::config::Config;
use crate::forms::ProfileForm;
use crate::routes::{self, Route};
use crate::store::{Ledger, Stores};

/// Quick contribution amounts offered on the Goals screen.
pub(crate) const CONTRIBUTION_PRESETS: &[u32] = &[5, 10, 25];

/// Longest the event loop waits for input before re-checking timers.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Auth,
    Dashboard,
    Expenses,
    Goals,
    Business,
    Challenges,
    News,
    Chat,
    Profile,
}

impl Screen {
    /// Screens reachable from the tab bar, in tab order.
    pub(crate) fn tabs() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Expenses,
            Self::Goals,
            Self::Business,
            Self::Challenges,
            Self::News,
            Self::Chat,
            Self::Profile,
        ]
    }

    pub(crate) fn route(&self) -> Route {
        match self {
            Self::Auth => Route::Auth,
            Self::Dashboard => Route::Dashboard,
            Self::Expenses => Route::Expenses,
            Self::Goals => Route::Goals,
            Self::Business => Route::Business,
            Self::Challenges => Route::Challenges,
            Self::News => Route::News,
            Self::Chat => Route::Chat,
            Self::Profile => Route::Profile,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "Sign In"),
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Goals => write!(f, "Goals"),
            Self::Business => write!(f, "Business"),
            Self::Challenges => write!(f, "Challenges"),
            Self::News => write!(f, "News"),
            Self::Chat => write!(f, "AI Chat"),
            Self::Profile => write!(f, "Profile"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Compose,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Compose => write!(f, "CHAT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    Logout,
    CancelReplies { count: usize },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) compose_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) today: NaiveDate,

    pub(crate) stores: Stores,
    pub(crate) assistant: Assistant,

    // Expenses
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Goals
    pub(crate) goal_index: usize,
    pub(crate) preset_index: usize,

    // Business
    pub(crate) product_category: &'static str,
    pub(crate) product_index: usize,
    pub(crate) open_product: Option<u32>,

    // News
    pub(crate) news_category: &'static str,
    pub(crate) news_index: usize,

    // Chat
    pub(crate) quick_question_index: usize,

    // Profile; `Some` while the edit form is open
    pub(crate) profile_draft: Option<ProfileForm>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(stores: Stores, config: &Config) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Auth,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            compose_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today: Local::now().date_naive(),

            stores,
            assistant: Assistant::new(&config.chat),

            transaction_index: 0,
            transaction_scroll: 0,

            goal_index: 0,
            preset_index: 0,

            product_category: catalog::ALL,
            product_index: 0,
            open_product: None,

            news_category: catalog::ALL,
            news_index: 0,

            quick_question_index: 0,

            profile_draft: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.navigate(Route::Dashboard);
        app
    }

    pub(crate) fn ledger(&self) -> &Ledger {
        self.stores.ledger.snapshot()
    }

    /// Show `requested`, or the sign-in screen when the session may not see it.
    /// Returns the route actually shown.
    pub(crate) fn navigate(&mut self, requested: Route) -> Route {
        let shown = routes::guard(requested, &self.stores.auth);
        match shown {
            Route::Landing | Route::Dashboard => self.screen = Screen::Dashboard,
            Route::Auth => self.screen = Screen::Auth,
            Route::Expenses => self.screen = Screen::Expenses,
            Route::Goals => self.screen = Screen::Goals,
            Route::Business => {
                self.screen = Screen::Business;
                self.open_product = None;
            }
            Route::Product(id) => {
                if Product::find(id).is_some() {
                    self.screen = Screen::Business;
                    self.open_product = Some(id);
                } else {
                    self.set_status(format!("No product with id {id}"));
                    return Route::NotFound;
                }
            }
            Route::Profile => self.screen = Screen::Profile,
            Route::Challenges => self.screen = Screen::Challenges,
            Route::News => self.screen = Screen::News,
            Route::Chat => self.screen = Screen::Chat,
            Route::NotFound => {
                self.set_status(format!("404: {} not found", requested.path()));
                return Route::NotFound;
            }
        }
        if shown == Route::Auth && requested != Route::Auth {
            self.set_status("Please sign in first: :login <email> <password>");
        }
        shown
    }

    /// Route of what is on screen right now.
    pub(crate) fn current_route(&self) -> Route {
        match (self.screen, self.open_product) {
            (Screen::Business, Some(id)) => Route::Product(id),
            (screen, _) => screen.route(),
        }
    }

    /// Marketplace listing after search and category filters.
    pub(crate) fn visible_products(&self) -> Vec<&'static Product> {
        Product::search(&self.search_input, self.product_category)
    }

    pub(crate) fn visible_articles(&self) -> Vec<&'static Article> {
        Article::by_category(self.news_category)
    }

    pub(crate) fn selected_goal(&self) -> Option<&crate::models::Goal> {
        self.ledger().goals().get(self.goal_index)
    }

    pub(crate) fn contribution_preset(&self) -> u32 {
        CONTRIBUTION_PRESETS
            .get(self.preset_index)
            .copied()
            .unwrap_or(CONTRIBUTION_PRESETS[0])
    }

    /// Keep list cursors inside their lists after the data under them changed.
    pub(crate) fn clamp_cursors(&mut self) {
        let txns = self.ledger().transaction_count();
        let goals = self.ledger().goals().len();
        let products = self.visible_products().len();
        let articles = self.visible_articles().len();
        self.transaction_index = self.transaction_index.min(txns.saturating_sub(1));
        self.transaction_scroll = self.transaction_scroll.min(self.transaction_index);
        self.goal_index = self.goal_index.min(goals.saturating_sub(1));
        self.product_index = self.product_index.min(products.saturating_sub(1));
        self.news_index = self.news_index.min(articles.saturating_sub(1));
    }

    /// Deliver due chat replies.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.assistant.tick(now);
    }

    /// How long to block on input before the next chat reply falls due.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        match self.assistant.next_deadline() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
