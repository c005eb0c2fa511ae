use std::sync::Arc;

use futures_util::FutureExt;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;
use tracing::info;

use culturesphere_core::{
    AssistantController, ClientError, Config, Deck, Domain, DomainController, HealthStatus,
    HintRotator, Page, RecommendationClient, Recommender, Wanderer,
};

use crate::theme::Theme;

/// Size of the wandering companion bubble (width, height).
pub const COMPANION_SIZE: (u16, u16) = (40, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline(String),
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub page: Page,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub theme: Theme,
    pub api_url: String,

    // Page form; rebuilt whenever the page changes
    pub page_controller: DomainController,
    pub card_state: ListState,    // Home: domain cards
    pub example_state: ListState, // Domain page: "Try:" examples
    pub result_scroll: u16,

    // Floating assistant
    pub assistant: AssistantController,
    pub show_assistant: bool,
    pub chat_scroll: u16,
    pub chat_follow: bool,

    // Decorative widgets
    pub guide_hints: HintRotator,
    pub companion_hints: HintRotator,
    pub companion: Wanderer,
    pub show_companion: bool,
    pub screen_size: (u16, u16),

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Backend health probe
    pub backend: BackendStatus,
    pub health_task: Option<JoinHandle<Result<HealthStatus, ClientError>>>,

    // Panel areas for mouse hit-testing (updated during render)
    pub body_area: Option<Rect>,
    pub chat_area: Option<Rect>,

    client: Arc<dyn Recommender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let api_url = config.api_base_url();
        info!(%api_url, "using recommendation API");

        let http = RecommendationClient::new(&api_url);
        let probe = http.clone();
        let health_task = Some(tokio::spawn(async move { probe.health().await }));
        let client: Arc<dyn Recommender> = Arc::new(http);

        let theme = if config.prefers_light_theme() { Theme::Light } else { Theme::Dark };

        let mut card_state = ListState::default();
        card_state.select(Some(0));

        Self {
            should_quit: false,
            page: Page::Home,
            input_mode: InputMode::Normal,
            focus: Focus::Page,
            theme,
            api_url,

            page_controller: DomainController::new(Page::Home.domain(), client.clone()),
            card_state,
            example_state: ListState::default(),
            result_scroll: 0,

            assistant: AssistantController::new(client.clone()),
            show_assistant: false,
            chat_scroll: 0,
            chat_follow: true,

            guide_hints: HintRotator::new(Deck::Guide, Page::Home),
            companion_hints: HintRotator::new(Deck::Companion, Page::Home),
            companion: Wanderer::new(),
            show_companion: true,
            screen_size: (0, 0),

            animation_frame: 0,

            backend: BackendStatus::Checking,
            health_task,

            body_area: None,
            chat_area: None,

            client,
        }
    }

    /// Switch page. Leaving a page drops its form, aborting any request in flight.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        info!(from = self.page.slug(), to = page.slug(), "navigate");

        self.page = page;
        self.page_controller = DomainController::new(page.domain(), self.client.clone());
        self.result_scroll = 0;
        self.input_mode = InputMode::Normal;
        self.focus = Focus::Page;

        if page == Page::Home {
            self.example_state.select(None);
        } else {
            self.example_state.select(Some(0));
        }

        self.guide_hints.set_page(page);
        self.companion_hints.set_page(page);
        self.assistant.set_page(page);
    }

    pub fn domain(&self) -> Domain {
        self.page.domain()
    }

    pub fn examples(&self) -> &'static [&'static str] {
        self.domain().content().map(|c| c.examples).unwrap_or(&[])
    }

    /// Collect finished requests. Returns `true` if anything changed.
    pub fn poll_requests(&mut self) -> bool {
        let mut changed = false;

        if self.page_controller.poll() {
            self.result_scroll = 0;
            changed = true;
        }
        if self.assistant.poll() {
            self.chat_follow = true;
            changed = true;
        }
        changed | self.poll_health()
    }

    fn poll_health(&mut self) -> bool {
        let Some(task) = self.health_task.as_mut() else {
            return false;
        };
        if !task.is_finished() {
            return false;
        }
        let Some(joined) = task.now_or_never() else {
            return false;
        };
        self.health_task = None;

        self.backend = match joined {
            Ok(Ok(status)) if status.is_ok() => BackendStatus::Online,
            Ok(Ok(status)) => BackendStatus::Offline(status.status),
            Ok(Err(err)) => BackendStatus::Offline(err.kind().to_string()),
            Err(err) => BackendStatus::Offline(err.to_string()),
        };
        info!(backend = ?self.backend, "health probe finished");
        true
    }

    pub fn tick_animation(&mut self) {
        if self.page_controller.is_loading() || self.assistant.is_composing() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    pub fn rotate_hints(&mut self) {
        self.guide_hints.advance();
        self.companion_hints.advance();
    }

    pub fn wander(&mut self) {
        let mut rng = rand::thread_rng();
        self.companion.relocate(&mut rng, self.screen_size, COMPANION_SIZE);
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let first_layout = self.screen_size == (0, 0);
        self.screen_size = (width, height);
        if first_layout {
            self.wander();
        } else {
            self.companion.clamp(self.screen_size, COMPANION_SIZE);
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_companion(&mut self) {
        self.show_companion = !self.show_companion;
    }

    pub fn toggle_assistant(&mut self) {
        self.show_assistant = !self.show_assistant;
        if self.show_assistant {
            self.focus = Focus::Assistant;
            self.input_mode = InputMode::Editing;
            self.chat_follow = true;
        } else {
            self.focus = Focus::Page;
            self.input_mode = InputMode::Normal;
        }
    }

    // Home cards
    pub fn card_down(&mut self) {
        let len = Domain::cultural().len();
        let i = self.card_state.selected().unwrap_or(0);
        self.card_state.select(Some((i + 1).min(len - 1)));
    }

    pub fn card_up(&mut self) {
        let i = self.card_state.selected().unwrap_or(0);
        self.card_state.select(Some(i.saturating_sub(1)));
    }

    pub fn open_selected_card(&mut self) {
        let selected = self.card_state.selected().unwrap_or(0);
        if let Some(page) = Domain::cultural()
            .get(selected)
            .and_then(|d| Page::from_domain(*d))
        {
            self.navigate(page);
        }
    }

    // Example inputs
    pub fn example_down(&mut self) {
        let len = self.examples().len();
        if len > 0 {
            let i = self.example_state.selected().unwrap_or(0);
            self.example_state.select(Some((i + 1).min(len - 1)));
        }
    }

    pub fn example_up(&mut self) {
        let i = self.example_state.selected().unwrap_or(0);
        self.example_state.select(Some(i.saturating_sub(1)));
    }

    /// Copy the highlighted example into the form and start editing.
    pub fn use_selected_example(&mut self) {
        if self.page_controller.is_loading() {
            return;
        }
        let example = self
            .example_state
            .selected()
            .and_then(|i| self.examples().get(i).copied());
        if let Some(text) = example {
            self.page_controller.use_example(text);
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn submit_page(&mut self) {
        if self.page_controller.submit_input() {
            self.input_mode = InputMode::Normal;
            self.result_scroll = 0;
        }
    }

    pub fn send_to_assistant(&mut self) {
        if self.assistant.send_input() {
            self.chat_follow = true;
        }
    }

    pub fn scroll_result_down(&mut self) {
        self.result_scroll = self.result_scroll.saturating_add(1);
    }

    pub fn scroll_result_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn scroll_chat_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_chat_up(&mut self) {
        self.chat_follow = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use culturesphere_core::InteractionState;

    fn offline_config() -> Config {
        Config {
            api_url: Some("http://127.0.0.1:9/api".to_string()),
            theme: Some("light".to_string()),
        }
    }

    #[tokio::test]
    async fn test_navigate_resets_form_and_hints() {
        let mut app = App::new(&offline_config());
        assert_eq!(app.theme, Theme::Light);
        app.rotate_hints();
        app.page_controller.use_example("leftover");

        app.navigate(Page::Music);

        assert_eq!(app.page, Page::Music);
        assert_eq!(app.page_controller.domain(), Domain::Music);
        assert!(app.page_controller.input().as_str().is_empty());
        assert_eq!(app.page_controller.state(), &InteractionState::Idle);
        assert_eq!(app.guide_hints.index(), 0);
        assert_eq!(app.assistant.page(), Page::Music);
        assert_eq!(app.example_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_open_selected_card() {
        let mut app = App::new(&offline_config());
        app.card_down();
        app.card_down();
        app.open_selected_card();
        assert_eq!(app.page, Page::Travel);
    }

    #[tokio::test]
    async fn test_card_selection_is_clamped() {
        let mut app = App::new(&offline_config());
        app.card_up();
        assert_eq!(app.card_state.selected(), Some(0));
        for _ in 0..20 {
            app.card_down();
        }
        assert_eq!(app.card_state.selected(), Some(5));
    }

    #[tokio::test]
    async fn test_use_selected_example_fills_form() {
        let mut app = App::new(&offline_config());
        app.navigate(Page::Learning);
        app.example_down();
        app.example_down();
        app.use_selected_example();

        assert_eq!(app.page_controller.input().as_str(), "Dune");
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.page_controller.state(), &InteractionState::Idle);
    }

    #[tokio::test]
    async fn test_toggle_assistant_moves_focus() {
        let mut app = App::new(&offline_config());
        app.toggle_assistant();
        assert!(app.show_assistant);
        assert_eq!(app.focus, Focus::Assistant);
        assert_eq!(app.input_mode, InputMode::Editing);

        app.toggle_assistant();
        assert_eq!(app.focus, Focus::Page);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_resize_places_companion_in_bounds() {
        let mut app = App::new(&offline_config());
        app.resize(100, 30);
        assert!(app.companion.x + COMPANION_SIZE.0 <= 100);
        assert!(app.companion.y + COMPANION_SIZE.1 <= 30);

        app.resize(50, 10);
        assert!(app.companion.x + COMPANION_SIZE.0 <= 50);
        assert!(app.companion.y + COMPANION_SIZE.1 <= 10);
    }
}
