// src/app/state.rs
//! Application state definitions

use iced::Size;
use iced::time::Instant;

use crate::features::reveal::{
    Animator, FrameCoalescer, Pose, RegistrationHandle, RevealController, TickReport, Viewport,
};
use crate::features::settings::RevealSettings;
use crate::features::Settings;
use crate::ui::animation::RevealPlayer;
use crate::ui::components::NavItem;
use crate::ui::pages::{self, home, layout::NAVBAR_HEIGHT, layout::PageLayout};
use crate::ui::primitives::CubeState;
use crate::ui::widgets::Toast;

/// Initial window size
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

/// Main application state
pub struct App {
    /// Settings and window
    pub core: CoreState,
    /// Navigation and transient UI
    pub ui: UiState,
    /// Reveal controller, layout observer and frame bookkeeping
    pub motion: MotionState,
}

/// Settings and window metrics
pub struct CoreState {
    pub settings: Settings,
    pub window_size: Size,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn power_saving(&self) -> bool {
        self.settings.display.power_saving_mode
    }

    /// Height of the scrolling page below the navbar
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.window_size.width,
            (self.window_size.height - NAVBAR_HEIGHT).max(0.0),
        )
    }
}

/// Browser-style back/forward stack
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    /// History stack
    pub entries: Vec<NavItem>,
    /// Current position in history (index)
    pub current_index: Option<usize>,
}

impl NavigationHistory {
    /// Push a new entry to history, clearing forward history
    pub fn push(&mut self, entry: NavItem) {
        // Don't push if it's the same as current
        if let Some(idx) = self.current_index {
            if idx < self.entries.len() && self.entries[idx] == entry {
                return;
            }
            // Clear forward history
            self.entries.truncate(idx + 1);
        }
        self.entries.push(entry);
        self.current_index = Some(self.entries.len() - 1);
    }

    /// Go back in history, returns the entry to navigate to
    pub fn go_back(&mut self) -> Option<NavItem> {
        let idx = self.current_index?;
        if idx == 0 {
            return None;
        }
        self.current_index = Some(idx - 1);
        self.entries.get(idx - 1).copied()
    }

    /// Go forward in history, returns the entry to navigate to
    pub fn go_forward(&mut self) -> Option<NavItem> {
        let idx = self.current_index?;
        if idx + 1 >= self.entries.len() {
            return None;
        }
        self.current_index = Some(idx + 1);
        self.entries.get(idx + 1).copied()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index.map(|idx| idx > 0).unwrap_or(false)
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index
            .map(|idx| idx + 1 < self.entries.len())
            .unwrap_or(false)
    }
}

/// UI View State
pub struct UiState {
    pub active_nav: NavItem,
    /// Navigation history for back/forward
    pub nav_history: NavigationHistory,
    pub toast: Option<Toast>,
    /// Hide timers still running; the toast goes when the last one fires
    pub toast_timers: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_nav: NavItem::Home,
            nav_history: {
                let mut history = NavigationHistory::default();
                history.push(NavItem::Home);
                history
            },
            toast: None,
            toast_timers: 0,
        }
    }
}

/// Everything that moves: reveal registrations, the observer and the cube
pub struct MotionState {
    pub controller: RevealController<RevealPlayer>,
    pub layout: PageLayout,
    pub coalescer: FrameCoalescer,
    /// Batches registered by the mounted page
    pub registrations: Vec<RegistrationHandle>,
    pub cube: CubeState,
}

impl MotionState {
    pub fn new(settings: &RevealSettings, viewport: Viewport) -> Self {
        Self {
            controller: RevealController::new(RevealPlayer::new(), settings.controller_config()),
            layout: PageLayout::new(viewport),
            coalescer: FrameCoalescer::new(),
            registrations: Vec::new(),
            cube: CubeState::default(),
        }
    }

    pub fn player(&self) -> &RevealPlayer {
        self.controller.animator()
    }

    /// Drop every registration and pose; the page renders fully visible
    ///
    /// The scroll offset is left alone: it mirrors the real scrollable, which
    /// only moves when navigation snaps it to the top.
    pub fn unmount(&mut self) {
        for handle in self.registrations.drain(..) {
            self.controller.deregister(handle);
        }
        self.controller.animator_mut().clear();
        self.layout.set_rects(Vec::new());
        self.cube.pause();
    }

    /// Register a page's batches and, on the home page, start the hero timeline
    pub fn mount(
        &mut self,
        nav: NavItem,
        settings: &RevealSettings,
        window_width: f32,
        play_hero: bool,
        now: Instant,
    ) {
        self.unmount();
        self.controller.set_config(settings.controller_config());
        self.layout.set_rects(pages::reveal_rects(nav, window_width));

        for batch in pages::reveal_batches(nav, settings.profile(), settings.stagger_step()) {
            match self.controller.register_default(batch) {
                Ok(handle) => self.registrations.push(handle),
                Err(e) => tracing::warn!("Skipping reveal batch for {:?}: {}", nav, e),
            }
        }
        tracing::debug!(
            "Mounted {:?} with {} reveal targets",
            nav,
            self.controller.target_count()
        );

        if nav == NavItem::Home && play_hero {
            let timeline = home::hero_timeline();
            let player = self.controller.animator_mut();
            for (target, profile) in timeline.targets() {
                player.place(target, Pose::hidden(profile));
            }
            for command in timeline.commands() {
                player.animate(command, now);
            }
        }

        // Cards already on screen reveal on the next frame
        self.coalescer.request();
    }

    /// Advance one animation frame
    ///
    /// Runs at most one observation pass no matter how many scroll or resize
    /// events requested it. Returns the report when the controller ticked.
    pub fn frame(&mut self, now: Instant) -> Option<TickReport> {
        // In-flight animations keep ticking so they settle into Visible / Hidden
        let requested = self.coalescer.take();
        let report = if requested || self.controller.has_pending_work() {
            Some(self.controller.tick(&self.layout, now))
        } else {
            None
        };

        self.controller.animator_mut().tick(now);
        report
    }

    /// Recompute boxes after the window width changed
    pub fn relayout(&mut self, nav: NavItem, viewport: Viewport) {
        self.layout.set_viewport(viewport);
        self.layout.set_rects(pages::reveal_rects(nav, viewport.width));
        self.coalescer.request();
    }

    /// Whether anything needs animation frames
    pub fn has_active_animations(&self) -> bool {
        self.coalescer.is_pending()
            || self.player().is_animating()
            || self.controller.has_pending_work()
    }
}
