pub(crate) mod config;
mod stopwatch_view;

use config::AppConfig;
use egui::{Color32, Key, Visuals, style::Widgets};
use log::error;

use lapwatch::{Clock, Stopwatch, SystemClock, ThreadScheduler, TickScheduler};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(12, 12, 12);
pub(crate) const PALETTE_BROWN: Color32 = Color32::from_rgb(72, 30, 20);
pub(crate) const PALETTE_MAROON: Color32 = Color32::from_rgb(155, 57, 34);
pub(crate) const PALETTE_ORANGE: Color32 = Color32::from_rgb(242, 97, 63);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(88, 180, 96);

const DEFAULT_BUTTON_CORNER_RADIUS: u8 = 4;
const DEFAULT_CARD_CORNER_RADIUS: u8 = 6;
const DEFAULT_WINDOW_CORNER_RADIUS: u8 = 10;
const DEFAULT_WINDOW_TRANSPARENCY: u8 = 230;

/// What the user asked for during a frame, from a button or a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControlAction {
    StartPause,
    Reset,
    Lap,
}

const SHORTCUT_KEYS: [Key; 3] = [Key::Space, Key::L, Key::R];

impl ControlAction {
    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Space => Some(Self::StartPause),
            Key::L => Some(Self::Lap),
            Key::R => Some(Self::Reset),
            _ => None,
        }
    }

    fn from_shortcuts(ctx: &egui::Context) -> Option<Self> {
        // a focused widget owns the keyboard, Space would press it as well
        if ctx.memory(|mem| mem.focused().is_some()) {
            return None;
        }
        ctx.input(|input| {
            SHORTCUT_KEYS
                .into_iter()
                .find(|key| input.key_pressed(*key))
                .and_then(Self::from_key)
        })
    }

    fn apply<C: Clock, S: TickScheduler>(self, stopwatch: &mut Stopwatch<C, S>) {
        match self {
            Self::StartPause => stopwatch.toggle(),
            Self::Reset => stopwatch.reset(),
            Self::Lap => {
                stopwatch.record_lap();
            }
        }
    }
}

/// `StopwatchApp` hosts the stopwatch engine in an egui window.
///
/// The engine's tick thread only wakes the UI; sampling happens here, inside
/// `update`, so button handlers and ticks never run at the same time.
///
/// # Fields
///
/// * `stopwatch` - The stopwatch engine, running on the system clock with a thread-backed ticker.
/// * `app_config` - Window settings, saved back to disk when the app exits.
///
/// # Methods
///
/// * `new` - Applies the palette and builds a stopwatch whose ticks request a repaint.
/// * `update` - Drains ticks, renders the stopwatch and applies the clicked control or shortcut.
/// * `on_exit` - Stops the stopwatch and saves the config file.
pub struct StopwatchApp {
    stopwatch: Stopwatch<SystemClock, ThreadScheduler>,
    app_config: AppConfig,
}

impl StopwatchApp {
    pub(crate) fn new(app_config: AppConfig, cc: &eframe::CreationContext<'_>) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_MAROON,
            faint_bg_color: PALETTE_BLACK,
            extreme_bg_color: PALETTE_BROWN,
            panel_fill: PALETTE_BLACK,
            button_frame: true,
            window_fill: Color32::from_rgba_premultiplied(
                PALETTE_BLACK.r(),
                PALETTE_BLACK.g(),
                PALETTE_BLACK.b(),
                DEFAULT_WINDOW_TRANSPARENCY,
            ),
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        let repaint_ctx = cc.egui_ctx.clone();
        let scheduler = ThreadScheduler::with_waker(move || repaint_ctx.request_repaint());
        let stopwatch = Stopwatch::new(SystemClock::default(), scheduler)
            .with_tick_interval(app_config.tick_interval());

        Self {
            stopwatch,
            app_config,
        }
    }
}

impl eframe::App for StopwatchApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // stop the tick thread before the window goes away
        self.stopwatch.reset();

        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.stopwatch.tick();

        // a click wins over a shortcut pressed in the same frame
        let action = self
            .stopwatch_view(ctx)
            .or_else(|| ControlAction::from_shortcuts(ctx));

        if let Some(action) = action {
            action.apply(&mut self.stopwatch);
            ctx.request_repaint();
        }
    }
}
