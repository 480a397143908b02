//! Host UI shell: renders the widget and translates user gestures into
//! engine commands. Owns the window chrome (drag, fold, opacity, close)
//! that the engine deliberately knows nothing about.

use std::time::Instant;

use eframe::egui::{
    self, Align, Button, CentralPanel, Context, CornerRadius, DragValue, Frame, Layout, Margin,
    PointerButton, RichText, Sense, Slider, Stroke, Vec2, ViewportCommand,
};
use tracing::{debug, info};

use tickdown_core::{CountdownEngine, CountdownState, Event};

use crate::theme;
use crate::ticker::Ticker;

pub const EXPANDED_SIZE: Vec2 = Vec2::new(300.0, 200.0);
pub const FOLDED_SIZE: Vec2 = Vec2::new(300.0, 110.0);
pub const MIN_OPACITY: f32 = 0.2;

/// Window-button placement in the top bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ControlOrder {
    Leading,
    Trailing,
}

impl ControlOrder {
    /// Platform default: macOS puts window buttons leading, others trailing.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Leading
        } else {
            Self::Trailing
        }
    }
}

/// Startup configuration for the shell. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Preset loaded into the duration picker.
    pub initial_secs: u64,
    pub opacity: f32,
    pub control_order: ControlOrder,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_secs: 600,
            opacity: 0.9,
            control_order: ControlOrder::platform_default(),
        }
    }
}

/// Label for the single start/pause/resume toggle control.
pub fn toggle_label(state: CountdownState) -> &'static str {
    match state {
        CountdownState::Idle | CountdownState::Finished => "Start",
        CountdownState::Running => "Pause",
        CountdownState::Paused => "Resume",
    }
}

fn split_hms(total_secs: u64) -> (u32, u32, u32) {
    (
        (total_secs / 3600).min(99) as u32,
        ((total_secs % 3600) / 60) as u32,
        (total_secs % 60) as u32,
    )
}

/// One countdown widget window.
pub struct CountdownApp {
    engine: CountdownEngine,
    ticker: Ticker,
    // Duration picker fields.
    hours: u32,
    minutes: u32,
    seconds: u32,
    opacity: f32,
    folded: bool,
    control_order: ControlOrder,
}

impl CountdownApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        info!(
            initial_secs = config.initial_secs,
            opacity = config.opacity,
            "initializing countdown widget"
        );
        Self::from_config(config)
    }

    fn from_config(config: WidgetConfig) -> Self {
        let (hours, minutes, seconds) = split_hms(config.initial_secs);
        Self {
            engine: CountdownEngine::new(),
            ticker: Ticker::new(),
            hours,
            minutes,
            seconds,
            opacity: config.opacity.clamp(MIN_OPACITY, 1.0),
            folded: false,
            control_order: config.control_order,
        }
    }

    fn picker_secs(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    fn log_event(&self, event: Option<Event>) {
        if let Some(event) = event {
            debug!(?event, "engine event");
        }
    }

    /// The single toggle control: dispatches to whichever engine operation
    /// is valid for the current state.
    fn toggle(&mut self) {
        match self.engine.state() {
            CountdownState::Idle | CountdownState::Finished => {
                if let Some(event) = self.engine.start(self.picker_secs()) {
                    self.ticker.arm(Instant::now());
                    self.log_event(Some(event));
                }
            }
            CountdownState::Running => {
                // Disarm before returning to the event loop so no stray
                // tick lands after the transition.
                self.ticker.disarm();
                let event = self.engine.pause();
                self.log_event(event);
            }
            CountdownState::Paused => {
                self.ticker.arm(Instant::now());
                let event = self.engine.resume();
                self.log_event(event);
            }
        }
    }

    fn reset(&mut self) {
        self.ticker.disarm();
        let event = self.engine.reset();
        self.log_event(event);
    }

    /// Drain whole elapsed seconds from the tick source into the engine.
    fn deliver_due_ticks(&mut self) {
        let due = self.ticker.poll(Instant::now());
        for _ in 0..due {
            match self.engine.tick() {
                Some(event @ Event::Finished { .. }) => {
                    self.ticker.disarm();
                    self.log_event(Some(event));
                    break;
                }
                event => self.log_event(event),
            }
        }
    }

    fn toggle_fold(&mut self, ctx: &Context) {
        self.folded = !self.folded;
        let size = if self.folded { FOLDED_SIZE } else { EXPANDED_SIZE };
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
        // Resize affordance exists in the expanded state only.
        ctx.send_viewport_cmd(ViewportCommand::Resizable(!self.folded));
    }

    fn window_buttons(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        if ui.small_button("×").clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        if ui.small_button("−").clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
        }
        let fold_glyph = if self.folded { "▼" } else { "▲" };
        if ui.small_button(fold_glyph).clicked() {
            self.toggle_fold(ctx);
        }
    }

    fn opacity_slider(&mut self, ui: &mut egui::Ui) {
        ui.add(
            Slider::new(&mut self.opacity, MIN_OPACITY..=1.0)
                .show_value(false),
        );
        ui.label(
            RichText::new("opacity")
                .size(11.0)
                .color(theme::TEXT_SECONDARY),
        );
    }

    fn top_bar(&mut self, ctx: &Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match self.control_order {
            ControlOrder::Leading => {
                self.window_buttons(ctx, ui);
                if !self.folded {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.opacity_slider(ui);
                    });
                }
            }
            ControlOrder::Trailing => {
                if !self.folded {
                    self.opacity_slider(ui);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    self.window_buttons(ctx, ui);
                });
            }
        });
    }

    fn time_label(&self, ui: &mut egui::Ui) {
        let color = theme::tier_color(self.engine.tier());
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            ui.label(
                RichText::new(self.engine.display())
                    .size(36.0)
                    .strong()
                    .color(color),
            );
            ui.add_space(6.0);
        });
    }

    fn control_panel(&mut self, ui: &mut egui::Ui) {
        // The picker stays disabled from start until finish or reset.
        let picker_enabled = matches!(
            self.engine.state(),
            CountdownState::Idle | CountdownState::Finished
        );

        ui.horizontal(|ui| {
            ui.label(RichText::new("Set time:").color(theme::TEXT_SECONDARY));
            ui.add_enabled(
                picker_enabled,
                DragValue::new(&mut self.hours).range(0..=99).suffix("h"),
            );
            ui.add_enabled(
                picker_enabled,
                DragValue::new(&mut self.minutes).range(0..=59).suffix("m"),
            );
            ui.add_enabled(
                picker_enabled,
                DragValue::new(&mut self.seconds).range(0..=59).suffix("s"),
            );
        });

        ui.horizontal(|ui| {
            let label = toggle_label(self.engine.state());
            if ui.add(Button::new(label).min_size(Vec2::new(80.0, 24.0))).clicked() {
                self.toggle();
            }
            if ui.add(Button::new("Reset").min_size(Vec2::new(80.0, 24.0))).clicked() {
                self.reset();
            }
        });
    }
}

impl eframe::App for CountdownApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Fully transparent backdrop; only the rounded container is painted.
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.deliver_due_ticks();

        let container = Frame::default()
            .fill(theme::CONTAINER_BG)
            .stroke(Stroke::new(1.0, theme::CONTAINER_BORDER))
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::same(12));

        CentralPanel::default()
            .frame(Frame::default())
            .show(ctx, |ui| {
                ui.set_opacity(self.opacity);

                // Drag-to-move on any region not claimed by a widget;
                // interactive widgets added afterwards win the hit test.
                let drag = ui.interact(
                    ui.max_rect(),
                    ui.id().with("window-drag"),
                    Sense::drag(),
                );
                if drag.drag_started_by(PointerButton::Primary) {
                    ctx.send_viewport_cmd(ViewportCommand::StartDrag);
                }

                container.show(ui, |ui| {
                    self.top_bar(ctx, ui);
                    self.time_label(ui);
                    if !self.folded {
                        self.control_panel(ui);
                    }
                });
            });

        // Wake up exactly when the next tick is due.
        if let Some(wait) = self.ticker.time_to_next(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
