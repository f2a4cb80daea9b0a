use crate::hotkey::PagerCommand;
use crate::listener::HotkeyListener;
use crate::overlay::{CommandOutcome, DisplayView, OverlayState};
use crate::position;
use crate::tray;
use crate::visibility::apply_visibility;
use eframe::egui;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// The eframe shell around [`OverlayState`]: drains hotkey commands, ticks
/// the idle counter, renders the text or clock, and persists the cursor on
/// the way out.
pub struct OverlayApp {
    state: OverlayState,
    commands: Receiver<PagerCommand>,
    listener: HotkeyListener,
    position_path: String,
    last_tick: Instant,
    saved: bool,
    _tray: Option<tray::Tray>,
}

impl OverlayApp {
    pub fn new(
        state: OverlayState,
        commands: Receiver<PagerCommand>,
        listener: HotkeyListener,
        position_path: String,
        tray: Option<tray::Tray>,
    ) -> Self {
        Self {
            state,
            commands,
            listener,
            position_path,
            last_tick: Instant::now(),
            saved: false,
            _tray: tray,
        }
    }

    /// Apply everything the hook thread queued since the last frame.
    /// Returns whether a quit was requested.
    fn drain_commands(&mut self, ctx: &egui::Context) -> bool {
        let mut quit = false;
        while let Ok(cmd) = self.commands.try_recv() {
            match self.state.apply(cmd) {
                CommandOutcome::VisibilityChanged(visible) => apply_visibility(visible, ctx),
                CommandOutcome::Redraw => ctx.request_repaint(),
                CommandOutcome::Quit => quit = true,
                CommandOutcome::Ignored => {}
            }
        }
        quit
    }

    fn tick_idle(&mut self) {
        while self.last_tick.elapsed() >= TICK {
            self.state.tick();
            self.last_tick += TICK;
        }
    }

    fn persist_position(&mut self) {
        if self.saved {
            return;
        }
        self.saved = true;
        if let Err(e) = position::save(&self.position_path, self.state.cursor()) {
            tracing::error!("failed to save reading position: {e}");
        } else {
            tracing::info!(cursor = self.state.cursor(), "reading position saved");
        }
    }

    fn shutdown(&mut self, ctx: &egui::Context) {
        self.persist_position();
        self.listener.stop();
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let quit = self.drain_commands(ctx) || tray::exit_selected();
        self.tick_idle();

        if quit {
            self.shutdown(ctx);
        }

        let text = match self.state.view() {
            DisplayView::Text(segment) => segment.to_owned(),
            DisplayView::Clock => chrono::Local::now().format("%H:%M:%S").to_string(),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::TRANSPARENT))
            .show(ctx, |ui| {
                let response = ui.interact(
                    ui.max_rect(),
                    egui::Id::new("overlay_drag"),
                    egui::Sense::drag(),
                );
                if response.drag_started() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }
                ui.label(
                    egui::RichText::new(text)
                        .size(24.0)
                        .color(egui::Color32::BLACK),
                );
            });

        // keep the clock moving and the tray menu responsive without input
        ctx.request_repaint_after(Duration::from_millis(250));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_position();
        self.listener.stop();
    }
}
