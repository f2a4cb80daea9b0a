use eframe::egui;

/// The slice of [`egui::Context`] the visibility logic needs, so tests can
/// capture viewport commands without a live window.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Show or hide the overlay window. Showing also claims focus so navigation
/// feedback is immediately visible.
pub fn apply_visibility(visible: bool, ctx: &impl ViewportCtx) {
    tracing::debug!(visible, "applying visibility");
    ctx.send_viewport_cmd(egui::ViewportCommand::Visible(visible));
    if visible {
        ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
    }
    ctx.request_repaint();
}
