use crate::hotkey::PagerCommand;
use crate::pager::Pager;

/// What applying a command asks of the GUI shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing to do (navigation while hidden).
    Ignored,
    /// The displayed segment may have changed.
    Redraw,
    /// The window must be shown or hidden.
    VisibilityChanged(bool),
    /// Persist the cursor and close.
    Quit,
}

/// What the overlay should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayView<'a> {
    Text(&'a str),
    Clock,
}

/// Navigation and idle state, kept apart from the GUI shell so the
/// command-handling and render decisions are plain testable logic.
pub struct OverlayState {
    pager: Pager,
    visible: bool,
    idle_secs: u64,
    idle_threshold_secs: u64,
}

impl OverlayState {
    /// The window starts visible, with a fresh idle counter.
    pub fn new(pager: Pager, idle_threshold_secs: u64) -> Self {
        Self {
            pager,
            visible: true,
            idle_secs: 0,
            idle_threshold_secs,
        }
    }

    pub fn apply(&mut self, command: PagerCommand) -> CommandOutcome {
        match command {
            PagerCommand::ToggleOverlay => {
                self.visible = !self.visible;
                self.idle_secs = 0;
                tracing::debug!(visible = self.visible, "overlay toggled");
                CommandOutcome::VisibilityChanged(self.visible)
            }
            PagerCommand::NextSegment if self.visible => {
                self.pager.advance();
                self.idle_secs = 0;
                CommandOutcome::Redraw
            }
            PagerCommand::PrevSegment if self.visible => {
                self.pager.retreat();
                self.idle_secs = 0;
                CommandOutcome::Redraw
            }
            // navigation is inert while the window is hidden
            PagerCommand::NextSegment | PagerCommand::PrevSegment => CommandOutcome::Ignored,
            PagerCommand::Quit => CommandOutcome::Quit,
        }
    }

    /// One second of wall clock without navigation input.
    pub fn tick(&mut self) {
        self.idle_secs = self.idle_secs.saturating_add(1);
    }

    /// Clock takes over once the idle threshold is reached while visible;
    /// any navigation resets the counter and brings the text back.
    pub fn view(&self) -> DisplayView<'_> {
        if self.visible && self.idle_secs >= self.idle_threshold_secs {
            DisplayView::Clock
        } else {
            DisplayView::Text(self.pager.current())
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn cursor(&self) -> u64 {
        self.pager.cursor() as u64
    }
}
