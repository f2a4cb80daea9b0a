use crate::hotkey::{KeyBindings, KeyTracker, PagerCommand};
use rdev::listen;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Background thread running the OS-level input hook. Key events are folded
/// into [`PagerCommand`]s and pushed over the channel; the GUI thread is the
/// only consumer, so overlay state never needs a lock.
pub struct HotkeyListener {
    stopped: Arc<AtomicBool>,
}

impl HotkeyListener {
    pub fn spawn(bindings: KeyBindings, tx: Sender<PagerCommand>) -> Self {
        let stopped = Arc::new(AtomicBool::new(false));
        let stop_flag = stopped.clone();
        tracing::debug!(?bindings, "starting global key listener");
        thread::spawn(move || loop {
            if stop_flag.load(Ordering::SeqCst) {
                break;
            }

            let mut tracker = KeyTracker::default();
            let tx = tx.clone();
            let flag = stop_flag.clone();
            let result = listen(move |event| {
                if flag.load(Ordering::SeqCst) {
                    return;
                }
                if let Some(cmd) = tracker.handle(&event.event_type, &bindings) {
                    tracing::debug!(?cmd, "hotkey command");
                    if tx.send(cmd).is_err() {
                        // receiver gone, the app is shutting down
                        flag.store(true, Ordering::SeqCst);
                    }
                }
            });

            match result {
                Ok(()) => tracing::warn!("input hook exited unexpectedly; restarting shortly"),
                Err(e) => tracing::warn!("input hook failed: {:?}; retrying shortly", e),
            }

            thread::sleep(Duration::from_millis(500));
        });

        Self { stopped }
    }

    /// Make the hook callback inert before shutdown. The hook library offers
    /// no unhook call; the OS releases the hook at process teardown.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
