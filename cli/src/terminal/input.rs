use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use harbor_core::session::CancelToken;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
    time::Duration,
};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for 'q' or Ctrl+C on a raw-mode terminal and cancels the scan.
///
/// The listener stops by itself once it has cancelled, or when the handle is
/// dropped.
pub struct InputHandle {
    done: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl InputHandle {
    pub fn start(cancel: CancelToken) -> Self {
        let done = Arc::new(AtomicBool::new(false));
        let done_ref = done.clone();

        let thread = thread::spawn(move || {
            if let Err(e) = enable_raw_mode() {
                debug!("Keyboard input unavailable: {e}");
                return;
            }

            while !done_ref.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }

                if let Ok(Event::Key(key_event)) = event::read() {
                    if is_stop_key(&key_event) {
                        warn!("Stopping scan...");
                        cancel.cancel();
                        break;
                    }
                }
            }
            let _ = disable_raw_mode();
        });

        Self {
            done,
            thread: Some(thread),
        }
    }
}

fn is_stop_key(key_event: &KeyEvent) -> bool {
    let is_q = key_event.code == KeyCode::Char('q');
    let is_ctrl_c = key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL);

    (is_q || is_ctrl_c) && key_event.kind == KeyEventKind::Press
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        let _ = disable_raw_mode();
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
