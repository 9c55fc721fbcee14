//! Decorative progress spinner shown while a single file converts.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const FRAME_DELAY: Duration = Duration::from_millis(100);

/// Shared stop flag handed to a worker thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A running spinner. Stopped (and joined) by [`Spinner::stop`] or on drop.
pub struct Spinner {
    token: CancelToken,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Starts animating on stdout.
    pub fn start() -> Self {
        Self::start_with(std::io::stdout)
    }

    /// Starts animating on writers produced by `make_writer`.
    ///
    /// The animation cycles through its frames once and then idles until
    /// stopped.
    pub fn start_with<W, F>(make_writer: F) -> Self
    where
        W: Write,
        F: FnOnce() -> W + Send + 'static,
    {
        let token = CancelToken::new();
        let worker_token = token.clone();
        let handle = std::thread::spawn(move || {
            let mut out = make_writer();
            for frame in FRAMES {
                if worker_token.is_cancelled() {
                    break;
                }
                let _ = write!(out, "{frame}\r");
                let _ = out.flush();
                std::thread::sleep(FRAME_DELAY);
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Signals the worker to stop and waits for it to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::debug!("spinner thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn cancel_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn full_animation_writes_all_frames() {
        let buf = SharedBuf::default();
        let worker_buf = buf.clone();
        let spinner = Spinner::start_with(move || worker_buf);

        std::thread::sleep(FRAME_DELAY * 6);
        spinner.stop();

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "|\r/\r-\r\\\r");
    }

    #[test]
    fn stop_returns_before_full_animation() {
        let buf = SharedBuf::default();
        let worker_buf = buf.clone();
        let started = std::time::Instant::now();

        let spinner = Spinner::start_with(move || worker_buf);
        spinner.stop();

        assert!(started.elapsed() < FRAME_DELAY * 4);
        assert!(buf.0.lock().unwrap().len() <= 2);
    }

    #[test]
    fn drop_joins_worker() {
        let buf = SharedBuf::default();
        let worker_buf = buf.clone();
        {
            let _spinner = Spinner::start_with(move || worker_buf);
        }
        let len_after_drop = buf.0.lock().unwrap().len();
        std::thread::sleep(FRAME_DELAY * 2);
        assert_eq!(buf.0.lock().unwrap().len(), len_after_drop);
    }
}
