#![forbid(unsafe_code)]

//! Real-time tick driver.
//!
//! A [`Ticker`] runs on a background thread and sends elapsed-time deltas
//! through an mpsc channel at a fixed cadence. The component consumes the
//! deltas with its `tick` method; tests skip the ticker entirely and feed
//! virtual durations directly.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Signal a ticker thread checks to know when to stop.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Whether the stop signal has been triggered.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().expect("stop signal lock poisoned")
    }

    /// Block for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Loops on
    /// the condvar so spurious wakeups don't cut the wait short.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().expect("stop signal lock poisoned");
        let start = Instant::now();
        loop {
            if *stopped {
                return true;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            let (guard, _) = cvar
                .wait_timeout(stopped, duration - elapsed)
                .expect("stop signal lock poisoned");
            stopped = guard;
        }
    }
}

/// Runtime-side trigger that stops a ticker.
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().expect("stop signal lock poisoned");
        *stopped = true;
        cvar.notify_all();
    }
}

/// Spawns a background thread that emits tick deltas at a fixed interval.
#[derive(Debug)]
pub struct Ticker;

impl Ticker {
    /// Start a ticker sending [`Duration`] deltas through `sender` every
    /// `interval` until stopped or the receiver is dropped.
    #[must_use]
    pub fn spawn(interval: Duration, sender: mpsc::Sender<Duration>) -> TickerHandle {
        let (signal, trigger) = StopSignal::new();
        let thread = thread::spawn(move || {
            #[cfg(feature = "tracing")]
            tracing::debug!(?interval, "ticker started");
            let mut last = Instant::now();
            loop {
                if signal.wait_timeout(interval) {
                    break;
                }
                let now = Instant::now();
                let delta = now - last;
                last = now;
                if sender.send(delta).is_err() {
                    break;
                }
            }
            #[cfg(feature = "tracing")]
            tracing::debug!("ticker stopped");
        });
        TickerHandle {
            trigger,
            thread: Some(thread),
        }
    }
}

/// Handle owning a running ticker thread.
///
/// Stops the thread on [`stop`](Self::stop) or drop.
pub struct TickerHandle {
    trigger: StopTrigger,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stop the ticker and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.trigger.stop();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- StopSignal tests ---

    #[test]
    fn signal_starts_unstopped() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.is_stopped());
    }

    #[test]
    fn trigger_stops_the_signal() {
        let (signal, trigger) = StopSignal::new();
        trigger.stop();
        assert!(signal.is_stopped());
        assert!(signal.wait_timeout(Duration::from_millis(1)));
    }

    #[test]
    fn wait_times_out_when_not_stopped() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.wait_timeout(Duration::from_millis(5)));
    }

    // --- Ticker tests ---

    #[test]
    fn ticker_emits_deltas() {
        let (tx, rx) = mpsc::channel();
        let handle = Ticker::spawn(Duration::from_millis(2), tx);
        let delta = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("ticker should emit");
        assert!(delta > Duration::ZERO);
        handle.stop();
    }

    #[test]
    fn ticker_stops_cleanly() {
        let (tx, rx) = mpsc::channel();
        let handle = Ticker::spawn(Duration::from_millis(1), tx);
        handle.stop();
        // After stop, the channel eventually closes.
        while rx.recv_timeout(Duration::from_millis(50)).is_ok() {}
    }

    #[test]
    fn ticker_exits_when_receiver_drops() {
        let (tx, rx) = mpsc::channel();
        let handle = Ticker::spawn(Duration::from_millis(1), tx);
        drop(rx);
        // stop() joins the thread; it must not hang.
        handle.stop();
    }
}
