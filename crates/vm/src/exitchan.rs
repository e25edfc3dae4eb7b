// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Apprunner Contributors

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};

/// The sentinel value sent on an app's exit channel to request cooperative
/// shutdown.
pub const EXIT_FROM_USER: &str = "exit-from-user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSignal(pub String);

impl AppSignal {
    pub fn exit_from_user() -> Self {
        AppSignal(EXIT_FROM_USER.to_string())
    }
}

struct ExitChannelState {
    closed: AtomicBool,
    notify: Notify,
}

/// Supervisor-side handle onto an app's exit channel: deliver the shutdown
/// sentinel and wait for the worker's close-or-timeout.
///
/// The "closed" signal is delivered through an explicit `Notify` +
/// `AtomicBool` rather than relying on when Rust happens to drop the
/// `mpsc::Receiver` half: the worker's cleanup fires it as the
/// deliberate last step, after registry removal and crash-recovery
/// logging, so `stop` never observes close before the app is already gone
/// from `list()`.
#[derive(Clone)]
pub struct ExitSender {
    tx: mpsc::Sender<AppSignal>,
    state: Arc<ExitChannelState>,
}

/// Worker-side handle: observe the sentinel, then mark the channel closed.
pub struct ExitReceiver {
    rx: mpsc::Receiver<AppSignal>,
    state: Arc<ExitChannelState>,
}

pub fn exit_channel() -> (ExitSender, ExitReceiver) {
    let (tx, rx) = mpsc::channel(1);
    let state = Arc::new(ExitChannelState { closed: AtomicBool::new(false), notify: Notify::new() });
    (ExitSender { tx, state: state.clone() }, ExitReceiver { rx, state })
}

impl ExitSender {
    /// Deliver the sentinel, then wait up to `timeout` for close-or-expiry.
    /// A worker that has already exited may have dropped its receiver; the
    /// send then fails and there is nothing further to wait for.
    pub async fn stop(&self, timeout: Duration) -> bool {
        let _ = self.tx.send(AppSignal::exit_from_user()).await;

        if self.state.closed.load(Ordering::Acquire) {
            return true;
        }
        tokio::select! {
            _ = self.state.notify.notified() => true,
            _ = tokio::time::sleep(timeout) => false,
        }
    }
}

impl ExitReceiver {
    pub async fn recv(&mut self) -> Option<AppSignal> {
        self.rx.recv().await
    }

    /// Blocking receive, for use from the synchronous script VM (run under
    /// `spawn_blocking`).
    pub fn blocking_recv(&mut self) -> Option<AppSignal> {
        self.rx.blocking_recv()
    }

    /// Mark the channel closed. Call this as the very last step of the
    /// worker's cleanup sequence.
    pub fn close(self) {
        self.state.closed.store(true, Ordering::Release);
        self.state.notify.notify_one();
    }
}

/// An exit channel's receiving half, as a cloneable handle suitable for
/// exposing to script code as a native VM value. The worker keeps one clone to call
/// [`ExitChanHandle::close`] as its last cleanup step; the VM run call
/// gets another clone so the script can call a `recv`-style method on it.
#[derive(Clone)]
pub struct ExitChanHandle(Arc<parking_lot::Mutex<Option<ExitReceiver>>>);

impl ExitChanHandle {
    pub fn new(rx: ExitReceiver) -> Self {
        ExitChanHandle(Arc::new(parking_lot::Mutex::new(Some(rx))))
    }

    /// Blocking receive of the shutdown sentinel; unit once the channel has
    /// already been closed or taken.
    pub fn recv(&mut self) -> rhai::Dynamic {
        let mut guard = self.0.lock();
        match guard.as_mut().and_then(ExitReceiver::blocking_recv) {
            Some(signal) => rhai::Dynamic::from(signal.0),
            None => rhai::Dynamic::UNIT,
        }
    }

    /// Consume and close the underlying receiver. No-op if another clone
    /// already did so.
    pub fn close(&self) {
        if let Some(rx) = self.0.lock().take() {
            rx.close();
        }
    }
}
