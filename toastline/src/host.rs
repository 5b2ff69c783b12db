//! Async driver for a shared toast collection.
//!
//! The manager itself is clock-agnostic; this module supplies the single
//! logical timeline the lifecycle contract assumes. A driver task sleeps
//! until the earliest pending deadline, wakes early whenever a handle
//! mutates the collection, ticks the manager, and forwards the drained
//! events to the consumer. All mutation is serialized behind one mutex.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use log::warn;
use tokio::sync::mpsc;

use crate::config::ToastTimings;
use crate::events::ToastEvent;
use crate::manager::ToastManager;
use crate::record::{ToastId, ToastRecord, ToastSpec};

/// Sender half of the wakeup channel.
///
/// Non-blocking; redundant signals collapse into a single driver pass.
#[derive(Clone, Debug)]
struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    fn send(&self) {
        // Full buffer means a wakeup is already pending; closed means the
        // driver is gone and there is nothing left to wake.
        let _ = self.tx.try_send(());
    }
}

struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Consume buffered signals so several mutations yield one pass.
    fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

fn wakeup_channel() -> (WakeupSender, WakeupReceiver) {
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}

/// Handle for showing and dismissing toasts on a spawned host.
///
/// Cheap to clone; every mutation nudges the driver so deadlines are
/// recomputed immediately.
#[derive(Clone)]
pub struct ToastHandle {
    manager: Arc<Mutex<ToastManager>>,
    wakeup: WakeupSender,
}

impl ToastHandle {
    /// Show a toast. Returns its id.
    pub fn show(&self, spec: impl Into<ToastSpec>) -> ToastId {
        let id = match self.manager.lock() {
            Ok(mut manager) => manager.add(spec, Instant::now()),
            Err(poisoned) => poisoned.into_inner().add(spec, Instant::now()),
        };
        self.wakeup.send();
        id
    }

    /// Request a user-style dismissal. Idempotent.
    pub fn dismiss(&self, id: ToastId) {
        match self.manager.lock() {
            Ok(mut manager) => manager.dismiss(id, Instant::now()),
            Err(poisoned) => poisoned.into_inner().dismiss(id, Instant::now()),
        }
        self.wakeup.send();
    }

    /// Remove a toast outright. Absent ids are a no-op.
    pub fn remove(&self, id: ToastId) {
        match self.manager.lock() {
            Ok(mut manager) => manager.remove(id),
            Err(poisoned) => poisoned.into_inner().remove(id),
        }
        self.wakeup.send();
    }

    /// Drop every active toast.
    pub fn clear(&self) {
        match self.manager.lock() {
            Ok(mut manager) => manager.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
        self.wakeup.send();
    }

    /// Snapshot of the active toasts, oldest first.
    pub fn snapshot(&self) -> Vec<ToastRecord> {
        match self.manager.lock() {
            Ok(manager) => manager.list().to_vec(),
            Err(poisoned) => poisoned.into_inner().list().to_vec(),
        }
    }
}

/// Spawns and owns the driver task for a toast collection.
pub struct ToastHost;

impl ToastHost {
    /// Spawn a driver on the current tokio runtime.
    ///
    /// Returns a handle for mutations and the event stream for the
    /// rendering layer. The driver exits once every handle is dropped and
    /// the collection has played out its remaining transitions.
    pub fn spawn(timings: ToastTimings) -> (ToastHandle, mpsc::UnboundedReceiver<ToastEvent>) {
        let manager = Arc::new(Mutex::new(ToastManager::with_timings(timings)));
        let (wakeup_tx, wakeup_rx) = wakeup_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let handle = ToastHandle {
            manager: Arc::clone(&manager),
            wakeup: wakeup_tx,
        };

        tokio::spawn(drive(manager, wakeup_rx, event_tx));

        (handle, event_rx)
    }
}

/// The driver loop: park until something is due or a handle wakes us,
/// then tick and forward events.
async fn drive(
    manager: Arc<Mutex<ToastManager>>,
    mut wakeup: WakeupReceiver,
    events: mpsc::UnboundedSender<ToastEvent>,
) {
    let mut handles_live = true;
    loop {
        let deadline = match manager.lock() {
            Ok(manager) => manager.next_deadline(),
            Err(poisoned) => poisoned.into_inner().next_deadline(),
        };

        match deadline {
            Some(deadline) => {
                let sleep = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline));
                tokio::select! {
                    signal = wakeup.recv(), if handles_live => {
                        if signal.is_none() {
                            handles_live = false;
                        }
                        wakeup.drain();
                    }
                    () = sleep => {}
                }
            }
            None => {
                if !handles_live {
                    break;
                }
                // Nothing scheduled: park until a handle mutates.
                match wakeup.recv().await {
                    Some(()) => wakeup.drain(),
                    None => handles_live = false,
                }
            }
        }

        let drained = match manager.lock() {
            Ok(mut manager) => {
                manager.tick(Instant::now());
                manager.take_events()
            }
            Err(poisoned) => {
                let mut manager = poisoned.into_inner();
                manager.tick(Instant::now());
                manager.take_events()
            }
        };
        for event in drained {
            if events.send(event).is_err() {
                // Consumer went away; keep ticking so state stays coherent
                // for snapshot() callers, but stop warning repeatedly.
                warn!("toast event receiver dropped, discarding events");
                break;
            }
        }
    }
}
