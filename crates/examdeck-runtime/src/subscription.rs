#![forbid(unsafe_code)]

//! Recurring message sources.
//!
//! The dashboard's periodic work (the clock repaint, the schedule sweep,
//! the greeting check) arrives as messages from tickers running on
//! background threads. The update loop drains them between terminal events,
//! so every handler still runs to completion on the one main thread.
//!
//! Subscriptions here are fixed for the life of the program: the set is
//! started once after `init` and stopped as a whole at shutdown (or when the
//! set is dropped). Each subscription carries a stable id so an accidental
//! duplicate is skipped rather than doubled.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

/// Stable identifier for one subscription.
pub type SubId = u64;

/// A source of messages from outside the update loop.
///
/// `run` is called on a background thread and should loop until the stop
/// signal fires or the receiving end hangs up.
pub trait Subscription<M: Send + 'static>: Send {
    /// Identifier used to skip duplicates.
    fn id(&self) -> SubId;

    /// Produce messages until stopped.
    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal);
}

/// Cooperative shutdown flag handed to every running subscription.
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
        (signal, StopTrigger { inner })
    }

    /// Whether shutdown has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        let (flag, _) = &*self.inner;
        *flag.lock().unwrap()
    }

    /// Block until shutdown or until `duration` elapses.
    ///
    /// Returns `true` when stopping. Uses a condvar so the thread sleeps
    /// instead of spinning.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (flag, cvar) = &*self.inner;
        let mut stopped = flag.lock().unwrap();
        if *stopped {
            return true;
        }
        let (guard, _) = cvar.wait_timeout(stopped, duration).unwrap();
        stopped = guard;
        *stopped
    }
}

struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn fire(&self) {
        let (flag, cvar) = &*self.inner;
        *flag.lock().unwrap() = true;
        cvar.notify_all();
    }
}

struct Running {
    id: SubId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl Running {
    fn stop(mut self) {
        self.trigger.fire();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Running {
    fn drop(&mut self) {
        // Signal without joining; joining in drop could block shutdown.
        self.trigger.fire();
    }
}

/// The program's set of running subscriptions.
pub struct SubscriptionSet<M: Send + 'static> {
    running: Vec<Running>,
    sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
}

impl<M: Send + 'static> SubscriptionSet<M> {
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            running: Vec::new(),
            sender,
            receiver,
        }
    }

    /// Start every subscription in `subs`, skipping ids already running.
    pub fn start(&mut self, subs: Vec<Box<dyn Subscription<M>>>) {
        let mut active: HashSet<SubId> = self.running.iter().map(|r| r.id).collect();
        for sub in subs {
            let id = sub.id();
            if !active.insert(id) {
                tracing::warn!(sub_id = id, "duplicate subscription id, skipping");
                continue;
            }
            tracing::debug!(sub_id = id, "starting subscription");
            let (signal, trigger) = StopSignal::new();
            let sender = self.sender.clone();
            let thread = thread::spawn(move || {
                sub.run(sender, signal);
            });
            self.running.push(Running {
                id,
                trigger,
                thread: Some(thread),
            });
        }
    }

    /// Take every message that has arrived since the last drain.
    pub fn drain(&self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Stop and join every running subscription.
    pub fn stop_all(&mut self) {
        for running in self.running.drain(..) {
            tracing::debug!(sub_id = running.id, "stopping subscription");
            running.stop();
        }
    }
}

impl<M: Send + 'static> Default for SubscriptionSet<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Send + 'static> Drop for SubscriptionSet<M> {
    fn drop(&mut self) {
        self.stop_all();
    }
}

/// A fixed-interval ticker.
///
/// Sleeps on the stop signal between ticks, so shutdown is immediate and no
/// tick fires after it.
///
/// ```ignore
/// fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
///     vec![Box::new(Ticker::new(1, Duration::from_secs(1), || Msg::ClockTick))]
/// }
/// ```
pub struct Ticker<M: Send + 'static> {
    id: SubId,
    interval: Duration,
    make_msg: Box<dyn Fn() -> M + Send + Sync>,
}

impl<M: Send + 'static> Ticker<M> {
    /// A ticker with an explicit id, firing every `interval`.
    pub fn new(id: SubId, interval: Duration, make_msg: impl Fn() -> M + Send + Sync + 'static) -> Self {
        Self {
            id,
            interval,
            make_msg: Box::new(make_msg),
        }
    }
}

impl<M: Send + 'static> Subscription<M> for Ticker<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, stop: StopSignal) {
        loop {
            if stop.wait_timeout(self.interval) {
                break;
            }
            if sender.send((self.make_msg)()).is_err() {
                break;
            }
        }
    }
}

/// A test subscription that delivers a fixed batch of messages and exits.
pub struct ManualSubscription<M: Send + 'static> {
    id: SubId,
    messages: Vec<M>,
}

impl<M: Send + Clone + 'static> ManualSubscription<M> {
    #[must_use]
    pub fn new(id: SubId, messages: Vec<M>) -> Self {
        Self { id, messages }
    }
}

impl<M: Send + Clone + 'static> Subscription<M> for ManualSubscription<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(&self, sender: mpsc::Sender<M>, _stop: StopSignal) {
        for msg in &self.messages {
            if sender.send(msg.clone()).is_err() {
                break;
            }
        }
    }
}
