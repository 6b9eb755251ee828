//! Frame tickers
//!
//! A [`Ticker`] invokes registered frame callbacks once per display refresh
//! until they are cancelled. Decoupling scheduling from drawing lets the
//! engine run against a real refresh source or against [`ManualTicker`],
//! which only advances when told to.

use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

new_key_type! {
    /// Registration handle returned by [`Ticker::schedule`]
    pub struct TickId;
}

/// Timing information passed to each frame callback
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInfo {
    /// Monotonic frame counter of the ticker
    pub frame: u64,
    /// Seconds since the previous frame
    pub dt: f32,
}

/// Callback run once per frame
pub type FrameCallback = Box<dyn FnMut(FrameInfo) + Send>;

/// Refresh-synchronized scheduling primitive
pub trait Ticker: Send + Sync {
    /// Run `callback` once per frame until cancelled
    fn schedule(&self, callback: FrameCallback) -> TickId;

    /// Stop invoking a callback. Returns false if it was not registered.
    fn cancel(&self, id: TickId) -> bool;

    fn is_scheduled(&self, id: TickId) -> bool;
}

type SharedCallback = Arc<Mutex<FrameCallback>>;

/// Callback table shared by the ticker implementations
#[derive(Default)]
struct FrameCallbacks {
    callbacks: Mutex<SlotMap<TickId, SharedCallback>>,
}

impl FrameCallbacks {
    fn table(&self) -> std::sync::MutexGuard<'_, SlotMap<TickId, SharedCallback>> {
        self.callbacks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, callback: FrameCallback) -> TickId {
        self.table().insert(Arc::new(Mutex::new(callback)))
    }

    fn remove(&self, id: TickId) -> bool {
        self.table().remove(id).is_some()
    }

    fn contains(&self, id: TickId) -> bool {
        self.table().contains_key(id)
    }

    fn len(&self) -> usize {
        self.table().len()
    }

    /// Run every registered callback once. Returns how many ran.
    fn run_frame(&self, info: FrameInfo) -> usize {
        let snapshot: Vec<(TickId, SharedCallback)> = self
            .table()
            .iter()
            .map(|(id, cb)| (id, Arc::clone(cb)))
            .collect();

        let mut ran = 0;
        for (id, callback) in snapshot {
            // Cancelled by an earlier callback in this frame
            if !self.contains(id) {
                continue;
            }
            let mut callback = callback.lock().unwrap_or_else(PoisonError::into_inner);
            (*callback)(info);
            ran += 1;
        }
        ran
    }
}

/// A ticker that only advances when [`ManualTicker::advance`] is called
///
/// Used by tests and the headless CLI preview to step animations
/// deterministically.
pub struct ManualTicker {
    callbacks: FrameCallbacks,
    frame: AtomicU64,
    frame_dt: f32,
}

impl ManualTicker {
    /// Ticker reporting a 60 Hz frame interval
    pub fn new() -> Self {
        Self::with_frame_dt(1.0 / 60.0)
    }

    pub fn with_frame_dt(frame_dt: f32) -> Self {
        Self {
            callbacks: FrameCallbacks::default(),
            frame: AtomicU64::new(0),
            frame_dt,
        }
    }

    /// Produce one frame. Returns the number of callbacks that ran.
    pub fn advance(&self) -> usize {
        let frame = self.frame.fetch_add(1, Ordering::SeqCst) + 1;
        self.callbacks.run_frame(FrameInfo {
            frame,
            dt: self.frame_dt,
        })
    }

    pub fn advance_by(&self, frames: usize) {
        for _ in 0..frames {
            self.advance();
        }
    }

    /// Frames produced so far
    pub fn frame(&self) -> u64 {
        self.frame.load(Ordering::SeqCst)
    }

    /// Number of live registrations
    pub fn active_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl Default for ManualTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for ManualTicker {
    fn schedule(&self, callback: FrameCallback) -> TickId {
        self.callbacks.insert(callback)
    }

    fn cancel(&self, id: TickId) -> bool {
        self.callbacks.remove(id)
    }

    fn is_scheduled(&self, id: TickId) -> bool {
        self.callbacks.contains(id)
    }
}

struct IntervalShared {
    callbacks: FrameCallbacks,
    running: AtomicBool,
    frame: AtomicU64,
}

/// A ticker driven by a background thread at a target frame rate
pub struct IntervalTicker {
    shared: Arc<IntervalShared>,
    target_fps: u32,
    thread: Mutex<Option<JoinHandle<()>>>,
}

impl IntervalTicker {
    /// Spawn the frame thread
    pub fn new(target_fps: u32) -> std::io::Result<Self> {
        let target_fps = target_fps.max(1);
        let shared = Arc::new(IntervalShared {
            callbacks: FrameCallbacks::default(),
            running: AtomicBool::new(true),
            frame: AtomicU64::new(0),
        });

        let frame_interval = Duration::from_secs_f64(1.0 / target_fps as f64);
        let thread_shared = Arc::clone(&shared);
        let thread = std::thread::Builder::new()
            .name("folio-ticker".to_string())
            .spawn(move || {
                let mut last_frame = Instant::now();
                while thread_shared.running.load(Ordering::SeqCst) {
                    let elapsed = last_frame.elapsed();
                    if elapsed < frame_interval {
                        std::thread::sleep(frame_interval - elapsed);
                    }
                    let now = Instant::now();
                    let dt = (now - last_frame).as_secs_f32();
                    last_frame = now;

                    if !thread_shared.running.load(Ordering::SeqCst) {
                        break;
                    }
                    let frame = thread_shared.frame.fetch_add(1, Ordering::SeqCst) + 1;
                    thread_shared.callbacks.run_frame(FrameInfo { frame, dt });
                }
                tracing::debug!("IntervalTicker thread exiting");
            })?;

        tracing::debug!("IntervalTicker started at {} fps", target_fps);

        Ok(Self {
            shared,
            target_fps,
            thread: Mutex::new(Some(thread)),
        })
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Frames produced so far
    pub fn frame(&self) -> u64 {
        self.shared.frame.load(Ordering::SeqCst)
    }

    /// Stop the frame thread and wait for it to exit
    pub fn shutdown(&self) {
        self.shared.running.store(false, Ordering::SeqCst);
        let handle = self
            .thread
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                tracing::warn!("IntervalTicker thread panicked");
            }
        }
    }
}

impl Ticker for IntervalTicker {
    fn schedule(&self, callback: FrameCallback) -> TickId {
        self.shared.callbacks.insert(callback)
    }

    fn cancel(&self, id: TickId) -> bool {
        self.shared.callbacks.remove(id)
    }

    fn is_scheduled(&self, id: TickId) -> bool {
        self.shared.callbacks.contains(id)
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
