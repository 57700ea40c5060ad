use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: FrameCallback,
}

struct RuntimeInner {
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    /// Callbacks of the frame being drained. Cancelling one removes it here
    /// too, so it never runs.
    draining: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<u64>,
    last_frame_time_nanos: Cell<Option<u64>>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            draining: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
            last_frame_time_nanos: Cell::new(None),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn register_frame_callback(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry { id, callback });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        // Dropped only after both borrows end; a closure's captures may cancel
        // further callbacks when they go away.
        let removed = Self::remove_entry(&self.draining, id)
            .or_else(|| Self::remove_entry(&self.frame_callbacks, id));
        if self.frame_callbacks.borrow().is_empty() {
            self.needs_frame.set(false);
        }
        drop(removed);
    }

    fn remove_entry(
        queue: &RefCell<VecDeque<FrameCallbackEntry>>,
        id: FrameCallbackId,
    ) -> Option<FrameCallbackEntry> {
        let mut queue = queue.borrow_mut();
        let index = queue.iter().position(|entry| entry.id == id)?;
        queue.remove(index)
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(previous) = self.last_frame_time_nanos.get() {
            if frame_time_nanos < previous {
                log::warn!(
                    "frame time went backwards ({} -> {}), callbacks see a stale clock",
                    previous,
                    frame_time_nanos
                );
            }
        }
        self.last_frame_time_nanos.set(Some(frame_time_nanos));

        // Callbacks registered while draining run on the next frame.
        let count = {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            let mut draining = self.draining.borrow_mut();
            draining.extend(callbacks.drain(..));
            draining.len()
        };
        log::trace!(
            "draining {} frame callbacks at {}ns",
            count,
            frame_time_nanos
        );
        loop {
            let next = self.draining.borrow_mut().pop_front();
            let Some(entry) = next else {
                break;
            };
            (entry.callback)(frame_time_nanos);
        }
        if !self.has_frame_callbacks() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame callback queue.
///
/// Dropping the runtime makes every outstanding [`RuntimeHandle`] inert:
/// registrations made through a dead handle return `None` and never fire.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }

    /// Whether any work is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner.has_frame_callbacks()
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.inner.drain_frame_callbacks(frame_time_nanos);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
