use crate::core::tasks::{run_once, Cancelled, Cleanup, TaskTable};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use crate::core::tasks::TaskId;

#[derive(Clone, Copy, Debug)]
enum HostHandle {
    Timeout(i32),
    AnimationFrame(i32),
}

#[derive(Clone, Copy, Debug)]
enum When {
    After(i32),
    NextFrame,
}

struct Pending {
    handle: HostHandle,
    closure: Closure<dyn FnMut()>,
}

/// Owns every pending timeout/animation-frame callback so they can be
/// cancelled individually or all at once on teardown.
///
/// Each task fires at most once. A closure is never dropped while it is on the
/// stack: finished or self-cancelled closures are parked in `spent` and freed
/// when the next task starts.
///
/// Cancelling must not strand DOM a task was meant to tidy up: tasks
/// scheduled with [`tidy_after`] run their work on cancel instead of firing.
#[derive(Default)]
pub struct Scheduler {
    running: Option<TaskId>,
    tasks: TaskTable<Pending>,
    spent: Vec<Closure<dyn FnMut()>>,
}

pub type SharedScheduler = Rc<RefCell<Scheduler>>;

impl Scheduler {
    pub fn shared() -> SharedScheduler {
        Rc::new(RefCell::new(Self::default()))
    }

    fn begin(&mut self, id: TaskId) {
        self.spent.clear();
        self.running = Some(id);
    }

    fn retire(&mut self, id: TaskId) {
        if let Some(p) = self.tasks.fired(id) {
            self.spent.push(p.closure);
        }
        if self.running == Some(id) {
            self.running = None;
        }
    }

    fn release(&mut self, cancelled: Cancelled<Pending>) -> Option<Cleanup> {
        let Cancelled { id, host, cleanup } = cancelled;
        clear_host(host.handle);
        if self.running == Some(id) {
            self.spent.push(host.closure);
        }
        cleanup
    }
}

/// Cancel one task. Returns false if it already fired or was cancelled.
pub fn cancel(scheduler: &SharedScheduler, id: TaskId) -> bool {
    let cleanup = {
        let mut s = scheduler.borrow_mut();
        match s.tasks.cancel(id) {
            Some(c) => s.release(c),
            None => return false,
        }
    };
    // cleanups may touch the scheduler, so run them unborrowed
    if let Some(cleanup) = cleanup {
        cleanup();
    }
    true
}

/// Cancel everything still pending; returns how many tasks were dropped.
pub fn cancel_all(scheduler: &SharedScheduler) -> usize {
    let (n, cleanups) = {
        let mut s = scheduler.borrow_mut();
        let cancelled = s.tasks.cancel_all();
        let n = cancelled.len();
        let cleanups: Vec<Cleanup> = cancelled
            .into_iter()
            .filter_map(|c| s.release(c))
            .collect();
        (n, cleanups)
    };
    for cleanup in cleanups {
        cleanup();
    }
    n
}

fn clear_host(handle: HostHandle) {
    let Some(window) = web::window() else {
        return;
    };
    match handle {
        HostHandle::Timeout(h) => window.clear_timeout_with_handle(h),
        HostHandle::AnimationFrame(h) => {
            _ = window.cancel_animation_frame(h);
        }
    }
}

fn schedule(
    scheduler: &SharedScheduler,
    when: When,
    task: Cleanup,
    cleanup: Option<Cleanup>,
) -> Option<TaskId> {
    let Some(window) = web::window() else {
        // nowhere to defer to; tidy now rather than never
        if let Some(cleanup) = cleanup {
            cleanup();
        }
        return None;
    };
    let id = scheduler.borrow_mut().tasks.allocate();
    let weak = Rc::downgrade(scheduler);
    let mut task = Some(task);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().begin(id);
        }
        if let Some(task) = task.take() {
            task();
        }
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().retire(id);
        }
    }) as Box<dyn FnMut()>);

    let handle = match when {
        When::After(ms) => window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map(HostHandle::Timeout),
        When::NextFrame => window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(HostHandle::AnimationFrame),
    };
    match handle {
        Ok(handle) => {
            scheduler
                .borrow_mut()
                .tasks
                .insert(id, Pending { handle, closure }, cleanup);
            Some(id)
        }
        Err(e) => {
            log::warn!("[timer] could not schedule {:?}: {:?}", when, e);
            if let Some(cleanup) = cleanup {
                cleanup();
            }
            None
        }
    }
}

/// Run `task` once after `delay_ms`. Dropped unrun if cancelled.
pub fn after(
    scheduler: &SharedScheduler,
    delay_ms: i32,
    task: impl FnOnce() + 'static,
) -> Option<TaskId> {
    schedule(scheduler, When::After(delay_ms), Box::new(task), None)
}

/// Run `task` once after `delay_ms`, or immediately if cancelled first.
/// For removals and resets that must happen either way.
pub fn tidy_after(
    scheduler: &SharedScheduler,
    delay_ms: i32,
    task: impl FnOnce() + 'static,
) -> Option<TaskId> {
    let (fire, cleanup) = run_once(task);
    schedule(scheduler, When::After(delay_ms), fire, Some(cleanup))
}

/// Run `task` once on the next animation frame. Dropped unrun if cancelled.
pub fn next_frame(scheduler: &SharedScheduler, task: impl FnOnce() + 'static) -> Option<TaskId> {
    schedule(scheduler, When::NextFrame, Box::new(task), None)
}
