use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

pub type Cleanup = Box<dyn FnOnce()>;

/// Handle to a deferred callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

struct Entry<H> {
    host: H,
    cleanup: Option<Cleanup>,
}

/// A task that was cancelled before it fired. `cleanup` must still run so the
/// DOM the task would have tidied isn't left behind.
pub struct Cancelled<H> {
    pub id: TaskId,
    pub host: H,
    pub cleanup: Option<Cleanup>,
}

/// Bookkeeping for pending tasks, independent of how the host schedules them.
/// `H` is whatever the host needs to cancel and free a task.
pub struct TaskTable<H> {
    next_id: u32,
    entries: FnvHashMap<TaskId, Entry<H>>,
}

impl<H> Default for TaskTable<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: FnvHashMap::default(),
        }
    }
}

impl<H> TaskTable<H> {
    pub fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn insert(&mut self, id: TaskId, host: H, cleanup: Option<Cleanup>) {
        self.entries.insert(id, Entry { host, cleanup });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The task ran; forget it. Its cleanup is dropped unrun.
    pub fn fired(&mut self, id: TaskId) -> Option<H> {
        self.entries.remove(&id).map(|e| e.host)
    }

    pub fn cancel(&mut self, id: TaskId) -> Option<Cancelled<H>> {
        self.entries.remove(&id).map(|e| Cancelled {
            id,
            host: e.host,
            cleanup: e.cleanup,
        })
    }

    pub fn cancel_all(&mut self) -> Vec<Cancelled<H>> {
        self.entries
            .drain()
            .map(|(id, e)| Cancelled {
                id,
                host: e.host,
                cleanup: e.cleanup,
            })
            .collect()
    }
}

/// Split `task` into a fire half and a cleanup half sharing one slot: whichever
/// is called first runs `task`, the other does nothing.
pub fn run_once(task: impl FnOnce() + 'static) -> (Cleanup, Cleanup) {
    let slot: Rc<RefCell<Option<Cleanup>>> = Rc::new(RefCell::new(Some(Box::new(task))));
    let take = move |slot: &Rc<RefCell<Option<Cleanup>>>| {
        let task = slot.borrow_mut().take();
        if let Some(task) = task {
            task();
        }
    };
    let fire_slot = slot.clone();
    (
        Box::new(move || take(&fire_slot)),
        Box::new(move || take(&slot)),
    )
}
