//! The paced action queue.
//!
//! Every board mutation runs as a boxed closure on a single worker thread, in
//! the order it was enqueued and never concurrently with another. After each
//! closure the worker sleeps for the configured delay so a human can follow
//! the play. A pending counter lets callers block until all queued work,
//! including work enqueued by queued work, has run.

use core::time::Duration;
use std::io;
use std::sync::{Arc, Weak};
use std::thread::{self, ThreadId};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tracing::{debug, error, trace};

use crate::board::{Board, Table};
use crate::sync::Pending;

pub(crate) type Action = Box<dyn FnOnce(&Board) + Send + 'static>;

#[derive(Clone)]
pub(crate) struct ActionQueue {
    sender: UnboundedSender<Action>,
    pending: Arc<Pending>,
    worker: ThreadId,
}

impl ActionQueue {
    /// Starts the worker. It only holds weak references to the table and the
    /// channel, so it stops once every board handle has been dropped.
    pub(crate) fn spawn(table: Weak<Table>, delay: Duration) -> io::Result<Self> {
        let (sender, receiver) = mpsc::unbounded_channel();
        let pending = Arc::new(Pending::new());

        let handle = {
            let sender = sender.downgrade();
            let pending = Arc::clone(&pending);
            thread::Builder::new()
                .name("action-queue".to_owned())
                .spawn(move || run(receiver, &sender, &table, &pending, delay))?
        };

        Ok(Self {
            sender,
            pending,
            worker: handle.thread().id(),
        })
    }

    pub(crate) fn enqueue(&self, action: impl FnOnce(&Board) + Send + 'static) {
        self.pending.add();
        if self.sender.send(Box::new(action)).is_err() {
            self.pending.done();
            error!("action worker has stopped, dropping action");
        }
    }

    pub(crate) fn on_worker(&self) -> bool {
        thread::current().id() == self.worker
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.count()
    }

    /// Blocks until every queued action has run.
    ///
    /// On the worker itself this returns at once, since the caller is part of
    /// the work being waited for.
    ///
    /// # Panics
    ///
    /// Panics if the worker died while running an action.
    pub(crate) fn wait(&self) {
        if self.on_worker() {
            return;
        }
        self.pending.wait();
        assert!(
            !self.pending.is_halted(),
            "action worker halted on a fatal error"
        );
    }
}

/// Marks one action as done when dropped, halting the queue if the action
/// panicked.
struct Completion<'a>(&'a Pending);

impl Drop for Completion<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.halt();
        }
        self.0.done();
    }
}

fn run(
    mut receiver: UnboundedReceiver<Action>,
    sender: &WeakUnboundedSender<Action>,
    table: &Weak<Table>,
    pending: &Arc<Pending>,
    delay: Duration,
) {
    debug!(?delay, "action worker started");

    while let Some(action) = receiver.blocking_recv() {
        let completion = Completion(pending);
        let (Some(table), Some(sender)) = (table.upgrade(), sender.upgrade()) else {
            break;
        };

        let queue = ActionQueue {
            sender,
            pending: Arc::clone(pending),
            worker: thread::current().id(),
        };
        let board = Board::from_parts(table, queue);
        action(&board);
        drop(board);
        drop(completion);
        trace!(pending = pending.count(), "action done");

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    debug!("action worker stopped");
}
