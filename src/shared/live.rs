//! Change notification bus and live queries.
//!
//! Writes publish change events on a [`ChangeBus`]; a [`LiveQuery`] holds a
//! subscription plus the query it re-runs whenever a relevant change lands.
//! Events only mark the result dirty. The emitted value is always a fresh
//! read, so a subscriber that falls behind resynchronizes by re-querying.

use std::sync::Arc;

use diesel::sqlite::SqliteConnection;
use futures::stream::{self, Stream};
use tokio::sync::broadcast;
use tokio::task;

use crate::shared::database::DbPool;
use crate::shared::errors::{AppError, AppResult};

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// In-process fan-out of row-change events.
///
/// Wraps a [`broadcast::Sender`] so any number of live queries can
/// independently observe every published change.
pub struct ChangeBus<E> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone + Send + 'static> ChangeBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a change. Fire-and-forget: a send with no live subscribers
    /// is not an error.
    pub fn publish(&self, event: E) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }
}

impl<E: Clone + Send + 'static> Default for ChangeBus<E> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

type QueryFn<T> = dyn Fn(&mut SqliteConnection) -> AppResult<T> + Send + Sync;
type FilterFn<E> = dyn Fn(&E) -> bool + Send + Sync;

/// A query subscribed to the rows it reads.
///
/// The first [`recv`](LiveQuery::recv) emits the current result immediately;
/// each later call waits for a change matching the query's partition filter,
/// re-runs the query, and emits the fresh result. `None` means the owning
/// store is gone. Dropping the query cancels the subscription; writes in
/// flight are unaffected.
pub struct LiveQuery<T, E> {
    pool: DbPool,
    query: Arc<QueryFn<T>>,
    filter: Box<FilterFn<E>>,
    rx: broadcast::Receiver<E>,
    primed: bool,
}

impl<T, E> LiveQuery<T, E>
where
    T: Send + 'static,
    E: Clone + Send + 'static,
{
    pub(crate) fn new(
        pool: DbPool,
        rx: broadcast::Receiver<E>,
        query: impl Fn(&mut SqliteConnection) -> AppResult<T> + Send + Sync + 'static,
        filter: impl Fn(&E) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            pool,
            query: Arc::new(query),
            filter: Box::new(filter),
            rx,
            primed: false,
        }
    }

    /// Wait for the next emission.
    pub async fn recv(&mut self) -> Option<AppResult<T>> {
        if !self.primed {
            self.primed = true;
            return Some(self.run().await);
        }

        loop {
            match self.rx.recv().await {
                Ok(change) if (self.filter)(&change) => return Some(self.run().await),
                Ok(_) => continue,
                // Missed events; the re-read below catches us up.
                Err(broadcast::error::RecvError::Lagged(_)) => return Some(self.run().await),
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    async fn run(&self) -> AppResult<T> {
        let pool = self.pool.clone();
        let query = self.query.clone();

        task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(AppError::from)?;
            query(&mut conn)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Live query task failed: {}", e)))?
    }

    /// Adapt the live query to a [`Stream`] of results.
    pub fn into_stream(self) -> impl Stream<Item = AppResult<T>> {
        stream::unfold(self, |mut live| async move {
            live.recv().await.map(|item| (item, live))
        })
    }
}
