use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use time::{Duration, OffsetDateTime};

/// How long a fetched project image stays fresh.

pub const IMAGE_STALE_TIME: Duration = Duration::minutes(5);

/// Identifies one cached query, e.g. the first image of project 12.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QueryKey {
    pub kind: &'static str,
    pub id: i32,
}

impl QueryKey {
    pub fn project_image(project_id: i32) -> Self {
        QueryKey { kind: "projectImage", id: project_id }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

type InFlight<V, E> = Shared<LocalBoxFuture<'static, Result<V, E>>>;

enum Entry<V, E> {
    Fetching { ticket: u64, future: InFlight<V, E> },
    Fetched { value: V, at: OffsetDateTime },
}

enum Lookup<V, E> {
    Hit(V),
    Join(u64, InFlight<V, E>),
    Miss,
}

/// A read-through cache for query results, meant for a single threaded
/// runtime like the browser's.
///
/// A value fetched less than `stale_time` ago is returned as-is. Otherwise the
/// first caller for a key runs its fetcher, and anyone asking for the same key
/// while that is in flight awaits the same future instead of fetching again.
/// Only successes are kept; a failure is handed to everyone who was waiting
/// and then dropped, so the next read fetches again.

pub struct QueryCache<K, V, E> {
    entries: RefCell<HashMap<K, Entry<V, E>>>,
    stale_time: Duration,
    clock: Box<dyn Fn() -> OffsetDateTime>,
    next_ticket: Cell<u64>,
}

impl<K, V, E> QueryCache<K, V, E>
    where
        K: Eq + Hash + Clone + fmt::Display,
        V: Clone + 'static,
        E: Clone + 'static,
{
    pub fn new(stale_time: Duration) -> Self {
        Self::with_clock(stale_time, OffsetDateTime::now_utc)
    }

    pub fn with_clock(stale_time: Duration, clock: impl Fn() -> OffsetDateTime + 'static) -> Self {
        QueryCache {
            entries: RefCell::new(HashMap::new()),
            stale_time,
            clock: Box::new(clock),
            next_ticket: Cell::new(0),
        }
    }

    /// Returns the cached value for `key` if it is still fresh, without
    /// fetching anything.

    pub fn peek(&self, key: &K) -> Option<V> {
        let now = (self.clock)();
        match self.entries.borrow().get(key) {
            Some(Entry::Fetched { value, at }) if now - *at < self.stale_time => Some(value.clone()),
            _ => None,
        }
    }

    /// Returns the fresh cached value for `key`, or the result of the fetch
    /// already in flight for it, or runs `fetcher` and caches what it returns.

    pub async fn fetch<F, Fut>(&self, key: K, fetcher: F) -> Result<V, E>
        where
            F: FnOnce() -> Fut,
            Fut: Future<Output = Result<V, E>> + 'static,
    {
        let lookup = self.lookup(&key);
        let (ticket, in_flight) = match lookup {
            Lookup::Hit(value) => {
                log::debug!("cache hit for {}", key);
                return Ok(value);
            }
            Lookup::Join(ticket, in_flight) => {
                log::debug!("joining in-flight fetch for {}", key);
                (ticket, in_flight)
            }
            Lookup::Miss => {
                log::debug!("cache miss for {}, fetching", key);
                let ticket = self.next_ticket.get();
                self.next_ticket.set(ticket + 1);
                let in_flight = fetcher().boxed_local().shared();
                self.entries.borrow_mut().insert(
                    key.clone(),
                    Entry::Fetching { ticket, future: in_flight.clone() },
                );
                (ticket, in_flight)
            }
        };

        let result = in_flight.await;

        // whoever finishes first settles the entry, unless a newer fetch
        // replaced it in the meantime
        let mut entries = self.entries.borrow_mut();
        let settles = matches!(
            entries.get(&key),
            Some(Entry::Fetching { ticket: current, .. }) if *current == ticket
        );
        if settles {
            match &result {
                Ok(value) => {
                    entries.insert(key, Entry::Fetched { value: value.clone(), at: (self.clock)() });
                }
                Err(_) => {
                    entries.remove(&key);
                }
            }
        }

        result
    }

    fn lookup(&self, key: &K) -> Lookup<V, E> {
        let now = (self.clock)();
        match self.entries.borrow().get(key) {
            Some(Entry::Fetched { value, at }) if now - *at < self.stale_time => Lookup::Hit(value.clone()),
            Some(Entry::Fetching { ticket, future }) => Lookup::Join(*ticket, future.clone()),
            _ => Lookup::Miss,
        }
    }
}
