use std::cell::Cell;
use std::rc::Rc;

/// Marks whether the effect that started a request still wants its result.
///
/// An effect takes a new ticket each time it runs and retires it in its
/// destructor, which runs when the component unmounts or before the effect
/// runs again for new dependencies. A response that comes back on a retired
/// ticket belongs to an id the component no longer shows and must be dropped.

#[derive(Clone, Debug)]
pub struct Ticket {
    live: Rc<Cell<bool>>,
}

impl Default for Ticket {
    fn default() -> Self {
        Ticket::new()
    }
}

impl Ticket {
    pub fn new() -> Self {
        Ticket { live: Rc::new(Cell::new(true)) }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Retires this ticket and every clone of it.

    pub fn retire(&self) {
        self.live.set(false);
    }

    /// Runs `apply` only if the ticket is still live. Returns whether it ran.

    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_live() {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{QueryCache, QueryKey, IMAGE_STALE_TIME};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn retiring_reaches_every_clone() {
        let ticket = Ticket::new();
        let held_by_request = ticket.clone();
        assert!(held_by_request.is_live());

        ticket.retire();
        assert!(!held_by_request.is_live());
        assert!(!held_by_request.apply(|| panic!("applied on a retired ticket")));
    }

    #[test]
    fn tickets_are_independent() {
        let first = Ticket::new();
        let second = Ticket::new();
        first.retire();
        assert!(second.is_live());
    }

    #[test]
    fn late_result_for_old_id_is_dropped() {
        let cache: QueryCache<QueryKey, &'static str, String> = QueryCache::new(IMAGE_STALE_TIME);
        let shown: RefCell<Option<&'static str>> = RefCell::new(None);
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();

        // the card mounts with project 1, then switches to project 2 while 1
        // is still loading; 2 answers first, 1 answers last
        let ticket_a = Ticket::new();
        let load_a = {
            let ticket = ticket_a.clone();
            let shown = &shown;
            let fetch = cache.fetch(QueryKey::project_image(1), move || async move {
                rx_a.await.map_err(|_| "dropped".to_owned())
            });
            async move {
                let result = fetch.await;
                ticket.apply(|| *shown.borrow_mut() = result.ok());
            }
        };
        let switch_to_b = async {
            ticket_a.retire();
        };
        let ticket_b = Ticket::new();
        let load_b = {
            let ticket = ticket_b.clone();
            let shown = &shown;
            let fetch = cache.fetch(QueryKey::project_image(2), move || async move {
                rx_b.await.map_err(|_| "dropped".to_owned())
            });
            async move {
                let result = fetch.await;
                ticket.apply(|| *shown.borrow_mut() = result.ok());
            }
        };
        let answer = async move {
            tx_b.send("/img/two.png").unwrap();
            tx_a.send("/img/one.png").unwrap();
        };

        block_on(async { futures::join!(load_a, switch_to_b, load_b, answer) });

        assert_eq!(*shown.borrow(), Some("/img/two.png"));
        assert!(ticket_b.is_live());
        // the old id's result still lands in the cache for the next card
        assert_eq!(cache.peek(&QueryKey::project_image(1)), Some("/img/one.png"));
    }
}
