//! Bookkeeping for live interval handles.
//!
//! The browser side owns the actual timers (Leptos interval handles), but
//! the rule "at most one live timer per kind, everything cancelled on
//! teardown" lives here so it can be tested without a browser.

use crate::showcase::{TimerKind, TimerRequest};

/// Something that can start and cancel repeating timers.
pub trait TimerHost {
    /// Handle of a running timer.
    type Handle;

    /// Start a repeating timer for `request`. `None` if the host refused.
    fn start(&mut self, request: TimerRequest) -> Option<Self::Handle>;

    /// Stop a timer. Cancelling twice is never attempted by [`TimerSet`].
    fn cancel(&mut self, handle: Self::Handle);
}

/// Live timers of one cycler, at most one per [`TimerKind`].
#[derive(Debug)]
pub struct TimerSet<H> {
    live: Vec<(TimerKind, H)>,
}

impl<H> Default for TimerSet<H> {
    fn default() -> Self {
        Self { live: Vec::new() }
    }
}

impl<H> TimerSet<H> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every live timer, then start one per request.
    ///
    /// A later request for a kind already started in the same batch
    /// replaces the earlier one.
    pub fn replace<T>(&mut self, host: &mut T, requests: &[TimerRequest])
    where
        T: TimerHost<Handle = H>,
    {
        self.clear(host);
        for request in requests {
            self.cancel_kind(host, request.kind);
            match host.start(*request) {
                Some(handle) => self.live.push((request.kind, handle)),
                None => tracing::warn!(kind = %request.kind, "timer host refused to start timer"),
            }
        }
    }

    /// Cancel every live timer.
    pub fn clear<T>(&mut self, host: &mut T)
    where
        T: TimerHost<Handle = H>,
    {
        for (_, handle) in self.live.drain(..) {
            host.cancel(handle);
        }
    }

    /// Cancel the timer of one kind, if live.
    pub fn cancel_kind<T>(&mut self, host: &mut T, kind: TimerKind) -> bool
    where
        T: TimerHost<Handle = H>,
    {
        match self.live.iter().position(|(k, _)| *k == kind) {
            Some(pos) => {
                let (_, handle) = self.live.swap_remove(pos);
                host.cancel(handle);
                true
            }
            None => false,
        }
    }

    /// Whether a timer of `kind` is live.
    pub fn contains(&self, kind: TimerKind) -> bool {
        self.live.iter().any(|(k, _)| *k == kind)
    }

    /// Number of live timers.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True when nothing is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeHost {
        next: u32,
        running: Vec<u32>,
        refuse: bool,
    }

    impl TimerHost for FakeHost {
        type Handle = u32;

        fn start(&mut self, _request: TimerRequest) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            self.running.push(self.next);
            Some(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            let before = self.running.len();
            self.running.retain(|h| *h != handle);
            assert_eq!(before - 1, self.running.len(), "double cancel of {handle}");
        }
    }

    fn req(kind: TimerKind) -> TimerRequest {
        TimerRequest {
            kind,
            interval: Duration::from_millis(20),
            generation: 1,
        }
    }

    #[test]
    fn replace_cancels_previous_batch() {
        let mut host = FakeHost::default();
        let mut set = TimerSet::new();
        set.replace(&mut host, &[req(TimerKind::Cycle), req(TimerKind::Typing)]);
        assert_eq!(host.running, vec![1, 2]);

        set.replace(&mut host, &[req(TimerKind::Counter)]);
        assert_eq!(host.running, vec![3]);
        assert!(set.contains(TimerKind::Counter));
        assert!(!set.contains(TimerKind::Cycle));
    }

    #[test]
    fn one_timer_per_kind() {
        let mut host = FakeHost::default();
        let mut set = TimerSet::new();
        set.replace(&mut host, &[req(TimerKind::Sweep), req(TimerKind::Sweep)]);
        assert_eq!(set.len(), 1);
        assert_eq!(host.running, vec![2]);
    }

    #[test]
    fn clear_and_cancel_kind() {
        let mut host = FakeHost::default();
        let mut set = TimerSet::new();
        set.replace(&mut host, &[req(TimerKind::Counter), req(TimerKind::Sweep)]);

        assert!(set.cancel_kind(&mut host, TimerKind::Counter));
        assert!(!set.cancel_kind(&mut host, TimerKind::Counter));
        assert_eq!(host.running, vec![2]);

        set.clear(&mut host);
        assert!(set.is_empty());
        assert!(host.running.is_empty());
    }

    #[test]
    fn refused_timers_are_not_tracked() {
        let mut host = FakeHost {
            refuse: true,
            ..Default::default()
        };
        let mut set = TimerSet::new();
        set.replace(&mut host, &[req(TimerKind::Script)]);
        assert!(set.is_empty());
    }
}
