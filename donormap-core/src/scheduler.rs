use donormap_entities::{geo::MapBbox, time::TimestampMs};
use time::Duration;

pub type RequestSeq = u64;

/// A search the scheduler has admitted. The caller runs the query and
/// reports back with [`SearchThrottle::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchJob {
    pub seq: RequestSeq,
    pub bbox: MapBbox,
}

/// Classification of a finished search against the newest issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The newest request; its result may be applied to the render surface.
    Fresh,
    /// Superseded by a later request; its result must be discarded.
    Stale,
}

/// Admission control for bounding-box searches.
///
/// Viewport extents change rapidly while the user pans and zooms, and the
/// push channel can fire at any moment. The throttle admits at most one
/// search per cooldown window and remembers only the latest requested box
/// in between, so a burst of triggers collapses into a single query for
/// the final viewport.
///
/// The machine is driven entirely by its caller: every method takes the
/// current time as an argument and none of them block. Requests carry
/// monotonically increasing sequence numbers; a response whose sequence
/// number no longer matches the newest issued request is reported as
/// [`Freshness::Stale`]. A request that outlives the cooldown window is
/// written off when the next queued box is due, which means its eventual
/// response turns stale instead of blocking progress.
///
/// One instance belongs to exactly one map view and is dropped with it.
#[derive(Debug)]
pub struct SearchThrottle {
    cooldown: Duration,
    last_issued_at: Option<TimestampMs>,
    queued: Option<MapBbox>,
    in_flight: Option<RequestSeq>,
    seq: RequestSeq,
}

impl SearchThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_issued_at: None,
            queued: None,
            in_flight: None,
            seq: 0,
        }
    }

    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    fn cooling(&self, now: TimestampMs) -> bool {
        self.last_issued_at
            .is_some_and(|at| now - at < self.cooldown)
    }

    fn issue(&mut self, bbox: MapBbox, now: TimestampMs) -> SearchJob {
        self.seq += 1;
        self.in_flight = Some(self.seq);
        self.last_issued_at = Some(now);
        self.queued = None;
        SearchJob {
            seq: self.seq,
            bbox,
        }
    }

    /// Feeds a trigger event (initial load, viewport change, or push
    /// notification resolved to the current viewport) into the machine.
    ///
    /// Returns the search to run if the trigger is admitted; otherwise the
    /// box is queued, overwriting any previously queued one.
    pub fn trigger(&mut self, bbox: MapBbox, now: TimestampMs) -> Option<SearchJob> {
        if self.cooling(now) || self.in_flight.is_some() {
            self.queued = Some(bbox);
            return None;
        }
        Some(self.issue(bbox, now))
    }

    /// Marks the search with the given sequence number as finished,
    /// successfully or not. A failed search completes its cycle like any
    /// other; the next trigger retries naturally.
    pub fn complete(&mut self, seq: RequestSeq) -> Freshness {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
        }
        if seq == self.seq {
            Freshness::Fresh
        } else {
            Freshness::Stale
        }
    }

    /// Releases the queued box once the cooldown window has elapsed.
    ///
    /// Callers invoke this after [`complete`](Self::complete) and whenever
    /// [`next_deadline`](Self::next_deadline) passes.
    pub fn poll(&mut self, now: TimestampMs) -> Option<SearchJob> {
        if self.cooling(now) {
            return None;
        }
        let bbox = self.queued?;
        Some(self.issue(bbox, now))
    }

    /// The instant at which [`poll`](Self::poll) will make progress, or
    /// `None` while no work is queued.
    pub fn next_deadline(&self) -> Option<TimestampMs> {
        self.queued?;
        self.last_issued_at.map(|at| at + self.cooldown)
    }
}
