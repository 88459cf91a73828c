//! The beachline: a doubly linked, slotmap-backed sequence of parabolic
//! arcs, ordered top-to-bottom in y at the current sweep x.
//!
//! The arena (rather than `Box`/`Rc` links) is what lets an arc, its
//! neighbors, and its pending circle event reference each other freely —
//! exactly the cyclic structure the design notes call out as needing an
//! arena-or-index representation in a systems language.

use crate::geometry::Point;
use crate::segment::SegmentKey;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to an [`Arc`] in a [`Beachline`].
    pub struct ArcKey;
}

/// One contiguous piece of the beachline, associated with a single focus
/// site.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub focus: Point,
    pub pprev: Option<ArcKey>,
    pub pnext: Option<ArcKey>,
    pub s0: Option<SegmentKey>,
    pub s1: Option<SegmentKey>,
    /// The x at which this arc's currently pending circle event (if any)
    /// was scheduled. `check_circle_event` uses this to decide whether a
    /// stale pending event needs invalidating.
    pub circle_event_x: Option<f64>,
}

impl Arc {
    fn new(focus: Point) -> Self {
        Arc {
            focus,
            pprev: None,
            pnext: None,
            s0: None,
            s1: None,
            circle_event_x: None,
        }
    }
}

/// The ordered arc list plus its backing arena.
pub struct Beachline {
    arcs: SlotMap<ArcKey, Arc>,
    head: Option<ArcKey>,
}

impl Beachline {
    pub fn new() -> Self {
        Beachline {
            arcs: SlotMap::with_key(),
            head: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<ArcKey> {
        self.head
    }

    pub fn arc(&self, key: ArcKey) -> &Arc {
        &self.arcs[key]
    }

    pub fn arc_mut(&mut self, key: ArcKey) -> &mut Arc {
        &mut self.arcs[key]
    }

    /// Installs `focus` as the sole arc. Only valid while the beachline is
    /// empty.
    pub fn insert_root(&mut self, focus: Point) -> ArcKey {
        let key = self.arcs.insert(Arc::new(focus));
        self.head = Some(key);
        key
    }

    /// Inserts a new arc for `focus` immediately after `after`, splicing it
    /// into the linked list.
    pub fn insert_after(&mut self, after: ArcKey, focus: Point) -> ArcKey {
        let next = self.arcs[after].pnext;
        let key = self.arcs.insert(Arc::new(focus));
        self.arcs[key].pprev = Some(after);
        self.arcs[key].pnext = next;
        self.arcs[after].pnext = Some(key);
        if let Some(next) = next {
            self.arcs[next].pprev = Some(key);
        }
        key
    }

    /// Unlinks `key` from its neighbors and drops it from the arena,
    /// returning its former `(pprev, pnext)` so the caller can wire the
    /// emitted segment and finish the bordering edges.
    pub fn remove(&mut self, key: ArcKey) -> (Option<ArcKey>, Option<ArcKey>) {
        let arc = self.arcs[key];
        if let Some(pprev) = arc.pprev {
            self.arcs[pprev].pnext = arc.pnext;
        }
        if let Some(pnext) = arc.pnext {
            self.arcs[pnext].pprev = arc.pprev;
        }
        if self.head == Some(key) {
            self.head = arc.pnext;
        }
        self.arcs.remove(key);
        (arc.pprev, arc.pnext)
    }

    /// Iterates the arcs from head to tail in beachline order.
    pub fn iter(&self) -> BeachlineIter {
        BeachlineIter {
            beachline: self,
            current: self.head,
        }
    }
}

pub struct BeachlineIter<'a> {
    beachline: &'a Beachline,
    current: Option<ArcKey>,
}

impl<'a> Iterator for BeachlineIter<'a> {
    type Item = (ArcKey, &'a Arc);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current?;
        let arc = self.beachline.arc(key);
        self.current = arc.pnext;
        Some((key, arc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_root_then_after_builds_a_chain() {
        let mut beachline = Beachline::new();
        let a = beachline.insert_root(Point::new(0.0, 0.0));
        let b = beachline.insert_after(a, Point::new(1.0, 0.0));
        let c = beachline.insert_after(b, Point::new(2.0, 0.0));

        let order: Vec<ArcKey> = beachline.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(beachline.arc(b).pprev, Some(a));
        assert_eq!(beachline.arc(b).pnext, Some(c));
    }

    #[test]
    fn remove_relinks_neighbors_and_drops_head() {
        let mut beachline = Beachline::new();
        let a = beachline.insert_root(Point::new(0.0, 0.0));
        let b = beachline.insert_after(a, Point::new(1.0, 0.0));
        let c = beachline.insert_after(b, Point::new(2.0, 0.0));

        let (pprev, pnext) = beachline.remove(b);
        assert_eq!(pprev, Some(a));
        assert_eq!(pnext, Some(c));
        assert_eq!(beachline.arc(a).pnext, Some(c));
        assert_eq!(beachline.arc(c).pprev, Some(a));

        beachline.remove(a);
        assert_eq!(beachline.head(), Some(c));
    }
}
