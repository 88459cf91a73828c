//! The sweep's event handlers: site-event arc insertion, circle-event arc
//! removal, the shared `check_circle_event` scheduler, and the edge
//! finalizer. Kept apart from [`crate::voronoi`] because this is where
//! almost all of the algorithm's complexity actually lives.

use crate::beachline::ArcKey;
use crate::error::{Result, VoronoiError};
use crate::geometry::{self, Point};
use crate::segment::Segment;
use crate::voronoi::Voronoi;
use log::{debug, trace};

impl Voronoi {
    pub(crate) fn process_circle_event(&mut self) -> Result<()> {
        let event = self
            .circle_events
            .pop()
            .ok_or(VoronoiError::QueuePopEmpty)?;
        let arc_key = event.key;
        let center = event.value;
        trace!("dispatching circle event at x = {} for arc {:?}", event.x, arc_key);

        let segment = self.segments.insert(Segment::new(center));
        self.voronoi_vertices.push(center);

        let arc = *self.beachline.arc(arc_key);
        let (pprev, pnext) = self.beachline.remove(arc_key);

        if let Some(pprev) = pprev {
            self.beachline.arc_mut(pprev).s1 = Some(segment);
        }
        if let Some(pnext) = pnext {
            self.beachline.arc_mut(pnext).s0 = Some(segment);
        }

        if let Some(s0) = arc.s0 {
            self.segments[s0].finish(center);
        }
        if let Some(s1) = arc.s1 {
            self.segments[s1].finish(center);
        }

        if let Some(pprev) = pprev {
            self.check_circle_event(pprev, event.x);
        }
        if let Some(pnext) = pnext {
            self.check_circle_event(pnext, event.x);
        }

        Ok(())
    }

    /// Finds the breakpoint where the vertical line through `p` enters
    /// arc `i`'s y-range at the current sweep x, or `None` if it doesn't.
    fn find_hit(&self, p: Point, i: ArcKey) -> Result<Option<Point>> {
        let arc = self.beachline.arc(i);
        if arc.focus.x == p.x {
            return Ok(None);
        }

        let lower = match arc.pprev {
            Some(pprev) => {
                geometry::intersection(self.beachline.arc(pprev).focus, arc.focus, p.x)?.y
            }
            None => 0.0,
        };
        let upper = match arc.pnext {
            Some(pnext) => {
                geometry::intersection(arc.focus, self.beachline.arc(pnext).focus, p.x)?.y
            }
            None => 0.0,
        };

        let lower_ok = arc.pprev.is_none() || lower <= p.y;
        let upper_ok = arc.pnext.is_none() || p.y <= upper;
        if lower_ok && upper_ok {
            let denom = 2.0 * arc.focus.x - 2.0 * p.x;
            if denom == 0.0 {
                return Err(VoronoiError::NumericDegeneracy(format!(
                    "site ({}, {}) coincides with an existing focus on the sweep line",
                    p.x, p.y
                )));
            }
            let px =
                (arc.focus.x.powi(2) + (arc.focus.y - p.y).powi(2) - p.x.powi(2)) / denom;
            Ok(Some(Point::new(px, p.y)))
        } else {
            Ok(None)
        }
    }

    pub(crate) fn arc_insert(&mut self, p: Point) -> Result<()> {
        trace!("dispatching site event at ({}, {})", p.x, p.y);

        if self.beachline.is_empty() {
            self.beachline.insert_root(p);
            return Ok(());
        }

        let mut current = self.beachline.head();
        while let Some(i) = current {
            if let Some(z) = self.find_hit(p, i)? {
                let arc_i = *self.beachline.arc(i);
                let next_also_hit = match arc_i.pnext {
                    Some(n) => self.find_hit(p, n)?.is_some(),
                    None => false,
                };
                debug!(
                    "splitting arc at focus ({}, {}) for new site ({}, {})",
                    arc_i.focus.x, arc_i.focus.y, p.x, p.y
                );

                // Clone i's focus into a new arc spliced in right after i.
                // Only carry i's outgoing edge over when this is a genuine
                // split (i has a next and p doesn't also land on it).
                let right = self.beachline.insert_after(i, arc_i.focus);
                if arc_i.pnext.is_some() && !next_also_hit {
                    self.beachline.arc_mut(right).s1 = arc_i.s1;
                }

                // Insert the new p-arc between i and the clone.
                let p_key = self.beachline.insert_after(i, p);

                let seg_left = self.segments.insert(Segment::new(z));
                self.beachline.arc_mut(i).s1 = Some(seg_left);
                self.beachline.arc_mut(p_key).s0 = Some(seg_left);

                let seg_right = self.segments.insert(Segment::new(z));
                self.beachline.arc_mut(p_key).s1 = Some(seg_right);
                self.beachline.arc_mut(right).s0 = Some(seg_right);

                self.check_circle_event(p_key, p.x);
                self.check_circle_event(i, p.x);
                self.check_circle_event(right, p.x);

                return Ok(());
            }
            current = self.beachline.arc(i).pnext;
        }

        // No existing arc is hit: every site so far shares p.x. Append to
        // the tail and seed a boundary segment; no circle event is
        // scheduled for this degenerate branch.
        let mut tail = self.beachline.head().ok_or(VoronoiError::QueuePopEmpty)?;
        while let Some(next) = self.beachline.arc(tail).pnext {
            tail = next;
        }
        let p_key = self.beachline.insert_after(tail, p);
        let y = (self.beachline.arc(p_key).focus.y + self.beachline.arc(tail).focus.y) / 2.0;
        let start = Point::new(self.bbox.x0, y);
        let seg = self.segments.insert(Segment::new(start));
        self.beachline.arc_mut(tail).s1 = Some(seg);
        self.beachline.arc_mut(p_key).s0 = Some(seg);

        Ok(())
    }

    /// Schedules (or cancels) a circle event for arc `i`.
    ///
    /// `x0` is the caller's current-sweep-x, kept as a parameter for
    /// fidelity with the reference implementation this was ported from —
    /// but, matching that implementation, the validity check below
    /// intentionally compares the arc's previously recorded event x
    /// against the persistent bounding-box left edge rather than against
    /// `x0`. See the design notes' open question on this before "fixing"
    /// it; the scenarios in the test suite pass against this behavior.
    pub(crate) fn check_circle_event(&mut self, i: ArcKey, _x0: f64) {
        if let Some(event_x) = self.beachline.arc(i).circle_event_x {
            if event_x != self.bbox.x0 {
                debug!("invalidating stale circle event at x = {event_x} for arc {i:?}");
                self.circle_events.invalidate(i);
            }
        }
        self.beachline.arc_mut(i).circle_event_x = None;

        let arc = *self.beachline.arc(i);
        let (pprev, pnext) = match (arc.pprev, arc.pnext) {
            (Some(pprev), Some(pnext)) => (pprev, pnext),
            _ => return,
        };

        let a = self.beachline.arc(pprev).focus;
        let b = arc.focus;
        let c = self.beachline.arc(pnext).focus;

        if let Some((x, center)) = geometry::circumcircle(a, b, c) {
            if x > self.bbox.x0 {
                self.beachline.arc_mut(i).circle_event_x = Some(x);
                self.circle_events.push(i, x, center);
            }
        }
    }

    pub(crate) fn finish_edges(&mut self) -> Result<()> {
        let l = self.bbox.finalize_x();
        let sweep = l * 2.0;

        let arcs: Vec<ArcKey> = self.beachline.iter().map(|(key, _)| key).collect();
        for key in arcs {
            let arc = *self.beachline.arc(key);
            let next = match arc.pnext {
                Some(next) => next,
                None => continue,
            };
            if let Some(s1) = arc.s1 {
                let next_focus = self.beachline.arc(next).focus;
                let endpoint = geometry::intersection(arc.focus, next_focus, sweep)?;
                self.segments[s1].finish(endpoint);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::voronoi::Voronoi;
    use approx::assert_relative_eq;

    #[test]
    fn three_sites_produce_the_expected_circumcenter() {
        let mut voronoi = Voronoi::new(&[(100.0, 100.0), (400.0, 100.0), (250.0, 400.0)]).unwrap();
        voronoi.process().unwrap();

        let vertices = voronoi.get_voronoi_vertices();
        assert_eq!(vertices.len(), 1);
        assert_relative_eq!(vertices[0].0, 250.0, epsilon = 1e-6);
        assert_relative_eq!(vertices[0].1, 193.75, epsilon = 1e-6);

        let circles = voronoi.find_largest_empty_circle();
        assert_eq!(circles.len(), 1);
        assert_relative_eq!(circles[0].2, 170.8358, epsilon = 1e-3);
    }

    #[test]
    fn two_sites_produce_no_vertices_and_one_bisector() {
        let mut voronoi = Voronoi::new(&[(100.0, 200.0), (300.0, 200.0)]).unwrap();
        voronoi.process().unwrap();

        assert!(voronoi.get_voronoi_vertices().is_empty());
        assert!(voronoi.find_largest_empty_circle().is_empty());

        let segments = voronoi.get_segments();
        assert!(!segments.is_empty());
        for (x1, _, x2, _) in segments {
            assert_relative_eq!(x1, 200.0, epsilon = 1e-6);
            assert_relative_eq!(x2, 200.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn collinear_sites_produce_no_circle_events() {
        let mut voronoi = Voronoi::new(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]).unwrap();
        voronoi.process().unwrap();

        assert!(voronoi.get_voronoi_vertices().is_empty());
        assert!(voronoi.find_largest_empty_circle().is_empty());
    }

    #[test]
    fn same_x_sites_exercise_the_tail_append_branch() {
        let mut voronoi = Voronoi::new(&[(100.0, 100.0), (100.0, 200.0), (100.0, 300.0)]).unwrap();
        voronoi.process().unwrap();

        assert!(voronoi.get_voronoi_vertices().is_empty());
    }
}
