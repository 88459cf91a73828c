//! The public `Voronoi` builder: owns every mutable structure the sweep
//! touches and exposes the three read accessors consumed by a caller.

use crate::bbox::BoundingBox;
use crate::beachline::{ArcKey, Beachline};
use crate::error::{Result, VoronoiError};
use crate::event_queue::EventQueue;
use crate::geometry::{self, Point};
use crate::segment::{Segment, SegmentKey};
use slotmap::SlotMap;

/// Owns the full state of one sweep: the beachline, both event queues, the
/// segment arena, and the accumulated outputs. Single-use: [`Voronoi::process`]
/// is not meant to be called twice (see the design notes on idempotence).
pub struct Voronoi {
    pub(crate) segments: SlotMap<SegmentKey, Segment>,
    pub(crate) beachline: Beachline,
    pub(crate) site_events: EventQueue<usize, Point>,
    pub(crate) circle_events: EventQueue<ArcKey, Point>,
    pub(crate) original_points: Vec<Point>,
    pub(crate) voronoi_vertices: Vec<Point>,
    pub(crate) bbox: BoundingBox,
}

impl Voronoi {
    /// Builds a sweep over `points`. Fails only if `points` is empty;
    /// duplicate or cocircular sites are accepted and handled (or
    /// surfaced as [`VoronoiError::NumericDegeneracy`]) during [`process`].
    ///
    /// [`process`]: Voronoi::process
    pub fn new(points: &[(f64, f64)]) -> Result<Self> {
        if points.is_empty() {
            return Err(VoronoiError::InputEmpty);
        }

        let original_points: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let bbox = BoundingBox::from_sites(&original_points);

        let mut site_events = EventQueue::new();
        for (index, &site) in original_points.iter().enumerate() {
            site_events.push(index, site.x, site);
        }

        Ok(Voronoi {
            segments: SlotMap::with_key(),
            beachline: Beachline::new(),
            site_events,
            circle_events: EventQueue::new(),
            original_points,
            voronoi_vertices: Vec::new(),
            bbox,
        })
    }

    /// Runs the sweep to completion: interleaves site and circle events in
    /// non-decreasing x, drains any circle events left once every site has
    /// been consumed, then finalizes unterminated edges.
    pub fn process(&mut self) -> Result<()> {
        while !self.site_events.is_empty() {
            let run_circle = match self.circle_events.peek() {
                Some(circle) => match self.site_events.peek() {
                    Some(site) => circle.x <= site.x,
                    None => true,
                },
                None => false,
            };
            if run_circle {
                self.process_circle_event()?;
            } else {
                self.process_site_event()?;
            }
        }

        while !self.circle_events.is_empty() {
            self.process_circle_event()?;
        }

        self.finish_edges()?;
        Ok(())
    }

    fn process_site_event(&mut self) -> Result<()> {
        let event = self
            .site_events
            .pop()
            .ok_or(VoronoiError::QueuePopEmpty)?;
        self.arc_insert(event.value)
    }

    /// Segments as `(x1, y1, x2, y2)`. An unfinished segment is emitted as a
    /// degenerate (start, start) pair; segments with no start never occur
    /// (start is required at construction) so none are filtered.
    pub fn get_segments(&self) -> Vec<(f64, f64, f64, f64)> {
        self.segments
            .values()
            .map(|segment| match segment.end {
                Some(end) => (segment.start.x, segment.start.y, end.x, end.y),
                None => (
                    segment.start.x,
                    segment.start.y,
                    segment.start.x,
                    segment.start.y,
                ),
            })
            .collect()
    }

    /// Voronoi vertices in the order their circle events fired.
    pub fn get_voronoi_vertices(&self) -> Vec<(f64, f64)> {
        self.voronoi_vertices.iter().map(|v| (v.x, v.y)).collect()
    }

    /// The circle(s) of maximum radius centered at a Voronoi vertex whose
    /// open interior contains no input site. Empty when fewer than three
    /// sites produced a vertex.
    pub fn find_largest_empty_circle(&self) -> Vec<(f64, f64, f64)> {
        let mut max_radius = 0.0_f64;
        let mut largest = Vec::new();

        for vertex in &self.voronoi_vertices {
            let radius = self
                .original_points
                .iter()
                .map(|site| geometry::distance(*vertex, *site))
                .fold(f64::INFINITY, f64::min);

            let is_empty = self
                .original_points
                .iter()
                .all(|site| geometry::distance(*vertex, *site) >= radius);

            if is_empty && radius > max_radius {
                max_radius = radius;
                largest = vec![(vertex.x, vertex.y, radius)];
            } else if is_empty && radius == max_radius {
                largest.push((vertex.x, vertex.y, radius));
            }
        }

        largest
    }
}
