#![warn(clippy::all)]
#![forbid(unsafe_code)]
//! # fortune_voronoi
//!
//! A planar [Voronoi diagram](https://en.wikipedia.org/wiki/Voronoi_diagram)
//! builder using [Fortune's sweep-line
//! algorithm](https://en.wikipedia.org/wiki/Fortune%27s_algorithm), plus a
//! post-pass that finds the largest empty circle(s) centered at a Voronoi
//! vertex of the input site set.
//!
//! ## Implementation details
//!
//! The sweep maintains a doubly linked beachline of parabolic arcs (see
//! [`beachline`]) and two lazily-invalidating event queues (see
//! [`event_queue`]) rather than a balanced tree or a DCEL. Edges are an
//! unordered, append-only set of half-edges (see [`segment`]); there is no
//! face/cell topology and no clipping to an arbitrary polygon — only the
//! segment set and the Voronoi vertex list are produced.
//!
//! ## Example usage
//!
//! ```rust
//! use fortune_voronoi::Voronoi;
//!
//! let mut voronoi = Voronoi::new(&[(100.0, 100.0), (400.0, 100.0), (250.0, 400.0)])
//!     .expect("at least one site");
//! voronoi.process().expect("general-position input");
//!
//! let segments = voronoi.get_segments();
//! let circles = voronoi.find_largest_empty_circle();
//! ```
mod bbox;
mod beachline;
mod builder;
mod error;
mod event_queue;
mod geometry;
mod segment;
mod voronoi;

pub use error::{Result, VoronoiError};
pub use geometry::Point;
pub use voronoi::Voronoi;
