//! The internal bounding box that anchors the sweep.
//!
//! Purely an implementation detail: it bounds the tail-insert segment start
//! (§4.4) and the edge-finalization sweep value (§4.7). It is not clipped
//! against, and it is not returned to callers.

use crate::geometry::Point;

/// Bounding box seeded and padded exactly as the original implementation
/// does, asymmetry included (see the Open Questions in the design notes:
/// `x` is seeded as if for a min/min pair, `y` as if for a max/max pair).
/// That asymmetry is harmless in practice and is preserved rather than
/// "fixed", per the design notes.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    /// Builds the box from the seed values, expands it to cover every site,
    /// then pads it by a fifth of its span on every side.
    pub fn from_sites(sites: &[Point]) -> Self {
        let mut x0 = -50.0;
        let mut x1 = -50.0;
        let mut y0 = 550.0;
        let mut y1 = 550.0;

        for site in sites {
            x0 = x0.min(site.x);
            y0 = y0.min(site.y);
            x1 = x1.max(site.x);
            y1 = y1.max(site.y);
        }

        let dx = (x1 - x0 + 1.0) / 5.0;
        let dy = (y1 - y0 + 1.0) / 5.0;
        x0 -= dx;
        x1 += dx;
        y0 -= dy;
        y1 += dy;

        BoundingBox { x0, y0, x1, y1 }
    }

    /// The sweep position far beyond the box used to finish every
    /// unterminated edge (§4.7): `l = x1 + (x1 - x0) + (y1 - y0)`, doubled
    /// when it is actually used as a sweep coordinate.
    pub fn finalize_x(&self) -> f64 {
        self.x1 + (self.x1 - self.x0) + (self.y1 - self.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_site_list_keeps_the_seed_box() {
        let bbox = BoundingBox::from_sites(&[]);
        // dx = dy = (-50 - (-50) + 1) / 5 = 0.2, (550 - 550 + 1) / 5 = 0.2
        assert!((bbox.x0 - (-50.2)).abs() < 1e-9);
        assert!((bbox.x1 - (-49.8)).abs() < 1e-9);
        assert!((bbox.y0 - 549.8).abs() < 1e-9);
        assert!((bbox.y1 - 550.2).abs() < 1e-9);
    }

    #[test]
    fn expands_to_cover_sites_with_margin() {
        let bbox = BoundingBox::from_sites(&[Point::new(100.0, 100.0), Point::new(400.0, 100.0)]);
        assert!(bbox.x0 < 100.0);
        assert!(bbox.x1 > 400.0);
    }
}
