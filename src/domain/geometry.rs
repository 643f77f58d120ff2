//! Tree silhouette geometry.
//!
//! Turns a [`TreeConfig`] into one [`Row`] per line. The radius grows by a
//! constant slope inside a branch tier and is cut back at each tier
//! boundary, which produces the stepped outline. No randomness is involved.

use tracing::{debug, trace};

use crate::domain::entities::{Row, TreeConfig};

/// Round half up: `floor(x + 0.5)`.
fn round_half_up(x: f32) -> i64 {
    (x + 0.5).floor() as i64
}

/// Constants derived once per tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGeometry {
    base_radius: u32,
    height: u32,
    /// `base_radius / height`
    pub average_slope: f32,
    /// `average_slope * branch_slope_ratio`
    pub slope: f32,
    /// `height / layers`
    pub branch_height: f32,
    /// Radius removed at every tier boundary
    pub cut_in: f32,
}

impl TreeGeometry {
    pub fn new(config: &TreeConfig) -> Self {
        // TreeConfig guarantees base_radius == 0 whenever height == 0
        let average_slope = if config.height == 0 {
            0.0
        } else {
            config.base_radius as f32 / config.height as f32
        };
        let slope = average_slope * config.branch_slope_ratio;
        let branch_height = config.height as f32 / config.layers as f32;
        let cut_in = branch_height * (slope - average_slope);

        debug!(average_slope, slope, branch_height, cut_in, "derived tree geometry");

        Self {
            base_radius: config.base_radius,
            height: config.height,
            average_slope,
            slope,
            branch_height,
            cut_in,
        }
    }

    /// Cut-in rounded to whole columns.
    pub fn rounded_cut_in(&self) -> i64 {
        round_half_up(self.cut_in)
    }

    /// Iterate over rows `0..=height`, apex first.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            geometry: self,
            next: 0,
            radius: 0.0,
            branch_end: self.branch_height,
        }
    }
}

/// Row iterator carrying the running render state.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    geometry: &'a TreeGeometry,
    next: u32,
    radius: f32,
    branch_end: f32,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let g = self.geometry;
        if self.next > g.height {
            return None;
        }
        let index = self.next;

        let int_radius = round_half_up(self.radius).max(0);
        let width = 1 + 2 * int_radius as usize;
        let indent = g
            .rounded_cut_in()
            .saturating_add(i64::from(g.base_radius))
            .saturating_sub(int_radius)
            .max(0) as usize;
        trace!(index, radius = self.radius, width, indent, "row");

        self.radius += g.slope;
        if (index as f32) > self.branch_end {
            self.radius -= g.rounded_cut_in() as f32;
            self.branch_end += g.branch_height;
        }
        self.next += 1;

        Some(Row {
            index,
            width,
            indent,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.geometry.height as usize + 1).saturating_sub(self.next as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MAX_RADIUS;

    fn geometry(base_radius: u32, height: u32, layers: u32, ratio: f32) -> TreeGeometry {
        TreeGeometry::new(&TreeConfig::new(base_radius, height, layers, ratio, 20).unwrap())
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.6), -1);
    }

    #[test]
    fn test_derived_constants() {
        let g = geometry(9, 30, 5, 5.0);
        assert!((g.average_slope - 0.3).abs() < 1e-6);
        assert!((g.slope - 1.5).abs() < 1e-6);
        assert!((g.branch_height - 6.0).abs() < 1e-6);
        assert!((g.cut_in - 7.2).abs() < 1e-4);
        assert_eq!(g.rounded_cut_in(), 7);
    }

    #[test]
    fn test_single_tier_cone() {
        let g = geometry(2, 4, 1, 1.0);
        let rows: Vec<(usize, usize)> = g.rows().map(|r| (r.width, r.indent)).collect();
        assert_eq!(rows, vec![(1, 2), (3, 1), (3, 1), (5, 0), (5, 0)]);
    }

    #[test]
    fn test_zero_height_yields_apex_only() {
        let g = geometry(0, 0, 1, 5.0);
        let rows: Vec<Row> = g.rows().collect();
        assert_eq!(
            rows,
            vec![Row {
                index: 0,
                width: 1,
                indent: 0
            }]
        );
    }

    #[test]
    fn test_largest_accepted_tree_stays_in_range() {
        let config = TreeConfig::new(1, 1, 1, (MAX_RADIUS - 1) as f32, 20).unwrap();
        let rows: Vec<Row> = TreeGeometry::new(&config).rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.width <= 2 * MAX_RADIUS as usize + 1));
    }

    #[test]
    fn test_rows_is_exact_size() {
        let g = geometry(9, 30, 5, 5.0);
        let mut rows = g.rows();
        assert_eq!(rows.len(), 31);
        rows.next();
        assert_eq!(rows.len(), 30);
    }
}
