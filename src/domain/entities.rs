//! Domain entities: core data structures

use crate::domain::error::{DomainError, DomainResult};

/// Lowest accepted decoration percentage.
pub const MIN_DECORATION: i32 = 1;
/// Highest accepted decoration percentage.
pub const MAX_DECORATION: i32 = 100;

/// Upper bound on how far the radius may reach, in columns.
pub const MAX_RADIUS: u32 = 100_000;

/// Target percentage of ornament characters (`.` and `o`) in the foliage.
///
/// Always within `[MIN_DECORATION, MAX_DECORATION]`; out-of-range input is
/// clamped on construction, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration(i32);

impl Decoration {
    pub fn new(percent: i32) -> Self {
        Self(percent.clamp(MIN_DECORATION, MAX_DECORATION))
    }

    pub fn percent(&self) -> i32 {
        self.0
    }

    /// Inclusive upper bound of the uniform draw used to pick a glyph.
    ///
    /// Draws `0` and `1` are ornaments, so the ornament share of the range
    /// is `2 / (upper_bound + 1)`, roughly `percent / 100`.
    pub fn upper_bound(&self) -> u32 {
        // percent is clamped to 1..=100, so 200 / percent is in 2..=200
        (200 / self.0 as u32) - 1
    }

    /// Exact probability that a painted character is an ornament.
    pub fn probability(&self) -> f64 {
        2.0 / f64::from(self.upper_bound() + 1)
    }
}

impl Default for Decoration {
    fn default() -> Self {
        Self::new(20)
    }
}

/// Validated tree dimensions.
///
/// Construct through [`TreeConfig::new`] so that the geometry never
/// divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeConfig {
    /// Half-width of the widest row, excluding the centre column
    pub base_radius: u32,
    /// Number of rows below the apex
    pub height: u32,
    /// Number of branch tiers
    pub layers: u32,
    /// Ratio of the in-branch slope to the overall average slope
    pub branch_slope_ratio: f32,
    pub decoration: Decoration,
}

impl TreeConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// * `InvalidLayers` if `layers` is 0
    /// * `ZeroHeight` if `height` is 0 while `base_radius` is not
    /// * `InvalidSlope` if the slope ratio is NaN or infinite
    /// * `TooWide` if the radius could grow past [`MAX_RADIUS`]
    pub fn new(
        base_radius: u32,
        height: u32,
        layers: u32,
        branch_slope_ratio: f32,
        decoration: i32,
    ) -> DomainResult<Self> {
        if layers < 1 {
            return Err(DomainError::InvalidLayers(layers));
        }
        if height == 0 && base_radius > 0 {
            return Err(DomainError::ZeroHeight { base_radius });
        }
        if !branch_slope_ratio.is_finite() {
            return Err(DomainError::InvalidSlope(branch_slope_ratio));
        }
        // radius peaks near base_radius * (|ratio| + 1) once cut-ins are added back
        let reach = f64::from(base_radius) * (f64::from(branch_slope_ratio).abs() + 1.0);
        if reach > f64::from(MAX_RADIUS) {
            return Err(DomainError::TooWide {
                base_radius,
                ratio: branch_slope_ratio,
                max: MAX_RADIUS,
            });
        }

        Ok(Self {
            base_radius,
            height,
            layers,
            branch_slope_ratio,
            decoration: Decoration::new(decoration),
        })
    }

    /// Same as [`TreeConfig::new`], taking the overall trunk width instead
    /// of the base radius.
    pub fn with_width(
        width: u32,
        height: u32,
        layers: u32,
        branch_slope_ratio: f32,
        decoration: i32,
    ) -> DomainResult<Self> {
        Self::new(
            base_radius_for_width(width),
            height,
            layers,
            branch_slope_ratio,
            decoration,
        )
    }

    /// Number of rows the tree renders to (apex included).
    pub fn row_count(&self) -> usize {
        self.height as usize + 1
    }
}

/// Convert an overall width into a base radius: `(width - 1) / 2`.
pub fn base_radius_for_width(width: u32) -> u32 {
    width.saturating_sub(1) / 2
}

/// One rendered line of the tree, before painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Row index, 0 at the apex
    pub index: u32,
    /// Number of foliage characters; always odd
    pub width: usize,
    /// Number of leading spaces
    pub indent: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_clamps_out_of_range() {
        assert_eq!(Decoration::new(0).percent(), 1);
        assert_eq!(Decoration::new(-7).percent(), 1);
        assert_eq!(Decoration::new(150).percent(), 100);
        assert_eq!(Decoration::new(42).percent(), 42);
    }

    #[test]
    fn test_decoration_upper_bound() {
        assert_eq!(Decoration::new(1).upper_bound(), 199);
        assert_eq!(Decoration::new(20).upper_bound(), 9);
        assert_eq!(Decoration::new(30).upper_bound(), 5);
        assert_eq!(Decoration::new(100).upper_bound(), 1);
    }

    #[test]
    fn test_decoration_probability() {
        assert!((Decoration::new(1).probability() - 0.01).abs() < 1e-12);
        assert!((Decoration::new(20).probability() - 0.2).abs() < 1e-12);
        assert!((Decoration::new(100).probability() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_base_radius_for_width() {
        assert_eq!(base_radius_for_width(0), 0);
        assert_eq!(base_radius_for_width(1), 0);
        assert_eq!(base_radius_for_width(20), 9);
        assert_eq!(base_radius_for_width(21), 10);
    }

    #[test]
    fn test_tree_config_rejects_zero_layers() {
        assert_eq!(
            TreeConfig::new(2, 4, 0, 1.0, 20),
            Err(DomainError::InvalidLayers(0))
        );
    }

    #[test]
    fn test_tree_config_rejects_zero_height_with_radius() {
        assert_eq!(
            TreeConfig::new(3, 0, 1, 1.0, 20),
            Err(DomainError::ZeroHeight { base_radius: 3 })
        );
    }

    #[test]
    fn test_tree_config_accepts_single_point_tree() {
        let config = TreeConfig::new(0, 0, 1, 1.0, 20).unwrap();
        assert_eq!(config.row_count(), 1);
    }

    #[test]
    fn test_tree_config_rejects_nan_slope() {
        assert!(matches!(
            TreeConfig::new(2, 4, 1, f32::NAN, 20),
            Err(DomainError::InvalidSlope(_))
        ));
    }

    #[test]
    fn test_tree_config_rejects_huge_slope() {
        assert!(matches!(
            TreeConfig::new(1, 1, 1, 1e30, 20),
            Err(DomainError::TooWide { base_radius: 1, .. })
        ));
        assert!(matches!(
            TreeConfig::new(1, 1, 1, -1e30, 20),
            Err(DomainError::TooWide { .. })
        ));
    }

    #[test]
    fn test_tree_config_rejects_huge_base_radius() {
        assert!(matches!(
            TreeConfig::new(u32::MAX / 2, 30, 5, 0.0, 20),
            Err(DomainError::TooWide { .. })
        ));
    }

    #[test]
    fn test_tree_config_accepts_wide_tree_within_limit() {
        assert!(TreeConfig::new(MAX_RADIUS / 2, 30, 5, 1.0, 20).is_ok());
    }
}
