//! Foliage painting.
//!
//! The glyph for each character is drawn from a fixed discrete
//! distribution over [`GLYPHS`]. Weights mirror a uniform draw over
//! `0..=upper_bound` where `0` paints `.`, `1` paints `o` and everything
//! else paints `*`.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::domain::entities::Decoration;
use crate::domain::error::{DomainError, DomainResult};

/// Glyph alphabet, in weight order.
pub const GLYPHS: [char; 3] = ['.', 'o', '*'];

/// Plain foliage glyph.
pub const FOLIAGE: char = '*';

/// Weighted glyph distribution for one decoration density.
#[derive(Debug, Clone)]
pub struct Palette {
    decoration: Decoration,
    weights: WeightedIndex<u32>,
}

impl Palette {
    pub fn new(decoration: Decoration) -> DomainResult<Self> {
        let upper_bound = decoration.upper_bound();
        let weights = WeightedIndex::new([1, 1, upper_bound - 1])
            .map_err(|e| DomainError::Distribution(e.to_string()))?;
        Ok(Self {
            decoration,
            weights,
        })
    }

    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Paint `width` characters of foliage.
    pub fn paint_layer<R: Rng + ?Sized>(&self, width: usize, rng: &mut R) -> String {
        (0..width).map(|_| self.sample(rng)).collect()
    }
}

impl Distribution<char> for Palette {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        GLYPHS[self.weights.sample(rng)]
    }
}
