//! Tree rendering service
//!
//! Drives the geometry row by row, paints each row and writes it to the
//! output sink.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Palette, TreeConfig, TreeGeometry};

/// Service that draws one tree per call.
#[derive(Debug, Clone)]
pub struct RenderService {
    config: TreeConfig,
    geometry: TreeGeometry,
    palette: Palette,
}

impl RenderService {
    /// Create a render service for a validated configuration.
    pub fn new(config: TreeConfig) -> ApplicationResult<Self> {
        let geometry = TreeGeometry::new(&config);
        let palette = Palette::new(config.decoration)?;
        Ok(Self {
            config,
            geometry,
            palette,
        })
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &TreeGeometry {
        &self.geometry
    }

    /// Write the tree to `out`, apex first, one line per row.
    ///
    /// The engine is drawn from sequentially and never reseeded. The sink is
    /// flushed but not closed.
    ///
    /// Returns the number of rows written.
    pub fn render<W, R>(&self, out: &mut W, rng: &mut R) -> ApplicationResult<usize>
    where
        W: Write + ?Sized,
        R: Rng + ?Sized,
    {
        let mut written = 0;
        for row in self.geometry.rows() {
            let layer = self.palette.paint_layer(row.width, rng);
            writeln!(out, "{:indent$}{}", "", layer, indent = row.indent)
                .with_context(format!("write row {}", row.index))?;
            written += 1;
        }
        out.flush().with_context("flush output")?;

        debug!(
            rows = written,
            decoration = self.config.decoration.percent(),
            "rendered tree"
        );
        Ok(written)
    }

    /// Render into a string instead of a stream.
    pub fn render_to_string<R: Rng + ?Sized>(&self, rng: &mut R) -> ApplicationResult<String> {
        let mut buf = Vec::new();
        self.render(&mut buf, rng)?;
        String::from_utf8(buf).map_err(|e| ApplicationError::OperationFailed {
            context: "decode rendered tree".into(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_writes_one_line_per_row() {
        let config = TreeConfig::new(9, 30, 5, 5.0, 20).unwrap();
        let service = RenderService::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let mut buf = Vec::new();
        let rows = service.render(&mut buf, &mut rng).unwrap();

        assert_eq!(rows, 31);
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 31);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_same_seed_same_tree() {
        let service = RenderService::new(TreeConfig::new(9, 30, 5, 5.0, 20).unwrap()).unwrap();
        let a = service
            .render_to_string(&mut StdRng::seed_from_u64(42))
            .unwrap();
        let b = service
            .render_to_string(&mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }
}
