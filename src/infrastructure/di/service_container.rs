//! Service container for dependency injection
//!
//! Wires settings, the render service and the random engine together.

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::application::services::RenderService;
use crate::application::ApplicationError;
use crate::config::Settings;
use crate::infrastructure::rng;
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Renderer for the configured tree
    pub renderer: RenderService,
}

impl ServiceContainer {
    /// Validate settings and build the services.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let config = settings
            .tree
            .to_tree_config()
            .map_err(ApplicationError::from)?;
        let renderer = RenderService::new(config)?;

        Ok(Self {
            settings: Arc::new(settings),
            renderer,
        })
    }

    /// Create the random engine for this run (seeded once).
    pub fn engine(&self) -> InfraResult<StdRng> {
        rng::engine(self.settings.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::InfraError;

    #[test]
    fn given_default_settings_when_building_then_succeeds() {
        let container = ServiceContainer::new(Settings::default()).unwrap();
        assert_eq!(container.renderer.config().base_radius, 9);
        assert_eq!(container.renderer.config().height, 30);
    }

    #[test]
    fn given_zero_layers_when_building_then_domain_error() {
        let mut settings = Settings::default();
        settings.tree.layers = 0;

        let result = ServiceContainer::new(settings);

        assert!(matches!(
            result,
            Err(InfraError::Application(ApplicationError::Domain(
                DomainError::InvalidLayers(0)
            )))
        ));
    }
}
