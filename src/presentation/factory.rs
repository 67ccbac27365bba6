//! Service Factory
//!
//! Creates the breakdown service with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::BreakdownService;
use crate::config::Config;
use crate::domain::ports::{Confirmer, RootResolver};
use crate::domain::value_objects::TemplatePattern;
use crate::error::BreakdownResult;
use crate::infrastructure::{EnvRootResolver, LocalFs, TomlSceneRepository};

/// Scene repository backed by the process environment
pub type ConcreteSceneRepository = TomlSceneRepository<EnvRootResolver>;

/// Breakdown service over the local disk and a TOML scene manifest
pub type ConcreteBreakdownService<C> = BreakdownService<ConcreteSceneRepository, LocalFs, C>;

/// Build the configured template, expanding `$NAME` root variables first
pub fn create_template<R: RootResolver + ?Sized>(
    config: &Config,
    roots: &R,
) -> BreakdownResult<TemplatePattern> {
    let pattern = roots.expand(&config.template.pattern)?;
    TemplatePattern::new(config.template.name.clone(), pattern)
}

/// Scene repository for the configured manifest
pub fn create_scene_repository(config: &Config, roots: EnvRootResolver) -> ConcreteSceneRepository {
    TomlSceneRepository::new(config.scene.path.clone(), roots)
        .with_filter(config.reference_filter())
        .with_portable_vars(config.scene.portable_vars.clone())
}

/// Create the breakdown service with all dependencies wired up
pub fn create_breakdown_service<C: Confirmer>(
    config: &Config,
    confirmer: C,
) -> BreakdownResult<ConcreteBreakdownService<C>> {
    let roots = EnvRootResolver::new();
    let template = create_template(config, &roots)?;
    let scene = create_scene_repository(config, roots);

    Ok(BreakdownService::new(template, scene, LocalFs::new(), confirmer))
}
