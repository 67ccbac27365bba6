//! Breakdown Service
//!
//! Orchestrates scans and commands over the host document.

use tracing::{debug, info};

use crate::application::clean::{DeleteOptions, DeletionExecutor};
use crate::domain::entities::{AssetReference, VersionedAsset};
use crate::domain::ports::{Confirmer, FileSystem, ReferenceEnumerator, ReferenceWriter};
use crate::domain::services::{CleanupPlan, CleanupPlanner};
use crate::domain::value_objects::{CleanupKind, CleanupSet, TemplatePattern};
use crate::error::{BreakdownError, BreakdownResult};

use super::command::Command;
use super::result::{Breakdown, CommandOutcome};

/// Breakdown service - scan the document and run commands against it
pub struct BreakdownService<R, FS, C>
where
    R: ReferenceEnumerator + ReferenceWriter,
    FS: FileSystem,
    C: Confirmer,
{
    template: TemplatePattern,
    references: R,
    fs: FS,
    confirmer: C,
}

impl<R, FS, C> BreakdownService<R, FS, C>
where
    R: ReferenceEnumerator + ReferenceWriter,
    FS: FileSystem,
    C: Confirmer,
{
    /// Create a new service sharing one template across every asset
    pub fn new(template: TemplatePattern, references: R, fs: FS, confirmer: C) -> Self {
        Self {
            template,
            references,
            fs,
            confirmer,
        }
    }

    pub fn template(&self) -> &TemplatePattern {
        &self.template
    }

    pub fn fs(&self) -> &FS {
        &self.fs
    }

    /// Build a fresh snapshot of every reference.
    ///
    /// A reference that does not match the template aborts the scan.
    pub fn scan(&self) -> BreakdownResult<Breakdown> {
        let references = self.references.enumerate()?;
        debug!(count = references.len(), template = %self.template, "scanning references");

        let assets = references
            .into_iter()
            .map(|reference| VersionedAsset::scan(reference, &self.template, &self.fs))
            .collect::<BreakdownResult<Vec<_>>>()?;

        Ok(Breakdown::new(assets))
    }

    /// Run one command against a fresh scan.
    ///
    /// The caller should scan again afterwards to observe the result.
    pub fn dispatch(
        &self,
        command: &Command,
        options: &DeleteOptions,
    ) -> BreakdownResult<CommandOutcome> {
        let breakdown = self.scan()?;

        match command {
            Command::UpdateVersion {
                asset_id,
                new_version,
            } => {
                let asset = find(&breakdown, asset_id)?;
                let updated = asset.update_version(*new_version, &self.references)?;
                Ok(CommandOutcome::Updated(vec![updated]))
            }
            Command::UpdateToLatest { asset_id } => {
                let asset = find(&breakdown, asset_id)?;
                let latest = asset
                    .latest_version()
                    .ok_or_else(|| BreakdownError::NoVersions {
                        id: asset_id.clone(),
                    })?;
                let updated = asset.update_version(latest, &self.references)?;
                Ok(CommandOutcome::Updated(vec![updated]))
            }
            Command::UpdateAll => Ok(CommandOutcome::Updated(self.update_all(&breakdown)?)),
            Command::DeleteElders { asset_ids } => {
                self.delete(&breakdown, CleanupKind::Elders, asset_ids, options)
            }
            Command::DeleteUnused { asset_ids } => {
                self.delete(&breakdown, CleanupKind::Unused, asset_ids, options)
            }
        }
    }

    /// Global delete plan for the selected assets.
    ///
    /// Only selected assets nominate candidates, but the keep path of every
    /// asset in the breakdown is protected.
    pub fn plan(
        &self,
        breakdown: &Breakdown,
        kind: CleanupKind,
        asset_ids: &[String],
    ) -> BreakdownResult<CleanupPlan> {
        for id in asset_ids {
            find(breakdown, id)?;
        }

        let sets = breakdown
            .assets()
            .iter()
            .map(|asset| {
                if asset_ids.is_empty() || asset_ids.iter().any(|id| id == asset.id()) {
                    asset.cleanup_set(kind)
                } else {
                    Ok(asset.keep_set(kind))
                }
            })
            .collect::<BreakdownResult<Vec<CleanupSet>>>()?;

        CleanupPlanner::new().plan(&sets)
    }

    fn delete(
        &self,
        breakdown: &Breakdown,
        kind: CleanupKind,
        asset_ids: &[String],
        options: &DeleteOptions,
    ) -> BreakdownResult<CommandOutcome> {
        let plan = self.plan(breakdown, kind, asset_ids)?;
        info!(
            %kind,
            candidates = plan.len(),
            protected = plan.protected().len(),
            "cleanup planned"
        );

        let executor = DeletionExecutor::new(&self.fs, &self.confirmer);
        Ok(CommandOutcome::Deleted(executor.execute(&plan, options)?))
    }

    fn update_all(&self, breakdown: &Breakdown) -> BreakdownResult<Vec<AssetReference>> {
        let mut updated = Vec::new();
        for asset in breakdown.assets() {
            if let Some(latest) = asset.latest_version() {
                updated.push(asset.update_version(latest, &self.references)?);
            }
        }
        Ok(updated)
    }
}

fn find<'b>(breakdown: &'b Breakdown, id: &str) -> BreakdownResult<&'b VersionedAsset> {
    breakdown
        .find(id)
        .ok_or_else(|| BreakdownError::UnknownReference { id: id.to_string() })
}
