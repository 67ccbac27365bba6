//! Property tests for cleanup sets and the global deletion plan.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use breakdown::domain::services::CleanupPlanner;
use breakdown::{AssetReference, CleanupKind, TemplatePattern, VersionedAsset};

const PATTERN: &str = "/jobs/show/{step}/{asset}/v{version}/{asset_basename}";

fn template() -> TemplatePattern {
    TemplatePattern::new("general", PATTERN).unwrap()
}

fn chair_path(version: u32) -> String {
    format!("/jobs/show/model/chair/v{:03}/chair.bgeo", version)
}

fn asset(id: &str, current: u32, versions: &BTreeSet<u32>) -> VersionedAsset {
    let path = chair_path(current);
    VersionedAsset::with_versions(
        AssetReference::new(id, path.clone(), path),
        &template(),
        versions.iter().copied(),
    )
    .unwrap()
}

fn versions() -> impl Strategy<Value = BTreeSet<u32>> {
    proptest::collection::btree_set(1u32..1000, 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every elder candidate is also an unused candidate.
    #[test]
    fn property_elders_within_unused(current in 1u32..1000, on_disk in versions()) {
        let a = asset("/obj/chair", current, &on_disk);
        let elders = a.elders().unwrap();
        let unused = a.unused().unwrap();

        for path in elders.candidates() {
            prop_assert!(unused.candidates().contains(path));
        }
    }

    /// PROPERTY: Neither set nominates the current path.
    #[test]
    fn property_current_never_nominated(current in 1u32..1000, on_disk in versions()) {
        let a = asset("/obj/chair", current, &on_disk);
        let keep = PathBuf::from(chair_path(current));

        prop_assert!(!a.elders().unwrap().candidates().contains(&keep));
        prop_assert!(!a.unused().unwrap().candidates().contains(&keep));
        prop_assert_eq!(
            a.unused().unwrap().candidates().len(),
            on_disk.iter().filter(|&&v| v != current).count()
        );
    }

    /// PROPERTY: The global plan never contains a path kept by any asset.
    #[test]
    fn property_plan_spares_every_kept_path(
        currents in proptest::collection::vec(1u32..1000, 1..5),
        on_disk in versions(),
        unused in any::<bool>(),
    ) {
        let kind = if unused { CleanupKind::Unused } else { CleanupKind::Elders };
        let assets: Vec<_> = currents
            .iter()
            .enumerate()
            .map(|(i, &v)| asset(&format!("/obj/chair_{}", i), v, &on_disk))
            .collect();
        let sets: Vec<_> = assets.iter().map(|a| a.cleanup_set(kind).unwrap()).collect();

        let plan = CleanupPlanner::new().plan(&sets).unwrap();

        for v in &currents {
            prop_assert!(!plan.paths().contains(&PathBuf::from(chair_path(*v))));
        }
        for path in plan.paths() {
            prop_assert!(sets.iter().any(|s| s.candidates().contains(path)));
        }
    }
}
