//! Properties of a scaffold pass over generated catalogs.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use proptest::prelude::*;

use shepherd::infrastructure::LocalFs;
use shepherd::{
    ArtifactCatalog, CatalogEntry, ProjectDescriptor, ScaffoldOptions, ScaffoldUseCase,
};

/// Distinct relative paths (1-3 segments) mapped to content
///
/// Directory segments never end in `.md`, so no file path can collide with
/// another entry's parent directory.
fn catalog_records() -> impl Strategy<Value = Vec<(String, String)>> {
    let segment = proptest::string::string_regex("[a-z0-9_-]{1,8}").unwrap();
    let path = proptest::collection::vec(segment, 1..=3)
        .prop_map(|segments| format!("{}.md", segments.join("/")));
    let content = proptest::string::string_regex("(?s).{0,64}").unwrap();
    proptest::collection::btree_map(path, content, 0..8)
        .prop_map(|m: BTreeMap<String, String>| m.into_iter().collect())
}

fn build_catalog(records: &[(String, String)]) -> ArtifactCatalog {
    let entries = records
        .iter()
        .enumerate()
        .map(|(i, (path, content))| {
            CatalogEntry::new(format!("entry-{i}"), path, content.clone()).unwrap()
        })
        .collect();
    ArtifactCatalog::new(entries).unwrap()
}

fn snapshot(root: &Path, records: &[(String, String)]) -> Vec<Option<String>> {
    records
        .iter()
        .map(|(p, _)| fs::read_to_string(root.join(p)).ok())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: created + skipped partitions the catalog, in catalog order.
    #[test]
    fn property_outcomes_partition_catalog(
        records in catalog_records(),
        preexisting in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        for ((path, _), pre) in records.iter().zip(&preexisting) {
            if *pre {
                let target = dir.path().join(path);
                fs::create_dir_all(target.parent().unwrap()).unwrap();
                fs::write(&target, "pre-existing").unwrap();
            }
        }
        let catalog = build_catalog(&records);
        let options = ScaffoldOptions::new(dir.path()).with_working_dir_base(dir.path());

        let result = ScaffoldUseCase::new(LocalFs::new())
            .execute(&ProjectDescriptor::new("Prop"), &catalog, &options)
            .unwrap();

        prop_assert_eq!(result.created().len() + result.skipped().len(), catalog.len());
        let created: HashSet<_> = result.created().into_iter().collect();
        prop_assert!(result.skipped().iter().all(|p| !created.contains(p)));

        let order: Vec<_> = result.outcomes().iter().map(|o| o.relative_path.clone()).collect();
        let expected: Vec<_> = catalog.iter().map(|e| e.path().as_path().to_path_buf()).collect();
        prop_assert_eq!(order, expected);
    }

    /// PROPERTY: a second run creates nothing and changes nothing.
    #[test]
    fn property_second_run_is_noop(
        records in catalog_records(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = build_catalog(&records);
        let options = ScaffoldOptions::new(dir.path()).with_working_dir_base(dir.path());
        let use_case = ScaffoldUseCase::new(LocalFs::new());
        let descriptor = ProjectDescriptor::new("Prop");

        use_case.execute(&descriptor, &catalog, &options).unwrap();
        let after_first = snapshot(dir.path(), &records);
        let second = use_case.execute(&descriptor, &catalog, &options).unwrap();

        prop_assert!(second.created().is_empty());
        prop_assert_eq!(second.skipped().len(), catalog.len());
        prop_assert_eq!(snapshot(dir.path(), &records), after_first);
    }

    /// PROPERTY: pre-populated targets keep their exact bytes.
    #[test]
    fn property_existing_content_survives(
        records in catalog_records(),
        user_content in "(?s).{0,64}",
    ) {
        prop_assume!(!records.is_empty());
        let dir = tempfile::tempdir().unwrap();
        let (victim, _) = &records[0];
        let target = dir.path().join(victim);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, &user_content).unwrap();

        let catalog = build_catalog(&records);
        let options = ScaffoldOptions::new(dir.path()).with_working_dir_base(dir.path());
        let result = ScaffoldUseCase::new(LocalFs::new())
            .execute(&ProjectDescriptor::new("Prop"), &catalog, &options)
            .unwrap();

        prop_assert_eq!(fs::read_to_string(&target).unwrap(), user_content);
        prop_assert!(result.skipped().contains(&Path::new(victim.as_str())));
    }

    /// PROPERTY: written content is the catalog content, byte for byte.
    #[test]
    fn property_content_written_verbatim(
        records in catalog_records(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let catalog = build_catalog(&records);
        let options = ScaffoldOptions::new(dir.path()).with_working_dir_base(dir.path());

        ScaffoldUseCase::new(LocalFs::new())
            .execute(&ProjectDescriptor::new("Prop"), &catalog, &options)
            .unwrap();

        for (path, content) in &records {
            prop_assert_eq!(&fs::read_to_string(dir.path().join(path)).unwrap(), content);
        }
    }
}
