//! Integration tests for the config → rebuild → bundle pipeline.
//!
//! These exercise the application the way the binary does: a TOML config is
//! parsed, entities flow through the entity-source seam, the graph is built,
//! and the bundle lands on disk.

use std::path::PathBuf;

use uuid::Uuid;

use deck_assistant::application::rebuild_profile::rebuild;
use deck_assistant::infrastructure::entity_source::{
    to_catalog_entities, EntitySource, StaticEntitySource,
};
use deck_assistant::infrastructure::storage::config::AppConfig;
use deck_core::domain::content::ContentItem;
use deck_core::domain::page::PageKind;
use deck_profile::{device_folder_id, write_bundle, BundleOptions, CellAction, PageManifest, ProfileIndex};

const SAMPLE_CONFIG: &str = r#"
[profile]
name = "Test Home"

[device]
model = "standard"

[theme]
nav_corner = "bottom-right"
back_corner = "top-right"

[selection]
sort = "alphabetical"
ungrouped = ["light.hall", "switch.fan"]

[[selection.groups]]
name = "Office"
display = "folder"
entities = ["light.desk", "light.shelf"]

[[selection.groups]]
name = "Bedroom"
display = "page"
entities = ["light.bed"]

[[entities]]
id = "light.desk"
domain = "light"
name = "Desk Lamp"
area = "office"

[[entities]]
id = "light.shelf"
domain = "light"
name = "Shelf Light"
area = "office"

[[entities]]
id = "light.bed"
domain = "light"
name = "Bed Light"
area = "bedroom"

[[entities]]
id = "light.hall"
domain = "light"
name = "Hall Light"

[[entities]]
id = "switch.fan"
domain = "switch"
name = "Ceiling Fan"
"#;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("deck_assistant_test_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

async fn graph_from_config(cfg: &AppConfig) -> deck_core::NavigationGraph {
    let source = StaticEntitySource::from_catalog(&cfg.entities);
    let records = source.entities().await.unwrap();
    let areas = source.areas().await.unwrap();
    let entities = to_catalog_entities(records, &areas);
    rebuild(&cfg.to_snapshot(entities).unwrap()).unwrap()
}

#[tokio::test]
async fn test_sample_config_builds_expected_page_kinds() {
    let cfg: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
    let graph = graph_from_config(&cfg).await;

    let kinds: Vec<PageKind> = graph.pages().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![PageKind::Main, PageKind::PageGroup, PageKind::FolderSub]
    );

    // Lead page: the folder button first, then the ungrouped pool sorted
    // alphabetically by display name (Ceiling Fan before Hall Light).
    let entry_items: Vec<String> = graph
        .entry_page()
        .occupied()
        .filter_map(|(_, it)| match it {
            ContentItem::Entity(e) => Some(e.entity_id.clone()),
            ContentItem::Folder { group_name, .. } => Some(format!("folder:{group_name}")),
            _ => None,
        })
        .collect();
    assert_eq!(entry_items, vec!["folder:Office", "switch.fan", "light.hall"]);
}

#[tokio::test]
async fn test_bundle_round_trip_covers_every_jump_target() {
    let cfg: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
    let graph = graph_from_config(&cfg).await;

    let dir = temp_dir();
    let options = BundleOptions {
        profile_name: cfg.profile.name.clone(),
        back_corner: cfg.theme.back_corner,
    };
    let root = write_bundle(&graph, &options, &dir).unwrap();

    let index: ProfileIndex =
        serde_json::from_str(&std::fs::read_to_string(root.join("manifest.json")).unwrap())
            .unwrap();
    assert_eq!(index.name, "Test Home");
    assert_eq!(index.pages.current, graph.entry_page_id());

    let mut jump_targets = Vec::new();
    for page in graph.pages() {
        let manifest: PageManifest = serde_json::from_str(
            &std::fs::read_to_string(
                root.join("Profiles")
                    .join(device_folder_id(page.id.as_uuid()))
                    .join("manifest.json"),
            )
            .unwrap(),
        )
        .unwrap();
        for action in manifest.controllers[0].actions.values() {
            if let CellAction::JumpTo(target) = action {
                jump_targets.push(*target);
            }
        }
    }

    assert!(!jump_targets.is_empty());
    for target in jump_targets {
        assert!(index.pages.pages.contains(&target));
    }

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_rebuild_is_idempotent_end_to_end() {
    let cfg: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
    let a = graph_from_config(&cfg).await;
    let b = graph_from_config(&cfg).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_folder_up_returns_to_opener_through_bundle() {
    let cfg: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
    let graph = graph_from_config(&cfg).await;

    let entry = graph.entry_page_id();
    let sub = graph
        .pages()
        .iter()
        .find(|p| p.kind == PageKind::FolderSub)
        .expect("folder sub-page must exist");
    assert_eq!(sub.edges.parent, Some(entry));

    // The folder button's target resolves to this sub-page.
    let target = graph
        .entry_page()
        .occupied()
        .find_map(|(_, it)| match it {
            ContentItem::Folder { target, .. } => Some(*target),
            _ => None,
        })
        .unwrap();
    assert_eq!(target, sub.id);
}

#[tokio::test]
async fn test_malformed_color_fails_before_any_page_is_built() {
    let mut cfg: AppConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
    cfg.theme.trigger = "orange".to_string();

    let source = StaticEntitySource::from_catalog(&cfg.entities);
    let entities = to_catalog_entities(source.entities().await.unwrap(), &[]);
    let result = cfg.to_snapshot(entities);
    assert!(result.is_err());
}
