//! Deck Assistant CLI entry point.
//!
//! Rebuilds the profile layout from the configuration file and writes the
//! `.sdProfile` bundle.
//!
//! ```text
//! deck-assistant [CONFIG_PATH] [OUTPUT_DIR]
//! ```
//!
//! With no arguments the platform config path and the current directory are
//! used. Entities come from the config's fixture list via the entity-source
//! seam; a live deployment swaps in a connected source behind the same
//! trait.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use deck_assistant::application::rebuild_profile::rebuild;
use deck_assistant::infrastructure::entity_source::{
    to_catalog_entities, EntitySource, StaticEntitySource,
};
use deck_assistant::infrastructure::storage::config;
use deck_profile::{write_bundle, BundleOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let cfg = match &config_path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config().context("loading config")?,
    };

    // Structured logging; `RUST_LOG` overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.profile.log_level.clone())),
        )
        .init();

    info!(profile = %cfg.profile.name, "Deck Assistant starting");

    // ── Fetch entities through the source seam ────────────────────────────────
    let source = StaticEntitySource::from_catalog(&cfg.entities);
    let records = source.entities().await.context("fetching entities")?;
    let areas = source.areas().await.context("fetching areas")?;
    info!(entities = records.len(), areas = areas.len(), "entity source ready");
    let entities = to_catalog_entities(records, &areas);

    // ── Rebuild ───────────────────────────────────────────────────────────────
    let snapshot = cfg.to_snapshot(entities).context("assembling snapshot")?;
    let graph = rebuild(&snapshot).context("building navigation graph")?;
    if !graph.diagnostics().is_empty() {
        warn!(
            count = graph.diagnostics().len(),
            "build completed with diagnostics"
        );
    }

    // ── Serialize ─────────────────────────────────────────────────────────────
    let options = BundleOptions {
        profile_name: cfg.profile.name.clone(),
        back_corner: cfg.theme.back_corner,
    };
    let bundle = write_bundle(&graph, &options, &output_dir)
        .with_context(|| format!("writing bundle under {}", output_dir.display()))?;

    info!(
        bundle = %bundle.display(),
        pages = graph.pages().len(),
        "profile bundle complete"
    );
    Ok(())
}
