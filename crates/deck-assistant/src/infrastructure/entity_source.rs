//! Entity source seam.
//!
//! The live entity provider (its connection, reconnect, and subscription
//! machinery) is an external collaborator. The application only ever sees
//! this trait: a flat entity list plus the area registry, fetched once per
//! rebuild. [`StaticEntitySource`] serves fixtures for the CLI path and for
//! tests; the mock generated from the trait covers failure paths.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use deck_core::CatalogEntity;

/// One entity as reported by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Entity identifier, e.g. `light.kitchen_ceiling`.
    pub id: String,
    /// Domain prefix of the identifier.
    pub domain: String,
    /// Human-readable name.
    pub display_name: String,
    /// Area membership tag, if assigned.
    #[serde(default)]
    pub membership_tag: Option<String>,
    /// Floor membership, if assigned.
    #[serde(default)]
    pub floor: Option<String>,
}

/// One area as reported by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub id: String,
    pub name: String,
}

/// Error type for entity source operations.
#[derive(Debug, Error)]
pub enum EntitySourceError {
    /// The source is not reachable or not authenticated.
    #[error("entity source unavailable: {0}")]
    Unavailable(String),
}

/// The application's view of the entity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntitySource: Send + Sync {
    /// The flat list of all known entities.
    async fn entities(&self) -> Result<Vec<EntityRecord>, EntitySourceError>;

    /// The ordered area registry.
    async fn areas(&self) -> Result<Vec<AreaRecord>, EntitySourceError>;
}

/// A source backed by in-memory fixtures; used by the CLI (entities embedded
/// in the configuration file) and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEntitySource {
    entities: Vec<EntityRecord>,
    areas: Vec<AreaRecord>,
}

impl StaticEntitySource {
    pub fn new(entities: Vec<EntityRecord>, areas: Vec<AreaRecord>) -> Self {
        Self { entities, areas }
    }

    /// Builds a source from catalog entities, deriving the area registry
    /// from the membership tags present in the data.
    pub fn from_catalog(entities: &[CatalogEntity]) -> Self {
        let records: Vec<EntityRecord> = entities
            .iter()
            .map(|e| EntityRecord {
                id: e.id.clone(),
                domain: e.domain.clone(),
                display_name: e.name.clone(),
                membership_tag: e.area.clone(),
                floor: e.floor.clone(),
            })
            .collect();

        let mut areas: Vec<AreaRecord> = Vec::new();
        for record in &records {
            if let Some(tag) = &record.membership_tag {
                if !areas.iter().any(|a| &a.id == tag) {
                    areas.push(AreaRecord { id: tag.clone(), name: tag.clone() });
                }
            }
        }

        Self { entities: records, areas }
    }
}

#[async_trait]
impl EntitySource for StaticEntitySource {
    async fn entities(&self) -> Result<Vec<EntityRecord>, EntitySourceError> {
        Ok(self.entities.clone())
    }

    async fn areas(&self) -> Result<Vec<AreaRecord>, EntitySourceError> {
        Ok(self.areas.clone())
    }
}

/// Converts source records to catalog entities, resolving membership tags to
/// area names where the registry knows them.
pub fn to_catalog_entities(records: Vec<EntityRecord>, areas: &[AreaRecord]) -> Vec<CatalogEntity> {
    records
        .into_iter()
        .map(|record| {
            let area = record.membership_tag.as_ref().map(|tag| {
                areas
                    .iter()
                    .find(|a| &a.id == tag)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| tag.clone())
            });
            CatalogEntity {
                id: record.id,
                domain: record.domain,
                name: record.display_name,
                area,
                floor: record.floor,
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
