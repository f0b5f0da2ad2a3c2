//! Resource catalog.
//!
//! Lists Anki decks and note types as `anki://` resources and resolves those
//! URIs back to content. Nothing is cached: every listing and read goes to
//! AnkiConnect.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, ReadResourceResult, Resource,
    ResourceContents, ResourceTemplate,
};
use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument};

use super::error::ResourceError;
use super::uri::{EntityKind, EntityRef};
use crate::core::anki::{AnkiBackend, BackendError, BackendResult, actions, decode};

const JSON_MIME: &str = "application/json";

/// Enumerates and reads Anki-backed resources.
pub struct ResourceCatalog {
    backend: Arc<dyn AnkiBackend>,
}

impl ResourceCatalog {
    pub fn new(backend: Arc<dyn AnkiBackend>) -> Self {
        Self { backend }
    }

    /// List every deck followed by every note type.
    ///
    /// Both enumerations are sent to AnkiConnect before either is awaited.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Resource>, ResourceError> {
        let (decks, models) = futures::try_join!(
            self.names_and_ids(actions::DECK_NAMES_AND_IDS),
            self.names_and_ids(actions::MODEL_NAMES_AND_IDS),
        )?;

        info!("Listed {} decks and {} models", decks.len(), models.len());

        let decks = decks
            .into_iter()
            .map(|(name, id)| listing_entry(EntityRef::deck(id), name));
        let models = models
            .into_iter()
            .map(|(name, id)| listing_entry(EntityRef::model(id), name));

        Ok(decks.chain(models).collect())
    }

    /// Read a deck or note type by URI.
    #[instrument(skip(self))]
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entity = EntityRef::parse(uri)?;

        let payload = match entity.kind {
            // AnkiConnect has no single-deck lookup wired in here, so a deck
            // reads back as its id only.
            EntityKind::Deck => json!({ "deckId": entity.id }),
            EntityKind::Model => {
                let models = self
                    .backend
                    .invoke(
                        actions::FIND_MODELS_BY_ID,
                        json!({ "modelIds": [entity.id] }),
                    )
                    .await?;
                if models.as_array().is_some_and(|m| m.is_empty()) {
                    return Err(ResourceError::not_found(uri));
                }
                models
            }
        };

        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(JSON_MIME.to_string()),
                text,
                meta: None,
            }],
        })
    }

    /// URI templates for clients that already know an id.
    pub fn templates(&self) -> Vec<ResourceTemplate> {
        vec![
            RawResourceTemplate {
                uri_template: "anki://decks/{deckId}".to_string(),
                name: "Anki Deck".to_string(),
                title: Some("Deck by id".to_string()),
                description: Some("An Anki deck addressed by its numeric deck id".to_string()),
                mime_type: Some(JSON_MIME.to_string()),
            }
            .no_annotation(),
            RawResourceTemplate {
                uri_template: "anki://models/{modelId}".to_string(),
                name: "Anki Note Type".to_string(),
                title: Some("Note type by id".to_string()),
                description: Some(
                    "An Anki note type (model) definition: fields, templates and styling"
                        .to_string(),
                ),
                mime_type: Some(JSON_MIME.to_string()),
            }
            .no_annotation(),
        ]
    }

    /// Fetch a `name -> id` mapping, keeping AnkiConnect's ordering.
    async fn names_and_ids(&self, action: &str) -> BackendResult<Vec<(String, u64)>> {
        let result = self.backend.invoke(action, json!({})).await?;
        let mapping: Map<String, Value> = decode(action, result)?;
        debug!("{} returned {} entries", action, mapping.len());

        mapping
            .into_iter()
            .map(|(name, id)| match id.as_u64() {
                Some(id) => Ok((name, id)),
                None => Err(BackendError::invalid_response(
                    action,
                    format!("id for '{name}' is not an unsigned integer: {id}"),
                )),
            })
            .collect()
    }
}

fn listing_entry(entity: EntityRef, name: String) -> Resource {
    let description = match entity.kind {
        EntityKind::Deck => format!("Anki deck '{name}'"),
        EntityKind::Model => format!("Anki note type '{name}'"),
    };

    let mut raw = RawResource::new(entity.uri(), name);
    raw.description = Some(description);
    raw.mime_type = Some(JSON_MIME.to_string());
    raw.no_annotation()
}
