use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::db::display_id;

/// Payload accepted by the add-item endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewItem {
    #[schema(example = "My first item")]
    pub name: String,
}

impl NewItem {
    /// Reject payloads whose `name` is the empty string
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        Ok(())
    }
}

/// Response type for the ping endpoint and informational replies
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for successful add-item calls
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddItemResponse {
    pub message: String,
    pub inserted_id: String,
}

/// A stored item with its id rendered as text.
///
/// Attributes other than `_id` and `name` are carried through untouched as
/// relaxed extended JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl TryFrom<Document> for ItemResponse {
    type Error = String;

    fn try_from(mut doc: Document) -> Result<Self, Self::Error> {
        let id = doc
            .remove("_id")
            .map(|id| display_id(&id))
            .ok_or_else(|| "stored item has no _id".to_string())?;

        let name = match doc.remove("name") {
            Some(Bson::String(name)) => name,
            Some(_) => return Err(format!("stored item {} has a non-text name", id)),
            None => return Err(format!("stored item {} has no name", id)),
        };

        let extra = match Bson::Document(doc).into_relaxed_extjson() {
            JsonValue::Object(map) => map,
            _ => Map::new(),
        };

        Ok(ItemResponse { id, name, extra })
    }
}

/// Body of the get-latest-item endpoint: the item, or a note that there is none
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LatestItemResponse {
    Found(ItemResponse),
    Empty { message: String },
}
