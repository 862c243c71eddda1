use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Camera, TransformMatrix},
    foundation::error::{ListcompError, ListcompResult},
    render::blend::BlendMode,
};

/// JSON-facing display list: the ordered children of one container.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneList {
    /// Blend mode of the container's base context.
    #[serde(default)]
    pub base_blend: BlendMode,
    /// Camera the list is rendered through.
    #[serde(default)]
    pub camera: Camera,
    /// Transform of the enclosing container, if nested.
    #[serde(default)]
    pub parent_transform: Option<TransformMatrix>,
    /// Children in draw order.
    pub items: Vec<SceneItem>,
}

/// One child of a [`SceneList`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneItem {
    /// Item identifier (unique within the list).
    pub id: String,
    /// Blend mode the item is drawn with.
    #[serde(default)]
    pub blend: BlendMode,
}

impl SceneItem {
    /// Create an item.
    pub fn new(id: impl Into<String>, blend: BlendMode) -> Self {
        Self {
            id: id.into(),
            blend,
        }
    }
}

impl SceneList {
    /// Parse a display list from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ListcompResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ListcompError::serde(format!("parse scene list JSON: {e}")))
    }

    /// Parse a display list from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ListcompResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ListcompError::validation(format!("open scene list JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject empty or duplicate item ids.
    pub fn validate(&self) -> ListcompResult<()> {
        let mut seen = BTreeSet::new();
        for (idx, item) in self.items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(ListcompError::validation(format!(
                    "item #{idx} has an empty id"
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ListcompError::validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
