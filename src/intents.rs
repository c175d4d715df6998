//! Update intents emitted by the interaction controller and the editor
//! commands.
//!
//! Intents are plain data. The store applies them with replace-on-id-match
//! semantics: an intent naming an unknown area is silently ignored.

use crate::types::{Area, AreaId, AreaKind, Point, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UpdateIntent {
    /// New top-left position (map space) for an area
    #[serde(rename_all = "camelCase")]
    MoveArea { area_id: AreaId, position: Point },

    /// New size (map space) for an area
    #[serde(rename_all = "camelCase")]
    ResizeArea { area_id: AreaId, size: Size },

    /// Append a freshly created area
    CreateArea { area: Area },

    /// Change or clear the selected area
    #[serde(rename_all = "camelCase")]
    SelectArea { area_id: Option<AreaId> },

    /// Property edit from the sidebar
    #[serde(rename_all = "camelCase")]
    EditArea { area_id: AreaId, edit: AreaEdit },

    #[serde(rename_all = "camelCase")]
    DeleteArea { area_id: AreaId },

    /// New viewport pan offset (screen pixels)
    PanViewport { offset: Point },

    /// New viewport scale
    ZoomViewport { scale: f64 },
}

impl UpdateIntent {
    /// Id of the area this intent targets, if any
    pub fn area_id(&self) -> Option<&AreaId> {
        match self {
            UpdateIntent::MoveArea { area_id, .. }
            | UpdateIntent::ResizeArea { area_id, .. }
            | UpdateIntent::EditArea { area_id, .. }
            | UpdateIntent::DeleteArea { area_id } => Some(area_id),
            UpdateIntent::CreateArea { area } => Some(&area.id),
            UpdateIntent::SelectArea { area_id } => area_id.as_ref(),
            UpdateIntent::PanViewport { .. } | UpdateIntent::ZoomViewport { .. } => None,
        }
    }

    /// True for intents that only touch the viewport
    pub fn is_viewport(&self) -> bool {
        matches!(
            self,
            UpdateIntent::PanViewport { .. } | UpdateIntent::ZoomViewport { .. }
        )
    }
}

/// Partial edit of an area's properties. `None` fields are left unchanged;
/// the id, position and size are never edited this way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaEdit {
    pub name: Option<String>,
    pub kind: Option<AreaKind>,
    pub capacity: Option<u32>,
    pub color: Option<String>,
}

impl AreaEdit {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: AreaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.kind.is_none() && self.capacity.is_none() && self.color.is_none()
    }

    /// Apply to `area`. Capacity is floored at 1. Returns true if anything
    /// changed.
    pub fn apply_to(&self, area: &mut Area) -> bool {
        let before = area.clone();
        if let Some(name) = &self.name {
            area.name = name.clone();
        }
        if let Some(kind) = self.kind {
            area.kind = kind;
        }
        if let Some(capacity) = self.capacity {
            area.capacity = capacity.max(1);
        }
        if let Some(color) = &self.color {
            area.color = color.clone();
        }
        *area != before
    }
}
