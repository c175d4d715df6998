//! Areas slice - the rooms and desks placed on the plant, plus selection.

use crate::types::{Area, AreaId, Point, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreasState {
    pub areas: Vec<Area>,
    pub selected_area_id: Option<AreaId>,
}

impl AreasState {
    pub fn get(&self, id: &AreaId) -> Option<&Area> {
        self.areas.iter().find(|area| &area.id == id)
    }

    pub fn get_mut(&mut self, id: &AreaId) -> Option<&mut Area> {
        self.areas.iter_mut().find(|area| &area.id == id)
    }

    pub fn selected(&self) -> Option<&Area> {
        self.selected_area_id.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: &AreaId) -> bool {
        self.selected_area_id.as_ref() == Some(id)
    }

    pub fn add(&mut self, area: Area) {
        self.areas.push(area);
    }

    /// Remove an area, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: &AreaId) -> bool {
        let before = self.areas.len();
        self.areas.retain(|area| &area.id != id);
        if self.is_selected(id) {
            self.selected_area_id = None;
        }
        self.areas.len() != before
    }

    pub fn set_selected(&mut self, id: Option<AreaId>) -> bool {
        if self.selected_area_id == id {
            return false;
        }
        self.selected_area_id = id;
        true
    }

    pub fn set_position(&mut self, id: &AreaId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(area) if area.position != position => {
                area.position = position;
                true
            }
            _ => false,
        }
    }

    pub fn set_size(&mut self, id: &AreaId, size: Size) -> bool {
        match self.get_mut(id) {
            Some(area) if area.size != size => {
                area.size = size;
                true
            }
            _ => false,
        }
    }
}
