//! Spatial Index Module
//!
//! R-tree over area bounding boxes (map space) for pointer hit testing and
//! rectangle queries.

use crate::types::{Area, AreaId, Point};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one area
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub area_id: AreaId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(area: &Area) -> Self {
        Self {
            area_id: area.id.clone(),
            min_x: area.position.x,
            min_y: area.position.y,
            max_x: area.right(),
            max_y: area.bottom(),
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.area_id == other.area_id
    }
}

/// Spatial index for areas using an R-tree.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<AreaId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_areas<'a, I>(areas: I) -> Self
    where
        I: IntoIterator<Item = &'a Area>,
    {
        let mut index = Self::new();
        index.rebuild(areas);
        index
    }

    /// Insert or replace the entry for `area`
    pub fn insert(&mut self, area: &Area) {
        if let Some(old_entry) = self.entries.remove(&area.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(area);
        self.tree.insert(entry.clone());
        self.entries.insert(area.id.clone(), entry);
    }

    pub fn remove(&mut self, area_id: &AreaId) -> bool {
        if let Some(entry) = self.entries.remove(area_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Query all areas that contain the given map point.
    pub fn query_point(&self, point: Point) -> Vec<AreaId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.area_id.clone())
            .collect()
    }

    /// Query all areas that intersect a rectangular region.
    pub fn query_rect(&self, min: Point, max: Point) -> Vec<AreaId> {
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.area_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I>(&mut self, areas: I)
    where
        I: IntoIterator<Item = &'a Area>,
    {
        let entries: Vec<SpatialEntry> = areas.into_iter().map(SpatialEntry::new).collect();

        self.entries = entries
            .iter()
            .map(|e| (e.area_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
