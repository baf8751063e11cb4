//! Map display contract.
//!
//! The form controller only needs three things from a map widget: recentre,
//! add a point marker, remove a point marker. [`MapView`] captures exactly
//! that; [`MarkerMap`] is a headless implementation that keeps the state in
//! memory so it can be printed by the CLI or inspected in tests.

use crate::Coordinate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Initial map centre (Jaipur).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(26.9124, 75.7873);

/// Zoom level used for the initial view and every recentre.
pub const DEFAULT_ZOOM: u8 = 12;

/// Operations a map widget exposes to the form controller.
///
/// Implementations must tolerate repeated calls with the same arguments:
/// removing a marker that is already gone is a no-op.
pub trait MapView {
    /// Handle identifying one marker on the map.
    type Marker;

    /// Recentres the map on `center` at `zoom`.
    fn set_view(&mut self, center: Coordinate, zoom: u8);

    /// Places a point marker and returns its handle.
    fn add_marker(&mut self, at: Coordinate) -> Self::Marker;

    /// Removes a previously added marker.
    fn remove_marker(&mut self, marker: Self::Marker);
}

/// Raster tile source shown beneath the markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    /// Attribution text the provider requires
    pub attribution: String,
}

impl TileLayer {
    /// The public OpenStreetMap tile layer.
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

/// Opaque marker handle issued by [`MarkerMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MarkerId(u64);

/// In-memory map: current view plus the set of live markers.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerMap {
    center: Coordinate,
    zoom: u8,
    tiles: TileLayer,
    markers: BTreeMap<MarkerId, Coordinate>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for MarkerMap {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER, DEFAULT_ZOOM)
    }
}

impl MarkerMap {
    /// Creates a map centred on `center` with the OpenStreetMap tile layer.
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            tiles: TileLayer::openstreetmap(),
            markers: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Current map centre.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Current zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Tile layer in use.
    pub fn tiles(&self) -> &TileLayer {
        &self.tiles
    }

    /// Positions of all live markers, oldest first.
    pub fn markers(&self) -> Vec<Coordinate> {
        self.markers.values().copied().collect()
    }

    /// Number of live markers.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

impl MapView for MarkerMap {
    type Marker = MarkerId;

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }

    fn add_marker(&mut self, at: Coordinate) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.insert(id, at);
        id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.markers.remove(&marker);
    }
}
