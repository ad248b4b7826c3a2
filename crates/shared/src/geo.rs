//! Map defaults and marker planning for story locations.
//!
//! The map opens over Depok/Jakarta at zoom 8. Markers are computed here so the
//! browser side only has to hand them to Leaflet.

use v_htmlescape::escape;

use crate::models::Story;

pub const DEFAULT_LAT: f64 = -6.352052;
pub const DEFAULT_LON: f64 = 106.83252;
pub const DEFAULT_ZOOM: u8 = 8;

pub const DEFAULT_MARKER_LABEL: &str = "Default Marker";

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub label: String,
}

impl MapMarker {
    pub fn default_marker() -> Self {
        Self {
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            label: DEFAULT_MARKER_LABEL.to_string(),
        }
    }

    /// Popup content for the marker. The label is user data, so it is escaped.
    pub fn popup_html(&self) -> String {
        format!("<strong>{}</strong>", escape(&self.label))
    }
}

/// Markers for one page of stories.
///
/// An empty page yields a single default marker; stories posted without a
/// location are skipped.
pub fn markers_for(stories: &[Story]) -> Vec<MapMarker> {
    if stories.is_empty() {
        return vec![MapMarker::default_marker()];
    }
    stories
        .iter()
        .filter_map(|story| {
            story.location().map(|(lat, lon)| MapMarker {
                lat,
                lon,
                label: story.name.clone(),
            })
        })
        .collect()
}
