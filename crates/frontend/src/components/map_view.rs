use dioxus::prelude::*;
use js_sys::{Array, Object, Reflect};
use storyapp_shared::geo::{self, MapMarker};
use wasm_bindgen::prelude::*;

use crate::components::loader::LoaderAbsolute;

pub const MAP_CONTAINER_ID: &str = "map";

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// ---------------------------------------------------------------------------
// Leaflet bindings (global `L`, loaded from the page head)
// ---------------------------------------------------------------------------

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tiles_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    pub type LayerGroup;

    #[wasm_bindgen(catch, js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> Result<LayerGroup, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_group_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup) -> LayerGroup;

    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn leaflet_marker(lat_lng: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, group: &LayerGroup) -> Marker;
}

fn lat_lng(lat: f64, lon: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lon))
}

fn tile_options() -> JsValue {
    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(TILE_ATTRIBUTION),
    );
    let _ = Reflect::set(&options, &JsValue::from_str("maxZoom"), &JsValue::from_f64(19.0));
    options.into()
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Run `release` when `result` is an error, then pass the result through.
fn release_on_error<T>(result: Result<T, String>, release: impl FnOnce()) -> Result<T, String> {
    if result.is_err() {
        release();
    }
    result
}

fn attach_layers(map: &LeafletMap) -> Result<LayerGroup, String> {
    tile_layer(TILE_URL, &tile_options())
        .map_err(|e| describe(&e))?
        .add_tiles_to(map);

    let markers = layer_group().map_err(|e| describe(&e))?;
    markers.add_group_to(map);
    Ok(markers)
}

// ---------------------------------------------------------------------------
// Map handle
// ---------------------------------------------------------------------------

/// A Leaflet map plus the layer holding the current page's markers.
pub struct StoryMap {
    // Held for the lifetime of the page; Leaflet owns the rendering.
    _map: LeafletMap,
    markers: LayerGroup,
}

impl StoryMap {
    /// Create the map inside `container_id`, centred on `(lat, lon)`.
    pub fn initialize(container_id: &str, lat: f64, lon: f64, zoom: u8) -> Result<Self, String> {
        let map = leaflet_map(container_id).map_err(|e| describe(&e))?;
        map.set_view(&lat_lng(lat, lon), f64::from(zoom));

        // A half-built map would keep `#map` claimed and block every retry.
        let markers = release_on_error(attach_layers(&map), || {
            map.remove();
        })?;

        tracing::debug!(container_id, "map initialized");
        Ok(Self { _map: map, markers })
    }

    /// Map over the default location.
    pub fn initialize_default() -> Result<Self, String> {
        Self::initialize(
            MAP_CONTAINER_ID,
            geo::DEFAULT_LAT,
            geo::DEFAULT_LON,
            geo::DEFAULT_ZOOM,
        )
    }

    /// Replace the markers on the map.
    pub fn add_markers(&self, markers: &[MapMarker]) {
        self.markers.clear_layers();
        for m in markers {
            match leaflet_marker(&lat_lng(m.lat, m.lon)) {
                Ok(marker) => {
                    marker.bind_popup(&m.popup_html()).add_marker_to(&self.markers);
                }
                Err(e) => tracing::warn!(label = %m.label, error = %describe(&e), "failed to add marker"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Map section of the home page. Leaflet takes over `#map` once the
/// presenter initializes it.
#[component]
pub fn MapSection(loading: bool) -> Element {
    rsx! {
        section {
            div { class: "reports-list__map__container",
                div { id: MAP_CONTAINER_ID, class: "reports-list__map" }
                div { id: "map-loading-container",
                    if loading {
                        LoaderAbsolute {}
                    }
                }
            }
        }
    }
}
