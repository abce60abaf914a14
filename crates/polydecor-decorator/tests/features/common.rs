use polydecor_core::LatLng;
use polydecor_decorator::{MapContext, PathInput, WebMercatorMap};
use std::sync::Arc;

pub const LAT: f64 = 48.0;

/// Horizontal path from 17.000 to 17.010 degrees east
pub fn short_east_path() -> PathInput {
    PathInput::polyline(vec![LatLng::new(LAT, 17.0), LatLng::new(LAT, 17.01)])
}

pub fn map_at(zoom: f64) -> Arc<WebMercatorMap> {
    Arc::new(WebMercatorMap::new(LatLng::new(LAT, 17.005), zoom, 1024, 768).unwrap())
}

pub fn as_context(map: &Arc<WebMercatorMap>) -> Arc<dyn MapContext> {
    map.clone()
}
