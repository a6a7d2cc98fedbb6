use super::{AccessToken, MapOverlay, OverlayError};

const MAPBOX_GL_VERSION: &str = "v3.9.4";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>LNM Maps</title>
<meta name="viewport" content="initial-scale=1,maximum-scale=1,user-scalable=no">
<link href="https://api.mapbox.com/mapbox-gl-js/__VERSION__/mapbox-gl.css" rel="stylesheet">
<script src="https://api.mapbox.com/mapbox-gl-js/__VERSION__/mapbox-gl.js"></script>
<style>body { margin: 0; padding: 0; } #map { width: 100vw; height: 100vh; }</style>
</head>
<body>
<div id="map"></div>
<script>
const overlay = __OVERLAY__;
mapboxgl.accessToken = __TOKEN__;
const map = new mapboxgl.Map({
  container: "map",
  style: overlay.style_url,
  center: [overlay.view_state.longitude, overlay.view_state.latitude],
  zoom: overlay.view_state.zoom
});
map.addControl(new mapboxgl.GeolocateControl({
  positionOptions: { enableHighAccuracy: overlay.geolocate.enable_high_accuracy },
  trackUserLocation: overlay.geolocate.track_user_location,
  showUserHeading: overlay.geolocate.show_user_heading
}), overlay.geolocate.position);
for (const marker of overlay.markers) {
  const el = document.createElement("div");
  el.className = "marker-" + marker.role;
  el.style.width = marker.icon.width + "px";
  el.style.height = marker.icon.height + "px";
  new mapboxgl.Marker({ element: el, anchor: "bottom" })
    .setLngLat([marker.longitude, marker.latitude])
    .addTo(map);
}
map.on("load", () => {
  const layer = overlay.route_layer;
  if (layer) {
    map.addSource(layer.id, { type: "geojson", data: layer.data });
    map.addLayer({ id: layer.id, type: layer.type, source: layer.id, layout: layer.layout, paint: layer.paint });
  }
});
</script>
</body>
</html>
"#;

/// fills the page template with the overlay and token. JSON values are
/// embedded directly as script literals, so `</` is escaped to keep the
/// script element intact.
pub fn render_page(overlay: &MapOverlay, access_token: &AccessToken) -> Result<String, OverlayError> {
    let overlay_json = script_literal(overlay)?;
    let token_json = script_literal(&access_token.as_str())?;
    let page = PAGE_TEMPLATE
        .replace("__VERSION__", MAPBOX_GL_VERSION)
        .replace("__OVERLAY__", &overlay_json)
        .replace("__TOKEN__", &token_json);
    Ok(page)
}

fn script_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, OverlayError> {
    let json =
        serde_json::to_string(value).map_err(|e| OverlayError::Serialization(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}
