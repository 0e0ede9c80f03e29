//! Builder für MapScene aus dem AppState.

use super::AppState;
use crate::core::{EntityKind, ItemRef};
use crate::shared::{MapScene, SceneMarker, SceneRoute};

/// Baut die Karten-Szene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> MapScene {
    let selected = state.selection.current;
    let registry = &state.registry;

    let markers = EntityKind::ALL
        .into_iter()
        .flat_map(|kind| {
            registry.entities(kind).iter().map(move |rec| {
                let item = ItemRef::new(kind, rec.id);
                SceneMarker {
                    item,
                    kind,
                    position: rec.value.position(),
                    title: rec.value.title().to_string(),
                    selected: selected == Some(item),
                }
            })
        })
        .collect();

    let routes = registry
        .routes()
        .iter()
        .map(|rec| {
            let item = ItemRef::route(rec.id);
            SceneRoute {
                item,
                handle: state.editor.layers.handle_of(rec.id),
                name: rec.value.name.clone(),
                points: rec.value.points.clone(),
                length_km: rec.value.length_km_with_radius(state.options.earth_radius_km),
                selected: selected == Some(item),
                editing: state.editor.editing_route == Some(rec.id),
            }
        })
        .collect();

    let placement = &state.editor.placement;
    MapScene {
        center: state.options.map_center,
        zoom: state.options.map_zoom,
        draw_mode: state.editor.draw_mode,
        markers,
        routes,
        armed_kind: placement.armed,
        pending_marker: placement.pending.map(|p| (p.kind, p.position)),
        pending_route: state.editor.pending_route.as_ref().map(|r| r.points.clone()),
        selected,
    }
}
