use geojson_playground::{
    legend, Drawable, Error, FeatureStore, LatLng, MapConfig, MapView, RenderSurface,
    SelectionEvent, SurfaceStatus,
};

/// Prints drawables as JSON instead of handing them to a widget.
struct ConsoleSurface;

impl RenderSurface for ConsoleSurface {
    fn status(&self) -> SurfaceStatus {
        SurfaceStatus::Ready
    }

    fn configure(&mut self, config: &MapConfig) {
        println!(
            "map at {}, {} zoom {}",
            config.center.lat, config.center.lng, config.zoom
        );
    }

    fn clear(&mut self) {
        println!("--");
    }

    fn draw(&mut self, drawable: Drawable) {
        match serde_json::to_string(&drawable) {
            Ok(json) => println!("{:<10} {}", drawable.key(), json),
            Err(e) => log::error!("unable to encode {}: {}", drawable.key(), e),
        }
    }
}

fn main() -> Result<(), Error> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let mut view = MapView::new(FeatureStore::sample()?, MapConfig::default())?;
    let mut surface = ConsoleSurface;

    let keys: Vec<String> = view.tabs().iter().map(|(key, _)| key.to_string()).collect();
    for key in keys {
        view.select_scene(&key)?;
        println!("[{}]", view.active_scene().label);
        view.render(&mut surface)?;
    }

    view.select_scene("basic")?;
    view.dispatch(SelectionEvent::Select {
        index: 1,
        position: Some(LatLng::new(40.75, -73.98)),
    })?;
    if let Some(popup) = view.popup() {
        println!(
            "popup: {} ({}) at {}, {}",
            popup.title.as_deref().unwrap_or("unnamed"),
            popup.kind,
            popup.position.lat,
            popup.position.lng
        );
    }
    view.dispatch(SelectionEvent::Dismiss)?;

    for entry in legend() {
        println!("legend: {} {}", entry.label, entry.color);
    }
    Ok(())
}
