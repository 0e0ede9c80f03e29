//! Fiber Map Editor (Headless).
//!
//! Spielt ein Intent-Skript (JSON-Array) gegen ein In-Memory-Backend ab
//! und gibt die resultierende Karten-Szene als JSON aus.
//!
//! Aufruf: `fiber-map-editor <intents.json> [<seed.json>]`
//!
//! `seed.json` enthält optional Backend-Datensätze je Ressource,
//! z.B. `{ "junction": [ { ... } ], "route": [ ... ] }`.

use anyhow::Context;
use fiber_map_editor::app::ApiKind;
use fiber_map_editor::{
    AppController, AppIntent, AppState, EditorOptions, MemoryApi, RecordingMapAdapter,
};
use std::collections::HashMap;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Fiber Map Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .context("Aufruf: fiber-map-editor <intents.json> [<seed.json>]")?;
    let seed_path = args.next();

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let mut state = AppState::with_options(EditorOptions::load_from_file(&config_path));
    state.options_path = Some(config_path);

    let mut api = MemoryApi::new();
    if let Some(path) = seed_path {
        let seeded = seed_api(&mut api, Path::new(&path))?;
        log::info!("{} Datensätze aus {} übernommen", seeded, path);
    }

    let mut adapter = RecordingMapAdapter::new();
    let mut controller = AppController::new();
    controller.load_office(&mut state, &mut api)?;

    let intents = read_intents(Path::new(&script_path))?;
    log::info!("{} Intents geladen", intents.len());
    for intent in intents {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
        }
        controller.flush_adapter(&mut state, &mut adapter);
        controller.sync(&mut state, &mut api)?;
    }

    log::info!(
        "{} Commands ausgeführt: {:?}",
        state.command_log.total(),
        state.command_log.histogram()
    );
    for notification in state.notifications.drain() {
        log::info!("[{:?}] {}", notification.level, notification.message);
    }

    let scene = controller.build_map_scene(&state);
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

fn read_intents(path: &Path) -> anyhow::Result<Vec<AppIntent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Skript ungültig: {}", path.display()))
}

fn seed_api(api: &mut MemoryApi, path: &Path) -> anyhow::Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Seed-Datei nicht lesbar: {}", path.display()))?;
    let mut resources: HashMap<String, Vec<serde_json::Value>> = serde_json::from_str(&content)
        .with_context(|| format!("Seed-Datei ungültig: {}", path.display()))?;

    let mut seeded = 0;
    for kind in ApiKind::ALL {
        for value in resources.remove(kind.resource()).unwrap_or_default() {
            api.seed(kind, value);
            seeded += 1;
        }
    }
    for unknown in resources.keys() {
        log::warn!("Unbekannte Ressource in Seed-Datei ignoriert: {}", unknown);
    }
    Ok(seeded)
}
