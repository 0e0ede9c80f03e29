//! Verlauf ausgeführter Editor-Commands (Diagnose, Skript-Replay).

use super::AppCommand;
use std::collections::BTreeMap;

/// Ausgeführte Commands in Reihenfolge, auf `MAX_ENTRIES` begrenzt.
///
/// Läuft das Log voll, fällt die ältere Hälfte heraus. `total` zählt
/// unabhängig davon alle jemals aufgezeichneten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    total: usize,
}

impl CommandLog {
    pub const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Command auf.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            let dropped = Self::MAX_ENTRIES / 2;
            self.entries.drain(..dropped);
            log::debug!("Command-Log voll, {} alte Einträge verworfen", dropped);
        }
        self.entries.push(command.clone());
        self.total += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgezeichneten Commands.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Noch vorhandene Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Häufigkeit je Command-Art über die vorhandenen Einträge.
    pub fn histogram(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for command in &self.entries {
            *counts.entry(command.label()).or_insert(0) += 1;
        }
        counts
    }
}
