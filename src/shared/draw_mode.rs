//! Zeichenmodus der Karte und die daraus abgeleitete Zeichen-Konfiguration.

use super::options::EditorOptions;
use serde::{Deserialize, Serialize};

/// Interpretation von Zeiger-Gesten auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Kein Zeichnen, Klicks selektieren bzw. platzieren
    #[default]
    Disabled,
    /// Linie Punkt für Punkt, Doppelklick beendet
    Point,
    /// Freihand-Linie per Ziehen, Loslassen beendet
    Freehand,
}

impl DrawMode {
    /// Nimmt der Modus Zeichengesten entgegen?
    pub fn is_drawing(self) -> bool {
        !matches!(self, DrawMode::Disabled)
    }
}

/// Geste, die eine gezeichnete Linie abschließt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishTrigger {
    /// Doppelklick
    DoubleClick,
    /// Zeiger loslassen
    PointerRelease,
}

/// Parameter für die Linien-Zeichenfunktion des Karten-Adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Abschluss-Geste
    pub finish_on: FinishTrigger,
    /// Kontinuierliches Ziehen statt Einzelpunkte
    pub freehand: bool,
    /// Selbstüberschneidung erlaubt
    pub allow_self_intersection: bool,
    /// Farbe der temporären Linie
    pub line_color: String,
    /// Strichmuster der Hilfslinie zum Cursor
    pub hint_dash_pattern: [u32; 2],
}

impl DrawConfig {
    /// Konfiguration für einen Modus; `None` bei `Disabled`.
    pub fn for_mode(mode: DrawMode, options: &EditorOptions) -> Option<Self> {
        match mode {
            DrawMode::Disabled => None,
            DrawMode::Point => Some(Self {
                finish_on: FinishTrigger::DoubleClick,
                freehand: false,
                allow_self_intersection: false,
                line_color: options.point_line_color.clone(),
                hint_dash_pattern: options.hint_dash_pattern,
            }),
            DrawMode::Freehand => Some(Self {
                finish_on: FinishTrigger::PointerRelease,
                freehand: true,
                allow_self_intersection: false,
                line_color: options.freehand_line_color.clone(),
                hint_dash_pattern: options.hint_dash_pattern,
            }),
        }
    }
}

/// Adapter-seitiges Handle einer Trassen-Polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerHandle(pub u64);
