//! Zentrale Konfiguration für den Bezier-Pfad-Editor.
//!
//! `PathOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Picking ─────────────────────────────────────────────────────────

/// Anker-Durchmesser in Welteinheiten (Pick-Radius = halber Durchmesser).
pub const ANCHOR_DIAMETER: f32 = 0.1;
/// Maximaler Abstand Cursor ↔ Segment, ab dem ein Segment als „gehovert“ gilt.
pub const SEGMENT_PICK_THRESHOLD: f32 = 0.01;

// ── Resampling ──────────────────────────────────────────────────────

/// Standard-Abstand gleichmäßig verteilter Punkte.
pub const DEFAULT_SPACING: f32 = 0.1;
/// Standard-Auflösung (Unterteilungsdichte) beim Resampling.
pub const DEFAULT_RESOLUTION: f32 = 1.0;

// ── Straßen-Mesh ────────────────────────────────────────────────────

/// Standard-Straßenbreite in Welteinheiten.
pub const ROAD_WIDTH: f32 = 1.0;
/// Textur-Kachelung entlang der Straße.
pub const ROAD_TILING: f32 = 5.0;

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

/// Alle zur Laufzeit änderbaren Pfad-Optionen.
/// Wird als `bezier_path_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathOptions {
    // ── Picking ─────────────────────────────────────────────────
    /// Anker-Durchmesser in Welteinheiten
    pub anchor_diameter: f32,
    /// Hover-Schwelle für Segmente in Welteinheiten
    pub segment_pick_threshold: f32,
    /// Kontrollpunkte im Host anzeigen (und damit verschiebbar machen)
    #[serde(default)]
    pub show_control_points: bool,

    // ── Resampling ──────────────────────────────────────────────
    /// Zielabstand gleichmäßig verteilter Punkte
    pub spacing: f32,
    /// Unterteilungsdichte (höher = genauer, teurer)
    #[serde(default = "default_resolution")]
    pub resolution: f32,

    // ── Straßen-Mesh ────────────────────────────────────────────
    /// Straßenbreite in Welteinheiten
    pub road_width: f32,
    /// Textur-Kachelung
    pub road_tiling: f32,
    /// Mesh bei jeder Änderung neu erzeugen
    #[serde(default)]
    pub auto_update_road: bool,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            anchor_diameter: ANCHOR_DIAMETER,
            segment_pick_threshold: SEGMENT_PICK_THRESHOLD,
            show_control_points: false,

            spacing: DEFAULT_SPACING,
            resolution: DEFAULT_RESOLUTION,

            road_width: ROAD_WIDTH,
            road_tiling: ROAD_TILING,
            auto_update_road: false,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `resolution` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_resolution() -> f32 {
    DEFAULT_RESOLUTION
}

/// Serde-Default für `history_depth`.
fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl PathOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_path_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_path_editor.toml")
    }

    /// Pick-Radius für Anker in Welteinheiten.
    pub fn anchor_pick_radius(&self) -> f32 {
        self.anchor_diameter * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip() {
        let opts = PathOptions {
            spacing: 0.25,
            road_width: 2.5,
            ..PathOptions::default()
        };
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: PathOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
            anchor_diameter = 0.2
            segment_pick_threshold = 0.05
            spacing = 0.5
            road_width = 1.0
            road_tiling = 5.0
        "#;
        let opts: PathOptions = toml::from_str(text).expect("Deserialisierung");
        assert_eq!(opts.resolution, DEFAULT_RESOLUTION);
        assert_eq!(opts.history_depth, HISTORY_DEPTH);
        assert!(!opts.show_control_points);
        assert!((opts.anchor_pick_radius() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("bezier_path_editor_does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(PathOptions::load_from_file(&path), PathOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "bezier_path_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = PathOptions {
            spacing: 0.3,
            history_depth: 5,
            ..PathOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern");
        let loaded = PathOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }
}
