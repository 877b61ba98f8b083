//! Selection overlay options.
//!
//! Options deserialize from the classic plugin block:
//!
//! ```json
//! { "draggableSelection": {
//!     "color": { "r": 0.8, "g": 0.8, "b": 0.8, "a": 1.0 },
//!     "selector": { "width": 10, "linesHeight": 20 },
//!     "minimumSelection": 40 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::render::Color;
use crate::selection::DEFAULT_MINIMUM_SELECTION;

/// Edge handle options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    /// Handle width in pixels.
    pub width: f32,
    /// Height of the decorative tick marks in pixels.
    pub lines_height: f32,
    /// Tick mark color.
    pub lines_color: Color,
    /// Handle color. Falls back to the selection color.
    pub color: Option<Color>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            width: 10.0,
            lines_height: 20.0,
            lines_color: Color::from_rgb_hex(0xB3B3B3),
            color: None,
        }
    }
}

/// Options for the draggable selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionConfig {
    /// Selection tint.
    pub color: Color,
    /// Edge handle options.
    pub selector: SelectorConfig,
    /// Minimum width and height, in pixels, for a sane selection.
    pub minimum_selection: f32,
}

impl SelectionConfig {
    /// Effective handle color.
    pub fn handle_color(&self) -> Color {
        self.selector.color.unwrap_or(self.color)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            color: Color::from_rgb_hex(0xCCCCCC),
            selector: SelectorConfig::default(),
            minimum_selection: DEFAULT_MINIMUM_SELECTION,
        }
    }
}

/// Chart-level options relevant to the selection overlay.
///
/// Without a `draggableSelection` block, pointer input is never bound.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginOptions {
    /// Selection options, if the feature is enabled.
    pub draggable_selection: Option<SelectionConfig>,
}

impl PluginOptions {
    /// Options with the selection feature enabled.
    pub fn enabled(config: SelectionConfig) -> Self {
        Self {
            draggable_selection: Some(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_block_deserializes() {
        let options: PluginOptions = serde_json::from_str(
            r#"{"draggableSelection": {
                "selector": {"width": 12, "linesHeight": 16},
                "minimumSelection": 25
            }}"#,
        )
        .unwrap();
        let config = options.draggable_selection.unwrap();
        assert_eq!(config.selector.width, 12.0);
        assert_eq!(config.selector.lines_height, 16.0);
        assert_eq!(config.selector.lines_color, Color::from_rgb_hex(0xB3B3B3));
        assert_eq!(config.minimum_selection, 25.0);
        assert_eq!(config.handle_color(), config.color);
    }

    #[test]
    fn missing_block_disables_feature() {
        let options: PluginOptions = serde_json::from_str("{}").unwrap();
        assert!(options.draggable_selection.is_none());
        let options: PluginOptions =
            serde_json::from_str(r#"{"draggableSelection": null}"#).unwrap();
        assert!(options.draggable_selection.is_none());
    }

    #[test]
    fn handle_color_override() {
        let mut config = SelectionConfig::default();
        let handle = Color::from_rgb_hex(0x3A7BD5);
        config.selector.color = Some(handle);
        assert_eq!(config.handle_color(), handle);
    }
}
