use serde::{Deserialize, Serialize};

/// Display settings shared by every renderer.
///
/// Every field has a default, so partial configs deserialize fine.
///
/// # Example
/// ```rust
/// use screeps_svg::common::RenderOptions;
///
/// let options = RenderOptions::default().with_player("Spedwards").with_size(80.0);
/// assert_eq!(options.size_or(60.0), 80.0);
/// assert_eq!(options.tower_angle, 315.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Username of the viewing player, used to pick ownership colours.
    pub player: Option<String>,
    /// Display size overriding each renderer's default.
    pub size: Option<f64>,
    /// Direction the tower barrel points, in degrees.
    pub tower_angle: f64,
    pub tower_animated: bool,
    /// Colour lab minerals by family instead of plain white.
    pub lab_coloured: bool,
    /// Show amounts next to resource icons in content listings.
    pub show_amounts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            player: None,
            size: None,
            tower_angle: 315.0,
            tower_animated: false,
            lab_coloured: true,
            show_amounts: true,
        }
    }
}

impl RenderOptions {
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// The configured size, or the renderer's default when unset or not a positive number.
    pub fn size_or(&self, default: f64) -> f64 {
        match self.size {
            Some(size) if size.is_finite() && size > 0.0 => size,
            _ => default,
        }
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let options: RenderOptions = serde_json::from_str(r#"{"player":"Helam","towerAnimated":true}"#).unwrap();
        assert_eq!(options.player(), Some("Helam"));
        assert!(options.tower_animated);
        assert_eq!(options.tower_angle, 315.0);
        assert!(options.lab_coloured);
        assert_eq!(options.size, None);
    }

    #[test]
    fn invalid_size_falls_back_to_default() {
        assert_eq!(RenderOptions::default().with_size(-5.0).size_or(50.0), 50.0);
        assert_eq!(RenderOptions::default().with_size(f64::NAN).size_or(50.0), 50.0);
        assert_eq!(RenderOptions::default().size_or(40.0), 40.0);
    }
}
