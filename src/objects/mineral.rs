use log::trace;

use crate::common::colours::{base_mineral, Pair};
use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{missing_field, ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

/// Draws a mineral deposit: a disc in the mineral's colours with its symbol.
///
/// # Example
/// ```rust
/// use screeps_svg::common::RenderSvg;
/// use screeps_svg::objects::MineralSvg;
///
/// let svg = MineralSvg::from_type("Z", 50.0).unwrap();
/// assert!(svg.render().contains(">Z</text>"));
/// assert!(MineralSvg::from_type("G", 50.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MineralSvg {
    size: f64,
    mineral_type: String,
    colours: Pair,
}

impl MineralSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Mineral(mineral) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::Mineral));
        };

        Self::from_type(&mineral.mineral_type, options.size_or(DEFAULT_SIZE))
            .map_err(|_| missing_field(ObjectKind::Mineral, "mineralType"))
    }

    /// Builds the renderer from a bare base mineral symbol.
    pub fn from_type(mineral_type: &str, size: f64) -> Result<Self, SvgError> {
        let colours = base_mineral(mineral_type)
            .ok_or_else(|| SvgError::UnknownResource(mineral_type.to_string()))?;

        Ok(Self {
            size,
            mineral_type: mineral_type.to_string(),
            colours,
        })
    }

    pub fn mineral_type(&self) -> &str {
        &self.mineral_type
    }
}

impl RenderSvg for MineralSvg {
    fn render(&self) -> String {
        trace!("rendering mineral {}", self.mineral_type);

        format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 150 150">"##,
                r##"<g transform="translate(75,75)">"##,
                r##"<ellipse rx="60" ry="60" cx="0" cy="0" fill="{background}" stroke="{foreground}" stroke-width="10" />"##,
                r##"<text font-size="82" font-weight="bold" text-anchor="middle" style="font-family: Roboto, serif" x="0" y="28" fill="{foreground}">{symbol}</text>"##,
                r##"</g></svg>"##,
            ),
            size = Num(self.size),
            background = self.colours.background,
            foreground = self.colours.foreground,
            symbol = self.mineral_type,
        )
    }
}
