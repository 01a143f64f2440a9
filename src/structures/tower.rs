use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 60.0;

const BARREL_X: f64 = -20.0;
const BARREL_Y: f64 = -80.0;
const TANK_X: f64 = -39.0;
const TANK_Y: f64 = -25.0;
const TANK_HEIGHT: f64 = 58.0;
/// Bottom edge of the tank.
const TANK_BOTTOM: f64 = 33.0;

/// Draws a tower with its barrel pointing at the configured angle.
///
/// # Example
/// ```rust
/// use screeps_svg::common::{RenderOptions, RenderSvg};
/// use screeps_svg::snapshot::{ObjectSnapshot, TowerSnapshot};
/// use screeps_svg::structures::TowerSvg;
///
/// let snapshot = ObjectSnapshot::Tower(TowerSnapshot {
///     owner: Some("Spedwards".to_string()),
///     energy: 500,
///     energy_capacity: 1000,
/// });
/// let options = RenderOptions::default().with_player("Spedwards");
/// let markup = TowerSvg::new(&snapshot, &options).unwrap().render();
/// assert!(markup.contains(r#"height="29""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TowerSvg {
    size: f64,
    border_colour: &'static str,
    radians: f64,
    animated: bool,
    energy_ratio: f64,
}

impl TowerSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Tower(tower) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::TOWER));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            border_colour: ownership(tower.owner.as_deref(), options.player()),
            radians: options.tower_angle.to_radians(),
            animated: options.tower_animated,
            energy_ratio: fill_ratio(tower.energy, tower.energy_capacity),
        })
    }

    pub fn energy_height(&self) -> f64 {
        TANK_HEIGHT * self.energy_ratio
    }
}

impl RenderSvg for TowerSvg {
    fn render(&self) -> String {
        trace!("rendering tower at {:.2} energy", self.energy_ratio);

        let mut out = format!(
            concat!(
                r##"<svg class="tower owner" height="{size}" width="{size}" viewBox="0 0 200 200">"##,
                r##"<g transform="translate(100,100)" opacity="1">"##,
                r##"<ellipse cx="0" cy="0" fill="#222" rx="65" ry="65" stroke="{border}" stroke-width="5" />"##,
                r##"<g class="rotatable" transform="rotate({radians}rad)" style="transition: transform 2s;">"##,
                r##"<rect fill="#aaa" height="50" stroke-width="7" stroke="#181818" width="40" x="{barrel_x}" y="{barrel_y}" />"##,
                r##"<rect fill="#555" height="58" rx="12" ry="10" width="78" x="{tank_x}" y="{tank_y}" />"##,
            ),
            size = Num(self.size),
            border = self.border_colour,
            radians = Num(self.radians),
            barrel_x = Num(BARREL_X),
            barrel_y = Num(BARREL_Y),
            tank_x = Num(TANK_X),
            tank_y = Num(TANK_Y),
        );

        if self.animated {
            out += r##"<animateTransform attributeName="transform" attributeType="XML" dur="5s" keyTimes="0;0.4;0.75;1" repeatCount="indefinite" type="rotate" values="315;90;200;315" calcMode="linear" />"##;
        }

        if self.energy_ratio > 0.0 {
            let height = self.energy_height();
            out += &format!(
                r##"<rect fill="#ffe56d" height="{}" y="{}" rx="12" ry="12" width="78" x="{}" />"##,
                Num(height),
                Num(TANK_BOTTOM - height),
                Num(TANK_X),
            );
        }

        out += "</g></g></svg>";
        out
    }
}
