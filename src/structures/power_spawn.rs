use log::trace;

use crate::common::geometry::{fill_ratio, sweep_end, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

const SIZE: f64 = 50.0;
const ENERGY_RADIUS: f64 = 38.0;
const POWER_RADIUS: f64 = 50.0;

/// Draws a power spawn: a power ring around an energy core.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpawnSvg {
    energy_ratio: f64,
    power_ratio: f64,
}

impl PowerSpawnSvg {
    pub fn new(snapshot: &ObjectSnapshot, _options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::PowerSpawn(power_spawn) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::POWER_SPAWN));
        };

        Ok(Self {
            energy_ratio: fill_ratio(power_spawn.energy, power_spawn.energy_capacity),
            power_ratio: fill_ratio(power_spawn.power, power_spawn.power_capacity),
        })
    }
}

impl RenderSvg for PowerSpawnSvg {
    fn render(&self) -> String {
        trace!(
            "rendering power spawn at {:.2} energy, {:.2} power",
            self.energy_ratio,
            self.power_ratio
        );

        let mut out = format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 160 160">"##,
                r##"<g transform="translate(80,80)">"##,
                r##"<ellipse rx="75" ry="75" cx="0" cy="0" fill="#222222" stroke="#CCCCCC" stroke-width="7" />"##,
                r##"<ellipse rx="68" ry="68" cx="0" cy="0" fill="#222222" stroke="#F41F33" stroke-width="10" />"##,
                r##"<ellipse rx="59" ry="59" cx="0" cy="0" fill="#181818" />"##,
                r##"<ellipse rx="37" ry="37" cx="0" cy="0" fill="#555555" />"##,
            ),
            size = Num(SIZE),
        );

        if self.power_ratio > 0.0 {
            let large_arc_flag = if self.power_ratio < 0.5 { 0 } else { 1 };
            let (end_x, end_y) = sweep_end(POWER_RADIUS, self.power_ratio);
            out += &format!(
                r##"<path fill="transparent" d="M 50 0 A 50 50 0 {} 1 {} {}" stroke-width="15" stroke="#F41F33" transform="rotate(-90)" />"##,
                large_arc_flag,
                Num(end_x),
                Num(end_y),
            );
        }

        if self.energy_ratio > 0.0 {
            let radius = Num(ENERGY_RADIUS * self.energy_ratio);
            out += &format!(r##"<ellipse rx="{radius}" ry="{radius}" cx="0" cy="0" fill="#FFE56D" />"##);
        }

        out += "</g></svg>";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::PowerSpawnSnapshot;

    fn power_spawn(energy: u32, power: u32) -> ObjectSnapshot {
        ObjectSnapshot::PowerSpawn(PowerSpawnSnapshot {
            owner: None,
            energy,
            energy_capacity: 5000,
            power,
            power_capacity: 100,
        })
    }

    #[test]
    fn empty_power_spawn() {
        let markup = PowerSpawnSvg::new(&power_spawn(0, 0), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("<path"));
        assert!(!markup.contains("#FFE56D"));
    }

    #[test]
    fn power_arc_flag_flips_at_half() {
        let options = RenderOptions::default();
        let quarter = PowerSpawnSvg::new(&power_spawn(0, 25), &options).unwrap().render();
        assert!(quarter.contains("A 50 50 0 0 1 "));
        let most = PowerSpawnSvg::new(&power_spawn(0, 75), &options).unwrap().render();
        assert!(most.contains("A 50 50 0 1 1 "));
    }

    #[test]
    fn energy_core_scales() {
        let markup = PowerSpawnSvg::new(&power_spawn(2500, 0), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r#"<ellipse rx="19" ry="19""#));
    }
}
