use log::trace;

use crate::common::geometry::{fill_ratio, sweep_end, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{missing_field, ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

const ENERGY_RADIUS: f64 = 38.0;
const PROGRESS_RADIUS: f64 = 50.0;

/// Draws a spawn: an energy core, plus a progress ring and pulse while spawning.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSvg {
    size: f64,
    energy_ratio: f64,
    /// Remaining share of the current spawn, if spawning.
    remaining: Option<f64>,
}

impl SpawnSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Spawn(spawn) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::SPAWN));
        };

        let remaining = match spawn.spawning {
            Some(spawning) if spawning.need_time == 0 => {
                return Err(missing_field(ObjectKind::SPAWN, "needTime"));
            }
            // nudged so a freshly finished spawn still shows a sliver of ring
            Some(spawning) => Some(
                ((spawning.remaining_time as f64 + 0.01) / spawning.need_time as f64).clamp(0.0, 1.0),
            ),
            None => None,
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            energy_ratio: fill_ratio(spawn.energy, spawn.energy_capacity),
            remaining,
        })
    }

    pub fn energy_radius(&self) -> f64 {
        ENERGY_RADIUS * self.energy_ratio
    }
}

impl RenderSvg for SpawnSvg {
    fn render(&self) -> String {
        trace!("rendering spawn, spawning: {}", self.remaining.is_some());

        let mut out = format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 180 180">"##,
                r##"<g transform="translate(90,90)">"##,
                r##"<g>"##,
                r##"<ellipse rx="70" ry="70" cx="0" cy="0" fill="#CCCCCC" />"##,
                r##"<ellipse rx="59" ry="59" cx="0" cy="0" fill="#181818" />"##,
                r##"<ellipse rx="37" ry="37" cx="0" cy="0" fill="#555555" />"##,
            ),
            size = Num(self.size),
        );

        if self.remaining == Some(1.0) {
            // an arc ending where it starts draws nothing, so a full ring takes two halves
            out += r##"<path fill="transparent" d="M 50 0 A 50 50 0 0 1 -50 0 A 50 50 0 0 1 50 0" stroke-width="15" stroke="#AAAAAA" transform="rotate(-90)" />"##;
        } else if let Some(remaining) = self.remaining {
            let large_arc_flag = if remaining > 0.5 { 0 } else { 1 };
            let (end_x, end_y) = sweep_end(PROGRESS_RADIUS, -remaining);
            out += &format!(
                r##"<path fill="transparent" d="M 50 0 A 50 50 0 {} 1 {} {}" stroke-width="15" stroke="#AAAAAA" transform="rotate(-90)" />"##,
                large_arc_flag,
                Num(end_x),
                Num(end_y),
            );
        }

        if self.energy_ratio > 0.0 {
            let radius = Num(self.energy_radius());
            out += &format!(r##"<ellipse rx="{radius}" ry="{radius}" cx="0" cy="0" fill="#FFE56D" />"##);
        }

        if self.remaining.is_some() {
            out += r##"<animateTransform attributeName="transform" attributeType="XML" dur="2s" keyTimes="0;0.25;1" repeatCount="indefinite" type="scale" values="1 1;1.24 1.24;1 1" calcMode="linear" />"##;
        }

        out += "</g></g></svg>";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::{SpawnSnapshot, Spawning};

    fn spawn(energy: u32, spawning: Option<Spawning>) -> ObjectSnapshot {
        ObjectSnapshot::Spawn(SpawnSnapshot {
            owner: Some("Spedwards".to_string()),
            energy,
            energy_capacity: 300,
            spawning,
        })
    }

    #[test]
    fn idle_empty_spawn_has_no_ring_or_core() {
        let markup = SpawnSvg::new(&spawn(0, None), &RenderOptions::default()).unwrap().render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("<path"));
        assert!(!markup.contains("#FFE56D"));
        assert!(!markup.contains("animateTransform"));
    }

    #[test]
    fn spawning_adds_ring_and_pulse() {
        let spawning = Spawning {
            need_time: 30,
            remaining_time: 10,
        };
        let markup = SpawnSvg::new(&spawn(300, Some(spawning)), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        // a third remaining is less than half, so the long way round
        assert!(markup.contains(r#"d="M 50 0 A 50 50 0 1 1 "#));
        assert!(markup.contains(r#"<ellipse rx="38" ry="38""#));
        assert!(markup.contains("animateTransform"));
    }

    #[test]
    fn just_started_spawn_draws_full_ring() {
        let spawning = Spawning {
            need_time: 10,
            remaining_time: 10,
        };
        let markup = SpawnSvg::new(&spawn(0, Some(spawning)), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r#"d="M 50 0 A 50 50 0 0 1 -50 0 A 50 50 0 0 1 50 0""#));
    }

    #[test]
    fn remaining_past_need_time_is_clamped() {
        let spawning = Spawning {
            need_time: 10,
            remaining_time: 30,
        };
        let svg = SpawnSvg::new(&spawn(0, Some(spawning)), &RenderOptions::default()).unwrap();
        assert_eq!(svg.remaining, Some(1.0));
        let markup = svg.render();
        assert_single_svg_root(&markup);
        assert_eq!(markup.matches("<path").count(), 1);
        assert!(markup.contains(r#"A 50 50 0 0 1 -50 0 A 50 50 0 0 1 50 0"#));
    }

    #[test]
    fn zero_need_time_is_rejected() {
        let spawning = Spawning {
            need_time: 0,
            remaining_time: 0,
        };
        let err = SpawnSvg::new(&spawn(0, Some(spawning)), &RenderOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SvgError::MissingField {
                kind: ObjectKind::SPAWN,
                field: "needTime",
            }
        );
    }

    #[test]
    fn overfull_energy_is_clamped() {
        let svg = SpawnSvg::new(&spawn(1000, None), &RenderOptions::default()).unwrap();
        assert_eq!(svg.energy_radius(), ENERGY_RADIUS);
    }
}
