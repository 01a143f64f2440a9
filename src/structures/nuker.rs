use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 60.0;

/// Draws a nuker with its ghodium bar and energy warhead.
#[derive(Debug, Clone, PartialEq)]
pub struct NukerSvg {
    size: f64,
    border_colour: &'static str,
    energy_ratio: f64,
    ghodium_ratio: f64,
}

impl NukerSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Nuker(nuker) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::NUKER));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            border_colour: ownership(nuker.owner.as_deref(), options.player()),
            energy_ratio: fill_ratio(nuker.energy, nuker.energy_capacity),
            ghodium_ratio: fill_ratio(nuker.ghodium, nuker.ghodium_capacity),
        })
    }
}

impl RenderSvg for NukerSvg {
    fn render(&self) -> String {
        trace!(
            "rendering nuker at {:.2} energy, {:.2} ghodium",
            self.energy_ratio,
            self.ghodium_ratio
        );

        let mut out = format!(
            concat!(
                r##"<svg viewBox="0 0 120 180" height="{size}" width="{width}">"##,
                r##"<g transform="translate(60,130)">"##,
                r##"<path d="M -60 50 L -53 0 L 0 -130 L 53 0 L 60 50 Z" fill="#181818" stroke="{border}" stroke-width="5"/>"##,
                r##"<path d="M -40 0 L 0 -100 L 40 0 Z" fill="#555"/>"##,
                r##"<rect fill="#555" height="15" width="80" x="-40" y="18"/>"##,
            ),
            size = Num(self.size),
            width = Num(self.size * (2.0 / 3.0)),
            border = self.border_colour,
        );

        if self.ghodium_ratio > 0.0 {
            out += &format!(
                r##"<rect fill="#FFFFFF" height="15" y="18" width="{}" x="{}"/>"##,
                Num(80.0 * self.ghodium_ratio),
                Num(-40.0 * self.ghodium_ratio),
            );
        }

        if self.energy_ratio > 0.0 {
            let scale = Num(self.energy_ratio);
            out += &format!(
                r##"<path d="M -40 0 L 0 -100 L 40 0 Z" fill="#FFE56D" transform="scale({scale} {scale})"/>"##
            );
        }

        out += "</g></svg>";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::NukerSnapshot;

    fn nuker(energy: u32, ghodium: u32) -> ObjectSnapshot {
        ObjectSnapshot::Nuker(NukerSnapshot {
            owner: Some("Enrico".to_string()),
            energy,
            energy_capacity: 300_000,
            ghodium,
            ghodium_capacity: 5000,
        })
    }

    #[test]
    fn loaded_nuker() {
        let markup = NukerSvg::new(&nuker(300_000, 2500), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r#"width="40" x="-20""#));
        assert!(markup.contains("scale(1 1)"));
    }

    #[test]
    fn empty_nuker_has_no_fills() {
        let markup = NukerSvg::new(&nuker(0, 0), &RenderOptions::default()).unwrap().render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("#FFFFFF"));
        assert!(!markup.contains("#FFE56D"));
    }
}
