use log::trace;

use crate::common::colours::{lab_mineral, ownership};
use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

const SIZE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
struct LabMineral {
    colour: &'static str,
    ratio: f64,
}

/// Draws a lab with its mineral blob and energy bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LabSvg {
    border_colour: &'static str,
    mineral: Option<LabMineral>,
    energy_ratio: f64,
}

impl LabSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Lab(lab) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::LAB));
        };

        let mineral = lab
            .mineral_type
            .as_deref()
            .filter(|mineral_type| !mineral_type.is_empty())
            .map(|mineral_type| LabMineral {
                colour: lab_mineral(mineral_type, options.lab_coloured),
                ratio: fill_ratio(lab.mineral_amount, lab.mineral_capacity),
            });

        Ok(Self {
            border_colour: ownership(lab.owner.as_deref(), options.player()),
            mineral,
            energy_ratio: fill_ratio(lab.energy, lab.energy_capacity),
        })
    }
}

impl RenderSvg for LabSvg {
    fn render(&self) -> String {
        trace!("rendering lab at {:.2} energy", self.energy_ratio);

        let mut out = format!(
            concat!(
                r##"<svg viewBox="0 0 120 120" height="{size}" width="{size}">"##,
                r##"<g transform="translate(60,55)">"##,
                r##"<path d="M 50 40 A 60 60 0 1 0 -50 40 V 63 H 50 Z" fill="#181818" stroke="{border}" stroke-width="5"/>"##,
                r##"<path d="M 36 33 A 46 43 0 1 0 -36 33 Z" fill="#555"/>"##,
            ),
            size = Num(SIZE),
            border = self.border_colour,
        );

        if let Some(mineral) = &self.mineral {
            let scale = Num(mineral.ratio);
            // scaled towards the bottom of the flask
            let shift = Num(33.0 * (1.0 - mineral.ratio));
            out += &format!(
                r##"<path d="M 36 33 A 46 43 0 1 0 -36 33 Z" fill="{}" transform="matrix({scale},0,0,{scale},0,{shift})"/>"##,
                mineral.colour,
            );
        }

        if self.energy_ratio > 0.0 {
            out += &format!(
                r##"<rect fill="#ffe56d" height="10" y="43" width="{}" x="{}"/>"##,
                Num(72.0 * self.energy_ratio),
                Num(-36.0 * self.energy_ratio),
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
    use crate::snapshot::LabSnapshot;

    fn lab(mineral_type: Option<&str>, mineral_amount: u32, energy: u32) -> ObjectSnapshot {
        ObjectSnapshot::Lab(LabSnapshot {
            owner: Some("Enrico".to_string()),
            energy,
            energy_capacity: 2000,
            mineral_type: mineral_type.map(str::to_string),
            mineral_amount,
            mineral_capacity: 3000,
        })
    }

    #[test]
    fn empty_lab_draws_only_the_flask() {
        let markup = LabSvg::new(&lab(None, 0, 0), &RenderOptions::default()).unwrap().render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("matrix"));
        assert!(!markup.contains("#ffe56d"));
    }

    #[test]
    fn full_lab_fills_the_flask() {
        let markup = LabSvg::new(&lab(Some("UH"), 3000, 2000), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r##"fill="#48C5E5" transform="matrix(1,0,0,1,0,0)""##));
        assert!(markup.contains(r#"width="72" x="-36""#));
    }

    #[test]
    fn uncoloured_labs_draw_white_minerals() {
        let options = RenderOptions {
            lab_coloured: false,
            ..RenderOptions::default()
        };
        let markup = LabSvg::new(&lab(Some("UH"), 1500, 0), &options).unwrap().render();
        assert!(markup.contains(r##"fill="#FFFFFF" transform="matrix(0.5,0,0,0.5,0,16.5)""##));
    }
}
