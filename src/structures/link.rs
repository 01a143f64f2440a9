use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

/// Scale of the inner diamond, which the energy fill grows towards.
const INNER_SCALE: f64 = 0.6;

/// Draws a link as a diamond filled with energy.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSvg {
    size: f64,
    border_colour: &'static str,
    energy_ratio: f64,
}

impl LinkSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Link(link) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::LINK));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            border_colour: ownership(link.owner.as_deref(), options.player()),
            energy_ratio: fill_ratio(link.energy, link.energy_capacity),
        })
    }

    pub fn energy_scale(&self) -> f64 {
        INNER_SCALE * self.energy_ratio
    }
}

impl RenderSvg for LinkSvg {
    fn render(&self) -> String {
        trace!("rendering link at {:.2} energy", self.energy_ratio);

        let mut out = format!(
            concat!(
                r##"<svg class="link owner" height="{size}" width="{width}" viewBox="0 0 50 100">"##,
                r##"<g opacity="1" transform="translate(25,50)"><g>"##,
                r##"<path d="M 0 -50 L 40 0 L 0 50 L -40 0 Z" fill="#181818" stroke="{border}" stroke-width="5" />"##,
                r##"<path d="M 0 -50 L 40 0 L 0 50 L -40 0 Z" fill="#555" transform="scale(0.6 0.6)" />"##,
            ),
            size = Num(self.size),
            width = Num(self.size * 0.8),
            border = self.border_colour,
        );

        if self.energy_ratio > 0.0 {
            let scale = Num(self.energy_scale());
            out += &format!(
                r##"<path d="M 0 -50 L 40 0 L 0 50 L -40 0 Z" fill="#ffe56d" transform="scale({scale} {scale})"></path>"##
            );
        }

        out += "</g></g></svg>";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::LinkSnapshot;

    fn link(energy: u32) -> ObjectSnapshot {
        ObjectSnapshot::Link(LinkSnapshot {
            owner: None,
            energy,
            energy_capacity: 800,
        })
    }

    #[test]
    fn full_link_matches_inner_diamond() {
        let svg = LinkSvg::new(&link(800), &RenderOptions::default()).unwrap();
        assert_eq!(svg.energy_scale(), INNER_SCALE);
        let markup = svg.render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r##"fill="#ffe56d" transform="scale(0.6 0.6)""##));
        assert!(markup.starts_with(r#"<svg class="link owner" height="50" width="40""#));
    }

    #[test]
    fn empty_link_has_no_fill() {
        let markup = LinkSvg::new(&link(0), &RenderOptions::default()).unwrap().render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("#ffe56d"));
    }
}
