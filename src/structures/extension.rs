use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

const SIZE: f64 = 50.0;

/// Draws an extension, sized by the room's controller level like the game does.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionSvg {
    border_colour: &'static str,
    radius: f64,
    energy_ratio: f64,
}

/// Extension radius at a given controller level.
pub fn extension_radius(room_level: u8) -> f64 {
    match room_level {
        8 => 50.0,
        7 => 40.0,
        _ => 34.0,
    }
}

impl ExtensionSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Extension(extension) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::EXTENSION));
        };

        Ok(Self {
            border_colour: ownership(extension.owner.as_deref(), options.player()),
            radius: extension_radius(extension.room_level),
            energy_ratio: fill_ratio(extension.energy, extension.energy_capacity),
        })
    }
}

impl RenderSvg for ExtensionSvg {
    fn render(&self) -> String {
        trace!("rendering extension at {:.2} energy", self.energy_ratio);

        let radius = Num(self.radius);
        let mut out = format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 100 100">"##,
                r##"<g transform="translate(50,50)">"##,
                r##"<g>"##,
                r##"<ellipse rx="{radius}" ry="{radius}" cx="0" cy="0" fill="#181818" stroke="{border}" stroke-width="5" />"##,
            ),
            size = Num(SIZE),
            radius = radius,
            border = self.border_colour,
        );

        if self.energy_ratio > 0.0 {
            let energy_radius = Num(0.7 * self.radius * self.energy_ratio);
            out += &format!(
                r##"<ellipse cx="0" cy="0" fill="#FFE56D" rx="{energy_radius}" ry="{energy_radius}" />"##
            );
        }

        out += "</g></g></svg>";
        out
    }
}
