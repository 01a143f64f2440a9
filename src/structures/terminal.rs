use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

use super::store_object::{expect_store, StoreContents, StoreLevels};

pub const DEFAULT_SIZE: f64 = 60.0;

/// Draws a terminal, its layers drawn as nested squares scaled by fill.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalSvg {
    size: f64,
    border_colour: &'static str,
    levels: StoreLevels,
    contents: StoreContents,
}

impl TerminalSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let terminal = expect_store(snapshot, ObjectKind::TERMINAL)?;

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            border_colour: ownership(terminal.owner.as_deref(), options.player()),
            levels: StoreLevels::new(&terminal.store, terminal.store_capacity),
            contents: StoreContents::new(&terminal.store, options.show_amounts),
        })
    }

    pub fn levels(&self) -> StoreLevels {
        self.levels
    }

    /// The terminal's contents as a list of resource icons.
    pub fn contents(&self) -> &StoreContents {
        &self.contents
    }
}

impl RenderSvg for TerminalSvg {
    fn render(&self) -> String {
        trace!("rendering terminal at {:.2} full", self.levels.total);

        format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 175 175">"##,
                r##"<g transform="translate(87.5,87.5)">"##,
                r##"<path d="M 85 0 L 55 -55 L 0 -85 L -55 -55 L -85 0 L -55 55 L 0 85 L 55 55 Z" fill="#181818" stroke="{border}" stroke-width="5" />"##,
                r##"<path d="M 67 0 L 48 -35 V 35 L 67 0 Z M 0 -67 L -35 -48 H 35 Z M -67 0 L -48 -35 V 35 Z M 0 67 L -35 48 H 35 Z" fill="#AAA" />"##,
                r##"<rect fill="#181818" height="90" width="90" x="-45" y="-45" />"##,
                r##"<rect fill="#555555" height="76" width="76" x="-38" y="-38" />"##,
                r##"<!-- minerals -->"##,
                r##"<rect fill="#FFF" height="76" width="76" x="-38" y="-38" transform="scale({other} {other})" />"##,
                r##"<!-- power -->"##,
                r##"<rect fill="#F41F33" height="76" width="76" x="-38" y="-38" transform="scale({power} {power})" />"##,
                r##"<!-- energy -->"##,
                r##"<rect fill="#FFE56D" height="76" width="76" x="-38" y="-38" transform="scale({energy} {energy})" />"##,
                r##"</g></svg>"##,
            ),
            size = Num(self.size),
            border = self.border_colour,
            other = Num(self.levels.total),
            power = Num(self.levels.power),
            energy = Num(self.levels.energy),
        )
    }
}
