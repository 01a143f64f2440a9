use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

use super::store_object::{expect_store, StoreContents, StoreLevels};

pub const DEFAULT_SIZE: f64 = 60.0;

const TANK_HEIGHT: f64 = 120.0;
/// Bottom edge of the tank.
const TANK_BOTTOM: f64 = 60.0;

/// Draws a storage with stacked energy, power and mineral levels.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageSvg {
    size: f64,
    border_colour: &'static str,
    levels: StoreLevels,
    contents: StoreContents,
}

impl StorageSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let storage = expect_store(snapshot, ObjectKind::STORAGE)?;

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            border_colour: ownership(storage.owner.as_deref(), options.player()),
            levels: StoreLevels::new(&storage.store, storage.store_capacity),
            contents: StoreContents::new(&storage.store, options.show_amounts),
        })
    }

    pub fn levels(&self) -> StoreLevels {
        self.levels
    }

    /// The storage's contents as a list of resource icons.
    pub fn contents(&self) -> &StoreContents {
        &self.contents
    }
}

impl RenderSvg for StorageSvg {
    fn render(&self) -> String {
        trace!("rendering storage at {:.2} full", self.levels.total);

        let energy_height = self.levels.energy * TANK_HEIGHT;
        let power_height = self.levels.power * TANK_HEIGHT;
        let other_height = self.levels.total * TANK_HEIGHT;

        format!(
            concat!(
                r##"<svg height="{size}" width="{width}" viewBox="0 0 40 180">"##,
                r##"<g transform="translate(20,90)">"##,
                r##"<path d="M -60 -70 A 120 120 0 0 1 60 -70 A 300 300 0 0 1 60 70 A 120 120 0 0 1 -60 70 A 300 300 0 0 1 -60 -70 Z" fill="#181818" stroke="{border}" stroke-width="5" />"##,
                r##"<rect fill="#555" height="120" width="100" x="-50" y="-60" />"##,
                r##"<!-- minerals -->"##,
                r##"<rect x="-50" y="{other_y}" width="100" height="{other_height}" fill="#FFFFFF" />"##,
                r##"<!-- power -->"##,
                r##"<rect x="-50" y="{power_y}" width="100" height="{power_height}" fill="#F41F33" />"##,
                r##"<!-- energy -->"##,
                r##"<rect x="-50" y="{energy_y}" width="100" height="{energy_height}" fill="#FFE56D" />"##,
                r##"</g>"##,
                r##"</svg>"##,
            ),
            size = Num(self.size),
            width = Num(self.size * (5.0 / 6.0)),
            border = self.border_colour,
            other_y = Num(TANK_BOTTOM - other_height),
            other_height = Num(other_height),
            power_y = Num(TANK_BOTTOM - power_height),
            power_height = Num(power_height),
            energy_y = Num(TANK_BOTTOM - energy_height),
            energy_height = Num(energy_height),
        )
    }
}
