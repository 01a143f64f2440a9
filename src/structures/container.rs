use log::trace;

use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

use super::store_object::{expect_store, StoreContents, StoreLevels};

pub const DEFAULT_SIZE: f64 = 35.0;

const TANK_HEIGHT: f64 = 50.0;
const TANK_BOTTOM: f64 = 25.0;

/// Draws a container with stacked energy, power and mineral levels.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerSvg {
    size: f64,
    levels: StoreLevels,
    contents: StoreContents,
}

impl ContainerSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let container = expect_store(snapshot, ObjectKind::CONTAINER)?;

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            levels: StoreLevels::new(&container.store, container.store_capacity),
            contents: StoreContents::new(&container.store, options.show_amounts),
        })
    }

    pub fn levels(&self) -> StoreLevels {
        self.levels
    }

    pub fn contents(&self) -> &StoreContents {
        &self.contents
    }
}

impl RenderSvg for ContainerSvg {
    fn render(&self) -> String {
        trace!("rendering container at {:.2} full", self.levels.total);

        let energy_height = self.levels.energy * TANK_HEIGHT;
        let power_height = self.levels.power * TANK_HEIGHT;
        let other_height = self.levels.total * TANK_HEIGHT;

        format!(
            concat!(
                r##"<svg height="{size}" width="{width}" viewBox="0 0 50 80">"##,
                r##"<g transform="translate(25,40)" opacity="1">"##,
                r##"<rect fill="#555555" height="60" stroke-width="10" stroke="#181818" width="50" x="-25" y="-30" />"##,
                r##"<!-- minerals -->"##,
                r##"<rect fill="#FFFFFF" height="{other_height}" y="{other_y}" width="40" x="-20" />"##,
                r##"<!-- power -->"##,
                r##"<rect fill="#F41F33" height="{power_height}" y="{power_y}" width="40" x="-20" />"##,
                r##"<!-- energy -->"##,
                r##"<rect fill="#FFE56D" height="{energy_height}" y="{energy_y}" width="40" x="-20" />"##,
                r##"</g></svg>"##,
            ),
            size = Num(self.size),
            width = Num(self.size * (5.0 / 6.0)),
            other_height = Num(other_height),
            other_y = Num(TANK_BOTTOM - other_height),
            power_height = Num(power_height),
            power_y = Num(TANK_BOTTOM - power_height),
            energy_height = Num(energy_height),
            energy_y = Num(TANK_BOTTOM - energy_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::{Store, StoreSnapshot};

    fn container(energy: u32) -> ObjectSnapshot {
        ObjectSnapshot::Container(StoreSnapshot {
            owner: None,
            store: [("energy", energy)].into_iter().collect::<Store>(),
            store_capacity: 2000,
        })
    }

    #[test]
    fn full_container() {
        let markup = ContainerSvg::new(&container(2000), &RenderOptions::default())
            .unwrap()
            .render();
        assert_single_svg_root(&markup);
        assert!(markup.contains(r##"<rect fill="#FFE56D" height="50" y="-25""##));
    }

    #[test]
    fn levels_are_monotonic_in_energy() {
        let options = RenderOptions::default();
        let levels: Vec<f64> = [0, 500, 1000, 2000, 4000]
            .into_iter()
            .map(|e| ContainerSvg::new(&container(e), &options).unwrap().levels().energy)
            .collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(levels[4], 1.0);
    }
}
