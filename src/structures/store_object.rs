use crate::common::geometry::fill_ratio;
use crate::common::{RenderSvg, SvgError};
use crate::objects::ResourceSvg;
use crate::snapshot::store::{ENERGY, POWER};
use crate::snapshot::{ObjectKind, ObjectSnapshot, Store, StoreSnapshot};

/// Pulls the store snapshot out of a storage, terminal or container snapshot.
///
/// Returns an error unless the snapshot is of the `expected` kind.
pub(crate) fn expect_store(snapshot: &ObjectSnapshot, expected: ObjectKind) -> Result<&StoreSnapshot, SvgError> {
    match snapshot {
        ObjectSnapshot::Storage(store) | ObjectSnapshot::Terminal(store) | ObjectSnapshot::Container(store)
            if snapshot.kind() == expected =>
        {
            Ok(store)
        }
        _ => Err(snapshot.wrong_kind(expected)),
    }
}

/// Fill ratios of the three stacked layers drawn for a store.
///
/// Layers are cumulative: `energy <= power <= total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreLevels {
    /// Energy alone.
    pub energy: f64,
    /// Energy and power together.
    pub power: f64,
    /// Everything held.
    pub total: f64,
}

impl StoreLevels {
    pub fn new(store: &Store, capacity: u32) -> Self {
        let energy = store.get(ENERGY);
        let power = store.get(POWER);

        Self {
            energy: fill_ratio(energy, capacity),
            power: fill_ratio(energy.saturating_add(power), capacity),
            total: fill_ratio(store.total(), capacity),
        }
    }
}

/// A listing of a store's contents as resource icons, one per line.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreContents {
    icons: Vec<ResourceSvg>,
}

impl StoreContents {
    pub fn new(store: &Store, show_amounts: bool) -> Self {
        let icons = store
            .iter()
            .map(|(resource, amount)| ResourceSvg::new_or_unknown(resource, show_amounts.then_some(amount)))
            .collect();

        Self { icons }
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl RenderSvg for StoreContents {
    fn render(&self) -> String {
        self.icons.iter().fold(String::new(), |mut out, icon| {
            out += &icon.render();
            out.push('\n');
            out
        })
    }
}
