use log::trace;

use crate::common::geometry::{fill_ratio, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 40.0;

/// Side of the energy square when the source is full.
const FULL_HEIGHT: f64 = 60.0;

/// Draws an energy source, its glowing core shrinking as it's harvested.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSvg {
    size: f64,
    energy_ratio: f64,
}

impl SourceSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Source(source) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::Source));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            energy_ratio: fill_ratio(source.energy, source.energy_capacity),
        })
    }

    /// Side length of the energy square.
    pub fn energy_height(&self) -> f64 {
        self.energy_ratio * FULL_HEIGHT
    }
}

impl RenderSvg for SourceSvg {
    fn render(&self) -> String {
        trace!("rendering source at {:.2} energy", self.energy_ratio);

        let size = Num(self.size);
        let height = self.energy_height();
        let pos = Num(self.size / 2.0 - height / 2.0);
        let height = Num(height);

        format!(
            concat!(
                r##"<svg class="source" height="{size}" width="{size}" viewBox="0 0 100 100">"##,
                r##"<g transform="translate(25, 25)">"##,
                r##"<rect fill="#111111" height="40" rx="15" ry="15" stroke-width="15" stroke="#595026" width="40">"##,
                r##"<animate attributeName="stroke" dur="4s" repeatCount="indefinite" values="#595026; #0e0c04; #595026" calcMode="linear"></animate>"##,
                r##"</rect>"##,
                r##"<rect fill="#FFE56D" height="{height}" width="{height}" rx="15" ry="15" x="{pos}" y="{pos}">"##,
                r##"<animate attributeName="fill" dur="2s" repeatCount="indefinite" values="#ffe56d; #fff; #ffcd6d; #ffde84; #ffe56d" calcMode="linear"></animate>"##,
                r##"</rect>"##,
                r##"</g>"##,
                r##"</svg>"##,
            ),
            size = size,
            height = height,
            pos = pos,
        )
    }
}
