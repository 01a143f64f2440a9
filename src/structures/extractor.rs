use log::trace;

use crate::common::colours::ownership;
use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::objects::{mineral, MineralSvg};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

/// Draws an extractor's rotating ring, optionally around the mineral it sits on.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorSvg {
    size: f64,
    colour: &'static str,
    mineral: Option<MineralSvg>,
}

impl ExtractorSvg {
    /// Builds the renderer for an extractor, without a mineral underneath.
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Extractor(extractor) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::EXTRACTOR));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            colour: ownership(extractor.owner.as_deref(), options.player()),
            mineral: None,
        })
    }

    /// Builds the renderer for an extractor standing on `mineral`.
    ///
    /// The mineral can be a mineral snapshot or a bare base mineral symbol.
    pub fn with_mineral(
        snapshot: &ObjectSnapshot,
        mineral: MineralInput<'_>,
        options: &RenderOptions,
    ) -> Result<Self, SvgError> {
        let mut extractor = Self::new(snapshot, options)?;
        let mineral = match mineral {
            MineralInput::Snapshot(mineral) => MineralSvg::new(mineral, &RenderOptions::default())?,
            MineralInput::Type(mineral_type) => MineralSvg::from_type(mineral_type, mineral::DEFAULT_SIZE)?,
        };
        extractor.mineral = Some(mineral);
        Ok(extractor)
    }
}

/// The two ways of naming the mineral under an extractor.
#[derive(Debug, Clone, Copy)]
pub enum MineralInput<'a> {
    Snapshot(&'a ObjectSnapshot),
    Type(&'a str),
}

impl RenderSvg for ExtractorSvg {
    fn render(&self) -> String {
        trace!("rendering extractor, mineral: {}", self.mineral.is_some());

        let mut out = format!(
            r#"<svg height="{size}" width="{size}" viewBox="0 0 200 200"><g transform="translate(100,100)">"#,
            size = Num(self.size),
        );

        if let Some(mineral) = &self.mineral {
            out += &mineral.render();
        }

        out += &format!(
            concat!(
                r##"<path d="M 80 0 A 80 80 0 0 1 40 69.28 M  -40 69.28 A 80 80 0 0 1 -80 0 M -40 -69.28 A 80 80 0 0 1 40 -69.28" fill-opacity="0" stroke="{colour}" stroke-width="20">"##,
                r##"<animateTransform attributeName="transform" attributeType="XML" dur="4s" from="0 0 0" to="360 0 0" repeatCount="indefinite" type="rotate" calcMode="linear" />"##,
                r##"</path></g></svg>"##,
            ),
            colour = self.colour,
        );
        out
    }
}
