use log::trace;

use crate::common::colours::ownership;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

/// Draws an observer with its lens sweeping around.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverSvg {
    colour: &'static str,
}

impl ObserverSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Observer(observer) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::OBSERVER));
        };

        Ok(Self {
            colour: ownership(observer.owner.as_deref(), options.player()),
        })
    }
}

impl RenderSvg for ObserverSvg {
    fn render(&self) -> String {
        trace!("rendering observer");

        format!(
            concat!(
                r##"<svg height="50" width="50" viewBox="0 0 100 100">"##,
                r##"<g transform="translate(50,50)">"##,
                r##"<ellipse rx="45" ry="40" fill="#111111" stroke="{colour}" stroke-width="5" cx="0" cy="0" />"##,
                r##"<ellipse rx="20" ry="20" fill="{colour}" cx="0" cy="-15">"##,
                r##"<animate attributeName="cx" attributeType="XML" dur="2s" repeatCount="indefinite" values="20;20;0;0;-20;-20;0;0;20" calcMode="linear" />"##,
                r##"<animate attributeName="cy" attributeType="XML" dur="2s" repeatCount="indefinite" values="0;0;15;15;0;0;-15;-15;0" calcMode="linear" />"##,
                r##"</ellipse>"##,
                r##"</g>"##,
                r##"</svg>"##,
            ),
            colour = self.colour,
        )
    }
}
