use log::trace;

use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

const MARKUP: &str = concat!(
    r##"<svg height="50" width="50" viewBox="0 0 80 80">"##,
    r##"<g transform="translate(40,40)">"##,
    r##"<g>"##,
    r##"<ellipse rx="40" ry="40" cx="0" cy="0" fill="#000000" />"##,
    r##"<ellipse rx="33" ry="33" cx="0" cy="0" fill="#780207">"##,
    r##"<animateTransform attributeName="transform" attributeType="XML" dur="2s" repeatCount="indefinite" type="scale" values="0 0;1 1;1 1" calcMode="linear" />"##,
    r##"<animate attributeName="fill" dur="2s" repeatCount="indefinite" values="#780207; #000000" />"##,
    r##"</ellipse>"##,
    r##"<ellipse rx="33" ry="33" cx="0" cy="0" fill="#000000">"##,
    r##"<animateTransform attributeName="transform" attributeType="XML" dur="2s" repeatCount="indefinite" type="scale" values="0 0;0.3 0.3;1 1" calcMode="linear" />"##,
    r##"</ellipse>"##,
    r##"</g></g></svg>"##,
);

/// Draws a source keeper lair. Lairs have no state worth showing, so the markup is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeeperLairSvg;

impl KeeperLairSvg {
    pub fn new(snapshot: &ObjectSnapshot, _options: &RenderOptions) -> Result<Self, SvgError> {
        match snapshot {
            ObjectSnapshot::KeeperLair => Ok(Self),
            _ => Err(snapshot.wrong_kind(ObjectKind::KEEPER_LAIR)),
        }
    }
}

impl RenderSvg for KeeperLairSvg {
    fn render(&self) -> String {
        trace!("rendering keeper lair");
        MARKUP.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;

    #[test]
    fn lair_markup_is_fixed() {
        let svg = KeeperLairSvg::new(&ObjectSnapshot::KeeperLair, &RenderOptions::default()).unwrap();
        assert_single_svg_root(&svg.render());
        assert_eq!(svg.render(), MARKUP);
    }
}
