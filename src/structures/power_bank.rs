use log::trace;

use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

/// Radius of a power bank's core holding `power`.
///
/// A cubic fitted to the game client's rendering.
pub fn core_radius(power: u32) -> f64 {
    let p = power as f64;
    1.013e-10 * p.powi(3) - 1.336e-6 * p.powi(2) + 9.197e-3 * p + 5.695
}

/// Draws a power bank with a pulsing core sized by the power it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerBankSvg {
    size: f64,
    radius: f64,
}

impl PowerBankSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::PowerBank(power_bank) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::POWER_BANK));
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            radius: core_radius(power_bank.power),
        })
    }
}

impl RenderSvg for PowerBankSvg {
    fn render(&self) -> String {
        trace!("rendering power bank with core radius {:.1}", self.radius);

        format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 150 150">"##,
                r##"<g transform="translate(75,75), scale(1.5 1.5)">"##,
                r##"<path d="M0 -50 H30 L50 -30 V30 L30 50 H-30 L-50 30 V-30 L-30 -50 Z" fill="#311" stroke-width="10" stroke="#666" />"##,
                r##"<ellipse rx="{radius}" ry="{radius}" cx="0" cy="0" fill="#F41F33" stroke="#8D000D" stroke-width="10">"##,
                r##"<animateTransform attributeName="transform" attributeType="XML" dur="2s" keyTimes="0;0.66;1" repeatCount="indefinite" type="scale" values="1 1;0.6 0.6; 1 1" />"##,
                r##"<animate attributeName="fill" dur="2s" repeatCount="indefinite" values="#F41F33; #D31022; #8D000D; #F41F33" calcMode="linear" />"##,
                r##"</ellipse></g></svg>"##,
            ),
            size = Num(self.size),
            radius = Num(self.radius),
        )
    }
}
