use log::{trace, warn};

use crate::common::colours::{base_mineral, compound, Pair};
use crate::common::geometry::Num;
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::store::{ENERGY, POWER};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

const ICON_WIDTH: u32 = 14;
/// Width of each character of a compound label.
const COMPOUND_CHAR_WIDTH: u32 = 9;

#[derive(Debug, Clone, PartialEq)]
enum Icon {
    Energy,
    Power,
    Mineral(Pair),
    Compound(Pair),
    /// Drawn for symbols the icon set doesn't know.
    Unknown,
}

/// Draws a small inline resource icon, optionally followed by an amount.
///
/// # Example
/// ```rust
/// use screeps_svg::common::RenderSvg;
/// use screeps_svg::objects::ResourceSvg;
///
/// let icon = ResourceSvg::new("energy", Some(12500)).unwrap();
/// let markup = icon.render();
/// assert!(markup.starts_with(r#"<svg width="69" height="14">"#));
/// assert!(markup.contains(" x 12,500</text>"));
///
/// assert!(ResourceSvg::new("nonsense", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSvg {
    resource_type: String,
    amount: Option<u32>,
    icon: Icon,
}

impl ResourceSvg {
    /// Builds an icon for a resource symbol.
    ///
    /// Returns an error if the symbol is neither energy, power, a base mineral nor a compound.
    pub fn new(resource_type: &str, amount: Option<u32>) -> Result<Self, SvgError> {
        let icon = classify(resource_type)
            .ok_or_else(|| SvgError::UnknownResource(resource_type.to_string()))?;

        Ok(Self {
            resource_type: resource_type.to_string(),
            amount,
            icon,
        })
    }

    /// Builds an icon for a resource symbol, falling back to a `?` icon for unknown symbols.
    pub fn new_or_unknown(resource_type: &str, amount: Option<u32>) -> Self {
        Self::new(resource_type, amount).unwrap_or_else(|_| {
            warn!("no icon for resource `{}`", resource_type);
            Self {
                resource_type: resource_type.to_string(),
                amount,
                icon: Icon::Unknown,
            }
        })
    }

    /// Builds an icon for a dropped resource pile, labelled with its amount.
    pub fn from_snapshot(snapshot: &ObjectSnapshot, _options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Resource(resource) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::Resource));
        };

        Self::new(&resource.resource_type, Some(resource.amount))
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Total icon width, including the amount label.
    pub fn width(&self) -> u32 {
        ICON_WIDTH + self.amount_width() + self.label_width()
    }

    fn amount_width(&self) -> u32 {
        match self.amount {
            Some(amount) => digit_count(amount) * 10 + 5,
            None => 0,
        }
    }

    fn label_width(&self) -> u32 {
        match self.icon {
            Icon::Compound(_) => self.resource_type.chars().count() as u32 * COMPOUND_CHAR_WIDTH,
            _ => 0,
        }
    }

    fn icon_markup(&self) -> String {
        match &self.icon {
            Icon::Energy => r##"<circle cx="7" cy="7" r="5" style="fill:#FEE476"/>"##.to_string(),
            Icon::Power => r##"<circle cx="7" cy="7" r="5" style="fill:#F1243A"/>"##.to_string(),
            Icon::Mineral(colours) => disc(*colours, &self.resource_type),
            Icon::Unknown => disc(
                Pair {
                    foreground: "#000",
                    background: "#fff",
                },
                "?",
            ),
            Icon::Compound(colours) => {
                let width = self.label_width();
                format!(
                    concat!(
                        r##"<rect x="0" y="0" width="{width}" height="14" style="fill:{background}"/>"##,
                        r##"<text x="{x}" y="8" font-family="Verdana" font-size="8" alignment-baseline="middle" text-anchor="middle" style="fill:{foreground};font-weight:bold;">{label}</text>"##,
                    ),
                    width = width,
                    background = colours.background,
                    x = Num(width as f64 / 2.0),
                    foreground = colours.foreground,
                    label = self.resource_type,
                )
            }
        }
    }
}

fn classify(resource_type: &str) -> Option<Icon> {
    match resource_type {
        ENERGY => Some(Icon::Energy),
        POWER => Some(Icon::Power),
        _ => base_mineral(resource_type)
            .map(Icon::Mineral)
            .or_else(|| compound(resource_type).map(Icon::Compound)),
    }
}

fn disc(colours: Pair, label: &str) -> String {
    format!(
        concat!(
            r##"<circle cx="7" cy="7" r="5" style="stroke-width:1;stroke:{foreground};fill:{background}"/>"##,
            r##"<text x="7" y="8" font-family="Verdana" font-size="8" alignment-baseline="middle" text-anchor="middle" style="fill:{foreground};font-weight:bold;">{label}</text>"##,
        ),
        foreground = colours.foreground,
        background = colours.background,
        label = label,
    )
}

fn digit_count(amount: u32) -> u32 {
    amount.checked_ilog10().map_or(1, |digits| digits + 1)
}

/// Formats an amount with comma thousands separators.
pub fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl RenderSvg for ResourceSvg {
    fn render(&self) -> String {
        trace!("rendering {} icon", self.resource_type);

        let mut out = format!(r#"<svg width="{}" height="14">"#, self.width());
        out += &self.icon_markup();

        if let Some(amount) = self.amount {
            let text_x = (ICON_WIDTH + self.label_width()) as f64 + self.amount_width() as f64 / 2.0;
            out += &format!(
                r#"<text font-family="Verdana" font-size="10" x="{}" y="8" alignment-baseline="middle" text-anchor="middle" style="fill:white"> x {}</text>"#,
                Num(text_x),
                group_thousands(amount),
            );
        }

        out += "</svg>";
        out
    }
}
