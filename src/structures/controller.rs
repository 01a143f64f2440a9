use std::f64::consts::PI;

use log::trace;

use crate::common::geometry::{sweep_end, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{missing_field, ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 60.0;

/// Highest controller level.
pub const MAX_LEVEL: u8 = 8;

const OCTAGON_RADIUS: f64 = 80.0;
const PROGRESS_RADIUS: f64 = 19.0;

const LEVELS_START: &str = "M 0 0 L -28.70125742738173 -69.2909649383465";
const LEVEL_SEGMENTS: [&str; MAX_LEVEL as usize] = [
    "L 28.701257427381737 -69.2909649383465 Z",
    "M 0 0 L 28.701257427381737 -69.2909649383465 L 69.2909649383465 -28.701257427381734 Z",
    "M 0 0 L 69.2909649383465 -28.701257427381734 L 69.2909649383465 28.701257427381734 Z",
    "M 0 0 L 69.2909649383465 28.701257427381734 L 28.701257427381737 69.2909649383465 Z",
    "M 0 0 L 28.701257427381737 69.2909649383465 L -28.70125742738173 69.2909649383465 Z",
    "M 0 0 L -28.70125742738173 69.2909649383465 L -69.2909649383465 28.70125742738174 Z",
    "M 0 0 L -69.2909649383465 28.70125742738174 L -69.29096493834652 -28.701257427381726 Z",
    "M 0 0 L -69.29096493834652 -28.701257427381726 L -28.701257427381776 -69.29096493834649 Z",
];

const PULSE_ANIMATION: &str = r##"<animate attributeName="opacity" attributeType="XML" dur="2s" repeatCount="indefinite" values="0.05;0.2;0.05" calcMode="linear" />"##;

/// Ticks a controller at `level` takes to downgrade when not upgraded.
pub fn downgrade_ticks(level: u8) -> Option<u32> {
    match level {
        1 => Some(20_000),
        2 => Some(10_000),
        3 => Some(20_000),
        4 => Some(40_000),
        5 => Some(80_000),
        6 => Some(120_000),
        7 => Some(150_000),
        8 => Some(200_000),
        _ => None,
    }
}

/// Path data for the controller's octagon outline.
fn octagon_path() -> String {
    let point = |i: u32| {
        let angle = PI / 8.0 + i as f64 * PI / 4.0;
        format!("{} {}", Num(OCTAGON_RADIUS * angle.cos()), Num(OCTAGON_RADIUS * angle.sin()))
    };

    let rest: Vec<String> = (1..8).map(point).collect();
    format!("M {} L {} Z", point(0), rest.join(" "))
}

/// Path data for the lit level segments.
pub fn levels_path(level: u8) -> String {
    let mut path = format!("{}\n", LEVELS_START);
    for segment in LEVEL_SEGMENTS.iter().take(level as usize) {
        path += segment;
        path.push('\n');
    }
    path
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Progress {
    /// Share of the upgrade still to go.
    remaining: f64,
    downgrade_opacity: f64,
}

/// Draws a room controller: level segments, upgrade progress and status pulses.
///
/// # Example
/// ```rust
/// use screeps_svg::common::{RenderOptions, RenderSvg};
/// use screeps_svg::snapshot::{ControllerSnapshot, ObjectSnapshot};
/// use screeps_svg::structures::ControllerSvg;
///
/// let snapshot = ObjectSnapshot::Controller(ControllerSnapshot {
///     owner: Some("Spedwards".to_string()),
///     level: 3,
///     progress: 22_500,
///     progress_total: Some(45_000),
///     ticks_to_downgrade: 20_000,
///     reservation: None,
///     upgrade_blocked: false,
///     safe_mode: true,
/// });
/// let markup = ControllerSvg::new(&snapshot, &RenderOptions::default()).unwrap().render();
/// assert!(markup.contains("#FFD180"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSvg {
    size: f64,
    level: u8,
    reserved_by_player: bool,
    reserved_by_other: bool,
    upgrade_blocked: bool,
    safe_mode: bool,
    progress: Option<Progress>,
}

impl ControllerSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Controller(controller) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::CONTROLLER));
        };

        if controller.level > MAX_LEVEL {
            return Err(missing_field(ObjectKind::CONTROLLER, "level"));
        }

        let progress = match (downgrade_ticks(controller.level), controller.progress_total) {
            (Some(_), Some(0)) if controller.level < MAX_LEVEL => {
                return Err(missing_field(ObjectKind::CONTROLLER, "progressTotal"));
            }
            (Some(downgrade), Some(total)) if total > 0 && controller.progress > 0 => Some(Progress {
                remaining: total.saturating_sub(controller.progress) as f64 / total as f64,
                downgrade_opacity: (downgrade.saturating_sub(controller.ticks_to_downgrade) as f64
                    / downgrade as f64)
                    .clamp(0.0, 1.0),
            }),
            _ => None,
        };

        let reserved_by_player = match (controller.reservation.as_deref(), options.player()) {
            (Some(reserver), Some(player)) => reserver == player,
            _ => false,
        };

        Ok(Self {
            size: options.size_or(DEFAULT_SIZE),
            level: controller.level,
            reserved_by_player,
            reserved_by_other: controller.reservation.is_some() && !reserved_by_player,
            upgrade_blocked: controller.upgrade_blocked,
            safe_mode: controller.safe_mode,
            progress,
        })
    }
}

fn pulse(colour: &str) -> String {
    format!(r##"<ellipse cx="0" cy="0" fill="{colour}" opacity="0" rx="110" ry="110">{PULSE_ANIMATION}</ellipse>"##)
}

impl RenderSvg for ControllerSvg {
    fn render(&self) -> String {
        trace!("rendering level {} controller", self.level);

        let octagon = octagon_path();

        let mut out = format!(
            concat!(
                r##"<svg height="{size}" width="{size}" viewBox="0 0 300 300">"##,
                r##"<g transform="translate(150,150)">"##,
                r##"<g>"##,
                r##"<path fill="#FFFFFF" fill-opacity="0.1" transform="scale(1.2 1.2)" d="{octagon}" />"##,
            ),
            size = Num(self.size),
            octagon = octagon,
        );

        if self.reserved_by_player {
            out += &pulse("#33FF33");
        }

        if self.upgrade_blocked || self.reserved_by_other {
            out += &pulse("#FF3333");
        }

        if self.safe_mode {
            out += &pulse("#FFD180");
        }

        out += &format!(r##"<path fill="#0A0A0A" d="{octagon}" />"##);

        if self.level > 0 {
            out += &format!(
                r##"<path fill="#CCCCCC" paint-order="fill" stroke-width="6" stroke="#0A0A0A" d="{}" />"##,
                levels_path(self.level),
            );
        }

        out += r##"<ellipse cx="0" cy="0" fill="#222222" rx="37" ry="37" />"##;
        out += r##"<ellipse cx="0" cy="0" fill="transparent" rx="40" ry="40" stroke-width="10" stroke="#080808"></ellipse>"##;

        if let Some(progress) = self.progress {
            let large_arc_flag = if progress.remaining > 0.5 { 0 } else { 1 };
            let (end_x, end_y) = sweep_end(PROGRESS_RADIUS, -progress.remaining);

            out += &format!(
                concat!(
                    r##"<path fill="transparent" stroke-opacity="0.4" stroke-width="38" stroke="#FFFFFF" transform="rotate(-90)" d="M 19 0 A 19 19 0 {flag} 1 {end_x} {end_y}" />"##,
                    r##"<g opacity="{opacity}">"##,
                    r##"<path class="anim-downgrade" fill="#FF3333" d="{octagon}">"##,
                    r##"<animate attributeName="opacity" attributeType="XML" repeatCount="indefinite" values="0;0.9;0.6;0.3;0" dur="2s" calcMode="linear" />"##,
                    r##"</path>"##,
                    r##"</g>"##,
                ),
                flag = large_arc_flag,
                end_x = Num(end_x),
                end_y = Num(end_y),
                opacity = Num(progress.downgrade_opacity),
                octagon = octagon,
            );
        }

        out += "</g></g></svg>";
        out
    }
}
