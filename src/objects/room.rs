use log::{debug, trace};

use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::RoomSnapshot;
use crate::structures::{StorageSvg, TerminalSvg};

pub const DEFAULT_SIZE: f64 = 60.0;

const STYLES: &str = concat!(
    r#"<style id="dropdownStyle">"#,
    ".dropbtn {background-color: #4CAF50;color: white;padding: 16px;font-size: 16px;border: none;cursor: pointer;}",
    ".dropdown {position: relative;display: inline-block;}",
    ".dropdown-content {display: none;z-index: 1;padding: 5px;border-radius: 6px;text-align: center;position: absolute;",
    "background-color: #f9f9f9;min-width: 200px;box-shadow: 0px 8px 16px 0px rgba(0,0,0,0.2);}",
    ".dropdown-content a {color: black;text-decoration: none;display: block;}",
    ".dropdown-content a:hover {background-color: #f1f1f1}",
    ".dropdown:hover .dropdown-content {display: block;}",
    ".dropdown:hover .dropbtn {background-color: #3e8e41;}",
    "</style>",
    r#"<style id="tooltipStyle">"#,
    ".tool {position: relative;display: inline-block;}",
    ".tool .tip {visibility: hidden;width: 300px;background-color: #111111;color: #000;text-align: center;",
    "border-radius: 6px;padding: 5px 0;position: absolute;z-index: 1;opacity: 0;transition: opacity 1s;}",
    ".tool .tipRight {top: -5px;left: 101%;}",
    ".tool:hover .tip {visibility: visible;opacity: 0.9;}",
    ".tool table {text-align: left;margin-left: 5px;}",
    "</style>",
);

const TOOLTIP_OPEN: &str = r#"<span class="tool"><span style="background-color:#000" class="tip">"#;

const NO_STORAGE: &str = concat!(
    r#"<svg width="50" height="60">"#,
    r#"<path style="stroke-width: 1;stroke:#90BA94" d='M16 48 C18 52 38 52 40 48 C42 46 42 18 40 16 C38 12 18 12 16 16 C14 18 14 46 16 48' />"#,
    r#"<path style="fill:#555555" d='M18 46 L38 46 L38 18 L18 18' />"#,
    r#"<path style="fill:red" d='M44 18 L42 16 L28 30 L14 16 L12 18 L26 32 L12 46 L14 48 L28 34 L42 48 L44 46 L30 32 Z' />"#,
    "</svg>",
);

const NO_TERMINAL: &str = concat!(
    r#"<svg width="50" height="60" style="transform:scale(1.2,1.2)">"#,
    r#"<path vector-effect="non-scaling-stroke" style="stroke:#90BA94" d='M36 40 L42 32 L36 24 L28 18 L20 24 L14 32 L20 40 L28 46 Z' />"#,
    r#"<path vector-effect="non-scaling-stroke" style="fill:#AAAAAA" d='M34 38 L38 32 L34 26 L28 22 L22 26 L18 32 L22 38 L28 42 Z' />"#,
    r#"<path vector-effect="non-scaling-stroke" style="stroke-width:2;stroke:black;fill:#555555" d='M34 38 L34 32 L34 26 L28 26 L22 26 L22 32 L22 38 L28 38 Z' />"#,
    r#"<path style="fill:red" d='M44 18 L42 16 L28 30 L14 16 L12 18 L26 32 L12 46 L14 48 L28 34 L42 48 L44 46 L30 32 Z' />"#,
    "</svg>",
);

/// Draws a room's storage and terminal side by side, each with a hover
/// tooltip listing what it holds.
///
/// The output is an HTML fragment (styles and spans) rather than a single
/// `<svg>` element.
///
/// # Example
/// ```rust
/// use screeps_svg::common::{RenderOptions, RenderSvg};
/// use screeps_svg::objects::RoomSvg;
/// use screeps_svg::snapshot::RoomSnapshot;
///
/// let room = RoomSnapshot {
///     name: "W1N1".parse().unwrap(),
///     storage: None,
///     terminal: None,
/// };
/// let markup = RoomSvg::new(&room, &RenderOptions::default()).unwrap().render();
/// assert!(markup.contains("No Storage Built"));
/// assert!(markup.contains("No Terminal Built"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSvg {
    storage: Option<StorageSvg>,
    terminal: Option<TerminalSvg>,
}

impl RoomSvg {
    pub fn new(room: &RoomSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let options = RenderOptions {
            size: Some(options.size_or(DEFAULT_SIZE)),
            ..options.clone()
        };

        let storage = room
            .storage
            .as_ref()
            .map(|storage| StorageSvg::new(storage, &options))
            .transpose()?;
        let terminal = room
            .terminal
            .as_ref()
            .map(|terminal| TerminalSvg::new(terminal, &options))
            .transpose()?;

        debug!(
            "room {}: storage {}, terminal {}",
            room.name,
            storage.is_some(),
            terminal.is_some()
        );

        Ok(Self { storage, terminal })
    }

    pub fn storage(&self) -> Option<&StorageSvg> {
        self.storage.as_ref()
    }

    pub fn terminal(&self) -> Option<&TerminalSvg> {
        self.terminal.as_ref()
    }
}

fn tooltip(out: &mut String, contents: Option<String>, empty: &str, markup: Option<String>, placeholder: &str) {
    out.push_str(TOOLTIP_OPEN);
    out.push_str(contents.as_deref().unwrap_or(empty));
    out.push_str("</span>");
    out.push_str(markup.as_deref().unwrap_or(placeholder));
    out.push_str("</span>");
}

impl RenderSvg for RoomSvg {
    fn render(&self) -> String {
        trace!("rendering room");

        let mut out = String::from(STYLES);
        tooltip(
            &mut out,
            self.storage.as_ref().map(|storage| storage.contents().render()),
            "No Storage Built",
            self.storage.as_ref().map(RenderSvg::render),
            NO_STORAGE,
        );
        tooltip(
            &mut out,
            self.terminal.as_ref().map(|terminal| terminal.contents().render()),
            "No Terminal Built",
            self.terminal.as_ref().map(RenderSvg::render),
            NO_TERMINAL,
        );
        out
    }
}
