use log::trace;

use screeps::constants::Part;

use crate::common::colours::{part_colour, part_priority};
use crate::common::geometry::{describe_arc, Num};
use crate::common::{RenderOptions, RenderSvg, SvgError};
use crate::snapshot::{ObjectKind, ObjectSnapshot};

pub const DEFAULT_SIZE: f64 = 50.0;

const BORDER_COLOUR: &str = "#202020";
const INTERNAL_COLOUR: &str = "#555555";
const TOUGH_COLOUR: &str = "#858585";

const BORDER_WIDTH: u32 = 8;
const CENTER: f64 = 25.0;
const RADIUS: f64 = 15.0;
const TOUGH_EXTRA_RADIUS: f64 = 8.0;

/// Largest body a creep can have; arcs are sized against it.
const MAX_BODY_PARTS: f64 = 50.0;

/// Draws a creep as a core ringed by arcs, one per body part type.
///
/// Move parts hang from the bottom, every other part type stacks around the
/// top, and tough parts tint a halo around the whole thing.
///
/// # Example
/// ```rust
/// use screeps::constants::Part;
/// use screeps_svg::common::{RenderOptions, RenderSvg};
/// use screeps_svg::objects::CreepSvg;
/// use screeps_svg::snapshot::{CreepSnapshot, ObjectSnapshot};
///
/// let snapshot = ObjectSnapshot::Creep(CreepSnapshot {
///     name: "harvester".to_string(),
///     body: vec![Part::Work, Part::Work, Part::Carry, Part::Move],
/// });
/// let svg = CreepSvg::new(&snapshot, &RenderOptions::default()).unwrap().into_svg();
/// assert!(svg.markup().starts_with(r#"<svg width="50" height="50" viewBox="0 0 48 48">"#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CreepSvg {
    size: f64,
    /// Drawn part types with their counts, in order of first appearance.
    part_counts: Vec<(Part, u32)>,
}

impl CreepSvg {
    pub fn new(snapshot: &ObjectSnapshot, options: &RenderOptions) -> Result<Self, SvgError> {
        let ObjectSnapshot::Creep(creep) = snapshot else {
            return Err(snapshot.wrong_kind(ObjectKind::Creep));
        };

        Ok(Self::from_body(&creep.body, options.size_or(DEFAULT_SIZE)))
    }

    /// Builds the renderer straight from a body, skipping snapshot validation.
    pub fn from_body(body: &[Part], size: f64) -> Self {
        let mut part_counts: Vec<(Part, u32)> = Vec::new();
        for part in body.iter().copied().filter(|p| part_colour(*p).is_some()) {
            match part_counts.iter_mut().find(|(p, _)| *p == part) {
                Some((_, count)) => *count += 1,
                None => part_counts.push((part, 1)),
            }
        }

        Self { size, part_counts }
    }

    fn count(&self, part: Part) -> u32 {
        self.part_counts
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Arcs from the innermost to the outermost, paired with how many parts they span.
    fn arcs(&self) -> Vec<String> {
        let mut ordered = self.part_counts.clone();
        // largest groups first, ties broken by priority, then flipped so the
        // smallest group ends up drawn last and on top
        ordered.sort_by(|(a, a_count), (b, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| part_priority(*b).cmp(&part_priority(*a)))
        });
        ordered.reverse();

        let mut arcs = Vec::with_capacity(ordered.len());
        let mut stacked = 0;
        for (part, count) in ordered {
            match part {
                Part::Tough => {}
                Part::Move => arcs.push(parts_arc(part, count, 0)),
                _ => {
                    arcs.push(parts_arc(part, count, stacked));
                    stacked += count;
                }
            }
        }
        arcs
    }
}

fn parts_arc(part: Part, count: u32, previous: u32) -> String {
    let Some(colour) = part_colour(part) else {
        return String::new();
    };

    let center_angle = if part == Part::Move { 180.0 } else { 0.0 };
    let arc_length = (previous + count) as f64 / MAX_BODY_PARTS * 360.0;
    let start_angle = center_angle - arc_length / 2.0;
    let end_angle = center_angle + arc_length / 2.0;

    format!(
        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
        describe_arc(CENTER, CENTER, RADIUS, start_angle, end_angle),
        colour,
        BORDER_WIDTH,
    )
}

impl RenderSvg for CreepSvg {
    fn render(&self) -> String {
        trace!("rendering creep with {} part types", self.part_counts.len());

        let size = Num(self.size);
        let tough_opacity = self.count(Part::Tough) as f64 / MAX_BODY_PARTS;

        let mut out = format!(r#"<svg width="{size}" height="{size}" viewBox="0 0 48 48">"#);
        out += &format!(
            r#"<circle cx="{c}" cy="{c}" r="{r}" fill="{TOUGH_COLOUR}" fill-opacity="{o}" />"#,
            c = Num(CENTER),
            r = Num(RADIUS + TOUGH_EXTRA_RADIUS),
            o = Num(tough_opacity),
        );
        out += &format!(
            r#"<circle cx="{c}" cy="{c}" r="{r}" fill="{INTERNAL_COLOUR}" stroke="{BORDER_COLOUR}" stroke-width="{BORDER_WIDTH}" />"#,
            c = Num(CENTER),
            r = Num(RADIUS),
        );

        for arc in self.arcs().iter().rev() {
            out += arc;
        }

        out += "</svg>";
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::assert_single_svg_root;
    use crate::snapshot::{CreepSnapshot, SourceSnapshot};

    fn creep(body: Vec<Part>) -> ObjectSnapshot {
        ObjectSnapshot::Creep(CreepSnapshot {
            name: "test".to_string(),
            body,
        })
    }

    #[test]
    fn rejects_non_creep_snapshots() {
        let snapshot = ObjectSnapshot::Source(SourceSnapshot {
            energy: 0,
            energy_capacity: 3000,
        });
        let err = CreepSvg::new(&snapshot, &RenderOptions::default()).unwrap_err();
        assert_eq!(
            err,
            SvgError::InvalidInputKind {
                expected: ObjectKind::Creep,
                found: ObjectKind::Source,
            }
        );
    }

    #[test]
    fn carry_parts_are_not_counted() {
        let svg = CreepSvg::from_body(&[Part::Carry, Part::Carry, Part::Move], 50.0);
        assert_eq!(svg.part_counts, vec![(Part::Move, 1)]);
    }

    #[test]
    fn empty_body_draws_only_the_core() {
        let markup = CreepSvg::from_body(&[], 50.0).render();
        assert_single_svg_root(&markup);
        assert!(!markup.contains("<path"));
        assert!(markup.contains(r#"fill-opacity="0""#));
    }

    #[test]
    fn tough_parts_set_halo_opacity() {
        let body = vec![Part::Tough; 10];
        let markup = CreepSvg::from_body(&body, 50.0).render();
        assert!(markup.contains(r##"r="23" fill="#858585" fill-opacity="0.2""##));
        // tough parts never get an arc of their own
        assert!(!markup.contains("<path"));
    }

    #[test]
    fn one_arc_per_drawn_part_type() {
        let body = [Part::Work, Part::Work, Part::Move, Part::Attack, Part::Tough, Part::Carry];
        let markup = CreepSvg::from_body(&body, 50.0).render();
        assert_single_svg_root(&markup);
        assert_eq!(markup.matches("<path").count(), 3);
        assert!(markup.contains(r##"stroke="#A9B7C6""##));
        assert!(markup.contains(r##"stroke="#FFE56D""##));
        assert!(markup.contains(r##"stroke="#F93842""##));
    }

    #[test]
    fn larger_groups_are_drawn_first() {
        // work has more parts, so its cumulative arc is drawn before attack's
        let body = [Part::Attack, Part::Work, Part::Work, Part::Work];
        let markup = CreepSvg::from_body(&body, 50.0).render();
        let work = markup.find("#FFE56D").unwrap();
        let attack = markup.find("#F93842").unwrap();
        assert!(work < attack);
    }

    #[test]
    fn stacked_arcs_grow_cumulatively() {
        let svg = CreepSvg::from_body(&[Part::Attack, Part::Work, Part::Work], 50.0);
        let arcs = svg.arcs();
        // attack (1 part) spans 1/50, work stacks on top and spans 3/50
        assert_eq!(arcs[0], parts_arc(Part::Attack, 1, 0));
        assert_eq!(arcs[1], parts_arc(Part::Work, 2, 1));
    }

    #[test]
    fn move_arcs_hang_from_the_bottom() {
        let arc = parts_arc(Part::Move, 25, 0);
        // a half body of move parts sweeps 90 to 270 degrees, starting at the left
        assert!(arc.starts_with(r#"<path d="M 10 25"#), "{arc}");
    }

    #[test]
    fn rendering_is_memoized() {
        let svg = CreepSvg::new(&creep(vec![Part::Heal, Part::Move]), &RenderOptions::default())
            .unwrap()
            .into_svg();
        let first = svg.markup().to_string();
        assert_eq!(svg.markup(), first);
    }

    #[test]
    fn size_option_sets_dimensions() {
        let options = RenderOptions::default().with_size(100.0);
        let markup = CreepSvg::new(&creep(vec![Part::Move]), &options).unwrap().render();
        assert!(markup.starts_with(r#"<svg width="100" height="100""#));
    }
}
