use screeps::constants::Part;

/// Border colour for structures owned by the viewing player.
pub const OWNED: &str = "#8FBB93";
/// Border colour for everyone else's structures.
pub const HOSTILE: &str = "#ED5557";

/// Picks the ownership border colour for a structure.
pub fn ownership(owner: Option<&str>, player: Option<&str>) -> &'static str {
    match (owner, player) {
        (Some(owner), Some(player)) if owner == player => OWNED,
        _ => HOSTILE,
    }
}

/// Arc colour for a body part. Carry parts aren't drawn.
pub fn part_colour(part: Part) -> Option<&'static str> {
    match part {
        Part::Move => Some("#A9B7C6"),
        Part::Work => Some("#FFE56D"),
        Part::Claim => Some("#B99CFB"),
        Part::Attack => Some("#F93842"),
        Part::RangedAttack => Some("#5D80B2"),
        Part::Heal => Some("#65FD62"),
        Part::Tough => Some("#858585"),
        _ => None,
    }
}

/// Tie-break order for body arcs with equal part counts; higher draws further out.
pub fn part_priority(part: Part) -> u8 {
    match part {
        Part::Work => 1,
        Part::Attack => 2,
        Part::RangedAttack => 3,
        Part::Heal => 4,
        Part::Claim => 5,
        _ => 0,
    }
}

/// A foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub foreground: &'static str,
    pub background: &'static str,
}

const fn pair(foreground: &'static str, background: &'static str) -> Pair {
    Pair {
        foreground,
        background,
    }
}

/// Base minerals, in the order their symbols are checked.
pub const BASE_MINERALS: [&str; 7] = ["H", "O", "U", "L", "K", "Z", "X"];

/// Colours of a base mineral deposit or icon, `None` for anything that isn't a base mineral.
pub fn base_mineral(symbol: &str) -> Option<Pair> {
    let colours = match symbol {
        "X" => pair("#FF7A7A", "#4F2626"),
        "K" => pair("#9370FF", "#331A80"),
        "L" => pair("#89F4A5", "#3F6147"),
        "U" => pair("#88D6F7", "#1B617F"),
        "Z" => pair("#F2D28B", "#594D33"),
        "H" | "O" => pair("#CCCCCC", "#4D4D4D"),
        _ => return None,
    };
    Some(colours)
}

/// Colours of a compound icon, keyed by the first of `U L K Z G H O` the symbol contains.
///
/// Symbols must look like the game's compounds: an uppercase letter followed
/// by uppercase letters and digits (`G`, `UH`, `XGH2O`).
pub fn compound(symbol: &str) -> Option<Pair> {
    let mut chars = symbol.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_uppercase())
        || !chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }

    let family = ['U', 'L', 'K', 'Z', 'G', 'H', 'O']
        .into_iter()
        .find(|c| symbol.contains(*c))?;

    let colours = match family {
        'U' => pair("#157694", "#58D7F7"),
        'L' => pair("#22815A", "#29F4A5"),
        'K' => pair("#482794", "#9F76FC"),
        'Z' => pair("#7F6944", "#FCD28D"),
        'G' => pair("#767676", "#FFFFFF"),
        _ => pair("#000066", "#99ccff"),
    };
    Some(colours)
}

/// Fill colour of a lab's mineral blob.
///
/// Ghodium compounds and uncoloured labs are drawn white.
pub fn lab_mineral(symbol: &str, coloured: bool) -> &'static str {
    if !coloured || symbol.contains('G') {
        return "#FFFFFF";
    }

    match symbol {
        "H" | "O" => "#989898",
        "UL" | "ZK" | "OH" => "#B4B4B4",
        _ => [
            ('U', "#48C5E5"),
            ('L', "#24D490"),
            ('K', "#9269EC"),
            ('Z', "#D9B478"),
        ]
        .into_iter()
        .find(|(c, _)| symbol.contains(*c))
        .map(|(_, colour)| colour)
        .unwrap_or("#FFFFFF"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_requires_matching_player() {
        assert_eq!(ownership(Some("Spedwards"), Some("Spedwards")), OWNED);
        assert_eq!(ownership(Some("Invader"), Some("Spedwards")), HOSTILE);
        assert_eq!(ownership(Some("Spedwards"), None), HOSTILE);
        assert_eq!(ownership(None, Some("Spedwards")), HOSTILE);
    }

    #[test]
    fn carry_has_no_colour() {
        assert_eq!(part_colour(Part::Carry), None);
        assert_eq!(part_colour(Part::Heal), Some("#65FD62"));
    }

    #[test]
    fn base_minerals_share_hydrogen_oxygen_colours() {
        assert_eq!(base_mineral("H"), base_mineral("O"));
        assert!(base_mineral("G").is_none());
        assert!(BASE_MINERALS.iter().all(|m| base_mineral(m).is_some()));
    }

    #[test]
    fn compound_family_follows_check_order() {
        // XGH2O contains G before H in the check order
        assert_eq!(compound("XGH2O").unwrap().background, "#FFFFFF");
        assert_eq!(compound("UH").unwrap().background, "#58D7F7");
        assert_eq!(compound("OH").unwrap().background, "#99ccff");
        assert!(compound("energy").is_none());
    }

    #[test]
    fn compounds_must_be_uppercase_symbols() {
        assert!(compound("G").is_some());
        assert!(compound("Hello").is_none());
        assert!(compound("H&<b>").is_none());
        assert!(compound("2UH").is_none());
        assert!(compound("").is_none());
    }

    #[test]
    fn lab_colours() {
        assert_eq!(lab_mineral("H", true), "#989898");
        assert_eq!(lab_mineral("ZK", true), "#B4B4B4");
        assert_eq!(lab_mineral("KH2O", true), "#9269EC");
        assert_eq!(lab_mineral("GH", true), "#FFFFFF");
        assert_eq!(lab_mineral("UH", false), "#FFFFFF");
        assert_eq!(lab_mineral("X", true), "#FFFFFF");
    }
}
