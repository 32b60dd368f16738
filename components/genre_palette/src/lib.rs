use serde::{Serialize, Serializer};
use std::fmt;

/// Base palette, searched in this order for fuzzy matches
const PALETTE: [(&str, &str); 26] = [
    ("pop", "#E91E63"),
    ("rock", "#9C27B0"),
    ("hip hop", "#FF5722"),
    ("hip-hop", "#FF5722"),
    ("rap", "#FF5722"),
    ("k-pop", "#00BCD4"),
    ("kpop", "#00BCD4"),
    ("electronic", "#00BCD4"),
    ("edm", "#00BCD4"),
    ("dance", "#00BCD4"),
    ("jazz", "#FFC107"),
    ("classical", "#8BC34A"),
    ("country", "#FF9800"),
    ("r&b", "#3F51B5"),
    ("rnb", "#3F51B5"),
    ("latin", "#F44336"),
    ("reggaeton", "#F44336"),
    ("metal", "#607D8B"),
    ("indie", "#CDDC39"),
    ("folk", "#795548"),
    ("soul", "#9C27B0"),
    ("blues", "#3F51B5"),
    ("punk", "#E91E63"),
    ("alternative", "#9C27B0"),
    ("trap", "#FF5722"),
    ("house", "#00BCD4"),
];

/// Colour for charts; serializes to its CSS text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// Genre absent
    Neutral,
    /// Palette entry, `#RRGGBB`
    Hex(&'static str),
    /// Derived from the genre name, `hsl(hue, 70%, 55%)`
    Hue(u16),
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorId::Neutral => write!(f, "#888"),
            ColorId::Hex(hex) => write!(f, "{hex}"),
            ColorId::Hue(hue) => write!(f, "hsl({hue}, 70%, 55%)"),
        }
    }
}

impl Serialize for ColorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Colour of a genre.
///
/// Tries an exact palette match, then the first palette entry where either
/// name contains the other ("dance pop" finds "pop"), then a hue hashed from
/// the name. The same genre always gets the same colour.
pub fn resolve_color(genre: &str) -> ColorId {
    let normalized = genre.trim().to_lowercase();
    if normalized.is_empty() {
        return ColorId::Neutral;
    }

    if let Some((_, hex)) = PALETTE.iter().find(|(name, _)| *name == normalized) {
        return ColorId::Hex(*hex);
    }

    if let Some((_, hex)) = PALETTE
        .iter()
        .find(|(name, _)| normalized.contains(name) || name.contains(normalized.as_str()))
    {
        return ColorId::Hex(*hex);
    }

    ColorId::Hue(hue_of(&normalized))
}

/// `h = c + (h << 5) - h` over UTF-16 units, with 32-bit shifts, then
/// `|h mod 360|`
fn hue_of(name: &str) -> u16 {
    let hash = name.encode_utf16().fold(0i64, |hash, unit| {
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        i64::from(unit) + shifted - hash
    });
    (hash % 360).unsigned_abs() as u16
}
