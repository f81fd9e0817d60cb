use crate::ID;

/// Stable decorative color for a player, derived from their id.
///
/// Hash is the classic djb2-style fold over the id's string form with
/// 32-bit wrapping, so the same id lands on the same hue in any process.
/// Saturation and lightness are fixed; only the hue varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    hue: u16,
}

const SATURATION: u8 = 70;
const LIGHTNESS: u8 = 45;

impl Color {
    pub fn hue(&self) -> u16 {
        self.hue
    }
}

impl<T> From<&ID<T>> for Color {
    fn from(id: &ID<T>) -> Self {
        let hash = id
            .to_string()
            .chars()
            .fold(0i32, |hash, c| {
                (c as i32).wrapping_add((hash << 5).wrapping_sub(hash))
            });
        Self {
            hue: (hash.unsigned_abs() % 360) as u16,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, SATURATION, LIGHTNESS)
    }
}
