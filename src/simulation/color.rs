//! 24-bit colours for bodies.
//!
//! The simulation treats colour as opaque data; it only ever mixes two colours
//! on a merge and picks palette entries for new bodies.

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb24 {
    pub const BLACK: Rgb24 = Rgb24::new(0, 0, 0);
    pub const RED: Rgb24 = Rgb24::new(255, 0, 0);
    pub const GREEN: Rgb24 = Rgb24::new(0, 255, 0);
    pub const BLUE: Rgb24 = Rgb24::new(0, 0, 255);
    pub const YELLOW: Rgb24 = Rgb24::new(255, 255, 0);
    pub const CYAN: Rgb24 = Rgb24::new(0, 255, 255);
    pub const MAGENTA: Rgb24 = Rgb24::new(255, 0, 255);
    pub const WHITE: Rgb24 = Rgb24::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for a primary/secondary colour's first letter
    /// (`r g b y c m w`, case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'r' => Some(Self::RED),
            'g' => Some(Self::GREEN),
            'b' => Some(Self::BLUE),
            'y' => Some(Self::YELLOW),
            'c' => Some(Self::CYAN),
            'm' => Some(Self::MAGENTA),
            'w' => Some(Self::WHITE),
            _ => None,
        }
    }

    /// Componentwise integer mean
    pub fn mix(self, other: Rgb24) -> Rgb24 {
        let mean = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        Rgb24::new(mean(self.r, other.r), mean(self.g, other.g), mean(self.b, other.b))
    }

    /// A saturated colour: one dark, one mid and one bright band, shuffled
    /// across the three channels
    pub fn vivid<R: Rng + ?Sized>(rng: &mut R) -> Rgb24 {
        let mut bands = [
            rng.gen_range(0..64u8),
            rng.gen_range(64..128u8),
            rng.gen_range(128..=255u8),
        ];
        bands.shuffle(rng);
        Rgb24::new(bands[0], bands[1], bands[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mix_is_componentwise_mean() {
        let mixed = Rgb24::RED.mix(Rgb24::new(1, 255, 100));
        assert_eq!(mixed, Rgb24::new(128, 127, 50));
    }

    #[test]
    fn letters_map_to_palette() {
        assert_eq!(Rgb24::from_letter('Y'), Some(Rgb24::YELLOW));
        assert_eq!(Rgb24::from_letter('w'), Some(Rgb24::WHITE));
        assert_eq!(Rgb24::from_letter('x'), None);
    }

    #[test]
    fn vivid_uses_one_band_of_each_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = Rgb24::vivid(&mut rng);
            let mut channels = [c.r, c.g, c.b];
            channels.sort_unstable();
            assert!(channels[0] < 64);
            assert!((64..128).contains(&channels[1]));
            assert!(channels[2] >= 128);
        }
    }
}
