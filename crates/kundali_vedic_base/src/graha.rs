//! Vedic planet (graha) enum and rashi lordship.
//!
//! The 9 grahas form the foundation of all Vedic jyotish calculations.
//! Each rashi has a planetary lord, which is a universal Vedic convention.

use kundali_ephem::Body;

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ephemeris body for this graha.
    pub const fn body(self) -> Body {
        match self {
            Self::Surya => Body::Sun,
            Self::Chandra => Body::Moon,
            Self::Mangal => Body::Mars,
            Self::Buddh => Body::Mercury,
            Self::Guru => Body::Jupiter,
            Self::Shukra => Body::Venus,
            Self::Shani => Body::Saturn,
            Self::Rahu => Body::Rahu,
            Self::Ketu => Body::Ketu,
        }
    }

    pub const fn from_body(body: Body) -> Graha {
        match body {
            Body::Sun => Self::Surya,
            Body::Moon => Self::Chandra,
            Body::Mars => Self::Mangal,
            Body::Mercury => Self::Buddh,
            Body::Jupiter => Self::Guru,
            Body::Venus => Self::Shukra,
            Body::Saturn => Self::Shani,
            Body::Rahu => Self::Rahu,
            Body::Ketu => Self::Ketu,
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_ephem::ALL_BODIES;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn body_mapping_is_bijective() {
        for body in ALL_BODIES {
            assert_eq!(Graha::from_body(body).body(), body);
        }
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_body(g.body()), g);
        }
    }

    #[test]
    fn lords() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
    }

    #[test]
    fn each_luminary_rules_one_sign() {
        let count = |g: Graha| Rashi::all().iter().filter(|&&r| rashi_lord(r) == g).count();
        assert_eq!(count(Graha::Surya), 1);
        assert_eq!(count(Graha::Chandra), 1);
        assert_eq!(count(Graha::Mangal), 2);
        assert_eq!(count(Graha::Rahu), 0);
    }
}
