use crate::schedule::Schedule;
use crate::tables::*;
use crate::{Error, Result};

/// Encrypted CPU part numbers.
///
/// Parsing accepts the part number printed on the chip (`315-5177`), the MAME
/// device name (`sega_315_5177`) and, where a part was also sold under
/// another number, that alias.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(ascii_case_insensitive)]
pub enum Variant {
    #[strum(to_string = "315-5136", serialize = "nec_315_5136")]
    Nec315_5136,
    #[strum(to_string = "315-5162", serialize = "sega_315_5162")]
    Sega315_5162,
    #[strum(to_string = "315-5176", serialize = "sega_315_5176")]
    Sega315_5176,
    /// also seen as 317-5000
    #[strum(to_string = "315-5177", serialize = "sega_315_5177", serialize = "317-5000")]
    Sega315_5177,
    #[strum(to_string = "315-5178", serialize = "sega_315_5178")]
    Sega315_5178,
    #[strum(to_string = "315-5179", serialize = "sega_315_5179")]
    Sega315_5179,
    #[strum(to_string = "317-0004", serialize = "sega_317_0004")]
    Sega317_0004,
    #[strum(to_string = "317-0005", serialize = "sega_317_0005")]
    Sega317_0005,
    #[strum(to_string = "317-0006", serialize = "sega_317_0006")]
    Sega317_0006,
    #[strum(to_string = "317-0007", serialize = "sega_317_0007")]
    Sega317_0007,
}

// strum shouldn't need to be installed by users
impl Variant {
    pub fn iter() -> VariantIter {
        <Variant as strum::IntoEnumIterator>::iter()
    }

    /// Resolve a part number or device name, failing on anything unknown.
    pub fn lookup(name: &str) -> Result<Self> {
        let variant = name
            .trim()
            .parse::<Variant>()
            .map_err(|_| Error::UnknownVariant(name.to_owned()))?;
        tracing::trace!(name, %variant, "resolved cpu part");
        Ok(variant)
    }

    /// Offset into the shared 317-000x key table, `None` for parts with their
    /// own key.
    pub fn shift(self) -> Option<usize> {
        match self {
            Variant::Sega317_0004 => Some(0),
            Variant::Sega317_0005 => Some(1),
            Variant::Sega317_0006 => Some(2),
            Variant::Sega317_0007 => Some(3),
            _ => None,
        }
    }

    pub fn schedule(self) -> Schedule {
        match self {
            Variant::Nec315_5136 => Schedule::new(&XOR_315_5136, &SWAP_315_5136),
            Variant::Sega315_5162 => Schedule::new(&XOR_315_5162, &SWAP_315_5162),
            Variant::Sega315_5176 => Schedule::new(&XOR_315_5176, &SWAP_315_5176),
            Variant::Sega315_5177 => Schedule::new(&XOR_315_5177, &SWAP_315_5177),
            Variant::Sega315_5178 => Schedule::new(&XOR_315_5178, &SWAP_315_5178),
            Variant::Sega315_5179 => Schedule::new(&XOR_315_5179, &SWAP_315_5179),
            Variant::Sega317_0004
            | Variant::Sega317_0005
            | Variant::Sega317_0006
            | Variant::Sega317_0007 => Schedule::shifted(self.shift().unwrap_or_default()),
        }
    }

    pub fn vendor(self) -> &'static str {
        match self {
            Variant::Nec315_5136 => "NEC",
            _ => "Sega",
        }
    }

    /// Human readable name, e.g. "NEC 315-5136"
    pub fn description(self) -> String {
        format!("{} {self}", self.vendor())
    }

    /// MAME device short name, e.g. "sega_315_5177"
    pub fn device_name(self) -> String {
        format!("{}_{}", self.vendor().to_lowercase(), self.to_string().replace('-', "_"))
    }

    /// Games known to run on this part.
    pub fn games(self) -> &'static [&'static str] {
        match self {
            Variant::Nec315_5136 => &["New Lucky 8 Lines (set 7, W-4, encrypted)"],
            Variant::Sega315_5162 => &["4D Warriors", "Rafflesia", "Wonder Boy (set 4)"],
            Variant::Sega315_5176 => &["Wonder Boy (system 2 hardware, set 2)"],
            Variant::Sega315_5177 => &[
                "Astro Flash",
                "Wonder Boy (set 1)",
                "Fantasy Zone (sound CPU)",
            ],
            Variant::Sega315_5178 => &["Wonder Boy (set 2)"],
            Variant::Sega315_5179 => &["Robo-Wrestle 2001"],
            Variant::Sega317_0004 => &["Calorie Kun"],
            Variant::Sega317_0005 => &["Space Position"],
            Variant::Sega317_0006 => &["Gardia (set 1)"],
            Variant::Sega317_0007 => &["Gardia (set 2)"],
        }
    }
}
