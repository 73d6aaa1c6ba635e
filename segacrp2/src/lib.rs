//! Decryption of the Z80 program ROMs protected by Sega's 315-51xx and
//! 317-000x encrypted CPUs.
//!
//! The encryption affects D0, D2, D4 and D6 and depends on M1 (instruction
//! fetch vs. data read) and A0, A3, A6, A9, A12 and A14. Each byte is put
//! through a permutation of the four even data bits, followed by an XOR that
//! may invert them. That gives 4! * 2^4 = 384 possible encryptions per
//! address, selected by a 128 entry key schedule that differs per CPU part.
//!
//! ```no_run
//! # fn main() -> Result<(), segacrp2::Error> {
//! let image = std::fs::read("wbdeluxe.prg")?;
//! let rom = segacrp2::EncryptedRom::new(image)?.decrypt(segacrp2::Variant::lookup("315-5177")?);
//! let first_opcode = rom.fetch(0x0000, segacrp2::Plane::Opcode);
//! # Ok(())
//! # }
//! ```
mod error;
mod key;
mod rom;
mod schedule;
mod tables;
mod variant;

pub use {error::*, key::*, rom::*, schedule::*, variant::*};

type Result<T, E = Error> = std::result::Result<T, E>;
