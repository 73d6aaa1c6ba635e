/// The 24 orderings of the even data bits the hardware can select from.
///
/// Entry `n` lists, for output bits 6, 4, 2 and 0 in that order, which bit of
/// the encrypted byte ends up there.
#[rustfmt::skip]
pub const SWAP_TABLE: [[u8; 4]; 24] = [
    [6, 4, 2, 0], [4, 6, 2, 0], [2, 4, 6, 0], [0, 4, 2, 6],
    [6, 2, 4, 0], [6, 0, 2, 4], [6, 4, 0, 2], [2, 6, 4, 0],
    [4, 2, 6, 0], [4, 6, 0, 2], [6, 0, 4, 2], [0, 6, 4, 2],
    [4, 0, 6, 2], [0, 4, 6, 2], [6, 2, 0, 4], [2, 6, 0, 4],
    [0, 6, 2, 4], [2, 0, 6, 4], [0, 2, 6, 4], [4, 2, 0, 6],
    [2, 4, 0, 6], [4, 0, 2, 6], [2, 0, 4, 6], [0, 2, 4, 6],
];

/// Output bit positions filled by each [`SWAP_TABLE`] column.
const LANES: [u8; 4] = [6, 4, 2, 0];

/// D1, D3, D5 and D7 are never touched by the encryption.
const PASSTHROUGH: u8 = 0xaa;

/// Address lines that select the key row, most significant first.
const ROW_BITS: [u8; 6] = [14, 12, 9, 6, 3, 0];

/// Bits of the address that [`row`] looks at.
pub const ROW_MASK: u16 = 1 << 14 | 1 << 12 | 1 << 9 | 1 << 6 | 1 << 3 | 1;

/// Key row (0..64) for `address`, built from A14, A12, A9, A6, A3 and A0.
pub fn row(address: u16) -> u8 {
    ROW_BITS
        .iter()
        .fold(0, |row, &bit| (row << 1) | ((address >> bit) & 1) as u8)
}

/// Which of the two decrypted views an access goes to.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, strum::Display, strum::FromRepr)]
pub enum Plane {
    /// M1 cycles (instruction fetches)
    Opcode = 0,
    /// every other read
    Data = 1,
}

/// One (xor, permutation) pair out of a key schedule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct KeyEntry {
    pub xor: u8,
    /// index into [`SWAP_TABLE`], always below 24
    pub swap: u8,
}

impl KeyEntry {
    pub fn permutation(&self) -> &'static [u8; 4] {
        &SWAP_TABLE[self.swap as usize]
    }

    pub fn decrypt(&self, src: u8) -> u8 {
        let mut out = src & PASSTHROUGH;
        for (&lane, &from) in LANES.iter().zip(self.permutation()) {
            out |= ((src >> from) & 1) << lane;
        }
        out ^ self.xor
    }

    /// Inverse of [`KeyEntry::decrypt`].
    pub fn encrypt(&self, plain: u8) -> u8 {
        let plain = plain ^ self.xor;
        let mut out = plain & PASSTHROUGH;
        for (&lane, &from) in LANES.iter().zip(self.permutation()) {
            out |= ((plain >> lane) & 1) << from;
        }
        out
    }
}
