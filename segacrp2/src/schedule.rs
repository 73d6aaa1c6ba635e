use crate::key::{KeyEntry, Plane};
use crate::tables::{SWAP_317_MASTER, XOR_317_MASTER};

/// Entries in a key schedule: 64 rows, one opcode and one data entry each.
pub const SCHEDULE_LEN: usize = 128;

/// Furthest any 317-000x part starts into the shared master table.
pub const MAX_SHIFT: usize = 3;

pub const MASTER_LEN: usize = SCHEDULE_LEN + MAX_SHIFT;

/// 128 entry key schedule of one CPU part.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    xor: &'static [u8],
    swap: &'static [u8],
}

impl Schedule {
    pub(crate) const fn new(
        xor: &'static [u8; SCHEDULE_LEN],
        swap: &'static [u8; SCHEDULE_LEN],
    ) -> Self {
        Self { xor, swap }
    }

    /// Window of the 317-000x master table starting `shift` entries in.
    ///
    /// Returns `None` when the window would run past the end of the table.
    pub fn from_master(shift: usize) -> Option<Self> {
        (shift <= MAX_SHIFT).then(|| Self::shifted(shift))
    }

    /// Callers guarantee `shift <= MAX_SHIFT`.
    pub(crate) fn shifted(shift: usize) -> Self {
        debug_assert!(shift <= MAX_SHIFT, "master window {shift} out of range");
        let window = shift..shift + SCHEDULE_LEN;
        tracing::trace!(shift, "using 317-000x master key window");
        Self {
            xor: &XOR_317_MASTER[window.clone()],
            swap: &SWAP_317_MASTER[window],
        }
    }

    /// Entry `index` (0..128). Panics outside that range, like slice indexing.
    pub fn get(&self, index: usize) -> KeyEntry {
        KeyEntry {
            xor: self.xor[index],
            swap: self.swap[index],
        }
    }

    /// Entry for key `row` (0..64, as returned by [`crate::row`]). Panics
    /// outside that range.
    pub fn entry(&self, row: u8, plane: Plane) -> KeyEntry {
        debug_assert!(row < 64, "key row {row} out of range");
        self.get(row as usize * 2 + plane as usize)
    }

    pub fn entries(&self) -> impl Iterator<Item = KeyEntry> + '_ {
        self.xor
            .iter()
            .zip(self.swap)
            .map(|(&xor, &swap)| KeyEntry { xor, swap })
    }
}

impl std::fmt::Debug for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries()).finish()
    }
}
