use crate::key::{row, Plane};
use crate::schedule::Schedule;
use crate::{Error, Result, Variant};
use std::io::Read;

/// Address range covered by the encryption (A0-A14).
pub const ENCRYPTED_REGION: usize = 0x8000;

/// Bytes handed to each rayon task.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: usize = 0x800;

fn check_len(len: usize) -> Result<()> {
    match len {
        0 => Err(Error::EmptyImage),
        len if len > ENCRYPTED_REGION => Err(Error::ImageTooLarge(len)),
        _ => Ok(()),
    }
}

/// Decrypt `rom` in place to its data plane and write its opcode plane to
/// `opcodes`.
///
/// Running this twice over the same buffer does not give back the original
/// image, so callers must only decrypt once.
pub fn decrypt_into(rom: &mut [u8], opcodes: &mut [u8], schedule: &Schedule) -> Result<()> {
    check_len(rom.len())?;
    if opcodes.len() != rom.len() {
        return Err(Error::LengthMismatch {
            expected: rom.len(),
            got: opcodes.len(),
        });
    }
    decrypt_planes(rom, opcodes, schedule);
    Ok(())
}

/// Same as [`decrypt_into`], allocating the opcode plane.
pub fn decrypt_in_place(rom: &mut [u8], schedule: &Schedule) -> Result<Vec<u8>> {
    let mut opcodes = vec![0; rom.len()];
    decrypt_into(rom, &mut opcodes, schedule)?;
    Ok(opcodes)
}

/// Build the image whose `plane` decrypts to `plain`.
///
/// Only one plane can be chosen: the other plane of the result is whatever
/// the hardware makes of the same bytes.
pub fn encrypt_plane(plain: &[u8], schedule: &Schedule, plane: Plane) -> Result<Vec<u8>> {
    check_len(plain.len())?;
    Ok(plain
        .iter()
        .enumerate()
        .map(|(address, &b)| schedule.entry(row(address as u16), plane).encrypt(b))
        .collect())
}

fn decrypt_planes(rom: &mut [u8], opcodes: &mut [u8], schedule: &Schedule) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        tracing::debug!(len = rom.len(), chunk = CHUNK_SIZE, "decrypting rom in parallel");
        rom.par_chunks_mut(CHUNK_SIZE)
            .zip(opcodes.par_chunks_mut(CHUNK_SIZE))
            .enumerate()
            .for_each(|(i, (rom, opcodes))| {
                decrypt_range(i * CHUNK_SIZE, rom, opcodes, schedule)
            });
    }
    #[cfg(not(feature = "parallel"))]
    {
        tracing::debug!(len = rom.len(), "decrypting rom");
        decrypt_range(0, rom, opcodes, schedule);
    }
}

/// `rom` and `opcodes` start at address `base`.
fn decrypt_range(base: usize, rom: &mut [u8], opcodes: &mut [u8], schedule: &Schedule) {
    for (offset, (data, opcode)) in rom.iter_mut().zip(opcodes.iter_mut()).enumerate() {
        let row = row((base + offset) as u16);
        // both planes come from the encrypted byte, read it before overwriting
        let src = *data;
        *opcode = schedule.entry(row, Plane::Opcode).decrypt(src);
        *data = schedule.entry(row, Plane::Data).decrypt(src);
    }
}

/// A program ROM dump as read from the board, not yet decrypted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedRom {
    image: Vec<u8>,
}

impl EncryptedRom {
    pub fn new(image: Vec<u8>) -> Result<Self> {
        check_len(image.len())?;
        Ok(Self { image })
    }

    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut image = vec![];
        reader.read_to_end(&mut image)?;
        Self::new(image)
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn decrypt(self, variant: Variant) -> DecryptedRom {
        tracing::debug!(%variant, len = self.image.len(), "decrypting program rom");
        let mut data = self.image;
        let mut opcodes = vec![0; data.len()];
        decrypt_planes(&mut data, &mut opcodes, &variant.schedule());
        DecryptedRom {
            variant,
            opcodes,
            data,
        }
    }
}

/// Both decrypted views of a program ROM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedRom {
    variant: Variant,
    opcodes: Vec<u8>,
    data: Vec<u8>,
}

impl DecryptedRom {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn opcodes(&self) -> &[u8] {
        &self.opcodes
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn plane(&self, plane: Plane) -> &[u8] {
        match plane {
            Plane::Opcode => &self.opcodes,
            Plane::Data => &self.data,
        }
    }

    /// Byte seen by the CPU at `address`: instruction fetches get the opcode
    /// plane, everything else the data plane. `None` past the end of the ROM.
    pub fn fetch(&self, address: u16, plane: Plane) -> Option<u8> {
        self.plane(plane).get(address as usize).copied()
    }

    /// `(opcodes, data)`
    pub fn into_planes(self) -> (Vec<u8>, Vec<u8>) {
        (self.opcodes, self.data)
    }
}
