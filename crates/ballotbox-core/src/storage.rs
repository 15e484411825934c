//! Persistent tally store: byte-addressed non-volatile storage with a fixed
//! layout, shared by the terminal firmware and any on-device predecessor.
//!
//! Layout (byte offsets are a compatibility surface):
//! enabled flags at 100..=105 (one byte per slot), voter cap at 200 (two
//! bytes little-endian), vote counts at 300, 302, ... 310 (two bytes
//! little-endian per slot).

use log::debug;

use crate::election::CANDIDATE_SLOTS;

pub const ENABLED_FLAG_BASE: u16 = 100;
pub const MAX_VOTERS_ADDR: u16 = 200;
pub const VOTE_COUNT_BASE: u16 = 300;

/// Smallest image that covers the whole layout.
pub const IMAGE_BYTES: usize = 512;

pub const fn enabled_flag_addr(slot: usize) -> u16 {
    ENABLED_FLAG_BASE + slot as u16
}

pub const fn vote_count_addr(slot: usize) -> u16 {
    VOTE_COUNT_BASE + (slot as u16) * 2
}

/// Byte-addressed durable storage.
///
/// Writes are not atomic: power loss between the two bytes of a 16-bit value
/// (or before `commit`) can leave a torn value. Callers that care verify by
/// reading back; there is no transactional mechanism here.
pub trait TallyStore {
    type Error;

    fn read_byte(&mut self, addr: u16) -> Result<u8, Self::Error>;
    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), Self::Error>;

    /// Durably commits everything written so far. May block for a settle
    /// delay; must leave the data readable immediately afterwards.
    fn commit(&mut self) -> Result<(), Self::Error>;

    fn read16(&mut self, addr: u16) -> Result<u16, Self::Error> {
        let lo = self.read_byte(addr)?;
        let hi = self.read_byte(addr + 1)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    fn write16(&mut self, addr: u16, value: u16) -> Result<(), Self::Error> {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo)?;
        self.write_byte(addr + 1, hi)?;
        self.commit()
    }

    fn read_flag(&mut self, addr: u16) -> Result<bool, Self::Error> {
        Ok(self.read_byte(addr)? != 0)
    }

    fn write_flag(&mut self, addr: u16, value: bool) -> Result<(), Self::Error> {
        self.write_byte(addr, value as u8)?;
        self.commit()
    }
}

/// In-memory store image. Backs the simulator and the test suite.
pub struct MemStore {
    image: [u8; IMAGE_BYTES],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemStoreError {
    OutOfRange { addr: u16 },
}

impl MemStore {
    /// Blank image, every byte zero.
    pub const fn new() -> Self {
        Self {
            image: [0; IMAGE_BYTES],
        }
    }

    pub const fn from_image(image: [u8; IMAGE_BYTES]) -> Self {
        Self { image }
    }

    /// Image provisioned with election defaults: all six slots enabled,
    /// all counts zero, voter cap 100.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for slot in 0..CANDIDATE_SLOTS {
            store.image[enabled_flag_addr(slot) as usize] = 1;
        }
        let [lo, hi] = crate::election::DEFAULT_MAX_VOTERS.to_le_bytes();
        store.image[MAX_VOTERS_ADDR as usize] = lo;
        store.image[MAX_VOTERS_ADDR as usize + 1] = hi;
        store
    }

    pub fn image(&self) -> &[u8; IMAGE_BYTES] {
        &self.image
    }
}

impl TallyStore for MemStore {
    type Error = MemStoreError;

    fn read_byte(&mut self, addr: u16) -> Result<u8, Self::Error> {
        self.image
            .get(addr as usize)
            .copied()
            .ok_or(MemStoreError::OutOfRange { addr })
    }

    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), Self::Error> {
        let byte = self
            .image
            .get_mut(addr as usize)
            .ok_or(MemStoreError::OutOfRange { addr })?;
        *byte = value;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        debug!("store: commit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write16_read16_round_trip() {
        let mut store = MemStore::new();
        for value in [0u16, 1, 99, 0x00FF, 0x0100, 0xABCD, u16::MAX] {
            store.write16(vote_count_addr(3), value).unwrap();
            assert_eq!(store.read16(vote_count_addr(3)).unwrap(), value);
        }
    }

    #[test]
    fn sixteen_bit_values_are_little_endian_in_the_image() {
        let mut store = MemStore::new();
        store.write16(MAX_VOTERS_ADDR, 0x0201).unwrap();
        assert_eq!(store.image()[MAX_VOTERS_ADDR as usize], 0x01);
        assert_eq!(store.image()[MAX_VOTERS_ADDR as usize + 1], 0x02);
    }

    #[test]
    fn flags_round_trip_and_any_nonzero_byte_reads_true() {
        let mut store = MemStore::new();
        store.write_flag(enabled_flag_addr(0), true).unwrap();
        assert!(store.read_flag(enabled_flag_addr(0)).unwrap());
        store.write_flag(enabled_flag_addr(0), false).unwrap();
        assert!(!store.read_flag(enabled_flag_addr(0)).unwrap());

        store.write_byte(enabled_flag_addr(1), 0xFF).unwrap();
        assert!(store.read_flag(enabled_flag_addr(1)).unwrap());
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut store = MemStore::new();
        assert_eq!(
            store.read_byte(IMAGE_BYTES as u16),
            Err(MemStoreError::OutOfRange {
                addr: IMAGE_BYTES as u16
            })
        );
    }

    #[test]
    fn default_image_matches_reset_defaults() {
        let mut store = MemStore::with_defaults();
        assert_eq!(store.read16(MAX_VOTERS_ADDR).unwrap(), 100);
        for slot in 0..CANDIDATE_SLOTS {
            assert!(store.read_flag(enabled_flag_addr(slot)).unwrap());
            assert_eq!(store.read16(vote_count_addr(slot)).unwrap(), 0);
        }
    }
}
