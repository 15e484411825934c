//! File-backed EEPROM image.
//!
//! The whole image is held in memory and flushed to disk on `commit`, with
//! a short settle sleep standing in for the part's write latency. Missing
//! images are provisioned with election defaults so a first boot behaves
//! like a freshly reset device.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use ballotbox_core::storage::{IMAGE_BYTES, MemStore, TallyStore};
use log::debug;

const SETTLE_DELAY: Duration = Duration::from_millis(4);

pub struct FileStore {
    path: PathBuf,
    image: [u8; IMAGE_BYTES],
}

impl FileStore {
    pub fn open(path: &str) -> io::Result<Self> {
        let path = PathBuf::from(path);

        let image = match fs::read(&path) {
            Ok(bytes) if bytes.len() == IMAGE_BYTES => {
                let mut image = [0u8; IMAGE_BYTES];
                image.copy_from_slice(&bytes);
                image
            }
            Ok(bytes) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("image is {} bytes, expected {IMAGE_BYTES}", bytes.len()),
                ));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let image = *MemStore::with_defaults().image();
                fs::write(&path, image)?;
                debug!("eeprom: provisioned fresh image");
                image
            }
            Err(err) => return Err(err),
        };

        Ok(Self { path, image })
    }
}

impl TallyStore for FileStore {
    type Error = io::Error;

    fn read_byte(&mut self, addr: u16) -> Result<u8, Self::Error> {
        self.image
            .get(addr as usize)
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "address out of range"))
    }

    fn write_byte(&mut self, addr: u16, value: u8) -> Result<(), Self::Error> {
        let byte = self
            .image
            .get_mut(addr as usize)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "address out of range"))?;
        *byte = value;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        fs::write(&self.path, self.image)?;
        thread::sleep(SETTLE_DELAY);
        debug!("eeprom: committed image");
        Ok(())
    }
}
