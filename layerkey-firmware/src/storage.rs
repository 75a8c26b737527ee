use embedded_storage::nor_flash::{NorFlash, NorFlashError, NorFlashErrorKind};

const RECORD_MAGIC: u8 = 0x4c;
const RECORD_LEN: u32 = 4;
const ERASED: [u8; RECORD_LEN as usize] = [0xff; RECORD_LEN as usize];

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    NotAligned,
    OutOfRange,
    Flash,
}

fn flash_error<E: NorFlashError>(err: E) -> StorageError {
    match err.kind() {
        NorFlashErrorKind::NotAligned => StorageError::NotAligned,
        NorFlashErrorKind::OutOfBounds => StorageError::OutOfRange,
        _ => StorageError::Flash,
    }
}

/// Where the chosen default layer survives power cycles.
pub trait DefaultLayerStore {
    fn read_default_layer(&mut self) -> Option<u8>;
    fn write_default_layer(&mut self, layer: u8) -> Result<(), StorageError>;
}

/// Nothing is persisted; every boot starts on layer 0.
#[derive(Debug, Default)]
pub struct NoStore;
impl DefaultLayerStore for NoStore {
    fn read_default_layer(&mut self) -> Option<u8> {
        None
    }

    fn write_default_layer(&mut self, _layer: u8) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Append-only log of default layer records within a reserved flash region. Each record is
/// `[magic, layer, !layer, 0]`; the last valid record wins. When the region is full it is erased
/// and the log restarts.
pub struct NorFlashStore<'d, F: NorFlash> {
    flash: &'d mut F,
    base: u32,
    size: u32,
    next: u32,
    current: Option<u8>,
}

impl<'d, F: NorFlash> NorFlashStore<'d, F> {
    pub fn new(flash: &'d mut F, base: u32, size: u32) -> Result<Self, StorageError> {
        let erase = F::ERASE_SIZE as u32;
        if base % erase != 0
            || size % erase != 0
            || RECORD_LEN % F::WRITE_SIZE as u32 != 0
            || RECORD_LEN % F::READ_SIZE as u32 != 0
        {
            return Err(StorageError::NotAligned);
        }
        if size < RECORD_LEN || (base + size) as usize > flash.capacity() {
            return Err(StorageError::OutOfRange);
        }

        let mut store = Self {
            flash,
            base,
            size,
            next: size,
            current: None,
        };
        store.scan()?;
        Ok(store)
    }

    pub fn flash(&mut self) -> &mut F {
        self.flash
    }

    fn scan(&mut self) -> Result<(), StorageError> {
        let mut buf = [0u8; RECORD_LEN as usize];
        let mut offset = 0;
        while offset + RECORD_LEN <= self.size {
            self.flash
                .read(self.base + offset, &mut buf)
                .map_err(flash_error)?;
            if buf == ERASED {
                self.next = offset;
                return Ok(());
            }
            match decode(&buf) {
                Some(layer) => self.current = Some(layer),
                None => crate::warn!("corrupt default layer record at {}", offset),
            }
            offset += RECORD_LEN;
        }
        self.next = self.size;
        Ok(())
    }
}

impl<F: NorFlash> DefaultLayerStore for NorFlashStore<'_, F> {
    fn read_default_layer(&mut self) -> Option<u8> {
        self.current
    }

    fn write_default_layer(&mut self, layer: u8) -> Result<(), StorageError> {
        if self.current == Some(layer) {
            return Ok(());
        }
        if self.next + RECORD_LEN > self.size {
            self.flash
                .erase(self.base, self.base + self.size)
                .map_err(flash_error)?;
            self.next = 0;
        }
        self.flash
            .write(self.base + self.next, &[RECORD_MAGIC, layer, !layer, 0])
            .map_err(flash_error)?;
        self.next += RECORD_LEN;
        self.current = Some(layer);
        Ok(())
    }
}

fn decode(buf: &[u8; RECORD_LEN as usize]) -> Option<u8> {
    (buf[0] == RECORD_MAGIC && buf[1] == !buf[2] && buf[3] == 0).then_some(buf[1])
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod test;
