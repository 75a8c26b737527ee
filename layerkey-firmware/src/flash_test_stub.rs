use embedded_storage::nor_flash::{
    ErrorType, NorFlash, NorFlashError, NorFlashErrorKind, ReadNorFlash,
};

extern crate std;

#[derive(Debug)]
pub enum FlashStubError {
    Failed,
    OutOfBounds,
}
impl NorFlashError for FlashStubError {
    fn kind(&self) -> NorFlashErrorKind {
        match self {
            FlashStubError::Failed => NorFlashErrorKind::Other,
            FlashStubError::OutOfBounds => NorFlashErrorKind::OutOfBounds,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FlashOp {
    Erase(u32, u32),
    Write(u32, std::vec::Vec<u8>),
}

/// In-memory NOR flash: writes can only clear bits and erase sets a range back to `0xff`.
pub struct NorFlashStub<const FLASH_SIZE: usize> {
    pub buf: [u8; FLASH_SIZE],
    pub ops: std::vec::Vec<FlashOp>,
    /// Make every erase and write fail.
    pub fail: bool,
}
impl<const FLASH_SIZE: usize> NorFlashStub<FLASH_SIZE> {
    pub fn erased() -> Self {
        Self {
            buf: [0xff; FLASH_SIZE],
            ..Default::default()
        }
    }

    fn check(&self, from: usize, to: usize) -> Result<(), FlashStubError> {
        if self.fail {
            Err(FlashStubError::Failed)
        } else if from > to || to > FLASH_SIZE {
            Err(FlashStubError::OutOfBounds)
        } else {
            Ok(())
        }
    }
}
impl<const FLASH_SIZE: usize> Default for NorFlashStub<FLASH_SIZE> {
    fn default() -> Self {
        Self {
            buf: [0; FLASH_SIZE],
            ops: std::vec::Vec::new(),
            fail: false,
        }
    }
}
impl<const FLASH_SIZE: usize> ErrorType for NorFlashStub<FLASH_SIZE> {
    type Error = FlashStubError;
}
impl<const FLASH_SIZE: usize> ReadNorFlash for NorFlashStub<FLASH_SIZE> {
    const READ_SIZE: usize = 1;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        let offset = offset as usize;
        if offset + bytes.len() > FLASH_SIZE {
            return Err(FlashStubError::OutOfBounds);
        }
        bytes.copy_from_slice(&self.buf[offset..offset + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        FLASH_SIZE
    }
}
impl<const FLASH_SIZE: usize> NorFlash for NorFlashStub<FLASH_SIZE> {
    const WRITE_SIZE: usize = 4;

    const ERASE_SIZE: usize = 64;

    fn erase(&mut self, from: u32, to: u32) -> Result<(), Self::Error> {
        self.check(from as usize, to as usize)?;
        self.ops.push(FlashOp::Erase(from, to));
        for b in self.buf[from as usize..to as usize].iter_mut() {
            *b = 0xff;
        }
        Ok(())
    }

    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        let start = offset as usize;
        self.check(start, start + bytes.len())?;
        self.ops.push(FlashOp::Write(offset, bytes.into()));
        for (t, f) in self.buf[start..start + bytes.len()].iter_mut().zip(bytes.iter()) {
            *t &= *f;
        }
        Ok(())
    }
}
