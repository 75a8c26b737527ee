use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};

/// A key switch transition at a matrix position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanKey {
    row: u8,
    col: u8,
}
impl ScanKey {
    pub fn new(row: u8, col: u8, is_down: bool) -> Self {
        Self {
            row: row | if is_down { 0x80 } else { 0 },
            col,
        }
    }

    pub fn row(&self) -> usize {
        (self.row & 0x7f) as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }

    pub fn is_down(&self) -> bool {
        self.row & 0x80 == 0x80
    }

    pub fn same_key(&self, other: ScanKey) -> bool {
        self.col == other.col && self.row & 0x7f == other.row & 0x7f
    }
}

/// A [ScanKey] stamped with the millisecond it was seen.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedScanKey(pub ScanKey, pub u64);
impl TimedScanKey {
    pub fn same_key(&self, other: &TimedScanKey) -> bool {
        self.0.same_key(other.0)
    }

    pub fn is_down(&self) -> bool {
        self.0.is_down()
    }

    pub fn time(&self) -> u64 {
        self.1
    }
}

/// Inbound transitions from the matrix scanner.
pub struct ScanChannel<M: RawMutex, const N: usize>(Channel<M, ScanKey, N>);
impl<M: RawMutex, const N: usize> Default for ScanChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> ScanChannel<M, N> {
    pub async fn receive(&self) -> ScanKey {
        self.0.receive().await
    }

    pub fn try_send(&self, msg: ScanKey) {
        if self.0.try_send(msg).is_err() {
            crate::warn!("scan channel full, dropped {:?}", msg);
        }
    }
}
