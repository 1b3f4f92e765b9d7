//! The linear 4096-word data memory.
//!
//! Address bounds-checking happens once, in Execute, when the address is
//! first computed (see `core::stages::execute`); by the time Memory reads
//! or writes a slot, the address is already known good.

pub const DATA_MEMORY_WORDS: usize = 4096;

/// The fault boundary is inclusive of 4096 itself (an address must be
/// strictly greater than 4096, or negative, to fault) even though the
/// memory is described as 4096 words; one guard word is kept past the
/// nominal end so that boundary address does not panic on access.
const STORAGE_WORDS: usize = DATA_MEMORY_WORDS + 1;

pub struct DataMemory {
    cells: Vec<i32>,
}

impl DataMemory {
    pub fn new() -> Self {
        Self {
            cells: vec![0; STORAGE_WORDS],
        }
    }

    pub fn read(&self, addr: i32) -> i32 {
        self.cells[addr as usize]
    }

    pub fn write(&mut self, addr: i32, val: i32) {
        self.cells[addr as usize] = val;
    }

    /// Returns whether `addr` is a valid data memory index, per §4.9: a
    /// fault is raised only when the address is negative or strictly
    /// greater than 4096.
    pub fn in_bounds(addr: i32) -> bool {
        addr >= 0 && addr <= DATA_MEMORY_WORDS as i32
    }

    /// The leading `count` words, for the final state dump.
    pub fn window(&self, count: usize) -> &[i32] {
        &self.cells[..count.min(self.cells.len())]
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::new()
    }
}
