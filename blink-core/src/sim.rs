//! In-memory stand-in for the peripheral bus.

use heapless::{FnvIndexMap, HistoryBuffer};

use crate::pin::Port;
use crate::regs::{Register, RegisterMap};

/// Number of most recent writes kept in the journal.
pub const JOURNAL_DEPTH: usize = 64;

// One AHB1ENR plus three registers for each of the eight ports.
const CAPACITY: usize = 32;

/// A write that reached a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Write {
    pub register: Register,
    pub value: u32,
}

/// Simulated register file keyed by register address.
///
/// Unset registers read as zero. Writes to a GPIO bank whose clock is gated
/// off in `AHB1ENR` are dropped, as on silicon.
pub struct SimRegisters {
    values: FnvIndexMap<usize, u32, CAPACITY>,
    journal: HistoryBuffer<Write, JOURNAL_DEPTH>,
    write_count: usize,
    ignored_writes: usize,
}

impl SimRegisters {
    pub fn new() -> Self {
        SimRegisters {
            values: FnvIndexMap::new(),
            journal: HistoryBuffer::new(),
            write_count: 0,
            ignored_writes: 0,
        }
    }

    /// Presets `reg`, bypassing clock gating and the journal.
    pub fn with(mut self, reg: Register, value: u32) -> Self {
        self.store(reg, value);
        self
    }

    /// Current value of `reg`.
    pub fn value(&self, reg: Register) -> u32 {
        self.values.get(&reg.address()).copied().unwrap_or(0)
    }

    pub fn clock_enabled(&self, port: Port) -> bool {
        self.value(Register::Ahb1Enr) & port.clock_enable_mask() != 0
    }

    /// Accepted writes, oldest first, limited to the last [`JOURNAL_DEPTH`].
    pub fn journal(&self) -> impl Iterator<Item = &Write> + '_ {
        self.journal.oldest_ordered()
    }

    /// Writes accepted since construction.
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Writes dropped because the target bank had no clock.
    pub fn ignored_writes(&self) -> usize {
        self.ignored_writes
    }

    fn store(&mut self, reg: Register, value: u32) {
        // Cannot overflow: there are fewer distinct registers than CAPACITY.
        let _ = self.values.insert(reg.address(), value);
    }
}

impl Default for SimRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterMap for SimRegisters {
    fn read(&self, reg: Register) -> u32 {
        self.value(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        if let Some(port) = reg.port() {
            if !self.clock_enabled(port) {
                self.ignored_writes += 1;
                return;
            }
        }

        self.store(reg, value);
        self.journal.write(Write { register: reg, value });
        self.write_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_registers_read_zero() {
        let sim = SimRegisters::new();
        assert_eq!(sim.read(Register::Odr(Port::A)), 0);
        assert_eq!(sim.read(Register::Ahb1Enr), 0);
    }

    #[test]
    fn gated_bank_drops_writes() {
        let mut sim = SimRegisters::new();
        sim.write(Register::Moder(Port::A), 0x400);

        assert_eq!(sim.value(Register::Moder(Port::A)), 0);
        assert_eq!(sim.ignored_writes(), 1);
        assert_eq!(sim.write_count(), 0);
    }

    #[test]
    fn clocked_bank_accepts_writes() {
        let mut sim = SimRegisters::new();
        sim.write(Register::Ahb1Enr, Port::B.clock_enable_mask());
        sim.write(Register::Odr(Port::B), 0x8000);

        assert_eq!(sim.value(Register::Odr(Port::B)), 0x8000);
        assert_eq!(sim.write_count(), 2);
        assert!(!sim.clock_enabled(Port::A));
    }

    #[test]
    fn presets_skip_the_journal() {
        let sim = SimRegisters::new().with(Register::Odr(Port::C), 0xFFFF);
        assert_eq!(sim.value(Register::Odr(Port::C)), 0xFFFF);
        assert_eq!(sim.journal().count(), 0);
    }

    #[test]
    fn journal_keeps_most_recent_writes() {
        let mut sim = SimRegisters::new();
        for value in 0..(JOURNAL_DEPTH as u32 + 8) {
            sim.write(Register::Ahb1Enr, value);
        }

        let first = sim.journal().next().copied();
        assert_eq!(first.map(|w| w.value), Some(8));
        assert_eq!(sim.journal().count(), JOURNAL_DEPTH);
        assert_eq!(sim.write_count(), JOURNAL_DEPTH + 8);
    }
}
