// Flag set/clear instructions

use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// CLC - Clear Carry.
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// SEC - Set Carry.
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// CLI - Clear Interrupt Disable.
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// SEI - Set Interrupt Disable.
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLD - Clear Decimal. The flag is tracked even though the 2A03 does
    /// no decimal arithmetic.
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// SED - Set Decimal.
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// CLV - Clear Overflow. There is no SEV; V is only ever set by
    /// arithmetic, BIT, and PLP/RTI.
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }
}
