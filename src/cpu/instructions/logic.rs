// Logical instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;
use crate::cpu::Cpu;

impl Cpu {
    /// AND - Bitwise AND with Accumulator. Sets Z and N.
    pub fn and(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a &= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Bitwise OR with Accumulator. Sets Z and N.
    pub fn ora(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a |= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Bitwise Exclusive OR with Accumulator. Sets Z and N.
    pub fn eor(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        self.a ^= self.read_operand(bus, addr_result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test. Z from `A & M`; N and V copied straight from bits 7
    /// and 6 of the memory operand. A is not modified.
    pub fn bit(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.set_zero(self.a & value == 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
    }
}
