// Arithmetic instructions
//
// ADC and SBC share one adder: SBC is ADC with the operand complemented,
// which also gives C its "no borrow" meaning. Decimal mode has no effect on
// the 2A03, so the D flag is ignored here.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;

impl Cpu {
    /// ADC - Add with Carry: `A = A + M + C`.
    ///
    /// C is the carry out of bit 7. V is signed overflow, set when both
    /// operands agree in sign and the result does not:
    /// `((A ^ r) & (M ^ r) & 0x80) != 0`. Z and N from the result.
    pub fn adc(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(value);
    }

    /// SBC - Subtract with Carry: `A = A - M - (1 - C)`, computed as
    /// `A + !M + C`. Same flag rules as ADC; C set means no borrow.
    pub fn sbc(&mut self, bus: &Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.add_to_accumulator(!value);
    }

    #[inline]
    fn add_to_accumulator(&mut self, value: u8) {
        let carry = self.get_carry() as u16;
        let sum = self.a as u16 + value as u16 + carry;

        self.set_carry(sum > 0xFF);

        let result = sum as u8;
        self.set_overflow((self.a ^ result) & (value ^ result) & 0x80 != 0);

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// INC - Increment Memory, wrapping. Sets Z and N.
    pub fn inc(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let result = bus.read(addr_result.address).wrapping_add(1);
        bus.write(addr_result.address, result);
        self.update_zero_and_negative_flags(result);
    }

    /// DEC - Decrement Memory, wrapping. Sets Z and N.
    pub fn dec(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let result = bus.read(addr_result.address).wrapping_sub(1);
        bus.write(addr_result.address, result);
        self.update_zero_and_negative_flags(result);
    }

    /// INX - Increment X. Sets Z and N.
    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - Increment Y. Sets Z and N.
    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - Decrement X. Sets Z and N.
    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - Decrement Y. Sets Z and N.
    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
