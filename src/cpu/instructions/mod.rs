// Instructions module - CPU operations grouped by semantic family

pub mod arithmetic;
pub mod branch;
pub mod compare;
pub mod flags;
pub mod jump_subroutine;
pub mod load_store;
pub mod logic;
pub mod miscellaneous;
pub mod shift_rotate;
pub mod stack;
pub mod transfer;

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;

impl crate::cpu::Cpu {
    /// Fetch the operand an instruction consumes: the immediate/accumulator
    /// byte when the addressing mode produced one, otherwise the byte at the
    /// effective address.
    #[inline]
    pub(crate) fn read_operand(&self, bus: &Bus, addr_result: &AddressingResult) -> u8 {
        match addr_result.value {
            Some(value) => value,
            None => bus.read(addr_result.address),
        }
    }
}
