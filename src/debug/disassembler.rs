// Disassembler - turns raw bytes back into 6502 assembly
//
// Works straight off the opcode table, so its idea of instruction lengths
// always agrees with the interpreter's.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::OPCODE_TABLE;

/// One disassembled instruction.
#[derive(Debug, Clone)]
pub struct DisassembledInstruction {
    /// Address the instruction was read from
    pub address: u16,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    /// Operand bytes in memory order (0 to 2 of them)
    pub operands: Vec<u8>,
    /// Total length in bytes, opcode included
    pub length: u8,
}

impl DisassembledInstruction {
    /// Format as assembly, e.g. `LDA #$42` or `JMP ($1234)`.
    pub fn format_assembly(&self) -> String {
        let operand = match self.mode {
            AddressingMode::Implied => String::new(),
            AddressingMode::Accumulator => " A".to_string(),
            AddressingMode::Immediate => format!(" #${:02X}", self.operands[0]),
            AddressingMode::ZeroPage => format!(" ${:02X}", self.operands[0]),
            AddressingMode::ZeroPageX => format!(" ${:02X},X", self.operands[0]),
            AddressingMode::ZeroPageY => format!(" ${:02X},Y", self.operands[0]),
            AddressingMode::Relative => {
                let offset = self.operands[0] as i8;
                let target = self.address.wrapping_add(2).wrapping_add(offset as u16);
                format!(" ${:04X}", target)
            }
            AddressingMode::Absolute => format!(" ${:04X}", self.operand_u16()),
            AddressingMode::AbsoluteX => format!(" ${:04X},X", self.operand_u16()),
            AddressingMode::AbsoluteY => format!(" ${:04X},Y", self.operand_u16()),
            AddressingMode::Indirect => format!(" (${:04X})", self.operand_u16()),
            AddressingMode::IndexedIndirect => format!(" (${:02X},X)", self.operands[0]),
            AddressingMode::IndirectIndexed => format!(" (${:02X}),Y", self.operands[0]),
        };
        format!("{}{}", self.mnemonic, operand)
    }

    fn operand_u16(&self) -> u16 {
        u16::from_le_bytes([self.operands[0], self.operands[1]])
    }
}

/// Disassemble the instruction at `addr`.
///
/// Illegal opcodes come back as a one-byte `???` entry, so a disassembly
/// listing can keep walking over data bytes.
pub fn disassemble_instruction(addr: u16, bus: &Bus) -> DisassembledInstruction {
    let opcode = bus.read(addr);
    let info = &OPCODE_TABLE[opcode as usize];

    let operands = (1..info.bytes)
        .map(|i| bus.read(addr.wrapping_add(i as u16)))
        .collect();

    DisassembledInstruction {
        address: addr,
        opcode,
        mnemonic: info.mnemonic,
        mode: info.mode,
        operands,
        length: info.bytes,
    }
}

/// Disassemble every instruction whose first byte lies in `start..=end`.
pub fn disassemble_range(start: u16, end: u16, bus: &Bus) -> Vec<DisassembledInstruction> {
    let mut result = Vec::new();
    let mut addr = start;
    while addr <= end {
        let instruction = disassemble_instruction(addr, bus);
        let length = instruction.length as u16;
        result.push(instruction);
        match addr.checked_add(length) {
            Some(next) => addr = next,
            None => break,
        }
    }
    result
}

/// Disassemble `count` consecutive instructions starting at `start`.
pub fn disassemble_count(start: u16, count: usize, bus: &Bus) -> Vec<DisassembledInstruction> {
    let mut result = Vec::with_capacity(count);
    let mut addr = start;
    for _ in 0..count {
        let instruction = disassemble_instruction(addr, bus);
        addr = addr.wrapping_add(instruction.length as u16);
        result.push(instruction);
    }
    result
}
