// Opcode decode table
//
// One record per opcode byte: mnemonic (for the trace), addressing mode,
// instruction length, base cycle cost, and whether the instruction pays the
// extra cycle when indexing crosses a page. Illegal opcodes carry zero
// cycles and `legal = false`; the decoder rejects them before execution, so
// their entries are never billed.
//
// Base cycle values are the canonical 2A03 costs. Branch and page-cross
// surcharges are added at execution time.

use crate::cpu::addressing::AddressingMode as M;

/// Static description of one opcode.
pub struct OpcodeInfo {
    pub mnemonic: &'static str,
    pub mode: M,
    /// Total instruction length in bytes, opcode included
    pub bytes: u8,
    /// Base cycle cost before surcharges
    pub cycles: u8,
    /// Whether a page cross during indexing adds one cycle
    pub page_cycle: bool,
    pub legal: bool,
}

const fn op(mnemonic: &'static str, mode: M, bytes: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle: false,
        legal: true,
    }
}

/// Same as `op`, for the read instructions that pay the index page-cross
/// penalty. Stores use plain `op` even in indexed modes.
const fn op_px(mnemonic: &'static str, mode: M, bytes: u8, cycles: u8) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
        page_cycle: true,
        legal: true,
    }
}

const ILL: OpcodeInfo = OpcodeInfo {
    mnemonic: "???",
    mode: M::Implied,
    bytes: 1,
    cycles: 0,
    page_cycle: false,
    legal: false,
};

/// The full 256-entry decode table, indexed by opcode byte.
pub static OPCODE_TABLE: [OpcodeInfo; 256] = [
    // 0x00 - 0x0F
    op("BRK", M::Implied, 1, 7),
    op("ORA", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    ILL,
    op("ORA", M::ZeroPage, 2, 3),
    op("ASL", M::ZeroPage, 2, 5),
    ILL,
    op("PHP", M::Implied, 1, 3),
    op("ORA", M::Immediate, 2, 2),
    op("ASL", M::Accumulator, 1, 2),
    ILL,
    ILL,
    op("ORA", M::Absolute, 3, 4),
    op("ASL", M::Absolute, 3, 6),
    ILL,
    // 0x10 - 0x1F
    op("BPL", M::Relative, 2, 2),
    op_px("ORA", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("ORA", M::ZeroPageX, 2, 4),
    op("ASL", M::ZeroPageX, 2, 6),
    ILL,
    op("CLC", M::Implied, 1, 2),
    op_px("ORA", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("ORA", M::AbsoluteX, 3, 4),
    op("ASL", M::AbsoluteX, 3, 7),
    ILL,
    // 0x20 - 0x2F
    op("JSR", M::Absolute, 3, 6),
    op("AND", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    op("BIT", M::ZeroPage, 2, 3),
    op("AND", M::ZeroPage, 2, 3),
    op("ROL", M::ZeroPage, 2, 5),
    ILL,
    op("PLP", M::Implied, 1, 4),
    op("AND", M::Immediate, 2, 2),
    op("ROL", M::Accumulator, 1, 2),
    ILL,
    op("BIT", M::Absolute, 3, 4),
    op("AND", M::Absolute, 3, 4),
    op("ROL", M::Absolute, 3, 6),
    ILL,
    // 0x30 - 0x3F
    op("BMI", M::Relative, 2, 2),
    op_px("AND", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("AND", M::ZeroPageX, 2, 4),
    op("ROL", M::ZeroPageX, 2, 6),
    ILL,
    op("SEC", M::Implied, 1, 2),
    op_px("AND", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("AND", M::AbsoluteX, 3, 4),
    op("ROL", M::AbsoluteX, 3, 7),
    ILL,
    // 0x40 - 0x4F
    op("RTI", M::Implied, 1, 6),
    op("EOR", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    ILL,
    op("EOR", M::ZeroPage, 2, 3),
    op("LSR", M::ZeroPage, 2, 5),
    ILL,
    op("PHA", M::Implied, 1, 3),
    op("EOR", M::Immediate, 2, 2),
    op("LSR", M::Accumulator, 1, 2),
    ILL,
    op("JMP", M::Absolute, 3, 3),
    op("EOR", M::Absolute, 3, 4),
    op("LSR", M::Absolute, 3, 6),
    ILL,
    // 0x50 - 0x5F
    op("BVC", M::Relative, 2, 2),
    op_px("EOR", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("EOR", M::ZeroPageX, 2, 4),
    op("LSR", M::ZeroPageX, 2, 6),
    ILL,
    op("CLI", M::Implied, 1, 2),
    op_px("EOR", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("EOR", M::AbsoluteX, 3, 4),
    op("LSR", M::AbsoluteX, 3, 7),
    ILL,
    // 0x60 - 0x6F
    op("RTS", M::Implied, 1, 6),
    op("ADC", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    ILL,
    op("ADC", M::ZeroPage, 2, 3),
    op("ROR", M::ZeroPage, 2, 5),
    ILL,
    op("PLA", M::Implied, 1, 4),
    op("ADC", M::Immediate, 2, 2),
    op("ROR", M::Accumulator, 1, 2),
    ILL,
    op("JMP", M::Indirect, 3, 5),
    op("ADC", M::Absolute, 3, 4),
    op("ROR", M::Absolute, 3, 6),
    ILL,
    // 0x70 - 0x7F
    op("BVS", M::Relative, 2, 2),
    op_px("ADC", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("ADC", M::ZeroPageX, 2, 4),
    op("ROR", M::ZeroPageX, 2, 6),
    ILL,
    op("SEI", M::Implied, 1, 2),
    op_px("ADC", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("ADC", M::AbsoluteX, 3, 4),
    op("ROR", M::AbsoluteX, 3, 7),
    ILL,
    // 0x80 - 0x8F
    ILL,
    op("STA", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    op("STY", M::ZeroPage, 2, 3),
    op("STA", M::ZeroPage, 2, 3),
    op("STX", M::ZeroPage, 2, 3),
    ILL,
    op("DEY", M::Implied, 1, 2),
    ILL,
    op("TXA", M::Implied, 1, 2),
    ILL,
    op("STY", M::Absolute, 3, 4),
    op("STA", M::Absolute, 3, 4),
    op("STX", M::Absolute, 3, 4),
    ILL,
    // 0x90 - 0x9F
    op("BCC", M::Relative, 2, 2),
    op("STA", M::IndirectIndexed, 2, 6),
    ILL,
    ILL,
    op("STY", M::ZeroPageX, 2, 4),
    op("STA", M::ZeroPageX, 2, 4),
    op("STX", M::ZeroPageY, 2, 4),
    ILL,
    op("TYA", M::Implied, 1, 2),
    op("STA", M::AbsoluteY, 3, 5),
    op("TXS", M::Implied, 1, 2),
    ILL,
    ILL,
    op("STA", M::AbsoluteX, 3, 5),
    ILL,
    ILL,
    // 0xA0 - 0xAF
    op("LDY", M::Immediate, 2, 2),
    op("LDA", M::IndexedIndirect, 2, 6),
    op("LDX", M::Immediate, 2, 2),
    ILL,
    op("LDY", M::ZeroPage, 2, 3),
    op("LDA", M::ZeroPage, 2, 3),
    op("LDX", M::ZeroPage, 2, 3),
    ILL,
    op("TAY", M::Implied, 1, 2),
    op("LDA", M::Immediate, 2, 2),
    op("TAX", M::Implied, 1, 2),
    ILL,
    op("LDY", M::Absolute, 3, 4),
    op("LDA", M::Absolute, 3, 4),
    op("LDX", M::Absolute, 3, 4),
    ILL,
    // 0xB0 - 0xBF
    op("BCS", M::Relative, 2, 2),
    op_px("LDA", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    op("LDY", M::ZeroPageX, 2, 4),
    op("LDA", M::ZeroPageX, 2, 4),
    op("LDX", M::ZeroPageY, 2, 4),
    ILL,
    op("CLV", M::Implied, 1, 2),
    op_px("LDA", M::AbsoluteY, 3, 4),
    op("TSX", M::Implied, 1, 2),
    ILL,
    op_px("LDY", M::AbsoluteX, 3, 4),
    op_px("LDA", M::AbsoluteX, 3, 4),
    op_px("LDX", M::AbsoluteY, 3, 4),
    ILL,
    // 0xC0 - 0xCF
    op("CPY", M::Immediate, 2, 2),
    op("CMP", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    op("CPY", M::ZeroPage, 2, 3),
    op("CMP", M::ZeroPage, 2, 3),
    op("DEC", M::ZeroPage, 2, 5),
    ILL,
    op("INY", M::Implied, 1, 2),
    op("CMP", M::Immediate, 2, 2),
    op("DEX", M::Implied, 1, 2),
    ILL,
    op("CPY", M::Absolute, 3, 4),
    op("CMP", M::Absolute, 3, 4),
    op("DEC", M::Absolute, 3, 6),
    ILL,
    // 0xD0 - 0xDF
    op("BNE", M::Relative, 2, 2),
    op_px("CMP", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("CMP", M::ZeroPageX, 2, 4),
    op("DEC", M::ZeroPageX, 2, 6),
    ILL,
    op("CLD", M::Implied, 1, 2),
    op_px("CMP", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("CMP", M::AbsoluteX, 3, 4),
    op("DEC", M::AbsoluteX, 3, 7),
    ILL,
    // 0xE0 - 0xEF
    op("CPX", M::Immediate, 2, 2),
    op("SBC", M::IndexedIndirect, 2, 6),
    ILL,
    ILL,
    op("CPX", M::ZeroPage, 2, 3),
    op("SBC", M::ZeroPage, 2, 3),
    op("INC", M::ZeroPage, 2, 5),
    ILL,
    op("INX", M::Implied, 1, 2),
    op("SBC", M::Immediate, 2, 2),
    op("NOP", M::Implied, 1, 2),
    ILL,
    op("CPX", M::Absolute, 3, 4),
    op("SBC", M::Absolute, 3, 4),
    op("INC", M::Absolute, 3, 6),
    ILL,
    // 0xF0 - 0xFF
    op("BEQ", M::Relative, 2, 2),
    op_px("SBC", M::IndirectIndexed, 2, 5),
    ILL,
    ILL,
    ILL,
    op("SBC", M::ZeroPageX, 2, 4),
    op("INC", M::ZeroPageX, 2, 6),
    ILL,
    op("SED", M::Implied, 1, 2),
    op_px("SBC", M::AbsoluteY, 3, 4),
    ILL,
    ILL,
    ILL,
    op_px("SBC", M::AbsoluteX, 3, 4),
    op("INC", M::AbsoluteX, 3, 7),
    ILL,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_151_legal_opcodes() {
        let legal = OPCODE_TABLE.iter().filter(|info| info.legal).count();
        assert_eq!(legal, 151, "the official 6502 set has 151 opcodes");
    }

    #[test]
    fn test_illegal_entries_have_zero_cycles() {
        for (opcode, info) in OPCODE_TABLE.iter().enumerate() {
            if !info.legal {
                assert_eq!(info.cycles, 0, "opcode {:#04X}", opcode);
                assert_eq!(info.mnemonic, "???", "opcode {:#04X}", opcode);
            }
        }
    }

    #[test]
    fn test_spot_check_common_opcodes() {
        let lda_imm = &OPCODE_TABLE[0xA9];
        assert_eq!(lda_imm.mnemonic, "LDA");
        assert_eq!(lda_imm.mode, M::Immediate);
        assert_eq!(lda_imm.bytes, 2);
        assert_eq!(lda_imm.cycles, 2);

        let jsr = &OPCODE_TABLE[0x20];
        assert_eq!(jsr.mnemonic, "JSR");
        assert_eq!(jsr.bytes, 3);
        assert_eq!(jsr.cycles, 6);

        let jmp_ind = &OPCODE_TABLE[0x6C];
        assert_eq!(jmp_ind.mode, M::Indirect);
        assert_eq!(jmp_ind.cycles, 5);

        let brk = &OPCODE_TABLE[0x00];
        assert_eq!(brk.mnemonic, "BRK");
        assert_eq!(brk.cycles, 7);
    }

    #[test]
    fn test_stores_never_pay_the_page_cross_penalty() {
        for (opcode, info) in OPCODE_TABLE.iter().enumerate() {
            if matches!(info.mnemonic, "STA" | "STX" | "STY") {
                assert!(
                    !info.page_cycle,
                    "store opcode {:#04X} must not take the oops cycle",
                    opcode
                );
            }
        }
    }

    #[test]
    fn test_indexed_reads_pay_the_page_cross_penalty() {
        for opcode in [0xBDu8, 0xB9, 0xB1, 0x7D, 0xF9, 0x1D, 0x5D, 0xD9, 0xBE, 0xBC] {
            assert!(
                OPCODE_TABLE[opcode as usize].page_cycle,
                "opcode {:#04X} should take the oops cycle",
                opcode
            );
        }
    }

    #[test]
    fn test_byte_lengths_match_modes() {
        for (opcode, info) in OPCODE_TABLE.iter().enumerate() {
            if !info.legal {
                continue;
            }
            let expected = match info.mode {
                M::Implied | M::Accumulator => 1,
                M::Immediate
                | M::ZeroPage
                | M::ZeroPageX
                | M::ZeroPageY
                | M::Relative
                | M::IndexedIndirect
                | M::IndirectIndexed => 2,
                M::Absolute | M::AbsoluteX | M::AbsoluteY | M::Indirect => 3,
            };
            assert_eq!(info.bytes, expected, "opcode {:#04X}", opcode);
        }
    }
}
