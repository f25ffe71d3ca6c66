// Debug module - disassembly and trace logging

pub mod disassembler;
pub mod logger;

pub use disassembler::{
    disassemble_count, disassemble_instruction, disassemble_range, DisassembledInstruction,
};
pub use logger::{CpuState, LogLevel, Logger, TraceEntry};
