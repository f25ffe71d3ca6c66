// famicore - NES 2A03 CPU and memory-bus emulator core
//
// The crate is organized around three layers: the Bus (CPU-visible memory
// map), the Cpu (fetch-decode-execute interpreter), and the debug/trace
// tooling used to diff execution against the nestest golden log. The
// Emulator type ties them together for the CLI front-end.

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod emulator;

// Re-export main types for convenience
pub use bus::Bus;
pub use cartridge::{Cartridge, INesHeader, Mapper, Mirroring, RomError};
pub use cpu::{Cpu, CpuError};
pub use debug::{
    disassemble_count, disassemble_instruction, disassemble_range, CpuState,
    DisassembledInstruction, LogLevel, Logger, TraceEntry,
};
pub use emulator::{Emulator, EmulatorConfig, RecentRoms};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_components() {
        // All core components can be instantiated together
        let _cpu = Cpu::new();
        let _bus = Bus::new();
        let _logger = Logger::new();
    }
}
