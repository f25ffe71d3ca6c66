// Emulator module - ties the CPU, bus, and cartridge together
//
// The front-end talks to this facade: load a ROM, then step (or run) the
// CPU. Tracing is read off the CPU before each step so the lines match the
// golden-log convention of showing pre-execution state.

mod config;
mod recent_roms;

pub use config::{EmulatorConfig, RunConfig, TraceConfig};
pub use recent_roms::{RecentRomEntry, RecentRoms};

use crate::bus::Bus;
use crate::cartridge::mappers::create_mapper;
use crate::cartridge::Cartridge;
use crate::cpu::{Cpu, CpuError};
use std::path::{Path, PathBuf};

/// High-level emulator aggregate.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
}

impl Emulator {
    /// Create an emulator with power-on state and the on-disk (or default)
    /// configuration.
    pub fn new() -> Self {
        Self::with_config(EmulatorConfig::load_or_default())
    }

    /// Create an emulator with an explicit configuration.
    pub fn with_config(config: EmulatorConfig) -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config,
            rom_path: None,
        }
    }

    /// Load an iNES ROM, wire its mapper into the bus, and reset the CPU.
    ///
    /// Applies `run.start_pc` from the configuration after the reset, which
    /// is how the nestest automation entry point is selected.
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let mapper = create_mapper(cartridge)?;

        self.bus.attach_mapper(mapper);
        self.rom_path = Some(path.to_path_buf());

        let mut recent = RecentRoms::load_or_default();
        recent.add(path);
        // A read-only working directory should not fail the load
        let _ = recent.save();

        self.cpu.reset(&mut self.bus);
        if let Some(start_pc) = self.config.run.start_pc {
            self.cpu.pc = start_pc;
        }

        Ok(())
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        self.cpu.step(&mut self.bus)
    }

    /// Whether this instruction should emit a trace line. Debug builds
    /// always trace; release builds follow the configuration.
    fn tracing(&self, executed: u64) -> bool {
        let enabled = cfg!(debug_assertions) || self.config.trace.enabled;
        match self.config.trace.limit {
            Some(limit) => enabled && executed < limit,
            None => enabled,
        }
    }

    /// Run until the configured instruction budget (or `limit`, whichever
    /// is smaller) is exhausted, calling `on_trace` with each trace line.
    ///
    /// Returns the number of instructions executed, or the decode error
    /// that stopped the run.
    pub fn run<F: FnMut(&str)>(
        &mut self,
        limit: Option<u64>,
        mut on_trace: F,
    ) -> Result<u64, CpuError> {
        let budget = match (limit, self.config.run.max_instructions) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };

        let mut executed: u64 = 0;
        loop {
            if let Some(budget) = budget {
                if executed >= budget {
                    return Ok(executed);
                }
            }
            if self.tracing(executed) {
                on_trace(&self.cpu.trace(&self.bus));
            }
            self.cpu.step(&mut self.bus)?;
            executed += 1;
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
