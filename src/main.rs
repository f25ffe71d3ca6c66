// famicore - CLI front-end
//
// Loads the ROM named on the command line and runs the CPU core. Debug
// builds print one nestest-format trace line per instruction; release
// builds do so only when the configuration asks for it.

use famicore::emulator::{Emulator, EmulatorConfig, RecentRoms};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("famicore: No ROM provided");
        eprintln!("Usage: {} <rom_path>", args[0]);

        let recent = RecentRoms::load_or_default();
        if !recent.entries().is_empty() {
            eprintln!();
            eprintln!("Recently played:");
            for entry in recent.entries() {
                eprintln!("  {}  ({})", entry.display_name, entry.path.display());
            }
        }
        process::exit(1);
    }
    let rom_path = &args[1];

    let config = EmulatorConfig::load_or_default();
    let mut emulator = Emulator::with_config(config);

    if let Err(e) = emulator.load_rom(rom_path) {
        eprintln!("famicore: {}", e);
        process::exit(1);
    }

    match emulator.run(None, |line| println!("{}", line)) {
        Ok(executed) => {
            println!("famicore: halted after {} instructions", executed);
        }
        Err(e) => {
            eprintln!("famicore: {}", e);
            process::exit(1);
        }
    }
}
