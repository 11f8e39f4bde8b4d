use clap::Parser;
use log::error;
use mos6502::mos6502::{Bus, InstructionSignature, NesBus, StatusFlag, MOS6502};
use rom::nesrom::NESROM;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_TICKS: u64 = 5_000;

/// Loads an iNES cartridge, runs its CPU for a fixed number of host ticks, and optionally
/// traces every instruction it executes.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to an iNES (`.nes`) ROM file.
    rom_path: PathBuf,

    /// Number of host ticks to run the CPU for.
    #[arg(long, default_value_t = DEFAULT_TICKS)]
    ticks: u64,

    /// Print a trace line for every instruction the CPU executes.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let bytes = std::fs::read(&args.rom_path)
        .map_err(|err| format!("failed to read {}: {}", args.rom_path.display(), err))?;

    let cartridge = NESROM::from_bytes(bytes).map_err(|err| format!("failed to load cartridge: {}", err))?;

    let mut bus = NesBus::new();
    bus.load_prg(&cartridge.prg_rom);

    let mut cpu = MOS6502::new();
    cpu.reset(&bus);

    for _ in 0..args.ticks {
        if args.verbose && cpu.pending_cycles() == 0 {
            print_trace_line(&cpu, &bus);
        }

        if let Err(err) = cpu.tick(&mut bus) {
            return Err(format!("emulation halted: {}", err));
        }
    }

    Ok(())
}

/// `PPPP MNE OO  a:AA  x:XX  y:YY  sp:SS  flags:FFFFFFFF(HH)  cycles:CCCCC`
fn print_trace_line(cpu: &MOS6502, bus: &impl Bus) {
    let pc = cpu.pc();
    let opcode_byte = bus.read_u8(pc);
    let mnemonic = InstructionSignature::decode(opcode_byte)
        .map(|signature| format!("{:?}", signature.opcode))
        .unwrap_or_else(|| "???".to_string());

    println!(
        "{:04X} {} {:02X}  a:{:02X}  x:{:02X}  y:{:02X}  sp:{:02X}  flags:{}({:02X})  cycles:{}",
        pc,
        mnemonic,
        opcode_byte,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.sp(),
        format_flags(cpu),
        cpu.status().0,
        cpu.cycle_count(),
    );
}

/// Renders the seven observable flag letters in `N V B D I Z C` order: uppercase and set,
/// or a dash when clear. `Unused` always reads 1 but isn't part of this diagnostic string.
fn format_flags(cpu: &MOS6502) -> String {
    let status = cpu.status();
    [
        (StatusFlag::Negative, 'N'),
        (StatusFlag::Overflow, 'V'),
        (StatusFlag::Break, 'B'),
        (StatusFlag::DecimalMode, 'D'),
        (StatusFlag::InterruptDisable, 'I'),
        (StatusFlag::Zero, 'Z'),
        (StatusFlag::Carry, 'C'),
    ]
    .iter()
    .map(|(flag, letter)| if status.get(*flag) { *letter } else { '-' })
    .collect()
}
