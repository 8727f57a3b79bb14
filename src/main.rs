use clap::Parser;
use std::fs;
use std::path::PathBuf;

use rust_cpm::cpu::{Cpu, CpuState, Variant};

/// Runs a CP/M 2.2 .COM image on an emulated Intel 8080.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// 8080 binary image, loaded into the TPA at 0100h
    image: PathBuf,

    /// Decode 08h/D9h as the Z80 exchanges EX AF,AF' and EXX
    #[arg(long)]
    z80: bool,

    /// Append an instruction trace to trace.log
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let image = fs::read(&args.image)
        .map_err(|e| format!("{}: {}", args.image.display(), e))?;

    let variant = if args.z80 { Variant::Z80 } else { Variant::I8080 };
    let mut cpu = Cpu::new(variant);
    cpu.bus.trace = args.trace;
    cpu.load_image(&image);

    while cpu.state == CpuState::Running {
        cpu.step().map_err(|e| e.to_string())?;
    }

    Ok(())
}
