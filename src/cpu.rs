use bitflags::bitflags;
use std::io;
use std::mem;

use crate::bdos;
use crate::bus::{Bus, RAM_SIZE, TPA_BASE};
use crate::console::{Console, HostConsole};
use crate::instructions;

// Flag bits in their architectural PSW positions, so a packed flag byte for
// PUSH PSW is just the raw bits. Bits 5 and 3 are reserved and stay clear;
// bit 1 is reserved and stays set.
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CpuFlags: u8 {
        const CY  = 0x01;
        const ONE = 0x02;
        const P   = 0x04;
        const AC  = 0x10;
        const Z   = 0x40;
        const S   = 0x80;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    I8080,
    Z80,
}

#[derive(PartialEq, Debug)]
pub enum CpuState {
    Running,
    Halted,
}

/// 8-bit operand of a register-form opcode. `M` is the byte at HL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    M,
    A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegPair {
    BC,
    DE,
    HL,
    SP,
}

/// The Z80 alternate bank, reachable only through EX AF,AF' and EXX.
pub struct ShadowRegs {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub flags: CpuFlags,
}

pub struct Cpu {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    pub sp: u16,
    pub pc: u16,

    flags: CpuFlags,
    pub shadow: ShadowRegs,

    // Interrupt enable latch. Tracked for DI/EI, but nothing ever raises an
    // interrupt on this machine.
    pub inte: bool,

    pub bus: Bus,
    pub state: CpuState,
    pub variant: Variant,
}

impl Cpu {
    pub fn new(variant: Variant) -> Self {
        Self::with_console(variant, Box::new(HostConsole::new()))
    }

    pub fn with_console(variant: Variant, console: Box<dyn Console>) -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            d: 0,
            e: 0,
            h: 0,
            l: 0,
            sp: 0,
            pc: 0,
            flags: Self::reset_flags(),
            shadow: ShadowRegs {
                a: 0,
                b: 0,
                c: 0,
                d: 0,
                e: 0,
                h: 0,
                l: 0,
                flags: Self::reset_flags(),
            },
            inte: false,
            bus: Bus::new(console),
            state: CpuState::Running,
            variant,
        }
    }

    fn reset_flags() -> CpuFlags {
        // Flags come up as if the last result had been zero.
        CpuFlags::Z | CpuFlags::P | CpuFlags::ONE
    }

    /// Copy a .COM image into the TPA and point PC at it. Bytes past the top
    /// of RAM are silently dropped.
    pub fn load_image(&mut self, image: &[u8]) {
        let room = RAM_SIZE - TPA_BASE as usize;
        for (i, &byte) in image.iter().take(room).enumerate() {
            self.bus.ram[TPA_BASE as usize + i] = byte;
        }
        self.pc = TPA_BASE;
    }

    /// Fetch-execute one instruction, then service the BDOS trap if the
    /// instruction touched port 0.
    pub fn step(&mut self) -> io::Result<()> {
        if self.state != CpuState::Running {
            return Ok(());
        }

        let pc = self.pc;
        let opcode = self.fetch_byte();

        if self.bus.trace {
            let line = format!(
                "{:04X}  {:02X}  {:<10} A:{:02X} F:{:02X} BC:{:02X}{:02X} DE:{:02X}{:02X} HL:{:02X}{:02X} SP:{:04X}",
                pc,
                opcode,
                instructions::MNEMONICS[opcode as usize],
                self.a,
                self.flags.bits(),
                self.b,
                self.c,
                self.d,
                self.e,
                self.h,
                self.l,
                self.sp
            );
            self.bus.log_trace(&line);
        }

        instructions::execute(self, opcode);

        if self.state == CpuState::Running && self.bus.last_port == Some(0) {
            bdos::handle(self)?;
        }

        Ok(())
    }

    // ========================================================================
    // Operand fetch and stack access
    // ========================================================================

    pub fn fetch_byte(&mut self) -> u8 {
        let value = self.bus.read_8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    pub fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    // The stack grows downward; the high byte lands at the higher address.
    pub fn push(&mut self, value: u16) {
        self.sp = self.sp.wrapping_sub(1);
        self.bus.write_8(self.sp, (value >> 8) as u8);
        self.sp = self.sp.wrapping_sub(1);
        self.bus.write_8(self.sp, (value & 0xFF) as u8);
    }

    pub fn pop(&mut self) -> u16 {
        let low = self.bus.read_8(self.sp) as u16;
        self.sp = self.sp.wrapping_add(1);
        let high = self.bus.read_8(self.sp) as u16;
        self.sp = self.sp.wrapping_add(1);
        (high << 8) | low
    }

    // ========================================================================
    // Register access
    // ========================================================================

    pub fn get_reg(&self, reg: Reg) -> u8 {
        match reg {
            Reg::B => self.b,
            Reg::C => self.c,
            Reg::D => self.d,
            Reg::E => self.e,
            Reg::H => self.h,
            Reg::L => self.l,
            Reg::M => self.bus.read_8(self.get_pair(RegPair::HL)),
            Reg::A => self.a,
        }
    }

    pub fn set_reg(&mut self, reg: Reg, value: u8) {
        match reg {
            Reg::B => self.b = value,
            Reg::C => self.c = value,
            Reg::D => self.d = value,
            Reg::E => self.e = value,
            Reg::H => self.h = value,
            Reg::L => self.l = value,
            Reg::M => {
                let addr = self.get_pair(RegPair::HL);
                self.bus.write_8(addr, value);
            }
            Reg::A => self.a = value,
        }
    }

    pub fn get_pair(&self, pair: RegPair) -> u16 {
        match pair {
            RegPair::BC => ((self.b as u16) << 8) | self.c as u16,
            RegPair::DE => ((self.d as u16) << 8) | self.e as u16,
            RegPair::HL => ((self.h as u16) << 8) | self.l as u16,
            RegPair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: RegPair, value: u16) {
        let high = (value >> 8) as u8;
        let low = (value & 0xFF) as u8;
        match pair {
            RegPair::BC => {
                self.b = high;
                self.c = low;
            }
            RegPair::DE => {
                self.d = high;
                self.e = low;
            }
            RegPair::HL => {
                self.h = high;
                self.l = low;
            }
            RegPair::SP => self.sp = value,
        }
    }

    // ========================================================================
    // Flags
    // ========================================================================

    pub fn get_cpu_flag(&self, mask: CpuFlags) -> bool {
        self.flags.contains(mask)
    }

    pub fn set_cpu_flag(&mut self, mask: CpuFlags, value: bool) {
        if value {
            self.flags.insert(mask);
        } else {
            self.flags.remove(mask);
        }
    }

    pub fn get_cpu_flags(&self) -> CpuFlags {
        self.flags
    }

    // Overwrite the flag register wholesale, re-asserting the reserved bits.
    // Bits 5 and 3 are not part of CpuFlags, so from_bits_truncate has
    // already dropped them by the time a popped byte gets here.
    pub fn set_cpu_flags(&mut self, new_flags: CpuFlags) {
        self.flags = new_flags | CpuFlags::ONE;
    }

    /// Sign, zero and parity of an 8-bit result. Carry bits are left alone.
    pub fn update_szp(&mut self, result: u8) {
        self.set_cpu_flag(CpuFlags::S, result & 0x80 != 0);
        self.set_cpu_flag(CpuFlags::Z, result == 0);
        // Even parity means an even number of 1s
        self.set_cpu_flag(CpuFlags::P, result.count_ones() % 2 == 0);
        self.flags.insert(CpuFlags::ONE);
    }

    pub fn carry_in(&self) -> u8 {
        self.get_cpu_flag(CpuFlags::CY) as u8
    }

    // ========================================================================
    // ALU
    // ========================================================================

    // ADD/ADC into A. Sets all five flags; returns the 8-bit sum.
    pub fn alu_add(&mut self, operand: u8, carry_in: u8) -> u8 {
        let a = self.a;
        let sum = a as u16 + operand as u16 + carry_in as u16;
        let result = sum as u8;

        self.set_cpu_flag(CpuFlags::AC, (a & 0x0F) + (operand & 0x0F) + carry_in > 0x0F);
        self.set_cpu_flag(CpuFlags::CY, sum > 0xFF);
        self.update_szp(result);

        result
    }

    // SUB/SBB/CMP against A. CY is the borrow; AC is set when no borrow
    // leaves bit 3, which is what DAA and the exerciser expect.
    pub fn alu_sub(&mut self, operand: u8, borrow_in: u8) -> u8 {
        let a = self.a;
        let result = a.wrapping_sub(operand).wrapping_sub(borrow_in);

        self.set_cpu_flag(CpuFlags::CY, operand as u16 + borrow_in as u16 > a as u16);
        self.set_cpu_flag(CpuFlags::AC, (a ^ operand ^ result) & 0x10 == 0);
        self.update_szp(result);

        result
    }

    // ========================================================================
    // Z80 alternate bank
    // ========================================================================

    pub fn exchange_af(&mut self) {
        mem::swap(&mut self.a, &mut self.shadow.a);
        mem::swap(&mut self.flags, &mut self.shadow.flags);
    }

    pub fn exchange_banks(&mut self) {
        mem::swap(&mut self.b, &mut self.shadow.b);
        mem::swap(&mut self.c, &mut self.shadow.c);
        mem::swap(&mut self.d, &mut self.shadow.d);
        mem::swap(&mut self.e, &mut self.shadow.e);
        mem::swap(&mut self.h, &mut self.shadow.h);
        mem::swap(&mut self.l, &mut self.shadow.l);
    }
}
