use crate::cpu::{Cpu, Reg, RegPair};

pub mod control;
pub mod logic;
pub mod math;
pub mod misc;
pub mod transfer;

use self::control::Cond;

/// Execute one opcode. Handlers fetch their own operand bytes through PC.
/// The table is total: every one of the 256 opcodes has a defined effect,
/// including the classic 8080 aliases (CBh jumps, DDh/EDh/FDh call, the
/// 08h/10h/.../38h holes are nops). 08h and D9h belong to the Z80 exchanges
/// when that variant is selected.
pub fn execute(cpu: &mut Cpu, opcode: u8) {
    match opcode {
        // --- 00-0F ---
        0x00 => {}
        0x01 => transfer::lxi(cpu, RegPair::BC),
        0x02 => transfer::stax(cpu, RegPair::BC),
        0x03 => math::inx(cpu, RegPair::BC),
        0x04 => math::inr(cpu, Reg::B),
        0x05 => math::dcr(cpu, Reg::B),
        0x06 => transfer::mvi(cpu, Reg::B),
        0x07 => logic::rlc(cpu),
        0x08 => misc::ex_af_af(cpu),
        0x09 => math::dad(cpu, RegPair::BC),
        0x0A => transfer::ldax(cpu, RegPair::BC),
        0x0B => math::dcx(cpu, RegPair::BC),
        0x0C => math::inr(cpu, Reg::C),
        0x0D => math::dcr(cpu, Reg::C),
        0x0E => transfer::mvi(cpu, Reg::C),
        0x0F => logic::rrc(cpu),

        // --- 10-1F ---
        0x10 => {}
        0x11 => transfer::lxi(cpu, RegPair::DE),
        0x12 => transfer::stax(cpu, RegPair::DE),
        0x13 => math::inx(cpu, RegPair::DE),
        0x14 => math::inr(cpu, Reg::D),
        0x15 => math::dcr(cpu, Reg::D),
        0x16 => transfer::mvi(cpu, Reg::D),
        0x17 => logic::ral(cpu),
        0x18 => {}
        0x19 => math::dad(cpu, RegPair::DE),
        0x1A => transfer::ldax(cpu, RegPair::DE),
        0x1B => math::dcx(cpu, RegPair::DE),
        0x1C => math::inr(cpu, Reg::E),
        0x1D => math::dcr(cpu, Reg::E),
        0x1E => transfer::mvi(cpu, Reg::E),
        0x1F => logic::rar(cpu),

        // --- 20-2F ---
        0x20 => {}
        0x21 => transfer::lxi(cpu, RegPair::HL),
        0x22 => transfer::shld(cpu),
        0x23 => math::inx(cpu, RegPair::HL),
        0x24 => math::inr(cpu, Reg::H),
        0x25 => math::dcr(cpu, Reg::H),
        0x26 => transfer::mvi(cpu, Reg::H),
        0x27 => math::daa(cpu),
        0x28 => {}
        0x29 => math::dad(cpu, RegPair::HL),
        0x2A => transfer::lhld(cpu),
        0x2B => math::dcx(cpu, RegPair::HL),
        0x2C => math::inr(cpu, Reg::L),
        0x2D => math::dcr(cpu, Reg::L),
        0x2E => transfer::mvi(cpu, Reg::L),
        0x2F => logic::cma(cpu),

        // --- 30-3F ---
        0x30 => {}
        0x31 => transfer::lxi(cpu, RegPair::SP),
        0x32 => transfer::sta(cpu),
        0x33 => math::inx(cpu, RegPair::SP),
        0x34 => math::inr(cpu, Reg::M),
        0x35 => math::dcr(cpu, Reg::M),
        0x36 => transfer::mvi(cpu, Reg::M),
        0x37 => misc::stc(cpu),
        0x38 => {}
        0x39 => math::dad(cpu, RegPair::SP),
        0x3A => transfer::lda(cpu),
        0x3B => math::dcx(cpu, RegPair::SP),
        0x3C => math::inr(cpu, Reg::A),
        0x3D => math::dcr(cpu, Reg::A),
        0x3E => transfer::mvi(cpu, Reg::A),
        0x3F => misc::cmc(cpu),

        // --- 40-47: mov b, src ---
        0x40 => transfer::mov(cpu, Reg::B, Reg::B),
        0x41 => transfer::mov(cpu, Reg::B, Reg::C),
        0x42 => transfer::mov(cpu, Reg::B, Reg::D),
        0x43 => transfer::mov(cpu, Reg::B, Reg::E),
        0x44 => transfer::mov(cpu, Reg::B, Reg::H),
        0x45 => transfer::mov(cpu, Reg::B, Reg::L),
        0x46 => transfer::mov(cpu, Reg::B, Reg::M),
        0x47 => transfer::mov(cpu, Reg::B, Reg::A),

        // --- 48-4F: mov c, src ---
        0x48 => transfer::mov(cpu, Reg::C, Reg::B),
        0x49 => transfer::mov(cpu, Reg::C, Reg::C),
        0x4A => transfer::mov(cpu, Reg::C, Reg::D),
        0x4B => transfer::mov(cpu, Reg::C, Reg::E),
        0x4C => transfer::mov(cpu, Reg::C, Reg::H),
        0x4D => transfer::mov(cpu, Reg::C, Reg::L),
        0x4E => transfer::mov(cpu, Reg::C, Reg::M),
        0x4F => transfer::mov(cpu, Reg::C, Reg::A),

        // --- 50-57: mov d, src ---
        0x50 => transfer::mov(cpu, Reg::D, Reg::B),
        0x51 => transfer::mov(cpu, Reg::D, Reg::C),
        0x52 => transfer::mov(cpu, Reg::D, Reg::D),
        0x53 => transfer::mov(cpu, Reg::D, Reg::E),
        0x54 => transfer::mov(cpu, Reg::D, Reg::H),
        0x55 => transfer::mov(cpu, Reg::D, Reg::L),
        0x56 => transfer::mov(cpu, Reg::D, Reg::M),
        0x57 => transfer::mov(cpu, Reg::D, Reg::A),

        // --- 58-5F: mov e, src ---
        0x58 => transfer::mov(cpu, Reg::E, Reg::B),
        0x59 => transfer::mov(cpu, Reg::E, Reg::C),
        0x5A => transfer::mov(cpu, Reg::E, Reg::D),
        0x5B => transfer::mov(cpu, Reg::E, Reg::E),
        0x5C => transfer::mov(cpu, Reg::E, Reg::H),
        0x5D => transfer::mov(cpu, Reg::E, Reg::L),
        0x5E => transfer::mov(cpu, Reg::E, Reg::M),
        0x5F => transfer::mov(cpu, Reg::E, Reg::A),

        // --- 60-67: mov h, src ---
        0x60 => transfer::mov(cpu, Reg::H, Reg::B),
        0x61 => transfer::mov(cpu, Reg::H, Reg::C),
        0x62 => transfer::mov(cpu, Reg::H, Reg::D),
        0x63 => transfer::mov(cpu, Reg::H, Reg::E),
        0x64 => transfer::mov(cpu, Reg::H, Reg::H),
        0x65 => transfer::mov(cpu, Reg::H, Reg::L),
        0x66 => transfer::mov(cpu, Reg::H, Reg::M),
        0x67 => transfer::mov(cpu, Reg::H, Reg::A),

        // --- 68-6F: mov l, src ---
        0x68 => transfer::mov(cpu, Reg::L, Reg::B),
        0x69 => transfer::mov(cpu, Reg::L, Reg::C),
        0x6A => transfer::mov(cpu, Reg::L, Reg::D),
        0x6B => transfer::mov(cpu, Reg::L, Reg::E),
        0x6C => transfer::mov(cpu, Reg::L, Reg::H),
        0x6D => transfer::mov(cpu, Reg::L, Reg::L),
        0x6E => transfer::mov(cpu, Reg::L, Reg::M),
        0x6F => transfer::mov(cpu, Reg::L, Reg::A),

        // --- 70-77: mov m, src / hlt ---
        0x70 => transfer::mov(cpu, Reg::M, Reg::B),
        0x71 => transfer::mov(cpu, Reg::M, Reg::C),
        0x72 => transfer::mov(cpu, Reg::M, Reg::D),
        0x73 => transfer::mov(cpu, Reg::M, Reg::E),
        0x74 => transfer::mov(cpu, Reg::M, Reg::H),
        0x75 => transfer::mov(cpu, Reg::M, Reg::L),
        0x76 => misc::hlt(cpu),
        0x77 => transfer::mov(cpu, Reg::M, Reg::A),

        // --- 78-7F: mov a, src ---
        0x78 => transfer::mov(cpu, Reg::A, Reg::B),
        0x79 => transfer::mov(cpu, Reg::A, Reg::C),
        0x7A => transfer::mov(cpu, Reg::A, Reg::D),
        0x7B => transfer::mov(cpu, Reg::A, Reg::E),
        0x7C => transfer::mov(cpu, Reg::A, Reg::H),
        0x7D => transfer::mov(cpu, Reg::A, Reg::L),
        0x7E => transfer::mov(cpu, Reg::A, Reg::M),
        0x7F => transfer::mov(cpu, Reg::A, Reg::A),

        // --- 80-87: add ---
        0x80 => math::add(cpu, Reg::B),
        0x81 => math::add(cpu, Reg::C),
        0x82 => math::add(cpu, Reg::D),
        0x83 => math::add(cpu, Reg::E),
        0x84 => math::add(cpu, Reg::H),
        0x85 => math::add(cpu, Reg::L),
        0x86 => math::add(cpu, Reg::M),
        0x87 => math::add(cpu, Reg::A),

        // --- 88-8F: adc ---
        0x88 => math::adc(cpu, Reg::B),
        0x89 => math::adc(cpu, Reg::C),
        0x8A => math::adc(cpu, Reg::D),
        0x8B => math::adc(cpu, Reg::E),
        0x8C => math::adc(cpu, Reg::H),
        0x8D => math::adc(cpu, Reg::L),
        0x8E => math::adc(cpu, Reg::M),
        0x8F => math::adc(cpu, Reg::A),

        // --- 90-97: sub ---
        0x90 => math::sub(cpu, Reg::B),
        0x91 => math::sub(cpu, Reg::C),
        0x92 => math::sub(cpu, Reg::D),
        0x93 => math::sub(cpu, Reg::E),
        0x94 => math::sub(cpu, Reg::H),
        0x95 => math::sub(cpu, Reg::L),
        0x96 => math::sub(cpu, Reg::M),
        0x97 => math::sub(cpu, Reg::A),

        // --- 98-9F: sbb ---
        0x98 => math::sbb(cpu, Reg::B),
        0x99 => math::sbb(cpu, Reg::C),
        0x9A => math::sbb(cpu, Reg::D),
        0x9B => math::sbb(cpu, Reg::E),
        0x9C => math::sbb(cpu, Reg::H),
        0x9D => math::sbb(cpu, Reg::L),
        0x9E => math::sbb(cpu, Reg::M),
        0x9F => math::sbb(cpu, Reg::A),

        // --- A0-A7: ana ---
        0xA0 => logic::ana(cpu, Reg::B),
        0xA1 => logic::ana(cpu, Reg::C),
        0xA2 => logic::ana(cpu, Reg::D),
        0xA3 => logic::ana(cpu, Reg::E),
        0xA4 => logic::ana(cpu, Reg::H),
        0xA5 => logic::ana(cpu, Reg::L),
        0xA6 => logic::ana(cpu, Reg::M),
        0xA7 => logic::ana(cpu, Reg::A),

        // --- A8-AF: xra ---
        0xA8 => logic::xra(cpu, Reg::B),
        0xA9 => logic::xra(cpu, Reg::C),
        0xAA => logic::xra(cpu, Reg::D),
        0xAB => logic::xra(cpu, Reg::E),
        0xAC => logic::xra(cpu, Reg::H),
        0xAD => logic::xra(cpu, Reg::L),
        0xAE => logic::xra(cpu, Reg::M),
        0xAF => logic::xra(cpu, Reg::A),

        // --- B0-B7: ora ---
        0xB0 => logic::ora(cpu, Reg::B),
        0xB1 => logic::ora(cpu, Reg::C),
        0xB2 => logic::ora(cpu, Reg::D),
        0xB3 => logic::ora(cpu, Reg::E),
        0xB4 => logic::ora(cpu, Reg::H),
        0xB5 => logic::ora(cpu, Reg::L),
        0xB6 => logic::ora(cpu, Reg::M),
        0xB7 => logic::ora(cpu, Reg::A),

        // --- B8-BF: cmp ---
        0xB8 => math::cmp(cpu, Reg::B),
        0xB9 => math::cmp(cpu, Reg::C),
        0xBA => math::cmp(cpu, Reg::D),
        0xBB => math::cmp(cpu, Reg::E),
        0xBC => math::cmp(cpu, Reg::H),
        0xBD => math::cmp(cpu, Reg::L),
        0xBE => math::cmp(cpu, Reg::M),
        0xBF => math::cmp(cpu, Reg::A),

        // --- C0-CF ---
        0xC0 => control::rcc(cpu, Cond::Nz),
        0xC1 => transfer::pop_pair(cpu, RegPair::BC),
        0xC2 => control::jcc(cpu, Cond::Nz),
        0xC3 => control::jmp(cpu),
        0xC4 => control::ccc(cpu, Cond::Nz),
        0xC5 => transfer::push_pair(cpu, RegPair::BC),
        0xC6 => math::adi(cpu),
        0xC7 => control::rst(cpu, 0),
        0xC8 => control::rcc(cpu, Cond::Z),
        0xC9 => control::ret(cpu),
        0xCA => control::jcc(cpu, Cond::Z),
        0xCB => control::jmp(cpu),
        0xCC => control::ccc(cpu, Cond::Z),
        0xCD => control::call(cpu),
        0xCE => math::aci(cpu),
        0xCF => control::rst(cpu, 1),

        // --- D0-DF ---
        0xD0 => control::rcc(cpu, Cond::Nc),
        0xD1 => transfer::pop_pair(cpu, RegPair::DE),
        0xD2 => control::jcc(cpu, Cond::Nc),
        0xD3 => transfer::output(cpu),
        0xD4 => control::ccc(cpu, Cond::Nc),
        0xD5 => transfer::push_pair(cpu, RegPair::DE),
        0xD6 => math::sui(cpu),
        0xD7 => control::rst(cpu, 2),
        0xD8 => control::rcc(cpu, Cond::C),
        0xD9 => misc::exx(cpu),
        0xDA => control::jcc(cpu, Cond::C),
        0xDB => transfer::input(cpu),
        0xDC => control::ccc(cpu, Cond::C),
        0xDD => control::call(cpu),
        0xDE => math::sbi(cpu),
        0xDF => control::rst(cpu, 3),

        // --- E0-EF ---
        0xE0 => control::rcc(cpu, Cond::Po),
        0xE1 => transfer::pop_pair(cpu, RegPair::HL),
        0xE2 => control::jcc(cpu, Cond::Po),
        0xE3 => transfer::xthl(cpu),
        0xE4 => control::ccc(cpu, Cond::Po),
        0xE5 => transfer::push_pair(cpu, RegPair::HL),
        0xE6 => logic::ani(cpu),
        0xE7 => control::rst(cpu, 4),
        0xE8 => control::rcc(cpu, Cond::Pe),
        0xE9 => control::pchl(cpu),
        0xEA => control::jcc(cpu, Cond::Pe),
        0xEB => transfer::xchg(cpu),
        0xEC => control::ccc(cpu, Cond::Pe),
        0xED => control::call(cpu),
        0xEE => logic::xri(cpu),
        0xEF => control::rst(cpu, 5),

        // --- F0-FF ---
        0xF0 => control::rcc(cpu, Cond::P),
        0xF1 => transfer::pop_psw(cpu),
        0xF2 => control::jcc(cpu, Cond::P),
        0xF3 => misc::di(cpu),
        0xF4 => control::ccc(cpu, Cond::P),
        0xF5 => transfer::push_psw(cpu),
        0xF6 => logic::ori(cpu),
        0xF7 => control::rst(cpu, 6),
        0xF8 => control::rcc(cpu, Cond::M),
        0xF9 => transfer::sphl(cpu),
        0xFA => control::jcc(cpu, Cond::M),
        0xFB => misc::ei(cpu),
        0xFC => control::ccc(cpu, Cond::M),
        0xFD => control::call(cpu),
        0xFE => math::cpi(cpu),
        0xFF => control::rst(cpu, 7),
    }
}

/// Opcode names for the trace log. 08h and D9h show their Z80 readings;
/// on the 8080 they run as nop and ret.
pub const MNEMONICS: [&str; 256] = [
    // 00-0F
    "nop", "lxi b", "stax b", "inx b", "inr b", "dcr b", "mvi b", "rlc",
    "ex af,af'", "dad b", "ldax b", "dcx b", "inr c", "dcr c", "mvi c", "rrc",
    // 10-1F
    "nop", "lxi d", "stax d", "inx d", "inr d", "dcr d", "mvi d", "ral",
    "nop", "dad d", "ldax d", "dcx d", "inr e", "dcr e", "mvi e", "rar",
    // 20-2F
    "nop", "lxi h", "shld", "inx h", "inr h", "dcr h", "mvi h", "daa",
    "nop", "dad h", "lhld", "dcx h", "inr l", "dcr l", "mvi l", "cma",
    // 30-3F
    "nop", "lxi sp", "sta", "inx sp", "inr m", "dcr m", "mvi m", "stc",
    "nop", "dad sp", "lda", "dcx sp", "inr a", "dcr a", "mvi a", "cmc",
    // 40-4F
    "mov b,b", "mov b,c", "mov b,d", "mov b,e", "mov b,h", "mov b,l", "mov b,m", "mov b,a",
    "mov c,b", "mov c,c", "mov c,d", "mov c,e", "mov c,h", "mov c,l", "mov c,m", "mov c,a",
    // 50-5F
    "mov d,b", "mov d,c", "mov d,d", "mov d,e", "mov d,h", "mov d,l", "mov d,m", "mov d,a",
    "mov e,b", "mov e,c", "mov e,d", "mov e,e", "mov e,h", "mov e,l", "mov e,m", "mov e,a",
    // 60-6F
    "mov h,b", "mov h,c", "mov h,d", "mov h,e", "mov h,h", "mov h,l", "mov h,m", "mov h,a",
    "mov l,b", "mov l,c", "mov l,d", "mov l,e", "mov l,h", "mov l,l", "mov l,m", "mov l,a",
    // 70-7F
    "mov m,b", "mov m,c", "mov m,d", "mov m,e", "mov m,h", "mov m,l", "hlt", "mov m,a",
    "mov a,b", "mov a,c", "mov a,d", "mov a,e", "mov a,h", "mov a,l", "mov a,m", "mov a,a",
    // 80-8F
    "add b", "add c", "add d", "add e", "add h", "add l", "add m", "add a",
    "adc b", "adc c", "adc d", "adc e", "adc h", "adc l", "adc m", "adc a",
    // 90-9F
    "sub b", "sub c", "sub d", "sub e", "sub h", "sub l", "sub m", "sub a",
    "sbb b", "sbb c", "sbb d", "sbb e", "sbb h", "sbb l", "sbb m", "sbb a",
    // A0-AF
    "ana b", "ana c", "ana d", "ana e", "ana h", "ana l", "ana m", "ana a",
    "xra b", "xra c", "xra d", "xra e", "xra h", "xra l", "xra m", "xra a",
    // B0-BF
    "ora b", "ora c", "ora d", "ora e", "ora h", "ora l", "ora m", "ora a",
    "cmp b", "cmp c", "cmp d", "cmp e", "cmp h", "cmp l", "cmp m", "cmp a",
    // C0-CF
    "rnz", "pop b", "jnz", "jmp", "cnz", "push b", "adi", "rst 0",
    "rz", "ret", "jz", "jmp", "cz", "call", "aci", "rst 1",
    // D0-DF
    "rnc", "pop d", "jnc", "out", "cnc", "push d", "sui", "rst 2",
    "rc", "exx", "jc", "in", "cc", "call", "sbi", "rst 3",
    // E0-EF
    "rpo", "pop h", "jpo", "xthl", "cpo", "push h", "ani", "rst 4",
    "rpe", "pchl", "jpe", "xchg", "cpe", "call", "xri", "rst 5",
    // F0-FF
    "rp", "pop psw", "jp", "di", "cp", "push psw", "ori", "rst 6",
    "rm", "sphl", "jm", "ei", "cm", "call", "cpi", "rst 7",
];
