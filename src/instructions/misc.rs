use super::control;
use crate::cpu::{Cpu, CpuFlags, CpuState, Variant};

pub fn hlt(cpu: &mut Cpu) {
    cpu.state = CpuState::Halted;
}

pub fn stc(cpu: &mut Cpu) {
    cpu.set_cpu_flag(CpuFlags::CY, true);
}

pub fn cmc(cpu: &mut Cpu) {
    let carry = cpu.get_cpu_flag(CpuFlags::CY);
    cpu.set_cpu_flag(CpuFlags::CY, !carry);
}

pub fn di(cpu: &mut Cpu) {
    cpu.inte = false;
}

pub fn ei(cpu: &mut Cpu) {
    cpu.inte = true;
}

// 08h: EX AF,AF' on the Z80 core, one of the nop holes on the 8080.
pub fn ex_af_af(cpu: &mut Cpu) {
    if cpu.variant == Variant::Z80 {
        cpu.exchange_af();
    }
}

// D9h: EXX on the Z80 core, an alias of RET on the 8080.
pub fn exx(cpu: &mut Cpu) {
    match cpu.variant {
        Variant::Z80 => cpu.exchange_banks(),
        Variant::I8080 => control::ret(cpu),
    }
}
