use rust_cpm::cpu::{Cpu, Variant};
mod testrunners;
use testrunners::run_cpu_code;

#[test]
fn test_mvi_mov() {
    let mut cpu = Cpu::new(Variant::I8080);

    // MVI A,2Ah / MOV B,A
    run_cpu_code(&mut cpu, &[0x3E, 0x2A, 0x47, 0x76]);
    assert_eq!(cpu.a, 0x2A);
    assert_eq!(cpu.b, 0x2A);
}

#[test]
fn test_mov_through_memory() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI H,0200h / MVI A,77h / MOV M,A / MVI A,00h / MOV A,M
    run_cpu_code(
        &mut cpu,
        &[0x21, 0x00, 0x02, 0x3E, 0x77, 0x77, 0x3E, 0x00, 0x7E, 0x76],
    );
    assert_eq!(cpu.a, 0x77);
    assert_eq!(cpu.bus.read_8(0x0200), 0x77);
}

#[test]
fn test_lxi_sp() {
    let mut cpu = Cpu::new(Variant::I8080);

    run_cpu_code(&mut cpu, &[0x31, 0x34, 0x12, 0x76]);
    assert_eq!(cpu.sp, 0x1234);
}

#[test]
fn test_sta_lda() {
    let mut cpu = Cpu::new(Variant::I8080);

    // MVI A,5Ah / STA 0300h / MVI A,00h / LDA 0300h
    run_cpu_code(
        &mut cpu,
        &[0x3E, 0x5A, 0x32, 0x00, 0x03, 0x3E, 0x00, 0x3A, 0x00, 0x03, 0x76],
    );
    assert_eq!(cpu.a, 0x5A);
    assert_eq!(cpu.bus.read_8(0x0300), 0x5A);
}

#[test]
fn test_shld_lhld() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI H,1234h / SHLD 0200h / LXI H,0000h / LHLD 0200h
    run_cpu_code(
        &mut cpu,
        &[
            0x21, 0x34, 0x12, 0x22, 0x00, 0x02, 0x21, 0x00, 0x00, 0x2A, 0x00, 0x02, 0x76,
        ],
    );
    assert_eq!(cpu.h, 0x12);
    assert_eq!(cpu.l, 0x34);
    // Low byte at the lower address
    assert_eq!(cpu.bus.read_8(0x0200), 0x34);
    assert_eq!(cpu.bus.read_8(0x0201), 0x12);
}

#[test]
fn test_stax_ldax() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI B,0210h / MVI A,99h / STAX B / MVI A,00h / LDAX B
    run_cpu_code(
        &mut cpu,
        &[0x01, 0x10, 0x02, 0x3E, 0x99, 0x02, 0x3E, 0x00, 0x0A, 0x76],
    );
    assert_eq!(cpu.a, 0x99);
    assert_eq!(cpu.bus.read_8(0x0210), 0x99);
}

#[test]
fn test_xchg() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI H,1234h / LXI D,5678h / XCHG
    run_cpu_code(&mut cpu, &[0x21, 0x34, 0x12, 0x11, 0x78, 0x56, 0xEB, 0x76]);
    assert_eq!(cpu.d, 0x12);
    assert_eq!(cpu.e, 0x34);
    assert_eq!(cpu.h, 0x56);
    assert_eq!(cpu.l, 0x78);

    // XCHG twice is a no-op
    let mut cpu = Cpu::new(Variant::I8080);
    run_cpu_code(
        &mut cpu,
        &[0x21, 0x34, 0x12, 0x11, 0x78, 0x56, 0xEB, 0xEB, 0x76],
    );
    assert_eq!(cpu.h, 0x12);
    assert_eq!(cpu.l, 0x34);
    assert_eq!(cpu.d, 0x56);
    assert_eq!(cpu.e, 0x78);
}

#[test]
fn test_xthl() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI SP,0400h / LXI H,AABBh / PUSH H / LXI H,1234h / XTHL / POP D
    run_cpu_code(
        &mut cpu,
        &[
            0x31, 0x00, 0x04, 0x21, 0xBB, 0xAA, 0xE5, 0x21, 0x34, 0x12, 0xE3, 0xD1, 0x76,
        ],
    );
    assert_eq!(cpu.h, 0xAA);
    assert_eq!(cpu.l, 0xBB);
    assert_eq!(cpu.d, 0x12);
    assert_eq!(cpu.e, 0x34);
    assert_eq!(cpu.sp, 0x0400, "XTHL leaves SP alone");

    // XTHL twice restores both sides
    let mut cpu = Cpu::new(Variant::I8080);
    run_cpu_code(
        &mut cpu,
        &[
            0x31, 0x00, 0x04, 0x21, 0xBB, 0xAA, 0xE5, 0x21, 0x34, 0x12, 0xE3, 0xE3, 0x76,
        ],
    );
    assert_eq!(cpu.h, 0x12);
    assert_eq!(cpu.l, 0x34);
    assert_eq!(cpu.bus.read_16(cpu.sp), 0xAABB);
}

#[test]
fn test_push_pop_pairs() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI SP,1000h / LXI B,1234h / PUSH B / POP D
    run_cpu_code(
        &mut cpu,
        &[0x31, 0x00, 0x10, 0x01, 0x34, 0x12, 0xC5, 0xD1, 0x76],
    );
    assert_eq!(cpu.d, 0x12);
    assert_eq!(cpu.e, 0x34);
    assert_eq!(cpu.sp, 0x1000);
    // High byte sits at the higher address
    assert_eq!(cpu.bus.read_8(0x0FFF), 0x12);
    assert_eq!(cpu.bus.read_8(0x0FFE), 0x34);
}

#[test]
fn test_push_pop_psw_round_trip() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI SP,1000h / MVI A,FFh / ORA A / STC / PUSH PSW / XRA A / POP PSW
    // ORA A leaves S and P set; STC adds CY. XRA A wrecks everything, POP
    // PSW must bring it all back.
    run_cpu_code(
        &mut cpu,
        &[0x31, 0x00, 0x10, 0x3E, 0xFF, 0xB7, 0x37, 0xF5, 0xAF, 0xF1, 0x76],
    );
    assert_eq!(cpu.a, 0xFF);
    assert_eq!(cpu.get_cpu_flags().bits(), 0x87, "S, P, one-bit and CY");
    // The packed byte in memory has the S Z 0 AC 0 P 1 CY layout
    assert_eq!(cpu.bus.read_8(0x0FFE), 0x87);
    assert_eq!(cpu.bus.read_8(0x0FFF), 0xFF);
}

#[test]
fn test_pop_psw_forces_reserved_bits() {
    let mut cpu = Cpu::new(Variant::I8080);

    // LXI SP,0400h / LXI H,AAFFh / PUSH H / POP PSW
    // The popped flag byte FFh claims both reserved-zero bits; they must
    // read back as zero, and the always-one bit must stay set.
    run_cpu_code(&mut cpu, &[0x31, 0x00, 0x04, 0x21, 0xFF, 0xAA, 0xE5, 0xF1, 0x76]);
    assert_eq!(cpu.a, 0xAA);
    assert_eq!(cpu.get_cpu_flags().bits(), 0xD7);
}

#[test]
fn test_sphl() {
    let mut cpu = Cpu::new(Variant::I8080);

    run_cpu_code(&mut cpu, &[0x21, 0x00, 0x20, 0xF9, 0x76]);
    assert_eq!(cpu.sp, 0x2000);
}

#[test]
fn test_out_writes_port_file() {
    let mut cpu = Cpu::new(Variant::I8080);

    // MVI A,42h / OUT 05h
    run_cpu_code(&mut cpu, &[0x3E, 0x42, 0xD3, 0x05, 0x76]);
    assert_eq!(cpu.bus.ports[0x05], 0x42);
    assert_eq!(cpu.bus.last_port, Some(0x05), "non-zero ports are not BDOS");
}

#[test]
fn test_in_latches_port_only() {
    let mut cpu = Cpu::new(Variant::I8080);

    // MVI A,77h / IN 07h - no device, so A keeps its value
    run_cpu_code(&mut cpu, &[0x3E, 0x77, 0xDB, 0x07, 0x76]);
    assert_eq!(cpu.a, 0x77);
    assert_eq!(cpu.bus.last_port, Some(0x07));
}
