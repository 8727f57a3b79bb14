//! Intel 8080 CP/M 2.2 emulator core.
//!
//! The CPU core lives in `cpu` and `instructions`, the 64K address space and
//! port file in `bus`, and the CP/M console BDOS shim in `bdos`. Host
//! terminal I/O goes through the `Console` trait in `console`.

pub mod bdos;
pub mod bus;
pub mod console;
pub mod cpu;
pub mod instructions;
