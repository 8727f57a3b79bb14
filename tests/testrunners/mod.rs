use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use rust_cpm::console::Console;
use rust_cpm::cpu::{Cpu, CpuState, Variant};

/// Load a machine-code snippet at 0100h and run it until it halts or the
/// instruction cap trips. Snippets are expected to end in HLT (76h).
#[allow(dead_code)]
pub fn run_cpu_code(cpu: &mut Cpu, code: &[u8]) {
    cpu.load_image(code);

    let mut instructions_left = 100_000;

    while cpu.state == CpuState::Running {
        if instructions_left == 0 {
            break;
        }
        instructions_left -= 1;

        cpu.step().expect("host I/O failed");
    }
}

pub type Captured = Rc<RefCell<Vec<u8>>>;

/// Console fed from a canned byte script, capturing both output streams.
/// Exhausted input reads as end-of-input, the way a closed stdin would.
#[allow(dead_code)]
pub struct ScriptedConsole {
    input: VecDeque<u8>,
    output: Captured,
    aux: Captured,
}

impl Console for ScriptedConsole {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn poll_byte(&mut self) -> io::Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn write_byte(&mut self, value: u8) -> io::Result<()> {
        self.output.borrow_mut().push(value);
        Ok(())
    }

    fn write_aux(&mut self, value: u8) -> io::Result<()> {
        self.aux.borrow_mut().push(value);
        Ok(())
    }
}

/// An 8080 wired to a scripted console. Returns the CPU plus handles to the
/// captured console and auxiliary output.
#[allow(dead_code)]
pub fn scripted_cpu(input: &[u8]) -> (Cpu, Captured, Captured) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let aux = Rc::new(RefCell::new(Vec::new()));

    let console = ScriptedConsole {
        input: input.iter().copied().collect(),
        output: output.clone(),
        aux: aux.clone(),
    };

    let cpu = Cpu::with_console(Variant::I8080, Box::new(console));
    (cpu, output, aux)
}
