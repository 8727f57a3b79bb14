use std::io::{self, Read, Write};

/// Host side of the guest's character traffic. The BDOS layer is written
/// against this trait so tests can swap in a scripted console.
pub trait Console {
    /// Blocking read of one byte from the console input.
    /// Returns None at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Non-blocking read of one byte. Returns None when no byte is waiting.
    fn poll_byte(&mut self) -> io::Result<Option<u8>>;

    /// Write one byte to the console output.
    fn write_byte(&mut self, value: u8) -> io::Result<()>;

    /// Write one byte to the auxiliary/list output.
    fn write_aux(&mut self, value: u8) -> io::Result<()>;
}

/// Console backed by the process stdio handles.
pub struct HostConsole;

impl HostConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for HostConsole {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match io::stdin().read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    // Non-blocking variant for C_RAWIO. Stdin is switched to O_NONBLOCK for
    // this single read and the original flags are restored before returning,
    // whatever the read came back with.
    fn poll_byte(&mut self) -> io::Result<Option<u8>> {
        let flags = unsafe { libc::fcntl(libc::STDIN_FILENO, libc::F_GETFL) };
        if flags < 0 {
            return Err(io::Error::last_os_error());
        }

        unsafe { libc::fcntl(libc::STDIN_FILENO, libc::F_SETFL, flags | libc::O_NONBLOCK) };

        let mut buf = [0u8; 1];
        let result = io::stdin().read(&mut buf);

        unsafe { libc::fcntl(libc::STDIN_FILENO, libc::F_SETFL, flags & !libc::O_NONBLOCK) };

        match result {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_byte(&mut self, value: u8) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(&[value])?;
        // Guests print prompts without newlines, so every byte is flushed.
        stdout.flush()
    }

    fn write_aux(&mut self, value: u8) -> io::Result<()> {
        let mut stderr = io::stderr();
        stderr.write_all(&[value])?;
        stderr.flush()
    }
}
