// term.rs - Terminal output: escape codes, frame emission, console setup

use std::io::{self, Write};

use conway::FrameBuffer;

/// Home the cursor, clear the screen and reset the terminal.
pub const CLEAR: &[u8] = b"\x1b[1;1H\x1b[2J\x1bc";
/// Reset all text attributes.
pub const RESET: &[u8] = b"\x1b[0m";

/// Writes frames to a terminal-like sink.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clear the screen, emit the frame and a generation footer, then flush.
    pub fn draw(&mut self, frame: &FrameBuffer, generation: u64) -> io::Result<()> {
        self.out.write_all(CLEAR)?;
        self.out.write_all(frame.as_bytes())?;
        self.out.write_all(RESET)?;
        writeln!(self.out, "gen: {generation}")?;
        self.out.flush()
    }

    /// Restore default colors, e.g. after an interrupt.
    pub fn reset(&mut self) -> io::Result<()> {
        self.out.write_all(RESET)?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

/// Turn on ANSI escape processing for the console attached to stdout.
#[cfg(target_os = "windows")]
pub fn enable_virtual_terminal() -> io::Result<()> {
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: the handle comes straight from GetStdHandle and is only handed
    // back to console mode calls; `mode` outlives the call that writes it.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(io::Error::last_os_error());
        }
        let mut mode = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return Err(io::Error::last_os_error());
        }
        if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// ANSI escapes work out of the box outside Windows.
#[cfg(not(target_os = "windows"))]
pub fn enable_virtual_terminal() -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::{GridSize, Palette};
    use pretty_assertions::assert_eq;

    #[test]
    fn draw_wraps_frame_with_clear_reset_and_footer() {
        let mut frame = FrameBuffer::new(GridSize::new(1, 2).unwrap());
        frame.encode(&[1, 0], &[0, 1], &Palette::COLOR);

        let mut screen = Screen::new(Vec::new());
        screen.draw(&frame, 7).unwrap();

        let mut expected = CLEAR.to_vec();
        expected.extend_from_slice(b"\x1b[42m \x1b[41m \x1b[00m\n");
        expected.extend_from_slice(RESET);
        expected.extend_from_slice(b"gen: 7\n");
        assert_eq!(screen.get_ref(), &expected);
    }

    #[test]
    fn reset_writes_reset_code() {
        let mut screen = Screen::new(Vec::new());
        screen.reset().unwrap();
        assert_eq!(screen.get_ref().as_slice(), RESET);
    }

    #[test]
    fn virtual_terminal_setup_does_not_panic() {
        // Without an attached console this may fail, which callers only log.
        let _ = enable_virtual_terminal();
    }
}
