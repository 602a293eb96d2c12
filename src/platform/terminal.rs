//! Terminal display: prints frames as ASCII art

use std::io::{self, Write};

use crate::renderer::Framebuffer;

const HELP: &str = "w/s aim, f launch, q quit";

/// Writes frames to a terminal, warning once if the terminal stops accepting them
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    warned: bool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_frame<W: Write>(out: &mut W, frame: &Framebuffer) -> io::Result<()> {
        // Home the cursor and clear before each frame
        write!(out, "\x1b[H\x1b[2J{}", frame.to_ascii())?;
        writeln!(out, "{HELP}")?;
        out.flush()
    }

    /// Print one frame; returns false if it could not be written
    pub fn present<W: Write>(&mut self, out: &mut W, frame: &Framebuffer) -> bool {
        match Self::write_frame(out, frame) {
            Ok(()) => true,
            Err(e) => {
                if !self.warned {
                    log::warn!("Cannot write frame to terminal: {}", e);
                    self.warned = true;
                }
                false
            }
        }
    }

    /// Whether a write has failed so far
    pub fn has_failed(&self) -> bool {
        self.warned
    }
}
