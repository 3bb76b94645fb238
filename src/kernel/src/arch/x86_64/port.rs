//! Port I/O capability over the `in` instruction.

use basickernel_hal::PortIo;
use x86_64::instructions::port::Port;

/// Real port I/O for PC hardware.
pub struct PcPorts;

impl PortIo for PcPorts {
    fn read_byte(&mut self, port: u16) -> u8 {
        let mut port = Port::new(port);
        // SAFETY: the kernel runs in ring 0 with full I/O port access. The
        // drivers only read status and data ports whose reads are
        // side-effect free beyond consuming the pending byte.
        unsafe { port.read() }
    }
}
