//! basicKernel entry point.
//!
//! The bootloader hands control to `kernel_main` with a valid stack; from
//! there the kernel brings up the console and keyboard and runs the shell
//! until the `halt` command stops the CPU for good.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
bootloader::entry_point!(kernel_main);

#[cfg(target_os = "none")]
fn kernel_main(_boot_info: &'static bootloader::BootInfo) -> ! {
    use basickernel::arch::x86_64::{self, port::PcPorts, vga::VgaSurface};
    use basickernel::boot::{self, Status};
    use basickernel::console::Console;
    use basickernel::keyboard::Keyboard;
    use basickernel::terminal::Shell;

    basickernel::init();
    log::info!("serial and logger up");

    let mut console = Console::new(VgaSurface::new());
    console.init();
    console.clear();
    boot::banner::print_banner(&mut console);

    let mut keyboard = Keyboard::new(PcPorts);
    keyboard.init();
    boot::log(&mut console, Status::Ok, "Keyboard ready (polling mode)");
    console.put_char(b'\n');
    log::info!("boot complete, entering shell");

    let mut shell = Shell::new();
    shell.run(&mut console, &mut keyboard);

    // Only the halt command gets here.
    log::info!("halt requested, stopping CPU");
    x86_64::halt_loop()
}

/// Panic handler.
///
/// There is no recoverable-error channel in this kernel; a panic reports
/// over serial and parks the CPU.
#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    basickernel::serial_println!("KERNEL PANIC: {}", info);
    basickernel::arch::x86_64::halt_loop()
}

/// Hosted stub so the workspace builds on development machines; the real
/// entry point above only exists on the bare-metal target.
#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("basickernel is a bare-metal binary; build for the kernel target and run under QEMU");
}
