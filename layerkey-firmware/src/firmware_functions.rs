//! Board hooks for the firmware keys. The board registers what a reset means on its MCU; the
//! engine only knows when one was asked for.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::CriticalSectionMutex;

use crate::dispatcher::FirmwareAction;

pub type ResetFn = &'static (dyn Fn() + Sync);

struct Functions {
    reset: Option<ResetFn>,
    reset_to_bootloader: Option<ResetFn>,
}

static FUNCTIONS: CriticalSectionMutex<RefCell<Functions>> =
    CriticalSectionMutex::new(RefCell::new(Functions {
        reset: None,
        reset_to_bootloader: None,
    }));

/// Call the registered reset function. It is consumed; a second reset without re-registering
/// does nothing.
pub fn reset() {
    let f = FUNCTIONS.lock(|r| r.borrow_mut().reset.take());
    if let Some(f) = f {
        f();
    }
}

pub fn reset_to_bootloader() {
    let f = FUNCTIONS.lock(|r| r.borrow_mut().reset_to_bootloader.take());
    if let Some(f) = f {
        f();
    }
}

pub fn run(action: FirmwareAction) {
    crate::info!("firmware action {:?}", action);
    match action {
        FirmwareAction::Reset => reset(),
        FirmwareAction::Bootloader => reset_to_bootloader(),
    }
}

/// Register a function that will reset the MCU when [reset] is called.
///
/// ```
/// use layerkey_firmware::firmware_functions::handle_reset;
/// # pub mod cortex_m { pub mod peripheral {pub mod SCB {pub fn sys_reset() {}}}}
///
/// fn myreset() {
///     cortex_m::peripheral::SCB::sys_reset();
/// }
///
/// handle_reset(Some(&myreset));
/// ```
pub fn handle_reset(value: Option<ResetFn>) {
    FUNCTIONS.lock(|r| r.borrow_mut().reset = value);
}

pub fn handle_reset_to_bootloader(value: Option<ResetFn>) {
    FUNCTIONS.lock(|r| r.borrow_mut().reset_to_bootloader = value);
}

#[cfg(all(not(test), feature = "reset-on-panic", target_os = "none"))]
mod panic {
    #[panic_handler]
    fn panic(_info: &core::panic::PanicInfo) -> ! {
        super::reset();

        loop {}
    }
}
