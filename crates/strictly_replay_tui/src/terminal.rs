//! Terminal mode handling shared by normal exit and panics.

use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io;

/// Leaves raw mode and the alternate screen, ignoring failures.
///
/// Runs inside the panic hook, where there is nobody left to report to.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Chains `restore` in front of the current panic hook.
///
/// The previous hook still prints the panic message, after the terminal
/// is back in cooked mode so the message is readable.
pub fn install_panic_hook(restore: impl Fn() + Send + Sync + 'static) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}
