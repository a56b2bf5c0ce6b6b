//! Terminal setup and restoration

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        default_hook(panic_info);
    }));
}
