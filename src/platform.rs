//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy shortcut display for status bar hints
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "^Y";
