use std::io;
use std::path::Path;

/// Hands a file to whatever the desktop has registered for it.
pub trait Launcher {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// `ShellExecute` on Windows, `open` on macOS, `xdg-open` and friends elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that_detached(path)
    }
}
