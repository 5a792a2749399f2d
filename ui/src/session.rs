use std::path::PathBuf;

use store::SessionStore;

/// Session store rooted in the platform data directory
/// (`~/.local/share/clientbook` on Linux, the app sandbox elsewhere).
pub fn session_store() -> SessionStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clientbook");
    SessionStore::new(base)
}
