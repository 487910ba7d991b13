pub mod archive;
pub mod fs_tree;
mod http_source;
mod system_tools;
mod systemd;
mod terminal_confirmer;

pub use http_source::HttpRemoteSource;
pub use system_tools::SystemToolProbe;
pub use systemd::{SystemdManager, render_unit};
pub use terminal_confirmer::TerminalConfirmer;
