mod confirmer;
mod remote_source;
mod service_manager;
mod tool_probe;

pub use confirmer::{Confirmer, is_affirmative};
pub use remote_source::RemoteSource;
pub use service_manager::ServiceManager;
pub use tool_probe::ToolProbe;
