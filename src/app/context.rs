use crate::ports::{Confirmer, RemoteSource, ServiceManager, ToolProbe};

/// Dependency bundle threaded through command execution.
pub struct AppContext<C, R, S, T>
where
    C: Confirmer,
    R: RemoteSource,
    S: ServiceManager,
    T: ToolProbe,
{
    confirmer: C,
    remote: R,
    services: S,
    tools: T,
}

impl<C, R, S, T> AppContext<C, R, S, T>
where
    C: Confirmer,
    R: RemoteSource,
    S: ServiceManager,
    T: ToolProbe,
{
    pub fn new(confirmer: C, remote: R, services: S, tools: T) -> Self {
        Self { confirmer, remote, services, tools }
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn service_manager(&self) -> &S {
        &self.services
    }

    pub fn tools(&self) -> &T {
        &self.tools
    }
}
