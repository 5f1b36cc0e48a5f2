pub mod errors;
pub mod shutdown;

pub use errors::{AppError, DomainError, InfraError, INVALID_OR_DUPLICATE};
pub use shutdown::{listen_for_shutdown_signals, ShutdownCoordinator, ShutdownSignal};
