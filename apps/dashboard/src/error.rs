use thiserror::Error;

pub type Result<T> = color_eyre::Result<T>;

pub use color_eyre::eyre::WrapErr;

/// Failures outside the core contracts, reported to the user as distinct kinds
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("permission denied: {user} ({role}) may not {action}")]
    PermissionDenied {
        user: String,
        role: String,
        action: String,
    },

    #[error("procedure {0} not found")]
    ProcedureNotFound(u64),

    #[error(transparent)]
    Store(#[from] search_core::StoreError),

    #[error(transparent)]
    Catalog(#[from] search_core::CatalogError),
}
