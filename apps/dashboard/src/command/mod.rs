pub mod convert;
pub mod delete;
pub mod download;
pub mod edit;
pub mod init_samples;
pub mod list;
pub mod parse;
pub mod search;
pub mod show;
pub mod update;
pub mod upload;

use std::path::PathBuf;

use search_core::{visible_procedures, Caller, Catalog, FsStore, ProcedureMeta, SearchConfig};

use crate::config::Config;
use crate::error::{DashboardError, Result, WrapErr};

pub use convert::ConvertCommand;
pub use delete::DeleteCommand;
pub use download::DownloadCommand;
pub use edit::EditCommand;
pub use init_samples::InitSamplesCommand;
pub use list::ListCommand;
pub use parse::ParseCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;
pub use upload::UploadCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Procedure storage, catalog and the identity commands run as
pub struct Dashboard {
    pub store: FsStore,
    pub catalog: Catalog,
    pub caller: Caller,
    pub search: SearchConfig,
    catalog_path: PathBuf,
}

impl Dashboard {
    pub fn open(config: &Config, caller: Caller) -> Result<Self> {
        let store = FsStore::open(&config.procedures_dir)
            .with_context(|| format!("Open procedures directory {:?}", config.procedures_dir))?;
        let catalog = Catalog::load(&config.catalog_path)
            .with_context(|| format!("Load catalog {:?}", config.catalog_path))?;

        tracing::debug!(
            "opened dashboard as {} ({}) with {} procedures",
            caller.username,
            caller.role,
            catalog.len()
        );

        Ok(Self {
            store,
            catalog,
            caller,
            search: config.search_config(),
            catalog_path: config.catalog_path.clone(),
        })
    }

    pub fn save(&self) -> std::result::Result<(), DashboardError> {
        self.catalog.save(&self.catalog_path)?;
        Ok(())
    }

    /// Procedures the caller may see, in catalog order
    pub fn visible(&self) -> Vec<ProcedureMeta> {
        visible_procedures(&self.caller, &self.catalog)
    }

    /// A procedure the caller may see. Hidden records are reported as missing.
    pub fn procedure(&self, id: u64) -> std::result::Result<&ProcedureMeta, DashboardError> {
        self.catalog
            .get(id)
            .filter(|p| self.caller.sees(p))
            .ok_or(DashboardError::ProcedureNotFound(id))
    }

    /// Text of a procedure file
    pub fn read(&self, procedure: &ProcedureMeta) -> std::result::Result<String, DashboardError> {
        Ok(self.store.read_file(&procedure.filename)?)
    }

    pub fn require_create(&self) -> std::result::Result<(), DashboardError> {
        if self.caller.can_create() {
            Ok(())
        } else {
            Err(self.denied("create procedures"))
        }
    }

    pub fn editable(&self, id: u64) -> std::result::Result<ProcedureMeta, DashboardError> {
        let procedure = self.procedure(id)?;
        if self.caller.can_edit(procedure) {
            Ok(procedure.clone())
        } else {
            Err(self.denied(format!("edit procedure {}", id)))
        }
    }

    pub fn deletable(&self, id: u64) -> std::result::Result<ProcedureMeta, DashboardError> {
        let procedure = self.procedure(id)?;
        if self.caller.can_delete(procedure) {
            Ok(procedure.clone())
        } else {
            Err(self.denied(format!("delete procedure {}", id)))
        }
    }

    fn denied(&self, action: impl Into<String>) -> DashboardError {
        let action = action.into();
        tracing::warn!("{} ({}) denied: {}", self.caller.username, self.caller.role, action);
        DashboardError::PermissionDenied {
            user: self.caller.username.clone(),
            role: self.caller.role.to_string(),
            action,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{caller, dashboard};
    use super::*;
    use rstest::rstest;
    use search_core::Role;

    #[rstest]
    #[case("alice", Role::Editor, 2)]
    #[case("bob", Role::Editor, 1)]
    #[case("bob", Role::Viewer, 1)]
    #[case("carol", Role::Admin, 2)]
    fn test_visible(#[case] name: &str, #[case] role: Role, #[case] expected: usize) {
        let (_dir, _config, dashboard) = dashboard(caller(name, role));
        assert_eq!(dashboard.visible().len(), expected);
    }

    #[test]
    fn test_hidden_procedure_is_not_found() {
        let (_dir, _config, dashboard) = dashboard(caller("bob", Role::Editor));
        assert!(matches!(
            dashboard.procedure(2),
            Err(DashboardError::ProcedureNotFound(2))
        ));
        assert!(dashboard.procedure(1).is_ok());
    }

    #[rstest]
    #[case("alice", Role::Editor, true)]
    #[case("bob", Role::Editor, false)]
    #[case("alice", Role::Viewer, false)]
    #[case("carol", Role::Admin, true)]
    fn test_editable(#[case] name: &str, #[case] role: Role, #[case] allowed: bool) {
        let (_dir, _config, dashboard) = dashboard(caller(name, role));
        let result = dashboard.editable(1);
        assert_eq!(result.is_ok(), allowed);
        if !allowed {
            assert!(matches!(result, Err(DashboardError::PermissionDenied { .. })));
        }
    }

    #[test]
    fn test_viewer_cannot_create() {
        let (_dir, _config, dashboard) = dashboard(caller("bob", Role::Viewer));
        let err = dashboard.require_create().unwrap_err();
        assert_eq!(
            err.to_string(),
            "permission denied: bob (viewer) may not create procedures"
        );
    }
}
