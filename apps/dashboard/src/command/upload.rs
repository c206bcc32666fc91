// apps/dashboard/src/command/upload.rs
//! Add a new procedure file and register it in the catalog

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::{Result, WrapErr};
use search_core::store::PROCEDURE_EXTENSION;
use search_core::{default_display_name, sanitize_filename, Caller, NewProcedure, ProcedureMeta, StoreError};
use std::path::PathBuf;

/// Optional catalog fields given on the command line
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub private: bool,
}

pub struct UploadCommand {
    config: Config,
    caller: Caller,
    path: PathBuf,
    options: UploadOptions,
}

impl UploadCommand {
    pub fn new(config: Config, caller: Caller, path: PathBuf, options: UploadOptions) -> Self {
        Self { config, caller, path, options }
    }
}

/// Store `content` under the sanitised `original_name` and add its catalog record
pub fn upload(
    dashboard: &mut Dashboard,
    original_name: &str,
    content: &[u8],
    options: UploadOptions,
) -> Result<ProcedureMeta> {
    dashboard.require_create()?;

    if !original_name.ends_with(PROCEDURE_EXTENSION) {
        return Err(StoreError::InvalidFileName {
            name: original_name.to_string(),
            reason: "only .txt files are accepted",
        }
        .into());
    }

    let filename = sanitize_filename(original_name);
    dashboard.store.create(&filename, content)?;

    let defaults = NewProcedure::new(default_display_name(&filename), filename.as_str());
    let record = dashboard.catalog.insert(NewProcedure {
        name: options.name.unwrap_or(defaults.name),
        icon: options.icon.unwrap_or(defaults.icon),
        description: options.description.unwrap_or_default(),
        owner: Some(dashboard.caller.username.clone()),
        is_public: !options.private,
        ..defaults
    });
    if let Err(e) = dashboard.save() {
        tracing::warn!("catalog not saved, removing uploaded file {}", filename);
        dashboard.catalog.remove(record.id)?;
        if let Err(cleanup) = dashboard.store.delete(&filename) {
            tracing::warn!("failed to remove {}: {}", filename, cleanup);
        }
        return Err(e.into());
    }

    tracing::info!("{} uploaded {} as procedure {}", dashboard.caller.username, filename, record.id);
    Ok(record)
}

#[async_trait::async_trait]
impl Command for UploadCommand {
    async fn execute(&self) -> Result<()> {
        let mut dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let original_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Read procedure file {:?}", self.path))?;

        let record = upload(&mut dashboard, &original_name, &content, self.options.clone())?;
        println!(
            "✅ Uploaded {} {} (id {}, file {})",
            record.icon, record.name, record.id, record.filename
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::{caller, dashboard};
    use crate::error::DashboardError;
    use search_core::Role;

    const CONTENT: &[u8] = b"[Rete]\nDiagnostica\n\nCOMANDO: Porte\nss -tlnp\n";

    #[test]
    fn test_upload_defaults() {
        let (_dir, config, mut dashboard) = dashboard(caller("bob", Role::Editor));
        let record = upload(&mut dashboard, "network tools.txt", CONTENT, UploadOptions::default()).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.order, 3);
        assert_eq!(record.name, "Network Tools");
        assert_eq!(record.filename, "network_tools.txt");
        assert_eq!(record.owner.as_deref(), Some("bob"));
        assert!(record.is_public);

        // persisted
        let reopened = Dashboard::open(&config, caller("bob", Role::Editor)).unwrap();
        assert_eq!(reopened.catalog.get(3), Some(&record));
        assert_eq!(reopened.store.read_bytes("network_tools.txt").unwrap(), CONTENT);
    }

    #[test]
    fn test_upload_options() {
        let (_dir, _config, mut dashboard) = dashboard(caller("carol", Role::Admin));
        let options = UploadOptions {
            name: Some("Rete".into()),
            icon: Some("🌐".into()),
            description: Some("Diagnostica di rete".into()),
            private: true,
        };
        let record = upload(&mut dashboard, "net.txt", CONTENT, options).unwrap();
        assert_eq!(record.name, "Rete");
        assert_eq!(record.icon, "🌐");
        assert_eq!(record.description, "Diagnostica di rete");
        assert!(!record.is_public);
    }

    #[test]
    fn test_viewer_cannot_upload() {
        let (_dir, _config, mut dashboard) = dashboard(caller("bob", Role::Viewer));
        let err = upload(&mut dashboard, "net.txt", CONTENT, UploadOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::PermissionDenied { .. })
        ));
        assert!(!dashboard.store.exists("net.txt").unwrap());
    }

    #[test]
    fn test_failed_catalog_save_removes_file() {
        let (_dir, config, mut dashboard) = dashboard(caller("alice", Role::Editor));
        std::fs::remove_file(&config.catalog_path).unwrap();
        std::fs::create_dir(&config.catalog_path).unwrap();

        let err = upload(&mut dashboard, "net.txt", CONTENT, UploadOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::Catalog(_))
        ));
        assert!(!dashboard.store.exists("net.txt").unwrap());
        assert_eq!(dashboard.catalog.len(), 2);

        // the name is free again once the catalog can be written
        std::fs::remove_dir(&config.catalog_path).unwrap();
        upload(&mut dashboard, "net.txt", CONTENT, UploadOptions::default()).unwrap();
    }

    #[test]
    fn test_rejects_non_text_and_duplicates() {
        let (_dir, _config, mut dashboard) = dashboard(caller("alice", Role::Editor));
        let err = upload(&mut dashboard, "net.md", CONTENT, UploadOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidFileName { .. })
        ));

        let err = upload(&mut dashboard, "docker.txt", CONTENT, UploadOptions::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::AlreadyExists(_))
        ));
        assert_eq!(dashboard.catalog.len(), 2);
    }
}
