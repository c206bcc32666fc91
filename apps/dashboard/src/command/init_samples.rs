// apps/dashboard/src/command/init_samples.rs
//! Install the bundled sample procedures

use super::{Command, Dashboard};
use crate::config::Config;
use crate::error::Result;
use search_core::{install_samples, Caller, SampleInstall};

pub struct InitSamplesCommand {
    config: Config,
    caller: Caller,
}

impl InitSamplesCommand {
    pub fn new(config: Config, caller: Caller) -> Self {
        Self { config, caller }
    }
}

pub fn init_samples(dashboard: &mut Dashboard) -> Result<Vec<SampleInstall>> {
    dashboard.require_create()?;

    let owner = dashboard.caller.username.clone();
    let installed = install_samples(&dashboard.store, &mut dashboard.catalog, Some(&owner))?;
    if installed.iter().any(|s| s.record_created) {
        dashboard.save()?;
    }
    Ok(installed)
}

#[async_trait::async_trait]
impl Command for InitSamplesCommand {
    async fn execute(&self) -> Result<()> {
        let mut dashboard = Dashboard::open(&self.config, self.caller.clone())?;
        let installed = init_samples(&mut dashboard)?;

        println!("📦 Sample procedures in {:?}", dashboard.store.root());
        for sample in &installed {
            let status = match (sample.file_created, sample.record_created) {
                (true, true) => "created",
                (true, false) => "file restored",
                (false, true) => "registered",
                (false, false) => "already present",
            };
            println!("  {} {}", sample.filename, status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::{caller, dashboard};
    use crate::error::DashboardError;
    use search_core::{Role, SAMPLES};

    #[test]
    fn test_editor_installs_samples() {
        let (_dir, config, mut dashboard) = dashboard(caller("alice", Role::Editor));
        let installed = init_samples(&mut dashboard).unwrap();
        assert_eq!(installed.len(), SAMPLES.len());

        // docker.txt is already catalogued and keeps its content
        let docker = installed.iter().find(|s| s.filename == "docker.txt").unwrap();
        assert!(!docker.file_created && !docker.record_created);
        assert!(dashboard.store.read_file("docker.txt").unwrap().contains("[Base]"));

        let reopened = Dashboard::open(&config, caller("bob", Role::Viewer)).unwrap();
        assert_eq!(reopened.catalog.len(), 2 + SAMPLES.len() - 1);
        assert_eq!(reopened.visible().len(), SAMPLES.len());
        assert!(reopened.catalog.iter().all(|p| p.owner.as_deref() == Some("alice")));
    }

    #[test]
    fn test_viewer_denied() {
        let (_dir, _config, mut dashboard) = dashboard(caller("bob", Role::Viewer));
        let err = init_samples(&mut dashboard).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DashboardError>(),
            Some(DashboardError::PermissionDenied { .. })
        ));
        assert_eq!(dashboard.store.list().unwrap().len(), 2);
    }
}
