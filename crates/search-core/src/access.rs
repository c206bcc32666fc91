// search-core/src/access.rs
//! Role based capabilities and the visibility filter
//!
//! Admins may do anything, editors may create procedures and change their own, viewers
//! may only read. Everyone sees public procedures and the ones they own; admins see all.

use serde::{Deserialize, Serialize};

use crate::models::ProcedureMeta;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

/// The identity a request is made as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub username: String,
    pub role: Role,
    /// Bypasses every role check
    pub superuser: bool,
}

impl Caller {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            superuser: false,
        }
    }

    pub fn superuser(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Admin,
            superuser: true,
        }
    }

    fn is_admin(&self) -> bool {
        self.superuser || self.role == Role::Admin
    }

    pub fn can_view(&self) -> bool {
        true
    }

    pub fn can_create(&self) -> bool {
        self.is_admin() || self.role == Role::Editor
    }

    pub fn can_edit(&self, procedure: &ProcedureMeta) -> bool {
        self.owns_or_admin(procedure)
    }

    pub fn can_delete(&self, procedure: &ProcedureMeta) -> bool {
        self.owns_or_admin(procedure)
    }

    fn owns_or_admin(&self, procedure: &ProcedureMeta) -> bool {
        if self.is_admin() {
            return true;
        }
        self.role == Role::Editor && procedure.is_owned_by(&self.username)
    }

    /// Whether the procedure belongs to the caller's visible set
    pub fn sees(&self, procedure: &ProcedureMeta) -> bool {
        self.is_admin() || procedure.is_public || procedure.is_owned_by(&self.username)
    }

    pub fn permissions(&self, procedure: &ProcedureMeta) -> Permissions {
        Permissions {
            can_edit: self.can_edit(procedure),
            can_delete: self.can_delete(procedure),
        }
    }
}

/// Per record capabilities shown next to a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub can_edit: bool,
    pub can_delete: bool,
}

/// Filter `procedures` down to what `caller` may see, keeping their order.
pub fn visible_procedures<'a, I>(caller: &Caller, procedures: I) -> Vec<ProcedureMeta>
where
    I: IntoIterator<Item = &'a ProcedureMeta>,
{
    procedures
        .into_iter()
        .filter(|p| caller.sees(p))
        .cloned()
        .collect()
}
