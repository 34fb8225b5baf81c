//! Profile card with a read-only and an edit mode.

use tracing::debug;

use common::{AppError, AppResult};
use domain::{Profile, ProfileField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    profile: Profile,
    mode: ProfileMode,
}

impl ProfileView {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            mode: ProfileMode::Viewing,
        }
    }

    pub fn activate_edit(&mut self) {
        self.mode = ProfileMode::Editing;
    }

    /// Leave edit mode, keeping the edits.
    pub fn activate_save(&mut self) -> &Profile {
        debug!("Profile '{}' saved locally", self.profile.id);
        self.mode = ProfileMode::Viewing;
        &self.profile
    }

    /// Edit one field. Only allowed in edit mode.
    pub fn update(&mut self, field: ProfileField) -> AppResult<()> {
        if self.mode != ProfileMode::Editing {
            return Err(AppError::validation("profile is not in edit mode"));
        }
        self.profile.apply(field);
        Ok(())
    }

    pub fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn full_name(&self) -> String {
        self.profile.full_name()
    }

    pub fn role_badges(&self) -> Vec<String> {
        self.profile.role_badges()
    }
}
