//! Account settings screen.

use tracing::info;

use crate::domain::{AccountPreferences, NotificationSettings, Profile, ProfileForm};

/// Profile, notification and preference settings.
///
/// The profile form is seeded from the saved profile and reseeded after
/// every successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountScreen {
    profile: Profile,
    form: ProfileForm,
    notifications: NotificationSettings,
    preferences: AccountPreferences,
}

impl AccountScreen {
    /// Seeds the profile form from `profile`.
    pub fn new(profile: Profile) -> Self {
        let form = ProfileForm::for_profile(&profile);
        Self {
            profile,
            form,
            notifications: NotificationSettings::default(),
            preferences: AccountPreferences::default(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    /// Edits stay in the form until saved or discarded.
    pub fn form_mut(&mut self) -> &mut ProfileForm {
        &mut self.form
    }

    /// Saves the profile form. Returns `false` when fields need attention.
    pub fn save_profile(&mut self) -> bool {
        let Some(profile) = self.form.submit() else {
            return false;
        };
        info!(customer = %profile.full_name(), "profile saved");
        self.form = ProfileForm::for_profile(&profile);
        self.profile = profile;
        true
    }

    /// Drops unsaved edits.
    pub fn discard_changes(&mut self) {
        self.form = ProfileForm::for_profile(&self.profile);
    }

    pub fn notifications(&self) -> NotificationSettings {
        self.notifications
    }

    /// Notification toggles apply immediately.
    pub fn set_notifications(&mut self, notifications: NotificationSettings) {
        self.notifications = notifications;
    }

    pub fn preferences(&self) -> AccountPreferences {
        self.preferences
    }

    /// Preferences apply immediately.
    pub fn set_preferences(&mut self, preferences: AccountPreferences) {
        self.preferences = preferences;
    }
}
