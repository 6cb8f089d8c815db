//! Account settings: profile, notification toggles and display preferences.
//!
//! The profile is edited through a [`ProfileForm`] that collects inline
//! field errors. Preferences are small closed enumerations parsed from and
//! printed as the short codes the settings screen stores.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::form::FieldErrors;

/// Generates a preference enum with its short code, display label and
/// parse error.
macro_rules! preference_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $error:ident, $what:literal {
            $( $(#[$variant_meta:meta])* $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $code)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the stored short code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Human-readable option label.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[doc = concat!("Error returned when parsing an unknown ", $what, ".")]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $error {
            /// The unrecognised input value.
            pub input: String,
        }

        impl fmt::Display for $error {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("unknown ", $what, ": {}"), self.input)
            }
        }

        impl std::error::Error for $error {}

        impl std::str::FromStr for $name {
            type Err = $error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(Self::$variant),)+
                    _ => Err($error {
                        input: s.to_owned(),
                    }),
                }
            }
        }
    };
}

preference_enum! {
    /// Interface language.
    Language, ParseLanguageError, "language" {
        #[default]
        English => ("en", "English"),
        Spanish => ("es", "Español"),
        French => ("fr", "Français"),
    }
}

preference_enum! {
    /// Timezone used for appointment times.
    Timezone, ParseTimezoneError, "timezone" {
        #[default]
        Pacific => ("PST", "Pacific Standard Time"),
        Mountain => ("MST", "Mountain Standard Time"),
        Central => ("CST", "Central Standard Time"),
        Eastern => ("EST", "Eastern Standard Time"),
    }
}

preference_enum! {
    /// Currency used to display prices.
    Currency, ParseCurrencyError, "currency" {
        #[default]
        Usd => ("USD", "USD ($)"),
        Cad => ("CAD", "CAD ($)"),
        Eur => ("EUR", "EUR (€)"),
    }
}

/// Display preferences chosen on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountPreferences {
    pub language: Language,
    pub timezone: Timezone,
    pub currency: Currency,
}

impl AccountPreferences {
    /// Starts from the default preferences.
    pub fn builder() -> AccountPreferencesBuilder {
        AccountPreferencesBuilder::default()
    }
}

/// Builder for [`AccountPreferences`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountPreferencesBuilder {
    preferences: AccountPreferences,
}

impl AccountPreferencesBuilder {
    pub fn language(mut self, language: Language) -> Self {
        self.preferences.language = language;
        self
    }

    pub fn timezone(mut self, timezone: Timezone) -> Self {
        self.preferences.timezone = timezone;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.preferences.currency = currency;
        self
    }

    pub fn build(self) -> AccountPreferences {
        self.preferences
    }
}

/// Notification channels the customer has opted into. All start enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub service_reminders: bool,
    pub promotional_emails: bool,
    pub sms_updates: bool,
    pub technical_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            service_reminders: true,
            promotional_emails: true,
            sms_updates: true,
            technical_alerts: true,
        }
    }
}

/// Validated personal details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Profile {
    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Editable profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
}

impl ProfileField {
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
    ];

    /// Fields that must not be left blank.
    pub const REQUIRED: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    const fn index(self) -> usize {
        self as usize
    }
}

pub const INVALID_EMAIL_MESSAGE: &str = "Enter a valid email address";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// In-progress edit of the customer's [`Profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    values: [String; 5],
    errors: FieldErrors<ProfileField>,
}

impl ProfileForm {
    /// Seeds the form from the saved profile.
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            values: [
                profile.first_name.clone(),
                profile.last_name.clone(),
                profile.email.clone(),
                profile.phone.clone(),
                profile.address.clone(),
            ],
            errors: FieldErrors::default(),
        }
    }

    /// Current text of `field`, untrimmed.
    pub fn value(&self, field: ProfileField) -> &str {
        self.values[field.index()].as_str()
    }

    /// Updates a field and clears any error shown for it.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
        self.errors.clear(field);
    }

    /// Field errors from the last rejected save.
    pub fn errors(&self) -> &FieldErrors<ProfileField> {
        &self.errors
    }

    /// Validates the form, recording inline errors on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal::domain::{Profile, ProfileField, ProfileForm, REQUIRED_FIELD_MESSAGE};
    ///
    /// let profile = Profile {
    ///     first_name: "John".to_owned(),
    ///     last_name: "Doe".to_owned(),
    ///     email: "john.doe@email.com".to_owned(),
    ///     phone: String::new(),
    ///     address: String::new(),
    /// };
    /// let mut form = ProfileForm::for_profile(&profile);
    /// form.set(ProfileField::LastName, "");
    ///
    /// assert!(form.submit().is_none());
    /// assert_eq!(form.errors().get(ProfileField::LastName), Some(REQUIRED_FIELD_MESSAGE));
    ///
    /// form.set(ProfileField::LastName, "Smith");
    /// assert!(form.errors().is_empty());
    /// assert_eq!(form.submit().map(|p| p.full_name()).as_deref(), Some("John Smith"));
    /// ```
    pub fn submit(&mut self) -> Option<Profile> {
        let mut errors = FieldErrors::default();
        for field in ProfileField::REQUIRED {
            errors.require(field, self.value(field));
        }
        let email = self.value(ProfileField::Email).trim();
        if !email.is_empty() && !email_regex().is_match(email) {
            errors.insert(ProfileField::Email, INVALID_EMAIL_MESSAGE);
        }
        if !errors.is_empty() {
            debug!(invalid_fields = errors.len(), "profile form rejected");
            self.errors = errors;
            return None;
        }

        let [first_name, last_name, email, phone, address] =
            self.values.clone().map(|value| value.trim().to_owned());
        Some(Profile {
            first_name,
            last_name,
            email,
            phone,
            address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::REQUIRED_FIELD_MESSAGE;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> Profile {
        Profile {
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: "john.doe@email.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            address: "123 Oak Street, Anytown, CA 90210".to_owned(),
        }
    }

    #[rstest]
    fn defaults_match_initial_settings() {
        let prefs = AccountPreferences::default();
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.timezone, Timezone::Pacific);
        assert_eq!(prefs.currency, Currency::Usd);
        assert!(NotificationSettings::default().technical_alerts);
    }

    #[rstest]
    #[case::spanish("es", Language::Spanish)]
    #[case::french("fr", Language::French)]
    fn language_parses_codes(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(input.parse::<Language>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case::lowercase("pst")]
    #[case::unknown("GMT")]
    fn timezone_rejects_unknown_codes(#[case] input: &str) {
        assert_eq!(
            input.parse::<Timezone>(),
            Err(ParseTimezoneError {
                input: input.to_owned()
            })
        );
    }

    #[rstest]
    fn currency_labels_and_codes_align() {
        for currency in Currency::ALL {
            let parsed: Currency = currency.as_str().parse().expect("round trip");
            assert_eq!(parsed, *currency);
        }
        assert_eq!(Currency::Eur.label(), "EUR (€)");
    }

    #[rstest]
    fn builder_overrides_selected_fields() {
        let prefs = AccountPreferences::builder()
            .timezone(Timezone::Eastern)
            .currency(Currency::Cad)
            .build();
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.timezone, Timezone::Eastern);
        assert_eq!(prefs.currency, Currency::Cad);
    }

    #[rstest]
    fn preferences_serialise_as_codes() {
        let json = serde_json::to_value(AccountPreferences::default()).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({"language": "en", "timezone": "PST", "currency": "USD"})
        );
    }

    #[rstest]
    fn untouched_profile_submits(profile: Profile) {
        let mut form = ProfileForm::for_profile(&profile);
        assert_eq!(form.submit(), Some(profile));
    }

    #[rstest]
    fn blank_required_fields_are_reported(profile: Profile) {
        let mut form = ProfileForm::for_profile(&profile);
        form.set(ProfileField::FirstName, "  ");
        form.set(ProfileField::Phone, "");

        assert_eq!(form.submit(), None);
        assert_eq!(
            form.errors().get(ProfileField::FirstName),
            Some(REQUIRED_FIELD_MESSAGE)
        );
        assert_eq!(form.errors().get(ProfileField::Phone), None);
    }

    #[rstest]
    #[case::missing_at("john.doe.email.com")]
    #[case::missing_domain_dot("john@email")]
    #[case::whitespace("john doe@email.com")]
    fn malformed_email_is_reported(profile: Profile, #[case] email: &str) {
        let mut form = ProfileForm::for_profile(&profile);
        form.set(ProfileField::Email, email);

        assert_eq!(form.submit(), None);
        assert_eq!(
            form.errors().get(ProfileField::Email),
            Some(INVALID_EMAIL_MESSAGE)
        );
    }

    #[rstest]
    fn editing_clears_only_that_field(profile: Profile) {
        let mut form = ProfileForm::for_profile(&profile);
        form.set(ProfileField::FirstName, "");
        form.set(ProfileField::LastName, "");
        assert_eq!(form.submit(), None);

        form.set(ProfileField::FirstName, "Jane");
        assert_eq!(form.errors().get(ProfileField::FirstName), None);
        assert_eq!(
            form.errors().get(ProfileField::LastName),
            Some(REQUIRED_FIELD_MESSAGE)
        );
    }
}
