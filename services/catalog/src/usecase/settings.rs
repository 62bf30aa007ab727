use chrono::Utc;

use crate::domain::repository::SettingsRepository;
use crate::domain::types::Settings;
use crate::error::CatalogServiceError;

// ── GetSettings ──────────────────────────────────────────────────────────────

pub struct GetSettingsUseCase<S: SettingsRepository> {
    pub settings: S,
}

impl<S: SettingsRepository> GetSettingsUseCase<S> {
    pub async fn execute(&self) -> Result<Settings, CatalogServiceError> {
        Ok(Settings {
            registration_enabled: self.settings.registration_enabled().await?,
        })
    }
}

// ── UpdateSettings ───────────────────────────────────────────────────────────

pub struct UpdateSettingsInput {
    pub registration_enabled: Option<bool>,
}

pub struct UpdateSettingsUseCase<S: SettingsRepository> {
    pub settings: S,
}

impl<S: SettingsRepository> UpdateSettingsUseCase<S> {
    /// Apply the provided switches and return the resulting settings.
    pub async fn execute(&self, input: UpdateSettingsInput) -> Result<Settings, CatalogServiceError> {
        let Some(registration_enabled) = input.registration_enabled else {
            return Err(CatalogServiceError::MissingData);
        };
        self.settings
            .set_registration_enabled(registration_enabled, Utc::now())
            .await?;
        tracing::info!(registration_enabled, "registration policy changed");
        Ok(Settings {
            registration_enabled,
        })
    }
}
