use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        providers::{
            data::{NewProvider, ProviderUpdate},
            errors::ProvidersServiceError,
            records::{ProviderId, ProviderRecord},
            repository::PgProvidersRepository,
        },
        repository::Tracking,
    },
};

#[derive(Debug, Clone)]
pub struct PgProvidersService {
    db: Db,
    repository: PgProvidersRepository,
}

impl PgProvidersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProvidersRepository::new(),
        }
    }
}

#[async_trait]
impl ProvidersService for PgProvidersService {
    async fn list_providers(&self) -> Result<Vec<ProviderRecord>, ProvidersServiceError> {
        let mut tx = self.db.begin().await?;

        let providers = self.repository.list_providers(&mut tx).await?;

        tx.commit().await?;

        Ok(providers)
    }

    async fn get_provider(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderRecord, ProvidersServiceError> {
        let mut tx = self.db.begin().await?;

        let provider = self
            .repository
            .get_provider(&mut tx, provider, Tracking::Untracked)
            .await?
            .ok_or(ProvidersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(provider)
    }

    async fn create_provider(
        &self,
        provider: NewProvider,
    ) -> Result<ProviderRecord, ProvidersServiceError> {
        let mut tx = self.db.begin().await?;

        if let Some(existing) = self
            .repository
            .find_provider_by_name(&mut tx, &provider.name)
            .await?
        {
            debug!(existing = %existing.id, name = %provider.name, "provider name taken");

            return Err(ProvidersServiceError::AlreadyExists);
        }

        let created = self.repository.create_provider(&mut tx, &provider).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_provider(
        &self,
        provider: ProviderId,
        update: ProviderUpdate,
    ) -> Result<ProviderRecord, ProvidersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_provider(&mut tx, provider, &update)
            .await?
            .ok_or(ProvidersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_provider(&self, provider: ProviderId) -> Result<(), ProvidersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .get_provider(&mut tx, provider, Tracking::Tracked)
            .await?
            .ok_or(ProvidersServiceError::NotFound)?;

        let rows_affected = self.repository.remove_provider(&mut tx, &record).await?;

        if rows_affected == 0 {
            return Err(ProvidersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProvidersService: Send + Sync {
    async fn list_providers(&self) -> Result<Vec<ProviderRecord>, ProvidersServiceError>;

    async fn get_provider(
        &self,
        provider: ProviderId,
    ) -> Result<ProviderRecord, ProvidersServiceError>;

    /// Creates a provider unless one with the same name exists, ignoring case.
    async fn create_provider(
        &self,
        provider: NewProvider,
    ) -> Result<ProviderRecord, ProvidersServiceError>;

    async fn update_provider(
        &self,
        provider: ProviderId,
        update: ProviderUpdate,
    ) -> Result<ProviderRecord, ProvidersServiceError>;

    async fn delete_provider(&self, provider: ProviderId) -> Result<(), ProvidersServiceError>;
}
