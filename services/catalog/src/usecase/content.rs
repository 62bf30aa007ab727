use chrono::Utc;

use streamflix_domain::id::ContentId;

use crate::domain::repository::ContentRepository;
use crate::domain::types::{Content, ContentFilter, ContentPatch, NewContent};
use crate::error::CatalogServiceError;

// ── ListContents ─────────────────────────────────────────────────────────────

pub struct ListContentsUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> ListContentsUseCase<C> {
    /// Blank filter values are treated as absent.
    pub async fn execute(&self, filter: ContentFilter) -> Result<Vec<Content>, CatalogServiceError> {
        let filter = ContentFilter {
            category: filter.category.filter(|c| !c.trim().is_empty()),
            search: filter.search.filter(|s| !s.trim().is_empty()),
        };
        self.contents.list(&filter).await
    }
}

// ── GetContent ───────────────────────────────────────────────────────────────

pub struct GetContentUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> GetContentUseCase<C> {
    pub async fn execute(&self, id: ContentId) -> Result<Content, CatalogServiceError> {
        self.contents
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ContentNotFound)
    }
}

// ── ListCategories ───────────────────────────────────────────────────────────

pub struct ListCategoriesUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> ListCategoriesUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<String>, CatalogServiceError> {
        self.contents.categories().await
    }
}

// ── CreateContent ────────────────────────────────────────────────────────────

pub struct CreateContentUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> CreateContentUseCase<C> {
    pub async fn execute(&self, input: NewContent) -> Result<Content, CatalogServiceError> {
        if input.title.trim().is_empty() || input.video_url.trim().is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        let now = Utc::now();
        let content = Content {
            id: ContentId::generate(),
            title: input.title,
            description: input.description,
            category: input.category,
            video_url: input.video_url,
            video_source: input.video_source,
            cover_image: input.cover_image,
            kind: input.kind,
            duration: input.duration,
            year: input.year,
            created_at: now,
            updated_at: now,
        };
        self.contents.create(&content).await?;
        tracing::info!(content_id = %content.id, "content created");
        Ok(content)
    }
}

// ── UpdateContent ────────────────────────────────────────────────────────────

pub struct UpdateContentUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> UpdateContentUseCase<C> {
    pub async fn execute(
        &self,
        id: ContentId,
        patch: ContentPatch,
    ) -> Result<Content, CatalogServiceError> {
        if patch.is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        let current = self
            .contents
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::ContentNotFound)?;
        let updated = current.apply(patch, Utc::now());
        // Deleted between read and write.
        if !self.contents.update(&updated).await? {
            return Err(CatalogServiceError::ContentNotFound);
        }
        Ok(updated)
    }
}

// ── DeleteContent ────────────────────────────────────────────────────────────

pub struct DeleteContentUseCase<C: ContentRepository> {
    pub contents: C,
}

impl<C: ContentRepository> DeleteContentUseCase<C> {
    pub async fn execute(&self, id: ContentId) -> Result<(), CatalogServiceError> {
        if !self.contents.delete(id).await? {
            return Err(CatalogServiceError::ContentNotFound);
        }
        tracing::info!(content_id = %id, "content deleted");
        Ok(())
    }
}
