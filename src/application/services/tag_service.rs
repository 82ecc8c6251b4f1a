//! Tag catalogue queries.

use std::sync::Arc;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::DetailError;

pub struct TagService {
    repository: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    /// Lists every known tag ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ErrorCode::InternalServerError`] on storage failures.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, DetailError> {
        self.repository.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list tags");
            DetailError::internal(e)
        })
    }
}
