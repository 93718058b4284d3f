// ============================================================================
// Kominfo Core - Post & Document Services
// File: crates/kominfo-core/src/services/post_service.rs
// ============================================================================
//! Public lookups with counters: post detail by slug, document downloads

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{ContentEntity, Document, Post};
use crate::error::DomainError;
use crate::repositories::{DocumentRepository, PostRepository};

use super::ContentService;

pub struct PostService {
    content: Arc<ContentService<Post>>,
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(content: Arc<ContentService<Post>>, posts: Arc<dyn PostRepository>) -> Self {
        Self { content, posts }
    }

    pub fn content(&self) -> &ContentService<Post> {
        &self.content
    }

    /// Published post by slug. Counts the view; a failed counter update is
    /// logged and does not fail the page.
    pub async fn read_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_slug(slug)
            .await?
            .filter(|p| p.is_public(self.content.local_now()))
            .ok_or_else(|| DomainError::PageNotFound(format!("post '{}'", slug)))?;

        match self.posts.increment_views(&post.id).await {
            Ok(()) => post.views += 1,
            Err(e) => warn!("Failed to count view for post {}: {}", post.id, e),
        }
        Ok(post)
    }
}

pub struct DocumentService {
    content: Arc<ContentService<Document>>,
    documents: Arc<dyn DocumentRepository>,
}

impl DocumentService {
    pub fn new(content: Arc<ContentService<Document>>, documents: Arc<dyn DocumentRepository>) -> Self {
        Self { content, documents }
    }

    pub fn content(&self) -> &ContentService<Document> {
        &self.content
    }

    /// Returns the file URL to redirect to and counts the download.
    pub async fn download(&self, id: &Uuid) -> Result<String, DomainError> {
        let document = self.content.public_get(id).await?;
        if let Err(e) = self.documents.increment_downloads(id).await {
            warn!("Failed to count download for document {}: {}", id, e);
        }
        Ok(document.file_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentInput, PostInput};
    use crate::repositories::{MockContentRepository, MockDocumentRepository, MockPostRepository};
    use chrono::FixedOffset;

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn post(published: bool) -> Post {
        Post::from_input(PostInput {
            title: "Peluncuran Aplikasi".into(),
            slug: None,
            excerpt: None,
            content: "<p>isi</p>".into(),
            image_url: None,
            category: "Berita".into(),
            author: None,
            is_published: published,
        })
        .unwrap()
    }

    fn post_service(found: Option<Post>, counter_fails: bool) -> PostService {
        let content = ContentService::new(Arc::new(MockContentRepository::<Post>::new()), wib());
        let mut posts = MockPostRepository::new();
        posts.expect_find_by_slug().returning(move |_| Ok(found.clone()));
        posts.expect_increment_views().returning(move |_| {
            if counter_fails {
                Err(DomainError::DatabaseError("down".into()))
            } else {
                Ok(())
            }
        });
        PostService::new(Arc::new(content), Arc::new(posts))
    }

    #[tokio::test]
    async fn test_read_counts_view() {
        let post = post_service(Some(post(true)), false)
            .read_by_slug("peluncuran-aplikasi")
            .await
            .unwrap();
        assert_eq!(post.views, 1);
    }

    #[tokio::test]
    async fn test_counter_failure_does_not_fail_read() {
        let post = post_service(Some(post(true)), true)
            .read_by_slug("peluncuran-aplikasi")
            .await
            .unwrap();
        assert_eq!(post.views, 0);
    }

    #[tokio::test]
    async fn test_draft_is_not_found() {
        let result = post_service(Some(post(false)), false).read_by_slug("x").await;
        assert!(matches!(result, Err(DomainError::PageNotFound(_))));
    }

    #[tokio::test]
    async fn test_download_returns_file_url() {
        let doc = Document::from_input(DocumentInput {
            title: "Renstra".into(),
            description: None,
            category: "Perencanaan".into(),
            year: "2024".into(),
            file_url: "/storage/documents/2024/01/renstra.pdf".into(),
            file_name: None,
            file_size: None,
            is_published: true,
        })
        .unwrap();
        let id = doc.id;

        let mut repo = MockContentRepository::<Document>::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(doc.clone())));
        let mut counters = MockDocumentRepository::new();
        counters.expect_increment_downloads().times(1).returning(|_| Ok(()));

        let service = DocumentService::new(Arc::new(ContentService::new(Arc::new(repo), wib())), Arc::new(counters));
        assert_eq!(service.download(&id).await.unwrap(), "/storage/documents/2024/01/renstra.pdf");
    }
}
