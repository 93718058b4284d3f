// ============================================================================
// Kominfo Infrastructure - Content Table Mappings
// File: crates/kominfo-infrastructure/src/database/postgres/records.rs
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use kominfo_core::domain::{
    Agenda, Announcement, Document, Gallery, Pegawai, Post, ProgramDocument, ServiceItem,
};

use super::content_repo_impl::{PgContentRepository, PgQueryAs, PgRecord};

pub type PgPostRepository = PgContentRepository<Post>;
pub type PgAnnouncementRepository = PgContentRepository<Announcement>;
pub type PgAgendaRepository = PgContentRepository<Agenda>;
pub type PgServiceItemRepository = PgContentRepository<ServiceItem>;
pub type PgGalleryRepository = PgContentRepository<Gallery>;
pub type PgDocumentRepository = PgContentRepository<Document>;
pub type PgProgramDocumentRepository = PgContentRepository<ProgramDocument>;
pub type PgPegawaiRepository = PgContentRepository<Pegawai>;

// ----------------------------------------------------------------------------
// posts
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub author: Option<String>,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub views: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            slug: row.slug,
            excerpt: row.excerpt,
            content: row.content,
            image_url: row.image_url,
            category: row.category,
            author: row.author,
            is_published: row.is_published,
            published_at: row.published_at,
            views: row.views,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Post {
    type Row = PostRow;

    const TABLE: &'static str = "posts";
    const COLUMNS: &'static str = "id, title, slug, excerpt, content, image_url, category, author, \
        is_published, published_at, views, created_at, updated_at";
    const FIELDS: &'static [&'static str] = &[
        "title", "slug", "excerpt", "content", "image_url", "category", "author", "is_published", "published_at",
    ];
    const ORDER_BY: &'static str = "COALESCE(published_at, created_at) DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, PostRow>) -> PgQueryAs<'q, PostRow> {
        query
            .bind(self.title.clone())
            .bind(self.slug.clone())
            .bind(self.excerpt.clone())
            .bind(self.content.clone())
            .bind(self.image_url.clone())
            .bind(self.category.clone())
            .bind(self.author.clone())
            .bind(self.is_published)
            .bind(self.published_at)
    }
}

// ----------------------------------------------------------------------------
// announcements
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct AnnouncementRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub attachment_url: Option<String>,
    pub is_active: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AnnouncementRow> for Announcement {
    fn from(row: AnnouncementRow) -> Self {
        Announcement {
            id: row.id,
            title: row.title,
            content: row.content,
            attachment_url: row.attachment_url,
            is_active: row.is_active,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Announcement {
    type Row = AnnouncementRow;

    const TABLE: &'static str = "announcements";
    const COLUMNS: &'static str =
        "id, title, content, attachment_url, is_active, start_date, end_date, created_at, updated_at";
    const FIELDS: &'static [&'static str] =
        &["title", "content", "attachment_url", "is_active", "start_date", "end_date"];
    const ORDER_BY: &'static str = "created_at DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, AnnouncementRow>) -> PgQueryAs<'q, AnnouncementRow> {
        query
            .bind(self.title.clone())
            .bind(self.content.clone())
            .bind(self.attachment_url.clone())
            .bind(self.is_active)
            .bind(self.start_date)
            .bind(self.end_date)
    }
}

// ----------------------------------------------------------------------------
// agenda
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct AgendaRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub mode: String,
    pub link_url: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AgendaRow> for Agenda {
    fn from(row: AgendaRow) -> Self {
        Agenda {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            start_at: row.start_at,
            end_at: row.end_at,
            mode: row.mode.parse().unwrap_or_default(),
            link_url: row.link_url,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Agenda {
    type Row = AgendaRow;

    const TABLE: &'static str = "agenda";
    const COLUMNS: &'static str = "id, title, description, location, start_at, end_at, mode, link_url, \
        is_published, created_at, updated_at";
    const FIELDS: &'static [&'static str] =
        &["title", "description", "location", "start_at", "end_at", "mode", "link_url", "is_published"];
    const ORDER_BY: &'static str = "start_at DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, AgendaRow>) -> PgQueryAs<'q, AgendaRow> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.location.clone())
            .bind(self.start_at)
            .bind(self.end_at)
            .bind(self.mode.as_str())
            .bind(self.link_url.clone())
            .bind(self.is_published)
    }
}

// ----------------------------------------------------------------------------
// services
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct ServiceItemRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub link_url: Option<String>,
    pub category: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ServiceItemRow> for ServiceItem {
    fn from(row: ServiceItemRow) -> Self {
        ServiceItem {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            link_url: row.link_url,
            category: row.category,
            display_order: row.display_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for ServiceItem {
    type Row = ServiceItemRow;

    const TABLE: &'static str = "services";
    const COLUMNS: &'static str =
        "id, title, description, icon, link_url, category, display_order, is_active, created_at, updated_at";
    const FIELDS: &'static [&'static str] =
        &["title", "description", "icon", "link_url", "category", "display_order", "is_active"];
    const ORDER_BY: &'static str = "display_order ASC, title ASC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, ServiceItemRow>) -> PgQueryAs<'q, ServiceItemRow> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.icon.clone())
            .bind(self.link_url.clone())
            .bind(self.category.clone())
            .bind(self.display_order)
            .bind(self.is_active)
    }
}

// ----------------------------------------------------------------------------
// galleries
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct GalleryRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<GalleryRow> for Gallery {
    fn from(row: GalleryRow) -> Self {
        Gallery {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            category: row.category,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Gallery {
    type Row = GalleryRow;

    const TABLE: &'static str = "galleries";
    const COLUMNS: &'static str =
        "id, title, description, image_url, category, is_published, created_at, updated_at";
    const FIELDS: &'static [&'static str] = &["title", "description", "image_url", "category", "is_published"];
    const ORDER_BY: &'static str = "created_at DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, GalleryRow>) -> PgQueryAs<'q, GalleryRow> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.image_url.clone())
            .bind(self.category.clone())
            .bind(self.is_published)
    }
}

// ----------------------------------------------------------------------------
// documents
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub year: String,
    pub file_url: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub downloads: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            title: row.title,
            description: row.description,
            category: row.category,
            year: row.year,
            file_url: row.file_url,
            file_name: row.file_name,
            file_size: row.file_size,
            downloads: row.downloads,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Document {
    type Row = DocumentRow;

    const TABLE: &'static str = "documents";
    const COLUMNS: &'static str = "id, title, description, category, year, file_url, file_name, file_size, \
        downloads, is_published, created_at, updated_at";
    const FIELDS: &'static [&'static str] =
        &["title", "description", "category", "year", "file_url", "file_name", "file_size", "is_published"];
    const ORDER_BY: &'static str = "year DESC, created_at DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, DocumentRow>) -> PgQueryAs<'q, DocumentRow> {
        query
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.category.clone())
            .bind(self.year.clone())
            .bind(self.file_url.clone())
            .bind(self.file_name.clone())
            .bind(self.file_size)
            .bind(self.is_published)
    }
}

// ----------------------------------------------------------------------------
// program_documents
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct ProgramDocumentRow {
    pub id: Uuid,
    pub program: String,
    pub title: String,
    pub description: Option<String>,
    pub year: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProgramDocumentRow> for ProgramDocument {
    fn from(row: ProgramDocumentRow) -> Self {
        ProgramDocument {
            id: row.id,
            program: row.program,
            title: row.title,
            description: row.description,
            year: row.year,
            file_url: row.file_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for ProgramDocument {
    type Row = ProgramDocumentRow;

    const TABLE: &'static str = "program_documents";
    const COLUMNS: &'static str = "id, program, title, description, year, file_url, created_at, updated_at";
    const FIELDS: &'static [&'static str] = &["program", "title", "description", "year", "file_url"];
    const ORDER_BY: &'static str = "program ASC, year DESC, created_at DESC";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, ProgramDocumentRow>) -> PgQueryAs<'q, ProgramDocumentRow> {
        query
            .bind(self.program.clone())
            .bind(self.title.clone())
            .bind(self.description.clone())
            .bind(self.year.clone())
            .bind(self.file_url.clone())
    }
}

// ----------------------------------------------------------------------------
// pegawai
// ----------------------------------------------------------------------------

#[derive(Debug, FromRow)]
pub struct PegawaiRow {
    pub id: Uuid,
    pub name: String,
    pub nip: Option<String>,
    pub position: String,
    pub rank: Option<String>,
    pub unit: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PegawaiRow> for Pegawai {
    fn from(row: PegawaiRow) -> Self {
        Pegawai {
            id: row.id,
            name: row.name,
            nip: row.nip,
            position: row.position,
            rank: row.rank,
            unit: row.unit,
            photo_url: row.photo_url,
            display_order: row.display_order,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl PgRecord for Pegawai {
    type Row = PegawaiRow;

    const TABLE: &'static str = "pegawai";
    const COLUMNS: &'static str = "id, name, nip, position, rank, unit, photo_url, display_order, is_active, \
        created_at, updated_at";
    const FIELDS: &'static [&'static str] =
        &["name", "nip", "position", "rank", "unit", "photo_url", "display_order", "is_active"];
    const ORDER_BY: &'static str = "display_order ASC, name ASC";
    const SEARCH_COLUMN: &'static str = "name";

    fn bind_fields<'q>(&self, query: PgQueryAs<'q, PegawaiRow>) -> PgQueryAs<'q, PegawaiRow> {
        query
            .bind(self.name.clone())
            .bind(self.nip.clone())
            .bind(self.position.clone())
            .bind(self.rank.clone())
            .bind(self.unit.clone())
            .bind(self.photo_url.clone())
            .bind(self.display_order)
            .bind(self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_count(columns: &str) -> usize {
        columns.split(',').count()
    }

    #[test]
    fn test_fields_are_a_subset_of_columns() {
        fn check<T: PgRecord>() {
            let columns: Vec<&str> = T::COLUMNS.split(',').map(str::trim).collect();
            for field in T::FIELDS {
                assert!(columns.contains(field), "{}.{} missing from COLUMNS", T::TABLE, field);
            }
            assert!(columns.contains(&"id") && columns.contains(&"created_at"));
        }
        check::<Post>();
        check::<Announcement>();
        check::<Agenda>();
        check::<ServiceItem>();
        check::<Gallery>();
        check::<Document>();
        check::<ProgramDocument>();
        check::<Pegawai>();
    }

    #[test]
    fn test_counters_are_read_only() {
        assert_eq!(column_count(Post::COLUMNS), Post::FIELDS.len() + 4);
        assert!(!Post::FIELDS.contains(&"views"));
        assert!(!Document::FIELDS.contains(&"downloads"));
    }
}
