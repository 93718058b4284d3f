// ============================================================================
// Kominfo Core - Content Service
// File: crates/kominfo-core/src/services/content_service.rs
// ============================================================================
//! Admin CRUD and public listing shared by every flat content table

use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use kominfo_shared::types::Page;

use crate::domain::listing::{distinct_categories, distinct_years};
use crate::domain::{
    apply_listing, group_agenda_by_day, AdminListQuery, Agenda, AgendaDay, ContentEntity, ListQuery, ProgramDocument,
};
use crate::error::DomainError;
use crate::repositories::ContentRepository;

/// Options for the filter dropdowns of a public list page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingFilters {
    pub categories: Vec<String>,
    pub years: Vec<String>,
}

pub struct ContentService<T: ContentEntity> {
    repo: Arc<dyn ContentRepository<T>>,
    offset: FixedOffset,
}

impl<T: ContentEntity> ContentService<T> {
    pub fn new(repo: Arc<dyn ContentRepository<T>>, offset: FixedOffset) -> Self {
        Self { repo, offset }
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn local_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    /// Count and page are fetched concurrently.
    pub async fn admin_list(&self, query: &AdminListQuery) -> Result<Page<T>, DomainError> {
        let pagination = query.pagination();
        let search = query.search_term();
        let (items, total) = tokio::try_join!(
            self.repo.list_page(search.clone(), pagination),
            self.repo.count(search),
        )?;
        Ok(Page::from_parts(items, pagination, total))
    }

    pub async fn get(&self, id: &Uuid) -> Result<T, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::LABEL, *id))
    }

    pub async fn create(&self, input: T::Input) -> Result<T, DomainError> {
        let entity = T::from_input(input)?;
        let created = self.repo.create(&entity).await?;
        info!("{} created: {}", T::LABEL, created.id());
        Ok(created)
    }

    pub async fn update(&self, id: &Uuid, input: T::Input) -> Result<T, DomainError> {
        let mut entity = self.get(id).await?;
        entity.apply_input(input)?;
        let updated = self.repo.update(&entity).await?;
        info!("{} updated: {}", T::LABEL, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found(T::LABEL, *id));
        }
        info!("{} deleted: {}", T::LABEL, id);
        Ok(())
    }

    /// Every row the public site may show right now.
    pub async fn public_items(&self) -> Result<Vec<T>, DomainError> {
        let now = self.local_now();
        let rows = self.repo.list_all().await?;
        Ok(rows.into_iter().filter(|row| row.is_public(now)).collect())
    }

    pub async fn public_list(&self, query: &ListQuery) -> Result<Page<T>, DomainError> {
        Ok(apply_listing(self.public_items().await?, query))
    }

    pub async fn public_filters(&self) -> Result<ListingFilters, DomainError> {
        let items = self.public_items().await?;
        Ok(ListingFilters {
            categories: distinct_categories(&items),
            years: distinct_years(&items),
        })
    }

    /// A single public row; hidden rows look missing.
    pub async fn public_get(&self, id: &Uuid) -> Result<T, DomainError> {
        let entity = self.get(id).await?;
        if entity.is_public(self.local_now()) {
            Ok(entity)
        } else {
            Err(DomainError::not_found(T::LABEL, *id))
        }
    }
}

impl ContentService<Agenda> {
    /// Published agenda grouped by local day, earliest first. `month` narrows
    /// to one calendar month (`(year, month)`, local time).
    pub async fn agenda_by_day(&self, month: Option<(i32, u32)>) -> Result<Vec<AgendaDay>, DomainError> {
        let mut items = self.public_items().await?;
        if let Some((year, month)) = month {
            items.retain(|a| {
                let local = a.start_at.with_timezone(&self.offset);
                local.year() == year && local.month() == month
            });
        }
        items.sort_by_key(|a| a.start_at);
        Ok(group_agenda_by_day(items, self.offset))
    }
}

impl ContentService<ProgramDocument> {
    pub async fn by_program(&self, program: &str, query: &ListQuery) -> Result<Page<ProgramDocument>, DomainError> {
        let program = kominfo_shared::utils::slugify(program);
        let items = self
            .public_items()
            .await?
            .into_iter()
            .filter(|d| d.program == program)
            .collect();
        Ok(apply_listing(items, query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AgendaInput, AgendaMode, Gallery, GalleryInput, Listable};
    use crate::repositories::MockContentRepository;
    use chrono::TimeZone;
    use kominfo_shared::types::Pagination;

    fn wib() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn gallery(title: &str, published: bool) -> Gallery {
        Gallery::from_input(GalleryInput {
            title: title.to_string(),
            description: None,
            image_url: "/storage/images/a.jpg".to_string(),
            category: Some("Kegiatan".to_string()),
            is_published: published,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_admin_list_combines_count_and_page() {
        let mut repo = MockContentRepository::<Gallery>::new();
        repo.expect_list_page()
            .withf(|search, p| search.as_deref() == Some("hut") && *p == Pagination::new(2, 5))
            .returning(|_, _| Ok(vec![gallery("HUT RI", true)]));
        repo.expect_count()
            .withf(|search| search.as_deref() == Some("hut"))
            .returning(|_| Ok(6));

        let service = ContentService::new(Arc::new(repo), wib());
        let query = AdminListQuery { search: Some(" hut ".into()), page: Some(2), per_page: Some(5) };
        let page = service.admin_list(&query).await.unwrap();

        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_public_list_hides_unpublished() {
        let rows = vec![gallery("Upacara", true), gallery("Draft", false), gallery("Rapat", true)];
        let mut repo = MockContentRepository::<Gallery>::new();
        repo.expect_list_all().returning(move || Ok(rows.clone()));

        let service = ContentService::new(Arc::new(repo), wib());
        let query = ListQuery { sort: crate::domain::SortOrder::TitleAsc, ..Default::default() };
        let page = service.public_list(&query).await.unwrap();
        let titles: Vec<&str> = page.items.iter().map(|g| g.title()).collect();
        assert_eq!(titles, vec!["Rapat", "Upacara"]);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let mut repo = MockContentRepository::<Gallery>::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ContentService::new(Arc::new(repo), wib());
        let input = GalleryInput {
            title: "Upacara".into(),
            description: None,
            image_url: "/storage/images/a.jpg".into(),
            category: None,
            is_published: true,
        };
        let result = service.update(&Uuid::new_v4(), input).await;
        assert!(matches!(result, Err(DomainError::NotFound { entity: "Gallery", .. })));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let mut repo = MockContentRepository::<Gallery>::new();
        repo.expect_create().never();

        let service = ContentService::new(Arc::new(repo), wib());
        let input = GalleryInput {
            title: "x".into(),
            description: None,
            image_url: String::new(),
            category: None,
            is_published: true,
        };
        assert!(matches!(service.create(input).await, Err(DomainError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_agenda_by_day_filters_month_in_local_time() {
        let make = |title: &str, start: DateTime<Utc>| {
            Agenda::from_input(AgendaInput {
                title: title.to_string(),
                description: None,
                location: Some("Aula".into()),
                start_at: start,
                end_at: None,
                mode: AgendaMode::Offline,
                link_url: None,
                is_published: true,
            })
            .unwrap()
        };
        let rows = vec![
            make("Rapat Juni", Utc.with_ymd_and_hms(2024, 6, 2, 2, 0, 0).unwrap()),
            // 31 May 20:00 UTC is 1 June in WIB
            make("Apel Pagi", Utc.with_ymd_and_hms(2024, 5, 31, 20, 0, 0).unwrap()),
            make("Rapat Mei", Utc.with_ymd_and_hms(2024, 5, 20, 2, 0, 0).unwrap()),
        ];
        let mut repo = MockContentRepository::<Agenda>::new();
        repo.expect_list_all().returning(move || Ok(rows.clone()));

        let service = ContentService::new(Arc::new(repo), wib());
        let days = service.agenda_by_day(Some((2024, 6))).await.unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].items[0].title, "Apel Pagi");
        assert_eq!(days[1].items[0].title, "Rapat Juni");
    }
}
