// ============================================================================
// Kominfo Core - Navigation Menu Service
// File: crates/kominfo-core/src/services/menu_service.rs
// ============================================================================
//! Header menu tree and the admin menu screen

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{build_menu_tree, MenuNode, NavigationMenu, NavigationMenuInput};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

pub struct MenuService {
    repo: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(repo: Arc<dyn MenuRepository>) -> Self {
        Self { repo }
    }

    /// Active items only, as rendered in the public header.
    pub async fn header_tree(&self) -> Result<Vec<MenuNode>, DomainError> {
        let rows = self.repo.list_active().await?;
        Ok(build_menu_tree(rows))
    }

    /// Every item, including hidden ones, for the admin screen.
    pub async fn admin_tree(&self) -> Result<Vec<MenuNode>, DomainError> {
        let rows = self.repo.list_all().await?;
        Ok(build_menu_tree(rows))
    }

    pub async fn get(&self, id: &Uuid) -> Result<NavigationMenu, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Menu", *id))
    }

    pub async fn create(&self, input: NavigationMenuInput) -> Result<NavigationMenu, DomainError> {
        let menu = NavigationMenu::new(input)?;
        self.check_parent(&menu).await?;

        let created = self.repo.create(&menu).await?;
        info!("Menu created: {} ({})", created.title, created.id);
        Ok(created)
    }

    pub async fn update(&self, id: &Uuid, input: NavigationMenuInput) -> Result<NavigationMenu, DomainError> {
        let mut menu = self.get(id).await?;
        menu.apply(input)?;
        self.check_parent(&menu).await?;

        if menu.parent_id.is_some() {
            let has_children = self
                .repo
                .list_all()
                .await?
                .iter()
                .any(|row| row.parent_id == Some(menu.id));
            if has_children {
                warn!("Menu {} has sub-menus and cannot be nested", menu.id);
                return Err(DomainError::InvalidParentMenu(
                    "a menu with sub-menus cannot become a sub-menu".into(),
                ));
            }
        }

        let updated = self.repo.update(&menu).await?;
        info!("Menu updated: {} ({})", updated.title, updated.id);
        Ok(updated)
    }

    /// Sub-menus are removed along with their parent.
    pub async fn delete(&self, id: &Uuid) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Menu", *id));
        }
        info!("Menu deleted: {}", id);
        Ok(())
    }

    /// The parent must exist, differ from the menu and be a top-level item.
    async fn check_parent(&self, menu: &NavigationMenu) -> Result<(), DomainError> {
        let Some(parent_id) = menu.parent_id else {
            return Ok(());
        };
        if parent_id == menu.id {
            return Err(DomainError::InvalidParentMenu("a menu cannot be its own parent".into()));
        }

        let parent = self.repo.find_by_id(&parent_id).await?.ok_or_else(|| {
            warn!("Parent menu not found: {}", parent_id);
            DomainError::InvalidParentMenu(format!("parent {} does not exist", parent_id))
        })?;
        if !parent.is_root_menu() {
            return Err(DomainError::InvalidParentMenu(
                "sub-menus can only be placed under a top-level menu".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMenuRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn row(title: &str, parent_id: Option<Uuid>, order: i32) -> NavigationMenu {
        NavigationMenu {
            id: Uuid::new_v4(),
            title: title.to_string(),
            href: format!("/{}", title.to_lowercase()),
            parent_id,
            order,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn input(title: &str, parent_id: Option<Uuid>) -> NavigationMenuInput {
        NavigationMenuInput {
            title: title.to_string(),
            href: "/informasi/berita".to_string(),
            parent_id,
            order: 1,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_header_tree_uses_active_rows() {
        let informasi = row("Informasi", None, 1);
        let berita = row("Berita", Some(informasi.id), 1);
        let rows = vec![berita.clone(), informasi.clone()];

        let mut repo = MockMenuRepository::new();
        repo.expect_list_active().times(1).returning(move || Ok(rows.clone()));
        repo.expect_list_all().never();

        let tree = MenuService::new(Arc::new(repo)).header_tree().await.unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].menu.id, informasi.id);
        assert_eq!(tree[0].children[0].menu.id, berita.id);
    }

    #[tokio::test]
    async fn test_create_under_top_level_parent() {
        let parent = row("Informasi", None, 1);
        let parent_id = parent.id;

        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id()
            .with(eq(parent_id))
            .returning(move |_| Ok(Some(parent.clone())));
        repo.expect_create().times(1).returning(|m| Ok(m.clone()));

        let created = MenuService::new(Arc::new(repo))
            .create(input("Berita", Some(parent_id)))
            .await
            .unwrap();
        assert_eq!(created.parent_id, Some(parent_id));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_nested_parent() {
        let top = row("Informasi", None, 1);
        let nested = row("Berita", Some(top.id), 1);
        let nested_id = nested.id;
        let missing = Uuid::new_v4();

        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(if *id == nested_id { Some(nested.clone()) } else { None })
        });
        repo.expect_create().never();
        let service = MenuService::new(Arc::new(repo));

        let result = service.create(input("Arsip", Some(missing))).await;
        assert!(matches!(result, Err(DomainError::InvalidParentMenu(_))));

        let result = service.create(input("Arsip", Some(nested_id))).await;
        assert!(matches!(result, Err(DomainError::InvalidParentMenu(_))));
    }

    #[tokio::test]
    async fn test_update_cannot_nest_a_menu_with_children() {
        let profil = row("Profil", None, 1);
        let informasi = row("Informasi", None, 2);
        let child = row("Visi Misi", Some(profil.id), 1);
        let (profil_id, informasi_id) = (profil.id, informasi.id);
        let all = vec![profil.clone(), informasi.clone(), child];

        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok([profil.clone(), informasi.clone()].into_iter().find(|m| m.id == *id))
        });
        repo.expect_list_all().returning(move || Ok(all.clone()));
        repo.expect_update().never();

        let result = MenuService::new(Arc::new(repo))
            .update(&profil_id, input("Profil", Some(informasi_id)))
            .await;
        assert!(matches!(result, Err(DomainError::InvalidParentMenu(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let result = MenuService::new(Arc::new(repo)).delete(&Uuid::new_v4()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
