// ============================================================================
// Kominfo Core - Navigation Menu Entity
// File: crates/kominfo-core/src/domain/navigation_menu.rs
// Description: Self-referential header menu and its two-level tree
// ============================================================================

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Navigation menu row (`navigation_menus`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationMenu {
    pub id: Uuid,
    pub title: String,
    pub href: String,
    pub parent_id: Option<Uuid>,
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Admin form payload for a menu item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NavigationMenuInput {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 255, message = "Href must be between 1 and 255 characters"))]
    pub href: String,

    pub parent_id: Option<Uuid>,

    #[serde(default)]
    pub order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl NavigationMenu {
    pub fn new(input: NavigationMenuInput) -> Result<Self, DomainError> {
        let input = input.normalized()?;
        Ok(Self {
            id: Uuid::new_v4(),
            title: input.title,
            href: input.href,
            parent_id: input.parent_id,
            order: input.order,
            is_active: input.is_active,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn apply(&mut self, input: NavigationMenuInput) -> Result<(), DomainError> {
        let input = input.normalized()?;
        if input.parent_id == Some(self.id) {
            return Err(DomainError::InvalidParentMenu("a menu cannot be its own parent".into()));
        }
        self.title = input.title;
        self.href = input.href;
        self.parent_id = input.parent_id;
        self.order = input.order;
        self.is_active = input.is_active;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn is_root_menu(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl NavigationMenuInput {
    fn normalized(mut self) -> Result<Self, DomainError> {
        self.title = self.title.trim().to_string();
        self.href = self.href.trim().to_string();
        self.validate()?;
        if !is_valid_href(&self.href) {
            return Err(DomainError::ValidationError(
                "href: must start with '/', '#', 'http://' or 'https://'".into(),
            ));
        }
        Ok(self)
    }
}

pub(crate) fn is_valid_href(href: &str) -> bool {
    href.starts_with('/')
        || href.starts_with('#')
        || href.starts_with("http://")
        || href.starts_with("https://")
}

/// Menu item with its sub-menus, as rendered by the header and the admin menu screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub menu: NavigationMenu,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    fn leaf(menu: NavigationMenu) -> Self {
        Self { menu, children: Vec::new() }
    }

    /// This node plus all descendants.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(MenuNode::node_count).sum::<usize>()
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.menu.id == *id || self.children.iter().any(|c| c.contains(id))
    }
}

pub fn tree_node_count(tree: &[MenuNode]) -> usize {
    tree.iter().map(MenuNode::node_count).sum()
}

pub fn find_root_by_title<'a>(tree: &'a [MenuNode], title: &str) -> Option<&'a MenuNode> {
    tree.iter().find(|n| n.menu.title.trim().eq_ignore_ascii_case(title))
}

/// Builds the header tree from the flat `navigation_menus` rows.
///
/// Rows are stably ordered by `order`. A row whose `parent_id` is null or does
/// not resolve becomes a root. Rows only reachable through a parent cycle are
/// promoted to roots, with the edge back into the already placed part cut.
pub fn build_menu_tree(mut rows: Vec<NavigationMenu>) -> Vec<MenuNode> {
    rows.sort_by_key(|m| m.order);

    let ids: HashSet<Uuid> = rows.iter().map(|m| m.id).collect();
    let mut children_of: HashMap<Uuid, Vec<NavigationMenu>> = HashMap::new();
    let mut child_order: Vec<(Uuid, Uuid)> = Vec::new();
    let mut roots: Vec<NavigationMenu> = Vec::new();

    for row in rows {
        match row.parent_id {
            Some(parent) if parent != row.id && ids.contains(&parent) => {
                child_order.push((row.id, parent));
                children_of.entry(parent).or_default().push(row);
            }
            _ => roots.push(row),
        }
    }

    let mut placed: HashSet<Uuid> = HashSet::new();
    let mut tree: Vec<MenuNode> = roots
        .into_iter()
        .map(|root| attach(root, &mut children_of, &mut placed))
        .collect();

    // Whatever is left hangs off a cycle: promote in `order` sequence.
    for (id, parent) in child_order {
        if placed.contains(&id) {
            continue;
        }
        let Some(siblings) = children_of.get_mut(&parent) else {
            continue;
        };
        let Some(pos) = siblings.iter().position(|m| m.id == id) else {
            continue;
        };
        let orphan = siblings.remove(pos);
        tree.push(attach(orphan, &mut children_of, &mut placed));
    }

    tree
}

fn attach(
    menu: NavigationMenu,
    children_of: &mut HashMap<Uuid, Vec<NavigationMenu>>,
    placed: &mut HashSet<Uuid>,
) -> MenuNode {
    placed.insert(menu.id);
    let mut node = MenuNode::leaf(menu);
    if let Some(children) = children_of.remove(&node.menu.id) {
        for child in children {
            if placed.contains(&child.id) {
                continue;
            }
            node.children.push(attach(child, children_of, placed));
        }
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(title: &str, href: &str, parent_id: Option<Uuid>, order: i32) -> NavigationMenu {
        NavigationMenu {
            id: Uuid::new_v4(),
            title: title.to_string(),
            href: href.to_string(),
            parent_id,
            order,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_single_root_with_child() {
        let root = menu("Informasi", "#", None, 1);
        let child = menu("Berita", "/informasi/berita", Some(root.id), 1);

        let tree = build_menu_tree(vec![root.clone(), child.clone()]);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].menu.id, root.id);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].menu.id, child.id);
    }

    #[test]
    fn test_children_before_parent_and_ordering() {
        let root_b = menu("Program", "/program", None, 2);
        let root_a = menu("Beranda", "/", None, 1);
        let child_2 = menu("Renstra", "/program/renstra", Some(root_b.id), 2);
        let child_1 = menu("Renja", "/program/renja", Some(root_b.id), 1);

        let tree = build_menu_tree(vec![child_2.clone(), root_b.clone(), child_1.clone(), root_a.clone()]);

        let titles: Vec<&str> = tree.iter().map(|n| n.menu.title.as_str()).collect();
        assert_eq!(titles, vec!["Beranda", "Program"]);
        let child_titles: Vec<&str> = tree[1].children.iter().map(|n| n.menu.title.as_str()).collect();
        assert_eq!(child_titles, vec!["Renja", "Renstra"]);
    }

    #[test]
    fn test_unresolved_parent_becomes_root() {
        let stray = menu("Lama", "/lama", Some(Uuid::new_v4()), 1);
        let tree = build_menu_tree(vec![stray.clone()]);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].menu.id, stray.id);
    }

    #[test]
    fn test_node_count_matches_input() {
        let root = menu("Profil", "/profil", None, 1);
        let mut rows = vec![root.clone()];
        for i in 0..5 {
            rows.push(menu(&format!("Sub {}", i), "/profil/sub", Some(root.id), i));
        }
        rows.push(menu("Kontak", "/kontak", None, 9));

        let tree = build_menu_tree(rows.clone());
        assert_eq!(tree_node_count(&tree), rows.len());
    }

    #[test]
    fn test_cycle_is_promoted_not_lost() {
        let mut a = menu("A", "/a", None, 1);
        let mut b = menu("B", "/b", None, 2);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let c = menu("C", "/c", Some(a.id), 3);

        let tree = build_menu_tree(vec![a.clone(), b.clone(), c.clone()]);

        assert_eq!(tree_node_count(&tree), 3);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].menu.id, a.id);
        for node in &tree {
            for child in &node.children {
                assert!(!child.contains(&node.menu.id), "node appears as its own descendant");
            }
        }
    }

    #[test]
    fn test_self_parent_is_root() {
        let mut a = menu("A", "/a", None, 1);
        a.parent_id = Some(a.id);
        let tree = build_menu_tree(vec![a]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_find_root_by_title_ignores_case() {
        let tree = build_menu_tree(vec![menu("Informasi", "#", None, 1)]);
        assert!(find_root_by_title(&tree, "informasi").is_some());
        assert!(find_root_by_title(&tree, "Program").is_none());
    }

    #[test]
    fn test_input_validation() {
        let input = NavigationMenuInput {
            title: "  Beranda ".to_string(),
            href: "beranda".to_string(),
            parent_id: None,
            order: 1,
            is_active: true,
        };
        assert!(matches!(NavigationMenu::new(input), Err(DomainError::ValidationError(_))));

        let input = NavigationMenuInput {
            title: "  Beranda ".to_string(),
            href: "/".to_string(),
            parent_id: None,
            order: 1,
            is_active: true,
        };
        let menu = NavigationMenu::new(input).unwrap();
        assert_eq!(menu.title, "Beranda");
        assert!(menu.is_root_menu());
    }
}
