//! Navigation catalog types shared by the fixtures, the navigation core and the TUI.
//!
//! A [`NavigationItem`] is either a leaf that targets a page or a group that
//! expands into an ordered list of leaves. The split is encoded in
//! [`NavTarget`], so an item can never carry both a page and children. Empty
//! groups and groups nested inside groups are rejected when items are built or
//! deserialized.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of the page rendered when nothing else matches.
pub const OVERVIEW_PAGE: &str = "overview";
/// Identifier of the settings page reachable from the user menu.
pub const SETTINGS_PAGE: &str = "settings";

/// Identifier of a routable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default landing page of a session.
    pub fn overview() -> Self {
        Self(OVERVIEW_PAGE.to_string())
    }

    pub fn settings() -> Self {
        Self(SETTINGS_PAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::overview()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Closed set of icons a navigation item or card may reference.
///
/// The core only stores the handle; the presentation layer decides which
/// glyph represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconHandle {
    Overview,
    ShoppingCart,
    Bean,
    Carrot,
    Cloud,
    CircleDot,
    Beef,
    FileText,
    TrendingUp,
    DollarSign,
    List,
    ArrowRightLeft,
    Tractor,
    Package,
    Scale,
    Percent,
    BarChart,
    Grid,
    Settings,
    LogOut,
    PieChart,
    Briefcase,
}

/// What activating a navigation item does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Navigate directly to a page.
    Page(PageId),
    /// Expand an accordion group of leaf items.
    Group(Vec<NavigationItem>),
}

/// Errors raised while building navigation items or catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation item '{id}' declares both a page and children")]
    AmbiguousTarget { id: String },
    #[error("navigation item '{id}' declares neither a page nor children")]
    MissingTarget { id: String },
    #[error("navigation group '{parent}' nests another group '{child}'")]
    NestedGroup { parent: String, child: String },
    #[error("navigation item id '{0}' is used more than once")]
    DuplicateId(String),
}

/// A single entry of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NavigationItemSpec", into = "NavigationItemSpec")]
pub struct NavigationItem {
    id: String,
    label: String,
    icon: IconHandle,
    target: NavTarget,
}

impl NavigationItem {
    /// Builds a directly navigable item.
    pub fn leaf(id: impl Into<String>, label: impl Into<String>, icon: IconHandle, page: PageId) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon,
            target: NavTarget::Page(page),
        }
    }

    /// Builds an expandable item. Children must be non-empty leaves.
    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: IconHandle,
        children: Vec<NavigationItem>,
    ) -> Result<Self, NavigationError> {
        let id = id.into();
        if children.is_empty() {
            return Err(NavigationError::MissingTarget { id });
        }
        if let Some(nested) = children.iter().find(|child| child.is_group()) {
            return Err(NavigationError::NestedGroup {
                parent: id,
                child: nested.id.clone(),
            });
        }
        Ok(Self {
            id,
            label: label.into(),
            icon,
            target: NavTarget::Group(children),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> IconHandle {
        self.icon
    }

    pub fn target(&self) -> &NavTarget {
        &self.target
    }

    /// The page this item navigates to, when it is a leaf.
    pub fn target_page(&self) -> Option<&PageId> {
        match &self.target {
            NavTarget::Page(page) => Some(page),
            NavTarget::Group(_) => None,
        }
    }

    /// Children of a group; empty for leaves.
    pub fn children(&self) -> &[NavigationItem] {
        match &self.target {
            NavTarget::Page(_) => &[],
            NavTarget::Group(children) => children,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.target, NavTarget::Group(_))
    }

    /// True when this leaf targets `current`.
    pub fn is_active_leaf(&self, current: &PageId) -> bool {
        self.target_page() == Some(current)
    }

    /// True when one of this group's children targets `current`.
    pub fn is_active_parent(&self, current: &PageId) -> bool {
        self.children().iter().any(|child| child.is_active_leaf(current))
    }
}

/// Serialized shape of a navigation item, validated into [`NavigationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NavigationItemSpec {
    id: String,
    label: String,
    icon: IconHandle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<PageId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NavigationItemSpec>,
}

impl TryFrom<NavigationItemSpec> for NavigationItem {
    type Error = NavigationError;

    fn try_from(raw: NavigationItemSpec) -> Result<Self, Self::Error> {
        match (raw.page, raw.children.is_empty()) {
            (Some(_), false) => Err(NavigationError::AmbiguousTarget { id: raw.id }),
            (None, true) => Err(NavigationError::MissingTarget { id: raw.id }),
            (Some(page), true) => Ok(Self::leaf(raw.id, raw.label, raw.icon, page)),
            (None, false) => {
                let children = raw
                    .children
                    .into_iter()
                    .map(NavigationItem::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::group(raw.id, raw.label, raw.icon, children)
            }
        }
    }
}

impl From<NavigationItem> for NavigationItemSpec {
    fn from(item: NavigationItem) -> Self {
        let (page, children) = match item.target {
            NavTarget::Page(page) => (Some(page), Vec::new()),
            NavTarget::Group(children) => (None, children.into_iter().map(Into::into).collect()),
        };
        Self {
            id: item.id,
            label: item.label,
            icon: item.icon,
            page,
            children,
        }
    }
}

/// Ordered, validated list of top-level navigation items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<NavigationItem>", into = "Vec<NavigationItem>")]
pub struct NavigationCatalog {
    items: Vec<NavigationItem>,
}

impl NavigationCatalog {
    /// Validates that item ids are unique across both levels.
    pub fn new(items: Vec<NavigationItem>) -> Result<Self, NavigationError> {
        let mut seen = HashSet::new();
        for item in items.iter().flat_map(|item| std::iter::once(item).chain(item.children())) {
            if !seen.insert(item.id()) {
                return Err(NavigationError::DuplicateId(item.id().to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    /// Looks up a top-level item by id.
    pub fn item(&self, id: &str) -> Option<&NavigationItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Every navigable leaf in display order, children following their parent.
    pub fn leaves(&self) -> impl Iterator<Item = &NavigationItem> {
        self.items.iter().flat_map(|item| match item.target() {
            NavTarget::Page(_) => std::slice::from_ref(item),
            NavTarget::Group(children) => children.as_slice(),
        })
    }
}

impl TryFrom<Vec<NavigationItem>> for NavigationCatalog {
    type Error = NavigationError;

    fn try_from(items: Vec<NavigationItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<NavigationCatalog> for Vec<NavigationItem> {
    fn from(catalog: NavigationCatalog) -> Self {
        catalog.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soy() -> NavigationItem {
        NavigationItem::leaf("soy", "Soja", IconHandle::Bean, PageId::new("trading.soy"))
    }

    #[test]
    fn leaf_and_group_expose_exactly_one_target() {
        let leaf = soy();
        assert!(leaf.target_page().is_some());
        assert!(leaf.children().is_empty());

        let group = NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![soy()]).expect("group");
        assert!(group.target_page().is_none());
        assert_eq!(group.children().len(), 1);
    }

    #[test]
    fn empty_and_nested_groups_are_rejected() {
        let empty = NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![]);
        assert_eq!(
            empty,
            Err(NavigationError::MissingTarget {
                id: "trading".into()
            })
        );

        let inner = NavigationItem::group("inner", "Inner", IconHandle::List, vec![soy()]).expect("inner");
        let nested = NavigationItem::group("outer", "Outer", IconHandle::List, vec![inner]);
        assert!(matches!(nested, Err(NavigationError::NestedGroup { .. })));
    }

    #[test]
    fn deserialization_enforces_the_item_invariant() {
        let both = r#"{"id":"x","label":"X","icon":"list","page":"p","children":[{"id":"c","label":"C","icon":"list","page":"c"}]}"#;
        let err = serde_json::from_str::<NavigationItem>(both).unwrap_err();
        assert!(err.to_string().contains("both a page and children"));

        let neither = r#"{"id":"x","label":"X","icon":"list"}"#;
        let err = serde_json::from_str::<NavigationItem>(neither).unwrap_err();
        assert!(err.to_string().contains("neither a page nor children"));
    }

    #[test]
    fn catalog_rejects_duplicate_ids_across_levels() {
        let group = NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![soy()]).expect("group");
        let result = NavigationCatalog::new(vec![group, soy()]);
        assert_eq!(result, Err(NavigationError::DuplicateId("soy".into())));
    }

    #[test]
    fn active_parent_follows_children() {
        let group = NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![soy()]).expect("group");
        let current = PageId::new("trading.soy");
        assert!(group.is_active_parent(&current));
        assert!(!group.is_active_leaf(&current));
        assert!(!group.is_active_parent(&PageId::overview()));
    }
}
