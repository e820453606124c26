//! Registry of the pages the shell can show.
//!
//! Every navigation leaf registers a page. Lookups are total: an unknown id
//! resolves to the overview page and is logged.

use indexmap::IndexMap;
use safra_types::{IconHandle, NavigationCatalog, PageId};
use safra_util::search;
use tracing::warn;

const OVERVIEW_TITLE: &str = "Visão Geral";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// KPI dashboard
    Overview,
    /// "Under construction" card titled with the page name
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub id: PageId,
    pub title: String,
    pub kind: PageKind,
    pub icon: IconHandle,
}

#[derive(Debug, Clone)]
pub struct PageRegistry {
    pages: IndexMap<PageId, PageEntry>,
    fallback: PageEntry,
}

impl PageRegistry {
    /// Registers one page per navigation leaf, titled with the leaf label.
    pub fn from_catalog(catalog: &NavigationCatalog) -> Self {
        let mut pages = IndexMap::new();
        for leaf in catalog.leaves() {
            let Some(page) = leaf.target_page() else { continue };
            let kind = if page.as_str() == PageId::overview().as_str() {
                PageKind::Overview
            } else {
                PageKind::Placeholder
            };
            pages.entry(page.clone()).or_insert_with(|| PageEntry {
                id: page.clone(),
                title: leaf.label().to_string(),
                kind,
                icon: leaf.icon(),
            });
        }
        let fallback = pages
            .entry(PageId::overview())
            .or_insert_with(|| PageEntry {
                id: PageId::overview(),
                title: OVERVIEW_TITLE.to_string(),
                kind: PageKind::Overview,
                icon: IconHandle::Overview,
            })
            .clone();
        Self { pages, fallback }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, id: &PageId) -> bool {
        self.pages.contains_key(id)
    }

    /// Returns the page for `id`, or the overview page when `id` is unknown.
    pub fn resolve(&self, id: &PageId) -> &PageEntry {
        self.pages.get(id).unwrap_or_else(|| {
            warn!(page = %id, "unknown page requested; showing overview");
            &self.fallback
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.values()
    }

    /// Page ids whose titles match `query`, in registration order.
    pub fn search(&self, query: &str) -> Vec<PageId> {
        search::search(query, self.entries().map(|entry| (&entry.id, entry.title.as_str())))
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safra_types::NavigationItem;

    fn catalog() -> NavigationCatalog {
        let soy = NavigationItem::leaf("trading.soy", "Soja", IconHandle::Bean, PageId::new("trading.soy"));
        let quotes = NavigationItem::leaf("market.quotes", "Cotações", IconHandle::DollarSign, PageId::new("market.quotes"));
        NavigationCatalog::new(vec![
            NavigationItem::leaf("overview", "Visão Geral", IconHandle::Overview, PageId::overview()),
            NavigationItem::group("trading", "Comercialização", IconHandle::ShoppingCart, vec![soy]).expect("group"),
            NavigationItem::group("market", "Mercado", IconHandle::TrendingUp, vec![quotes]).expect("group"),
            NavigationItem::leaf("settings", "Configurações", IconHandle::Settings, PageId::settings()),
        ])
        .expect("catalog")
    }

    #[test]
    fn leaves_register_in_catalog_order() {
        let registry = PageRegistry::from_catalog(&catalog());
        let ids: Vec<&str> = registry.entries().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, ["overview", "trading.soy", "market.quotes", "settings"]);
        assert_eq!(registry.resolve(&PageId::overview()).kind, PageKind::Overview);
        assert_eq!(registry.resolve(&PageId::new("trading.soy")).title, "Soja");
    }

    #[test]
    fn unknown_page_falls_back_to_overview() {
        let registry = PageRegistry::from_catalog(&catalog());
        let entry = registry.resolve(&PageId::new("does.not.exist"));
        assert_eq!(entry.id, PageId::overview());
        assert_eq!(entry.kind, PageKind::Overview);
    }

    #[test]
    fn empty_catalog_still_has_overview() {
        let registry = PageRegistry::from_catalog(&NavigationCatalog::default());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&PageId::settings()).title, "Visão Geral");
    }

    #[test]
    fn search_matches_titles_without_accents() {
        let registry = PageRegistry::from_catalog(&catalog());
        assert_eq!(registry.search("cotacoes"), vec![PageId::new("market.quotes")]);
        assert_eq!(registry.search("configura"), vec![PageId::settings()]);
        assert!(registry.search("").is_empty());
    }
}
