use safra_types::{NavigationItem, PageId};
use tracing::{debug, trace};

/// Presentation the sidebar is currently rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    /// Inline sidebar with pin and hover expansion.
    #[default]
    Desktop,
    /// Overlay drawer; pin and hover are ignored.
    Mobile,
}

impl Viewport {
    /// Classifies a terminal width against the desktop breakpoint.
    pub fn from_width(width: u16, desktop_breakpoint: u16) -> Self {
        if width >= desktop_breakpoint { Self::Desktop } else { Self::Mobile }
    }

    pub fn is_desktop(self) -> bool {
        matches!(self, Self::Desktop)
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Second commit of a two-step transition, applied on the next turn of the
/// event queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingTransition {
    /// Set the open accordion group to `group` (computed when the item was
    /// selected, so applying it twice is harmless).
    OpenGroup { group: Option<String> },
}

/// Outcome of a transition call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// All state changes were applied.
    Committed,
    /// The first commit was applied; the caller must schedule
    /// [`NavigationState::commit_pending`] behind the current event.
    Deferred,
    /// The call is not valid in the current presentation/state.
    Ignored,
}

/// Sidebar expansion, accordion, drawer and current-page state of one session.
///
/// The state is owned by the shell and only changes through the transition
/// methods below. Rendering reads [`NavigationState::effective_expanded`] and
/// the per-item helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pinned_expanded: bool,
    hovering: bool,
    open_group_id: Option<String>,
    mobile_drawer_open: bool,
    current_page: PageId,
    viewport: Viewport,
    pending: Option<PendingTransition>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl NavigationState {
    /// Session defaults: collapsed, nothing open, drawer closed, overview page.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pinned_expanded: false,
            hovering: false,
            open_group_id: None,
            mobile_drawer_open: false,
            current_page: PageId::overview(),
            viewport,
            pending: None,
        }
    }

    /// Returns to session defaults, keeping the current viewport. Any deferred
    /// commit belongs to the old session and is dropped.
    pub fn reset(&mut self) {
        *self = Self::new(self.viewport);
    }

    // ----- Getters -----
    pub fn pinned_expanded(&self) -> bool {
        self.pinned_expanded
    }
    pub fn hovering(&self) -> bool {
        self.hovering
    }
    pub fn open_group_id(&self) -> Option<&str> {
        self.open_group_id.as_deref()
    }
    pub fn mobile_drawer_open(&self) -> bool {
        self.mobile_drawer_open
    }
    pub fn current_page(&self) -> &PageId {
        &self.current_page
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Whether the sidebar is drawn wide. On mobile the sidebar only exists as
    /// a full-width drawer, so it is always expanded when shown.
    pub fn effective_expanded(&self) -> bool {
        match self.viewport {
            Viewport::Mobile => true,
            Viewport::Desktop => self.pinned_expanded || self.hovering,
        }
    }

    pub fn is_group_open(&self, item: &NavigationItem) -> bool {
        self.open_group_id.as_deref() == Some(item.id())
    }

    pub fn is_active_leaf(&self, item: &NavigationItem) -> bool {
        item.is_active_leaf(&self.current_page)
    }

    pub fn is_active_parent(&self, item: &NavigationItem) -> bool {
        item.is_active_parent(&self.current_page)
    }

    // ----- Transitions -----

    /// Flips the desktop pin. Leaves the accordion untouched.
    pub fn toggle_desktop_pin(&mut self) -> Transition {
        if self.viewport.is_mobile() {
            trace!("ignoring pin toggle in mobile presentation");
            return Transition::Ignored;
        }
        self.pinned_expanded = !self.pinned_expanded;
        debug!(pinned = self.pinned_expanded, "sidebar pin toggled");
        Transition::Committed
    }

    /// Pointer entered (`true`) or left (`false`) the sidebar.
    ///
    /// Only meaningful while unpinned on desktop. Leaving also closes the open
    /// group so a collapsed sidebar never keeps a submenu expanded.
    pub fn set_hover(&mut self, entering: bool) -> Transition {
        if self.viewport.is_mobile() || self.pinned_expanded {
            trace!(entering, "ignoring hover change");
            return Transition::Ignored;
        }
        self.hovering = entering;
        if !entering {
            self.open_group_id = None;
        }
        Transition::Committed
    }

    /// Activates a top-level item.
    ///
    /// Leaves navigate. Groups toggle the accordion; when the desktop sidebar
    /// is collapsed the sidebar is pinned first and the toggle is deferred to
    /// the next queue turn, which returns [`Transition::Deferred`].
    pub fn select_item(&mut self, item: &NavigationItem) -> Transition {
        if self.pending.is_some() {
            self.commit_pending();
        }

        if let Some(page) = item.target_page() {
            self.current_page = page.clone();
            self.open_group_id = None;
            if self.viewport.is_mobile() {
                self.mobile_drawer_open = false;
            }
            debug!(page = %self.current_page, "navigated");
            return Transition::Committed;
        }

        let next_group = self.toggled_group(item.id());
        let collapsed_desktop = self.viewport.is_desktop() && !self.pinned_expanded && !self.hovering;
        if collapsed_desktop {
            self.pinned_expanded = true;
            self.pending = Some(PendingTransition::OpenGroup { group: next_group });
            debug!(group = item.id(), "sidebar pinned; accordion toggle deferred");
            return Transition::Deferred;
        }

        self.open_group_id = next_group;
        Transition::Committed
    }

    /// Navigates to a child page. The parent group stays open.
    pub fn select_sub_item(&mut self, page: &PageId) -> Transition {
        self.current_page = page.clone();
        if self.viewport.is_mobile() {
            self.mobile_drawer_open = false;
        }
        debug!(page = %self.current_page, "navigated to sub item");
        Transition::Committed
    }

    /// Sets the current page without touching sidebar state.
    pub fn jump_to(&mut self, page: PageId) -> Transition {
        self.current_page = page;
        Transition::Committed
    }

    /// Opens or closes the mobile drawer. Pin and hover are untouched.
    pub fn toggle_mobile_drawer(&mut self) -> Transition {
        self.mobile_drawer_open = !self.mobile_drawer_open;
        Transition::Committed
    }

    /// Records a viewport change. Entering desktop closes the drawer.
    pub fn on_viewport_change(&mut self, is_desktop_now: bool) -> Transition {
        let viewport = if is_desktop_now { Viewport::Desktop } else { Viewport::Mobile };
        if viewport != self.viewport {
            debug!(?viewport, "viewport changed");
        }
        self.viewport = viewport;
        if is_desktop_now {
            self.mobile_drawer_open = false;
        }
        Transition::Committed
    }

    /// Applies the deferred half of a transition. Returns `false` when nothing
    /// was pending.
    pub fn commit_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(PendingTransition::OpenGroup { group }) => {
                trace!(?group, "committing deferred accordion toggle");
                self.open_group_id = group;
                true
            }
            None => false,
        }
    }

    fn toggled_group(&self, id: &str) -> Option<String> {
        if self.open_group_id.as_deref() == Some(id) { None } else { Some(id.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use safra_types::{IconHandle, NavigationItem, PageId};

    use super::*;

    fn leaf(id: &str, page: &str) -> NavigationItem {
        NavigationItem::leaf(id, id, IconHandle::List, PageId::new(page))
    }

    fn parent(id: &str) -> NavigationItem {
        let children = vec![leaf(&format!("{id}.a"), &format!("{id}/a")), leaf(&format!("{id}.b"), &format!("{id}/b"))];
        NavigationItem::group(id, id, IconHandle::List, children).expect("group")
    }

    fn desktop() -> NavigationState {
        NavigationState::new(Viewport::Desktop)
    }

    fn mobile() -> NavigationState {
        NavigationState::new(Viewport::Mobile)
    }

    #[test]
    fn select_leaf_always_navigates_and_closes_groups() {
        let target = leaf("reports", "reports");
        let starts = [
            NavigationState {
                pinned_expanded: true,
                open_group_id: Some("parentA".into()),
                ..desktop()
            },
            NavigationState {
                hovering: true,
                open_group_id: Some("parentB".into()),
                ..desktop()
            },
            NavigationState {
                mobile_drawer_open: true,
                open_group_id: Some("parentA".into()),
                ..mobile()
            },
            desktop(),
        ];
        for mut state in starts {
            assert_eq!(state.select_item(&target), Transition::Committed);
            assert_eq!(state.open_group_id(), None);
            assert_eq!(state.current_page(), &PageId::new("reports"));
            assert!(!state.mobile_drawer_open());
        }
    }

    #[test]
    fn hover_leave_clears_open_group_when_unpinned() {
        let mut state = NavigationState {
            hovering: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        assert_eq!(state.set_hover(false), Transition::Committed);
        assert!(!state.hovering());
        assert_eq!(state.open_group_id(), None);
    }

    #[test]
    fn hover_is_ignored_while_pinned() {
        let mut state = NavigationState {
            pinned_expanded: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        let before = state.clone();
        assert_eq!(state.set_hover(false), Transition::Ignored);
        assert_eq!(state.set_hover(true), Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn hover_and_pin_are_ignored_on_mobile() {
        let mut state = mobile();
        assert_eq!(state.set_hover(true), Transition::Ignored);
        assert_eq!(state.toggle_desktop_pin(), Transition::Ignored);
        assert!(!state.hovering());
        assert!(!state.pinned_expanded());
    }

    #[test]
    fn pin_toggle_keeps_open_group() {
        let mut state = NavigationState {
            pinned_expanded: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        state.toggle_desktop_pin();
        assert!(!state.pinned_expanded());
        assert_eq!(state.open_group_id(), Some("parentA"));
    }

    #[test]
    fn drawer_toggle_twice_is_identity() {
        for open in [false, true] {
            let mut state = NavigationState {
                mobile_drawer_open: open,
                ..mobile()
            };
            state.toggle_mobile_drawer();
            state.toggle_mobile_drawer();
            assert_eq!(state.mobile_drawer_open(), open);
        }
    }

    #[test]
    fn at_most_one_group_open_across_selections() {
        let groups = [parent("a"), parent("b"), parent("c")];
        let mut state = desktop();
        for item in groups.iter().chain(groups.iter().rev()).chain(groups.iter()) {
            if state.select_item(item) == Transition::Deferred {
                assert!(state.commit_pending());
            }
            let open: Vec<_> = groups.iter().filter(|group| state.is_group_open(group)).collect();
            assert!(open.len() <= 1);
        }
    }

    #[test]
    fn scenario_a_collapsed_desktop_pins_then_opens() {
        let parent_a = parent("parentA");
        let mut state = desktop();

        assert_eq!(state.select_item(&parent_a), Transition::Deferred);
        assert!(state.pinned_expanded());
        assert_eq!(state.open_group_id(), None);

        assert!(state.commit_pending());
        assert!(state.pinned_expanded());
        assert_eq!(state.open_group_id(), Some("parentA"));
        assert!(state.pending().is_none());
    }

    #[test]
    fn scenario_b_reselecting_open_group_closes_it() {
        let parent_a = parent("parentA");
        let mut state = NavigationState {
            pinned_expanded: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        assert_eq!(state.select_item(&parent_a), Transition::Committed);
        assert_eq!(state.open_group_id(), None);
        assert!(state.pinned_expanded());
    }

    #[test]
    fn scenario_c_mobile_sub_item_closes_drawer() {
        let mut state = NavigationState {
            mobile_drawer_open: true,
            current_page: PageId::new("X"),
            ..mobile()
        };
        state.select_sub_item(&PageId::new("Y"));
        assert_eq!(state.current_page(), &PageId::new("Y"));
        assert!(!state.mobile_drawer_open());
    }

    #[test]
    fn scenario_d_hover_leave_collapses_accordion() {
        let mut state = NavigationState {
            hovering: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        state.set_hover(false);
        assert!(!state.hovering());
        assert_eq!(state.open_group_id(), None);
    }

    #[test]
    fn scenario_e_desktop_viewport_closes_drawer() {
        let mut state = NavigationState {
            mobile_drawer_open: true,
            ..mobile()
        };
        state.on_viewport_change(true);
        assert!(!state.mobile_drawer_open());
        assert_eq!(state.viewport(), Viewport::Desktop);
    }

    #[test]
    fn sub_item_keeps_parent_group_open() {
        let mut state = NavigationState {
            pinned_expanded: true,
            open_group_id: Some("parentA".into()),
            ..desktop()
        };
        state.select_sub_item(&PageId::new("parentA/b"));
        assert_eq!(state.open_group_id(), Some("parentA"));
    }

    #[test]
    fn hovering_or_mobile_toggles_group_without_pinning() {
        let parent_a = parent("parentA");

        let mut hovering = NavigationState {
            hovering: true,
            ..desktop()
        };
        assert_eq!(hovering.select_item(&parent_a), Transition::Committed);
        assert!(!hovering.pinned_expanded());
        assert_eq!(hovering.open_group_id(), Some("parentA"));

        let mut drawer = NavigationState {
            mobile_drawer_open: true,
            ..mobile()
        };
        assert_eq!(drawer.select_item(&parent_a), Transition::Committed);
        assert!(!drawer.pinned_expanded());
        assert_eq!(drawer.open_group_id(), Some("parentA"));
        assert!(drawer.mobile_drawer_open());
    }

    #[test]
    fn interleaved_events_observe_the_pinned_intermediate_state() {
        let parent_a = parent("parentA");
        let mut state = desktop();
        state.select_item(&parent_a);

        // Pinned, so hover is a no-op between the two commits.
        assert_eq!(state.set_hover(false), Transition::Ignored);
        assert!(state.pinned_expanded());
        assert_eq!(state.open_group_id(), None);

        assert!(state.commit_pending());
        assert_eq!(state.open_group_id(), Some("parentA"));
    }

    #[test]
    fn unpinning_before_commit_still_applies_the_open() {
        let parent_a = parent("parentA");
        let mut state = desktop();
        state.select_item(&parent_a);
        state.toggle_desktop_pin();
        assert!(!state.pinned_expanded());

        assert!(state.commit_pending());
        assert_eq!(state.open_group_id(), Some("parentA"));
        assert!(!state.commit_pending());
    }

    #[test]
    fn new_selection_flushes_outstanding_commit_first() {
        let parent_a = parent("parentA");
        let parent_b = parent("parentB");
        let mut state = desktop();
        state.select_item(&parent_a);

        assert_eq!(state.select_item(&parent_b), Transition::Committed);
        assert_eq!(state.open_group_id(), Some("parentB"));
        assert!(state.pending().is_none());
    }

    #[test]
    fn effective_expanded_is_derived() {
        let mut state = desktop();
        assert!(!state.effective_expanded());
        state.set_hover(true);
        assert!(state.effective_expanded());
        state.set_hover(false);
        state.toggle_desktop_pin();
        assert!(state.effective_expanded());

        state.on_viewport_change(false);
        assert!(state.effective_expanded());
    }

    #[test]
    fn reset_restores_session_defaults_and_drops_pending() {
        let mut state = NavigationState {
            hovering: false,
            mobile_drawer_open: true,
            current_page: PageId::new("reports"),
            ..mobile()
        };
        state.on_viewport_change(true);
        state.select_item(&parent("parentA"));
        state.reset();

        assert_eq!(state, NavigationState::new(Viewport::Desktop));
    }

    #[test]
    fn viewport_classification_uses_breakpoint() {
        assert_eq!(Viewport::from_width(120, 100), Viewport::Desktop);
        assert_eq!(Viewport::from_width(100, 100), Viewport::Desktop);
        assert_eq!(Viewport::from_width(99, 100), Viewport::Mobile);
    }
}
