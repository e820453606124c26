use rat_focus::FocusFlag;

/// Ordered focus ring over the controls of a form.
///
/// Exactly one flag is set at a time once the ring has been focused.
#[derive(Debug, Clone, Default)]
pub struct FormFocus {
    flags: Vec<FocusFlag>,
}

impl FormFocus {
    /// Creates one flag per control, named `{prefix}.{control}`; the first
    /// control starts focused.
    pub fn new(prefix: &str, controls: &[&str]) -> Self {
        let flags: Vec<FocusFlag> = controls
            .iter()
            .map(|control| FocusFlag::named(&format!("{prefix}.{control}")))
            .collect();
        let ring = Self { flags };
        ring.focus_index(0);
        ring
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.flags.iter().position(|flag| flag.get())
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.flags.get(index).is_some_and(|flag| flag.get())
    }

    pub fn focus_index(&self, index: usize) {
        for (i, flag) in self.flags.iter().enumerate() {
            flag.set(i == index);
        }
    }

    /// Moves focus forward or backward, wrapping at the ends.
    pub fn cycle(&self, forward: bool) -> Option<usize> {
        let len = self.flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.focus_index(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_wraps_both_ways() {
        let ring = FormFocus::new("test", &["a", "b", "c"]);
        assert_eq!(ring.focused_index(), Some(0));
        assert_eq!(ring.cycle(false), Some(2));
        assert_eq!(ring.cycle(true), Some(0));
        assert_eq!(ring.cycle(true), Some(1));
        assert!(ring.is_focused(1));
        assert!(!ring.is_focused(0));
    }

    #[test]
    fn empty_ring_never_focuses() {
        let ring = FormFocus::new("empty", &[]);
        assert_eq!(ring.cycle(true), None);
        assert_eq!(ring.focused_index(), None);
    }
}
