use safra_types::IconHandle;

/// Terminal glyph for a navigation or card icon.
pub fn glyph(icon: IconHandle) -> &'static str {
    match icon {
        IconHandle::Overview => "▦",
        IconHandle::ShoppingCart => "⊡",
        IconHandle::Bean => "◍",
        IconHandle::Carrot => "▾",
        IconHandle::Cloud => "☁",
        IconHandle::CircleDot => "◉",
        IconHandle::Beef => "◆",
        IconHandle::FileText => "≡",
        IconHandle::TrendingUp => "↗",
        IconHandle::DollarSign => "$",
        IconHandle::List => "☰",
        IconHandle::ArrowRightLeft => "⇄",
        IconHandle::Tractor => "⚒",
        IconHandle::Package => "▣",
        IconHandle::Scale => "⚖",
        IconHandle::Percent => "%",
        IconHandle::BarChart => "▮",
        IconHandle::Grid => "⊞",
        IconHandle::Settings => "⚙",
        IconHandle::LogOut => "⏻",
        IconHandle::PieChart => "◔",
        IconHandle::Briefcase => "▤",
    }
}

pub const CHEVRON_OPEN: &str = "▾";
pub const CHEVRON_CLOSED: &str = "▸";
pub const MENU: &str = "☰";
pub const CLOSE: &str = "✕";
pub const BELL: &str = "⍾";
pub const SEARCH: &str = "⌕";
pub const SUN: &str = "☼";
pub const MOON: &str = "☾";

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn navigation_glyphs_are_single_cell() {
        let icons = [
            IconHandle::Overview,
            IconHandle::ShoppingCart,
            IconHandle::TrendingUp,
            IconHandle::Tractor,
            IconHandle::Percent,
            IconHandle::FileText,
            IconHandle::Settings,
        ];
        for icon in icons {
            assert_eq!(glyph(icon).width(), 1, "{icon:?}");
        }
    }
}
