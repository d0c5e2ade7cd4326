use console::Style;
use once_cell::sync::Lazy;
use salesdash::model::Category;
use salesdash::theme::Theme;

/// Named styles for one theme.
pub struct Palette {
    pub title: Style,
    pub header: Style,
    pub sorted_header: Style,
    pub id: Style,
    pub value: Style,
    pub selected: Style,
    pub muted: Style,
    pub categories: [Style; 5],
}

impl Palette {
    pub fn category(&self, category: Category) -> &Style {
        let pos = Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or_default();
        &self.categories[pos]
    }
}

/// Chart colors per category, in `Category::ALL` order.
const CATEGORY_RGB: [(u8, u8, u8); 5] = [
    (0x00, 0x88, 0xFE),
    (0x00, 0xC4, 0x9F),
    (0xFF, 0xBB, 0x28),
    (0xFF, 0x80, 0x42),
    (0x88, 0x84, 0xD8),
];

fn category_styles() -> [Style; 5] {
    CATEGORY_RGB.map(|rgb| Style::new().color256(rgb_to_ansi256(rgb)))
}

pub static LIGHT: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().bold().blue(),
    header: Style::new().bold(),
    sorted_header: Style::new().bold().underlined().blue(),
    id: Style::new().color256(rgb_to_ansi256((110, 110, 110))),
    value: Style::new().black().bold(),
    selected: Style::new().on_color256(rgb_to_ansi256((220, 230, 250))),
    muted: Style::new()
        .color256(rgb_to_ansi256((120, 120, 120)))
        .italic(),
    categories: category_styles(),
});

pub static DARK: Lazy<Palette> = Lazy::new(|| Palette {
    title: Style::new().bold().cyan(),
    header: Style::new().bold().white(),
    sorted_header: Style::new().bold().underlined().cyan(),
    id: Style::new().color256(rgb_to_ansi256((154, 154, 154))),
    value: Style::new().white().bold(),
    selected: Style::new().on_color256(rgb_to_ansi256((40, 50, 80))),
    muted: Style::new()
        .color256(rgb_to_ansi256((154, 154, 154)))
        .italic(),
    categories: category_styles(),
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

/// Nearest xterm-256 color cube entry for an RGB triple.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return (((r as u16 - 8) * 24 / 247) as u8) + 232;
    }
    let scale = |c: u8| (c as u16 * 5 / 255) as u8;
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_primary_colors() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
    }

    #[test]
    fn every_category_has_a_style() {
        for category in Category::ALL {
            let _ = LIGHT.category(category);
            let _ = DARK.category(category);
        }
    }
}
