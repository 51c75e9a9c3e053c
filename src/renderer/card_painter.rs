//! Terminal painter for the card row.
//!
//! Facet mapping:
//! - `ELEVATED` lifts the box one row (when there is room above)
//! - `RAISED` paints the card after its neighbours
//! - `ACCENT_BORDER` colors the border with the accent
//! - `GLOW` switches to a double-line border
//! - `ACTIVE` draws the headline value in bold

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;

use crate::layout::CardRowLayout;
use crate::types::{CardRect, CardStyle, Rgb};

/// Text shown on one card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardContent {
    /// Headline figure, e.g. "98%".
    pub value: String,
    pub title: String,
    pub description: String,
}

impl CardContent {
    pub fn new(
        value: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

struct Border {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

const ROUNDED: Border = Border {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

const DOUBLE: Border = Border {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Truncate `text` to `width` chars and center it with spaces.
pub fn fit_centered(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    let len = truncated.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(right))
}

/// Paint every card, then flush `out` once.
///
/// Rows from one above the card area down to `layout.bottom` are cleared
/// first so a card that stopped being lifted leaves no trace. Cards marked
/// [`CardStyle::RAISED`] are painted after the others.
pub fn paint_cards<W: Write>(
    out: &mut W,
    layout: &CardRowLayout,
    styles: &[CardStyle],
    cards: &[CardContent],
    accent: Rgb,
) -> io::Result<()> {
    let band_top = layout.rects.iter().map(|r| r.y).min().unwrap_or(layout.bottom);
    for row in band_top.saturating_sub(1)..layout.bottom {
        queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
    }

    // Raised cards go last so they draw over their neighbours
    let style_of = |index: usize| styles.get(index).copied().unwrap_or_default();
    let mut order: Vec<usize> = (0..layout.rects.len()).collect();
    order.sort_by_key(|&index| style_of(index).contains(CardStyle::RAISED));

    for index in order {
        let content = cards.get(index).cloned().unwrap_or_default();
        paint_card(out, layout.rects[index], style_of(index), &content, accent)?;
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    out.flush()
}

fn paint_card<W: Write>(
    out: &mut W,
    rect: CardRect,
    style: CardStyle,
    content: &CardContent,
    accent: Rgb,
) -> io::Result<()> {
    if rect.width < 2 || rect.height < 2 {
        return Ok(());
    }

    let lifted = style.contains(CardStyle::ELEVATED) && rect.y > 0;
    let top = if lifted { rect.y - 1 } else { rect.y };
    let bottom = top + rect.height - 1;
    let inner = rect.width as usize - 2;

    let border = if style.contains(CardStyle::GLOW) {
        &DOUBLE
    } else {
        &ROUNDED
    };
    let border_color = if style.contains(CardStyle::ACCENT_BORDER) {
        accent
    } else {
        Rgb::MUTED
    };
    let edge: String = std::iter::repeat(border.horizontal).take(inner).collect();

    queue!(out, SetForegroundColor(to_color(border_color)))?;
    queue!(
        out,
        MoveTo(rect.x, top),
        Print(format!("{}{}{}", border.top_left, edge, border.top_right)),
        MoveTo(rect.x, bottom),
        Print(format!("{}{}{}", border.bottom_left, edge, border.bottom_right)),
    )?;
    for row in top + 1..bottom {
        queue!(
            out,
            MoveTo(rect.x, row),
            Print(border.vertical),
            MoveTo(rect.x + rect.width - 1, row),
            Print(border.vertical),
        )?;
    }

    // Value, title, description from the second inner row down
    let lines = [
        (content.value.as_str(), style.is_active(), Rgb::WHITE),
        (content.title.as_str(), false, border_color),
        (content.description.as_str(), false, Rgb::MUTED),
    ];
    for (offset, (text, bold, color)) in lines.iter().enumerate() {
        let row = top + 2 + offset as u16;
        if row >= bottom {
            break;
        }
        queue!(out, MoveTo(rect.x + 1, row), SetForegroundColor(to_color(*color)))?;
        if *bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(fit_centered(text, inner)))?;
        if *bold {
            queue!(out, SetAttribute(Attribute::NormalIntensity))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_card_row, RowStyle};

    fn cards() -> Vec<CardContent> {
        vec![
            CardContent::new("98%", "Precision", "Vehicle detection"),
            CardContent::new("24/7", "Monitoring", "Always on"),
        ]
    }

    fn paint(styles: &[CardStyle]) -> String {
        let layout = layout_card_row(60, 2, &RowStyle::default()).unwrap();
        let mut out = Vec::new();
        paint_cards(&mut out, &layout, styles, &cards(), Rgb::ACCENT).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fit_centered() {
        assert_eq!(fit_centered("ab", 6), "  ab  ");
        assert_eq!(fit_centered("abc", 6), " abc  ");
        assert_eq!(fit_centered("abcdefgh", 4), "abcd");
        assert_eq!(fit_centered("", 3), "   ");
    }

    #[test]
    fn test_paints_content() {
        let text = paint(&[CardStyle::RESTING, CardStyle::RESTING]);
        assert!(text.contains("98%"));
        assert!(text.contains("Monitoring"));
        assert!(text.contains('╭'));
        assert!(!text.contains('╔'));
    }

    #[test]
    fn test_highlighted_card_uses_accent_and_double_border() {
        let text = paint(&[CardStyle::RESTING, CardStyle::HIGHLIGHTED]);
        assert!(text.contains('╔'));
        assert!(text.contains('╭'));
        assert!(text.contains("38;2;0;168;232"));
    }

    #[test]
    fn test_raised_card_painted_last() {
        let text = paint(&[CardStyle::HIGHLIGHTED, CardStyle::RESTING]);
        let resting = text.find("24/7").unwrap();
        let raised = text.find("98%").unwrap();
        assert!(resting < raised);
        assert!(text.find('╭').unwrap() < text.find('╔').unwrap());
    }

    #[test]
    fn test_missing_styles_default_to_resting() {
        let text = paint(&[]);
        assert!(!text.contains('╔'));
        assert!(!text.contains("38;2;0;168;232"));
    }
}
