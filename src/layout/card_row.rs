//! Taffy bridge for the card row.
//!
//! Cards are equal flex items in a wrapping row: each wants at least
//! `min_card_width` cells and grows to share the remaining width. Narrow
//! terminals wrap cards onto extra lines, like the responsive 4/2/1 column
//! grid the cards come from.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage, NodeId, Rect,
    Size, Style, TaffyTree,
};

use crate::error::Result;
use crate::types::CardRect;

/// Geometry knobs for the card row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    /// First row of the card area. Leave at least one row so the active card can lift.
    pub top: u16,
    pub card_height: u16,
    pub min_card_width: u16,
    /// Horizontal gap between cards.
    pub gap: u16,
    /// Vertical gap between wrapped lines.
    pub row_gap: u16,
    /// Left and right padding of the whole row.
    pub padding_x: u16,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            top: 2,
            card_height: 7,
            min_card_width: 18,
            gap: 2,
            row_gap: 1,
            padding_x: 2,
        }
    }
}

/// Computed card positions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardRowLayout {
    pub rects: Vec<CardRect>,
    /// First row below the card area.
    pub bottom: u16,
}

fn length(cells: u16) -> LengthPercentage {
    LengthPercentage::Length(cells as f32)
}

/// Lay out `card_count` cards across a terminal `width` cells wide.
pub fn layout_card_row(width: u16, card_count: usize, style: &RowStyle) -> Result<CardRowLayout> {
    if card_count == 0 || width == 0 {
        return Ok(CardRowLayout {
            rects: Vec::new(),
            bottom: style.top,
        });
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();

    let card_style = Style {
        flex_grow: 1.0,
        flex_shrink: 0.0,
        flex_basis: Dimension::Length(style.min_card_width as f32),
        size: Size {
            width: Dimension::Auto,
            height: Dimension::Length(style.card_height as f32),
        },
        ..Default::default()
    };

    let cards = (0..card_count)
        .map(|_| tree.new_leaf(card_style.clone()))
        .collect::<std::result::Result<Vec<NodeId>, _>>()?;

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            size: Size {
                width: Dimension::Length(width as f32),
                height: Dimension::Auto,
            },
            gap: Size {
                width: length(style.gap),
                height: length(style.row_gap),
            },
            padding: Rect {
                left: length(style.padding_x),
                right: length(style.padding_x),
                top: length(0),
                bottom: length(0),
            },
            ..Default::default()
        },
        &cards,
    )?;

    tree.compute_layout(
        root,
        Size {
            width: AvailableSpace::Definite(width as f32),
            height: AvailableSpace::MaxContent,
        },
    )?;

    let mut rects = Vec::with_capacity(card_count);
    for node in cards {
        let layout = tree.layout(node)?;
        rects.push(CardRect::new(
            layout.location.x.round() as u16,
            style.top.saturating_add(layout.location.y.round() as u16),
            layout.size.width.round() as u16,
            layout.size.height.round() as u16,
        ));
    }

    let bottom = rects
        .iter()
        .map(|r| r.y.saturating_add(r.height))
        .max()
        .unwrap_or(style.top);

    Ok(CardRowLayout { rects, bottom })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_row() {
        let layout = layout_card_row(80, 0, &RowStyle::default()).unwrap();
        assert!(layout.rects.is_empty());
        assert_eq!(layout.bottom, 2);
    }

    #[test]
    fn test_wide_terminal_single_line() {
        let style = RowStyle::default();
        let layout = layout_card_row(86, 4, &style).unwrap();
        let rects = &layout.rects;

        assert_eq!(rects.len(), 4);
        assert!(rects.iter().all(|r| r.y == style.top));
        assert!(rects.iter().all(|r| r.height == style.card_height));
        assert!(rects.iter().all(|r| r.width >= style.min_card_width));
        assert_eq!(rects[0].x, style.padding_x);

        for pair in rects.windows(2) {
            assert!(pair[0].x + pair[0].width <= pair[1].x);
        }
        let last = rects[3];
        assert!(last.x + last.width <= 86 - style.padding_x);
        assert_eq!(layout.bottom, style.top + style.card_height);
    }

    #[test]
    fn test_narrow_terminal_wraps() {
        let style = RowStyle::default();
        let layout = layout_card_row(40, 4, &style).unwrap();
        let rects = &layout.rects;

        assert_eq!(rects.len(), 4);
        assert!(rects.iter().all(|r| r.x == style.padding_x));
        for pair in rects.windows(2) {
            assert!(pair[1].y >= pair[0].y + style.card_height);
        }
        assert!(layout.bottom > style.top + style.card_height * 3);
    }
}
