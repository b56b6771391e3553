//! Reusable drawing primitives for the terminal screens.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::theme;

/// Pixel width of `text` in `font`.
pub fn text_width(text: &str, font: &MonoFont<'_>) -> u32 {
    (text.chars().count() as u32) * font.character_size.width
}

/// Draw `text` with its top-left corner at `position`.
pub fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'static>,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(font, color);
    let baseline = position.y + font.baseline as i32;
    Text::new(text, Point::new(position.x, baseline), style).draw(display)?;
    Ok(())
}

/// Draw `text` right-aligned so it ends at `right_x`.
pub fn draw_text_right<D>(
    display: &mut D,
    text: &str,
    right_x: i32,
    y: i32,
    font: &MonoFont<'static>,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let x = right_x - text_width(text, font) as i32;
    draw_text(display, text, Point::new(x, y), font, color)
}

/// A selectable tile: filled rectangle with a centered label.
///
/// Table grids, the category picker and the payment method row are all
/// tiles; only the colors change with selection.
pub struct Tile<'a> {
    label: &'a str,
    selected: bool,
    font: &'static MonoFont<'static>,
}

impl<'a> Tile<'a> {
    /// Create an unselected tile.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            selected: false,
            font: theme::FONT_BODY,
        }
    }

    /// Mark the tile as the focused one.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Use the small font (dense grids).
    pub fn small(mut self) -> Self {
        self.font = theme::FONT_SMALL;
        self
    }

    /// Render the tile into `bounds`.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (fill, stroke, fg) = if self.selected {
            (theme::PRIMARY, theme::PRIMARY_DARK, theme::TEXT_INVERT)
        } else {
            (theme::SURFACE, theme::BORDER, theme::TEXT)
        };
        bounds
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)?;
        bounds
            .into_styled(PrimitiveStyle::with_stroke(stroke, 1))
            .draw(display)?;

        let tw = text_width(self.label, self.font) as i32;
        let x = bounds.top_left.x + (bounds.size.width as i32 - tw) / 2;
        let y = bounds.top_left.y
            + (bounds.size.height as i32 - self.font.character_size.height as i32) / 2;
        draw_text(display, self.label, Point::new(x, y), self.font, fg)
    }
}

/// Background treatment for a [`ListRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// Plain surface row.
    None,
    /// The focused row.
    Selected,
    /// Just-added flash on menu rows.
    Flash,
}

/// A full-width list row: primary text left, optional trailing text right.
pub struct ListRow<'a> {
    primary: &'a str,
    trailing: Option<&'a str>,
    highlight: RowHighlight,
}

impl<'a> ListRow<'a> {
    /// Create a plain row.
    pub fn new(primary: &'a str) -> Self {
        Self {
            primary,
            trailing: None,
            highlight: RowHighlight::None,
        }
    }

    /// Right-aligned trailing text (usually a price).
    pub fn trailing(mut self, text: &'a str) -> Self {
        self.trailing = Some(text);
        self
    }

    /// Set the background treatment.
    pub fn highlight(mut self, highlight: RowHighlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Render the row into `bounds`.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (fill, fg) = match self.highlight {
            RowHighlight::None => (theme::SURFACE, theme::TEXT),
            RowHighlight::Selected => (theme::PRIMARY, theme::TEXT_INVERT),
            RowHighlight::Flash => (theme::FLASH, theme::TEXT),
        };
        bounds
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)?;
        bounds
            .into_styled(PrimitiveStyle::with_stroke(theme::BORDER, 1))
            .draw(display)?;

        let font = theme::FONT_BODY;
        let y = bounds.top_left.y
            + (bounds.size.height as i32 - font.character_size.height as i32) / 2;
        draw_text(display, self.primary, Point::new(bounds.top_left.x + 10, y), font, fg)?;
        if let Some(trailing) = self.trailing {
            let right = bounds.top_left.x + bounds.size.width as i32 - 10;
            draw_text_right(display, trailing, right, y, font, fg)?;
        }
        Ok(())
    }
}

/// A bordered text-entry field with an optional focus accent.
pub struct Field<'a> {
    value: &'a str,
    focused: bool,
}

impl<'a> Field<'a> {
    /// Create a field showing `value`.
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            focused: false,
        }
    }

    /// Mark the field as focused (green border).
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Render the field into `bounds`.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        bounds
            .into_styled(PrimitiveStyle::with_fill(theme::SURFACE))
            .draw(display)?;
        let stroke = if self.focused {
            theme::PRIMARY_DARK
        } else {
            theme::BORDER
        };
        bounds
            .into_styled(PrimitiveStyle::with_stroke(stroke, 2))
            .draw(display)?;
        let font = theme::FONT_BODY;
        let y = bounds.top_left.y
            + (bounds.size.height as i32 - font.character_size.height as i32) / 2;
        draw_text(
            display,
            self.value,
            Point::new(bounds.top_left.x + 8, y),
            font,
            theme::TEXT,
        )
    }
}
