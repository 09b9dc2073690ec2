use ratatui::style::{Color, Modifier as TextModifier};
use ratatui::widgets::BorderType;

use crate::tui::element::{Alignment, Element, Layer};
use crate::tui::theme::Theme;

/// Typographic role of a piece of text. Terminals have no font metrics, so
/// roles map to text attributes at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Caption,
    Body,
    Subheading,
    Heading,
}

impl Font {
    pub(crate) fn text_modifier(self) -> TextModifier {
        match self {
            Font::Caption => TextModifier::DIM,
            Font::Body => TextModifier::empty(),
            Font::Subheading => TextModifier::ITALIC,
            Font::Heading => TextModifier::BOLD,
        }
    }
}

/// Outline shape an element's background is clipped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Rounded,
}

impl Shape {
    pub(crate) fn border_type(self) -> BorderType {
        match self {
            Shape::Square => BorderType::Plain,
            Shape::Rounded => BorderType::Rounded,
        }
    }
}

/// Visual attributes attached to an element. Unset attributes inherit from
/// the surrounding container; set attributes win over inherited ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleAttrs {
    pub font: Option<Font>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub padding: Option<u16>,
    pub shape: Option<Shape>,
}

impl StyleAttrs {
    /// Fold `later` over `self`: per attribute, the later value wins when
    /// set, otherwise the earlier one is kept.
    pub fn merge(self, later: StyleAttrs) -> StyleAttrs {
        StyleAttrs {
            font: later.font.or(self.font),
            foreground: later.foreground.or(self.foreground),
            background: later.background.or(self.background),
            padding: later.padding.or(self.padding),
            shape: later.shape.or(self.shape),
        }
    }
}

/// A pure element-to-element transformation altering visual presentation
pub trait Modifier<Msg> {
    fn modify(&self, content: Element<Msg>) -> Element<Msg>;
}

/// Heading treatment: bold heading font, blue text, padded green fill
/// clipped to a rounded outline.
#[derive(Debug, Clone, Copy)]
pub struct TitleStyle {
    pub foreground: Color,
    pub background: Color,
}

impl TitleStyle {
    pub fn new(theme: &Theme) -> Self {
        Self {
            foreground: theme.blue,
            background: theme.green,
        }
    }
}

impl<Msg> Modifier<Msg> for TitleStyle {
    fn modify(&self, content: Element<Msg>) -> Element<Msg> {
        content.styled(StyleAttrs {
            font: Some(Font::Heading),
            foreground: Some(self.foreground),
            background: Some(self.background),
            padding: Some(1),
            shape: Some(Shape::Rounded),
        })
    }
}

/// Overlays content with a small caption badge in the bottom-trailing
/// corner. The wrapped content is passed through untouched.
#[derive(Debug, Clone)]
pub struct Watermark {
    text: String,
}

impl Watermark {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl<Msg> Modifier<Msg> for Watermark {
    fn modify(&self, content: Element<Msg>) -> Element<Msg> {
        let caption = Element::text(self.text.clone())
            .font(Font::Caption)
            .foreground(Color::White)
            .background(Color::Black)
            .padding(1);

        Element::stack(vec![
            Layer::new(content),
            Layer::new(caption).align(Alignment::BottomRight),
        ])
    }
}

impl<Msg> Element<Msg> {
    /// Apply style attributes. Styling an already-styled element folds the
    /// attributes left-to-right into a single wrapper instead of nesting.
    pub fn styled(self, attrs: StyleAttrs) -> Self {
        match self {
            Element::Styled {
                child,
                attrs: earlier,
            } => Element::Styled {
                child,
                attrs: earlier.merge(attrs),
            },
            other => Element::Styled {
                child: Box::new(other),
                attrs,
            },
        }
    }

    pub fn font(self, font: Font) -> Self {
        self.styled(StyleAttrs {
            font: Some(font),
            ..StyleAttrs::default()
        })
    }

    pub fn foreground(self, color: Color) -> Self {
        self.styled(StyleAttrs {
            foreground: Some(color),
            ..StyleAttrs::default()
        })
    }

    pub fn background(self, color: Color) -> Self {
        self.styled(StyleAttrs {
            background: Some(color),
            ..StyleAttrs::default()
        })
    }

    pub fn padding(self, cells: u16) -> Self {
        self.styled(StyleAttrs {
            padding: Some(cells),
            ..StyleAttrs::default()
        })
    }

    pub fn shape(self, shape: Shape) -> Self {
        self.styled(StyleAttrs {
            shape: Some(shape),
            ..StyleAttrs::default()
        })
    }

    /// Apply a named modifier
    pub fn modifier<M: Modifier<Msg>>(self, modifier: M) -> Self {
        modifier.modify(self)
    }

    /// Shorthand for the heading treatment
    pub fn title_style(self, theme: &Theme) -> Self {
        self.modifier(TitleStyle::new(theme))
    }

    /// Shorthand for the caption overlay
    pub fn watermark(self, text: impl Into<String>) -> Self {
        self.modifier(Watermark::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    enum Msg {}

    fn attrs_of(element: &Element<Msg>) -> StyleAttrs {
        match element {
            Element::Styled { attrs, .. } => *attrs,
            _ => panic!("expected a styled element"),
        }
    }

    #[test]
    fn merge_is_last_writer_wins_per_attribute() {
        let earlier = StyleAttrs {
            font: Some(Font::Heading),
            foreground: Some(Color::Blue),
            padding: Some(1),
            ..StyleAttrs::default()
        };
        let later = StyleAttrs {
            font: Some(Font::Body),
            background: Some(Color::Green),
            ..StyleAttrs::default()
        };

        let merged = earlier.merge(later);
        assert_eq!(merged.font, Some(Font::Body));
        assert_eq!(merged.foreground, Some(Color::Blue));
        assert_eq!(merged.background, Some(Color::Green));
        assert_eq!(merged.padding, Some(1));
        assert_eq!(merged.shape, None);
    }

    #[test]
    fn styling_folds_into_a_single_wrapper() {
        let element: Element<Msg> = Element::text("hi")
            .font(Font::Heading)
            .foreground(Color::Blue)
            .padding(2);

        let Element::Styled { child, attrs } = element else {
            panic!("expected a styled element");
        };
        assert!(matches!(*child, Element::Text { .. }));
        assert_eq!(attrs.font, Some(Font::Heading));
        assert_eq!(attrs.foreground, Some(Color::Blue));
        assert_eq!(attrs.padding, Some(2));
    }

    #[test]
    fn title_style_is_idempotent() {
        let theme = Theme::default();
        let once: Element<Msg> = Element::text("hi").title_style(&theme);
        let twice: Element<Msg> = Element::text("hi").title_style(&theme).title_style(&theme);

        assert_eq!(attrs_of(&once), attrs_of(&twice));
    }

    #[test]
    fn font_override_after_title_style_wins() {
        let theme = Theme::default();
        let element: Element<Msg> = Element::text("hi").title_style(&theme).font(Font::Body);

        let attrs = attrs_of(&element);
        assert_eq!(attrs.font, Some(Font::Body));
        // The rest of the heading treatment survives the override.
        assert_eq!(attrs.foreground, Some(theme.blue));
        assert_eq!(attrs.background, Some(theme.green));
        assert_eq!(attrs.padding, Some(1));
        assert_eq!(attrs.shape, Some(Shape::Rounded));
    }

    #[test]
    fn watermark_wraps_content_untouched() {
        let theme = Theme::default();
        let element: Element<Msg> = Element::text("content")
            .title_style(&theme)
            .watermark("badge");

        let Element::Stack { layers } = element else {
            panic!("expected a stack");
        };
        assert_eq!(layers.len(), 2);

        assert_eq!(layers[0].alignment, Alignment::Fill);
        let attrs = attrs_of(&layers[0].element);
        assert_eq!(attrs.font, Some(Font::Heading));
        assert_eq!(attrs.foreground, Some(theme.blue));

        assert_eq!(layers[1].alignment, Alignment::BottomRight);
        let Element::Styled { child, attrs } = &layers[1].element else {
            panic!("expected a styled caption");
        };
        let Element::Text { content } = child.as_ref() else {
            panic!("expected a text caption");
        };
        assert_eq!(content, "badge");
        assert_eq!(attrs.font, Some(Font::Caption));
        assert_eq!(attrs.foreground, Some(Color::White));
        assert_eq!(attrs.background, Some(Color::Black));
        assert_eq!(attrs.padding, Some(1));
    }
}
