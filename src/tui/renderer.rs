use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use crossterm::event::KeyCode;

use crate::tui::element::{Alignment as LayerAlignment, Element, FocusId, LayoutConstraint};
use crate::tui::style::StyleAttrs;
use crate::tui::theme::Theme;

mod focus_registry;
mod interaction_registry;

pub use focus_registry::{FocusRegistry, FocusableInfo};
pub use interaction_registry::InteractionRegistry;

/// Renders elements to the terminal
pub struct Renderer;

impl Renderer {
    pub fn render<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
    ) {
        Self::render_element(
            frame,
            theme,
            registry,
            focus_registry,
            focused_id,
            element,
            area,
            StyleAttrs::default(),
        );
    }

    /// Create on_key handler for buttons (Enter or Space activates)
    fn button_on_key<Msg: Clone + Send + 'static>(
        on_press: Option<Msg>,
    ) -> Box<dyn Fn(KeyCode) -> Option<Msg> + Send> {
        Box::new(move |key| match key {
            KeyCode::Enter | KeyCode::Char(' ') => on_press.clone(),
            _ => None,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn render_element<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        element: &Element<Msg>,
        area: Rect,
        inherited: StyleAttrs,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        match element {
            Element::None => {}

            Element::Text { content } => {
                let mut style = Style::default().fg(inherited.foreground.unwrap_or(theme.text));
                if let Some(font) = inherited.font {
                    style = style.add_modifier(font.text_modifier());
                }
                frame.render_widget(Paragraph::new(content.as_str()).style(style), area);
            }

            Element::Styled { child, attrs } => {
                // Text attributes flow down; box attributes (background,
                // padding, shape) apply only where written.
                let flowed = inherited.merge(*attrs);

                let mut inner = area;
                match attrs.shape {
                    Some(shape) => {
                        let border_color = attrs.background.unwrap_or(theme.overlay0);
                        let mut block = Block::default()
                            .borders(Borders::ALL)
                            .border_type(shape.border_type())
                            .border_style(Style::default().fg(border_color));
                        if let Some(bg) = attrs.background {
                            block = block.style(Style::default().bg(bg));
                        }
                        inner = block.inner(area);
                        frame.render_widget(block, area);
                    }
                    None => {
                        if let Some(bg) = attrs.background {
                            frame.render_widget(
                                Block::default().style(Style::default().bg(bg)),
                                area,
                            );
                        }
                    }
                }

                if let Some(padding) = attrs.padding {
                    inner = inner.inner(Margin::new(padding, padding));
                }

                Self::render_element(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    child,
                    inner,
                    flowed,
                );
            }

            Element::Button { id, label, on_press } => {
                focus_registry.register(FocusableInfo {
                    id: id.clone(),
                    rect: area,
                    on_key: Self::button_on_key(on_press.clone()),
                });
                if let Some(msg) = on_press {
                    registry.register_click(area, msg.clone());
                }

                let is_focused = focused_id == Some(id);
                let border_style = if is_focused {
                    Style::default().fg(theme.lavender)
                } else {
                    Style::default().fg(theme.overlay0)
                };

                let mut style = Style::default().fg(inherited.foreground.unwrap_or(theme.text));
                if let Some(font) = inherited.font {
                    style = style.add_modifier(font.text_modifier());
                }

                let widget = Paragraph::new(label.as_str())
                    .block(Block::default().borders(Borders::ALL).border_style(border_style))
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(style);
                frame.render_widget(widget, area);
            }

            Element::Column { items, spacing } => {
                Self::render_axis(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    items,
                    *spacing,
                    Direction::Vertical,
                    area,
                    inherited,
                );
            }

            Element::Row { items, spacing } => {
                Self::render_axis(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    items,
                    *spacing,
                    Direction::Horizontal,
                    area,
                    inherited,
                );
            }

            Element::Container { child, padding } => {
                let inner = area.inner(Margin::new(*padding, *padding));
                Self::render_element(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    child,
                    inner,
                    inherited,
                );
            }

            Element::Panel { child, title } => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.overlay0))
                    .style(Style::default().bg(theme.base));
                if let Some(title_text) = title {
                    block = block.title(title_text.as_str());
                }

                let inner = block.inner(area);
                frame.render_widget(block, area);

                Self::render_element(
                    frame,
                    theme,
                    registry,
                    focus_registry,
                    focused_id,
                    child,
                    inner,
                    inherited,
                );
            }

            Element::Stack { layers } => {
                // Layers render bottom-up; hit-testing walks handlers in
                // reverse registration order, so the topmost layer wins.
                for layer in layers {
                    let layer_area = Self::layer_area(&layer.element, layer.alignment, area);
                    Self::render_element(
                        frame,
                        theme,
                        registry,
                        focus_registry,
                        focused_id,
                        &layer.element,
                        layer_area,
                        inherited,
                    );
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_axis<Msg: Clone + Send + 'static>(
        frame: &mut Frame,
        theme: &Theme,
        registry: &mut InteractionRegistry<Msg>,
        focus_registry: &mut FocusRegistry<Msg>,
        focused_id: Option<&FocusId>,
        items: &[(LayoutConstraint, Element<Msg>)],
        spacing: u16,
        direction: Direction,
        area: Rect,
        inherited: StyleAttrs,
    ) {
        if items.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = items
            .iter()
            .map(|(constraint, _)| match constraint {
                LayoutConstraint::Length(n) => Constraint::Length(*n),
                LayoutConstraint::Min(n) => Constraint::Min(*n),
                LayoutConstraint::Fill(weight) => Constraint::Fill(*weight),
            })
            .collect();

        let chunks = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .spacing(spacing)
            .split(area);

        for ((_, child), chunk) in items.iter().zip(chunks.iter()) {
            Self::render_element(
                frame,
                theme,
                registry,
                focus_registry,
                focused_id,
                child,
                *chunk,
                inherited,
            );
        }
    }

    /// Position a stack layer inside its container
    fn layer_area<Msg>(
        element: &Element<Msg>,
        alignment: LayerAlignment,
        container: Rect,
    ) -> Rect {
        if alignment == LayerAlignment::Fill {
            return container;
        }

        let (width, height) = Self::estimate_size(element, container);
        let right = container.x + container.width.saturating_sub(width);
        let bottom = container.y + container.height.saturating_sub(height);
        let center_x = container.x + container.width.saturating_sub(width) / 2;
        let center_y = container.y + container.height.saturating_sub(height) / 2;

        let (x, y) = match alignment {
            LayerAlignment::Fill => unreachable!(),
            LayerAlignment::TopLeft => (container.x, container.y),
            LayerAlignment::TopCenter => (center_x, container.y),
            LayerAlignment::TopRight => (right, container.y),
            LayerAlignment::Center => (center_x, center_y),
            LayerAlignment::BottomLeft => (container.x, bottom),
            LayerAlignment::BottomCenter => (center_x, bottom),
            LayerAlignment::BottomRight => (right, bottom),
        };

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Best-effort natural size of an element, clamped to its container
    fn estimate_size<Msg>(element: &Element<Msg>, container: Rect) -> (u16, u16) {
        let (width, height) = match element {
            Element::None => (0, 0),
            Element::Text { content } => (content.chars().count() as u16, 1),
            Element::Styled { child, attrs } => {
                let (w, h) = Self::estimate_size(child, container);
                let pad = 2 * attrs.padding.unwrap_or(0);
                let border = if attrs.shape.is_some() { 2 } else { 0 };
                (w + pad + border, h + pad + border)
            }
            Element::Button { label, .. } => (label.chars().count() as u16 + 4, 3),
            Element::Column { items, spacing } => {
                let mut width = 0u16;
                let mut height = 0u16;
                for (_, child) in items {
                    let (w, h) = Self::estimate_size(child, container);
                    width = width.max(w);
                    height = height.saturating_add(h);
                }
                let gaps = spacing.saturating_mul(items.len().saturating_sub(1) as u16);
                (width, height.saturating_add(gaps))
            }
            Element::Row { items, spacing } => {
                let mut width = 0u16;
                let mut height = 0u16;
                for (_, child) in items {
                    let (w, h) = Self::estimate_size(child, container);
                    width = width.saturating_add(w);
                    height = height.max(h);
                }
                let gaps = spacing.saturating_mul(items.len().saturating_sub(1) as u16);
                (width.saturating_add(gaps), height)
            }
            Element::Container { child, padding } => {
                let (w, h) = Self::estimate_size(child, container);
                (w + 2 * padding, h + 2 * padding)
            }
            Element::Panel { child, .. } => {
                let (w, h) = Self::estimate_size(child, container);
                (w + 2, h + 2)
            }
            Element::Stack { layers } => {
                let mut width = 0u16;
                let mut height = 0u16;
                for layer in layers {
                    let (w, h) = Self::estimate_size(&layer.element, container);
                    width = width.max(w);
                    height = height.max(h);
                }
                (width, height)
            }
        };

        (width.min(container.width), height.min(container.height))
    }
}
