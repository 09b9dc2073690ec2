use crate::tui::style::StyleAttrs;

/// Stable identifier for focusable UI elements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(pub &'static str);

impl FocusId {
    /// Create a new FocusId with a static string identifier
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }
}

/// Alignment options for layered elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Span the whole container
    Fill,
    Center,
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// A layer in a stack of UI elements
pub struct Layer<Msg> {
    pub element: Element<Msg>,
    pub alignment: Alignment,
}

impl<Msg> Layer<Msg> {
    pub fn new(element: Element<Msg>) -> Self {
        Self {
            element,
            alignment: Alignment::Fill,
        }
    }

    pub fn center(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Layout constraints for sizing elements within containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutConstraint {
    /// Fixed size (exact number of lines/columns)
    Length(u16),
    /// Minimum size (at least this many lines/columns)
    Min(u16),
    /// Proportional fill (weight for distributing remaining space)
    Fill(u16),
}

/// Declarative UI elements that compose to form the view
pub enum Element<Msg> {
    /// Empty element that renders nothing
    None,

    /// Static text, styled by inherited attributes
    Text { content: String },

    /// Style attribute wrapper; repeated styling folds into one node
    Styled {
        child: Box<Element<Msg>>,
        attrs: StyleAttrs,
    },

    /// Interactive button
    Button {
        id: FocusId,
        label: String,
        on_press: Option<Msg>,
    },

    /// Vertical layout container
    Column {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Horizontal layout container
    Row {
        items: Vec<(LayoutConstraint, Element<Msg>)>,
        spacing: u16,
    },

    /// Container with uniform padding
    Container {
        child: Box<Element<Msg>>,
        padding: u16,
    },

    /// Panel with border
    Panel {
        child: Box<Element<Msg>>,
        title: Option<String>,
    },

    /// Stack of layered elements (overlays)
    Stack { layers: Vec<Layer<Msg>> },
}

impl<Msg> Element<Msg> {
    /// Create a text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text {
            content: content.into(),
        }
    }

    /// Create a button element
    pub fn button(id: FocusId, label: impl Into<String>) -> ButtonBuilder<Msg> {
        ButtonBuilder {
            id,
            label: label.into(),
            on_press: None,
        }
    }

    /// Create a column layout with default constraints per child
    pub fn column(children: Vec<Element<Msg>>) -> ColumnBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();

        ColumnBuilder { items, spacing: 1 }
    }

    /// Create a row layout with default constraints per child
    pub fn row(children: Vec<Element<Msg>>) -> RowBuilder<Msg> {
        let items = children
            .into_iter()
            .map(|child| (child.default_constraint(), child))
            .collect();

        RowBuilder { items, spacing: 1 }
    }

    /// Wrap element in a container
    pub fn container(child: Element<Msg>) -> ContainerBuilder<Msg> {
        ContainerBuilder {
            child: Box::new(child),
            padding: 1,
        }
    }

    /// Wrap element in a panel with border
    pub fn panel(child: Element<Msg>) -> PanelBuilder<Msg> {
        PanelBuilder {
            child: Box::new(child),
            title: None,
        }
    }

    /// Create a stack of layers
    pub fn stack(layers: Vec<Layer<Msg>>) -> Self {
        Element::Stack { layers }
    }

    /// Arrange `rows` x `columns` cells in a grid: a column of rows, each row
    /// holding equal-width cells. The cell function is invoked exactly once
    /// per (row, column) pair in row-major order, matching visual placement
    /// left-to-right, top-to-bottom. Zero rows or columns degenerate to an
    /// empty arrangement.
    pub fn grid<F>(rows: usize, columns: usize, mut cell: F) -> Self
    where
        F: FnMut(usize, usize) -> Element<Msg>,
    {
        let mut grid = ColumnBuilder::new().spacing(0);

        for row in 0..rows {
            let cells: Vec<Element<Msg>> =
                (0..columns).map(|col| cell(row, col)).collect();
            let height = cells
                .iter()
                .map(|c| c.default_constraint().natural_height())
                .max()
                .unwrap_or(0);

            let mut builder = RowBuilder::new().spacing(1);
            for c in cells {
                builder = builder.add(c, LayoutConstraint::Fill(1));
            }
            grid = grid.add(builder.build(), LayoutConstraint::Length(height));
        }

        grid.build()
    }

    /// Get the default layout constraint for this element type
    pub fn default_constraint(&self) -> LayoutConstraint {
        match self {
            Element::None => LayoutConstraint::Length(0),
            Element::Text { .. } => LayoutConstraint::Length(1),
            Element::Styled { child, attrs } => {
                let extra = 2 * attrs.padding.unwrap_or(0)
                    + if attrs.shape.is_some() { 2 } else { 0 };
                match child.default_constraint() {
                    LayoutConstraint::Length(n) => LayoutConstraint::Length(n + extra),
                    LayoutConstraint::Min(n) => LayoutConstraint::Min(n + extra),
                    fill => fill,
                }
            }
            Element::Button { .. } => LayoutConstraint::Length(3),
            Element::Column { .. } => LayoutConstraint::Fill(1),
            Element::Row { .. } => LayoutConstraint::Fill(1),
            Element::Container { .. } => LayoutConstraint::Fill(1),
            Element::Panel { .. } => LayoutConstraint::Fill(1),
            Element::Stack { .. } => LayoutConstraint::Fill(1),
        }
    }
}

impl LayoutConstraint {
    /// Lines an element naturally occupies inside a fixed-height grid row
    fn natural_height(self) -> u16 {
        match self {
            LayoutConstraint::Length(n) | LayoutConstraint::Min(n) => n,
            LayoutConstraint::Fill(_) => 1,
        }
    }
}

/// Builder for button elements
pub struct ButtonBuilder<Msg> {
    id: FocusId,
    label: String,
    on_press: Option<Msg>,
}

impl<Msg> ButtonBuilder<Msg> {
    pub fn on_press(mut self, msg: Msg) -> Self {
        self.on_press = Some(msg);
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Button {
            id: self.id,
            label: self.label,
            on_press: self.on_press,
        }
    }
}

/// Builder for column layouts
pub struct ColumnBuilder<Msg> {
    items: Vec<(LayoutConstraint, Element<Msg>)>,
    spacing: u16,
}

impl<Msg> ColumnBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 1,
        }
    }

    /// Add a child with an explicit layout constraint
    pub fn add(mut self, child: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, child));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Column {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for ColumnBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for row layouts
pub struct RowBuilder<Msg> {
    items: Vec<(LayoutConstraint, Element<Msg>)>,
    spacing: u16,
}

impl<Msg> RowBuilder<Msg> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            spacing: 1,
        }
    }

    /// Add a child with an explicit layout constraint
    pub fn add(mut self, child: Element<Msg>, constraint: LayoutConstraint) -> Self {
        self.items.push((constraint, child));
        self
    }

    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Row {
            items: self.items,
            spacing: self.spacing,
        }
    }
}

impl<Msg> Default for RowBuilder<Msg> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for containers
pub struct ContainerBuilder<Msg> {
    child: Box<Element<Msg>>,
    padding: u16,
}

impl<Msg> ContainerBuilder<Msg> {
    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Container {
            child: self.child,
            padding: self.padding,
        }
    }
}

/// Builder for panels
pub struct PanelBuilder<Msg> {
    child: Box<Element<Msg>>,
    title: Option<String>,
}

impl<Msg> PanelBuilder<Msg> {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Element<Msg> {
        Element::Panel {
            child: self.child,
            title: self.title,
        }
    }
}

impl<Msg> Default for Element<Msg> {
    fn default() -> Self {
        Element::None
    }
}
