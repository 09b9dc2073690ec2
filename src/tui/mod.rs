pub mod theme;
pub mod command;
pub mod element;
pub mod style;
pub mod subscription;
pub mod app;
pub mod renderer;
pub mod runtime;
pub mod apps;

pub use theme::{Theme, ThemeVariant};
pub use command::Command;
pub use element::{Element, LayoutConstraint};
pub use style::{Font, Modifier, Shape, StyleAttrs, TitleStyle, Watermark};
pub use subscription::Subscription;
pub use app::App;
pub use renderer::{InteractionRegistry, Renderer};
pub use runtime::Runtime;
