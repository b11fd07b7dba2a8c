//! Rendering: the surface-independent [`view::View`] and its HTML and terminal projections.

pub mod html;
pub mod theme;
pub mod tui;
pub mod view;

pub use html::{escape_html, render_fragment, render_page};
pub use view::{Card, Notice, NoticeKind, Section, View, build_view};
