mod markup;
mod nav_view;

pub use markup::{Element, Node, escape};
pub use nav_view::nav_markup;
