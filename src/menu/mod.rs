//! Composite menu tree.
//!
//! A menu is a tree of [`MenuNode`]s: terminal [`MenuItem`]s with a price,
//! and [`MenuCategory`]s that own an ordered list of children. Both render
//! uniformly, a category printing its header and then every descendant in
//! pre-order, one indent unit deeper per level.
//!
//! # Examples
//!
//! ```
//! use patterns_rust::menu::{MenuCategory, MenuItem, MenuNode, RenderOptions};
//!
//! # fn main() -> patterns_rust::Result<()> {
//! let mut starters = MenuCategory::new("Starters")?;
//! starters.add(MenuItem::new("Soup", 4.99)?);
//! let mut menu = MenuCategory::new("Menu")?;
//! menu.add(starters);
//!
//! let menu = MenuNode::from(menu);
//! assert_eq!(
//!     menu.render_lines(&RenderOptions::default()),
//!     vec!["+ Menu", " + Starters", "  - Soup: 4.99"]
//! );
//! # Ok(())
//! # }
//! ```

mod node;
mod options;

pub use node::{MenuCategory, MenuItem, MenuNode};
pub use options::RenderOptions;
