//! Menu items, categories and the node type that unifies them.

use crate::error::{Error, Result};
use crate::menu::options::RenderOptions;
use crate::unicode::display_width;
use std::fmt;
use std::io::Write;

fn check_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(name)
}

/// A priced entry with no children.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    name: String,
    price: f64,
}

impl MenuItem {
    /// Create an item.
    ///
    /// Names and prices are taken as given. Fails with [`Error::EmptyName`]
    /// for an empty name and [`Error::InvalidPrice`] for NaN or infinity,
    /// which have no printable amount.
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        let name = check_name(name.into())?;
        if !price.is_finite() {
            return Err(Error::InvalidPrice(price));
        }
        // Normalize negative zero so it never prints as "-0.00"
        let price = price + 0.0;
        Ok(Self { name, price })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The single line this item renders at `depth`.
    #[must_use]
    pub fn line(&self, depth: usize, options: &RenderOptions) -> String {
        format!(
            "{}- {}: {}",
            options.indent(depth),
            self.name,
            options.format_price(self.price)
        )
    }

    /// Write this item's line at `depth`.
    pub fn render_at<W: Write + ?Sized>(
        &self,
        depth: usize,
        out: &mut W,
        options: &RenderOptions,
    ) -> Result<()> {
        writeln!(out, "{}", self.line(depth, options))?;
        Ok(())
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line(0, &RenderOptions::default()))
    }
}

/// A named, ordered collection of menu nodes.
///
/// Children are owned: adding a node moves it into the category, so a node
/// can belong to only one parent and the tree cannot contain cycles.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuCategory {
    name: String,
    children: Vec<MenuNode>,
}

impl MenuCategory {
    /// Create an empty category.
    ///
    /// Fails with [`Error::EmptyName`] for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: check_name(name.into())?,
            children: Vec::new(),
        })
    }

    /// Append a single node.
    pub fn add(&mut self, node: impl Into<MenuNode>) -> &mut Self {
        self.children.push(node.into());
        self
    }

    /// Append a sequence of nodes, keeping their order.
    pub fn add_all<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<MenuNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Builder-style [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, node: impl Into<MenuNode>) -> Self {
        self.add(node);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The header line this category renders at `depth`.
    #[must_use]
    pub fn line(&self, depth: usize, options: &RenderOptions) -> String {
        format!("{}+ {}", options.indent(depth), self.name)
    }

    /// Write the header at `depth`, then every child one level deeper.
    pub fn render_at<W: Write + ?Sized>(
        &self,
        depth: usize,
        out: &mut W,
        options: &RenderOptions,
    ) -> Result<()> {
        writeln!(out, "{}", self.line(depth, options))?;
        for child in &self.children {
            child.render_at(depth + 1, out, options)?;
        }
        Ok(())
    }
}

impl<N: Into<MenuNode>> Extend<N> for MenuCategory {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

/// Either a leaf item or a category.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuNode {
    Item(MenuItem),
    Category(MenuCategory),
}

impl MenuNode {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => item.name(),
            Self::Category(category) => category.name(),
        }
    }

    #[must_use]
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// The line this node itself renders at `depth`, without descendants.
    #[must_use]
    pub fn line(&self, depth: usize, options: &RenderOptions) -> String {
        match self {
            Self::Item(item) => item.line(depth, options),
            Self::Category(category) => category.line(depth, options),
        }
    }

    /// Render this node and its descendants starting at indent level 0.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W, options: &RenderOptions) -> Result<()> {
        self.render_at(0, out, options)
    }

    /// Render this node and its descendants starting at `depth`.
    pub fn render_at<W: Write + ?Sized>(
        &self,
        depth: usize,
        out: &mut W,
        options: &RenderOptions,
    ) -> Result<()> {
        match self {
            Self::Item(item) => item.render_at(depth, out, options),
            Self::Category(category) => category.render_at(depth, out, options),
        }
    }

    /// Rendered lines in pre-order, without trailing newlines.
    #[must_use]
    pub fn render_lines(&self, options: &RenderOptions) -> Vec<String> {
        let mut lines = Vec::new();
        self.walk(0, &mut |node, depth| lines.push(node.line(depth, options)));
        lines
    }

    /// Rendered output as one string, one line per node.
    #[must_use]
    pub fn render_to_string(&self, options: &RenderOptions) -> String {
        let mut out = String::new();
        for line in self.render_lines(options) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Number of items in the subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        self.walk(0, &mut |node, _| count += usize::from(node.is_item()));
        count
    }

    /// Number of categories in the subtree, including this node.
    #[must_use]
    pub fn category_count(&self) -> usize {
        let mut count = 0;
        self.walk(0, &mut |node, _| count += usize::from(!node.is_item()));
        count
    }

    /// Number of levels in the subtree; a lone item or empty category is 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(0, &mut |_, depth| deepest = deepest.max(depth + 1));
        deepest
    }

    /// Widest rendered line, in terminal columns.
    #[must_use]
    pub fn max_line_width(&self, options: &RenderOptions) -> usize {
        self.render_lines(options)
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
    }

    fn walk<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&Self, usize),
    {
        visit(self, depth);
        if let Self::Category(category) = self {
            for child in &category.children {
                child.walk(depth + 1, visit);
            }
        }
    }
}

impl From<MenuItem> for MenuNode {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<MenuCategory> for MenuNode {
    fn from(category: MenuCategory) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for MenuNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_lines(&RenderOptions::default()).join("\n"))
    }
}
