//! Menu render configuration.

/// Options controlling how a menu tree is rendered.
///
/// The defaults produce `"<indent>- <name>: <price>"` item lines with a
/// single-space indent unit and two decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Text repeated once per nesting level.
    pub indent_unit: String,
    /// Symbol printed right before each price, e.g. `"$"`.
    pub currency: String,
    /// Decimal places for prices.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_unit: " ".to_string(),
            currency: String::new(),
            precision: 2,
        }
    }
}

impl RenderOptions {
    /// Use `unit` as the per-level indent.
    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Indent by `width` spaces per level.
    #[must_use]
    pub fn with_indent_width(self, width: usize) -> Self {
        self.with_indent_unit(" ".repeat(width))
    }

    /// Prefix prices with `symbol`.
    #[must_use]
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Print prices with `precision` decimals.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Indent prefix for a node at `depth`.
    #[must_use]
    pub fn indent(&self, depth: usize) -> String {
        self.indent_unit.repeat(depth)
    }

    /// Format a price with currency and precision.
    #[must_use]
    pub fn format_price(&self, price: f64) -> String {
        format!("{}{:.*}", self.currency, self.precision, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.indent(0), "");
        assert_eq!(options.indent(2), "  ");
        assert_eq!(options.format_price(4.99), "4.99");
        assert_eq!(options.format_price(2.5), "2.50");
    }

    #[test]
    fn test_builders() {
        let options = RenderOptions::default()
            .with_indent_width(2)
            .with_currency("$")
            .with_precision(1);
        assert_eq!(options.indent(2), "    ");
        assert_eq!(options.format_price(15.99), "$16.0");
    }
}
