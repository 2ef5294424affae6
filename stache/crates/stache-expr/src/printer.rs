//! Expression printer.
//!
//! The printer renders an expression into a reusable buffer. Printing is
//! total: every tree has a printed form.

use crate::expr::Expression;

/// Renders expressions back into template syntax.
///
/// # Example
///
/// ```
/// use stache_expr::{Expression, ExpressionPrinter};
///
/// let mut printer = ExpressionPrinter::new();
/// let expr = Expression::scoped(Expression::identifier("a"), "b");
/// assert_eq!(printer.print(&expr), "a.b");
/// assert_eq!(printer.print(&Expression::ImplicitIterator), ".");
/// ```
#[derive(Debug, Default)]
pub struct ExpressionPrinter {
    buffer: String,
}

impl ExpressionPrinter {
    /// Creates a printer with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints `expr`. Nothing from a previous call carries over.
    pub fn print(&mut self, expr: &Expression) -> String {
        self.buffer.clear();
        self.render(expr);
        self.buffer.clone()
    }

    fn render(&mut self, expr: &Expression) {
        match expr {
            Expression::ImplicitIterator => self.buffer.push('.'),
            Expression::Identifier(name) => self.buffer.push_str(name),
            Expression::Scoped { base, identifier } => {
                self.render(base);
                self.buffer.push('.');
                self.buffer.push_str(identifier);
            }
            // `f(a, b)` comes out as `f(a)(b)`.
            Expression::Filter {
                callee, argument, ..
            } => {
                self.render(callee);
                self.buffer.push('(');
                self.render(argument);
                self.buffer.push(')');
            }
        }
    }
}

/// Prints `expr` with a fresh printer.
pub fn print(expr: &Expression) -> String {
    ExpressionPrinter::new().print(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Expression {
        Expression::identifier(name)
    }

    #[test]
    fn test_implicit_iterator() {
        assert_eq!(print(&Expression::ImplicitIterator), ".");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(print(&ident("name")), "name");
    }

    #[test]
    fn test_scoped() {
        assert_eq!(print(&Expression::scoped(ident("a"), "b")), "a.b");
    }

    #[test]
    fn test_deeply_scoped() {
        let expr = Expression::scoped(Expression::scoped(ident("a"), "b"), "c");
        assert_eq!(print(&expr), "a.b.c");
    }

    #[test]
    fn test_scoped_on_implicit_iterator() {
        let expr = Expression::scoped(Expression::ImplicitIterator, "name");
        assert_eq!(print(&expr), "..name");
    }

    #[test]
    fn test_filter() {
        assert_eq!(print(&Expression::filter(ident("f"), ident("x"))), "f(x)");
    }

    #[test]
    fn test_two_argument_filter_prints_nested() {
        let expr = Expression::filter(
            Expression::filter_with(ident("f"), ident("a"), true),
            ident("b"),
        );
        assert_eq!(print(&expr), "f(a)(b)");
    }

    #[test]
    fn test_filter_of_scoped_callee_and_argument() {
        let expr = Expression::filter(
            Expression::scoped(ident("filters"), "upper"),
            Expression::scoped(ident("user"), "name"),
        );
        assert_eq!(print(&expr), "filters.upper(user.name)");
    }

    #[test]
    fn test_scoped_filter_result() {
        let expr = Expression::scoped(Expression::filter(ident("first"), ident("items")), "title");
        assert_eq!(print(&expr), "first(items).title");
    }

    #[test]
    fn test_printer_reuse_starts_fresh() {
        let mut printer = ExpressionPrinter::new();
        assert_eq!(printer.print(&ident("long_identifier")), "long_identifier");
        assert_eq!(printer.print(&ident("x")), "x");
    }
}
