//! Expression tree definitions.

use std::fmt;

use crate::printer::ExpressionPrinter;

/// An expression found in tag content.
///
/// Each node owns its children.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// `.`, the current context
    ImplicitIterator,

    /// `name`
    Identifier(String),

    /// `base.identifier`
    Scoped {
        /// Expression the identifier is looked up in
        base: Box<Expression>,
        /// Key looked up in the base value
        identifier: String,
    },

    /// `callee(argument)`
    Filter {
        /// Expression evaluating to the filter
        callee: Box<Expression>,
        /// Expression evaluating to the argument
        argument: Box<Expression>,
        /// True when the call is not the last argument of a multi-argument
        /// filter, so applying it yields another filter
        partial_application: bool,
    },
}

impl Expression {
    /// `name`
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// `base.identifier`
    pub fn scoped(base: Expression, identifier: impl Into<String>) -> Self {
        Expression::Scoped {
            base: Box::new(base),
            identifier: identifier.into(),
        }
    }

    /// `callee(argument)` as a complete application.
    pub fn filter(callee: Expression, argument: Expression) -> Self {
        Self::filter_with(callee, argument, false)
    }

    /// `callee(argument)` with explicit partial application metadata.
    pub fn filter_with(
        callee: Expression,
        argument: Expression,
        partial_application: bool,
    ) -> Self {
        Expression::Filter {
            callee: Box::new(callee),
            argument: Box::new(argument),
            partial_application,
        }
    }

    /// Builds a call of `callee` with several arguments, as nested single
    /// argument applications. Every application but the last is partial.
    ///
    /// Returns `callee` unchanged when `arguments` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use stache_expr::Expression;
    ///
    /// let call = Expression::call(
    ///     Expression::identifier("join"),
    ///     vec![Expression::identifier("a"), Expression::identifier("b")],
    /// );
    /// assert_eq!(call.to_string(), "join(a)(b)");
    /// ```
    pub fn call(callee: Expression, arguments: impl IntoIterator<Item = Expression>) -> Self {
        let mut arguments = arguments.into_iter().peekable();
        let mut expr = callee;
        while let Some(argument) = arguments.next() {
            let partial = arguments.peek().is_some();
            expr = Self::filter_with(expr, argument, partial);
        }
        expr
    }

    /// Returns true for `.`
    pub fn is_implicit_iterator(&self) -> bool {
        matches!(self, Expression::ImplicitIterator)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ExpressionPrinter::new().print(self))
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expression({})", self)
    }
}
