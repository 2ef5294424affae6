//! stache-expr - Expression Trees for Mustache Tags
//!
//! Tag content such as `user.name` or `uppercase(user.name)` is parsed by the
//! template front end into an [`Expression`] tree. This crate defines that
//! tree and the [`ExpressionPrinter`], which turns a tree back into its
//! canonical source form.
//!
//! # Example Usage
//!
//! ```
//! use stache_expr::{print, Expression};
//!
//! let expr = Expression::filter(
//!     Expression::identifier("uppercase"),
//!     Expression::scoped(Expression::identifier("user"), "name"),
//! );
//! assert_eq!(print(&expr), "uppercase(user.name)");
//! assert_eq!(format!("{:?}", expr), "Expression(uppercase(user.name))");
//! ```
//!
//! # Grammar
//!
//! ```text
//! expr := '.' | ident | expr '.' ident | expr '(' expr ')'
//! ```
//!
//! Filters taking several arguments have no surface syntax of their own. A
//! call `f(a, b)` is represented as `f` applied to `a`, then applied to `b`,
//! and prints as `f(a)(b)`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod expr;
pub mod printer;

pub use expr::Expression;
pub use printer::{print, ExpressionPrinter};
