//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # parsekit-expr
//!
//! A compiled arithmetic expression grammar for **parsekit**, and the
//! `parsekit-expr` binary that tokenizes a line, parses it and prints the
//! tokens and the tree.
//!
//! ## Grammar
//!
//! ```text
//! Start -> Expr
//! Expr  -> Expr + Expr | Expr - Expr | Expr * Expr | Expr / Expr
//!        | ( Expr ) | num | ident
//! ```
//!
//! `*` and `/` bind tighter than `+` and `-`, and all four associate to the
//! left. Whitespace and `/* ... */` comments are skipped.
//!
//! ## Modules
//!
//! - [`lexer_data`]: lexer modes, rules, patterns and actions
//! - [`parser_data`]: SLR(1) tables and the precedence resolver
//! - [`pipeline`]: [`ExprPipeline`], the compiled lexer and parser together
//!
//! ## Example
//!
//! ```rust
//! use parsekit::State;
//! use parsekit_expr::{ExprPipeline, NontermID};
//!
//! let pipeline = ExprPipeline::try_new().unwrap();
//! let mut state = State::new();
//!
//! let source = "1 + 2 * x";
//! let tokens = pipeline.lex(&mut state, source).unwrap();
//! assert_eq!(tokens.len(), 5);
//!
//! let tree = pipeline.parse(&mut state, &tokens).unwrap();
//! assert_eq!(tree.as_node().unwrap().nonterminal(), NontermID::Expr);
//! assert_eq!(
//!     tree.display(source).to_string().lines().next(),
//!     Some("Expr:")
//! );
//!
//! let tokens = pipeline.lex(&mut state, "1 +").unwrap();
//! assert!(pipeline.parse(&mut state, &tokens).is_err());
//! assert_eq!(state.message(), "unexpected end of input after PLUS at 2..3");
//! ```

pub mod lexer_data;
pub mod parser_data;
pub mod pipeline;


pub use lexer_data::LexData;
pub use parser_data::{NontermID, ParData, TermID};
pub use pipeline::{ExprPipeline, ExprTree};
