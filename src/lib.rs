//! Calculatrice RPN : expression infixe -> notation polonaise inversée -> rationnel exact.
//!
//! ```
//! use calculatrice_rpn::Expression;
//!
//! let e = Expression::new("(1 + 2) * 3").unwrap();
//! assert_eq!(e.postfix(), ["1", "2", "+", "3", "*"]);
//! assert_eq!(e.result().unwrap().to_string(), "9");
//! ```

pub mod noyau;

pub use noyau::{Error, ErrorKind, Expression, Token, TokenKind};
