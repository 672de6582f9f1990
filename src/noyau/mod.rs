//! Noyau exact : infixe -> RPN -> rationnel
//!
//! Organisation interne :
//! - operateurs.rs : tables fixes (précédence, associativité, fonctions)
//! - jetons.rs     : tokenisation (scanner une passe)
//! - rpn.rs        : shunting-yard
//! - eval.rs       : machine à pile (exact + repli double précision)
//! - expression.rs : poignée (construction + résultat mémorisé)
//! - format.rs     : affichage EXACT et lecture décimale tronquée
//! - erreur.rs     : erreurs

pub mod erreur;
pub mod eval;
pub mod expression;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Error, ErrorKind};
pub use eval::eval_rpn;
pub use expression::Expression;
pub use jetons::{tokenize, Token, TokenKind};
pub use rpn::to_rpn;
