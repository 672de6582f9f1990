// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Deux familles seulement vues de l’extérieur (ErrorKind) ; le détail reste
// disponible pour l’affichage et le journal.

/// Famille d’erreur : ce que l’appelant doit distinguer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Défaut lexical ou structurel (jeton inconnu, parenthèses, pile, littéral…).
    UnrecognizedExpression,
    /// Division par un opérande exactement nul.
    ZeroDivision,
}

#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("unrecognized expression: unknown token '{0}'")]
    UnknownToken(String),
    #[error("unrecognized expression: mismatched parenthesis")]
    MismatchedParenthesis,
    #[error("unrecognized expression: missing operand for '{0}'")]
    StackUnderflow(String),
    #[error("unrecognized expression: invalid numeric literal '{0}'")]
    InvalidLiteral(String),
    #[error("unrecognized expression: unknown function '{0}'")]
    UnknownFunction(String),
    #[error("unrecognized expression: non-finite result for '{0}'")]
    NonFiniteResult(String),
    #[error("unrecognized expression: empty expression")]
    EmptyResult,
    #[error("unrecognized expression: {0} operands left without operator")]
    DanglingOperands(usize),
    #[error("zero division")]
    ZeroDivision,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ZeroDivision => ErrorKind::ZeroDivision,
            _ => ErrorKind::UnrecognizedExpression,
        }
    }
}
