// src/noyau/expression.rs
//
// Poignée d’expression : tokenize + RPN à la construction, évaluation
// paresseuse mémorisée (calculée au plus une fois).

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_rational::BigRational;

use super::erreur::Error;
use super::eval::eval_rpn;
use super::jetons::{format_tokens, tokenize, Token};
use super::rpn::to_rpn;

#[derive(Debug)]
pub struct Expression {
    infix: Vec<Token>,
    postfix: Vec<Token>,
    // cache : écrit une seule fois, seulement en cas de succès
    resultat: OnceLock<BigRational>,
}

impl Expression {
    /// Construit la poignée. Échoue (UnrecognizedExpression) sur jeton inconnu
    /// ou parenthèses mal appariées ; aucune évaluation n’a lieu ici.
    pub fn new(expr: &str) -> Result<Self, Error> {
        let infix = tokenize(expr);
        let postfix = to_rpn(&infix)?;
        log::debug!("{expr:?} -> rpn [{}]", format_tokens(&postfix));
        Ok(Self {
            infix,
            postfix,
            resultat: OnceLock::new(),
        })
    }

    /// Résultat de l’évaluation. Premier appel : évalue la RPN ; ensuite :
    /// valeur mémorisée. Un échec ne remplit pas le cache.
    pub fn result(&self) -> Result<BigRational, Error> {
        if let Some(r) = self.resultat.get() {
            return Ok(r.clone());
        }
        let r = eval_rpn(&self.postfix)?;
        log::trace!("résultat mémorisé: {r}");
        Ok(self.resultat.get_or_init(|| r).clone())
    }

    /// Texte de chaque jeton RPN, dans l’ordre d’émission.
    pub fn postfix(&self) -> Vec<String> {
        self.postfix.iter().map(|t| t.text().to_string()).collect()
    }

    /// Texte de chaque jeton infixe, dans l’ordre de lecture.
    pub fn infix(&self) -> Vec<String> {
        self.infix.iter().map(|t| t.text().to_string()).collect()
    }

    pub fn postfix_tokens(&self) -> &[Token] {
        &self.postfix
    }

    pub fn infix_tokens(&self) -> &[Token] {
        &self.infix
    }

    /// Vrai si le résultat a déjà été calculé avec succès.
    pub fn is_evaluated(&self) -> bool {
        self.resultat.get().is_some()
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::new(s)
    }
}

/// Forme RPN, jetons séparés par un espace.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tokens(&self.postfix))
    }
}
