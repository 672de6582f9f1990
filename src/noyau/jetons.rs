// src/noyau/jetons.rs
//
// Tokenisation en une seule passe.
// Le scanner garde deux états : le dernier jeton émis (pour décider du moins
// unaire) et la suite de symboles en attente (opérateurs collés, ex: "**").

use super::operateurs::{Fonction, Operateur, MOINS_UNAIRE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Operand,
    Operator,
    Parenthesis,
    Function,
    Unknown,
}

/// Jeton : texte littéral + type dérivé du texte (fixé à la création).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: classify(&text),
            text,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn operateur(&self) -> Option<Operateur> {
        match self.kind {
            TokenKind::Operator => Operateur::from_text(&self.text),
            _ => None,
        }
    }

    pub fn fonction(&self) -> Option<Fonction> {
        match self.kind {
            TokenKind::Function => Fonction::from_name(&self.text),
            _ => None,
        }
    }

    pub fn is_open_paren(&self) -> bool {
        self.text == "("
    }

    /// Jeton au type imposé, sans passer par `classify`.
    #[cfg(test)]
    pub(crate) fn with_kind(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Ordre fixe : nombre -> fonction -> parenthèse -> table d’opérateurs -> inconnu.
pub fn classify(text: &str) -> TokenKind {
    if is_number(text) {
        TokenKind::Operand
    } else if Fonction::from_name(text).is_some() {
        TokenKind::Function
    } else if text == "(" || text == ")" {
        TokenKind::Parenthesis
    } else if Operateur::from_text(text).is_some() {
        TokenKind::Operator
    } else {
        TokenKind::Unknown
    }
}

/// `[0-9]+(\.[0-9]+)?`, texte complet.
fn is_number(text: &str) -> bool {
    let (ent, frac) = match text.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (text, None),
    };
    let chiffres = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    chiffres(ent) && frac.map_or(true, chiffres)
}

/// Découpe une expression en jetons. Ne échoue jamais : le contenu invalide
/// devient un jeton `Unknown`, rejeté plus tard par la conversion RPN.
///
/// - nombres : `12`, `3.14` (un point sans chiffre après reste un symbole)
/// - fonctions : abs, sin, cos, tan, ln, arcsin, arccos, arctan, sqrt (toute casse)
/// - parenthèses : toujours isolées
/// - moins unaire : `-` en début, après un opérateur ou après `(` devient `@`
/// - le reste : suites de symboles collés, classées telles quelles
pub fn tokenize(expr: &str) -> Vec<Token> {
    let chars: Vec<char> = expr.chars().collect();
    let mut out: Vec<Token> = Vec::new();
    let mut symboles = String::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            vide_symboles(&mut symboles, &mut out);
            i += 1;
            continue;
        }

        if c == '(' || c == ')' {
            vide_symboles(&mut symboles, &mut out);
            out.push(Token::new(c));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            vide_symboles(&mut symboles, &mut out);
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            out.push(Token::new(chars[start..i].iter().collect::<String>()));
            continue;
        }

        if let Some(n) = Fonction::prefix_len(&chars[i..]) {
            vide_symboles(&mut symboles, &mut out);
            out.push(Token::new(chars[i..i + n].iter().collect::<String>()));
            i += n;
            continue;
        }

        if c == '-' && moins_unaire(&out, &symboles) {
            vide_symboles(&mut symboles, &mut out);
            out.push(Token::new(MOINS_UNAIRE));
            i += 1;
            continue;
        }

        symboles.push(c);
        i += 1;
    }

    vide_symboles(&mut symboles, &mut out);
    log::trace!("tokenize({expr:?}) -> {} jetons", out.len());
    out
}

fn vide_symboles(symboles: &mut String, out: &mut Vec<Token>) {
    if !symboles.is_empty() {
        out.push(Token::new(std::mem::take(symboles)));
    }
}

/// Un `-` est unaire s’il suit directement un symbole en attente, ou si le
/// dernier jeton est absent, un opérateur ou une parenthèse ouvrante.
fn moins_unaire(out: &[Token], symboles: &str) -> bool {
    if !symboles.is_empty() {
        return true;
    }
    match out.last() {
        None => true,
        Some(t) => t.kind() == TokenKind::Operator || t.is_open_paren(),
    }
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ")
}
