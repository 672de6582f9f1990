// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix)
//
// Règles:
// - Operand  : sortie directe
// - Function : empilée, précédence maximale (sort dès qu’un opérateur binaire arrive)
// - Operator : dépile tant que le sommet lie plus fort, ou aussi fort avec un
//              opérateur entrant associatif à gauche (puissance comprise) ; puis empile.
//              Le moins unaire (préfixe) n’a pas d’opérande gauche : il ne dépile rien.
// - ( / )    : compteurs d’ouvrantes / fermantes, ")" dépile jusqu’à "(".

use super::erreur::Error;
use super::jetons::{Token, TokenKind};
use super::operateurs::{Assoc, PRECEDENCE_FONCTION};

/// Précédence d’un jeton présent sur la pile d’opérateurs.
/// None pour "(" : barrière, jamais dépilée par un opérateur.
fn precedence_pile(t: &Token) -> Option<u8> {
    match t.kind() {
        TokenKind::Function => Some(PRECEDENCE_FONCTION),
        TokenKind::Operator => t.operateur().map(|op| op.precedence()),
        _ => None,
    }
}

/// Convertit une suite de jetons infixes en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: ( 1 + 2 ) * 3
///   rpn:    1 2 + 3 *
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, Error> {
    if tokens.is_empty() {
        return Err(Error::EmptyResult);
    }

    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();
    let mut ouvrantes: usize = 0;
    let mut fermantes: usize = 0;

    for tok in tokens.iter().cloned() {
        match tok.kind() {
            TokenKind::Unknown => return Err(Error::UnknownToken(tok.text().to_string())),

            TokenKind::Operand => out.push(tok),

            TokenKind::Function => ops.push(tok),

            TokenKind::Operator => {
                let op = tok
                    .operateur()
                    .ok_or_else(|| Error::UnknownToken(tok.text().to_string()))?;

                if !op.is_prefix() {
                    let p_tok = op.precedence();
                    let gauche = op.associativity() == Assoc::Left;

                    while let Some(p_top) = ops.last().and_then(precedence_pile) {
                        let doit_pop = p_top > p_tok || (p_top == p_tok && gauche);
                        if !doit_pop {
                            break;
                        }
                        if let Some(top) = ops.pop() {
                            out.push(top);
                        }
                    }
                }

                ops.push(tok);
            }

            TokenKind::Parenthesis => {
                if tok.is_open_paren() {
                    ops.push(tok);
                    ouvrantes += 1;
                } else {
                    fermantes += 1;
                    loop {
                        match ops.pop() {
                            Some(top) if top.is_open_paren() => break,
                            Some(top) => out.push(top),
                            None => return Err(Error::MismatchedParenthesis),
                        }
                    }
                }
            }
        }
    }

    if ouvrantes != fermantes {
        return Err(Error::MismatchedParenthesis);
    }
    if ops.iter().any(|t| t.kind() == TokenKind::Parenthesis) {
        return Err(Error::MismatchedParenthesis);
    }

    // vide la pile ops (dernier empilé, premier sorti)
    while let Some(op) = ops.pop() {
        out.push(op);
    }

    log::debug!("to_rpn: {} jetons -> {} en RPN", tokens.len(), out.len());
    Ok(out)
}
