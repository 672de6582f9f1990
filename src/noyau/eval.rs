//! Noyau — évaluation de la RPN (machine à pile)
//!
//! Exact partout où Q est fermé (+ - * /). Repli en double précision, une
//! opération à la fois, pour % , puissance et fonctions ; le double obtenu est
//! reconverti immédiatement en rationnel (valeur exacte du double).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::erreur::Error;
use super::jetons::{Token, TokenKind};
use super::operateurs::Operateur;

/// Littéral décimal exact : "12" -> 12, "1.33" -> 133/100.
pub fn parse_literal(s: &str) -> Result<BigRational, Error> {
    let invalide = || Error::InvalidLiteral(s.to_string());

    let (ent, frac) = match s.split_once('.') {
        Some((e, f)) => (e, f),
        None => (s, ""),
    };
    if ent.is_empty() || (s.contains('.') && frac.is_empty()) {
        return Err(invalide());
    }
    if !ent.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalide());
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Ok(BigRational::new(n, d))
}

/// Passage en double (avec perte). None si non représentable.
fn to_f64(r: &BigRational, texte: &str) -> Result<f64, Error> {
    r.to_f64().ok_or_else(|| Error::NonFiniteResult(texte.to_string()))
}

/// Retour en rationnel : valeur exacte du double ; NaN / ±inf refusés.
fn from_f64(f: f64, texte: &str) -> Result<BigRational, Error> {
    BigRational::from_float(f).ok_or_else(|| Error::NonFiniteResult(texte.to_string()))
}

fn pop(st: &mut Vec<BigRational>, texte: &str) -> Result<BigRational, Error> {
    st.pop().ok_or_else(|| Error::StackUnderflow(texte.to_string()))
}

fn binaire(
    op: Operateur,
    texte: &str,
    a: BigRational,
    b: BigRational,
) -> Result<BigRational, Error> {
    match op {
        Operateur::Add => Ok(a + b),
        Operateur::Sub => Ok(a - b),
        Operateur::Mul => Ok(a * b),
        Operateur::Div => {
            if b.is_zero() {
                return Err(Error::ZeroDivision);
            }
            Ok(a / b)
        }
        Operateur::Mod => {
            if b.is_zero() {
                return Err(Error::ZeroDivision);
            }
            let (fa, fb) = (to_f64(&a, texte)?, to_f64(&b, texte)?);
            from_f64(fa % fb, texte)
        }
        Operateur::Pow => {
            if a.is_zero() && b.is_negative() {
                return Err(Error::ZeroDivision);
            }
            let (fa, fb) = (to_f64(&a, texte)?, to_f64(&b, texte)?);
            from_f64(fa.powf(fb), texte)
        }
        Operateur::Neg => Ok(-b),
    }
}

/// Évalue une RPN et retourne un rationnel.
///
/// Erreurs :
/// - jeton inconnu / parenthèse / opérande manquant / littéral invalide
///   -> UnrecognizedExpression
/// - division (ou modulo) par zéro exact -> ZeroDivision
/// - pile finale vide ou avec plusieurs valeurs -> UnrecognizedExpression
pub fn eval_rpn(rpn: &[Token]) -> Result<BigRational, Error> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        let texte = tok.text();
        match tok.kind() {
            TokenKind::Unknown | TokenKind::Parenthesis => {
                return Err(Error::UnknownToken(texte.to_string()));
            }

            TokenKind::Operand => st.push(parse_literal(texte)?),

            TokenKind::Operator => {
                let op = tok
                    .operateur()
                    .ok_or_else(|| Error::UnknownToken(texte.to_string()))?;
                let b = pop(&mut st, texte)?;
                let v = if op.is_prefix() {
                    binaire(op, texte, BigRational::zero(), b)?
                } else {
                    let a = pop(&mut st, texte)?;
                    binaire(op, texte, a, b)?
                };
                st.push(v);
            }

            TokenKind::Function => {
                let f = tok
                    .fonction()
                    .ok_or_else(|| Error::UnknownFunction(texte.to_string()))?;
                let x = pop(&mut st, texte)?;
                let y = f.apply(to_f64(&x, texte)?);
                log::trace!("{texte}({x}) ≈ {y}");
                st.push(from_f64(y, texte)?);
            }
        }
    }

    match st.len() {
        0 => Err(Error::EmptyResult),
        1 => st.pop().ok_or(Error::EmptyResult),
        n => Err(Error::DanglingOperands(n)),
    }
}
