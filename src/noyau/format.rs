// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

/* ------------------------ EXACT ------------------------ */

/// Forme exacte : "n" si entier, sinon "n/d" (fraction irréductible, signe au numérateur).
pub fn format_rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Lecture décimale (tronquée) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lecture décimale tronquée à `digits` chiffres après la virgule.
/// Le signe vient du rationnel (pas de l’entier tronqué) : -1/30 -> "-0.03".
pub fn format_decimal(r: &BigRational, digits: usize) -> String {
    let neg = r.is_negative();
    let abs = r.abs();

    // |r| * 10^digits, tronqué (numérateur et dénominateur positifs)
    let scaled = (abs.numer() * pow10(digits)) / abs.denom();

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    format!("{signe}{int_part}.{frac}")
}
