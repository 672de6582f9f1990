//! Tests scénarios : expression -> RPN attendue -> résultat attendu.
//!
//! Les valeurs passant par le repli double précision sont comparées à la valeur
//! exacte du double calculé ici même (même libm), pas à une constante figée.

use num_bigint::BigInt;
use num_rational::BigRational;

use super::{ErrorKind, Expression};

fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn depuis_double(f: f64) -> BigRational {
    BigRational::from_float(f).unwrap_or_else(|| panic!("double non fini: {f}"))
}

enum Attendu {
    Valeur(BigRational),
    Echec(ErrorKind),
}

struct Cas {
    entree: &'static str,
    rpn: &'static [&'static str],
    attendu: Attendu,
}

fn cas() -> Vec<Cas> {
    use Attendu::*;
    vec![
        Cas {
            entree: "5 + ((1 + 2) * 4) - 3",
            rpn: &["5", "1", "2", "+", "4", "*", "+", "3", "-"],
            attendu: Valeur(q(14, 1)),
        },
        Cas {
            entree: "(1 + 2) * 3",
            rpn: &["1", "2", "+", "3", "*"],
            attendu: Valeur(q(9, 1)),
        },
        Cas {
            entree: "(1 + 2) / 0",
            rpn: &["1", "2", "+", "0", "/"],
            attendu: Echec(ErrorKind::ZeroDivision),
        },
        Cas {
            entree: "1 / 2 + ( 2 + 3 ) * ( 9 - 2 * 2 - 3 / 4)",
            rpn: &[
                "1", "2", "/", "2", "3", "+", "9", "2", "2", "*", "-", "3", "4", "/", "-", "*",
                "+",
            ],
            attendu: Valeur(q(87, 4)),
        },
        Cas {
            entree: "-1.33",
            rpn: &["1.33", "@"],
            attendu: Valeur(q(-133, 100)),
        },
        Cas {
            entree: "-1.5+2-2.5+3",
            rpn: &["1.5", "@", "2", "+", "2.5", "-", "3", "+"],
            attendu: Valeur(q(1, 1)),
        },
        Cas {
            entree: "sin(3**3)",
            rpn: &["3", "3", "**", "sin"],
            attendu: Valeur(depuis_double(27f64.sin())),
        },
        Cas {
            entree: "sin(2^3)",
            rpn: &["2", "3", "^", "sin"],
            attendu: Valeur(depuis_double(8f64.sin())),
        },
        Cas {
            entree: "tan(4÷-2×(8%6)+1.5)",
            rpn: &["4", "2", "@", "÷", "8", "6", "%", "×", "1.5", "+", "tan"],
            attendu: Valeur(depuis_double((-2.5f64).tan())),
        },
        Cas {
            entree: "AbS(-1.5)",
            rpn: &["1.5", "@", "AbS"],
            attendu: Valeur(q(3, 2)),
        },
        Cas {
            entree: "-2**2",
            rpn: &["2", "2", "**", "@"],
            attendu: Valeur(q(-4, 1)),
        },
        Cas {
            entree: "2**-2",
            rpn: &["2", "2", "@", "**"],
            attendu: Valeur(q(1, 4)),
        },
        Cas {
            entree: "2 ^ 3 ^ 2",
            rpn: &["2", "3", "^", "2", "^"],
            attendu: Valeur(q(64, 1)),
        },
        Cas {
            entree: "2 ** 3 ** 2",
            rpn: &["2", "3", "**", "2", "**"],
            attendu: Valeur(q(64, 1)),
        },
        Cas {
            entree: "1 + 2 / (3 - 3)",
            rpn: &["1", "2", "3", "3", "-", "/", "+"],
            attendu: Echec(ErrorKind::ZeroDivision),
        },
        Cas {
            entree: "sqrt(-4)",
            rpn: &["4", "@", "sqrt"],
            attendu: Echec(ErrorKind::UnrecognizedExpression),
        },
        Cas {
            entree: "1 2",
            rpn: &["1", "2"],
            attendu: Echec(ErrorKind::UnrecognizedExpression),
        },
        Cas {
            entree: "1 +",
            rpn: &["1", "+"],
            attendu: Echec(ErrorKind::UnrecognizedExpression),
        },
    ]
}

#[test]
fn scenarios_rpn_et_resultats() {
    for c in cas() {
        let e = Expression::new(c.entree)
            .unwrap_or_else(|err| panic!("construction {:?}: {err}", c.entree));
        assert_eq!(e.postfix(), c.rpn, "rpn de {:?}", c.entree);

        match (&c.attendu, e.result()) {
            (Attendu::Valeur(v), Ok(r)) => assert_eq!(&r, v, "résultat de {:?}", c.entree),
            (Attendu::Echec(kind), Err(err)) => {
                assert_eq!(err.kind(), *kind, "erreur de {:?}: {err}", c.entree)
            }
            (Attendu::Valeur(v), Err(err)) => {
                panic!("{:?}: attendu {v}, obtenu erreur {err}", c.entree)
            }
            (Attendu::Echec(kind), Ok(r)) => {
                panic!("{:?}: attendu {kind:?}, obtenu {r}", c.entree)
            }
        }
    }
}

#[test]
fn parentheses_rejetees_avant_evaluation() {
    for s in ["(1 + 2 / 4", "1 + 2)", "((1 + 2)", "(()", ")1("] {
        let err = Expression::new(s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedExpression, "{s:?}");
    }
}

#[test]
fn resultat_et_rpn_idempotents() {
    let e = Expression::new("1 / 2 + ( 2 + 3 ) * ( 9 - 2 * 2 - 3 / 4)").unwrap();
    assert_eq!(e.result().unwrap(), e.result().unwrap());
    assert_eq!(e.postfix(), e.postfix());
}

#[test]
fn majuscules_et_alias() {
    let a = Expression::new("COS(0) × 6 ÷ 4").unwrap().result().unwrap();
    let b = Expression::new("cos(0) * 6 / 4").unwrap().result().unwrap();
    assert_eq!(a, b);
    assert_eq!(a, q(3, 2));
}

#[test]
fn toutes_les_fonctions() {
    let cas: [(&str, f64); 9] = [
        ("abs(-0.5)", 0.5f64.abs()),
        ("sin(1)", 1f64.sin()),
        ("cos(1)", 1f64.cos()),
        ("tan(1)", 1f64.tan()),
        ("ln(2)", 2f64.ln()),
        ("arcsin(0.5)", 0.5f64.asin()),
        ("arccos(0.5)", 0.5f64.acos()),
        ("arctan(1)", 1f64.atan()),
        ("sqrt(2)", 2f64.sqrt()),
    ];
    for (s, f) in cas {
        let r = Expression::new(s).unwrap().result().unwrap();
        assert_eq!(r, depuis_double(f), "{s}");
    }
}
