//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - erreurs attendues seulement dans les deux familles connues
//! - invariant clé : un résultat obtenu est identique au second appel

use std::time::{Duration, Instant};

use super::{tokenize, Error, ErrorKind, Expression};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

const OPS: [&str; 9] = ["+", "-", "*", "×", "/", "÷", "%", "^", "**"];
const FONCTIONS: [&str; 9] = [
    "abs", "sin", "cos", "tan", "ln", "arcsin", "arccos", "arctan", "sqrt",
];

fn gen_nombre(rng: &mut Rng) -> String {
    // petits nombres, 0 inclus (utile pour tester les divisions)
    let n = rng.pick(10);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(100))
    }
}

fn gen_expr(rng: &mut Rng, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_nombre(rng);
    }
    match rng.pick(5) {
        0 => gen_nombre(rng),
        1 => format!("-{}", gen_expr(rng, profondeur - 1)),
        2 => format!("({})", gen_expr(rng, profondeur - 1)),
        3 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            let f = if rng.coin() { f.to_uppercase() } else { f.to_string() };
            format!("{f}({})", gen_expr(rng, profondeur - 1))
        }
        _ => {
            let op = OPS[rng.pick(OPS.len() as u32) as usize];
            let espace = if rng.coin() { " " } else { "" };
            format!(
                "{}{espace}{op}{espace}{}",
                gen_expr(rng, profondeur - 1),
                gen_expr(rng, profondeur - 1)
            )
        }
    }
}

/// Bruit : caractères pris dans le vocabulaire + quelques intrus.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [char; 16] = [
        '1', '2', '.', '(', ')', '+', '-', '*', '/', '%', '^', ' ', 's', 'i', 'n', '$',
    ];
    let len = rng.pick(24);
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5eed_0001);

    for _ in 0..2_000 {
        budget(start, max);
        let s = gen_expr(&mut rng, 4);

        // parenthèses toujours équilibrées, vocabulaire connu : la construction réussit
        let e = Expression::new(&s).unwrap_or_else(|err| panic!("expr={s:?} err={err}"));

        match e.result() {
            Ok(r) => {
                assert_eq!(e.result().as_ref(), Ok(&r), "expr={s:?}");
                assert!(e.is_evaluated());
            }
            Err(err) => {
                assert!(!e.is_evaluated(), "expr={s:?}");
                match err {
                    Error::ZeroDivision | Error::NonFiniteResult(_) => {}
                    autre => panic!("expr={s:?} erreur inattendue: {autre}"),
                }
            }
        }
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5eed_0002);

    for _ in 0..5_000 {
        budget(start, max);
        let s = gen_bruit(&mut rng);
        let _ = tokenize(&s);
        match Expression::new(&s) {
            Ok(e) => {
                // échec d’évaluation : cache vide ; succès : cache rempli
                let ok = e.result().is_ok();
                assert_eq!(e.is_evaluated(), ok, "s={s:?}");
            }
            Err(err) => assert_eq!(err.kind(), ErrorKind::UnrecognizedExpression, "s={s:?}"),
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);
    for _ in 0..100 {
        let sa = gen_expr(&mut a, 3);
        let sb = gen_expr(&mut b, 3);
        assert_eq!(sa, sb);
        let ea = Expression::new(&sa).unwrap();
        let eb = Expression::new(&sb).unwrap();
        assert_eq!(ea.postfix(), eb.postfix());
        assert_eq!(ea.result(), eb.result());
    }
}
