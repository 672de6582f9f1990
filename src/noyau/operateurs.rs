// src/noyau/operateurs.rs
//
// Tables fixes : opérateurs (précédence + associativité) et fonctions unaires.
// Constantes de processus, jamais modifiées.

/// Texte synthétique du moins unaire (produit par le tokenizer).
pub const MOINS_UNAIRE: &str = "@";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Neg,
}

impl Operateur {
    /// Rang de précédence : plus haut = lie plus fort.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Add | Operateur::Sub => 1,
            Operateur::Mul | Operateur::Div | Operateur::Mod => 2,
            Operateur::Neg => 3,
            Operateur::Pow => 4,
        }
    }

    pub fn associativity(self) -> Assoc {
        match self {
            Operateur::Neg => Assoc::Right,
            Operateur::Pow
            | Operateur::Add
            | Operateur::Sub
            | Operateur::Mul
            | Operateur::Div
            | Operateur::Mod => Assoc::Left,
        }
    }

    /// Opérateur préfixe (un seul opérande, écrit avant lui).
    pub fn is_prefix(self) -> bool {
        matches!(self, Operateur::Neg)
    }

    /// Recherche dans la table (alias compris : × ≡ *, ÷ ≡ /, ^ ≡ **).
    pub fn from_text(s: &str) -> Option<Operateur> {
        OPERATEURS
            .iter()
            .find(|(texte, _)| *texte == s)
            .map(|(_, op)| *op)
    }
}

/// Table texte -> opérateur.
pub const OPERATEURS: &[(&str, Operateur)] = &[
    ("**", Operateur::Pow),
    ("^", Operateur::Pow),
    (MOINS_UNAIRE, Operateur::Neg),
    ("*", Operateur::Mul),
    ("×", Operateur::Mul),
    ("/", Operateur::Div),
    ("÷", Operateur::Div),
    ("%", Operateur::Mod),
    ("+", Operateur::Add),
    ("-", Operateur::Sub),
];

/// Précédence d’une fonction sur la pile d’opérateurs : au-dessus de tout.
pub const PRECEDENCE_FONCTION: u8 = u8::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Abs,
    Sin,
    Cos,
    Tan,
    Ln,
    ArcSin,
    ArcCos,
    ArcTan,
    Sqrt,
}

/// Noms reconnus, le plus long d’abord (arcsin avant sin au scan).
pub const FONCTIONS: &[(&str, Fonction)] = &[
    ("arcsin", Fonction::ArcSin),
    ("arccos", Fonction::ArcCos),
    ("arctan", Fonction::ArcTan),
    ("sqrt", Fonction::Sqrt),
    ("abs", Fonction::Abs),
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("ln", Fonction::Ln),
];

impl Fonction {
    /// Nom exact, insensible à la casse.
    pub fn from_name(s: &str) -> Option<Fonction> {
        FONCTIONS
            .iter()
            .find(|(nom, _)| nom.eq_ignore_ascii_case(s))
            .map(|(_, f)| *f)
    }

    /// Nom de fonction qui commence `chars` (insensible à la casse).
    /// Renvoie la longueur en caractères du nom trouvé.
    pub fn prefix_len(chars: &[char]) -> Option<usize> {
        FONCTIONS.iter().find_map(|(nom, _)| {
            let n = nom.len();
            if chars.len() < n {
                return None;
            }
            let ok = chars[..n]
                .iter()
                .zip(nom.chars())
                .all(|(c, attendu)| c.to_ascii_lowercase() == attendu);
            ok.then_some(n)
        })
    }

    /// Application en double précision.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Fonction::Abs => x.abs(),
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Ln => x.ln(),
            Fonction::ArcSin => x.asin(),
            Fonction::ArcCos => x.acos(),
            Fonction::ArcTan => x.atan(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}
