//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultats, erreur, digits, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la lecture décimale (digits).

/// Précision de la lecture décimale par défaut.
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Démarche affichée : jetons infixes et RPN, en texte.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // rationnel exact "n" ou "n/d"
    pub decimal: String,     // lecture décimale tronquée
    pub erreur: String,      // message d’erreur (construction ou évaluation)
    pub decimal_dispo: bool, // false si erreur / vide

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            decimal: String::new(),
            erreur: String::new(),
            decimal_dispo: false,
            demarche: Demarche::default(),
            digits: DIGITS_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.decimal.clear();
        self.erreur.clear();
        self.decimal_dispo = false;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) pour ne pas effacer l’écran sur une faute.
    /// La démarche reste si la construction a réussi (la RPN est valable même
    /// quand l’évaluation échoue, ex: division par zéro).
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Option<Demarche>) {
        self.erreur = msg.into();
        self.decimal.clear();
        self.decimal_dispo = false;
        self.demarche = demarche.unwrap_or_default();
        self.focus_entree = true;
    }

    /// Dépose un résultat complet (EXACT + lecture décimale + démarche).
    pub fn set_resultats(
        &mut self,
        exact: impl Into<String>,
        decimal: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.exact = exact.into();
        self.decimal = decimal.into();
        self.decimal_dispo = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self.focus_entree = true;
    }
}
