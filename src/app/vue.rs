// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus), DEL retire une fonction entière
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_rpn::noyau::format::{format_decimal, format_rationnel};
use calculatrice_rpn::noyau::jetons::format_tokens;
use calculatrice_rpn::noyau::operateurs::FONCTIONS;
use calculatrice_rpn::Expression;

use super::etat::{AppCalc, Demarche, DIGITS_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1 + 2) * 3, 2 ** -2, AbS(-1.5)")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calcule();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(");
            self.bouton_insert(ui, ")", ")");
            for op in ["+", "-", "×", "÷", "%", "^"] {
                self.bouton_insert(ui, op, op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.calcule();
            }
        });

        ui.horizontal_wrapped(|ui| {
            for (f, _) in FONCTIONS {
                let texte = format!("{f}(");
                self.bouton_insert(ui, f, &texte);
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "**", "**");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("EXACT :");
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("Décimal (tronqué) :");
        if self.decimal_dispo {
            Self::champ_monospace(ui, "decimal_out", &self.decimal, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            // les espaces sont insignifiants pour le tokenizer : insertion brute
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Backspace : retire d’un coup un nom de fonction suivi de "(", sinon un caractère.
    pub(crate) fn backspace_entree(&mut self) {
        let fin = self.entree.trim_end().len();
        self.entree.truncate(fin);

        // table triée du plus long au plus court : "arcsin(" avant "sin("
        for (f, _) in FONCTIONS {
            let motif = format!("{f}(");
            if self.entree.to_ascii_lowercase().ends_with(&motif) {
                let n = self.entree.len() - motif.len();
                self.entree.truncate(n);
                return;
            }
        }
        self.entree.pop();
    }

    /// Évalue l’entrée via le noyau, puis dépose EXACT / décimal / démarche dans l’état.
    pub(crate) fn calcule(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide", None);
            return;
        }

        let expr = match Expression::new(s) {
            Ok(e) => e,
            Err(e) => {
                log::warn!("construction refusée pour {s:?}: {e}");
                self.set_erreur(e.to_string(), None);
                return;
            }
        };

        let demarche = Demarche {
            jetons: format_tokens(expr.infix_tokens()),
            rpn: format_tokens(expr.postfix_tokens()),
        };

        match expr.result() {
            Ok(r) => {
                log::info!("{s:?} = {r}");
                let exact = format_rationnel(&r);
                let decimal = format_decimal(&r, self.digits);
                self.set_resultats(exact, decimal, demarche);
            }
            Err(e) => {
                log::warn!("évaluation échouée pour {s:?}: {e}");
                self.set_erreur(e.to_string(), Some(demarche));
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
