// src/noyau/format.rs
//
// Deux formes textuelles d’un f64 :
// - forme RÉSULTAT (écran) : contrat Double.toString, "7.0", "0.1", "1.0E7"
// - forme CANONIQUE (expression) : la plus courte qui se relit, "10", "-7", "0.05"

/// Au-delà (ou en deçà de 10^-3), l’écran passe en notation scientifique.
const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e7;
const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-3;

/// Texte du zéro affiché au démarrage et après AC.
pub const AFFICHAGE_ZERO: &str = "0";

/// Forme résultat : garde toujours une partie décimale ("7.0").
pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let txt = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return txt.to_string();
    }
    if v == 0.0 {
        let txt = if v.is_sign_negative() { "-0.0" } else { "0.0" };
        return txt.to_string();
    }

    let a = v.abs();
    if (SEUIL_SCIENTIFIQUE_BAS..SEUIL_SCIENTIFIQUE_HAUT).contains(&a) {
        return avec_decimale(format!("{v}"));
    }

    // "{:e}" donne la mantisse la plus courte : 1.5e-5, 1e7
    let sci = format!("{v:e}");
    match sci.split_once('e') {
        Some((mantisse, exposant)) => format!("{}E{exposant}", avec_decimale(mantisse.to_string())),
        None => avec_decimale(sci),
    }
}

fn avec_decimale(mut s: String) -> String {
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Forme canonique : réinjectée dans l’expression (graine, ±, %).
///
/// Jamais d’exposant ni de ".0" final ; -0 devient "0".
/// La valeur doit être finie (l’évaluateur refuse les résultats non finis).
pub fn format_canonique(v: f64) -> String {
    if v == 0.0 {
        return AFFICHAGE_ZERO.to_string();
    }
    format!("{v}")
}

/// Relit un nombre NU : signe '-' optionnel, chiffres, au plus un point.
/// Tout le reste (opérateur, parenthèse, "inf", "NaN"...) => None.
pub fn lire_canonique(s: &str) -> Option<f64> {
    let corps = s.strip_prefix('-').unwrap_or(s);

    let chiffres = corps.chars().filter(|c| c.is_ascii_digit()).count();
    let points = corps.chars().filter(|&c| c == '.').count();
    if chiffres == 0 || points > 1 || chiffres + points != corps.chars().count() {
        return None;
    }

    s.parse::<f64>().ok()
}
