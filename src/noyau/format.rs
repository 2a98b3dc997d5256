// src/noyau/format.rs
//
// Affichage infixe canonique, SANS parenthèses.
//
// CONTRAT : l'expression doit être en forme normale (distrib::deplier).
// Sans Somme sous Produit, l'absence de parenthèses est non ambiguë ;
// sur un arbre non déplié la chaîne produite violerait la priorité des
// opérateurs — c'est une violation de contrat de l'appelant, pas une
// erreur d'exécution.

use super::expr::Expr;

/// Séparateur de produit « étoile » (sortie machine).
pub const SEP_ETOILE: &str = "*";

/// Séparateur de produit « point médian » (sortie lisible).
pub const SEP_POINT: &str = "⋅";

/// Rend `e` en infixe plat. `sep` est le glyphe de produit
/// (seul point de configuration du rendu) ; les sommes utilisent " + ".
pub fn format_expr(e: &Expr, sep: &str) -> String {
    use Expr::*;

    match e {
        Ent(v) => v.to_string(),
        Produit(facteurs) => joindre(facteurs, sep, sep),
        Somme(termes) => joindre(termes, " + ", sep),
    }
}

fn joindre(enfants: &[Expr], lien: &str, sep: &str) -> String {
    let morceaux: Vec<String> = enfants.iter().map(|t| format_expr(t, sep)).collect();
    morceaux.join(lien)
}
