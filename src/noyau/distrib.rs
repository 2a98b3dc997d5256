// src/noyau/distrib.rs
//
// Dépliage distributif : a*(b+c) => a*b + a*c, appliqué récursivement
// jusqu'à la forme normale « somme de produits » : aucun Produit n'a de
// Somme comme enfant direct.
//
// Philosophie NON simplifiante : on distribue, c'est tout.
// - pas de regroupement de termes semblables (2*3 + 2*3 reste tel quel)
// - les sommes imbriquées sous une Somme restent imbriquées
// - les littéraux ne sont jamais recombinés
//
// Terminaison : chaque appel fait strictement décroître soit le nombre de
// paires « Somme sous Produit », soit la taille du sous-arbre visité.
// Une seule passe descendante suffit, pas de point fixe.

use super::expr::Expr;

/// Déplie `e` en forme normale. Pure : entrée consommée, nœuds neufs en sortie.
pub fn deplier(e: Expr) -> Expr {
    use Expr::*;

    match e {
        // Feuille : rien à distribuer
        Ent(_) => e,

        // Chaque terme se déplie indépendamment ; on n'aplatit PAS les
        // sommes imbriquées ici (le rendu les affiche déjà à plat).
        Somme(termes) => Somme(termes.into_iter().map(deplier).collect()),

        // Produit n-aire : pli gauche en paires,
        // Produit(t1,…,tn) ≡ Produit(Produit(t1,…,t(n-1)), tn).
        Produit(mut facteurs) => {
            // Produit sans enfant : ne sort pas des constructeurs contrôlés
            // (arité ≥ 2). Construit à la main, il ressort tel quel — le
            // dépliage ne fabrique jamais de nœud pour une forme hors contrat.
            if facteurs.is_empty() {
                return Produit(facteurs);
            }
            let premier = facteurs.remove(0);
            facteurs.into_iter().fold(premier, deplier_paire)
        }
    }
}

/// Déplie un produit binaire. Priorité au facteur droit (ordre de
/// distribution déterministe, donc rendu déterministe).
fn deplier_paire(gauche: Expr, droite: Expr) -> Expr {
    use Expr::*;

    // gauche * (u1 + … + un) => gauche*u1 + … + gauche*un
    if let Somme(termes) = droite {
        return Somme(
            termes
                .into_iter()
                .map(|t| deplier(Produit(vec![gauche.clone(), t])))
                .collect(),
        );
    }

    // (s1 + … + sm) * droite => s1*droite + … + sm*droite
    if let Somme(termes) = gauche {
        return Somme(
            termes
                .into_iter()
                .map(|t| deplier(Produit(vec![t, droite.clone()])))
                .collect(),
        );
    }

    // Aucun des deux facteurs n'est une Somme en surface, mais un Produit
    // imbriqué peut en cacher une (arbres construits par récurrence) :
    // on déplie d'abord, et on redistribue si une Somme est remontée.
    let g = deplier(gauche);
    let d = deplier(droite);
    if matches!(g, Somme(_)) || matches!(d, Somme(_)) {
        return deplier_paire(g, d);
    }
    Produit(vec![g, d])
}

/// Vrai si aucun Produit de `e` n'a de Somme comme enfant direct.
///
/// C'est le contrat d'entrée de format::format_expr (rendu sans parenthèses).
pub fn est_forme_normale(e: &Expr) -> bool {
    use Expr::*;

    match e {
        Ent(_) => true,
        Somme(termes) => termes.iter().all(est_forme_normale),
        Produit(facteurs) => facteurs
            .iter()
            .all(|f| !matches!(f, Somme(_)) && est_forme_normale(f)),
    }
}
