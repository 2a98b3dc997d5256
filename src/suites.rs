// src/suites.rs
//
// Constructeurs de récurrences : une Expr NON dépliée par étape k.
//
// Chaque étape k embarque l'arbre NON déplié de l'étape k-1 (clone) :
// l'arbre grossit structurellement avec k, et le noyau déplie chaque
// étape indépendamment. Aucun partage du travail de dépliage entre
// étapes (recalcul fidèle, voir DESIGN.md).

use crate::noyau::{AriteInvalide, Expr};

/// Hanoï : M(1) = 1 ; M(k) = 2*M(k-1) + 1.
///
/// Construit Somme[Produit[2, prec], 1] sur l'arbre précédent tel quel.
pub fn suite_hanoi(k_max: usize) -> Result<Vec<Expr>, AriteInvalide> {
    let mut prec = Expr::ent(1);
    let mut suite = vec![prec.clone()];

    for _k in 2..=k_max {
        let etape = Expr::somme(vec![
            Expr::produit(vec![Expr::ent(2), prec.clone()])?,
            Expr::ent(1),
        ])?;
        suite.push(etape.clone());
        prec = etape;
    }

    Ok(suite)
}

/// Iwahswap : M(1) = n-1 ; pour k ≥ 2, avec nk = n-k :
/// - nk impair : M(k) = nk*(M(k-1) + 1)
/// - nk pair   : M(k) = nk*(M(k-1) + 1) + M(k-1)
pub fn suite_iwahswap(n: i64, k_max: usize) -> Result<Vec<Expr>, AriteInvalide> {
    let mut prec = Expr::ent(n - 1);
    let mut suite = vec![prec.clone()];

    for k in 2..=k_max {
        let nk = n - k as i64;
        let noyau_etape = Expr::produit(vec![
            Expr::ent(nk),
            Expr::somme(vec![prec.clone(), Expr::ent(1)])?,
        ])?;

        // rem_euclid : nk négatif impair compte comme impair
        let etape = if nk.rem_euclid(2) == 1 {
            noyau_etape
        } else {
            Expr::somme(vec![noyau_etape, prec.clone()])?
        };

        suite.push(etape.clone());
        prec = etape;
    }

    Ok(suite)
}

/* ------------------------ Tests ------------------------ */
