// src/noyau/eval.rs
//
// Évaluation exacte : pli structurel Ent/Somme/Produit -> BigInt.
//
// Précision arbitraire obligatoire : les récurrences dépliées atteignent
// 2^k pour k dans les centaines, un entier machine déborderait.
//
// Itératif (pile explicite Entrer/Sortir) : la profondeur de l'arbre croît
// avec k_max, on ne parie pas sur la pile d'appels.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::expr::Expr;

/// Valeur exacte de `e`. Ne peut pas échouer : toute feuille est un entier
/// concret (pas de variable libre dans ce domaine).
pub fn evaluer(e: &Expr) -> BigInt {
    use Expr::*;

    enum Marque<'a> {
        Entrer(&'a Expr),
        Sortir(&'a Expr),
    }

    let mut pile: Vec<Marque<'_>> = Vec::with_capacity(64);
    let mut res: Vec<BigInt> = Vec::with_capacity(64);

    pile.push(Marque::Entrer(e));

    while let Some(m) = pile.pop() {
        match m {
            Marque::Entrer(x) => {
                pile.push(Marque::Sortir(x));
                if let Somme(enfants) | Produit(enfants) = x {
                    // .rev() : les enfants ressortent dans l'ordre du nœud
                    for t in enfants.iter().rev() {
                        pile.push(Marque::Entrer(t));
                    }
                }
            }

            Marque::Sortir(x) => match x {
                Ent(v) => res.push(v.clone()),

                Somme(enfants) => {
                    let debut = res.len().saturating_sub(enfants.len());
                    let mut acc = BigInt::zero();
                    for v in res.drain(debut..) {
                        acc += v;
                    }
                    res.push(acc);
                }

                Produit(enfants) => {
                    let debut = res.len().saturating_sub(enfants.len());
                    let mut acc = BigInt::one();
                    for v in res.drain(debut..) {
                        acc *= v;
                    }
                    res.push(acc);
                }
            },
        }
    }

    // Arbre bien formé => exactement une valeur restante.
    res.pop().unwrap_or_else(BigInt::zero)
}
