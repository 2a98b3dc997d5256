// src/noyau/expr.rs
//
// Arbre d'expression exact (entiers à précision arbitraire).
// - Ent     : littéral entier (BigInt)
// - Somme   : somme n-aire (≥ 2 termes, ordre préservé)
// - Produit : produit n-aire (≥ 2 facteurs, ordre préservé)
//
// IMPORTANT :
// - Construction NON évaluante : Somme(a, b) reste un arbre tant que
//   eval::evaluer n'est pas appelé (aucun calcul implicite à la construction).
// - Immutabilité : le dépliage (distrib::deplier) reconstruit toujours des
//   nœuds neufs, jamais de mutation en place.
// - L'ordre des enfants n'a pas d'effet sur la valeur, mais il EST conservé :
//   c'est lui qui rend l'affichage déterministe.

use num_bigint::BigInt;

use std::fmt;

/// Arité minimale d'une Somme / d'un Produit.
pub const ARITE_MIN: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Ent(BigInt),
    Somme(Vec<Expr>),
    Produit(Vec<Expr>),
}

/// Erreur d'arité : Somme/Produit exigent au moins 2 enfants.
///
/// C'est une erreur de programmation chez le constructeur de l'arbre
/// (pas une erreur utilisateur) : elle remonte toujours à l'appelant,
/// jamais avalée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AriteInvalide {
    /// "Somme" ou "Produit".
    pub genre: &'static str,
    /// Nombre d'enfants effectivement fournis.
    pub recus: usize,
}

impl fmt::Display for AriteInvalide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arité invalide : {} exige au moins {ARITE_MIN} enfants (reçu : {})",
            self.genre, self.recus
        )
    }
}

impl std::error::Error for AriteInvalide {}

impl Expr {
    /// Littéral entier.
    pub fn ent<V: Into<BigInt>>(v: V) -> Expr {
        Expr::Ent(v.into())
    }

    /// Somme n-aire (≥ 2 termes), non évaluée.
    pub fn somme(termes: Vec<Expr>) -> Result<Expr, AriteInvalide> {
        if termes.len() < ARITE_MIN {
            return Err(AriteInvalide {
                genre: "Somme",
                recus: termes.len(),
            });
        }
        Ok(Expr::Somme(termes))
    }

    /// Produit n-aire (≥ 2 facteurs), non évalué.
    pub fn produit(facteurs: Vec<Expr>) -> Result<Expr, AriteInvalide> {
        if facteurs.len() < ARITE_MIN {
            return Err(AriteInvalide {
                genre: "Produit",
                recus: facteurs.len(),
            });
        }
        Ok(Expr::Produit(facteurs))
    }
}

/* ------------------------ Affichage debug (pas “joli” final) ------------------------ */

// Parenthèses systématiques : cet affichage accepte des arbres NON dépliés,
// contrairement à format::format_expr (qui exige la forme normale).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Ent(v) => write!(f, "{v}"),
            Somme(termes) => ecrire_liste(f, termes, "+"),
            Produit(facteurs) => ecrire_liste(f, facteurs, "*"),
        }
    }
}

fn ecrire_liste(f: &mut fmt::Formatter<'_>, enfants: &[Expr], op: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, e) in enfants.iter().enumerate() {
        if i > 0 {
            write!(f, "{op}")?;
        }
        write!(f, "{e}")?;
    }
    write!(f, ")")
}
