//! Noyau de dépliage distributif
//!
//! Organisation interne :
//! - expr.rs    : arbre exact (Ent / Somme / Produit) + erreurs d'arité
//! - distrib.rs : loi distributive -> forme normale « somme de produits »
//! - format.rs  : affichage infixe sans parenthèses (forme normale requise)
//! - eval.rs    : valeur exacte (BigInt, pile explicite)
//!
//! Les trois opérations (deplier / format_expr / evaluer) sont pures :
//! arbres immuables, aucun état partagé, aucune E/S.

pub mod distrib;
pub mod eval;
pub mod expr;
pub mod format;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use distrib::{deplier, est_forme_normale};
pub use eval::evaluer;
pub use expr::{AriteInvalide, Expr};
pub use format::{format_expr, SEP_ETOILE, SEP_POINT};
