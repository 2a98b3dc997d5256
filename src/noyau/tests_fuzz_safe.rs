//! Tests fuzz safe : propriétés algébriques + déterminisme + limites contrôlées.
//!
//! But : marteler le dépliage sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur et largeur bornées
//! - budget temps global
//! - invariants clés sur CHAQUE arbre généré :
//!     * forme normale après dépliage (aucune Somme sous un Produit)
//!     * idempotence structurelle (deplier ∘ deplier = deplier)
//!     * préservation de la valeur exacte
//!     * rendu sans la moindre parenthèse

use std::time::{Duration, Instant};

use super::distrib::{deplier, est_forme_normale};
use super::eval::evaluer;
use super::expr::Expr;
use super::format::{format_expr, SEP_ETOILE};

use num_bigint::BigInt;
use num_traits::One;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'arbres (bornée) ------------------------ */

fn gen_ent(rng: &mut Rng) -> Expr {
    // petits entiers, négatifs et zéro inclus
    let v = rng.pick(19) as i64 - 9;
    Expr::ent(v)
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Expr {
    if depth == 0 {
        return gen_ent(rng);
    }

    match rng.pick(5) {
        0 => gen_ent(rng),
        1 | 2 => {
            let n = 2 + rng.pick(3) as usize;
            let termes = (0..n).map(|_| gen_expr(rng, depth - 1)).collect();
            Expr::Somme(termes)
        }
        _ => {
            let n = 2 + rng.pick(3) as usize;
            let facteurs = (0..n).map(|_| gen_expr(rng, depth - 1)).collect();
            Expr::Produit(facteurs)
        }
    }
}

/// Majorant du nombre de termes additifs après dépliage (saturant).
/// Sert à écarter les arbres adversariaux (produit de sommes larges :
/// le dépliage MULTIPLIE les comptes de termes).
fn borne_termes(e: &Expr) -> u64 {
    use Expr::*;
    match e {
        Ent(_) => 1,
        Somme(termes) => termes.iter().fold(0u64, |acc, t| acc.saturating_add(borne_termes(t))),
        Produit(facteurs) => facteurs
            .iter()
            .fold(1u64, |acc, f| acc.saturating_mul(borne_termes(f))),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_proprietes_algebriques() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut verifies = 0usize;
    let mut ecartes = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let e = gen_expr(&mut rng, 5);
        // Plafond bas : 200 itérations doivent tenir dans le budget global,
        // pas seulement chaque arbre pris isolément.
        if borne_termes(&e) > 2_000 {
            ecartes += 1;
            continue;
        }
        verifies += 1;

        let valeur_avant = evaluer(&e);

        let d = deplier(e);

        // Forme normale : aucune Somme sous un Produit
        assert!(est_forme_normale(&d), "pas en forme normale: {d}");

        // Idempotence structurelle
        assert_eq!(deplier(d.clone()), d, "dépliage non idempotent");

        // Valeur exacte préservée
        assert_eq!(evaluer(&d), valeur_avant, "valeur modifiée: {d}");

        // Rendu plat, jamais de parenthèse
        let rendu = format_expr(&d, SEP_ETOILE);
        assert!(
            !rendu.contains('(') && !rendu.contains(')'),
            "parenthèse dans le rendu: {rendu}"
        );
    }

    // Le fuzz doit réellement balayer : l'écrémage ne doit pas tout manger.
    assert!(verifies >= 50, "trop peu d'arbres vérifiés: {verifies}");
    assert_eq!(verifies + ecartes, 200);
}

#[test]
fn fuzz_safe_determinisme() {
    // Même seed => mêmes arbres => mêmes rendus (aucune source d'aléa cachée)
    let passe = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..40)
            .map(|_| gen_expr(&mut rng, 4))
            .filter(|e| borne_termes(e) <= 2_000)
            .map(|e| format_expr(&deplier(e), SEP_ETOILE))
            .collect()
    };

    assert_eq!(passe(0xBADC0DE_u64), passe(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_produit_profond_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Produit binaire imbriqué à gauche, profondeur 400 : l'évaluation
    // (pile explicite) ne doit pas dépendre de la pile d'appels.
    let mut e = Expr::ent(1);
    for _ in 0..400 {
        e = Expr::Produit(vec![e, Expr::ent(1)]);
    }
    budget(t0, max);

    let d = deplier(e);
    assert!(est_forme_normale(&d));
    assert_eq!(evaluer(&d), BigInt::one());
}

#[test]
fn fuzz_safe_somme_large_exacte() {
    // 1000 termes « 3 » : somme n-aire large, valeur exacte 3000.
    let termes: Vec<Expr> = (0..1000).map(|_| Expr::ent(3)).collect();
    let e = Expr::somme(termes).unwrap_or_else(|er| panic!("somme: {er}"));

    let d = deplier(e);
    assert_eq!(evaluer(&d), BigInt::from(3000));
}
