// src/main.rs
//
// Déplieur de récurrences — point d'entrée CLI
// ---------------------------------------------
// Pour chaque étape k = 1..=k_max :
//   1. le constructeur de suite fournit l'arbre NON déplié de M(k)
//   2. le noyau le déplie (loi distributive, forme normale)
//   3. une ligne « M(k) = <forme dépliée> = <valeur exacte> » est émise
//
// Les arguments invalides (non entiers, ≤ 0) sont rejetés par clap avec
// un message d'usage et un code de sortie non nul, sans rien déplier.

use clap::{Parser, ValueEnum};

mod noyau;
mod suites;

use noyau::{deplier, est_forme_normale, evaluer, format_expr, AriteInvalide, SEP_ETOILE, SEP_POINT};
use suites::{suite_hanoi, suite_iwahswap};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Suite {
    /// Tour de Hanoï : M(k) = 2*M(k-1) + 1
    Hanoi,
    /// Iwahswap : deux branches selon la parité de n-k
    Iwahswap,
}

#[derive(Parser, Debug)]
#[command(version, about = "Forme close dépliée (somme de produits) d'une récurrence de comptage")]
struct Cli {
    /// Récurrence à déplier
    #[arg(value_enum)]
    suite: Suite,

    /// Paramètre n de la récurrence (ignoré par hanoi)
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    n: i64,

    /// Nombre d'étapes à afficher (k = 1..=k_max)
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    k_max: u64,

    /// Produit rendu avec le point médian « ⋅ » au lieu de « * »
    #[arg(long)]
    point: bool,
}

fn lancer(cli: &Cli) -> Result<(), AriteInvalide> {
    let k_max = cli.k_max as usize;
    let suite = match cli.suite {
        Suite::Hanoi => suite_hanoi(k_max)?,
        Suite::Iwahswap => suite_iwahswap(cli.n, k_max)?,
    };

    let sep = if cli.point { SEP_POINT } else { SEP_ETOILE };

    for (k, etape) in suite.into_iter().enumerate() {
        let depliee = deplier(etape);
        debug_assert!(est_forme_normale(&depliee));
        println!(
            "M({}) = {} = {}",
            k + 1,
            format_expr(&depliee, sep),
            evaluer(&depliee)
        );
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = lancer(&cli) {
        eprintln!("erreur: {e}");
        std::process::exit(1);
    }
}
