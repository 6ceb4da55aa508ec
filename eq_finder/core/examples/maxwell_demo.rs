//! Walk through one search by hand
//!
//! Run with: cargo run --example maxwell_demo

use eq_finder_core::search::{evaluate, is_dimensionless, net_units, EquationSpace, HitPolicy};
use eq_finder_core::*;

fn main() {
    println!("=== Equation Finder Demo ===\n");

    let catalog = ConstantCatalog::new(vec![
        Constant::new("p", 8.854e-12, [-3, -1, 4, 2]).with_description("Permittivity of free space"),
        Constant::new("u", 1.2566e-6, [1, 1, -2, -2]).with_description("Permeability of free space"),
        Constant::new("c", 2.998e8, [1, 0, -1, 0]).with_description("Speed of light"),
    ])
    .expect("valid catalog");

    let config = SearchConfig { max_exponent: 2, range: 1.01, workers: 4, ..Default::default() };
    print!("{}", report::parameter_table(&catalog, &config));

    // 1. Index space
    println!("\n1. Index space:");
    let space = EquationSpace::new(catalog.len(), &config).expect("space fits in u64");
    println!("   Equations: {}", space.num_equations());
    println!("   First: {:?}", space.vector_at(0));
    println!("   Last:  {:?}", space.vector_at(space.num_equations() - 1));

    // 2. Unit filter and magnitude for two candidates
    println!("\n2. Candidates:");
    let policy = HitPolicy::from_config(&config);
    for exponents in [[1i64, 1, 1], [1, 1, 2]] {
        let ok = is_dimensionless(catalog.as_slice(), &exponents);
        println!("   {:?}: net units {:?}, dimensionless {}", exponents, net_units(catalog.as_slice(), &exponents), ok);
        if ok {
            let magnitude = evaluate(catalog.as_slice(), &exponents);
            println!("   magnitude {}, outcome {:?}", magnitude, policy.judge(magnitude));
        }
    }

    // 3. Partitions
    println!("\n3. Partitions:");
    let session = SearchSession::new(&catalog, config).expect("valid session");
    for part in session.partitions() {
        println!("   worker {}: [{}, {})", part.worker, part.start, part.stop);
    }

    // 4. Full run
    println!("\n4. Hits:");
    let (hits, summary) = session.collect().expect("search ran");
    for hit in &hits {
        println!("{}\n", hit);
    }
    println!("{}", summary);
}
