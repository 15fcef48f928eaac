//! Walk through the braid pipeline on Fibonacci and Ising anyons.
//!
//! Shows:
//! 1. Fusion rules and basis growth
//! 2. Single-qudit generators and the braid relation
//! 3. A weave on the two-generator example table
//! 4. A weave uncoupled onto a two-qudit register, scored against CNOT

use anyon_braid::prelude::*;
use num_complex::Complex64;

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        Anyon Braids: Weaves to Gate Matrices         ║");
    println!("║        Fibonacci and Ising fusion spaces             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    demo_fusion_spaces();
    demo_generators();
    demo_example_table();
    if let Err(e) = demo_two_qudit_gate() {
        eprintln!("two-qudit demo failed: {}", e);
    }
}

fn demo_fusion_spaces() {
    println!("═══ 1. Fusion Rules and Bases ═══");
    println!();

    println!("Fibonacci: τ × τ → {:?}", fusion_channels::<Fibonacci>(1, 1).collect::<Vec<_>>());
    println!("Ising:     σ × σ → {:?}", fusion_channels::<Ising>(1, 1).collect::<Vec<_>>());
    println!("           σ × ψ → {:?}", fusion_channels::<Ising>(1, 2).collect::<Vec<_>>());
    println!();

    println!("  anyons | Fibonacci | Ising");
    for n in 2..=10 {
        println!(
            "  {:>6} | {:>9} | {:>5}",
            n,
            find_basis::<Fibonacci>(n).len(),
            find_basis::<Ising>(n).len()
        );
    }
    println!();
}

fn max_deviation(a: &CMatrix, b: &CMatrix) -> f64 {
    (a - b).iter().map(|z| z.norm()).fold(0.0, f64::max)
}

fn demo_generators() {
    println!("═══ 2. Braiding Generators ═══");
    println!();

    let Ok((s1, basis)) = braiding_generator::<Fibonacci>(1, 4) else { return };
    let Ok((s2, _)) = braiding_generator::<Fibonacci>(2, 4) else { return };
    println!("Fibonacci, 4 anyons: {} basis states", basis.len());
    for state in &basis {
        println!("  {:?}", state.as_slice());
    }
    println!("σ₁ unitary: {}", is_unitary(&s1, 1e-10));
    println!("σ₂ unitary: {}", is_unitary(&s2, 1e-10));
    let relation = max_deviation(&(&s1 * &s2 * &s1), &(&s2 * &s1 * &s2));
    println!("|σ₁σ₂σ₁ − σ₂σ₁σ₂| = {:.2e}", relation);

    let b = Ising::b_matrix(1, 1, 1, 1);
    println!();
    println!("Ising local braid B(σ, σ, σ; σ):");
    for r in [0, 2] {
        println!("  [{:.5}, {:.5}]", b[(r, 0)], b[(r, 2)]);
    }
    println!();
}

fn demo_example_table() {
    println!("═══ 3. Weave on the Example Table ═══");
    println!();

    let table = GeneratorTable::fibonacci_example();
    let Ok(described) = describe(&[2, 2], 1, 1, 1) else { return };
    println!("describe([2, 2], s0 = 1, init = 1, final = 1):");
    println!("  sigma       = {:?}", described.word.sigma());
    println!("  power       = {:?}", described.word.power());
    println!("  strand_rank = {:?}", described.strand_rank);

    if let Ok(m) = get_matrix(&described.word, &table) {
        println!("  leakage     = {:.2e}", leakage_error(&m).unwrap_or(f64::NAN));
        let round_trip = described.word.concat(&time_mirror(&described.word));
        if let Ok(id) = get_matrix(&round_trip, &table) {
            println!("  |W·W⁻¹ − I| = {:.2e}", max_deviation(&id, &CMatrix::identity(2, 2)));
        }
    }
    println!();
}

fn cnot() -> CMatrix {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    CMatrix::from_row_slice(
        4,
        4,
        &[
            one, zero, zero, zero,
            zero, one, zero, zero,
            zero, zero, zero, one,
            zero, zero, one, zero,
        ],
    )
}

fn demo_two_qudit_gate() -> anyon_braid::Result<()> {
    println!("═══ 4. Two-Qudit Register ═══");
    println!();

    let config = TableConfig {
        model: ModelKind::Fibonacci,
        register: Register::Qudits { qudits: 2, qudit_len: 2 },
    };
    let built = build_table(&config)?;
    println!(
        "{} anyons in 2 qudits: {} states, {} generators",
        config.anyons(),
        built.table.dim(),
        built.table.len()
    );

    let computational = [1, 2, 3, 4];
    let target = cnot();
    for (weave, final_strand, rank_increment) in [(vec![2, 2, -2], 1, 0), (vec![2, 2, -2], 1, 1), (vec![2, 2, -2, 2], 3, 0)] {
        let word = uncouple(&weave, 1, 1, final_strand, rank_increment, 2, false)?;
        let gate = get_matrix(&word, &built.table)?;
        let sub = extract(&gate, &computational)?;
        println!(
            "weave {:?} (+{}): {} steps, leakage {:.4}, distance to CNOT {:.4}",
            weave,
            rank_increment,
            word.len(),
            leakage_error(&sub)?,
            error_distance(&sub, &target)?
        );
    }
    println!();
    Ok(())
}
