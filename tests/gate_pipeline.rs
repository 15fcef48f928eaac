//! End-to-end: configuration → generator table → weave → matrix → metrics.

use anyon_braid::prelude::*;
use num_complex::Complex64;
use serde_json::json;

fn max_deviation(a: &CMatrix, b: &CMatrix) -> f64 {
    (a - b).iter().map(|z| z.norm()).fold(0.0, f64::max)
}

fn two_qudit_fibonacci() -> BuiltTable {
    build_table(&TableConfig {
        model: ModelKind::Fibonacci,
        register: Register::Qudits { qudits: 2, qudit_len: 2 },
    })
    .unwrap()
}

#[test]
fn test_weave_round_trip_is_identity() {
    let built = two_qudit_fibonacci();
    let dim = built.table.dim();
    assert_eq!(dim, 13);

    let word = uncouple(&[2, 2, -2], 1, 1, 1, 0, 2, false).unwrap();
    assert!(word.max_index().unwrap() < 6);
    let gate = get_matrix(&word, &built.table).unwrap();
    assert!(is_unitary(&gate, 1e-8));

    let round_trip = word.concat(&time_mirror(&word));
    let identity = get_matrix(&round_trip, &built.table).unwrap();
    let dev = max_deviation(&identity, &CMatrix::identity(dim, dim));
    assert!(dev < 1e-8, "seq + mirror deviates from identity by {}", dev);
}

#[test]
fn test_inverted_uncouple_undoes_the_weave() {
    let built = two_qudit_fibonacci();
    let forward = uncouple(&[2, 2, -2], 1, 1, 1, 1, 2, false).unwrap();
    let backward = time_mirror(&forward);
    let product = get_matrix(&forward.concat(&backward), &built.table).unwrap();
    assert!(error_distance(&product, &CMatrix::identity(13, 13)).unwrap() < 1e-6);
}

#[test]
fn test_computational_subspace_metrics() {
    let built = two_qudit_fibonacci();
    let word = uncouple(&[2, 2, -2, 2], 1, 1, 3, 0, 2, false).unwrap();
    let gate = get_matrix(&word, &built.table).unwrap();

    let computational = [1, 2, 3, 4];
    let sub = extract(&gate, &computational).unwrap();
    let leakage = leakage_error(&sub).unwrap();
    assert!((-1e-9..=1.0).contains(&leakage), "leakage {}", leakage);
    assert!(leakage_error(&gate).unwrap().abs() < 1e-8);
    assert!(error_distance(&gate, &gate).unwrap() < 1e-6);

    let example = GeneratorTable::fibonacci_example();
    let word = BraidWord::new(vec![1, 2, 1, 1], vec![1, -1, 1, -1]).unwrap();
    let u = get_matrix(&word, &example).unwrap();
    let rephased = u.map(|z| z * Complex64::i());
    assert!(error_distance(&u, &rephased).unwrap() < 1e-5);
}

#[test]
fn test_table_satisfies_braid_relations() {
    let config = TableConfig {
        model: ModelKind::Ising,
        register: Register::Chain { anyons: 6 },
    };
    let built = build_table(&config).unwrap();
    for i in 1..config.generator_count() {
        let left = get_matrix(&BraidWord::new(vec![i, i + 1, i], vec![1, 1, 1]).unwrap(), &built.table).unwrap();
        let right = get_matrix(&BraidWord::new(vec![i + 1, i, i + 1], vec![1, 1, 1]).unwrap(), &built.table).unwrap();
        assert!(max_deviation(&left, &right) < 1e-8, "braid relation fails at sigma_{}", i);
    }

    let word = uncouple_all(&[1, -2], 1, 1, 1, 0, false).unwrap();
    assert_eq!(word.max_index(), Some(5));
    let round_trip = word.concat(&word.time_mirror());
    let product = get_matrix(&round_trip, &built.table).unwrap();
    assert!(max_deviation(&product, &CMatrix::identity(8, 8)) < 1e-8);
}

#[test]
fn test_word_outside_table_is_rejected() {
    let built = two_qudit_fibonacci();
    let word = uncouple(&[2, 2], 1, 1, 1, 3, 2, false).unwrap();
    assert_eq!(word.max_index(), Some(6));
    assert_eq!(
        get_matrix(&word, &built.table),
        Err(BraidError::MissingGenerator { index: 6, power: 1 })
    );
}

#[test]
fn test_serialisation_by_value() {
    let word = uncouple(&[2, 2], 1, 1, 2, 0, 2, false).unwrap();
    let value = serde_json::to_value(&word).unwrap();
    assert_eq!(
        value,
        json!({"sigma": [2, 1, 1, 2, 2, 1, 3, 2, 2, 3], "power": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1]})
    );
    let back: BraidWord = serde_json::from_value(value).unwrap();
    assert_eq!(back, word);

    let mismatched = json!({"sigma": [1, 2], "power": [1]});
    assert!(serde_json::from_value::<BraidWord>(mismatched).is_err());

    let config = TableConfig {
        model: ModelKind::Fibonacci,
        register: Register::Qudits { qudits: 2, qudit_len: 2 },
    };
    let value = serde_json::to_value(config).unwrap();
    assert_eq!(
        value,
        json!({"model": "fibonacci", "register": {"qudits": {"qudits": 2, "qudit_len": 2}}})
    );
    let back: TableConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_basis_travels_with_the_table() {
    let built = two_qudit_fibonacci();
    let json = serde_json::to_string(&built.basis).unwrap();
    let basis: BasisStates = serde_json::from_str(&json).unwrap();
    assert_eq!(basis, built.basis);
    match basis {
        BasisStates::Qudits(states) => {
            assert!(states.iter().all(check_register_state::<Fibonacci>));
            assert_eq!(states[1].roots.as_slice(), &[0]);
            assert_eq!(states[9].roots.as_slice(), &[1]);
        }
        BasisStates::Chain(_) => panic!("expected a register basis"),
    }
}
