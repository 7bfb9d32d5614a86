use num_complex::Complex64 as C64;

use ketlab::{bases, gates, ops::kron, types::{QOp, QState}};

const TOL: f64 = 1e-10;

#[test]
fn hadamard_then_cnot_yields_bell_state() {
    let q1 = QState::try_new(bases::KET_ZERO.clone(), false).unwrap();
    let q2 = QState::try_new(bases::KET_ZERO.clone(), false).unwrap();

    let h = QOp::try_new_unitary(gates::H.clone()).unwrap();
    let q1 = h.apply(&q1).unwrap();

    let joint = q1.tensor(&q2);
    assert_eq!(joint.len(), 4);

    let cnot = QOp::try_new_unitary(gates::CNOT.clone()).unwrap();
    let bell = cnot.apply(&joint).unwrap();

    let s = 1.0_f64 / 2.0_f64.sqrt();
    let expected = [s, 0.0, 0.0, s];
    for (z, want) in bell.data.iter().zip(expected) {
        assert!((z.re - want).abs() < TOL && z.im.abs() < TOL, "got {z}, want {want}");
    }
}

#[test]
fn cnot_truth_table() {
    let zero = &*bases::KET_ZERO;
    let one = &*bases::KET_ONE;
    // (input, expected) over the computational two-qubit basis
    let cases = [
        (kron(zero, zero), kron(zero, zero)), // |00⟩ → |00⟩
        (kron(zero, one), kron(zero, one)),   // |01⟩ → |01⟩
        (kron(one, zero), kron(one, one)),    // |10⟩ → |11⟩
        (kron(one, one), kron(one, zero)),    // |11⟩ → |10⟩
    ];
    for (input, expected) in cases {
        let out = &*gates::CNOT * &input;
        assert_eq!(out, expected);
    }
}

#[test]
fn tensor_of_unit_states_is_unit() {
    let plus = QState::try_new(bases::KET_PLUS.clone(), false).unwrap();
    let i = QState::try_new(bases::KET_I.clone(), false).unwrap();
    let joint = plus.tensor(&i);
    let norm_sqr = joint.data.iter().map(|z| z.norm_sqr()).sum::<f64>();
    assert!((norm_sqr - 1.0).abs() < TOL);

    // still a valid QState under the strict constructor
    assert!(QState::try_new(joint.data, false).is_ok());
}

#[test]
fn x_flips_computational_basis() {
    let out = &*gates::X * &*bases::KET_ZERO;
    assert_eq!(out[0], C64::new(0.0, 0.0));
    assert_eq!(out[1], C64::new(1.0, 0.0));
}
