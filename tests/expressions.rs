// Algebraic properties of lazily built sums, checked over small operand grids.

use itertools::iproduct;
use lazyplex::BinOp;
use lazyplex::Complex;
use lazyplex::ComplexLike;
use lazyplex::Operand;
use lazyplex::Sum;
use pretty_assertions::assert_eq;
use rayon::prelude::*;

const PARTS: [i64; 5] = [-7, -1, 0, 2, 13];

fn values() -> Vec<Complex<i64>> {
    iproduct!(PARTS, PARTS)
        .map(|(re, im)| Complex::new(re, im))
        .collect()
}

#[test]
fn scalar_on_the_left() {
    for (a, z) in iproduct!(PARTS, values()) {
        let e = a + &z;
        assert_eq!(e.re(), a + z.re);
        assert_eq!(e.im(), z.im);
    }
}

#[test]
fn scalar_on_the_right() {
    for (z, b) in iproduct!(values(), PARTS) {
        let e = &z + b;
        assert_eq!(e.re(), z.re + b);
        assert_eq!(e.im(), z.im);
    }
}

#[test]
fn complex_on_both_sides() {
    for (x, y) in iproduct!(values(), values()) {
        let e = &x + &y;
        assert_eq!(e.re(), x.re + y.re);
        assert_eq!(e.im(), x.im + y.im);
    }
}

#[test]
fn grouping_does_not_change_the_result() {
    let vs = values();
    for (x, y, z) in iproduct!(&vs, &vs, &vs) {
        let left = Complex::from((x + y) + z);
        let right = Complex::from(x + (y + z));
        assert_eq!(left, right);
    }
}

#[test]
fn materializing_twice_is_stable() {
    for (x, y) in iproduct!(values(), values()) {
        let once = Complex::from(&x + &y);
        let twice = Complex::from(&once + Complex::<i64>::default());
        assert_eq!(once, twice);
        assert_eq!(Complex::<i64>::from_expr(&(0_i64 + &once)), once);
    }
}

#[test]
fn materialized_value_is_detached() {
    let mut x = Complex::new(1.0_f64, 1.0);
    let y = Complex::new(2.0_f64, 2.0);
    let sum = Complex::from(&x + &y);
    x.re = 100.0;
    assert_eq!(sum, Complex::new(3.0, 3.0));
}

#[test]
fn long_chains_build_one_tree() {
    let x = Complex::new(1.5_f64, -0.5);
    let y = Complex::new(0.25, 2.0);
    let chain = 1.0_f64 + &x + &y + 3.0_f64 + &x;

    assert!(<BinOp<Sum, f64, &Complex<f64>> as Operand>::IS_EXPRESSION);
    assert_eq!(chain.re(), 1.0 + 1.5 + 0.25 + 3.0 + 1.5);
    assert_eq!(chain.im(), -0.5 + 2.0 - 0.5);
    assert_eq!(chain.to_string(), "7.25 + 1j");
}

#[test]
fn owned_operands_can_be_added_by_value() {
    let e = Complex::new(1, 2) + Complex::new(3, 4) + 5_i32;
    assert_eq!(e.eval(), Complex::new(9, 6));
    assert_eq!(e.to_string(), "9 + 6j");
}

#[test]
fn expressions_can_be_shared_by_reference() {
    let x = Complex::new(2_i32, -3);
    let y = Complex::new(-4_i32, 1);
    let base = &x + &y;
    let plus_one = &base + 1_i32;
    let doubled = &base + &base;
    assert_eq!(plus_one.eval(), Complex::new(-1, -2));
    assert_eq!(doubled.eval(), Complex::new(-4, -4));
}

#[test]
fn formatting_matches_grammar() {
    let cases = [
        (Complex::new(3_i32, 0), "3"),
        (Complex::new(3, 4), "3 + 4j"),
        (Complex::new(3, -4), "3 - 4j"),
        (Complex::new(0, 0), "0"),
        (Complex::new(-2, -9), "-2 - 9j"),
    ];
    for (z, expected) in cases {
        assert_eq!(z.to_string(), expected);
    }
}

#[test]
fn concurrent_readers_see_the_same_value() {
    let shared = Complex::new(0.5_f64, -0.25);
    let offsets: Vec<Complex<f64>> = (0..1000)
        .map(|i| Complex::new(i as f64, -(i as f64)))
        .collect();

    let sums: Vec<Complex<f64>> = offsets
        .par_iter()
        .map(|z| Complex::from(&shared + z))
        .collect();

    for (i, sum) in sums.iter().enumerate() {
        assert_eq!(*sum, Complex::new(i as f64 + 0.5, -(i as f64) - 0.25));
    }
}
