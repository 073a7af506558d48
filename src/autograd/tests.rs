//! Tests for the scalar autograd engine.
//!
//! Covers each op's forward value and local gradient, accumulation on fan-out,
//! traversal order, repeated backward passes, and IEEE special-value propagation.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::autograd::{AutogradError, Exp, Log, Op, Pow, ScalarNode, ValueRef};

#[test]
fn scalar_add_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a + &b;
    assert_eq!(c.data(), 5.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
}

#[test]
fn scalar_mul_backward() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a * &b;
    assert_eq!(c.data(), 6.0);
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
    assert_eq!(c.grad(), 1.0);
}

#[test]
fn scalar_pow_backward() {
    let a = ValueRef::new(2.0);
    let b = a.pow(3.0).unwrap();
    assert_relative_eq!(b.data(), 8.0);
    b.backward();
    // d/dx x^3 = 3x^2 = 12 at x=2
    assert_relative_eq!(a.grad(), 12.0);
}

#[test]
fn scalar_pow_trait_matches_method() {
    let a = ValueRef::new(3.0);
    let b = Pow::pow(&a, 2.0).unwrap();
    assert_relative_eq!(b.data(), 9.0);
    assert_eq!(b.op(), Op::Pow(2.0));
}

#[test]
fn scalar_pow_rejects_non_finite_exponent() {
    let a = ValueRef::new(2.0);
    assert!(matches!(
        a.pow(f64::NAN),
        Err(AutogradError::InvalidExponent(e)) if e.is_nan()
    ));
    assert_eq!(
        a.pow(f64::INFINITY).unwrap_err(),
        AutogradError::InvalidExponent(f64::INFINITY)
    );
}

#[test]
fn scalar_relu_backward_positive() {
    let a = ValueRef::new(2.0);
    let b = a.relu();
    assert_eq!(b.data(), 2.0);
    b.backward();
    assert_eq!(a.grad(), 1.0);
}

#[test]
fn scalar_relu_backward_negative() {
    let a = ValueRef::new(-1.0);
    let b = a.relu();
    assert_eq!(b.data(), 0.0);
    b.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn scalar_relu_at_zero_passes_no_gradient() {
    let a = ValueRef::new(0.0);
    let b = a.relu();
    b.backward();
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn scalar_tanh_backward() {
    let a = ValueRef::new(0.5);
    let b = a.tanh();
    assert_relative_eq!(b.data(), 0.5f64.tanh());
    b.backward();
    assert_relative_eq!(a.grad(), 1.0 - 0.5f64.tanh().powi(2));
}

#[test]
fn scalar_log_backward() {
    let a = ValueRef::new(std::f64::consts::E);
    let b = (&a).log();
    assert_abs_diff_eq!(b.data(), 1.0, epsilon = 1e-12);
    b.backward();
    // d/dx ln(x) = 1/x = 1/e at x=e
    assert_relative_eq!(a.grad(), 1.0 / std::f64::consts::E);
}

#[test]
fn scalar_exp_backward() {
    let a = ValueRef::new(1.0);
    let b = (&a).exp();
    assert_relative_eq!(b.data(), std::f64::consts::E);
    b.backward();
    assert_relative_eq!(a.grad(), std::f64::consts::E);
}

#[test]
fn scalar_fan_out_accumulates() {
    // Use a value twice: d = a + a. dd/da = 2.
    let a = ValueRef::new(3.0);
    let d = &a + &a;
    assert_eq!(d.data(), 6.0);
    d.backward();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn scalar_square_by_self_multiplication() {
    let a = ValueRef::new(-4.0);
    let b = &a * &a;
    b.backward();
    assert_eq!(a.grad(), -8.0);
}

#[test]
fn scalar_diamond_applies_multivariate_chain_rule() {
    // d = (2a) * (3a) = 6a^2, dd/da = 12a
    let a = ValueRef::new(1.5);
    let b = &a * 2.0;
    let c = &a * 3.0;
    let d = &b * &c;
    d.backward();
    assert_relative_eq!(d.data(), 13.5);
    assert_relative_eq!(b.grad(), 4.5);
    assert_relative_eq!(c.grad(), 3.0);
    assert_relative_eq!(a.grad(), 18.0);
}

#[test]
fn scalar_neg_backward() {
    let a = ValueRef::new(3.0);
    let b = -&a;
    assert_eq!(b.data(), -3.0);
    b.backward();
    assert_eq!(a.grad(), -1.0);
}

#[test]
fn scalar_sub_backward() {
    let a = ValueRef::new(5.0);
    let b = ValueRef::new(2.0);
    let c = &a - &b;
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
}

#[test]
fn scalar_div_backward() {
    let a = ValueRef::new(6.0);
    let b = ValueRef::new(2.0);
    let c = &a / &b;
    assert_eq!(c.data(), 3.0);
    c.backward();
    assert_eq!(a.grad(), 0.5);
    assert_eq!(b.grad(), -1.5); // d/db (a/b) = -a/b^2 = -6/4
}

#[test]
fn scalar_derived_ops_build_on_primitives() {
    let a = ValueRef::new(1.0);
    let b = ValueRef::new(2.0);
    assert_eq!((-&a).op(), Op::Mul);
    assert_eq!((&a - &b).op(), Op::Add);
    let q = &a / &b;
    assert_eq!(q.op(), Op::Mul);
    assert_eq!(q.prev()[1].op(), Op::Pow(-1.0));
}

#[test]
fn scalar_mixed_f64_operands() {
    let a = ValueRef::new(4.0);
    assert_eq!((&a + 1.0).data(), 5.0);
    assert_eq!((2.0 * &a).data(), 8.0);
    assert_eq!((10.0 - &a).data(), 6.0);
    assert_eq!((&a / 2.0).data(), 2.0);
    let loss = (a.clone() * 3.0 - 2.0) * 0.5;
    loss.backward();
    assert_relative_eq!(a.grad(), 1.5);
}

#[test]
fn scalar_sum_of_nodes() {
    let xs: Vec<ValueRef> = [1.0, 2.0, 3.0].into_iter().map(ValueRef::new).collect();
    let total: ValueRef = xs.iter().sum();
    assert_eq!(total.data(), 6.0);
    total.backward();
    assert!(xs.iter().all(|x| x.grad() == 1.0));

    let empty: ValueRef = Vec::<ValueRef>::new().into_iter().sum();
    assert_eq!(empty.data(), 0.0);
    assert_eq!(empty.op(), Op::Leaf);
}

#[test]
fn scalar_chain_compound() {
    // loss = (a * b + c).relu(); a=1, b=2, c=-1 => loss = 1
    let a = ValueRef::new(1.0);
    let b = ValueRef::new(2.0);
    let c = ValueRef::new(-1.0);
    let loss = (&(&a * &b) + &c).relu();
    assert_eq!(loss.data(), 1.0);
    loss.backward();
    assert_relative_eq!(a.grad(), 2.0);
    assert_relative_eq!(b.grad(), 1.0);
    assert_relative_eq!(c.grad(), 1.0);
}

#[test]
fn scalar_gradients_match_finite_differences() {
    fn f(x: f64, y: f64) -> (ValueRef, ValueRef, ValueRef) {
        let a = ValueRef::new(x);
        let b = ValueRef::new(y);
        let c = &a * &b + a.pow(3.0).unwrap();
        let d = (&c * 2.0 + (&b + &a).relu()) / (&b + 4.0);
        let e = d.tanh() + (&a).exp() - (&b).log();
        (a, b, e)
    }

    let (x, y, h) = (0.7, 1.3, 1e-6);
    let (a, b, out) = f(x, y);
    out.backward();

    let df_dx = (f(x + h, y).2.data() - f(x - h, y).2.data()) / (2.0 * h);
    let df_dy = (f(x, y + h).2.data() - f(x, y - h).2.data()) / (2.0 * h);
    assert_abs_diff_eq!(a.grad(), df_dx, epsilon = 1e-6);
    assert_abs_diff_eq!(b.grad(), df_dy, epsilon = 1e-6);
}

#[test]
fn topological_order_puts_consumers_before_operands() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(-3.0);
    let c = &a * &b;
    let d = &c + &a;
    let e = d.relu();
    let order = e.topological_order();

    assert_eq!(order.len(), 5);
    assert!(order[0].ptr_eq(&e));
    let position = |n: &ValueRef| order.iter().position(|m| m.ptr_eq(n)).unwrap();
    for node in &order {
        for operand in node.prev() {
            assert!(position(node) < position(&operand));
        }
    }
}

#[test]
fn topological_order_visits_shared_node_once() {
    let a = ValueRef::new(1.0);
    let b = &a + &a;
    let c = &b * &b;
    let order = c.topological_order();
    assert_eq!(order.len(), 3);
}

#[test]
fn leaf_backward_seeds_only_itself() {
    let a = ValueRef::new(7.0);
    a.backward();
    assert_eq!(a.grad(), 1.0);
    assert_eq!(a.topological_order().len(), 1);
}

#[test]
fn repeated_backward_accumulates_until_zeroed() {
    let a = ValueRef::new(2.0);
    let b = ValueRef::new(3.0);
    let c = &a * &b;
    c.backward();
    c.backward();
    assert_eq!(a.grad(), 6.0);
    assert_eq!(b.grad(), 4.0);

    a.zero_grad();
    b.zero_grad();
    c.backward();
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 2.0);
}

#[test]
fn zero_grad_keeps_data() {
    let a = ValueRef::new(2.0);
    let b = &a * &ValueRef::new(3.0);
    b.backward();
    assert_eq!(a.grad(), 3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    assert_eq!(a.data(), 2.0);
}

#[test]
fn deep_chain_backward_and_drop() {
    let x = ValueRef::new(1.0);
    let mut acc = x.clone();
    for _ in 0..100_000 {
        acc = &acc + 1.0;
    }
    assert_eq!(acc.data(), 100_001.0);
    acc.backward();
    assert_eq!(x.grad(), 1.0);
    drop(acc);
    assert_eq!(x.data(), 1.0);
}

#[test]
fn division_by_zero_propagates_infinity() {
    let a = ValueRef::new(1.0);
    let b = ValueRef::new(0.0);
    let c = &a / &b;
    assert!(c.data().is_infinite());
    c.backward();
    assert!(a.grad().is_infinite());
    assert!(!b.grad().is_finite());
}

#[test]
fn fractional_power_of_negative_base_is_nan() {
    let a = ValueRef::new(-8.0);
    let b = a.pow(1.0 / 3.0).unwrap();
    assert!(b.data().is_nan());
    b.backward();
    assert!(a.grad().is_nan());
}

#[test]
fn set_data_updates_leaf_without_touching_grad() {
    let a = ValueRef::new(1.0);
    (&a * 5.0).backward();
    a.set_data(-2.0);
    assert_eq!(a.data(), -2.0);
    assert_eq!(a.grad(), 5.0);
}

#[test]
fn debug_and_display_show_value_state() {
    let a = ValueRef::new(1.5);
    let b = a.relu();
    assert_eq!(format!("{b:?}"), "Value(data=1.5, grad=0, op=ReLU)");
    assert_eq!(a.to_string(), "Value(data=1.5000, grad=0.0000)");
}
