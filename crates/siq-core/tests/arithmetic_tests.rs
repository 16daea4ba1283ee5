use approx::assert_relative_eq;
use siq_core::dimension::{Dimension, ProductOf, QuotientOf};
use siq_core::units::{
    Acceleration, Force, Frequency, Length, Mass, Meter, MeterPerSecond, Pressure, Second, Time,
    Velocity,
};
use siq_core::{ComparisonMode, Exponents, Quantity};
use std::time::Duration;

#[test]
fn test_product_then_quotient_is_identity() {
    type Left = MeterPerSecond;
    type Right = Second;
    assert_eq!(
        <QuotientOf<ProductOf<Left, Right>, Right> as Dimension>::EXPONENTS,
        Left::EXPONENTS
    );
}

#[test]
fn test_length_over_time() {
    assert_eq!(
        <QuotientOf<Meter, Second> as Dimension>::EXPONENTS,
        Exponents::new([1, 0, -1, 0, 0, 0, 0])
    );
    let velocity: Velocity = Length::<f64>::new(100.0) / Time::<f64>::new(9.58);
    assert!(velocity > Velocity::<f64>::new(10.0));
}

#[test]
fn test_newtons_second_law() {
    let mass = Mass::<f64>::new(2.0);
    let acceleration: Acceleration = Velocity::<f64>::new(9.0) / Time::<f64>::new(3.0);
    let force: Force = mass * acceleration;
    assert_eq!(force, Force::<f64>::new(6.0));

    let pressure: Pressure = force / (Length::<f64>::new(2.0) * Length::<f64>::new(1.5));
    assert_eq!(pressure.value(), 2.0);
}

#[test]
fn test_add_sub_and_scaling() {
    let a = Length::<f64>::new(0.75);
    let b = Length::<f64>::new(0.5);
    assert_eq!((a + b) - b, a);
    assert_eq!(3.0 * a, a * 3.0);
    assert_eq!(-a + a, Length::<f64>::default());
}

#[test]
fn test_reciprocal() {
    let period = Time::<f64>::new(0.02);
    let frequency: Frequency = 1.0 / period;
    assert_relative_eq!(frequency.value(), 50.0);
}

#[test]
fn test_mixed_precision() {
    let length = Length::<f32>::new(1.5);
    let time = Time::<f64>::new(0.5);
    let velocity: Velocity<f64> = length / time;
    assert_eq!(velocity.value(), 3.0);

    let single: Velocity<f32> = Length::<f32>::new(1.0) / Time::<f32>::new(4.0);
    assert_eq!(single.value(), 0.25f32);
}

#[test]
fn test_durations() {
    let time = Time::<f64>::new(2.0);
    let duration = Duration::try_from(time).unwrap();
    assert_eq!(duration, Duration::from_secs(2));
    assert_eq!(Time::<f64>::from(duration), time);

    let distance: Length = Velocity::<f64>::new(1.5) * Duration::from_millis(2000);
    assert_eq!(distance.value(), 3.0);

    let later = Duration::from_secs(1) + time;
    assert_eq!(later.value(), 3.0);
}

#[test]
fn test_approximate_comparison() {
    let a = Quantity::<Meter>::new(1.0);
    let b = Quantity::<Meter>::new(1.0 + 1e-9);
    assert_ne!(a, b);
    assert!(a.approx_eq(&b, 1e-6, ComparisonMode::AbsoluteError));
    assert!(a.approx_eq(&b, 1e-6, ComparisonMode::RelativeError));
    assert_relative_eq!(a, b, epsilon = 1e-6);
}
