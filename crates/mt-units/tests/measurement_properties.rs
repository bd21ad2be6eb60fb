use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use mt_units::*;

fn hash_of<T: Hash>(t: &T) -> u64 {
    let mut h = DefaultHasher::new();
    t.hash(&mut h);
    h.finish()
}

#[test]
fn commensurability() {
    assert_eq!(1000.0_f64.meters(), 1.0_f64.kilometers());
    assert_eq!(1024.0_f64.bytes(), 1.0_f64.kibibytes());
    assert_eq!(1000.0_f64.bytes(), 1.0_f64.kilobytes());
    assert!(1.0_f64.mebibytes() > 1.0_f64.megabytes());
}

#[test]
fn equal_measurements_hash_alike() {
    let a = 1000.0_f64.meters();
    let b = 1.0_f64.kilometers();
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = 60.0_f64.minutes();
    let d = 1.0_f64.hours();
    assert_eq!(hash_of(&c), hash_of(&d));
}

#[test]
fn epsilon_equal_values_can_hash_apart() {
    let inches = 12.0_f64.inches();
    let foot = 1.0_f64.feet();
    assert_eq!(inches, foot);
    assert_ne!(inches.base_value().to_bits(), foot.base_value().to_bits());
    assert_ne!(hash_of(&inches), hash_of(&foot));
}

#[test]
fn affine_correctness() {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-4;
    assert!(close(0.0_f64.celsius().converted(TemperatureUnit::Fahrenheit).value(), 32.0));
    assert!(close(100.0_f64.celsius().converted(TemperatureUnit::Kelvin).value(), 373.15));
    let zero = 0.0_f64.kelvin();
    assert!(close(zero.converted(TemperatureUnit::Celsius).value(), -273.15));
    assert!(close(zero.converted(TemperatureUnit::Fahrenheit).value(), -459.67));
}

#[test]
fn left_hand_unit_wins() {
    let sum = 1.0_f64.kilometers() + 500.0_f64.meters();
    assert_eq!(sum.value(), 1.5);
    assert_eq!(sum.unit(), LengthUnit::Kilometers);

    let flipped = 500.0_f64.meters() + 1.0_f64.kilometers();
    assert_eq!(flipped.value(), 1500.0);
    assert_eq!(flipped.unit(), LengthUnit::Meters);
    assert_eq!(sum, flipped);

    let diff = 2.0_f64.hours() - 30.0_f64.minutes();
    assert_eq!(diff.value(), 1.5);
    assert_eq!(diff.unit(), TimeUnit::Hours);
}

#[test]
fn scalar_multiplication_commutes() {
    let a = 5.0 * 10.0_f64.meters();
    let b = 10.0_f64.meters() * 5.0;
    assert_eq!(a.value(), b.value());
    assert_eq!(a.unit(), b.unit());
}

#[test]
fn division_by_zero_is_unguarded() {
    let d = 1.0_f64.gigabytes() / 0.0;
    assert!(d.value().is_infinite());
    assert_eq!(d.unit(), DataUnit::Gigabytes);

    let checked = 1.0_f64.gigabytes().checked_div(0.0);
    assert_eq!(checked, Err(UnitsError::DivisionByZero));
}

#[test]
fn display_exactness() {
    assert_eq!(512.0_f64.megabytes().to_string(), "512.0 MB");
    assert_eq!(5.5_f64.kilometers().to_string(), "5.5 km");
    assert_eq!(1.0_f64.kibibytes().to_string(), "1.0 KiB");
    assert_eq!(
        Length::new(constants::LIGHT_YEAR, LengthUnit::Meters).to_string(),
        "9460730472580800.0 m"
    );
    assert_eq!(
        Length::new(2.5e16, LengthUnit::Meters).to_string(),
        "2.5e+16 m"
    );
    assert_eq!(
        10_i32.petabytes().in_base().to_string(),
        "10000000000000000.0 B"
    );
}

#[test]
fn equality_tolerance_is_absolute() {
    // a few metres apart at light-year scale: never equal
    let a = Length::new(constants::LIGHT_YEAR, LengthUnit::Meters);
    let b = Length::new(constants::LIGHT_YEAR + 4.0, LengthUnit::Meters);
    assert_ne!(a.base_value(), b.base_value());
    assert_ne!(a, b);
    assert!(a.approx_eq(&b, Tolerances::default()));

    // sub-epsilon nanoseconds collapse
    let x = 0.01_f64.nanoseconds();
    let y = 0.05_f64.nanoseconds();
    assert_eq!(x, y);
}

#[test]
fn checked_constructors() {
    assert!(DataSize::try_new_non_negative(4.0, DataUnit::Gibibytes).is_ok());
    assert_eq!(
        DataSize::try_new_non_negative(-1.0, DataUnit::Bytes),
        Err(UnitsError::NegativeValue(-1.0))
    );
    assert!(Temperature::try_new_non_negative(-40.0, TemperatureUnit::Celsius).is_ok());
    assert!(Temperature::try_new_non_negative(-1.0, TemperatureUnit::Rankine).is_err());
    assert!(matches!(
        Length::try_new(f64::NAN, LengthUnit::Meters),
        Err(UnitsError::InvalidValue(_))
    ));
}

#[test]
fn measurements_cross_threads() {
    let distances = [1.0_f64.kilometers(), 250.0_f64.miles(), 3.0_f64.nautical_miles()];
    let handles: Vec<_> = distances
        .into_iter()
        .map(|d| thread::spawn(move || d.converted(LengthUnit::Meters)))
        .collect();
    let meters: Vec<Length> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(meters[0].value(), 1000.0);
    assert_eq!(meters[2].value(), 5556.0);
    assert_eq!(meters[1], 250.0_f64.miles());
}

#[test]
fn chained_conversions() {
    let miles = 5000.0_f64
        .meters()
        .converted(LengthUnit::Kilometers)
        .converted(LengthUnit::Miles);
    assert!((miles.value() - 3.106_855_961).abs() < 1e-6);
    assert_eq!(miles, 5.0_f64.kilometers());
}

#[test]
fn in_base_unit() {
    let t = 2.0_f64.weeks().in_base();
    assert_eq!(t.unit(), TimeUnit::Seconds);
    assert_eq!(t.value(), 1_209_600.0);
    assert_eq!(Mass::base(3.0).unit(), MassUnit::Kilograms);
}
