use vc_core::BatteryMeter;

use crate::battery::Battery;
use crate::error::BatteryError;

#[test]
fn starts_fully_charged() {
    let battery = Battery::new(20);
    assert_eq!(battery.battery_state(), 20);
    assert!(battery.is_full());
}

#[test]
fn discharge_subtracts_one_step() {
    let mut battery = Battery::new(20);
    battery.discharge().unwrap();
    assert_eq!(battery.battery_state(), 19);
}

#[test]
fn discharge_below_zero_is_an_error() {
    let mut battery = Battery::new(1);
    battery.discharge().unwrap();
    assert!(battery.is_exhausted());
    let err = battery.discharge().unwrap_err();
    assert!(matches!(err, BatteryError::Empty));
}

#[test]
fn charge_adds_one_twentieth_of_capacity_per_call() {
    let mut battery = Battery::new(20);
    battery.discharge().unwrap();
    assert_eq!(battery.battery_state(), 19);
    battery.charge();
    assert_eq!(battery.battery_state(), 20);
}

#[test]
fn charge_clamps_at_capacity() {
    let mut battery = Battery::new(20);
    for _ in 0..30 {
        battery.charge();
    }
    assert_eq!(battery.battery_state(), 20);
    assert!(battery.is_full());
}

#[test]
fn level_stays_within_zero_and_capacity() {
    let mut battery = Battery::new(5);
    for _ in 0..5 {
        battery.discharge().unwrap();
    }
    assert_eq!(battery.battery_state(), 0);
    assert!(battery.discharge().is_err());
}
