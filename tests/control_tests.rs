//! Integration tests for the control loop

mod common;
use common::*;

use lib::clock::StepClock;
use lib::config::LCD_GEOMETRY;
use lib::control::Mode;
use lib::display::Display;
use lib::error::Error;
use lib::sampler::Sampler;
use lib::state::Shared;
use lib::stop::StopToggle;

fn shared(pot1: u16, pot2: u16, step: u16) -> Shared {
    let shared = Shared::new();
    shared.pot1.write(pot1);
    shared.pot2.write(pot2);
    shared.step.write(step);
    shared
}

#[test]
fn display_begins_with_sixteen_by_two() {
    let controller = controller();
    assert_eq!(controller.display().lcd().geometry(), Some(LCD_GEOMETRY));
    assert_eq!(controller.display().lcd().clears, 1);
}

#[test]
fn renders_max_speed_and_delay() {
    let shared = shared(250, 20, 0);
    let mut controller = controller();

    controller.poll(&shared).unwrap();

    assert_eq!(line(&controller, 0), "Max Speed=250   ");
    assert_eq!(line(&controller, 1), "Delay=200ms     ");
}

#[test]
fn shorter_value_erases_longer_one() {
    let shared = shared(1020, 1020, 0);
    let mut controller = controller();
    controller.poll(&shared).unwrap();
    assert_eq!(line(&controller, 0), "Max Speed=1020  ");
    assert_eq!(line(&controller, 1), "Delay=10200ms   ");

    shared.pot1.write(4);
    shared.pot2.write(8);
    controller.poll(&shared).unwrap();
    assert_eq!(line(&controller, 0), "Max Speed=4     ");
    assert_eq!(line(&controller, 1), "Delay=80ms      ");
}

#[test]
fn writes_computed_duty() {
    let shared = shared(100, 50, 25);
    let mut controller = controller();

    controller.poll(&shared).unwrap();

    assert_eq!(pwm_duty(&controller), 50);
    assert!(controller.output().pin().enabled);
}

#[test]
fn duty_above_full_scale_saturates() {
    let shared = shared(1020, 1020, 1019);
    let mut controller = controller();

    controller.poll(&shared).unwrap();

    assert_eq!(pwm_duty(&controller), 1000);
}

#[test]
fn every_running_iteration_starts_a_conversion() {
    let shared = shared(0, 10, 0);
    let mut controller = controller();

    for _ in 0..3 {
        controller.poll(&shared).unwrap();
    }

    assert_eq!(controller.trigger().starts, 3);
}

#[test]
fn stop_freezes_and_resume_restores_step() {
    let shared = shared(500, 40, 7);
    let mut controller = controller();
    let mut clock = StepClock::new();
    let mut toggle = StopToggle::new();

    controller.poll(&shared).unwrap();
    assert!(pwm_duty(&controller) > 0);

    toggle.on_edge(&shared);
    controller.poll(&shared).unwrap();
    assert_eq!(controller.mode(), Mode::Stopped { saved_step: 7 });
    assert_eq!(shared.step.read(), 0);
    assert_eq!(pwm_duty(&controller), 0);
    assert!(controller.indicator().on);
    assert_eq!(line(&controller, 0), "STOPPED         ");
    assert_eq!(line(&controller, 1), "                ");

    // Ticks keep coming while stopped
    for _ in 0..5 {
        clock.tick(&shared);
        controller.poll(&shared).unwrap();
        assert_eq!(shared.step.read(), 0);
        assert_eq!(pwm_duty(&controller), 0);
    }
    let starts = controller.trigger().starts;

    toggle.on_edge(&shared);
    controller.poll(&shared).unwrap();
    assert_eq!(controller.mode(), Mode::Running);
    assert_eq!(shared.step.read(), 7);
    assert!(!controller.indicator().on);
    assert_eq!(controller.trigger().starts, starts);

    controller.poll(&shared).unwrap();
    assert_eq!(line(&controller, 0), "Max Speed=500   ");
    assert_eq!(controller.trigger().starts, starts + 1);
}

#[test]
fn stop_clears_display_once() {
    let shared = shared(500, 40, 3);
    let mut controller = controller();
    let clears = controller.display().lcd().clears;

    shared.stop.write(true);
    for _ in 0..4 {
        controller.poll(&shared).unwrap();
    }

    assert_eq!(controller.display().lcd().clears, clears + 1);
}

#[test]
fn zero_pot2_divides_by_one() {
    let shared = shared(500, 0, 0);
    let mut controller = controller();

    controller.poll(&shared).unwrap();
    controller.poll(&shared).unwrap();

    assert_eq!(controller.zero_divisor_faults(), 2);
    assert_eq!(pwm_duty(&controller), 0);
    assert_eq!(line(&controller, 1), "Delay=0ms       ");
}

#[test]
fn lcd_error_is_propagated() {
    let mut lcd = MockLcd::new();
    lcd.fail = true;

    let result = Display::new(lcd, LCD_GEOMETRY);

    assert!(matches!(result, Err(Error::Lcd(MockLcdError))));
}

#[test]
fn sampled_pots_drive_the_loop() {
    let shared = Shared::new();
    let mut adc = MockAdc::new(&[62, 5]);
    let mut sampler = Sampler::new();
    let mut clock = StepClock::new();
    let mut controller = controller();

    sampler.on_conversion_complete(&mut adc, &shared);
    sampler.on_conversion_complete(&mut adc, &shared);
    for _ in 0..15 {
        clock.tick(&shared);
    }
    controller.poll(&shared).unwrap();

    assert_eq!(shared.snapshot().pot1, 248);
    assert_eq!(shared.snapshot().pot2, 20);
    assert_eq!(shared.step.read(), 15);
    assert_eq!(line(&controller, 0), "Max Speed=248   ");
    assert_eq!(line(&controller, 1), "Delay=200ms     ");
    // (248 * 100) / 20 = 1240, (15 * 1240) / 100 = 186
    assert_eq!(pwm_duty(&controller), 186);
}
