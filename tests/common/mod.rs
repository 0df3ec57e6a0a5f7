//! Mock collaborators shared by the integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::PwmPin;
use lib::config::{Geometry, LCD_GEOMETRY};
use lib::control::Controller;
use lib::display::Display;
use lib::hw::{AnalogInput, ConversionTrigger, Lcd};
use lib::sampler::Channel;

// ============================================================================
// Mock LCD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockLcdError;

/// Character LCD rendering into an in-memory grid.
pub struct MockLcd {
    geometry: Option<Geometry>,
    cells: Vec<Vec<char>>,
    column: usize,
    row: usize,
    pub clears: usize,
    pub fail: bool,
}

impl MockLcd {
    pub fn new() -> Self {
        MockLcd {
            geometry: None,
            cells: vec![vec![' '; 16]; 2],
            column: 0,
            row: 0,
            clears: 0,
            fail: false,
        }
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    pub fn line(&self, row: usize) -> String {
        self.cells[row].iter().collect()
    }

    fn check(&self) -> Result<(), MockLcdError> {
        if self.fail {
            Err(MockLcdError)
        } else {
            Ok(())
        }
    }
}

impl Lcd for MockLcd {
    type Error = MockLcdError;

    fn begin(&mut self, geometry: Geometry) -> Result<(), Self::Error> {
        self.check()?;
        self.geometry = Some(geometry);
        self.cells = vec![vec![' '; geometry.columns as usize]; geometry.rows as usize];
        Ok(())
    }

    fn home(&mut self) -> Result<(), Self::Error> {
        self.set_cursor(0, 0)
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error> {
        self.check()?;
        self.column = column as usize;
        self.row = row as usize;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.check()?;
        for row in self.cells.iter_mut() {
            row.iter_mut().for_each(|c| *c = ' ');
        }
        self.column = 0;
        self.row = 0;
        self.clears += 1;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        self.check()?;
        for c in text.chars() {
            if let Some(cell) = self.cells[self.row].get_mut(self.column) {
                *cell = c;
            }
            self.column += 1;
        }
        Ok(())
    }
}

// ============================================================================
// Mock PWM, LED and ADC
// ============================================================================

pub struct MockPwm {
    pub duty: u16,
    pub max: u16,
    pub enabled: bool,
}

impl MockPwm {
    pub fn with_max(max: u16) -> Self {
        MockPwm {
            duty: 0xffff,
            max,
            enabled: false,
        }
    }
}

impl PwmPin for MockPwm {
    type Duty = u16;

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn get_duty(&self) -> u16 {
        self.duty
    }

    fn get_max_duty(&self) -> u16 {
        self.max
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
    }
}

#[derive(Default)]
pub struct MockLed {
    pub on: bool,
}

impl OutputPin for MockLed {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.on = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.on = true;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTrigger {
    pub starts: usize,
}

impl ConversionTrigger for MockTrigger {
    fn start_conversion(&mut self) {
        self.starts += 1;
    }
}

/// Converter returning queued 8-bit results.
pub struct MockAdc {
    pub results: Vec<u8>,
    pub selected: Vec<Channel>,
}

impl MockAdc {
    pub fn new(results: &[u8]) -> Self {
        MockAdc {
            results: results.iter().rev().copied().collect(),
            selected: Vec::new(),
        }
    }
}

impl AnalogInput for MockAdc {
    fn read_result(&mut self) -> u8 {
        self.results.pop().expect("no conversion result queued")
    }

    fn select_channel(&mut self, channel: Channel) {
        self.selected.push(channel);
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestController = Controller<MockLcd, MockLed, MockPwm, MockTrigger>;

/// Controller on mocks, PWM max duty equal to the full scale of 1000.
pub fn controller() -> TestController {
    let display = Display::new(MockLcd::new(), LCD_GEOMETRY).unwrap();
    Controller::new(
        display,
        MockLed::default(),
        MockPwm::with_max(1000),
        MockTrigger::default(),
    )
}

pub fn line(controller: &TestController, row: usize) -> String {
    controller.display().lcd().line(row)
}

pub fn pwm_duty(controller: &TestController) -> u16 {
    controller.output().pin().duty
}
