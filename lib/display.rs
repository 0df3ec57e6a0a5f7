use core::fmt::Write;
use heapless::String;

use crate::config::{Geometry, DELAY_MS_PER_STEP, PADDING};
use crate::error::{Error, Result};
use crate::hw::Lcd;

const MAX_SPEED_LABEL: &str = "Max Speed=";
const DELAY_LABEL: &str = "Delay=";
const DELAY_UNIT: &str = "ms";
const STOPPED_BANNER: &str = "STOPPED";

/// Status screen of the controller on a character LCD.
pub struct Display<LCD> {
    lcd: LCD,
}

impl<LCD, LCDER> Display<LCD>
where
    LCD: Lcd<Error = LCDER>,
{
    pub fn new(lcd: LCD, geometry: Geometry) -> Result<Self, LCDER> {
        let mut display = Display { lcd };
        display.lcd.begin(geometry).map_err(Error::Lcd)?;
        display.lcd.clear().map_err(Error::Lcd)?;
        Ok(display)
    }

    /// Renders max speed on row 0 and delay on row 1.
    pub fn status(&mut self, pot1: u16, pot2: u16) -> Result<(), LCDER> {
        self.lcd.home().map_err(Error::Lcd)?;
        self.print(MAX_SPEED_LABEL)?;
        self.print_int(pot1 as u32)?;
        self.print(PADDING)?;

        self.lcd.set_cursor(0, 1).map_err(Error::Lcd)?;
        self.print(DELAY_LABEL)?;
        self.print_int(delay_ms(pot2))?;
        self.print(DELAY_UNIT)?;
        self.print(PADDING)
    }

    pub fn stopped(&mut self) -> Result<(), LCDER> {
        self.lcd.home().map_err(Error::Lcd)?;
        self.print(STOPPED_BANNER)
    }

    pub fn clear(&mut self) -> Result<(), LCDER> {
        self.lcd.home().map_err(Error::Lcd)?;
        self.lcd.clear().map_err(Error::Lcd)
    }

    pub fn lcd(&self) -> &LCD {
        &self.lcd
    }

    fn print(&mut self, text: &str) -> Result<(), LCDER> {
        self.lcd.print(text).map_err(Error::Lcd)
    }

    fn print_int(&mut self, value: u32) -> Result<(), LCDER> {
        let mut buffer = String::<10>::new();
        write!(&mut buffer, "{}", value).map_err(|_| Error::BufferWrite)?;
        self.print(&buffer)
    }
}

pub fn delay_ms(pot2: u16) -> u32 {
    pot2 as u32 * DELAY_MS_PER_STEP as u32
}
