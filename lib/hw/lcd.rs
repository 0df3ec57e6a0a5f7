use core::convert::Infallible;
use display_interface_parallel_gpio::WriteOnlyDataCommand;
use embedded_graphics::drawable::Drawable;
use embedded_graphics::fonts::{Font12x16, Text};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::Point;
use embedded_graphics::style::TextStyleBuilder;
use embedded_graphics::DrawTarget;
use ili9341::{DisplaySize320x480, Error, Ili9341, Orientation};
use stm32g0xx_hal::hal::blocking::delay::DelayMs;
use stm32g0xx_hal::hal::digital::v2::OutputPin;

use crate::config::Geometry;
use crate::hw::Lcd;

#[derive(Debug)]
pub struct IliError(pub Error<Infallible>);

/// ILI9341 panel driven as a character display, one 12x16 glyph per cell.
pub struct IliLcd<I, R> {
    ili: Ili9341<I, R>,
    geometry: Geometry,
    column: u8,
    row: u8,
}

impl<I, R> IliLcd<I, R>
where
    I: WriteOnlyDataCommand,
    R: OutputPin<Error = Infallible>,
{
    pub fn new<D>(interface: I, reset: R, delay: &mut D) -> Result<Self, IliError>
    where
        D: DelayMs<u16>,
    {
        let ili = Ili9341::new(
            interface,
            reset,
            delay,
            Orientation::Landscape,
            DisplaySize320x480,
        )
        .map_err(IliError)?;

        Ok(IliLcd {
            ili,
            geometry: crate::config::LCD_GEOMETRY,
            column: 0,
            row: 0,
        })
    }

    fn cell_origin(&self) -> Point {
        Point::new(
            Cell::LEFT + self.column as i32 * Cell::WIDTH,
            Cell::TOP + self.row as i32 * Cell::HEIGHT,
        )
    }
}

impl<I, R> Lcd for IliLcd<I, R>
where
    I: WriteOnlyDataCommand,
    R: OutputPin<Error = Infallible>,
{
    type Error = IliError;

    fn begin(&mut self, geometry: Geometry) -> Result<(), Self::Error> {
        self.geometry = geometry;
        self.clear()
    }

    fn home(&mut self) -> Result<(), Self::Error> {
        self.set_cursor(0, 0)
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error> {
        self.column = column.min(self.geometry.columns);
        self.row = row.min(self.geometry.rows.saturating_sub(1));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.ili.clear(Color::BACKGROUND).map_err(IliError)?;
        self.home()
    }

    fn print(&mut self, text: &str) -> Result<(), Self::Error> {
        let style = TextStyleBuilder::new(Font12x16)
            .text_color(Color::TEXT)
            .background_color(Color::BACKGROUND)
            .build();
        let mut utf8 = [0u8; 4];
        for c in text.chars() {
            // Characters past the last column are dropped
            if self.column >= self.geometry.columns {
                break;
            }
            let glyph = c.encode_utf8(&mut utf8);
            Text::new(glyph, self.cell_origin())
                .into_styled(style)
                .draw(&mut self.ili)
                .map_err(IliError)?;
            self.column += 1;
        }
        Ok(())
    }
}

struct Cell;

impl Cell {
    const WIDTH: i32 = 12;
    const HEIGHT: i32 = 16;
    const LEFT: i32 = 10;
    const TOP: i32 = 10;
}

struct Color;

impl Color {
    const BACKGROUND: Rgb565 = Rgb565::BLACK;
    const TEXT: Rgb565 = Rgb565::WHITE;
}
