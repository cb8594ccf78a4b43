//! Host preview of the 64x32 panel
//!
//! Runs the real IST3931 driver against an emulated controller on a fake I2C
//! bus, draws a demo scene and prints what the glass would show.
//!
//! Set `RUST_LOG=debug` to see every flushed row.

use std::time::Duration;

use anyhow::anyhow;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

use dotmatrix::ist3931::{Cmd, Config, Flag, Ist3931};
use dotmatrix::{buffer_len, Display, FontSize, Framebuffer, Mode, PanelVariant};

const WIDTH: usize = 64;
const HEIGHT: usize = 32;

/// Writes log records to stderr
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() -> anyhow::Result<()> {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(log::LevelFilter::Info);
    log::set_logger(&LOGGER).map_err(|e| anyhow!("{e}"))?;
    log::set_max_level(level);
    Ok(())
}

/// Sleeps on the host
struct HostDelay;

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

/// IST3931 display RAM behind a fake I2C bus
///
/// Understands just enough of the command set to follow AY/AX addressing and
/// skip the parameters of multi-byte commands.
struct PanelEmulator {
    ram: [[u8; Flag::RAM_COLUMNS]; Flag::RAM_ROWS],
    ay: usize,
    ax: usize,
    pending_params: usize,
    on: bool,
}

impl PanelEmulator {
    fn new() -> Self {
        PanelEmulator {
            ram: [[0; Flag::RAM_COLUMNS]; Flag::RAM_ROWS],
            ay: 0,
            ax: 0,
            pending_params: 0,
            on: false,
        }
    }

    fn command(&mut self, byte: u8) {
        if self.pending_params > 0 {
            self.pending_params -= 1;
            return;
        }
        match byte {
            Cmd::CT => self.pending_params = 1,
            Cmd::FRAME_CONTROL => self.pending_params = 2,
            b if b & 0xFE == Cmd::DISPLAY_ON_OFF => self.on = b & Flag::DISPLAY_ON != 0,
            0x00..=0x0F => self.ay = (self.ay & 0x70) | usize::from(byte & Flag::NIBBLE_MASK),
            0x10..=0x17 => self.ay = (self.ay & 0x0F) | usize::from(byte & 0x07) << 4,
            0xC0..=0xDF => self.ax = usize::from(byte & 0x1F),
            _ => {}
        }
    }

    fn data(&mut self, byte: u8) {
        if let Some(cell) = self.ram.get_mut(self.ay).and_then(|row| row.get_mut(self.ax)) {
            *cell = byte;
        }
        self.ax += 1;
    }

    /// RAM bytes shown on logical row `y`
    fn visible_row(&self, variant: PanelVariant, y: usize) -> &[u8] {
        let physical = usize::from(variant.to_physical(y as u16));
        &self.ram[physical][..WIDTH / 8]
    }
}

impl ErrorType for PanelEmulator {
    type Error = ErrorKind;
}

impl I2c for PanelEmulator {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != Flag::I2C_ADDRESS {
            return Err(ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ));
        }
        for operation in operations {
            let Operation::Write(bytes) = operation else {
                return Err(ErrorKind::Other);
            };
            for pair in bytes.chunks_exact(2) {
                match pair[0] {
                    Flag::CONTROL_COMMAND => self.command(pair[1]),
                    Flag::CONTROL_DATA => self.data(pair[1]),
                    _ => return Err(ErrorKind::Other),
                }
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::laowang();
    let driver = Ist3931::new(PanelEmulator::new(), HostDelay, config)
        .map_err(|e| anyhow!("controller init failed: {e:?}"))?;
    let raster = Framebuffer::<{ buffer_len(WIDTH, HEIGHT) }>::new(WIDTH, HEIGHT)
        .map_err(|e| anyhow!("{e}"))?;
    let mut display =
        Display::new(driver, raster, config.variant).map_err(|e| anyhow!("{e}"))?;

    display.clear(false).map_err(|e| anyhow!("{e}"))?;

    let drawn = display
        .draw_string(0, 0, "ABCab12", FontSize::Standard.font(), Mode::Overwrite, 1)
        .map_err(|e| anyhow!("{e}"))?;
    log::info!("Drew {} characters in 8x16", drawn);

    display
        .draw_string(0, 20, "AB2", FontSize::Small.font(), Mode::Overwrite, 1)
        .map_err(|e| anyhow!("{e}"))?;

    Rectangle::new(Point::new(38, 17), Size::new(26, 15))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display.raster_mut())?;
    display
        .draw_char(48, 20, '*', FontSize::Small.font(), Mode::Invert)
        .map_err(|e| anyhow!("{e}"))?;
    display.flush().map_err(|e| anyhow!("{e}"))?;

    let (driver, raster) = display.release();
    let (panel, _) = driver.release();
    if !panel.on {
        log::warn!("Panel output is off");
    }

    let mut mismatched = 0;
    for y in 0..HEIGHT {
        let shown = panel.visible_row(config.variant, y);
        if raster.row(y) != Some(shown) {
            mismatched += 1;
        }
        let line: String = shown
            .iter()
            .flat_map(|byte| (0..8).map(move |bit| byte & (0x80 >> bit) != 0))
            .map(|on| if on { '#' } else { '.' })
            .collect();
        println!("{line}");
    }

    if mismatched > 0 {
        return Err(anyhow!("{mismatched} rows on the panel differ from the raster"));
    }
    log::info!("Panel matches the raster");
    Ok(())
}
