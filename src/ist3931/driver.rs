//! IST3931 Driver Implementation
//!
//! Brings the controller up from a [`Config`] and then acts as the
//! [`Transport`] the raster core pushes rows through.
//!
//! ## Init sequence
//!
//! The order and delays follow the vendor bring-up code for the 64x32
//! module:
//!
//! 1. COM pad map through the extended command set
//! 1. duty
//! 1. power, bias, contrast, frame rate
//! 1. driver display control (scan directions, all-on, reverse)
//! 1. display on
//!
//! ## Addressing
//!
//! Data writes set AY to the physical row plus `y_offset` and AX to the byte
//! column plus `x_offset`. Anything that does not fit the AY/AX fields is
//! refused with [`DisplayError::OutOfBoundsError`] before touching the bus.

pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::ist3931::interface::I2cInterface;
use crate::ist3931::{cmd::Cmd, config::Config, flag::Flag};
use crate::transport::{RamAddress, Transport};

/// IST3931 dot-matrix LCD driver
///
/// ## Type Parameters
///
/// - `I2C` - I2C bus the controller sits on
/// - `DELAY` - Delay provider for the init timing
pub struct Ist3931<I2C, DELAY> {
    /// The display interface
    interface: I2cInterface<I2C>,
    delay: DELAY,
    config: Config,
}

impl<I2C, DELAY> Ist3931<I2C, DELAY>
where
    I2C: I2c,
    DELAY: DelayNs,
{
    /// Create and initialize the display driver
    pub fn new(i2c: I2C, delay: DELAY, config: Config) -> Result<Self, DisplayError> {
        let interface = I2cInterface::new(i2c, Flag::I2C_ADDRESS);
        let mut ist3931 = Ist3931 {
            interface,
            delay,
            config,
        };
        ist3931.init()?;
        Ok(ist3931)
    }

    /// Run the full init sequence again
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::info!(
            "Initializing IST3931 {}x{} panel ({:?})",
            self.config.width,
            self.config.height,
            self.config.variant
        );

        self.set_com_pad_map()?;
        self.delay.delay_ms(Flag::INIT_STEP_DELAY_MS);

        let duty = self.config.duty;
        log::debug!("Duty {}", duty);
        self.interface.cmd(&[
            Cmd::SET_DUTY_LSB | (duty & Flag::NIBBLE_MASK),
            Cmd::SET_DUTY_MSB | (duty >> 4),
        ])?;
        self.delay.delay_ms(Flag::INIT_STEP_DELAY_MS);

        let power = Cmd::POWER_CONTROL | u8::from(self.config.vc) | u8::from(self.config.vf) << 1;
        self.interface.cmd(&[power])?;
        self.interface
            .cmd(&[Cmd::BIAS | (self.config.bias & Flag::BIAS_MASK)])?;
        self.interface.cmd(&[Cmd::CT, self.config.ct])?;

        let [fr_lsb, fr_msb] = self.config.fr.to_le_bytes();
        self.interface.cmd(&[Cmd::FRAME_CONTROL, fr_lsb, fr_msb])?;

        self.driver_display_control()?;
        self.set_display_on(true)?;
        self.delay.delay_ms(Flag::DISPLAY_ON_DELAY_MS);

        log::info!("IST3931 ready, contrast {}", self.config.ct);
        Ok(())
    }

    /// Change the contrast
    pub fn set_contrast(&mut self, ct: u8) -> Result<(), DisplayError> {
        log::info!("Setting contrast to {}", ct);
        self.interface.cmd(&[Cmd::CT, ct])?;
        self.config.ct = ct;
        Ok(())
    }

    /// Turn the panel output on or off; display RAM is kept
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        let state = if on { Flag::DISPLAY_ON } else { Flag::DISPLAY_OFF };
        self.interface.cmd(&[Cmd::DISPLAY_ON_OFF | state])
    }

    /// Show set RAM bits as off and clear bits as on
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.config.rev = inverted;
        self.driver_display_control()
    }

    /// Configuration in effect
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take the bus and delay back
    pub fn release(self) -> (I2C, DELAY) {
        (self.interface.release(), self.delay)
    }

    fn set_com_pad_map(&mut self) -> Result<(), DisplayError> {
        self.interface.cmd(&[
            Cmd::IST_COMMAND_ENTRY,
            Cmd::IST_COMMAND_ENTRY,
            Cmd::IST_COMMAND_ENTRY,
            Cmd::IST_COMMAND_ENTRY,
            Cmd::IST_COM_MAPPING | 1,
        ])?;
        self.delay.delay_ms(Flag::COM_MAP_DELAY_MS);
        self.interface.cmd(&[Cmd::EXIT_ENTRY])
    }

    fn driver_display_control(&mut self) -> Result<(), DisplayError> {
        let config = &self.config;
        let control = Cmd::DRIVER_DISPLAY_CONTROL
            | u8::from(config.shl) << 3
            | u8::from(config.adc) << 2
            | u8::from(config.eon) << 1
            | u8::from(config.rev);
        self.interface.cmd(&[control])
    }

    /// AY/AX values for `address`, offsets applied
    fn ram_position(&self, address: RamAddress) -> Option<(u8, u8)> {
        let row = address.row.checked_add(u16::from(self.config.y_offset))?;
        let column = address.column.checked_add(u16::from(self.config.x_offset))?;
        if row > Flag::MAX_ROW_ADDRESS || column > Flag::MAX_COLUMN_ADDRESS {
            return None;
        }
        Some((row as u8, column as u8))
    }
}

impl<I2C, DELAY> Transport for Ist3931<I2C, DELAY>
where
    I2C: I2c,
    DELAY: DelayNs,
{
    fn send(
        &mut self,
        address: RamAddress,
        is_command: bool,
        bytes: &[u8],
    ) -> Result<(), DisplayError> {
        if is_command {
            return self.interface.cmd(bytes);
        }

        let Some((row, column)) = self.ram_position(address) else {
            log::error!(
                "RAM address {:?} with offsets ({}, {}) is outside the controller",
                address,
                self.config.x_offset,
                self.config.y_offset
            );
            return Err(DisplayError::OutOfBoundsError);
        };

        self.interface.set_ay(row)?;
        self.interface.set_ax(column)?;
        self.interface.data(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ist3931::mock::{MockDelay, MockI2c};
    use crate::raster::PanelVariant;

    fn driver(config: Config) -> Ist3931<MockI2c, MockDelay> {
        Ist3931::new(MockI2c::default(), MockDelay::default(), config).unwrap()
    }

    #[test]
    fn laowang_init_sequence() {
        let (i2c, delay) = driver(Config::laowang()).release();
        assert!(i2c.writes.iter().all(|(address, _)| *address == 0x3F));
        assert_eq!(
            i2c.commands(),
            [
                0x88, 0x88, 0x88, 0x88, 0x61, // COM pad map
                0x79, // exit entry
                0x90, 0xA2, // duty 32
                0x2F, // VC + VF
                0x32, // bias 2
                0xB1, 150, // contrast
                0xB2, 60, 0, // frame rate
                0x68, // SHL
                0x3D, // display on
            ]
        );
        assert!(i2c.data().is_empty());
        assert_eq!(delay.calls, [10, 20, 20, 10]);
        assert_eq!(delay.total_ms(), 60);
    }

    #[test]
    fn init_stops_at_the_first_bus_error() {
        let i2c = MockI2c {
            fail_after: Some(2),
            ..MockI2c::default()
        };
        let result = Ist3931::new(i2c, MockDelay::default(), Config::laowang());
        assert!(matches!(result, Err(DisplayError::BusWriteError)));
    }

    #[test]
    fn data_sets_ay_then_ax_then_writes() {
        let mut ist3931 = driver(Config::laowang());
        let skip = ist3931.interface_writes();

        ist3931
            .send(RamAddress::new(17, 2), false, &[0xF0, 0x0F])
            .unwrap();

        let (i2c, _) = ist3931.release();
        let writes = &i2c.writes[skip..];
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0].1, [0x80, 0x01, 0x80, 0x11]);
        assert_eq!(writes[1].1, [0x80, 0xC2]);
        assert_eq!(writes[2].1, [0xC0, 0xF0, 0xC0, 0x0F]);
    }

    #[test]
    fn offsets_shift_the_ram_address() {
        let mut ist3931 = driver(Config::laowang().with_offsets(3, 8));
        let skip = ist3931.interface_writes();

        ist3931.send(RamAddress::ORIGIN, false, &[0xFF]).unwrap();

        let (i2c, _) = ist3931.release();
        assert_eq!(i2c.writes[skip].1, [0x80, 0x08, 0x80, 0x10]);
        assert_eq!(i2c.writes[skip + 1].1, [0x80, 0xC3]);
    }

    #[test]
    fn out_of_range_addresses_are_refused_before_the_bus() {
        let mut ist3931 = driver(Config::laowang().with_offsets(4, 0));
        let skip = ist3931.interface_writes();

        assert!(matches!(
            ist3931.send(RamAddress::new(0x80, 0), false, &[1]),
            Err(DisplayError::OutOfBoundsError)
        ));
        assert!(matches!(
            ist3931.send(RamAddress::new(0, 0x1C), false, &[1]),
            Err(DisplayError::OutOfBoundsError)
        ));
        assert!(matches!(
            ist3931.send(RamAddress::new(0, u16::MAX), false, &[1]),
            Err(DisplayError::OutOfBoundsError)
        ));
        assert!(ist3931.send(RamAddress::new(0x7F, 0x1B), false, &[1]).is_ok());

        let (i2c, _) = ist3931.release();
        assert_eq!(i2c.writes.len(), skip + 3);
    }

    #[test]
    fn commands_ignore_the_address() {
        let mut ist3931 = driver(Config::laowang());
        let skip = ist3931.interface_writes();

        ist3931
            .send(RamAddress::new(0x7FFF, 0x7FFF), true, &[0xB1, 0x20])
            .unwrap();

        let (i2c, _) = ist3931.release();
        assert_eq!(i2c.writes[skip..].len(), 1);
        assert_eq!(i2c.writes[skip].1, [0x80, 0xB1, 0x80, 0x20]);
    }

    #[test]
    fn runtime_controls() {
        let mut ist3931 = driver(Config::linear(128, 64).with_variant(PanelVariant::Linear));
        let skip = ist3931.interface_writes();

        ist3931.set_contrast(0x40).unwrap();
        ist3931.set_inverted(true).unwrap();
        ist3931.set_display_on(false).unwrap();
        ist3931.set_inverted(false).unwrap();
        assert_eq!(ist3931.config().ct, 0x40);
        assert!(!ist3931.config().rev);

        let (i2c, _) = ist3931.release();
        let tail: std::vec::Vec<u8> = i2c.writes[skip..]
            .iter()
            .flat_map(|(_, frame)| frame.chunks(2).map(|pair| pair[1]))
            .collect();
        assert_eq!(tail, [0xB1, 0x40, 0x69, 0x3C, 0x68]);
    }

    #[test]
    fn displays_through_the_raster_core() {
        use crate::glyph::{font::FONT_8X16, Mode};
        use crate::raster::{buffer_len, Framebuffer};
        use crate::Display;

        let config = Config::laowang();
        let ist3931 = driver(config);
        let raster = Framebuffer::<{ buffer_len(64, 32) }>::new(64, 32).unwrap();
        let mut display = Display::new(ist3931, raster, config.variant).unwrap();
        let skip = display.transport_mut().interface_writes();

        display.draw_char(0, 0, 'A', &FONT_8X16, Mode::Overwrite).unwrap();

        let (ist3931, _) = display.release();
        let (i2c, _) = ist3931.release();
        // row 1 of the glyph lands on COM 16
        assert_eq!(i2c.writes[skip + 3].1, [0x80, 0x00, 0x80, 0x11]);
        let data: std::vec::Vec<u8> = i2c.writes[skip..]
            .iter()
            .filter(|(_, frame)| frame[0] == 0xC0)
            .map(|(_, frame)| frame[1])
            .collect();
        assert_eq!(data, FONT_8X16.glyph('A'));
    }

    impl Ist3931<MockI2c, MockDelay> {
        fn interface_writes(&self) -> usize {
            self.interface.bus().writes.len()
        }
    }
}
