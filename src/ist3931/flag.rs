/// Bus framing and limits of the IST3931 controller
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    /// 7-bit I2C address (0x7E on the wire)
    pub const I2C_ADDRESS: u8 = 0x3F;

    // Control byte sent in front of every payload byte
    pub const CONTROL_COMMAND: u8 = 0x80;
    pub const CONTROL_DATA: u8 = 0xC0;

    // Display RAM geometry
    pub const RAM_COLUMNS: usize = 18; // bytes, 144 segments
    pub const RAM_ROWS: usize = 64;

    // Largest addresses the AY/AX commands can encode
    pub const MAX_ROW_ADDRESS: u16 = 0x7F;
    pub const MAX_COLUMN_ADDRESS: u16 = 0x1F;

    pub const DISPLAY_ON: u8 = 0x01;
    pub const DISPLAY_OFF: u8 = 0x00;

    pub const BIAS_MASK: u8 = 0x07;
    pub const NIBBLE_MASK: u8 = 0x0F;

    // Delays taken from the vendor init sequence, in milliseconds
    pub const COM_MAP_DELAY_MS: u32 = 10;
    pub const INIT_STEP_DELAY_MS: u32 = 20;
    pub const DISPLAY_ON_DELAY_MS: u32 = 10;
}
