/// IST3931 command opcodes
///
/// Opcodes that carry a parameter in their low bits are OR-ed with it before
/// sending, see the matching constants in [`super::flag::Flag`].
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    // Init
    pub const POWER_CONTROL: u8 = 0x2C; // | VC | VF << 1
    pub const BIAS: u8 = 0x30; // | BR (0..=7)
    pub const CT: u8 = 0xB1; // followed by contrast byte
    pub const FRAME_CONTROL: u8 = 0xB2; // followed by FR LSB, FR MSB
    pub const SET_DUTY_LSB: u8 = 0x90;
    pub const SET_DUTY_MSB: u8 = 0xA0;
    pub const DRIVER_DISPLAY_CONTROL: u8 = 0x60; // | SHL << 3 | ADC << 2 | EON << 1 | REV
    pub const DISPLAY_ON_OFF: u8 = 0x3C; // | D

    // Extended command set
    pub const IST_COMMAND_ENTRY: u8 = 0x88;
    pub const IST_COM_MAPPING: u8 = 0x60;
    pub const EXIT_ENTRY: u8 = 0x79;

    // Update
    pub const SET_AY_ADD_LSB: u8 = 0x00; // | AY[3:0]
    pub const SET_AY_ADD_MSB: u8 = 0x10; // | AY[6:4]
    pub const SET_AX_ADD: u8 = 0xC0; // | AX[4:0]
}
