//! Byte constants of the argument-property wire format.

// Boolean
pub const FALSE: u8 = 0x00;
pub const TRUE: u8 = 0x01;

// VarInt
// Low 7 bits carry data, high bit marks that another byte follows.
pub const VARINT_SEGMENT: u8 = 0x7F;
pub const VARINT_CONTINUE: u8 = 0x80;
pub const VARINT_MAX_LEN: usize = 5;

// Entity selector flags, OR-ed into a single byte.
pub const ENTITY_SINGLE: u8 = 0x01;
pub const ENTITY_ONLY_PLAYERS: u8 = 0x02;
pub const ENTITY_FLAGS_MASK: u8 = ENTITY_SINGLE | ENTITY_ONLY_PLAYERS;
