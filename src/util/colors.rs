use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x001db954);
pub const SECONDARY: Color = Color::from_u32(0x00168d40);
pub const NEUTRAL: Color = Color::from_u32(0x00535353);
pub const MUTED: Color = Color::from_u32(0x00b3b3b3);
pub const SURFACE: Color = Color::from_u32(0x00181818);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const TEXT: Color = Color::from_u32(0x00ffffff);
