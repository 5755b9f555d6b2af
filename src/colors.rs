//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF000000;
pub const RED: u32 = 0xFFFF0000;
pub const GREEN: u32 = 0xFF00FF00;
pub const BLUE: u32 = 0xFF0000FF;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Split an ARGB8888 color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba() {
        assert_eq!(to_rgba(RED), [255, 0, 0, 255]);
        assert_eq!(to_rgba(0x80102030), [0x10, 0x20, 0x30, 0x80]);
    }
}
