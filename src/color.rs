use std::io::{self, Write};

use super::vec::Color;

const CHANNEL_SCALE: f64 = 255.999;

/// Map a linear channel in [0, 1] to a byte by truncation.
pub fn to_byte(channel: f64) -> u8 {
    // NaN clamps to NaN, and NaN as u8 is 0
    (channel.clamp(0.0, 1.0) * CHANNEL_SCALE) as u8
}

pub fn format_color(color: Color) -> String {
    format!(
        "{} {} {}",
        to_byte(color.x()),
        to_byte(color.y()),
        to_byte(color.z())
    )
}

/// Emit one P3 pixel line.
pub fn write_color<W: Write>(out: &mut W, color: Color) -> io::Result<()> {
    writeln!(out, "{}", format_color(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_truncated_not_rounded() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.5), 127);
        assert_eq!(to_byte(1.0 / 255.0), 1);
        assert_eq!(to_byte(0.999), 255);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(to_byte(-0.25), 0);
        assert_eq!(to_byte(3.0), 255);
    }

    #[test]
    fn writes_one_line_per_pixel() {
        let mut out = Vec::new();
        write_color(&mut out, Color::new(1.0, 0.5, 0.0)).unwrap();
        write_color(&mut out, Color::new(0.5, 0.7, 1.0)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "255 127 0\n127 179 255\n");
    }
}
