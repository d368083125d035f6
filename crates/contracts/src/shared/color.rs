/// Complementary colour for text drawn over a `colorbox` cell.
///
/// `#rrggbb` (the `#` is optional) is XOR-ed with `0xffffff` and rendered as
/// six lower-case hex digits. Anything else yields `None`.
pub fn invert_hex_color(hex_color: &str) -> Option<String> {
    let digits = hex_color.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    Some(format!("#{:06x}", 0xffffff ^ value))
}
