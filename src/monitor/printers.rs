use super::watchpoints::Watchpoint;

/// Memory scan output: two hex digits per byte, space separated.
pub fn format_byte_row(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_byte_row(bytes: &[u8]) {
    println!("{}", format_byte_row(bytes));
}

pub fn format_watchpoint_row(wp: &Watchpoint) -> String {
    format!("{:<4} {:<24} 0x{:x}", wp.id, wp.expr, wp.last_value)
}

/// Watchpoint table for `info w`, in creation order. The caller decides
/// what an empty pool should look like.
pub fn print_watchpoints<'a>(watchpoints: impl Iterator<Item = &'a Watchpoint>) {
    println!("{:<4} {:<24} {}", "id", "expression", "value");
    for wp in watchpoints {
        println!("{}", format_watchpoint_row(wp));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_row_prints_two_digits_per_byte() {
        assert_eq!(format_byte_row(&[0x00, 0x0f, 0xff]), "00 0f ff");
        assert_eq!(format_byte_row(&[]), "");
    }

    #[test]
    fn eight_bytes_make_eight_fields() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let row = format_byte_row(&bytes);
        assert_eq!(row.split_whitespace().count(), 8);
    }

    #[test]
    fn watchpoint_row_shows_id_expression_and_hex_value() {
        let wp = Watchpoint {
            id: 3,
            expr: "*0x100".to_string(),
            last_value: 0xbeef,
        };
        let row = format_watchpoint_row(&wp);
        assert!(row.starts_with("3 "));
        assert!(row.contains("*0x100"));
        assert!(row.contains("0xbeef"));
    }
}
