//! ASCII logo artwork.

use unicode_width::UnicodeWidthStr;

/// Tux, one row per slice entry.
pub const LINUX_LOGO: &[&str] = &[
    r#"        a8888b.        "#,
    r#"       d888888b.       "#,
    r#"       8P"YP"Y88       "#,
    r#"       8|o||o|88       "#,
    r#"       8'    .88       "#,
    r#"       8`._.' Y8.      "#,
    r#"      d/      `8b.     "#,
    r#"     dP   .    Y8b.    "#,
    r#"    d8:'  "  `::88b    "#,
    r#"   d8"         'Y88b   "#,
    r#"  :8P    '      :888   "#,
    r#"   8a.   :     _a88P   "#,
    r#" ._/"Yaa_:   .| 88P|   "#,
    r#" \    YP"    `| 8P  `. "#,
    r#" /     \.___.d|    .'  "#,
    r#" `--..__)8888P`._.'    "#,
];

/// Widest logo row in terminal cells.
pub fn logo_width() -> u16 {
    LINUX_LOGO
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0) as u16
}

pub fn logo_height() -> u16 {
    LINUX_LOGO.len() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_has_rows_and_width() {
        assert!(logo_height() > 0);
        assert!(logo_width() > 0);
    }

    #[test]
    fn no_row_exceeds_the_reported_width() {
        for line in LINUX_LOGO {
            assert!(line.width() as u16 <= logo_width());
        }
    }
}
