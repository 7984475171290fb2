/// Collapse a string onto a single display line.
///
/// Every run of spaces or ASCII control characters (including tabs, newlines
/// and DEL) becomes one space, and leading/trailing spaces are dropped.
/// Non-ASCII characters pass through untouched.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c == ' ' || c.is_ascii_control() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_inner_runs() {
        assert_eq!(normalize("Hello     world"), "Hello world");
        assert_eq!(normalize("a\t\tb\r\nc"), "a b c");
    }

    #[test]
    fn trims_both_ends() {
        assert_eq!(normalize("  \n padded \t "), "padded");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(normalize("bell\x07here\x7Fnow"), "bell here now");
        assert_eq!(normalize("\x00\x1Fx"), "x");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(normalize("Überprüfung  läuft…"), "Überprüfung läuft…");
        assert_eq!(normalize("日本語\u{00A0}テキスト"), "日本語\u{00A0}テキスト");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Hello     world",
            "  lead",
            "trail \n",
            "\t\x01mixed \x7F  controls\r\n",
            "Übersetzung\t\tfehlt",
            "",
            " ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
