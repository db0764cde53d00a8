use crate::palette::{Palette, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Info,
}

/// Boxed toast, three lines tall.
pub fn toast(kind: NoticeKind, message: &str, palette: &Palette) -> Vec<String> {
    let (icon, tone) = match kind {
        NoticeKind::Error => ("✖", Tone::Red),
        NoticeKind::Info => ("✔", Tone::Green),
    };
    let body = format!(" {icon} {message} ");
    let rule = "─".repeat(body.chars().count());
    vec![
        palette.paint(&format!("┌{rule}┐"), tone),
        palette.paint(&format!("│{body}│"), tone),
        palette.paint(&format!("└{rule}┘"), tone),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_edges_line_up() {
        let lines = toast(NoticeKind::Error, "IQ must be between 50 and 200", &Palette::plain());
        assert_eq!(lines.len(), 3);
        let widths: Vec<usize> = lines.iter().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|width| *width == widths[0]));
        assert!(lines[1].contains("✖ IQ must be between 50 and 200"));
    }
}
