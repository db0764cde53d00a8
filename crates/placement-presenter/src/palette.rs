/// ANSI foreground colours used by the terminal presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Orange,
    Dim,
    Bold,
    /// One of the five confetti colours.
    Confetti(usize),
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Green => "32",
            Tone::Red => "31",
            Tone::Orange => "33",
            Tone::Dim => "2",
            Tone::Bold => "1",
            Tone::Confetti(index) => CONFETTI_CODES[index % CONFETTI_CODES.len()],
        }
    }
}

/// 256-colour approximations of `#ff6b6b #ffd166 #06d6a0 #118ab2 #ef476f`.
const CONFETTI_CODES: [&str; 5] = ["38;5;203", "38;5;221", "38;5;42", "38;5;31", "38;5;204"];

pub const CONFETTI_COLORS: usize = CONFETTI_CODES.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            format!("\x1b[{}m{text}\x1b[0m", tone.code())
        } else {
            text.to_string()
        }
    }

    pub fn outcome(&self, text: &str, outcome: bool) -> String {
        self.paint(text, if outcome { Tone::Green } else { Tone::Red })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_emits_no_escapes() {
        assert_eq!(Palette::plain().paint("hi", Tone::Green), "hi");
    }

    #[test]
    fn enabled_palette_wraps_and_resets() {
        assert_eq!(Palette::new(true).paint("hi", Tone::Red), "\x1b[31mhi\x1b[0m");
        assert_eq!(
            Palette::new(true).paint("*", Tone::Confetti(7)),
            "\x1b[38;5;42m*\x1b[0m"
        );
    }
}
