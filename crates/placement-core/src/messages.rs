//! Fixed user-facing text shared by the terminal presenter and the demo backend.

pub const PLACED_HEADLINE: &str = "CONGRATULATIONS! 🎊";
pub const NOT_PLACED_HEADLINE: &str = "SORRY BUDDY 😔";

pub const PLACED_MESSAGES: [&str; 5] = [
    "🎯 Placement hogya! Jaa, jee le apni zindagi! 🥳",
    "🚀 Company ne pakad liya! Ab bas chutti! 🏖️",
    "💰 Package mil gaya! Party time! 🍾",
    "🏆 Selection ho gaya! Champion! 🏅",
    "🎊 Congratulations! Ab trip plan kar! ✈️",
];

pub const NOT_PLACED_MESSAGES: [&str; 5] = [
    "😢 Nhi hoga placement! Lage reh! 📚",
    "💔 Aaj nahi toh kal! Keep trying! 💪",
    "📉 Thoda aur mehnat chahiye! 🤓",
    "😅 Chill kar! Abhi time hai! 🕰️",
    "🤔 CGPA improve kar, IQ badha! Next time pakka! ✨",
];

pub fn headline(outcome: bool) -> &'static str {
    if outcome {
        PLACED_HEADLINE
    } else {
        NOT_PLACED_HEADLINE
    }
}

pub fn flavor_messages(outcome: bool) -> &'static [&'static str] {
    if outcome {
        &PLACED_MESSAGES
    } else {
        &NOT_PLACED_MESSAGES
    }
}
