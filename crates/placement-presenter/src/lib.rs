pub mod confetti;
pub mod notification;
pub mod palette;
pub mod presenter;
pub mod tables;

pub use confetti::{Confetti, ConfettiSettings};
pub use notification::NoticeKind;
pub use palette::{Palette, Tone};
pub use presenter::{Presentation, Presenter};
