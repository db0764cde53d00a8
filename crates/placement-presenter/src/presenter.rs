use std::io::{self, Write};

use placement_core::messages::{self, flavor_messages};
use placement_core::{
    BackendStatus, History, PredictionRequest, PredictionResult, SampleStudent, ScoreSource, StatsSummary,
};
use rand::Rng;

use crate::confetti::{Confetti, ConfettiSettings};
use crate::notification::{toast, NoticeKind};
use crate::palette::{Palette, Tone};
use crate::tables::{self, format_number};

/// What a single [`Presenter::present`] call showed.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub headline: &'static str,
    pub flavor: &'static str,
    /// Set only for positive outcomes with the animation enabled.
    pub confetti: Option<Confetti>,
}

/// Explicit rendering context: output sink, randomness, styling and the
/// rolling history all live here instead of in ambient state.
pub struct Presenter<W, R> {
    out: W,
    rng: R,
    palette: Palette,
    confetti: ConfettiSettings,
    history: History,
}

/// Uniform pick from the five flavour lines for `outcome`.
pub fn pick_flavor<R: Rng + ?Sized>(rng: &mut R, outcome: bool) -> &'static str {
    let candidates = flavor_messages(outcome);
    candidates[rng.gen_range(0..candidates.len())]
}

impl<W: Write, R: Rng> Presenter<W, R> {
    pub fn new(out: W, rng: R) -> Self {
        Self {
            out,
            rng,
            palette: Palette::plain(),
            confetti: ConfettiSettings::disabled(),
            history: History::new(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_confetti(mut self, settings: ConfettiSettings) -> Self {
        self.confetti = settings;
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// Render `result` and record it in history against the submitted `request`.
    pub fn present(&mut self, request: &PredictionRequest, result: &PredictionResult) -> io::Result<Presentation> {
        let outcome = result.outcome();
        let icon = if outcome { "🎉" } else { "😢" };
        let headline = messages::headline(outcome);
        let flavor = pick_flavor(&mut self.rng, outcome);

        writeln!(self.out)?;
        writeln!(
            self.out,
            "{icon} {}",
            self.palette.outcome(&self.palette.paint(headline, Tone::Bold), outcome)
        )?;
        writeln!(
            self.out,
            "CGPA: {:.1} | IQ: {} | Confidence: {}%",
            result.cgpa(),
            format_number(result.iq()),
            result.confidence_percent()
        )?;
        writeln!(self.out, "{}", self.palette.outcome(flavor, outcome))?;
        if result.source() == ScoreSource::Local {
            writeln!(self.out, "{}", self.palette.paint("(local estimate)", Tone::Dim))?;
        }
        self.out.flush()?;

        if let Some(evicted) = self.history.record(*request, *result) {
            tracing::trace!(
                target: "placement_presenter",
                cgpa = evicted.request.cgpa(),
                iq = evicted.request.iq(),
                "history entry evicted"
            );
        }

        let confetti = (outcome && self.confetti.enabled).then(|| Confetti::launch(&mut self.rng, &self.confetti));
        tracing::debug!(
            target: "placement_presenter",
            outcome,
            source = %result.source(),
            confetti = confetti.is_some(),
            "presented result"
        );

        Ok(Presentation {
            headline,
            flavor,
            confetti,
        })
    }

    pub async fn celebrate(&mut self, confetti: &Confetti) -> io::Result<()> {
        confetti.play(&mut self.out, &self.palette).await
    }

    pub fn notify(&mut self, kind: NoticeKind, message: &str) -> io::Result<()> {
        for line in toast(kind, message, &self.palette) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    pub fn render_status(&mut self, status: BackendStatus) -> io::Result<()> {
        let tone = match status {
            BackendStatus::Connected => Tone::Green,
            BackendStatus::Offline => Tone::Orange,
        };
        writeln!(self.out, "Backend: {}", self.palette.paint(&status.to_string(), tone))
    }

    pub fn render_history(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.paint("Recent predictions", Tone::Bold))?;
        self.write_lines(tables::history_lines(&self.history, &self.palette))
    }

    pub fn render_stats(&mut self, stats: &StatsSummary) -> io::Result<()> {
        self.write_lines(tables::stats_lines(stats))
    }

    pub fn render_samples(&mut self, samples: &[SampleStudent]) -> io::Result<()> {
        self.write_lines(tables::sample_lines(samples, &self.palette))
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", self.palette.paint("cgpa iq> ", Tone::Bold))?;
        self.out.flush()
    }

    fn write_lines(&mut self, lines: Vec<String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_core::messages::{NOT_PLACED_MESSAGES, PLACED_MESSAGES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn presenter(seed: u64) -> Presenter<Vec<u8>, StdRng> {
        Presenter::new(Vec::new(), StdRng::seed_from_u64(seed))
    }

    fn output(presenter: Presenter<Vec<u8>, StdRng>) -> String {
        String::from_utf8(presenter.into_writer()).unwrap()
    }

    fn request_for(result: &PredictionResult) -> PredictionRequest {
        PredictionRequest::new(result.cgpa(), result.iq()).unwrap()
    }

    fn show(presenter: &mut Presenter<Vec<u8>, StdRng>, result: &PredictionResult) -> Presentation {
        presenter.present(&request_for(result), result).unwrap()
    }

    fn placed() -> PredictionResult {
        PredictionResult::new(true, 0.85, 7.4, 132.0, ScoreSource::Remote)
    }

    fn not_placed() -> PredictionResult {
        PredictionResult::new(false, 0.1, 5.9, 90.0, ScoreSource::Local)
    }

    #[test]
    fn flavor_always_comes_from_the_outcome_set() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(PLACED_MESSAGES.contains(&pick_flavor(&mut rng, true)));
            assert!(NOT_PLACED_MESSAGES.contains(&pick_flavor(&mut rng, false)));
        }
    }

    #[test]
    fn placed_result_renders_headline_details_and_flavor() {
        let mut presenter = presenter(1);
        let shown = show(&mut presenter, &placed());
        assert_eq!(shown.headline, "CONGRATULATIONS! 🎊");
        assert!(PLACED_MESSAGES.contains(&shown.flavor));

        let text = output(presenter);
        assert!(text.contains("🎉 CONGRATULATIONS! 🎊"));
        assert!(text.contains("CGPA: 7.4 | IQ: 132 | Confidence: 85%"));
        assert!(text.contains(shown.flavor));
        assert!(!text.contains("(local estimate)"));
    }

    #[test]
    fn not_placed_result_marks_local_estimate() {
        let mut presenter = presenter(2);
        let shown = show(&mut presenter, &not_placed());
        assert_eq!(shown.headline, "SORRY BUDDY 😔");
        assert!(NOT_PLACED_MESSAGES.contains(&shown.flavor));
        assert!(shown.confetti.is_none());

        let text = output(presenter);
        assert!(text.contains("CGPA: 5.9 | IQ: 90 | Confidence: 10%"));
        assert!(text.contains("(local estimate)"));
    }

    #[test]
    fn confetti_only_for_positive_outcomes() {
        let mut presenter = presenter(3).with_confetti(ConfettiSettings::default());
        assert!(show(&mut presenter, &placed()).confetti.is_some());
        assert!(show(&mut presenter, &not_placed()).confetti.is_none());
    }

    #[test]
    fn disabled_confetti_never_launches() {
        let mut presenter = presenter(4);
        assert!(show(&mut presenter, &placed()).confetti.is_none());
    }

    #[test]
    fn history_is_capped_at_five_most_recent_first() {
        let mut presenter = presenter(5);
        for step in 0..6 {
            let result = PredictionResult::new(false, 0.2, f64::from(step), 100.0, ScoreSource::Local);
            show(&mut presenter, &result);
        }
        let cgpas: Vec<f64> = presenter.history().iter().map(|entry| entry.result.cgpa()).collect();
        assert_eq!(cgpas, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn history_rendering_lists_entries() {
        let mut presenter = presenter(6);
        presenter.render_history().unwrap();
        show(&mut presenter, &placed());
        presenter.render_history().unwrap();
        let text = output(presenter);
        assert!(text.contains("No predictions yet"));
        assert!(text.contains("CGPA: 7.4 | IQ: 132  ✅ Placed"));
    }

    #[test]
    fn notification_uses_error_toast() {
        let mut presenter = presenter(7);
        presenter.notify(NoticeKind::Error, "CGPA must be between 0 and 10").unwrap();
        assert!(presenter.history().is_empty());
        let text = output(presenter);
        assert!(text.contains("✖ CGPA must be between 0 and 10"));
    }

    #[test]
    fn colour_output_wraps_outcome_in_green() {
        let mut presenter = presenter(9).with_palette(Palette::new(true));
        show(&mut presenter, &placed());
        let text = output(presenter);
        assert!(text.contains("\x1b[32m"));
    }

    #[test]
    fn history_shows_submitted_inputs_not_remote_echo() {
        let mut presenter = presenter(10);
        let echoed = PredictionResult::new(true, 0.9, 9.9, 199.0, ScoreSource::Remote);
        presenter
            .present(&PredictionRequest::new(7.5, 120.0).unwrap(), &echoed)
            .unwrap();
        presenter.render_history().unwrap();
        let text = output(presenter);
        assert!(text.contains("CGPA: 7.5 | IQ: 120  ✅ Placed"));
        assert!(!text.contains("CGPA: 9.9 | IQ: 199  ✅"));
    }
}
