//! Falling-particle celebration drawn with ANSI cursor movement.
//!
//! Particle timings are drawn on a nominal five second span (fall time
//! 2-5 s, start delay 0-1 s) and then compressed into the configured
//! duration, so the animation always ends on time.

use std::io::{self, Write};
use std::time::Duration;

use rand::Rng;

use crate::palette::{Palette, Tone, CONFETTI_COLORS};

const NOMINAL_SPAN_SECS: f64 = 5.0;
const GLYPHS: [char; 5] = ['*', '+', 'o', '~', '•'];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiSettings {
    pub enabled: bool,
    pub particles: usize,
    pub width: usize,
    pub height: usize,
    pub duration: Duration,
    pub frame_interval: Duration,
}

impl Default for ConfettiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            particles: 100,
            width: 48,
            height: 10,
            duration: Duration::from_millis(1500),
            frame_interval: Duration::from_millis(75),
        }
    }
}

impl ConfettiSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    column: usize,
    color: usize,
    glyph: char,
    fall_secs: f64,
    delay_secs: f64,
}

impl Particle {
    fn row_at(&self, t_secs: f64, height: usize) -> Option<usize> {
        let progress = (t_secs - self.delay_secs) / self.fall_secs;
        if !(0.0..1.0).contains(&progress) {
            return None;
        }
        Some(((progress * height as f64) as usize).min(height - 1))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    particles: Vec<Particle>,
    width: usize,
    height: usize,
    duration: Duration,
    frame_interval: Duration,
}

impl Confetti {
    pub fn launch<R: Rng + ?Sized>(rng: &mut R, settings: &ConfettiSettings) -> Self {
        let width = settings.width.max(1);
        let particles = (0..settings.particles)
            .map(|_| Particle {
                column: rng.gen_range(0..width),
                color: rng.gen_range(0..CONFETTI_COLORS),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                fall_secs: rng.gen_range(2.0..5.0),
                delay_secs: rng.gen_range(0.0..1.0),
            })
            .collect();
        Self {
            particles,
            width,
            height: settings.height.max(1),
            duration: settings.duration,
            frame_interval: settings.frame_interval,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frame_count(&self) -> usize {
        let frames = self
            .duration
            .as_nanos()
            .checked_div(self.frame_interval.as_nanos())
            .unwrap_or(1);
        usize::try_from(frames).unwrap_or(usize::MAX).max(1)
    }

    /// Rows of frame `index`, top to bottom.
    pub fn render_frame(&self, index: usize, palette: &Palette) -> Vec<String> {
        let t_secs = index as f64 / self.frame_count() as f64 * NOMINAL_SPAN_SECS;
        let mut grid: Vec<Vec<Option<&Particle>>> = vec![vec![None; self.width]; self.height];
        for particle in &self.particles {
            if let Some(row) = particle.row_at(t_secs, self.height) {
                grid[row][particle.column] = Some(particle);
            }
        }
        grid.into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        Some(particle) => palette.paint(&particle.glyph.to_string(), Tone::Confetti(particle.color)),
                        None => " ".to_string(),
                    })
                    .collect::<String>()
            })
            .collect()
    }

    /// Draw every frame in place, then erase the animation area.
    pub async fn play<W: Write>(&self, out: &mut W, palette: &Palette) -> io::Result<()> {
        for index in 0..self.frame_count() {
            if index > 0 {
                write!(out, "\x1b[{}A", self.height)?;
            }
            for line in self.render_frame(index, palette) {
                writeln!(out, "\x1b[2K{}", line.trim_end())?;
            }
            out.flush()?;
            tokio::time::sleep(self.frame_interval).await;
        }
        write!(out, "\x1b[{}A\x1b[J", self.height)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> ConfettiSettings {
        ConfettiSettings {
            width: 20,
            height: 6,
            duration: Duration::from_millis(100),
            frame_interval: Duration::from_millis(10),
            ..ConfettiSettings::default()
        }
    }

    #[test]
    fn launches_requested_particle_count() {
        let confetti = Confetti::launch(&mut StdRng::seed_from_u64(7), &settings());
        assert_eq!(confetti.particle_count(), 100);
        assert_eq!(confetti.frame_count(), 10);
    }

    #[test]
    fn frames_have_fixed_shape() {
        let confetti = Confetti::launch(&mut StdRng::seed_from_u64(7), &settings());
        for index in 0..confetti.frame_count() {
            let frame = confetti.render_frame(index, &Palette::plain());
            assert_eq!(frame.len(), 6);
            assert!(frame.iter().all(|row| row.chars().count() == 20));
        }
    }

    fn visible(frame: &[String]) -> usize {
        frame.iter().map(|row| row.chars().filter(|c| *c != ' ').count()).sum()
    }

    #[test]
    fn particles_appear_after_their_delay() {
        let confetti = Confetti::launch(&mut StdRng::seed_from_u64(3), &settings());
        assert_eq!(visible(&confetti.render_frame(0, &Palette::plain())), 0);
        assert!(visible(&confetti.render_frame(5, &Palette::plain())) > 0);
    }

    #[test]
    fn zero_interval_renders_a_single_frame() {
        let confetti = Confetti::launch(
            &mut StdRng::seed_from_u64(1),
            &ConfettiSettings {
                frame_interval: Duration::ZERO,
                ..settings()
            },
        );
        assert_eq!(confetti.frame_count(), 1);
    }

    #[test]
    fn sub_millisecond_interval_counts_frames() {
        let confetti = Confetti::launch(
            &mut StdRng::seed_from_u64(1),
            &ConfettiSettings {
                frame_interval: Duration::from_micros(500),
                ..ConfettiSettings::default()
            },
        );
        assert_eq!(confetti.frame_count(), 3000);
        assert_eq!(confetti.render_frame(1500, &Palette::plain()).len(), 10);
    }

    #[tokio::test]
    async fn play_clears_its_area() {
        let confetti = Confetti::launch(
            &mut StdRng::seed_from_u64(9),
            &ConfettiSettings {
                frame_interval: Duration::from_millis(1),
                duration: Duration::from_millis(3),
                ..settings()
            },
        );
        let mut out = Vec::new();
        confetti.play(&mut out, &Palette::plain()).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("\x1b[6A\x1b[J"));
        assert_eq!(text.matches('\n').count(), 6 * confetti.frame_count());
    }
}
