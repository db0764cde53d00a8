use std::io::{self, Write};

use placement_broker::{Connectivity, PredictError, Predictor};
use placement_core::{PredictionRequest, PredictionResult, ValidationError};
use placement_presenter::{NoticeKind, Presenter};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const HELP: &str = "Enter `<cgpa> <iq>` to predict, `history` for recent results, `quit` to exit.";

/// What happened to one predict action.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Rejected(ValidationError),
    Busy,
    Scored(PredictionResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Collector, scorer and presenter wired together for one user.
pub struct Session<W, R> {
    predictor: Predictor,
    presenter: Presenter<W, R>,
}

impl<W: Write, R: Rng> Session<W, R> {
    pub fn new(predictor: Predictor, presenter: Presenter<W, R>) -> Self {
        Self { predictor, presenter }
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    pub fn presenter(&self) -> &Presenter<W, R> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter<W, R> {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> Presenter<W, R> {
        self.presenter
    }

    /// Connectivity banner plus stats, shown once at start.
    pub fn greet(&mut self, connectivity: &Connectivity) -> io::Result<()> {
        self.presenter.render_status(connectivity.status)?;
        if let Some(stats) = &connectivity.stats {
            self.presenter.render_stats(stats)?;
        }
        Ok(())
    }

    /// Validate the raw fields, score, and present. Invalid input never
    /// reaches the predictor.
    pub async fn submit(&mut self, cgpa: &str, iq: &str) -> io::Result<Submission> {
        let request = match PredictionRequest::parse(cgpa, iq) {
            Ok(request) => request,
            Err(error) => {
                tracing::debug!(target: "placement_cli", %error, cgpa, iq, "input rejected");
                self.presenter.notify(NoticeKind::Error, &error.to_string())?;
                return Ok(Submission::Rejected(error));
            }
        };

        let result = match self.predictor.predict(&request).await {
            Ok(result) => result,
            Err(PredictError::Busy) => {
                self.presenter
                    .notify(NoticeKind::Info, "Prediction already in progress")?;
                return Ok(Submission::Busy);
            }
        };

        let shown = self.presenter.present(&request, &result)?;
        if let Some(confetti) = &shown.confetti {
            self.presenter.celebrate(confetti).await?;
        }
        Ok(Submission::Scored(result))
    }

    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            ["quit" | "exit"] => return Ok(Flow::Quit),
            ["history"] => self.presenter.render_history()?,
            ["help"] => self.presenter.line(HELP)?,
            [cgpa, iq] => {
                self.submit(cgpa, iq).await?;
            }
            _ => self
                .presenter
                .notify(NoticeKind::Error, "Enter two numbers: <cgpa> <iq>")?,
        }
        Ok(Flow::Continue)
    }

    /// Drive the session from `input` until `quit` or end of input.
    pub async fn run<I: AsyncBufRead + Unpin>(&mut self, input: I) -> io::Result<()> {
        self.presenter.line(HELP)?;
        let mut lines = input.lines();
        loop {
            self.presenter.prompt()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle_line(&line).await? == Flow::Quit {
                break;
            }
        }
        tracing::debug!(
            target: "placement_cli",
            fallbacks = self.predictor.fallback_count(),
            "session ended"
        );
        Ok(())
    }
}
