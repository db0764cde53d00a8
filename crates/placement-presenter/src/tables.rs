//! Plain-text renderings of history, stats and the sample dataset.

use placement_core::{History, SampleStudent, StatsSummary};

use crate::palette::{Palette, Tone};

const BAR_WIDTH: usize = 20;

/// Whole numbers print without a fractional part, like `128` rather than `128.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn status_label(placed: bool) -> &'static str {
    if placed {
        "✅ Placed"
    } else {
        "❌ Not Placed"
    }
}

pub fn history_lines(history: &History, palette: &Palette) -> Vec<String> {
    if history.is_empty() {
        return vec![palette.paint("No predictions yet", Tone::Dim)];
    }
    history
        .iter()
        .map(|entry| {
            let result = &entry.result;
            format!(
                "CGPA: {:.1} | IQ: {}  {}  {}",
                entry.request.cgpa(),
                format_number(entry.request.iq()),
                palette.outcome(status_label(result.outcome()), result.outcome()),
                palette.paint(&entry.time_label(), Tone::Dim),
            )
        })
        .collect()
}

pub fn stats_lines(stats: &StatsSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Total students:  {}", stats.total_students),
        format!("Placed students: {}", stats.placed_students),
        format!("Placement rate:  {:.1}%", stats.placement_rate()),
        format!("Average CGPA:    {}", format_number(stats.avg_cgpa)),
        format!("Average IQ:      {}", format_number(stats.avg_iq)),
    ];
    if let Some(source) = &stats.data_source {
        lines.push(format!("Data source:     {source}"));
    }
    lines
}

fn bar(count: usize, total: usize) -> String {
    let filled = if total == 0 { 0 } else { count * BAR_WIDTH / total };
    "█".repeat(filled)
}

/// Table of students followed by a placed/not-placed split.
pub fn sample_lines(samples: &[SampleStudent], palette: &Palette) -> Vec<String> {
    let mut lines = vec![
        format!("{:<10} {:>5} {:>5}  {}", "Name", "CGPA", "IQ", "Status"),
        "─".repeat(36),
    ];
    for student in samples {
        lines.push(format!(
            "{:<10} {:>5.1} {:>5}  {}",
            student.name,
            student.cgpa,
            format_number(student.iq),
            palette.outcome(status_label(student.is_placed()), student.is_placed()),
        ));
    }

    let placed = samples.iter().filter(|student| student.is_placed()).count();
    let not_placed = samples.len() - placed;
    lines.push(String::new());
    lines.push(format!(
        "Placed      {} {placed}",
        palette.paint(&bar(placed, samples.len()), Tone::Green)
    ));
    lines.push(format!(
        "Not placed  {} {not_placed}",
        palette.paint(&bar(not_placed, samples.len()), Tone::Red)
    ));
    lines
}
