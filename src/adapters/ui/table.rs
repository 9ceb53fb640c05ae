//! Plain-text rendering of the grid and the tally. No terminal control codes here,
//! so the output is stable for tests and for piping.

use crate::domain::{Participant, ResponseStatus, Summary, TOTAL_ROW_LABEL};
use crate::usecases::GridEdit;
use std::fmt::Write;

/// Prefix for participants who have not picked any day yet.
pub const PENDING_MARKER: &str = "🔴 ";

const BAR_CHAR: char = '█';

pub fn display_name(participant: &Participant, status: ResponseStatus) -> String {
    match status {
        ResponseStatus::Pending => format!("{}{}", PENDING_MARKER, participant),
        ResponseStatus::Responded => participant.to_string(),
    }
}

/// Roster as menu options, flagged by status, in roster order.
pub fn participant_options(summary: &Summary) -> Vec<String> {
    summary
        .response_status
        .iter()
        .map(|(p, s)| display_name(p, *s))
        .collect()
}

/// One line per day with a bar and the count, then who is still pending.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TOTAL_ROW_LABEL);
    if summary.days.is_empty() {
        let _ = writeln!(out, "  (no eligible days)");
    }
    for (day, count) in summary.days.iter().zip(&summary.per_day_counts) {
        let bar: String = std::iter::repeat_n(BAR_CHAR, *count).collect();
        let _ = writeln!(out, "  {:<16}{:>3} {}", day.label(), count, bar);
    }

    let leading = summary.leading_days();
    if !leading.is_empty() {
        let labels: Vec<String> = leading.iter().map(|(d, _)| d.label()).collect();
        let _ = writeln!(out, "Most votes ({}): {}", leading[0].1, labels.join(", "));
    }

    let pending = summary.pending();
    let _ = writeln!(
        out,
        "Responded: {}/{}",
        summary.responded_count(),
        summary.response_status.len()
    );
    if !pending.is_empty() {
        let names: Vec<String> = pending
            .iter()
            .map(|p| display_name(p, ResponseStatus::Pending))
            .collect();
        let _ = writeln!(out, "Waiting for: {}", names.join(", "));
    }
    out
}

/// Editable matrix: row index, flagged name, one `x`/`.` per day, then the count row.
/// Column headers show the column index and the day of month.
pub fn render_grid(grid: &GridEdit, summary: &Summary) -> String {
    let names: Vec<String> = grid
        .participants()
        .iter()
        .map(|p| {
            let status = summary.status_of(p).unwrap_or(ResponseStatus::Pending);
            display_name(p, status)
        })
        .collect();
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .chain(std::iter::once(TOTAL_ROW_LABEL.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = write!(out, "{:>4} {:<name_width$}", "", "");
    for col in 0..grid.days().len() {
        let _ = write!(out, "{:>4}", col);
    }
    out.push('\n');
    let _ = write!(out, "{:>4} {:<name_width$}", "", "");
    for day in grid.days() {
        let _ = write!(out, "{:>4}", day.date().format("%d").to_string());
    }
    out.push('\n');

    for (row, name) in names.iter().enumerate() {
        let _ = write!(out, "{:>4} {:<name_width$}", row, name);
        for on in grid.row(row).unwrap_or(&[]) {
            let _ = write!(out, "{:>4}", if *on { "x" } else { "." });
        }
        out.push('\n');
    }

    let _ = write!(out, "{:>4} {:<name_width$}", "", TOTAL_ROW_LABEL);
    for count in &summary.per_day_counts {
        let _ = write!(out, "{:>4}", count);
    }
    out.push('\n');
    out
}
