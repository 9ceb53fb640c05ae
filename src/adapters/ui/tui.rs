//! Implements InputPort. Inquire-based interactive prompts.
//!
//! One `PollService` per running UI; the mutex only serialises access from the
//! async runtime, there is never more than one writer.

use crate::adapters::ui::table;
use crate::domain::{DomainError, EligibleDay, Participant};
use crate::ports::InputPort;
use crate::usecases::{CommitMode, ExportService, PollService};
use async_trait::async_trait;
use crossterm::ExecutableCommand;
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, InquireError, MultiSelect, Select, Text};
use std::fmt;
use std::io::stdout;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightYellow))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightGreen))
        .with_unselected_checkbox(Styled::new("[ ]"));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Grid,
    LiveEdit,
    ConfirmEdit,
    Tally,
    Export,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 6] = [
        MenuChoice::Grid,
        MenuChoice::LiveEdit,
        MenuChoice::ConfirmEdit,
        MenuChoice::Tally,
        MenuChoice::Export,
        MenuChoice::Quit,
    ];
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Grid => "Grid edit (everyone)",
            MenuChoice::LiveEdit => "Edit one participant (saves on every toggle)",
            MenuChoice::ConfirmEdit => "Edit one participant (save on confirm)",
            MenuChoice::Tally => "Show tally",
            MenuChoice::Export => "Export tally",
            MenuChoice::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// One line typed at the grid prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCommand {
    Toggle { row: usize, col: usize },
    Done,
    Cancel,
    Invalid,
}

/// Parses `row col`, `done` or `cancel` (case-insensitive, extra whitespace ignored).
pub fn parse_grid_command(input: &str) -> GridCommand {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "done" | "d" | "" => return GridCommand::Done,
        "cancel" | "c" | "q" => return GridCommand::Cancel,
        _ => {}
    }
    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [r, c] => match (r.parse(), c.parse()) {
            (Ok(row), Ok(col)) => GridCommand::Toggle { row, col },
            _ => GridCommand::Invalid,
        },
        _ => GridCommand::Invalid,
    }
}

fn prompt_err(e: InquireError) -> DomainError {
    DomainError::Prompt(e.to_string())
}

/// Esc / Ctrl-C become `None` so sub-menus can return to the main menu.
fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(prompt_err(e)),
    }
}

fn print_colored(msg: &str, color: TermColor) {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(color));
    let _ = out.execute(Print(format!("{}\r\n", msg)));
    let _ = out.execute(ResetColor);
}

const NO_DAYS: &str = "No eligible days.";

/// Day labels for a picker, `None` when the range has no business days.
/// Inquire rejects a prompt with no options, so callers must bail out first.
fn day_labels(days: &[EligibleDay]) -> Option<Vec<String>> {
    if days.is_empty() {
        None
    } else {
        Some(days.iter().map(EligibleDay::label).collect())
    }
}

fn day_option(day: &EligibleDay, selected: bool) -> String {
    format!("[{}] {}", if selected { "x" } else { " " }, day.label())
}

/// TUI adapter. Inquire prompts over a single poll session.
pub struct TuiInputPort {
    poll: Mutex<PollService>,
    export_service: Arc<ExportService>,
}

impl TuiInputPort {
    pub fn new(poll: PollService, export_service: Arc<ExportService>) -> Self {
        Self {
            poll: Mutex::new(poll),
            export_service,
        }
    }

    async fn pick_participant(&self, prompt: &str) -> Result<Option<Participant>, DomainError> {
        let poll = self.poll.lock().await;
        let options = table::participant_options(&poll.get_summary());
        if options.is_empty() {
            print_colored("The roster is empty.", TermColor::Yellow);
            return Ok(None);
        }
        let picked = cancellable(Select::new(prompt, options).raw_prompt())?;
        Ok(picked.and_then(|opt| poll.list_participants().get(opt.index).cloned()))
    }

    async fn run_grid(&self) -> Result<(), DomainError> {
        let mut poll = self.poll.lock().await;
        let mut grid = poll.open_grid();
        loop {
            println!("{}", table::render_grid(&grid, &poll.get_summary()));
            let Some(input) = cancellable(
                Text::new("Toggle a cell:")
                    .with_help_message("`row col` to toggle, `done` (or Enter) to save, `cancel` to discard")
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            match parse_grid_command(&input) {
                GridCommand::Toggle { row, col } => {
                    if let Err(e) = grid.toggle(row, col) {
                        print_colored(&e.to_string(), TermColor::Red);
                    }
                }
                GridCommand::Done => {
                    let committed = poll.commit_grid(&mut grid)?;
                    info!(rows = committed.len(), "grid saved");
                    print_colored(
                        &format!("Saved {} row(s).", committed.len()),
                        TermColor::Green,
                    );
                    return Ok(());
                }
                GridCommand::Cancel => {
                    print_colored("Grid changes discarded.", TermColor::Yellow);
                    return Ok(());
                }
                GridCommand::Invalid => {
                    print_colored("Type `row col`, `done` or `cancel`.", TermColor::Yellow);
                }
            }
        }
    }

    async fn run_live_edit(&self) -> Result<(), DomainError> {
        let Some(participant) = self.pick_participant("Who are you?").await? else {
            return Ok(());
        };
        let mut poll = self.poll.lock().await;
        let days = poll.list_eligible_days().to_vec();
        if days.is_empty() {
            print_colored(NO_DAYS, TermColor::Yellow);
            return Ok(());
        }
        let mut edit = poll.open_participant(&participant, CommitMode::Live)?;

        loop {
            let mut options: Vec<String> = days
                .iter()
                .map(|d| day_option(d, edit.draft().contains(d)))
                .collect();
            options.push("← Back".to_string());
            let Some(picked) = cancellable(
                Select::new(&format!("{}: toggle a day", participant), options).raw_prompt(),
            )?
            else {
                return Ok(());
            };
            let Some(day) = days.get(picked.index).copied() else {
                return Ok(());
            };
            if let Err(e) = poll.toggle_day(&mut edit, day) {
                print_colored(&e.to_string(), TermColor::Red);
            }
        }
    }

    async fn run_confirm_edit(&self) -> Result<(), DomainError> {
        let Some(participant) = self.pick_participant("Who are you?").await? else {
            return Ok(());
        };
        let mut poll = self.poll.lock().await;
        let days = poll.list_eligible_days().to_vec();
        let Some(labels) = day_labels(&days) else {
            print_colored(NO_DAYS, TermColor::Yellow);
            return Ok(());
        };
        let mut edit = poll.open_participant(&participant, CommitMode::Staged)?;
        let defaults: Vec<usize> = days
            .iter()
            .enumerate()
            .filter(|(_, d)| edit.draft().contains(*d))
            .map(|(i, _)| i)
            .collect();

        let Some(picked) = cancellable(
            MultiSelect::new(&format!("{}: which days suit you?", participant), labels)
                .with_default(&defaults)
                .raw_prompt(),
        )?
        else {
            edit.discard();
            return Ok(());
        };
        let chosen: Vec<EligibleDay> = picked
            .iter()
            .filter_map(|opt| days.get(opt.index).copied())
            .collect();
        poll.replace_draft(&mut edit, chosen)?;

        if !edit.has_pending_changes() {
            print_colored("Nothing changed.", TermColor::Yellow);
            return Ok(());
        }
        let save = cancellable(
            Confirm::new(&format!(
                "Save {} day(s) for {}?",
                edit.draft().len(),
                participant
            ))
            .with_default(true)
            .prompt(),
        )?
        .unwrap_or(false);

        if save {
            poll.confirm(&mut edit)?;
            print_colored("Saved.", TermColor::Green);
        } else {
            edit.discard();
            print_colored("Not saved.", TermColor::Yellow);
        }
        Ok(())
    }

    async fn show_tally(&self) {
        let poll = self.poll.lock().await;
        println!("{}", table::render_summary(&poll.get_summary()));
    }

    async fn run_export(&self) -> Result<(), DomainError> {
        let poll = self.poll.lock().await;
        match self.export_service.export(&poll).await {
            Ok(paths) => {
                for path in paths {
                    print_colored(&format!("Wrote {}", path.display()), TermColor::Green);
                }
            }
            Err(e) => {
                warn!(error = %e, "export failed");
                print_colored(&e.to_string(), TermColor::Red);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = cancellable(
                Select::new("What would you like to do?", MenuChoice::ALL.to_vec()).prompt(),
            )?;
            let result = match choice {
                None | Some(MenuChoice::Quit) => break,
                Some(MenuChoice::Grid) => self.run_grid().await,
                Some(MenuChoice::LiveEdit) => self.run_live_edit().await,
                Some(MenuChoice::ConfirmEdit) => self.run_confirm_edit().await,
                Some(MenuChoice::Tally) => {
                    self.show_tally().await;
                    Ok(())
                }
                Some(MenuChoice::Export) => self.run_export().await,
            };
            // Validation errors are shown and the menu continues; prompt failures end the session.
            match result {
                Ok(()) => {}
                Err(e @ DomainError::Prompt(_)) => return Err(e),
                Err(e) => print_colored(&e.to_string(), TermColor::Red),
            }
        }
        info!("session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid_command() {
        assert_eq!(parse_grid_command("2 5"), GridCommand::Toggle { row: 2, col: 5 });
        assert_eq!(parse_grid_command("  10,3 "), GridCommand::Toggle { row: 10, col: 3 });
        assert_eq!(parse_grid_command("DONE"), GridCommand::Done);
        assert_eq!(parse_grid_command(""), GridCommand::Done);
        assert_eq!(parse_grid_command("cancel"), GridCommand::Cancel);
        assert_eq!(parse_grid_command("1"), GridCommand::Invalid);
        assert_eq!(parse_grid_command("a b"), GridCommand::Invalid);
        assert_eq!(parse_grid_command("-1 2"), GridCommand::Invalid);
        assert_eq!(parse_grid_command("1 2 3"), GridCommand::Invalid);
    }

    #[test]
    fn test_day_option_marks_selection() {
        let day = EligibleDay::new(chrono::NaiveDate::from_ymd_opt(2024, 11, 11).unwrap());
        assert_eq!(day_option(&day, true), "[x] 2024.11.11 (H)");
        assert_eq!(day_option(&day, false), "[ ] 2024.11.11 (H)");
    }

    #[test]
    fn test_day_labels_empty_for_weekend_only_range() {
        let date = |d| chrono::NaiveDate::from_ymd_opt(2024, 11, d).unwrap();
        let poll = PollService::new(date(16), date(17), ["Anna"]).unwrap();
        assert!(poll.list_eligible_days().is_empty());
        assert_eq!(day_labels(poll.list_eligible_days()), None);

        let poll = PollService::new(date(15), date(18), ["Anna"]).unwrap();
        assert_eq!(
            day_labels(poll.list_eligible_days()),
            Some(vec!["2024.11.15 (P)".to_string(), "2024.11.18 (H)".to_string()])
        );
    }

    #[test]
    fn test_menu_lists_every_choice_once() {
        let labels: Vec<String> = MenuChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels.last().map(String::as_str), Some("Quit"));
    }
}
