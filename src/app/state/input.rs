use chrono::{Duration, Months};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Quit,
    Refresh,
    Today,
    NextLocation,
    PreviousLocation,
    ShiftDays(i64),
    ShiftMonths(i32),
}

pub(crate) fn command_for_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(KeyCommand::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Left => Some(KeyCommand::ShiftDays(-1)),
        KeyCode::Right => Some(KeyCommand::ShiftDays(1)),
        KeyCode::Up => Some(KeyCommand::ShiftDays(-7)),
        KeyCode::Down => Some(KeyCommand::ShiftDays(7)),
        KeyCode::PageUp => Some(KeyCommand::ShiftMonths(-1)),
        KeyCode::PageDown => Some(KeyCommand::ShiftMonths(1)),
        KeyCode::Home => Some(KeyCommand::Today),
        KeyCode::Char(ch) => command_from_char(ch.to_ascii_lowercase()),
        _ => None,
    }
}

fn command_from_char(ch: char) -> Option<KeyCommand> {
    match ch {
        'q' => Some(KeyCommand::Quit),
        'r' => Some(KeyCommand::Refresh),
        't' => Some(KeyCommand::Today),
        'n' => Some(KeyCommand::NextLocation),
        'p' => Some(KeyCommand::PreviousLocation),
        _ => None,
    }
}

/// Moves `date` by whole months, clamping the day to the target month's length.
pub(crate) fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let step = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    };
    shifted.unwrap_or(date)
}

impl AppState {
    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if let Some(command) = command_for_key(key) {
            self.apply_command(command, tx).await?;
        }
        Ok(())
    }

    pub(crate) async fn apply_command(
        &mut self,
        command: KeyCommand,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match command {
            KeyCommand::Quit => tx.send(AppEvent::Quit).await?,
            KeyCommand::Refresh => self.start_fetch(tx),
            KeyCommand::Today => self.handle_date_selected(self.now.date()),
            KeyCommand::NextLocation => self.switch_location(1, tx),
            KeyCommand::PreviousLocation => self.switch_location(-1, tx),
            KeyCommand::ShiftDays(days) => {
                let date = self
                    .selected_date
                    .checked_add_signed(Duration::days(days))
                    .unwrap_or(self.selected_date);
                self.handle_date_selected(date);
            }
            KeyCommand::ShiftMonths(months) => {
                self.handle_date_selected(shift_months(self.selected_date, months));
            }
        }
        Ok(())
    }
}
