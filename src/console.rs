//! Raw-mode console loops for the pomodoro countdown and flashcard review.

use crate::domain::{Deck, DndManager, Phase, Pomodoro, TickOutcome};
use crate::notifications;
use crate::ticker::{poll_duration, SecondTicker};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Stdout, Write};

#[derive(Debug, Clone, Copy)]
pub struct TimerOptions {
    pub notifications: bool,
    pub allow_auto_dnd: bool,
}

/// Run `body` with raw mode on and the cursor hidden, restoring both after
fn with_raw_terminal<T>(body: impl FnOnce(&mut Stdout) -> Result<T>) -> Result<T> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, Hide)?;

    let result = body(&mut stdout);

    execute!(stdout, Show)?;
    disable_raw_mode()?;
    println!();
    result
}

/// Next key press within one poll interval, if any
fn poll_key() -> Result<Option<KeyEvent>> {
    if event::poll(poll_duration())? {
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Replace the current line with a colored `head` followed by `tail`
fn redraw_line(stdout: &mut Stdout, color: Color, head: &str, tail: &str) -> Result<()> {
    queue!(
        stdout,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(color),
        Print(head),
        ResetColor,
        Print(tail)
    )?;
    stdout.flush()?;
    Ok(())
}

/// Print a message on its own line, leaving the status line below it
fn print_message(stdout: &mut Stdout, message: &str) -> Result<()> {
    queue!(
        stdout,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(message),
        Print("\r\n")
    )?;
    stdout.flush()?;
    Ok(())
}

/// Count down the pomodoro in the terminal until the cycle completes or the
/// user quits.
///
/// Keys: space/p pause or resume, s skip phase, r reset, q quit.
pub fn run_pomodoro(timer: &mut Pomodoro, options: TimerOptions) -> Result<()> {
    with_raw_terminal(|stdout| pomodoro_loop(stdout, timer, options))
}

fn pomodoro_loop(stdout: &mut Stdout, timer: &mut Pomodoro, options: TimerOptions) -> Result<()> {
    let mut dnd = DndManager::new(options.allow_auto_dnd, false);
    let mut ticker = SecondTicker::new();

    timer.start();
    update_dnd(&mut dnd, timer);
    announce_phase(stdout, timer, &dnd, options)?;

    loop {
        draw_timer(stdout, timer)?;

        if let Some(key) = poll_key()? {
            if is_quit(&key) {
                log::info!(
                    "event=timer_quit phase={} remaining={}",
                    timer.phase().to_tag(),
                    timer.remaining_seconds()
                );
                return Ok(());
            }

            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('p') => {
                    timer.toggle();
                    ticker.restart();
                    update_dnd(&mut dnd, timer);
                }
                KeyCode::Char('s') => {
                    let outcome = timer.skip();
                    if handle_outcome(stdout, timer, &mut dnd, options, outcome)? {
                        return Ok(());
                    }
                }
                KeyCode::Char('r') => {
                    timer.reset();
                    update_dnd(&mut dnd, timer);
                    print_message(stdout, "Timer reset. Press space to start.")?;
                }
                _ => {}
            }
        }

        for _ in 0..ticker.elapsed_steps() {
            let outcome = timer.tick();
            if handle_outcome(stdout, timer, &mut dnd, options, outcome)? {
                return Ok(());
            }
        }
    }
}

/// Returns true once the whole cycle has finished
fn handle_outcome(
    stdout: &mut Stdout,
    timer: &Pomodoro,
    dnd: &mut DndManager,
    options: TimerOptions,
    outcome: TickOutcome,
) -> Result<bool> {
    match outcome {
        TickOutcome::PhaseChanged(_) => {
            announce_phase(stdout, timer, dnd, options)?;
            Ok(false)
        }
        TickOutcome::Completed => {
            log::info!("event=cycle_completed sessions={}", timer.total_sessions());
            update_dnd(dnd, timer);
            draw_timer(stdout, timer)?;
            print_message(stdout, "")?;
            print_message(stdout, "All Pomodoro sessions completed!")?;
            if should_notify(options, dnd) {
                notifications::notify_phase("Done", "All Pomodoro sessions completed!");
            }
            Ok(true)
        }
        TickOutcome::Counting | TickOutcome::Idle => Ok(false),
    }
}

fn update_dnd(dnd: &mut DndManager, timer: &Pomodoro) {
    dnd.set_feature_in_use(timer.is_running());
    if timer.is_running() {
        dnd.enable_dnd();
    } else {
        dnd.disable_dnd();
    }
}

/// Notifications are muted while do-not-disturb is on
fn should_notify(options: TimerOptions, dnd: &DndManager) -> bool {
    options.notifications && !dnd.is_on()
}

fn announce_phase(
    stdout: &mut Stdout,
    timer: &Pomodoro,
    dnd: &DndManager,
    options: TimerOptions,
) -> Result<()> {
    let phase = timer.phase();
    log::info!(
        "event=phase_started phase={} session={} of={} seconds={}",
        phase.to_tag(),
        timer.current_session() + 1,
        timer.total_sessions(),
        timer.remaining_seconds()
    );

    print_message(stdout, &format!("{}  {}", timer.status_line(), phase.announcement()))?;

    if should_notify(options, dnd) {
        notifications::notify_phase(phase.name(), phase.announcement());
    }
    Ok(())
}

fn phase_color(phase: Phase) -> Color {
    if phase.is_break() {
        Color::Green
    } else {
        Color::Red
    }
}

fn draw_timer(stdout: &mut Stdout, timer: &Pomodoro) -> Result<()> {
    let state = if timer.is_running() { "" } else { " (paused)" };
    redraw_line(
        stdout,
        phase_color(timer.phase()),
        &timer.clock(),
        &format!(
            "  {}{}   [space] pause  [s] skip  [r] reset  [q] quit",
            timer.status_line(),
            state
        ),
    )
}

/// Step through the deck card by card.
///
/// Keys: space/f flip, n/right next, p/left previous, q quit.
pub fn review_cards(deck: &mut Deck) -> Result<()> {
    if deck.is_empty() {
        println!("No flashcards yet. Add one with `studydesk cards add FRONT BACK`.");
        return Ok(());
    }

    with_raw_terminal(|stdout| {
        print_message(stdout, "[space] flip  [n] next  [p] previous  [q] quit")?;
        loop {
            draw_card(stdout, deck)?;

            let Some(key) = poll_key()? else {
                continue;
            };
            if is_quit(&key) {
                return Ok(());
            }
            match key.code {
                KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => deck.flip(),
                KeyCode::Char('n') | KeyCode::Right | KeyCode::Down => deck.next(),
                KeyCode::Char('p') | KeyCode::Left | KeyCode::Up => deck.prev(),
                _ => {}
            }
        }
    })
}

fn draw_card(stdout: &mut Stdout, deck: &Deck) -> Result<()> {
    let side = if deck.is_showing_back() { "BACK " } else { "FRONT" };
    let text = deck.visible_side().unwrap_or("");
    let color = if deck.is_showing_back() {
        Color::Cyan
    } else {
        Color::Yellow
    };
    redraw_line(
        stdout,
        color,
        &format!("[{}/{}] {}", deck.position() + 1, deck.len(), side),
        &format!("  {}", text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PomodoroSettings;

    fn options(allow_auto_dnd: bool) -> TimerOptions {
        TimerOptions {
            notifications: true,
            allow_auto_dnd,
        }
    }

    #[test]
    fn test_running_timer_mutes_notifications_with_auto_dnd() {
        let mut timer = Pomodoro::new(PomodoroSettings::default());
        let mut dnd = DndManager::new(true, false);
        timer.start();
        update_dnd(&mut dnd, &timer);

        assert!(dnd.is_on());
        assert!(!should_notify(options(true), &dnd));
    }

    #[test]
    fn test_running_timer_notifies_without_auto_dnd() {
        let mut timer = Pomodoro::new(PomodoroSettings::default());
        let mut dnd = DndManager::new(false, false);
        timer.start();
        update_dnd(&mut dnd, &timer);

        assert!(!dnd.is_on());
        assert!(should_notify(options(false), &dnd));
    }

    #[test]
    fn test_completed_cycle_releases_dnd() {
        let settings = PomodoroSettings {
            work_minutes: 1,
            short_break_minutes: 1,
            long_break_minutes: 1,
            sessions: 1,
        };
        let mut timer = Pomodoro::new(settings);
        let mut dnd = DndManager::new(true, false);
        timer.start();
        update_dnd(&mut dnd, &timer);
        assert!(dnd.is_on());

        timer.skip();
        assert_eq!(timer.skip(), TickOutcome::Completed);
        update_dnd(&mut dnd, &timer);

        assert!(!dnd.is_on());
        assert!(should_notify(options(true), &dnd));
        assert!(!should_notify(
            TimerOptions {
                notifications: false,
                allow_auto_dnd: true,
            },
            &dnd
        ));
    }
}
