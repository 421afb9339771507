//! Line commands of the terminal front-end

use shared::ProductId;

use crate::coordinator::DashboardAction;

pub const HELP: &str = "Commands: s <id> simulate/reset | r report | c close report | l reload | q quit";

/// A parsed input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(DashboardAction),
    Help,
    Quit,
}

/// Parse one raw input line, replacing bytes that are not UTF-8
pub fn parse_input(raw: &[u8]) -> Command {
    let line = String::from_utf8_lossy(raw);
    if let std::borrow::Cow::Owned(_) = line {
        tracing::warn!("Input line is not valid UTF-8");
    }
    parse_command(&line)
}

/// Parse one line of operator input
pub fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Command::Help;
    };

    match (verb, parts.next(), parts.next()) {
        ("s", Some(id), None) => match id.parse::<ProductId>() {
            Ok(id) => Command::Action(DashboardAction::ToggleSimulation(id)),
            Err(_) => Command::Help,
        },
        ("r", None, None) => Command::Action(DashboardAction::OpenReport),
        ("c", None, None) => Command::Action(DashboardAction::CloseReport),
        ("l", None, None) => Command::Action(DashboardAction::Reload),
        ("q", None, None) => Command::Quit,
        _ => Command::Help,
    }
}
