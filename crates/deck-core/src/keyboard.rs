#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
}

/// Map a `KeyboardEvent.key` value to a navigation command.
#[inline]
pub fn nav_command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowRight" | " " => Some(NavCommand::Next),
        "ArrowLeft" => Some(NavCommand::Previous),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}
