//! Implements NotifierPort by printing a highlighted line to stdout.

use crate::ports::NotifierPort;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl NotifierPort for TerminalNotifier {
    fn notify(&self, message: &str) {
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(Color::Yellow));
        let _ = out.execute(Print(format!("» {}\r\n", message)));
        let _ = out.execute(ResetColor);
        let _ = out.flush();
    }
}
