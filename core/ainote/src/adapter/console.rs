//! 端末でのテキスト入力（stdin）と通知（stdout）

use crate::ports::outbound::{Notifier, Prompter};
use common::error::Error;
use std::io::{self, BufRead, Write};

/// プロンプトを stderr に出し、stdin から 1 行読む
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn prompt(&self, message: &str) -> Result<Option<String>, Error> {
        let mut stderr = io::stderr();
        write!(stderr, "{} ", message)?;
        stderr.flush()?;

        let mut line = String::new();
        let n = io::stdin().lock().read_line(&mut line)?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
