//! Interactive shell
//!
//! Reads one word per line, prints its analysis and remembers the last word
//! the grammar accepted so `1` can render it.

pub mod command;
pub mod messages;
pub mod session;

pub use command::Command;
pub use session::{execute, Step};

use crate::config::ReplConfig;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Shell settings resolved from config and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplSettings {
    /// Prompt printed before each line
    pub prompt: String,
    /// Print the usage banner on start
    pub show_intro: bool,
}

impl Default for ReplSettings {
    fn default() -> Self {
        Self::from(&ReplConfig::default())
    }
}

impl From<&ReplConfig> for ReplSettings {
    fn from(config: &ReplConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            show_intro: config.show_intro,
        }
    }
}

/// Run the shell until `0` or end of input
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W, settings: &ReplSettings) -> Result<()> {
    if settings.show_intro {
        write!(out, "{}", messages::INTRO)?;
    }

    let mut last_valid: Option<String> = None;
    let mut line = String::new();

    loop {
        write!(out, "{}", settings.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("End of input");
            break;
        }

        match execute(Command::parse(&line), last_valid.as_deref(), &mut out)? {
            Step::Continue => {}
            Step::Save(word) => last_valid = Some(word),
            Step::Exit => break,
        }
    }

    out.flush()?;
    Ok(())
}
