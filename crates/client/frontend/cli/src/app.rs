//! Menu loop tying the session and the console renderer together.
use std::io::{BufRead, Write};

use anyhow::Result;
use arena_core::{DuelOutcome, RandomSource};
use arena_runtime::{Session, TracingObserver};
use tracing::warn;

use crate::presentation::{ConsoleRenderer, render_snapshot};

const COMMAND_SHOW_FIGHTERS: &str = "1";
const COMMAND_CHOOSE_FIGHTERS: &str = "2";
const COMMAND_EXIT: &str = "0";

/// Line-oriented arena menu.
pub struct App<R: RandomSource> {
    session: Session<R>,
}

impl<R: RandomSource> App<R> {
    pub fn new(session: Session<R>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Runs the menu until the exit command or end of input.
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        loop {
            write!(
                output,
                "\nChoose an action:\n\
                 {COMMAND_SHOW_FIGHTERS}. Show fighters\n\
                 {COMMAND_CHOOSE_FIGHTERS}. Choose fighters for a duel\n\
                 {COMMAND_EXIT}. Leave the arena\n\
                 Input: "
            )?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                break;
            };

            match line.trim() {
                COMMAND_SHOW_FIGHTERS => self.show_fighters(output)?,
                COMMAND_CHOOSE_FIGHTERS => {
                    if !self.choose_fighters(input, output)? {
                        break;
                    }
                }
                COMMAND_EXIT => break,
                other => writeln!(output, "\nNo such command: '{other}'. Try again.")?,
            }
        }

        writeln!(output, "\nLeaving the arena.")?;
        Ok(())
    }

    fn show_fighters(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output)?;
        for (index, snapshot) in self.session.roster().snapshots().iter().enumerate() {
            writeln!(output, "{}. {}\n", index + 1, render_snapshot(snapshot))?;
        }
        Ok(())
    }

    /// Picks two fighters and runs their duel. Returns `false` on end of input.
    fn choose_fighters(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
        write!(output, "Choose the first fighter: ")?;
        let Some(first) = self.prompt_fighter(input, output)? else {
            return Ok(false);
        };

        write!(output, "Choose the second fighter: ")?;
        let Some(second) = self.prompt_fighter(input, output)? else {
            return Ok(false);
        };

        self.session.select(first, second)?;
        writeln!(output)?;

        let mut renderer = ConsoleRenderer::new(&mut *output);
        let result = self
            .session
            .start_duel(&mut (&mut renderer, TracingObserver));
        renderer.finish()?;

        match result {
            Ok(report) => match &report.outcome {
                DuelOutcome::Victory { winner, loser, .. } => {
                    writeln!(output, "\n{winner} defeated {loser}.")?;
                }
                DuelOutcome::Draw => writeln!(output, "\nBoth fighters fell. Nobody wins.")?,
            },
            Err(err) => {
                warn!(%err, "duel did not finish");
                writeln!(output, "\nThe duel was called off: {err}")?;
            }
        }

        writeln!(output, "Duel finished.")?;
        Ok(true)
    }

    /// Re-prompts until the input names a roster entry. `None` on end of input.
    fn prompt_fighter(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Option<usize>> {
        loop {
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };

            match self.session.parse_selection(&line) {
                Ok(index) => return Ok(Some(index)),
                Err(err) => write!(output, "{err}. Try again: ")?,
            }
        }
    }
}

fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
