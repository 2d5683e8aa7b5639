//! Paging loop between the controller and a terminal.

use std::io::Write;

use anyhow::Result;
use records_client::{ApplicationsController, LoadMore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pages(u32),
    All,
    Interactive,
}

/// Writes rows added since the last call and any new failure.
struct Screen<W> {
    out: W,
    rendered: usize,
}

impl<W: Write> Screen<W> {
    fn refresh(&mut self, controller: &ApplicationsController, failed: bool) -> Result<()> {
        let state = controller.state();
        if let Some(fresh) = state.applications.get(self.rendered..) {
            render::write_applications(&mut self.out, fresh)?;
        }
        self.rendered = state.applications.len();
        if failed {
            render::write_error(&mut self.out, &state)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, controller: &ApplicationsController) -> Result<bool> {
        let Some(label) = render::load_more_label(&controller.state()) else {
            return Ok(false);
        };
        write!(self.out, "[{label}] press Enter, or q to quit: ")?;
        self.out.flush()?;
        Ok(true)
    }
}

/// Loads page 1, then further pages per `mode`.
///
/// Paging stops for good once the controller holds an error: `load_more`
/// would otherwise move past the page that failed.
pub async fn run<W, R>(
    controller: &ApplicationsController,
    mode: Mode,
    out: W,
    input: R,
) -> Result<()>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let mut screen = Screen { out, rendered: 0 };

    let first = controller.fetch_applications(1, false).await;
    screen.refresh(controller, first.is_err())?;

    if first.is_ok() {
        match mode {
            Mode::Pages(pages) => {
                for _ in 1..pages {
                    if !load_next(controller, &mut screen).await? {
                        break;
                    }
                }
            }
            Mode::All => while load_next(controller, &mut screen).await? {},
            Mode::Interactive => {
                let mut lines = input.lines();
                while screen.prompt(controller)? {
                    let Some(line) = lines.next_line().await? else {
                        break;
                    };
                    if line.trim().eq_ignore_ascii_case("q") {
                        break;
                    }
                    if !load_next(controller, &mut screen).await? {
                        break;
                    }
                }
            }
        }
    }

    writeln!(screen.out, "{}", render::summary_line(&controller.state()))?;
    screen.out.flush()?;
    Ok(())
}

/// Returns whether another page was appended.
async fn load_next<W: Write>(
    controller: &ApplicationsController,
    screen: &mut Screen<W>,
) -> Result<bool> {
    if controller.error().is_some() {
        return Ok(false);
    }

    match controller.load_more().await {
        Ok(LoadMore::Loaded(_)) => {
            screen.refresh(controller, false)?;
            Ok(true)
        }
        Ok(LoadMore::Skipped) => Ok(false),
        Err(_) => {
            screen.refresh(controller, true)?;
            Ok(false)
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
