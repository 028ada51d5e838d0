mod strategy;
pub use strategy::*;

use std::io::{BufRead, Write};

use arboretum::{Card, CardToPlace, DrawSource, GameView, Okay, Request};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self);
    fn draw(&mut self, view: &GameView) -> anyhow::Result<DrawSource>;
    fn play(&mut self, view: &GameView) -> anyhow::Result<CardToPlace>;
    fn discard(&mut self, view: &GameView) -> anyhow::Result<Card>;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.run_with(stdin, stdout)
    }

    /// Answers requests from `input` until it is closed or a
    /// [`Request::Bye`] arrives.
    fn run_with(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the other side has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame => {
                    self.new_game();
                    serde_json::to_writer(&mut output, &Okay())?;
                }
                Request::Draw { view } => serde_json::to_writer(&mut output, &self.draw(&view)?)?,
                Request::Play { view } => serde_json::to_writer(&mut output, &self.play(&view)?)?,
                Request::Discard { view } => {
                    serde_json::to_writer(&mut output, &self.discard(&view)?)?
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
        }
    }
}
