//! Terminal session and event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use hilite_core::HighlightOutcome;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use crate::App;

/// Run `app` on the current terminal until the user quits.
pub fn run(mut app: App) -> Result<HighlightOutcome> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits.
	///
	/// The terminal is restored before returning, also on error.
	pub fn run(&mut self) -> Result<HighlightOutcome> {
		let mut terminal = ratatui::init();
		let session = (|| -> Result<()> {
			terminal.clear()?;
			execute!(stdout(), EnableMouseCapture)?;
			Ok(())
		})();
		if let Err(err) = session {
			ratatui::restore();
			return Err(err);
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<HighlightOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							maybe_outcome = Some(outcome);
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				debug!(highlights = outcome.highlights.len(), "leaving event loop");
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		let teardown = execute!(stdout(), DisableMouseCapture);
		stop_reader(&event_loop_running, event_thread, teardown)?;

		result
	}
}

/// Stop the input reader thread and wait for it, then report any error from
/// terminal teardown.
fn stop_reader(
	running: &AtomicBool,
	reader: JoinHandle<Result<()>>,
	teardown: io::Result<()>,
) -> Result<()> {
	running.store(false, Ordering::Relaxed);
	match reader.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}
	teardown.context("failed to disable mouse capture")
}
