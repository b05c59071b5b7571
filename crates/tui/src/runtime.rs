//! Terminal session and event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use stepdeck_api::SceneRegistry;
use tracing::{debug, info, warn};

use crate::App;
use crate::app::PresentationOutcome;
use crate::builder::Presenter;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Present `registry` with default settings until the user quits.
pub fn run(registry: SceneRegistry) -> Result<PresentationOutcome> {
	Presenter::new(registry).run()
}

/// Background thread forwarding crossterm events over a channel.
struct EventReader {
	running: Arc<AtomicBool>,
	handle: JoinHandle<Result<()>>,
}

impl EventReader {
	fn spawn(events: mpsc::Sender<Event>) -> Self {
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);
		let handle = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if event::poll(POLL_INTERVAL)? {
					let event = event::read()?;
					if events.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});
		Self { running, handle }
	}

	fn stop(self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.handle.join() {
			Ok(result) => result,
			Err(panic) => std::panic::resume_unwind(panic),
		}
	}
}

fn prepare(terminal: &mut DefaultTerminal) -> Result<()> {
	terminal.clear()?;
	execute!(stdout(), EnableMouseCapture)?;
	Ok(())
}

impl App {
	/// Pump the terminal event loop until the user quits.
	///
	/// The terminal is restored and mouse capture released on every exit
	/// path, including failed draws.
	pub fn run(&mut self) -> Result<PresentationOutcome> {
		let mut terminal = ratatui::init();
		info!(
			deck = self.stepper.registry().title(),
			scenes = self.stepper.registry().len(),
			"presentation started"
		);

		let (event_tx, event_rx) = mpsc::channel();
		let reader = EventReader::spawn(event_tx);

		let result = match prepare(&mut terminal) {
			Ok(()) => self.event_loop(&event_rx, |app| {
				terminal.draw(|frame| app.draw(frame)).map(drop)
			}),
			Err(err) => Err(err),
		};

		drop(event_rx);
		let reader_result = reader.stop();
		let released = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();

		let outcome = result?;
		if let Err(err) = reader_result {
			warn!(error = %err, "input reader stopped with an error");
		}
		released?;

		debug!(?outcome, "event loop finished");
		Ok(outcome)
	}

	/// Apply queued events and redraw through `draw` until a quit command
	/// arrives, the channel closes, or a draw fails.
	fn event_loop<D>(
		&mut self,
		events: &mpsc::Receiver<Event>,
		mut draw: D,
	) -> Result<PresentationOutcome>
	where
		D: FnMut(&mut Self) -> io::Result<()>,
	{
		let mut pending_events = VecDeque::new();
		let mut needs_redraw = true;

		loop {
			loop {
				match events.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				needs_redraw = true;
				let outcome = match event {
					Event::Key(key) => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					return Ok(outcome);
				}
			}

			if needs_redraw || self.is_animating() {
				draw(self)?;
				needs_redraw = false;
			}

			thread::sleep(FRAME_INTERVAL);
		}
	}
}
