//! Fixed-period game loop scheduling.

use std::{
	ops::ControlFlow,
	sync::{
		atomic::{AtomicBool, Ordering},
		Arc,
	},
	thread,
	time::{Duration, Instant},
};

/// Calls a tick callback at a fixed period on the current thread until it's
/// cancelled.
#[derive(Debug)]
pub struct Ticker {
	period: Duration,
	cancelled: Arc<AtomicBool>,
}

/// Handle which stops a [`Ticker`] from any thread.
#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
	/// Stop the ticker. No tick is started after this call returns, though a
	/// tick which is already running finishes.
	pub fn cancel(&self) {
		self.0.store(true, Ordering::Release);
	}

	/// Return `true` if the ticker was cancelled.
	pub fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}
}

impl Ticker {
	/// Return a new [`Ticker`] firing every `period`.
	pub fn new(period: Duration) -> Self {
		Self {
			period,
			cancelled: Arc::new(AtomicBool::new(false)),
		}
	}

	/// Return a handle to cancel this ticker.
	pub fn cancel_handle(&self) -> CancelHandle {
		CancelHandle(self.cancelled.clone())
	}

	/// Run `on_tick` right away and then once every period until it returns
	/// [`ControlFlow::Break`] or the ticker is cancelled. Breaking cancels the
	/// ticker too.
	///
	/// Return how many ticks were run.
	pub fn run<F>(&self, mut on_tick: F) -> u64
	where
		F: FnMut() -> ControlFlow<()>,
	{
		let handle = self.cancel_handle();
		let mut ticks = 0;
		let mut next = Instant::now();

		log::debug!("ticker started with {:?} period", self.period);

		while !handle.is_cancelled() {
			ticks += 1;
			if on_tick().is_break() {
				handle.cancel();
				break;
			}

			next += self.period;
			let now = Instant::now();
			match next.checked_duration_since(now) {
				Some(wait) => thread::sleep(wait),
				// Running late, don't try to catch up with missed ticks.
				None => next = now,
			}
		}

		log::debug!("ticker stopped after {} ticks", ticks);
		ticks
	}
}
