use std::time::{Duration, Instant};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use stepdeck_api::Direction;

/// A horizontal slide of the stage after a scene change.
///
/// Forward transitions bring the new scene in from the right, backward ones
/// from the left. The offset eases out over `duration`.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
	direction: Direction,
	started: Instant,
	duration: Duration,
}

impl Transition {
	pub fn new(direction: Direction, started: Instant, duration: Duration) -> Self {
		Self {
			direction,
			started,
			duration,
		}
	}

	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Fraction of the animation still to play, in `[0, 1]`.
	fn remaining(&self, now: Instant) -> f32 {
		if self.duration.is_zero() {
			return 0.0;
		}
		let elapsed = now.saturating_duration_since(self.started);
		let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
		(1.0 - progress).clamp(0.0, 1.0)
	}

	pub fn is_finished(&self, now: Instant) -> bool {
		self.remaining(now) <= 0.0
	}

	/// Column offset for content `width` cells wide at `now`.
	pub fn shift(&self, now: Instant, width: u16) -> i32 {
		let remaining = self.remaining(now);
		let distance = (f32::from(width) / 3.0 * remaining * remaining).round() as i32;
		match self.direction {
			Direction::Forward => distance,
			Direction::Backward => -distance,
		}
	}
}

/// Copy `area` from `src` into `dst`, displaced horizontally by `shift`.
///
/// Cells uncovered by the displacement are reset.
pub fn blit_shifted(src: &Buffer, dst: &mut Buffer, area: Rect, shift: i32) {
	for y in area.top()..area.bottom() {
		for x in area.left()..area.right() {
			let source = i32::from(x) - shift;
			let cell = &mut dst[(x, y)];
			if source >= i32::from(area.left()) && source < i32::from(area.right()) {
				*cell = src[(source as u16, y)].clone();
			} else {
				cell.reset();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shift_eases_towards_zero() {
		let start = Instant::now();
		let transition = Transition::new(Direction::Forward, start, Duration::from_millis(100));

		assert_eq!(transition.shift(start, 30), 10);
		assert_eq!(transition.shift(start + Duration::from_millis(60), 30), 2);
		assert_eq!(transition.shift(start + Duration::from_millis(100), 30), 0);
		assert!(transition.is_finished(start + Duration::from_millis(150)));
	}

	#[test]
	fn backward_transitions_enter_from_the_left() {
		let start = Instant::now();
		let transition = Transition::new(Direction::Backward, start, Duration::from_millis(100));

		assert_eq!(transition.shift(start, 30), -10);
	}

	#[test]
	fn zero_duration_never_shifts() {
		let start = Instant::now();
		let transition = Transition::new(Direction::Forward, start, Duration::ZERO);

		assert_eq!(transition.shift(start, 90), 0);
		assert!(transition.is_finished(start));
	}

	#[test]
	fn blit_moves_cells_and_clears_the_gap() {
		let area = Rect::new(0, 0, 5, 1);
		let src = Buffer::with_lines(["abcde"]);
		let mut dst = Buffer::with_lines(["zzzzz"]);

		blit_shifted(&src, &mut dst, area, 2);
		assert_eq!(dst, Buffer::with_lines(["  abc"]));

		blit_shifted(&src, &mut dst, area, -1);
		assert_eq!(dst, Buffer::with_lines(["bcde "]));
	}
}
