/// Transient state for a drag-to-seek gesture on the progress bar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeekGesture {
	dragging: bool,
	last_target: Option<usize>,
}

impl SeekGesture {
	/// Start a drag that has just sought `target`.
	pub fn begin(&mut self, target: usize) {
		self.dragging = true;
		self.last_target = Some(target);
	}

	/// Record a drag update. Returns the target to seek, or `None` when the
	/// gesture is idle or the target was already sought during this drag.
	pub fn update(&mut self, target: usize) -> Option<usize> {
		if !self.dragging || self.last_target == Some(target) {
			return None;
		}
		self.last_target = Some(target);
		Some(target)
	}

	pub fn end(&mut self) {
		self.dragging = false;
		self.last_target = None;
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	/// Scene most recently sought by the active drag.
	pub fn target(&self) -> Option<usize> {
		self.last_target.filter(|_| self.dragging)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn updates_are_ignored_until_the_gesture_begins() {
		let mut gesture = SeekGesture::default();
		assert_eq!(gesture.update(2), None);
		assert!(!gesture.is_dragging());
	}

	#[test]
	fn repeated_targets_are_collapsed() {
		let mut gesture = SeekGesture::default();
		gesture.begin(1);

		assert_eq!(gesture.update(1), None);
		assert_eq!(gesture.update(2), Some(2));
		assert_eq!(gesture.update(2), None);
		assert_eq!(gesture.update(0), Some(0));
	}

	#[test]
	fn release_stops_updates() {
		let mut gesture = SeekGesture::default();
		gesture.begin(0);
		gesture.end();

		assert_eq!(gesture.update(3), None);
		assert!(!gesture.is_dragging());
		assert_eq!(gesture.target(), None);
	}
}
