//! Browser callbacks owned by a mounted graph.
//!
//! `C` is the callback handle (`Closure<dyn FnMut()>` in the browser). The
//! loop owns the animation and resize callbacks and remembers the pending
//! frame, so everything the window still references can be released at once
//! when the graph unmounts.

pub struct FrameLoop<C> {
	animate: Option<C>,
	resize: Option<C>,
	frame: Option<i32>,
	stopped: bool,
}

/// What `FrameLoop::stop` hands back for the window to forget.
pub struct Released<C> {
	pub frame: Option<i32>,
	pub animate: Option<C>,
	pub resize: Option<C>,
}

impl<C> Default for FrameLoop<C> {
	fn default() -> Self {
		Self {
			animate: None,
			resize: None,
			frame: None,
			stopped: false,
		}
	}
}

impl<C> FrameLoop<C> {
	pub fn is_stopped(&self) -> bool {
		self.stopped
	}

	/// The animation callback to re-arm with, unless the loop was stopped.
	pub fn animate(&self) -> Option<&C> {
		self.animate.as_ref().filter(|_| !self.stopped)
	}

	pub fn resize(&self) -> Option<&C> {
		self.resize.as_ref()
	}

	pub fn set_animate(&mut self, callback: C) {
		self.animate = Some(callback);
	}

	pub fn set_resize(&mut self, callback: C) {
		self.resize = Some(callback);
	}

	pub fn set_frame(&mut self, frame: Option<i32>) {
		self.frame = frame;
	}

	/// Stops re-arming without dropping the callbacks. Safe to call from
	/// inside the animation callback itself.
	pub fn halt(&mut self) {
		self.stopped = true;
		self.frame = None;
	}

	/// Stops the loop and takes every callback out of it.
	pub fn stop(&mut self) -> Released<C> {
		self.stopped = true;
		Released {
			frame: self.frame.take(),
			animate: self.animate.take(),
			resize: self.resize.take(),
		}
	}
}
