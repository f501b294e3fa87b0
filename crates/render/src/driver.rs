/// Sink for frame requests. The desktop shell implements this over the
/// winit window; tests use a counting mock.
pub trait FrameRequester {
    fn request_frame(&self);
}

/// Owns the continuous-redraw flag for the paint loop.
///
/// The loop is "request another frame after this one completes": strictly
/// FIFO through the host's event queue, no timers. Suspending clears the
/// flag so a completed frame does not re-trigger the loop while a modal
/// dialog is open.
#[derive(Debug)]
pub struct RedrawDriver {
    continuous: bool,
}

impl Default for RedrawDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawDriver {
    /// A new driver starts in continuous mode.
    pub fn new() -> Self {
        Self { continuous: true }
    }

    pub fn is_continuous(&self) -> bool {
        self.continuous
    }

    /// Stop re-requesting frames after completion.
    pub fn suspend(&mut self) {
        if self.continuous {
            tracing::debug!("redraw loop suspended");
        }
        self.continuous = false;
    }

    /// Restore continuous mode without requesting a frame.
    pub fn resume(&mut self) {
        if !self.continuous {
            tracing::debug!("redraw loop resumed");
        }
        self.continuous = true;
    }

    /// Called after a frame has been presented; re-requests the next frame
    /// while in continuous mode.
    pub fn frame_completed<R: FrameRequester>(&self, requester: &R) {
        if self.continuous {
            requester.request_frame();
        }
    }

    /// Restore continuous mode and force one redraw. Used when a modal
    /// dialog closes so the scene repaints immediately.
    pub fn resume_and_request<R: FrameRequester>(&mut self, requester: &R) {
        self.resume();
        requester.request_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingRequester {
        requests: Cell<usize>,
    }

    impl FrameRequester for CountingRequester {
        fn request_frame(&self) {
            self.requests.set(self.requests.get() + 1);
        }
    }

    #[test]
    fn continuous_loop_re_requests_each_frame() {
        let driver = RedrawDriver::new();
        let requester = CountingRequester::default();
        driver.frame_completed(&requester);
        driver.frame_completed(&requester);
        assert_eq!(requester.requests.get(), 2);
    }

    #[test]
    fn suspended_driver_stops_the_loop() {
        let mut driver = RedrawDriver::new();
        let requester = CountingRequester::default();
        driver.suspend();
        assert!(!driver.is_continuous());
        driver.frame_completed(&requester);
        assert_eq!(requester.requests.get(), 0);
    }

    #[test]
    fn resume_alone_does_not_request() {
        let mut driver = RedrawDriver::new();
        let requester = CountingRequester::default();
        driver.suspend();
        driver.resume();
        assert!(driver.is_continuous());
        assert_eq!(requester.requests.get(), 0);
    }

    #[test]
    fn resume_and_request_forces_exactly_one_redraw() {
        let mut driver = RedrawDriver::new();
        let requester = CountingRequester::default();
        driver.suspend();
        driver.resume_and_request(&requester);
        assert!(driver.is_continuous());
        assert_eq!(requester.requests.get(), 1);
    }
}
