pub const NAV_THRESHOLD_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
}

pub fn nav_threshold(viewport_height: f64) -> f64 {
    viewport_height * NAV_THRESHOLD_RATIO
}

// Strict comparison, no hysteresis: dithering across the threshold flips the
// nav on every event.
pub fn nav_visible(sample: ScrollSample) -> bool {
    sample.offset > nav_threshold(sample.viewport_height)
}

/// A viewport that reports scroll events. Dropping the returned subscription
/// must remove the listener.
pub trait ScrollSource {
    type Subscription;

    fn subscribe(&self, on_scroll: Box<dyn FnMut(ScrollSample)>) -> Self::Subscription;
}

pub struct ScrollNavController<S: ScrollSource> {
    subscription: Option<S::Subscription>,
}

impl<S: ScrollSource> ScrollNavController<S> {
    pub fn mount(source: &S, mut on_change: impl FnMut(bool) + 'static) -> Self {
        let subscription = source.subscribe(Box::new(move |sample| on_change(nav_visible(sample))));
        log::debug!("scroll listener attached");

        Self {
            subscription: Some(subscription),
        }
    }

    #[cfg(test)]
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("scroll listener released");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollNavController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::{Cell, RefCell},
        rc::{Rc, Weak},
    };

    type Handlers = Rc<RefCell<Vec<(usize, Box<dyn FnMut(ScrollSample)>)>>>;

    #[derive(Default)]
    struct FakeViewport {
        handlers: Handlers,
        next_id: Cell<usize>,
    }

    struct FakeSubscription {
        id: usize,
        handlers: Weak<RefCell<Vec<(usize, Box<dyn FnMut(ScrollSample)>)>>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            if let Some(handlers) = self.handlers.upgrade() {
                handlers.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl ScrollSource for FakeViewport {
        type Subscription = FakeSubscription;

        fn subscribe(&self, on_scroll: Box<dyn FnMut(ScrollSample)>) -> FakeSubscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.handlers.borrow_mut().push((id, on_scroll));
            FakeSubscription {
                id,
                handlers: Rc::downgrade(&self.handlers),
            }
        }
    }

    impl FakeViewport {
        fn scroll_to(&self, offset: f64, viewport_height: f64) {
            let sample = ScrollSample {
                offset,
                viewport_height,
            };
            for (_, handler) in self.handlers.borrow_mut().iter_mut() {
                handler(sample);
            }
        }

        fn listener_count(&self) -> usize {
            self.handlers.borrow().len()
        }
    }

    fn sample(offset: f64, viewport_height: f64) -> ScrollSample {
        ScrollSample {
            offset,
            viewport_height,
        }
    }

    #[test]
    fn threshold_is_strict() {
        let boundary = nav_threshold(1000.0);
        assert!(!nav_visible(sample(boundary, 1000.0)));
        assert!(nav_visible(sample(boundary + 0.5, 1000.0)));
        assert!(!nav_visible(sample(0.0, 1000.0)));
    }

    #[test]
    fn visibility_tracks_offset_relative_to_viewport() {
        for viewport_height in [480.0, 720.0, 1080.0, 1440.0] {
            for step in 0..=20 {
                let offset = viewport_height * f64::from(step) / 10.0;
                let expected = offset > viewport_height * 0.8;
                assert_eq!(nav_visible(sample(offset, viewport_height)), expected);
            }
        }
    }

    #[test]
    fn scroll_past_threshold_and_back() {
        let viewport = FakeViewport::default();
        let visible = Rc::new(Cell::new(false));
        let sink = visible.clone();
        let _controller = ScrollNavController::mount(&viewport, move |value| sink.set(value));

        viewport.scroll_to(0.9 * 1000.0, 1000.0);
        assert!(visible.get());

        viewport.scroll_to(0.1 * 1000.0, 1000.0);
        assert!(!visible.get());
    }

    #[test]
    fn dithering_near_threshold_toggles_every_event() {
        let viewport = FakeViewport::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let _controller =
            ScrollNavController::mount(&viewport, move |value| sink.borrow_mut().push(value));

        for offset in [799.0, 801.0, 799.0, 801.0] {
            viewport.scroll_to(offset, 1000.0);
        }

        assert_eq!(*changes.borrow(), vec![false, true, false, true]);
    }

    #[test]
    fn teardown_releases_listener() {
        let viewport = FakeViewport::default();
        let mut controller = ScrollNavController::mount(&viewport, |_| {});
        assert_eq!(viewport.listener_count(), 1);

        controller.teardown();
        assert!(!controller.is_listening());
        assert_eq!(viewport.listener_count(), 0);

        controller.teardown();
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn drop_releases_listener_and_stops_updates() {
        let viewport = FakeViewport::default();
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();

        let controller = ScrollNavController::mount(&viewport, move |_| sink.set(sink.get() + 1));
        viewport.scroll_to(10.0, 1000.0);
        drop(controller);
        viewport.scroll_to(900.0, 1000.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn remount_keeps_a_single_listener() {
        let viewport = FakeViewport::default();

        let first = ScrollNavController::mount(&viewport, |_| {});
        drop(first);
        let _second = ScrollNavController::mount(&viewport, |_| {});

        assert_eq!(viewport.listener_count(), 1);
    }
}
