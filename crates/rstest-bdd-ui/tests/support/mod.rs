//! Scripted browser doubles shared by the step tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use rstest_bdd_assert::{ManualClock, PollConfig, Poller};
use rstest_bdd_ui::{BrowserDriver, DriverError, ListProbe};

/// Replays queued results; the final entry repeats once the queue drains.
#[derive(Debug)]
pub struct Script<T: Clone> {
    queue: RefCell<VecDeque<Result<T, DriverError>>>,
    reads: Cell<usize>,
}

impl<T: Clone> Script<T> {
    pub fn new(steps: impl IntoIterator<Item = Result<T, DriverError>>) -> Self {
        Self {
            queue: RefCell::new(steps.into_iter().collect()),
            reads: Cell::new(0),
        }
    }

    pub fn constant(value: T) -> Self {
        Self::new([Ok(value)])
    }

    pub fn set(&self, value: T) {
        *self.queue.borrow_mut() = VecDeque::from([Ok(value)]);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn next(&self) -> Result<T, DriverError> {
        self.reads.set(self.reads.get() + 1);
        let mut queue = self.queue.borrow_mut();
        if queue.len() > 1 {
            if let Some(head) = queue.pop_front() {
                return head;
            }
        }
        queue
            .front()
            .cloned()
            .unwrap_or_else(|| Err(DriverError::new("script exhausted")))
    }
}

/// Browser whose URL and title follow scripts.
#[derive(Debug)]
pub struct FakeBrowser {
    pub url: Script<String>,
    pub title: Script<Option<String>>,
    pub visited: RefCell<Vec<String>>,
    pub window: RefCell<Option<(u32, u32)>>,
    pub reject_navigation: bool,
}

impl FakeBrowser {
    pub fn at(url: &str) -> Self {
        Self {
            url: Script::constant(url.to_string()),
            title: Script::constant(None),
            visited: RefCell::new(Vec::new()),
            window: RefCell::new(None),
            reject_navigation: false,
        }
    }
}

impl BrowserDriver for FakeBrowser {
    fn navigate(&self, url: &str) -> Result<(), DriverError> {
        if self.reject_navigation {
            return Err(DriverError::new("navigation blocked"));
        }
        self.visited.borrow_mut().push(url.to_string());
        self.url.set(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Result<String, DriverError> {
        self.url.next()
    }

    fn title(&self) -> Result<Option<String>, DriverError> {
        self.title.next()
    }

    fn resize_window(&self, height: u32, width: u32) -> Result<(), DriverError> {
        *self.window.borrow_mut() = Some((height, width));
        Ok(())
    }
}

/// List element with scripted item texts.
#[derive(Debug)]
pub struct FakeList {
    pub caption: String,
    pub values: Script<Vec<String>>,
}

impl FakeList {
    pub fn new(
        caption: &str,
        steps: impl IntoIterator<Item = Result<Vec<String>, DriverError>>,
    ) -> Self {
        Self {
            caption: caption.to_string(),
            values: Script::new(steps),
        }
    }

    pub fn showing(caption: &str, items: &[&str]) -> Self {
        Self::new(caption, [Ok(strings(items))])
    }
}

impl ListProbe for FakeList {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn list_values(&self) -> Result<Vec<String>, DriverError> {
        self.values.next()
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Poller on virtual time: 1s deadline, 100ms interval.
pub fn manual_poller() -> Poller<ManualClock> {
    Poller::with_clock(
        PollConfig::new(Duration::from_secs(1), Duration::from_millis(100)),
        ManualClock::new(),
    )
}
