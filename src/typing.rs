use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub const TYPED_ANCHOR_ID: &str = "typed";
pub const TYPED_CURSOR: &str = "|";

pub const HERO_ROLES: &[&str] = &["Software Developer", "UI Engineer", "Aspiring Programmer"];

pub const HERO_TYPING: TypingConfig = TypingConfig {
    strings: HERO_ROLES,
    type_speed_ms: 60,
    back_speed_ms: 40,
    back_delay_ms: 1_000,
    looped: true,
    smart_backspace: true,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub strings: &'static [&'static str],
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    pub back_delay_ms: u32,
    pub looped: bool,
    /// Erase only down to the prefix shared with the next string.
    pub smart_backspace: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Delay before the next tick; `None` once the animation has settled.
    pub next_delay_ms: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
    Finished,
}

pub struct Typewriter {
    config: TypingConfig,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(config: TypingConfig) -> Self {
        let phase = if config.strings.is_empty() {
            Phase::Finished
        } else {
            Phase::Typing
        };

        Self {
            config,
            index: 0,
            visible: 0,
            phase,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn tick(&mut self) -> Frame {
        let next_delay_ms = match self.phase {
            Phase::Finished => None,
            Phase::Typing => {
                let len = self.current().chars().count();
                if self.visible < len {
                    self.visible += 1;
                }

                if self.visible < len {
                    Some(self.config.type_speed_ms)
                } else if self.is_last() && !self.config.looped {
                    self.phase = Phase::Finished;
                    None
                } else {
                    self.phase = Phase::Erasing;
                    Some(self.config.back_delay_ms)
                }
            }
            Phase::Erasing => {
                let floor = self.erase_floor();
                if self.visible > floor {
                    self.visible -= 1;
                }

                if self.visible > floor {
                    Some(self.config.back_speed_ms)
                } else {
                    self.index = (self.index + 1) % self.config.strings.len();
                    self.phase = Phase::Typing;
                    Some(self.config.type_speed_ms)
                }
            }
        };

        Frame {
            text: self.current().chars().take(self.visible).collect(),
            next_delay_ms,
        }
    }

    fn current(&self) -> &'static str {
        self.config.strings.get(self.index).copied().unwrap_or_default()
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.config.strings.len()
    }

    // Wrapping back to the first string always erases fully.
    fn erase_floor(&self) -> usize {
        if !self.config.smart_backspace || self.is_last() {
            return 0;
        }

        let next = self.config.strings[self.index + 1];
        self.current()
            .chars()
            .zip(next.chars())
            .take_while(|(left, right)| left == right)
            .count()
    }
}

/// The element and clock a typing session draws on.
pub trait TypingHost: 'static {
    type Timer: 'static;

    fn render(&self, text: &str);
    fn schedule(&self, delay_ms: u32, tick: Box<dyn FnOnce()>) -> Self::Timer;
    fn cancel(&self, timer: Self::Timer);
    /// Called once when the session is destroyed.
    fn clear(&self);
}

struct SessionState<H: TypingHost> {
    host: H,
    typewriter: Typewriter,
    pending: Option<H::Timer>,
    destroyed: bool,
}

pub struct TypingSession<H: TypingHost> {
    state: Rc<RefCell<SessionState<H>>>,
}

impl<H: TypingHost> TypingSession<H> {
    pub fn start(host: H, config: TypingConfig) -> Self {
        let state = Rc::new(RefCell::new(SessionState {
            host,
            typewriter: Typewriter::new(config),
            pending: None,
            destroyed: false,
        }));
        advance(&state);
        log::debug!("typing session started");

        Self { state }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        !self.state.borrow().destroyed
    }

    pub fn destroy(&self) {
        let mut state = self.state.borrow_mut();
        if state.destroyed {
            return;
        }
        state.destroyed = true;

        if let Some(timer) = state.pending.take() {
            state.host.cancel(timer);
        }
        state.host.clear();
        log::debug!("typing session destroyed");
    }
}

impl<H: TypingHost> Drop for TypingSession<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn advance<H: TypingHost>(state: &Rc<RefCell<SessionState<H>>>) {
    let weak: Weak<RefCell<SessionState<H>>> = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    if guard.destroyed {
        return;
    }

    let frame = guard.typewriter.tick();
    guard.host.render(&frame.text);
    if guard.typewriter.is_finished() {
        log::debug!("typing settled on {:?}", frame.text);
    }

    let pending = frame.next_delay_ms.map(|delay_ms| {
        guard.host.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(state) = weak.upgrade() {
                    advance(&state);
                }
            }),
        )
    });
    guard.pending = pending;
}

pub struct TypedTextController<H: TypingHost> {
    session: Option<TypingSession<H>>,
}

impl<H: TypingHost> TypedTextController<H> {
    /// A missing anchor is a no-op: nothing starts and nothing is held.
    pub fn mount(anchor: Option<H>, config: TypingConfig) -> Self {
        if anchor.is_none() {
            log::debug!("typing anchor missing, skipping animation");
        }

        Self {
            session: anchor.map(|host| TypingSession::start(host, config)),
        }
    }

    #[cfg(test)]
    pub fn is_typing(&self) -> bool {
        self.session.as_ref().is_some_and(TypingSession::is_active)
    }

    pub fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            session.destroy();
        }
    }
}

impl<H: TypingHost> Drop for TypedTextController<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
