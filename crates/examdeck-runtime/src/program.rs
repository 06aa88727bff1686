#![forbid(unsafe_code)]

//! The update/view loop.
//!
//! A [`Model`] owns all application state. Terminal events and subscription
//! messages are converted into the model's message type and fed through
//! [`Model::update`]; each handler runs to completion before the next one,
//! so there is nothing to lock. After every batch of work the screen is
//! repainted from scratch.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

pub use crossterm::event::Event;

use crate::error::Result;
use crate::subscription::{Subscription, SubscriptionSet};

/// Application state and behavior.
pub trait Model: Sized {
    /// The message type driving this model. Terminal events are wrapped
    /// into it by the loop.
    type Message: From<Event> + Send + 'static;

    /// One-time startup work. Runs before any subscription starts.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::None
    }

    /// Handle one message. The returned command is applied immediately.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// The recurring message sources this model wants. Started once, after
    /// `init`, and stopped when the program ends.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        Vec::new()
    }

    /// Paint the current state. The screen is cleared before this is called.
    fn view(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Side effects a handler can request.
#[derive(Debug)]
pub enum Cmd<M> {
    /// Nothing.
    None,
    /// End the program.
    Quit,
    /// Feed another message through `update`.
    Msg(M),
    /// Apply several commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M> Cmd<M> {
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    #[must_use]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    #[must_use]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[must_use]
    pub fn batch(cmds: Vec<Self>) -> Self {
        if cmds.is_empty() {
            Self::None
        } else {
            Self::Batch(cmds)
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

/// Loop tuning.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// How long one pass waits for a terminal event before checking the
    /// subscription channel again.
    pub poll_timeout: Duration,
    /// Run on the alternate screen (restored on exit).
    pub alt_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            alt_screen: true,
        }
    }
}

/// Raw-mode/alternate-screen session, restored on drop so the terminal is
/// sane again even when the loop errors out.
struct TerminalGuard {
    alt_screen: bool,
}

impl TerminalGuard {
    fn enter(alt_screen: bool) -> Result<Self> {
        enable_raw_mode()?;
        if alt_screen {
            execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        }
        Ok(Self { alt_screen })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alt_screen {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
    }
}

/// Drives a [`Model`] against the real terminal.
pub struct Program<M: Model> {
    model: M,
    subs: SubscriptionSet<M::Message>,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    #[must_use]
    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        Self {
            model,
            subs: SubscriptionSet::new(),
            config,
        }
    }

    /// Run until a handler returns [`Cmd::Quit`].
    pub fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::enter(self.config.alt_screen)?;
        let mut out = io::BufWriter::new(io::stdout());

        let first = self.model.init();
        if self.apply(first) {
            return Ok(());
        }
        self.subs.start(self.model.subscriptions());
        self.render(&mut out)?;

        loop {
            let mut dirty = false;

            for msg in self.subs.drain() {
                dirty = true;
                let cmd = self.model.update(msg);
                if self.apply(cmd) {
                    return Ok(());
                }
            }

            if crossterm::event::poll(self.config.poll_timeout)? {
                let event = crossterm::event::read()?;
                dirty = true;
                let cmd = self.model.update(M::Message::from(event));
                if self.apply(cmd) {
                    return Ok(());
                }
            }

            if dirty {
                self.render(&mut out)?;
            }
        }
    }

    /// Apply a command; `true` means quit.
    fn apply(&mut self, cmd: Cmd<M::Message>) -> bool {
        match cmd {
            Cmd::None => false,
            Cmd::Quit => true,
            Cmd::Msg(m) => {
                let next = self.model.update(m);
                self.apply(next)
            }
            Cmd::Batch(cmds) => {
                for c in cmds {
                    if self.apply(c) {
                        return true;
                    }
                }
                false
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.model.view(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        count: i32,
    }

    enum Msg {
        Add(i32),
        Stop,
        Ignored,
    }

    impl From<Event> for Msg {
        fn from(_: Event) -> Self {
            Msg::Ignored
        }
    }

    impl Model for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Msg) -> Cmd<Msg> {
            match msg {
                Msg::Add(n) => {
                    self.count += n;
                    Cmd::None
                }
                Msg::Stop => Cmd::Quit,
                Msg::Ignored => Cmd::None,
            }
        }

        fn view(&self, out: &mut dyn Write) -> io::Result<()> {
            write!(out, "{}", self.count)
        }
    }

    fn program() -> Program<Counter> {
        Program::new(Counter { count: 0 })
    }

    #[test]
    fn msg_command_feeds_back_through_update() {
        let mut p = program();
        assert!(!p.apply(Cmd::Msg(Msg::Add(3))));
        assert_eq!(p.model.count, 3);
    }

    #[test]
    fn batch_applies_in_order_and_stops_at_quit() {
        let mut p = program();
        let quit = p.apply(Cmd::Batch(vec![
            Cmd::Msg(Msg::Add(1)),
            Cmd::Quit,
            Cmd::Msg(Msg::Add(10)),
        ]));
        assert!(quit);
        assert_eq!(p.model.count, 1, "commands after quit must not run");
    }

    #[test]
    fn empty_batch_collapses_to_none() {
        assert!(matches!(Cmd::<Msg>::batch(Vec::new()), Cmd::None));
    }

    #[test]
    fn view_writes_current_state() {
        let mut p = program();
        let _ = p.apply(Cmd::Msg(Msg::Add(7)));
        let mut buf = Vec::new();
        p.model.view(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "7");
    }
}
