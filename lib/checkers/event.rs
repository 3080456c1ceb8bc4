use derive_more::Display;
use tracing::info;

/// Something that happened in the game that a front-end may want to announce.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Event {
    #[display(fmt = "move")]
    Move,
    #[display(fmt = "capture")]
    Capture,
    #[display(fmt = "king")]
    King,
    #[display(fmt = "gameover")]
    GameOver,
    #[display(fmt = "invalid")]
    Invalid,
    #[display(fmt = "undo")]
    Undo,
    #[display(fmt = "redo")]
    Redo,
}

/// Trait for types that get told about [`Event`]s.
///
/// Notifications are delivered synchronously, implementations decide what to do with them.
#[cfg_attr(test, mockall::automock)]
pub trait Notify {
    /// Called once per [`Event`], in the order they happen.
    fn notify(&mut self, event: Event);
}

/// Ignores every [`Event`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mute;

impl Notify for Mute {
    fn notify(&mut self, _: Event) {}
}

/// Logs every [`Event`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trace;

impl Notify for Trace {
    fn notify(&mut self, event: Event) {
        info!(%event);
    }
}

/// Collects every [`Event`].
impl Notify for Vec<Event> {
    fn notify(&mut self, event: Event) {
        self.push(event);
    }
}

impl<N: Notify + ?Sized> Notify for &mut N {
    fn notify(&mut self, event: Event) {
        (**self).notify(event);
    }
}
