/// Receives a notification for every cell write the board performs.
///
/// Both methods are invoked synchronously from inside the mutating call,
/// before the new value is stored, and are never batched or deferred. A
/// display layer can therefore mirror the board without ever re-reading it.
///
/// The two methods are observably different events: a toggle flips a cell
/// by identity, a set assigns an explicit value. `on_set` also fires when
/// the assigned value equals the stored one, which lets callers force a
/// display refresh by re-setting a cell.
pub trait BoardObserver {
    fn on_toggle(&mut self, x: usize, y: usize);

    fn on_set(&mut self, x: usize, y: usize, alive: bool);
}

/// Observer that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl BoardObserver for NullObserver {
    fn on_toggle(&mut self, _x: usize, _y: usize) {}

    fn on_set(&mut self, _x: usize, _y: usize, _alive: bool) {}
}
