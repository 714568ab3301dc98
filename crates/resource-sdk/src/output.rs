//! # Deferred Outputs
//!
//! Provider-produced values are unknown at registration time. Each output
//! field is a write-once cell: the proxy hands back a readable [`Output`]
//! immediately and the resolver task fills it when the provider answers.
//!
//! # Resolution Model
//! Cells are written at most once. Reading before resolution is permitted
//! and yields a not-yet-available state, not an error; callers compose with
//! other pending values or await [`Output::resolved`]. A remote failure
//! fails the whole resource, so every cell of that resource carries the
//! same opaque reason.

use crate::error::RegistrationError;
use tokio::sync::watch;

#[derive(Debug, Clone)]
enum CellState<T> {
    Pending,
    Resolved(T),
    Failed(String),
}

/// Read side of a deferred output field.
///
/// Cloning is cheap; every clone observes the same resolution.
#[derive(Debug, Clone)]
pub struct Output<T> {
    rx: watch::Receiver<CellState<T>>,
}

/// Write side of a deferred output field.
///
/// [`resolve`](Self::resolve) and [`fail`](Self::fail) consume the slot, so
/// a cell is written at most once. Dropping an unresolved slot makes readers
/// observe a dropped responder.
#[derive(Debug)]
pub struct OutputSlot<T> {
    tx: watch::Sender<CellState<T>>,
}

/// Create an unresolved output cell.
pub fn pending<T>() -> (OutputSlot<T>, Output<T>) {
    let (tx, rx) = watch::channel(CellState::Pending);
    (OutputSlot { tx }, Output { rx })
}

impl<T> Output<T> {
    /// An output that is already resolved.
    pub fn ready(value: T) -> Self {
        let (tx, rx) = watch::channel(CellState::Resolved(value));
        drop(tx);
        Self { rx }
    }

    /// Whether the provider has not answered yet.
    pub fn is_pending(&self) -> bool {
        matches!(&*self.rx.borrow(), CellState::Pending)
    }
}

impl<T: Clone> Output<T> {
    /// Non-blocking read. `None` until the cell is resolved; never an error.
    pub fn try_get(&self) -> Option<T> {
        match &*self.rx.borrow() {
            CellState::Resolved(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Wait for the cell to leave the pending state.
    pub async fn resolved(&self) -> Result<T, RegistrationError> {
        let mut rx = self.rx.clone();
        loop {
            {
                match &*rx.borrow_and_update() {
                    CellState::Resolved(value) => return Ok(value.clone()),
                    CellState::Failed(reason) => {
                        return Err(RegistrationError::Provider(reason.clone()))
                    }
                    CellState::Pending => {}
                }
            }
            rx.changed()
                .await
                .map_err(|_| RegistrationError::EngineDropped)?;
        }
    }
}

impl<T> OutputSlot<T> {
    /// Fill the cell with the provider's value.
    pub fn resolve(self, value: T) {
        let _ = self.tx.send(CellState::Resolved(value));
    }

    /// Mark the cell failed with the provider's opaque reason.
    pub fn fail(self, reason: impl Into<String>) {
        let _ = self.tx.send(CellState::Failed(reason.into()));
    }
}
