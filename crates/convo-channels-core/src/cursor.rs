//! Normalizes cursor position on load completion.
//!
//! Loaders hand finished cursors to their callbacks at whatever read
//! position they happen to be in. [`NormalizedLoadCallbacks`] sits between
//! the loader and the consumer and guarantees the postcondition:
//!
//! * data present: the consumer receives it positioned before the first row
//!   (position [`BEFORE_FIRST_ROW`]), so the first `move_to_next` lands on row 0;
//! * data absent: the consumer receives `None` and no cursor call is made.
//!
//! Only completion is intercepted. The cursor is lent for the duration of the
//! callback and cannot be retained past it.

/// Canonical position of a freshly iterable cursor.
pub const BEFORE_FIRST_ROW: i64 = -1;

/// Read position over a sequence of rows.
pub trait RowCursor {
    fn count(&self) -> usize;

    /// Current position; `-1` before the first row, `count()` after the last.
    fn position(&self) -> i64;

    /// Move to `position`, returning whether it now points at a row.
    /// Out-of-range targets are clamped to before-first / after-last.
    fn move_to_position(&mut self, position: i64) -> bool;

    fn move_to_next(&mut self) -> bool {
        let next = self.position() + 1;
        self.move_to_position(next)
    }
}

/// Identifies which load request completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderHandle {
    pub id: u32,
}

/// Raw loader-facing callbacks.
pub trait LoadCallbacks {
    fn on_load_finished(&mut self, loader: LoaderHandle, data: Option<&mut dyn RowCursor>);

    fn on_loader_reset(&mut self, _loader: LoaderHandle) {}
}

/// Consumer of normalized load results.
pub trait LoadConsumer {
    /// `data`, when present, is positioned before its first row.
    fn on_load_finish(&mut self, loader: LoaderHandle, data: Option<&mut dyn RowCursor>);

    fn on_loader_reset(&mut self, _loader: LoaderHandle) {}
}

/// Rewind `data` to [`BEFORE_FIRST_ROW`]; absent data passes through untouched.
pub fn rewind(data: Option<&mut dyn RowCursor>) -> Option<&mut dyn RowCursor> {
    data.map(|cursor| {
        cursor.move_to_position(BEFORE_FIRST_ROW);
        cursor
    })
}

/// Adapts a [`LoadConsumer`] to the loader's [`LoadCallbacks`].
pub struct NormalizedLoadCallbacks<C> {
    consumer: C,
}

impl<C: LoadConsumer> NormalizedLoadCallbacks<C> {
    pub fn new(consumer: C) -> Self {
        Self { consumer }
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    pub fn into_inner(self) -> C {
        self.consumer
    }
}

impl<C: LoadConsumer> LoadCallbacks for NormalizedLoadCallbacks<C> {
    fn on_load_finished(&mut self, loader: LoaderHandle, data: Option<&mut dyn RowCursor>) {
        self.consumer.on_load_finish(loader, rewind(data));
    }

    fn on_loader_reset(&mut self, loader: LoaderHandle) {
        self.consumer.on_loader_reset(loader);
    }
}

/// In-memory cursor over owned rows.
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    rows: Vec<T>,
    position: i64,
}

impl<T> VecCursor<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows,
            position: BEFORE_FIRST_ROW,
        }
    }

    /// Row under the cursor, if it points at one.
    pub fn current(&self) -> Option<&T> {
        usize::try_from(self.position)
            .ok()
            .and_then(|i| self.rows.get(i))
    }
}

impl<T> RowCursor for VecCursor<T> {
    fn count(&self) -> usize {
        self.rows.len()
    }

    fn position(&self) -> i64 {
        self.position
    }

    fn move_to_position(&mut self, position: i64) -> bool {
        let after_last = self.rows.len() as i64;
        self.position = position.clamp(BEFORE_FIRST_ROW, after_last);
        self.position >= 0 && self.position < after_last
    }
}
