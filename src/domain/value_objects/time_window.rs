use chrono::{DateTime, Duration, Utc};

/// Length of one request window
pub const CHUNK_MILLIS: i64 = 86_400_000;

/// Half-open span of time `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Returns `None` when the end of the last day-long chunk, which may lie
    /// past `end`, cannot be represented.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        let window = TimeWindow { start, end };
        window.last_chunk_end()?;
        Some(window)
    }

    /// Build a window from epoch milliseconds
    ///
    /// Returns `None` when either bound, or the end of the last chunk, is
    /// outside chrono's representable range.
    pub fn from_millis(start_ms: i64, end_ms: i64) -> Option<Self> {
        TimeWindow::new(
            DateTime::from_timestamp_millis(start_ms)?,
            DateTime::from_timestamp_millis(end_ms)?,
        )
    }

    /// End of the final chunk; `start` itself for an empty window
    fn last_chunk_end(&self) -> Option<DateTime<Utc>> {
        if self.is_empty() {
            return Some(self.start);
        }
        let span = (self.end - self.start).num_milliseconds();
        let chunks = span.checked_add(CHUNK_MILLIS - 1)? / CHUNK_MILLIS;
        let millis = chunks.checked_mul(CHUNK_MILLIS)?;
        self.start
            .checked_add_signed(Duration::try_milliseconds(millis)?)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Day-long sub-windows covering the whole span, in order.
    ///
    /// The last chunk is not truncated at `end` and may extend past it.
    /// Every chunk end is representable because the constructors check the
    /// last one.
    pub fn chunks(&self) -> Chunks {
        Chunks {
            cursor: self.start,
            end: self.end,
        }
    }
}

/// Iterator over the day-long chunks of a [`TimeWindow`]
#[derive(Debug, Clone)]
pub struct Chunks {
    cursor: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Iterator for Chunks {
    type Item = TimeWindow;

    fn next(&mut self) -> Option<TimeWindow> {
        if self.cursor >= self.end {
            return None;
        }
        let next = self
            .cursor
            .checked_add_signed(Duration::milliseconds(CHUNK_MILLIS))?;
        let chunk = TimeWindow {
            start: self.cursor,
            end: next,
        };
        self.cursor = next;
        Some(chunk)
    }
}
