//! Reusable, bounded scratch space that log lines are rendered into.

use std::fmt::{self, Write as _};

/// Smallest capacity a buffer may have.
pub const MIN_BUFFER_SIZE: usize = 1024;

/// Fixed-capacity byte buffer. Writes that would exceed the capacity fail with
/// `Error::BufferOverflow` and leave the previous contents in place.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl LineBuffer {
    /// Allocates a zero-filled buffer. `capacity` is raised to `MIN_BUFFER_SIZE`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; clamp_size(capacity)],
            len: 0,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rendered bytes since the last `clear`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub fn ends_with_newline(&self) -> bool {
        self.as_bytes().last() == Some(&b'\n')
    }

    /// Zeroes the used region and resets the length.
    pub fn clear(&mut self) {
        self.bytes[..self.len].fill(0);
        self.len = 0;
    }

    /// Changes the capacity, keeping content up to the smaller of the two sizes.
    pub fn resize(&mut self, capacity: usize) {
        let capacity = clamp_size(capacity);
        self.bytes.resize(capacity, 0);
        self.len = self.len.min(capacity);
    }

    /// Appends `s` in full or not at all.
    ///
    /// # Errors
    /// `Error::BufferOverflow` if `s` does not fit the remaining space.
    pub fn push_str(&mut self, s: &str) -> Result<(), crate::Error> {
        let needed = self.len + s.len();
        if needed > self.capacity() {
            return Err(crate::Error::BufferOverflow {
                needed,
                capacity: self.capacity(),
            });
        }
        self.bytes[self.len..needed].copy_from_slice(s.as_bytes());
        self.len = needed;
        Ok(())
    }

    /// Renders `args` after the current content.
    ///
    /// # Errors
    /// `Error::BufferOverflow` carrying the full length the output would need.
    /// The buffer is rolled back to its prior content.
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), crate::Error> {
        let start = self.len;
        let mut sink = BoundedWriter {
            buf: &mut *self,
            needed: start,
            overflowed: false,
        };
        // BoundedWriter never reports fmt::Error; a Display impl that does is ignored.
        let _ = sink.write_fmt(args);
        let (needed, overflowed) = (sink.needed, sink.overflowed);

        if overflowed {
            self.bytes[start..self.len].fill(0);
            self.len = start;
            return Err(crate::Error::BufferOverflow {
                needed,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Adds a trailing newline unless one is already there.
    ///
    /// # Errors
    /// `Error::BufferOverflow` when the buffer is full.
    pub fn ensure_newline(&mut self) -> Result<(), crate::Error> {
        if self.ends_with_newline() {
            Ok(())
        } else {
            self.push_str("\n")
        }
    }
}

/// Clamps a requested size to the minimum.
#[must_use]
pub const fn clamp_size(size: usize) -> usize {
    if size > MIN_BUFFER_SIZE {
        size
    } else {
        MIN_BUFFER_SIZE
    }
}

/// Copies while the output fits and keeps counting after it stops fitting.
struct BoundedWriter<'a> {
    buf: &'a mut LineBuffer,
    needed: usize,
    overflowed: bool,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.needed += s.len();
        if !self.overflowed {
            let end = self.buf.len + s.len();
            if end > self.buf.capacity() {
                self.overflowed = true;
            } else {
                self.buf.bytes[self.buf.len..end].copy_from_slice(s.as_bytes());
                self.buf.len = end;
            }
        }
        Ok(())
    }
}
