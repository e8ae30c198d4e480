use std::ops::Range;

/// Character cursor over the source being tokenized.
///
/// The cursor keeps the whole source around so that every position can be
/// turned into a byte offset, and remembers the position before the last
/// [`Input::read`] so that one character can be pushed back.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Input<'a> {
    /// Whole input being tokenized.
    ///
    /// This reference is never modified.
    input: &'a str,

    /// Cursor pointing to the string slice not yet consumed.
    ///
    /// This is a reference on the same slice as [`input`], updated
    /// as we go through the source.
    cursor: &'a str,

    /// Cursor saved before the last read character, if it can be unread.
    before_last_read: Option<&'a str>,
}

/// Position inside the input.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Position<'a> {
    cursor: &'a str,
}

impl<'a> Input<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: input,
            before_last_read: None,
        }
    }

    pub(crate) fn pos(&self) -> Position<'a> {
        Position {
            cursor: self.cursor,
        }
    }

    pub(crate) fn cursor(&self) -> &'a str {
        self.cursor
    }

    /// Consume the next character, or return `None` on end of input.
    pub(crate) fn read(&mut self) -> Option<char> {
        let c = self.cursor.chars().next()?;
        self.before_last_read = Some(self.cursor);
        self.cursor = &self.cursor[c.len_utf8()..];
        Some(c)
    }

    /// Put back the last read character.
    ///
    /// Only one character can be put back: calling this twice in a row, or
    /// after a read that hit the end of input, does nothing.
    pub(crate) fn unread(&mut self) {
        if let Some(cursor) = self.before_last_read.take() {
            self.cursor = cursor;
        }
    }

    /// Move the cursor to `rest`, which must be a suffix of the current cursor.
    ///
    /// This is used to resume after a nom parser applied on [`Input::cursor`].
    pub(crate) fn advance_to(&mut self, rest: &'a str) {
        let count = self.cursor.len() - rest.len();
        self.cursor = &self.cursor[count..];
        self.before_last_read = None;
    }

    /// Generate a span from a starting position to the current cursor.
    pub(crate) fn get_span_from(&self, start: Position) -> Range<usize> {
        let input = self.input.as_ptr() as usize;

        Range {
            start: start.cursor.as_ptr() as usize - input,
            end: self.cursor.as_ptr() as usize - input,
        }
    }

    /// Text consumed between a starting position and the current cursor.
    pub(crate) fn slice_from(&self, start: Position<'a>) -> &'a str {
        let len = start.cursor.len() - self.cursor.len();
        &start.cursor[..len]
    }
}
