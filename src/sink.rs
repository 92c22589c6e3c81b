//! The byte-level output abstraction.
//!
//! A [`Cursor`] wraps exactly one destination — a bounded buffer or a
//! per-byte callback — and counts every byte the interpreter asks it to
//! emit, whether or not the byte actually lands anywhere.

/// The destination a [`Cursor`] writes into.
enum Dest<'a> {
    /// A fixed-capacity buffer; `buf.len()` is the declared capacity.
    Buffer(&'a mut [u8]),
    /// An unbounded per-byte callback (used for both the opaque-context
    /// callback façade and the host-putchar façade).
    Callback(&'a mut dyn FnMut(u8)),
}

/// Owns the write index for a single formatting call.
pub(crate) struct Cursor<'a> {
    dest: Dest<'a>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn for_buffer(buf: &'a mut [u8]) -> Self {
        Cursor {
            dest: Dest::Buffer(buf),
            index: 0,
        }
    }

    pub fn for_callback(f: &'a mut dyn FnMut(u8)) -> Self {
        Cursor {
            dest: Dest::Callback(f),
            index: 0,
        }
    }

    /// Emits one byte, writing it only if capacity allows, and always
    /// advancing the index.
    pub fn emit(&mut self, byte: u8) {
        match &mut self.dest {
            Dest::Buffer(buf) => {
                if self.index < buf.len() {
                    buf[self.index] = byte;
                }
            }
            Dest::Callback(f) => f(byte),
        }
        self.index += 1;
    }

    pub fn emit_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.emit(b);
        }
    }

    /// Consumes the cursor, NUL-terminating a buffer destination if it has
    /// room, and returns the notional byte count (excluding the NUL).
    pub fn finish(mut self) -> usize {
        if let Dest::Buffer(buf) = &mut self.dest {
            if !buf.is_empty() {
                let pos = self.index.min(buf.len() - 1);
                buf[pos] = 0;
            }
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_truncates_and_terminates() {
        let mut buf = [0xCCu8; 6];
        let mut cur = Cursor::for_buffer(&mut buf);
        cur.emit_all(b"1234567");
        let n = cur.finish();
        assert_eq!(n, 7);
        assert_eq!(&buf, b"12345\0");
    }

    #[test]
    fn zero_capacity_is_inert() {
        let mut buf: [u8; 0] = [];
        let mut cur = Cursor::for_buffer(&mut buf);
        cur.emit_all(b"abc");
        let n = cur.finish();
        assert_eq!(n, 3);
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn callback_is_unbounded() {
        let mut collected = std::vec::Vec::new();
        {
            let mut push = |b: u8| collected.push(b);
            let mut cur = Cursor::for_callback(&mut push);
            cur.emit_all(b"hello world, this is longer than any small buffer");
            cur.finish();
        }
        assert_eq!(collected.len(), 50);
    }
}
