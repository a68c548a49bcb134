//! Single-range `Range: bytes=...` handling.

/// An inclusive byte range within a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte offset.
    pub start: u64,
    /// Last byte offset (inclusive).
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes in the range.
    pub fn byte_count(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for a file of `size` bytes.
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

/// How a request's `Range` header applies to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDecision {
    /// Send the whole file.
    Full,
    /// Send one slice with `206 Partial Content`.
    Partial(ByteRange),
    /// Reply `416 Range Not Satisfiable`.
    Unsatisfiable,
}

impl RangeDecision {
    /// Evaluate a `Range` header against a file size.
    ///
    /// Headers that are absent, malformed, use another unit or ask for
    /// several ranges are ignored and the full file is sent.
    pub fn evaluate(header: Option<&str>, size: u64) -> Self {
        let Some(set) = header.and_then(|h| h.trim().strip_prefix("bytes=")) else {
            return Self::Full;
        };
        if set.contains(',') {
            return Self::Full;
        }
        let Some((start_part, end_part)) = set.split_once('-') else {
            return Self::Full;
        };
        let (start_part, end_part) = (start_part.trim(), end_part.trim());

        if start_part.is_empty() {
            let Ok(suffix) = end_part.parse::<u64>() else {
                return Self::Full;
            };
            if suffix == 0 || size == 0 {
                return Self::Unsatisfiable;
            }
            return Self::Partial(ByteRange {
                start: size.saturating_sub(suffix),
                end: size - 1,
            });
        }

        let Ok(start) = start_part.parse::<u64>() else {
            return Self::Full;
        };
        let end = if end_part.is_empty() {
            None
        } else {
            match end_part.parse::<u64>() {
                Ok(end) if end >= start => Some(end),
                _ => return Self::Full,
            }
        };

        if start >= size {
            return Self::Unsatisfiable;
        }
        let last = size - 1;
        Self::Partial(ByteRange {
            start,
            end: end.map_or(last, |e| e.min(last)),
        })
    }
}
