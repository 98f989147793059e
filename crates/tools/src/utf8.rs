//! Incremental UTF-8 decoding for documents that arrive in byte chunks.
//!
//! A multi-byte character may be split across two chunks; the decoder keeps
//! the incomplete suffix until the next chunk completes it. Invalid sequences
//! decode to U+FFFD and decoding always makes forward progress.

const REPLACEMENT: char = '\u{FFFD}';

#[derive(Debug, Default)]
pub struct Utf8Decoder {
    text: String,
    // Incomplete trailing sequence from the previous chunk (at most 3 bytes).
    carry: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text decoded so far. Bytes still held in the carry are not included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pending_bytes(&self) -> &[u8] {
        &self.carry
    }

    pub fn push(&mut self, bytes: &[u8]) {
        let mut rest = bytes;

        while !self.carry.is_empty() && !rest.is_empty() {
            let expected = sequence_len(self.carry[0]);
            if expected == 0 {
                self.text.push(REPLACEMENT);
                self.carry.clear();
                break;
            }

            let missing = expected.saturating_sub(self.carry.len());
            let take = missing.min(rest.len());
            let mut scratch = [0u8; 4];
            let held = self.carry.len();
            scratch[..held].copy_from_slice(&self.carry);
            scratch[held..held + take].copy_from_slice(&rest[..take]);
            self.carry.clear();
            rest = &rest[take..];

            if take < missing {
                self.carry.extend_from_slice(&scratch[..held + take]);
                return;
            }
            decode_into(&mut self.text, &mut self.carry, &scratch[..held + take]);
        }

        if !rest.is_empty() {
            decode_into(&mut self.text, &mut self.carry, rest);
        }
    }

    /// Flush the carry lossily and hand back the decoded text.
    pub fn finish(mut self) -> String {
        if !self.carry.is_empty() {
            self.text.push_str(&String::from_utf8_lossy(&self.carry));
        }
        self.text
    }
}

fn sequence_len(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

fn decode_into(text: &mut String, carry: &mut Vec<u8>, mut bytes: &[u8]) {
    loop {
        match std::str::from_utf8(bytes) {
            Ok(s) => {
                text.push_str(s);
                return;
            }
            Err(err) => {
                let (valid, tail) = bytes.split_at(err.valid_up_to());
                if let Ok(prefix) = std::str::from_utf8(valid) {
                    text.push_str(prefix);
                }
                match err.error_len() {
                    Some(len) => {
                        text.push(REPLACEMENT);
                        bytes = &tail[len..];
                    }
                    None => {
                        carry.extend_from_slice(tail);
                        return;
                    }
                }
            }
        }
    }
}
