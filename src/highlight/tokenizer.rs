//! Tokenizer: applies a language's patterns over input text

use log::trace;

use super::{Language, Segment, Span, Token};

/// Splits input into tokens and plain text using a language's patterns
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    language: &'a Language,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer for a language
    #[must_use]
    pub const fn new(language: &'a Language) -> Self {
        Self { language }
    }

    /// Tokenize input into segments covering it with no gaps or overlaps
    ///
    /// The input is walked left to right. Each pattern keeps its next
    /// candidate at or after the current position; the earliest candidate
    /// wins, ties going to the pattern tried first. A candidate left behind
    /// by a consumed token is searched again from the current position.
    /// Text no candidate claims becomes plain, coalesced into runs.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Segment> {
        let patterns = self.language.patterns();
        let mut next: Vec<Option<Token>> =
            patterns.iter().map(|pattern| pattern.find_at(input, 0)).collect();

        let mut segments = Vec::new();
        let mut pos = 0;

        loop {
            for (candidate, pattern) in next.iter_mut().zip(patterns) {
                if candidate.as_ref().is_some_and(|token| token.span.start < pos) {
                    *candidate = pattern.find_at(input, pos);
                }
            }

            // Patterns are already in priority order, so rank breaks ties at a position
            let best = next
                .iter()
                .enumerate()
                .filter_map(|(rank, candidate)| {
                    candidate.as_ref().map(|token| (token.span.start, rank))
                })
                .min();
            let Some((start, rank)) = best else {
                break;
            };
            let Some(token) = next[rank].take() else {
                break;
            };

            if start > pos {
                segments.push(plain(input, pos, start));
            }

            pos = token.span.end;
            segments.push(Segment::Token(token));
            next[rank] = patterns[rank].find_at(input, pos);
        }

        if pos < input.len() {
            segments.push(plain(input, pos, input.len()));
        }

        trace!(
            "tokenized {} byte(s) of {} into {} segment(s)",
            input.len(),
            self.language.name(),
            segments.len()
        );

        segments
    }
}

fn plain(input: &str, start: usize, end: usize) -> Segment {
    Segment::Plain {
        text: input[start..end].to_string(),
        span: Span::new(start, end),
    }
}
