// src/domain/post/read_time.rs
use crate::domain::post::entity::ContentBlock;

/// Assumed reading speed in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes, rounded up.
///
/// Counts whitespace-separated tokens across every block heading and the
/// plain-text rendering of every body node, in document order. Pure: the
/// same content always yields the same estimate. Empty content yields 0.
pub fn read_time_minutes(blocks: &[ContentBlock]) -> u32 {
    let words: usize = blocks
        .iter()
        .map(|block| {
            block.heading.split_whitespace().count()
                + block
                    .body
                    .iter()
                    .map(|node| node.plain_text().split_whitespace().count())
                    .sum::<usize>()
        })
        .sum();

    u32::try_from(words.div_ceil(WORDS_PER_MINUTE)).unwrap_or(u32::MAX)
}
