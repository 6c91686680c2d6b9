//! Fixed-size pagination over an ordered question listing.

use crate::error::TriviaError;
use crate::model::Question;

/// Questions served per page unless configuration overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slice one page out of an ordered question listing.
///
/// Pages are 1-based. The slice is `[page_size * (page - 1), page_size * page)`
/// clipped to the sequence length. A page that lies beyond the data is a
/// not-found condition (`PageOutOfRange`), not a silently-empty success.
/// One carve-out: page 1 over an empty listing is an empty success.
///
/// Pure over its inputs; the caller supplies a point-in-time read from the
/// store.
pub fn paginate(
    questions: &[Question],
    page: usize,
    page_size: usize,
) -> Result<&[Question], TriviaError> {
    if page_size == 0 {
        return Err(TriviaError::Invalid("page size must be positive".into()));
    }
    if page == 0 {
        return Err(TriviaError::PageOutOfRange { page });
    }

    let start = page_size * (page - 1);
    if start >= questions.len() {
        if page == 1 {
            return Ok(&[]);
        }
        return Err(TriviaError::PageOutOfRange { page });
    }

    let end = (start + page_size).min(questions.len());
    Ok(&questions[start..end])
}

/// Number of pages a listing of `total` questions spans at `page_size`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
