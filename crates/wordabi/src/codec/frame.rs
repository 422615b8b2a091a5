use crate::Error;

/// Borrows `count` words starting at `at`.
pub(crate) fn read(words: &[u64], at: usize, count: usize) -> Result<&[u64], Error> {
    let end = at.checked_add(count).ok_or(Error::TruncatedInput {
        needed: usize::MAX,
        available: words.len(),
    })?;

    words.get(at..end).ok_or(Error::TruncatedInput {
        needed: end,
        available: words.len(),
    })
}

pub(crate) fn read_word(words: &[u64], at: usize) -> Result<u64, Error> {
    read(words, at, 1).map(|slice| slice[0])
}

/// Reads a length prefix.
pub(crate) fn read_length(words: &[u64], at: usize) -> Result<usize, Error> {
    let word = read_word(words, at)?;
    usize::try_from(word).map_err(|_| Error::InvalidWord {
        ty: "length".to_string(),
        word,
    })
}

/// Reads a head slot holding the offset of a dynamic value inside `frame`.
///
/// An offset equal to the frame length is accepted: a dynamic value with no
/// words, such as `string[0]`, starts right at the end of its region.
pub(crate) fn read_offset(frame: &[u64], at: usize) -> Result<usize, Error> {
    let word = read_word(frame, at)?;
    match usize::try_from(word) {
        Ok(offset) if offset <= frame.len() => Ok(offset),
        _ => Err(Error::OffsetOutOfRange {
            offset: word,
            len: frame.len(),
        }),
    }
}

/// Total words taken by `count` items of `width` words each.
pub(crate) fn span(count: usize, width: usize) -> Result<usize, Error> {
    count.checked_mul(width).ok_or(Error::TruncatedInput {
        needed: usize::MAX,
        available: 0,
    })
}
