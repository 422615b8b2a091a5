use crate::codec::{frame, sealed::Decoder, AbiType, Codec};
use crate::{Value, Error};

/// An encoded item waiting to be placed in a head/tail region.
pub(crate) struct Chunk {
    pub dynamic: bool,
    pub words: Vec<u64>,
}

/// Lays out `chunks` as one region.
///
/// Static chunks go inline in the head. Each dynamic chunk gets a one-word
/// head slot holding its offset from the start of the region, and its words
/// are appended to the tail in order.
pub(crate) fn encode(chunks: Vec<Chunk>) -> Vec<u64> {
    let head_size: usize = chunks.iter()
        .map(|chunk| if chunk.dynamic { 1 } else { chunk.words.len() })
        .sum();
    let tail_size: usize = chunks.iter()
        .filter(|chunk| chunk.dynamic)
        .map(|chunk| chunk.words.len())
        .sum();

    let mut head = Vec::with_capacity(head_size + tail_size);
    let mut tail = Vec::with_capacity(tail_size);

    for chunk in chunks {
        if chunk.dynamic {
            head.push((head_size + tail.len()) as u64);
            tail.extend(chunk.words);
        } else {
            head.extend(chunk.words);
        }
    }

    head.extend(tail);
    head
}

/// Decodes one item per codec from the region starting at `offset`.
///
/// `head_size` is the sum of the codecs' head widths; the whole head must be
/// present before anything is decoded.
pub(crate) fn decode<'a, I>(codecs: I, head_size: usize, words: &[u64], offset: usize) -> Result<Vec<Value>, Error>
where
    I: IntoIterator<Item = &'a Box<dyn Codec>>,
{
    frame::read(words, offset, head_size)?;
    let region = &words[offset..];

    let mut values = Vec::new();
    let mut cursor = 0;
    for codec in codecs {
        let value = if codec.is_dynamic() {
            let base = frame::read_offset(region, cursor)?;
            codec.decode_frame(region, base)?
        } else {
            codec.decode_frame(region, cursor)?
        };

        values.push(value);
        cursor += codec.head_width();
    }

    Ok(values)
}
