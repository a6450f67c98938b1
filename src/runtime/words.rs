//! Reinterpret payload bytes as little-endian words
//!
//! Hardware command buffers are usually filled word by word. These helpers
//! copy a payload into a `Vec` of integers without any unsafe casts.

/// Fixed-width unsigned integer that can be read from little-endian bytes
pub trait Word: Copy {
    const SIZE: usize;

    /// Build a word from exactly `SIZE` bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Word for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);

/// Copy `bytes` into `out` as words
///
/// Without `append`, `out` is replaced by the whole words of `bytes` and any
/// trailing partial word is dropped. With `append`, the words are pushed
/// after the existing contents and a trailing partial word is zero-padded.
pub fn extend_words<T: Word>(bytes: &[u8], out: &mut Vec<T>, append: bool) {
    if !append {
        out.clear();
    }

    let mut chunks = bytes.chunks_exact(T::SIZE);
    out.reserve(bytes.len().div_ceil(T::SIZE));
    out.extend(chunks.by_ref().map(T::from_le_slice));

    let tail = chunks.remainder();
    if append && !tail.is_empty() {
        let mut padded = [0u8; 8];
        padded[..tail.len()].copy_from_slice(tail);
        out.push(T::from_le_slice(&padded[..T::SIZE]));
    }
}

/// Words of `bytes`, dropping a trailing partial word
pub fn to_words<T: Word>(bytes: &[u8]) -> Vec<T> {
    let mut out = Vec::new();
    extend_words(bytes, &mut out, false);
    out
}
