//! Decoder configuration.

/// How fixed-width reads behave when they run past the end of the
/// stream.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum ReadMode {
    /// Short reads yield zero.  Truncated files decode as far as the
    /// data goes, the way Animator-era players behaved.
    Lenient,

    /// Short reads fail with `FlicError::UnexpectedEof`.
    Strict,
}

impl Default for ReadMode {
    fn default() -> Self {
        ReadMode::Lenient
    }
}

/// Options for a decoding session.
///
/// # Examples
///
/// ```
/// use flicread::{DecoderOptions,ReadMode};
///
/// let opts = DecoderOptions::default()
///     .read_mode(ReadMode::Strict)
///     .skip_prefix_chunk(false);
/// assert_eq!(opts.get_read_mode(), ReadMode::Strict);
/// ```
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub struct DecoderOptions {
    read_mode: ReadMode,
    skip_prefix_chunk: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            read_mode: ReadMode::Lenient,
            skip_prefix_chunk: true,
        }
    }
}

impl DecoderOptions {
    /// Set the short read behaviour.
    pub fn read_mode(mut self, mode: ReadMode) -> Self {
        self.read_mode = mode;
        self
    }

    /// If set, an Animator Pro prefix chunk found in place of the
    /// first frame is skipped.  Otherwise it is reported as a bad
    /// frame magic.
    pub fn skip_prefix_chunk(mut self, skip: bool) -> Self {
        self.skip_prefix_chunk = skip;
        self
    }

    pub fn get_read_mode(&self) -> ReadMode {
        self.read_mode
    }

    pub fn get_skip_prefix_chunk(&self) -> bool {
        self.skip_prefix_chunk
    }
}
