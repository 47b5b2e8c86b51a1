//! FLIC error codes.

use std::io;

pub type FlicResult<T> = Result<T, FlicError>;

quick_error! {
    #[derive(Debug)]
    pub enum FlicError {
        /// The path given to open does not exist.
        NoFile {
            description("File not found")
        }

        /// The path given to open is a directory or similar.
        NotARegularFile {
            description("Not a regular file")
        }

        /// The container header does not carry the FLI or FLC magic.
        BadMagic(magic: u16) {
            description("Bad magic")
            display("Bad magic 0x{:04X}", magic)
        }

        /// A frame record at `offset` does not carry the frame magic.
        BadFrameMagic(offset: u64, magic: u16) {
            description("Bad frame magic")
            display("Bad frame magic 0x{:04X} at offset {}", magic, offset)
        }

        /// A chunk tried to write to a row outside the raster.
        RowOutOfBounds(y: usize, height: usize) {
            description("Row out of bounds")
            display("Row {} out of bounds, height is {}", y, height)
        }

        /// A chunk tried to write to a column outside the raster.
        ColumnOutOfBounds(x: usize, width: usize) {
            description("Column out of bounds")
            display("Column {} out of bounds, width is {}", x, width)
        }

        /// A fixed-width read ran past the end of the stream.  Only
        /// reported in strict read mode.
        UnexpectedEof(offset: u64) {
            description("Unexpected end of file")
            display("Unexpected end of file at offset {}", offset)
        }

        /// The raster does not match the dimensions in the header.
        WrongResolution {
            description("Wrong resolution")
        }

        Io(err: io::Error) {
            from()
            cause(err)
            description("IO error")
            display("IO error: {}", err)
        }
    }
}

impl FlicError {
    /// True for errors raised while opening the container, before any
    /// frame has been read.
    pub fn is_format_error(&self) -> bool {
        match *self {
            FlicError::BadMagic(_) => true,
            _ => false,
        }
    }

    /// True for structural errors found while decoding a frame.  The
    /// stream position is unspecified afterwards and the session
    /// should be reopened.
    pub fn is_decode_error(&self) -> bool {
        match *self {
            FlicError::BadFrameMagic(..)
            | FlicError::RowOutOfBounds(..)
            | FlicError::ColumnOutOfBounds(..)
            | FlicError::UnexpectedEof(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlicError;

    #[test]
    fn test_error_classes() {
        assert!(FlicError::BadMagic(0x1234).is_format_error());
        assert!(!FlicError::BadMagic(0x1234).is_decode_error());
        assert!(FlicError::RowOutOfBounds(5, 2).is_decode_error());
        assert!(FlicError::BadFrameMagic(128, 0).is_decode_error());
        assert!(!FlicError::WrongResolution.is_decode_error());
    }

    #[test]
    fn test_error_display() {
        let e = FlicError::BadMagic(0xBEEF);
        assert_eq!(format!("{}", e), "Bad magic 0xBEEF");

        let e = FlicError::ColumnOutOfBounds(7, 4);
        assert_eq!(format!("{}", e), "Column 7 out of bounds, width is 4");
    }
}
