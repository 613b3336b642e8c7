use std::mem::size_of;

/// Encodes and decodes one symbol for the binary format.
///
/// Every symbol occupies exactly [`width`](SymbolCodec::width) bytes in the stream; the width
/// is recorded in the header and checked on decode.
pub trait SymbolCodec<C> {
    /// Number of bytes one encoded symbol occupies.
    fn width(&self) -> u8;

    /// Writes `symbol` into `out`, which is exactly `width()` bytes long.
    fn encode(&self, symbol: C, out: &mut [u8]);

    /// Reads a symbol back from `width()` bytes, or `None` if they are not a valid encoding.
    fn decode(&self, bytes: &[u8]) -> Option<C>;
}

/// Symbols with a fixed-width native byte representation.
pub trait RawSymbol: Sized {
    /// Size of the representation in bytes.
    const WIDTH: u8;

    /// Copies the native-endian bytes of `self` into `out`.
    fn write_raw(self, out: &mut [u8]);

    /// Rebuilds a symbol from native-endian bytes.
    fn read_raw(bytes: &[u8]) -> Option<Self>;
}

macro_rules! impl_raw_symbol {
    ($($t:ty),*) => {
        $(
            impl RawSymbol for $t {
                const WIDTH: u8 = size_of::<$t>() as u8;

                #[inline]
                fn write_raw(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                #[inline]
                fn read_raw(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_ne_bytes)
                }
            }
        )*
    };
}

impl_raw_symbol!(u8, u16, u32, u64, i8, i16, i32, i64);

impl RawSymbol for char {
    const WIDTH: u8 = size_of::<char>() as u8;

    #[inline]
    fn write_raw(self, out: &mut [u8]) {
        u32::from(self).write_raw(out);
    }

    #[inline]
    fn read_raw(bytes: &[u8]) -> Option<Self> {
        u32::read_raw(bytes).and_then(char::from_u32)
    }
}

/// The default codec: a plain copy of each symbol's native bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawCodec;

impl<C: RawSymbol> SymbolCodec<C> for RawCodec {
    #[inline]
    fn width(&self) -> u8 {
        C::WIDTH
    }

    #[inline]
    fn encode(&self, symbol: C, out: &mut [u8]) {
        symbol.write_raw(out);
    }

    #[inline]
    fn decode(&self, bytes: &[u8]) -> Option<C> {
        C::read_raw(bytes)
    }
}
