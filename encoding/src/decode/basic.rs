//! This module provides implementations for primitive decoders of data, which
//! may be in either Little Endian or Big Endian.

use super::BasicDecode;
use byteordered::{ByteOrdered, Endianness};
use std::io::Read;

type Result<T> = std::io::Result<T>;

/// Implement `BasicDecode` for a fixed byte order,
/// where `$ctor` is the matching `ByteOrdered` constructor.
macro_rules! impl_fixed_order_decoder {
    ($typ: ident, $endianness: ident, $ctor: ident) => {
        impl BasicDecode for $typ {
            fn endianness(&self) -> Endianness {
                Endianness::$endianness
            }

            fn decode_us<S: Read>(&self, source: S) -> Result<u16> {
                ByteOrdered::$ctor(source).read_u16()
            }

            fn decode_us_into<S: Read>(&self, source: S, dst: &mut [u16]) -> Result<()> {
                ByteOrdered::$ctor(source).read_u16_into(dst)
            }

            fn decode_ul<S: Read>(&self, source: S) -> Result<u32> {
                ByteOrdered::$ctor(source).read_u32()
            }

            fn decode_ul_into<S: Read>(&self, source: S, dst: &mut [u32]) -> Result<()> {
                ByteOrdered::$ctor(source).read_u32_into(dst)
            }

            fn decode_uv<S: Read>(&self, source: S) -> Result<u64> {
                ByteOrdered::$ctor(source).read_u64()
            }

            fn decode_uv_into<S: Read>(&self, source: S, dst: &mut [u64]) -> Result<()> {
                ByteOrdered::$ctor(source).read_u64_into(dst)
            }

            fn decode_ss<S: Read>(&self, source: S) -> Result<i16> {
                ByteOrdered::$ctor(source).read_i16()
            }

            fn decode_ss_into<S: Read>(&self, source: S, dst: &mut [i16]) -> Result<()> {
                ByteOrdered::$ctor(source).read_i16_into(dst)
            }

            fn decode_sl<S: Read>(&self, source: S) -> Result<i32> {
                ByteOrdered::$ctor(source).read_i32()
            }

            fn decode_sl_into<S: Read>(&self, source: S, dst: &mut [i32]) -> Result<()> {
                ByteOrdered::$ctor(source).read_i32_into(dst)
            }

            fn decode_sv<S: Read>(&self, source: S) -> Result<i64> {
                ByteOrdered::$ctor(source).read_i64()
            }

            fn decode_sv_into<S: Read>(&self, source: S, dst: &mut [i64]) -> Result<()> {
                ByteOrdered::$ctor(source).read_i64_into(dst)
            }

            fn decode_fl<S: Read>(&self, source: S) -> Result<f32> {
                ByteOrdered::$ctor(source).read_f32()
            }

            fn decode_fl_into<S: Read>(&self, source: S, dst: &mut [f32]) -> Result<()> {
                ByteOrdered::$ctor(source).read_f32_into(dst)
            }

            fn decode_fd<S: Read>(&self, source: S) -> Result<f64> {
                ByteOrdered::$ctor(source).read_f64()
            }

            fn decode_fd_into<S: Read>(&self, source: S, dst: &mut [f64]) -> Result<()> {
                ByteOrdered::$ctor(source).read_f64_into(dst)
            }
        }
    };
}

/// A basic decoder of DICOM primitive elements in little endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct LittleEndianBasicDecoder;

impl_fixed_order_decoder!(LittleEndianBasicDecoder, Little, le);

/// A basic decoder of DICOM primitive elements in big endian.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct BigEndianBasicDecoder;

impl_fixed_order_decoder!(BigEndianBasicDecoder, Big, be);

/// A basic decoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time. Since only two values are possible,
/// this enum may become more efficient than the use of a trait object.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum BasicDecoder {
    /// Decode in Little Endian
    LE(LittleEndianBasicDecoder),
    /// Decode in Big Endian
    BE(BigEndianBasicDecoder),
}

use self::BasicDecoder::{BE, LE};

impl BasicDecoder {
    /// Create a basic decoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => LE(LittleEndianBasicDecoder),
            Endianness::Big => BE(BigEndianBasicDecoder),
        }
    }
}

impl From<Endianness> for BasicDecoder {
    fn from(endianness: Endianness) -> Self {
        BasicDecoder::new(endianness)
    }
}

macro_rules! for_both {
    ($s: expr, |$e: ident| $f: expr) => {
        match *$s {
            LE(ref $e) => $f,
            BE(ref $e) => $f,
        }
    };
}

impl BasicDecode for BasicDecoder {
    fn endianness(&self) -> Endianness {
        match *self {
            LE(_) => Endianness::Little,
            BE(_) => Endianness::Big,
        }
    }

    fn decode_us<S: Read>(&self, source: S) -> Result<u16> {
        for_both!(self, |e| e.decode_us(source))
    }

    fn decode_us_into<S: Read>(&self, source: S, dst: &mut [u16]) -> Result<()> {
        for_both!(self, |e| e.decode_us_into(source, dst))
    }

    fn decode_ul<S: Read>(&self, source: S) -> Result<u32> {
        for_both!(self, |e| e.decode_ul(source))
    }

    fn decode_ul_into<S: Read>(&self, source: S, dst: &mut [u32]) -> Result<()> {
        for_both!(self, |e| e.decode_ul_into(source, dst))
    }

    fn decode_uv<S: Read>(&self, source: S) -> Result<u64> {
        for_both!(self, |e| e.decode_uv(source))
    }

    fn decode_uv_into<S: Read>(&self, source: S, dst: &mut [u64]) -> Result<()> {
        for_both!(self, |e| e.decode_uv_into(source, dst))
    }

    fn decode_ss<S: Read>(&self, source: S) -> Result<i16> {
        for_both!(self, |e| e.decode_ss(source))
    }

    fn decode_ss_into<S: Read>(&self, source: S, dst: &mut [i16]) -> Result<()> {
        for_both!(self, |e| e.decode_ss_into(source, dst))
    }

    fn decode_sl<S: Read>(&self, source: S) -> Result<i32> {
        for_both!(self, |e| e.decode_sl(source))
    }

    fn decode_sl_into<S: Read>(&self, source: S, dst: &mut [i32]) -> Result<()> {
        for_both!(self, |e| e.decode_sl_into(source, dst))
    }

    fn decode_sv<S: Read>(&self, source: S) -> Result<i64> {
        for_both!(self, |e| e.decode_sv(source))
    }

    fn decode_sv_into<S: Read>(&self, source: S, dst: &mut [i64]) -> Result<()> {
        for_both!(self, |e| e.decode_sv_into(source, dst))
    }

    fn decode_fl<S: Read>(&self, source: S) -> Result<f32> {
        for_both!(self, |e| e.decode_fl(source))
    }

    fn decode_fl_into<S: Read>(&self, source: S, dst: &mut [f32]) -> Result<()> {
        for_both!(self, |e| e.decode_fl_into(source, dst))
    }

    fn decode_fd<S: Read>(&self, source: S) -> Result<f64> {
        for_both!(self, |e| e.decode_fd(source))
    }

    fn decode_fd_into<S: Read>(&self, source: S, dst: &mut [f64]) -> Result<()> {
        for_both!(self, |e| e.decode_fd_into(source, dst))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_read_integers() {
        let data: &[u8] = &[0xC3, 0x3C, 0x33, 0xCC, 0x55, 0xAA, 0x55, 0xAA];

        let le = LittleEndianBasicDecoder;
        let be = BigEndianBasicDecoder;

        assert_eq!(le.decode_us(data).unwrap(), 0x3CC3);
        assert_eq!(be.decode_us(data).unwrap(), 0xC33C);
        assert_eq!(le.decode_ul(data).unwrap(), 0xCC333CC3);
        assert_eq!(be.decode_ul(data).unwrap(), 0xC33C33CC);
        assert_eq!(le.decode_uv(data).unwrap(), 0xAA55AA55_CC333CC3);
        assert_eq!(be.decode_uv(data).unwrap(), 0xC33C33CC_55AA55AA);

        let le = BasicDecoder::new(Endianness::Little);
        let be = BasicDecoder::new(Endianness::Big);

        assert_eq!(le.decode_us(data).unwrap(), 0x3CC3);
        assert_eq!(be.decode_us(data).unwrap(), 0xC33C);
        assert_eq!(le.decode_ss(data).unwrap(), 0x3CC3);
        assert_eq!(be.decode_ss(data).unwrap(), -0x3CC4);
        assert_eq!(le.endianness(), Endianness::Little);
        assert_eq!(be.endianness(), Endianness::Big);
    }

    #[test]
    fn test_read_integers_into() {
        let data: &[u8] = &[0xC3, 0x3C, 0x33, 0xCC, 0x55, 0xAA, 0x55, 0xAA];

        let le = BasicDecoder::new(Endianness::Little);
        let be = BasicDecoder::new(Endianness::Big);

        let mut out_le = [0; 4];
        le.decode_us_into(data, &mut out_le).unwrap();
        assert_eq!(out_le, [0x3CC3, 0xCC33, 0xAA55, 0xAA55]);

        let mut out_be = [0; 4];
        be.decode_us_into(data, &mut out_be).unwrap();
        assert_eq!(out_be, [0xC33C, 0x33CC, 0x55AA, 0x55AA]);

        let mut out_le = [0; 2];
        le.decode_ul_into(data, &mut out_le).unwrap();
        assert_eq!(out_le, [0xCC33_3CC3, 0xAA55_AA55]);

        let mut out_be = [0; 2];
        be.decode_ul_into(data, &mut out_be).unwrap();
        assert_eq!(out_be, [0xC33C_33CC, 0x55AA_55AA]);
    }

    #[test]
    fn test_read_floats() {
        let le = BasicDecoder::new(Endianness::Little);
        let be = BasicDecoder::new(Endianness::Big);

        assert_eq!(le.decode_fl(&1.5_f32.to_le_bytes()[..]).unwrap(), 1.5);
        assert_eq!(be.decode_fl(&1.5_f32.to_be_bytes()[..]).unwrap(), 1.5);
        assert_eq!(le.decode_fd(&(-0.25_f64).to_le_bytes()[..]).unwrap(), -0.25);
        assert_eq!(be.decode_fd(&(-0.25_f64).to_be_bytes()[..]).unwrap(), -0.25);
    }

    #[test]
    fn short_source_is_an_io_error() {
        let data: &[u8] = &[0x01, 0x02];
        let le = LittleEndianBasicDecoder;
        let err = le.decode_ul(data).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
