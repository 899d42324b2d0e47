#![cfg(feature = "deflate")]

use std::io::Write;

use dcm_transfer_syntax_registry::deflate::FlateAdapter;
use flate2::{write::DeflateEncoder, Compression};

#[test]
fn inflates_raw_deflate_stream() {
    let data: Vec<u8> = (0..2048_u32).map(|i| (i % 13) as u8).collect();

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(&data).unwrap();
    let deflated = encoder.finish().unwrap();
    assert!(deflated.len() < data.len());

    let inflated = FlateAdapter.inflate_all(&deflated[..]).unwrap();
    assert_eq!(inflated, data);
}
