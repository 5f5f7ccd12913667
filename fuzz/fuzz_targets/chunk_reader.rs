#![no_main]

use std::io::Cursor;

use fixchunk::{ChunkConfig, Chunker};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u16, Vec<u8>)| {
    let (size, data) = input;
    let size = usize::from(size);

    let config = match ChunkConfig::new(size) {
        Ok(config) => config,
        Err(_) => {
            assert_eq!(size, 0);
            return;
        }
    };

    let chunker = Chunker::new(config);
    let chunks = chunker.chunk_reader(Cursor::new(&data)).unwrap();

    // Verify: every chunk but the last is full size, none is empty
    for (i, chunk) in chunks.iter().enumerate() {
        assert!(!chunk.is_empty());
        if i < chunks.len() - 1 {
            assert_eq!(chunk.len(), size);
        } else {
            assert!(chunk.len() <= size);
        }
    }

    // Verify: offsets are correct
    let mut expected_offset = 0u64;
    for chunk in &chunks {
        assert_eq!(chunk.offset, expected_offset);
        expected_offset += chunk.len() as u64;
    }
    assert_eq!(expected_offset, data.len() as u64);

    // Verify: data round-trips
    let joined: Vec<u8> = chunks.iter().flat_map(|c| c.data.iter().copied()).collect();
    assert_eq!(joined, data);

    // Verify: determinism
    let again = chunker.chunk_reader(Cursor::new(&data)).unwrap();
    assert_eq!(chunks, again);
});
