#![no_main]

use libfuzzer_sys::fuzz_target;
use chunkpipe::SourceExt;
use chunkpipe::sources::ChunkList;

fuzz_target!(|input: (Vec<Vec<u8>>, u8, u8, u8)| {
    let (chunks, skip, take, pivot) = input;
    let (skip, take) = (usize::from(skip), usize::from(take));
    let flat: Vec<u8> = chunks.concat();

    // Verify: skip/take match slicing
    let items = ChunkList::new(chunks.clone()).skip(skip).take(take).drain().unwrap();
    let expected: Vec<u8> = flat.iter().copied().skip(skip).take(take).collect();
    assert_eq!(items, expected);

    // Verify: take_while/skip_while match the iterator adapters
    let items = ChunkList::new(chunks.clone())
        .take_while(|b| *b < pivot)
        .drain()
        .unwrap();
    let expected: Vec<u8> = flat.iter().copied().take_while(|b| *b < pivot).collect();
    assert_eq!(items, expected);

    let items = ChunkList::new(chunks)
        .skip_while(|b| *b < pivot)
        .drain()
        .unwrap();
    let expected: Vec<u8> = flat.iter().copied().skip_while(|b| *b < pivot).collect();
    assert_eq!(items, expected);
});
