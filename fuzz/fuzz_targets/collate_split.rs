#![no_main]

use libfuzzer_sys::fuzz_target;
use chunkpipe::SourceExt;
use chunkpipe::sources::ChunkList;

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u8)| {
    let (data, separator, step) = input;
    let step = usize::from(step).max(1);
    if separator.is_empty() || separator.len() > 4 {
        return;
    }

    let chunks: Vec<Vec<u8>> = data.chunks(step).map(<[u8]>::to_vec).collect();
    let records = ChunkList::new(chunks.clone())
        .collate(separator.clone())
        .drain()
        .unwrap();

    // Verify: chunking never changes the records
    let whole = ChunkList::new(vec![data.clone()])
        .collate(separator.clone())
        .drain()
        .unwrap();
    assert_eq!(records, whole);

    // Verify: no record contains the separator
    for record in &records {
        assert!(!record.windows(separator.len()).any(|w| w == separator.as_slice()));
    }

    // Verify: records joined with the separator rebuild the input
    let mut rebuilt = records.join(separator.as_slice());
    if data.ends_with(&separator) && rebuilt.len() + separator.len() == data.len() {
        rebuilt.extend_from_slice(&separator);
    }
    assert_eq!(rebuilt, data);

    // Verify: join drops exactly the separators
    let joined = ChunkList::new(chunks)
        .collate(separator)
        .join()
        .drain()
        .unwrap();
    assert_eq!(joined.len(), records.iter().map(Vec::len).sum::<usize>());
});
