#![no_main]
use arbitrary::Arbitrary;
use charbound::{BoundedReader, CharBuffer, CharStream, StrStream};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    ReadChar,
    ReadInto { offset: u8, len: u8 },
    ReadBuffer(u8),
    Skip(u8),
    Mark,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    bound: i16,
    ops: Vec<Op>,
}

/// Drives a bounded reader through arbitrary operations and checks the
/// budget bookkeeping after each one.
fn run(input: Input) {
    let bound = i64::from(input.bound);
    let mut reader = BoundedReader::new(StrStream::new(&input.text), bound);
    let mut buf = ['\0'; 64];
    // Budget snapshot at the last mark; construction acts as the first mark.
    let mut snapshot = bound;

    for op in input.ops {
        match op {
            Op::ReadChar => {
                let _ = reader.read_char().unwrap();
            }
            Op::ReadInto { offset, len } => {
                let offset = usize::from(offset % 64);
                let len = usize::from(len % 64);
                // Windows past the end of `buf` must surface as errors, never
                // as a panic or a budget change.
                let before = reader.remaining();
                match reader.read_into(&mut buf, offset, len) {
                    Ok(Some(n)) => assert!(n <= len),
                    Ok(None) => assert!(len > 0),
                    Err(_) => assert_eq!(reader.remaining(), before),
                }
            }
            Op::ReadBuffer(cap) => {
                let mut dst = CharBuffer::new(usize::from(cap % 64));
                let _ = reader.read_buffer(&mut dst).unwrap();
                assert_eq!(dst.limit(), dst.capacity());
            }
            Op::Skip(n) => {
                let _ = reader.skip(u64::from(n)).unwrap();
            }
            Op::Mark => {
                reader.mark(0).unwrap();
                snapshot = reader.remaining();
            }
            Op::Reset => {
                reader.reset().unwrap();
                assert_eq!(reader.remaining(), snapshot);
            }
        }

        let consumed = i64::try_from(reader.consumed()).unwrap();
        assert_eq!(reader.remaining(), bound - consumed);
        assert!(consumed <= bound.max(0));
    }
}

fuzz_target!(|input: Input| run(input));
