use linify::{lines, str_lines};
use proptest::{collection::vec, prelude::*, test_runner::Config};

mod helpers;
use helpers::ChunkReader;

/// Arbitrary terminator-free line content.
fn line_strategy() -> impl Strategy<Value = String> {
    "[^\r\n]{0,16}"
}

proptest! {
    #![proptest_config(Config::with_cases(2000))]

    #[test]
    fn join_then_split_reproduces_lines(input in vec(line_strategy(), 0..32)) {
        let joined = input.join("\n");
        let split: Vec<String> = str_lines(&joined).map(str::to_owned).collect();

        // A trailing empty element cannot survive the round trip: "a\n" is
        // one line, so joining ["a", ""] and splitting yields ["a"].
        let expected = match input.split_last() {
            Some((last, rest)) if last.is_empty() => rest,
            _ => &input[..],
        };
        prop_assert_eq!(split, expected);
    }

    #[test]
    fn terminated_segments_produce_one_line_each(input in vec(line_strategy(), 0..32)) {
        let mut text = String::new();
        for line in &input {
            text.push_str(line);
            text.push('\n');
        }

        let split: Vec<&str> = str_lines(&text).collect();
        prop_assert_eq!(split, input);
    }

    #[test]
    fn reader_and_str_forms_agree(text in "[a-z\r\n ]{0,64}", chunk in 1usize..8) {
        let from_str: Vec<String> = str_lines(&text).map(str::to_owned).collect();
        let from_reader: Vec<String> = lines(ChunkReader::new(text.as_bytes(), chunk))
            .collect::<std::io::Result<_>>()
            .unwrap();
        prop_assert_eq!(from_reader, from_str);
    }
}
