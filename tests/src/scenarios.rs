use textpat_runtime::pattern::*;
use textpat_runtime::*;

#[test]
fn should_bound_word_repetition() {
    let pat = class_repeat(1, 3, [CharClass::Word]);
    let tests = vec![("abc", Some(3)), ("abcd", Some(3)), ("", None)];

    for (case_id, (input, expected)) in tests.into_iter().enumerate() {
        assert_eq!((case_id, expected), (case_id, pat.match_at(input, 0)));
    }
}

#[test]
fn should_match_sip_scheme_literal() {
    let pat = sequence([literal("sip"), literal(":")]);

    assert_eq!(Some(4), pat.match_at("sip:0312341234@10.0.0.1", 0));
}

#[test]
fn should_commit_to_first_matching_alternative() {
    let pat = ordered_alternation([literal("abc"), literal("xyz")]);

    assert_eq!(Some(3), pat.match_at("xyz", 0));
    assert_eq!(None, pat.match_at("aba", 0));
}

#[test]
fn should_stop_bounded_repeat_at_max() {
    let pat = bounded_repeat(1, 2, [class_repeat(1, 3, [CharClass::Word]), literal(".")]);

    assert_eq!(Some(8), pat.match_at("abc.xyz.com", 0));
}

#[test]
fn should_replace_first_consonant_then_copy_remainder() {
    let starter = CharClass::not_in("aiueo");
    let pat = class_repeat(1, 1, [CharClass::Alphabet]);

    let mut out = String::new();
    let res = replace_stream(&mut out, &starter, &pat, "seafood fool", 0, |w, m| {
        w.push_str(&m.to_uppercase());
        Ok::<_, ()>(Replace::CopyRest)
    });

    assert_eq!(Ok(()), res);
    assert_eq!("Seafood fool", out);
}

#[test]
fn should_leave_text_without_matches_unchanged() {
    let input = "no placeholders here";

    assert_eq!(
        input,
        replace_all(&CharClass::set("@"), &literal("@"), input, "?")
    );
}

#[test]
fn should_build_identical_patterns_from_identical_arguments() {
    let build = || {
        sequence([
            class_repeat(1, 16, [CharClass::not_in("@")]),
            literal("@"),
            class_repeat(1, 16, [CharClass::Word, CharClass::set(".")]),
        ])
    };
    let (first, second) = (build(), build());
    let input = "dum.my@go.dev and x@y";

    for offset in 0..=input.len() {
        assert_eq!(first.match_at(input, offset), second.match_at(input, offset));
    }
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn should_write_replacements_to_an_io_sink() {
    let mut sink = IoSink::new(Vec::new());
    let res = replace_stream(
        &mut sink,
        &CharClass::Digit,
        &class_repeat(1, 16, [CharClass::Digit]),
        "tel:0312341234",
        0,
        |w, m| {
            w.write_str(&"*".repeat(m.len()))
                .map(|_| Replace::Continue)
                .map_err(|e| e.kind())
        },
    );

    assert!(res.is_ok());
    assert_eq!(b"tel:**********".as_slice(), sink.get_ref().as_slice());
}

#[test]
fn should_match_patterns_concurrently() {
    let pat = std::sync::Arc::new(sequence([
        head(),
        class_repeat(1, 16, [CharClass::not_in("@")]),
        literal("@"),
        class_repeat(1, 16, [CharClass::Word, CharClass::set(".")]),
        tail(),
    ]));

    let handles: Vec<_> = ["a@b", "dum.my@go.dev", "nope"]
        .into_iter()
        .map(|input| {
            let pat = std::sync::Arc::clone(&pat);
            std::thread::spawn(move || equals_whole(&pat, input))
        })
        .collect();

    let results: Vec<bool> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap_or(false))
        .collect();

    assert_eq!(vec![true, true, false], results);
}
