use markdown_smf::{convert_to_smf, ConvertError, ConvertOptions, ExitCode};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/manuscripts")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

/// Text of every body paragraph, in document order.
fn paragraphs(rtf: &str) -> Vec<&str> {
    rtf.lines()
        .filter(|line| line.starts_with('{') && !line.starts_with(r"{\"))
        .filter_map(|line| line.strip_prefix('{')?.strip_suffix(r" \par}"))
        .collect()
}

fn paragraphs_after<'a>(rtf: &'a str, marker: &str) -> Vec<&'a str> {
    let all = paragraphs(rtf);
    let start = all.iter().position(|p| *p == marker).unwrap();
    all[start..].to_vec()
}

fn body_of(words: usize) -> String {
    let sentence: Vec<&str> = std::iter::repeat("word").take(words).collect();
    format!(
        "# HEAD\nTitle\nShort\nA. Writer\n## One\n> a comment that is never counted\n{}\n",
        sentence.join(" ")
    )
}

#[test]
fn minimal_manuscript_end_to_end() {
    let rtf = convert_to_smf(
        "# HEAD\nTitle X\nShort\nJane Doe\n## Chapter One\nHello world.",
        &ConvertOptions::default(),
    )
    .unwrap();

    let mut expected = vec![
        r"Your Name \tab about 0 words",
        "Address Line 1",
        "Address Line 2",
        "Address Line 3",
        "City, ST Zip",
        "email@example.com",
        "(555) 555 - 5555",
    ];
    expected.extend([""; 11]);
    expected.extend(["Title X", "By Jane Doe", ""]);
    expected.extend([""; 8]);
    expected.extend(["Chapter 1", "", "Hello world."]);
    assert_eq!(paragraphs(&rtf), expected);

    let title_style = rtf.find(r"\pard\plain\itap0\s15\keep").unwrap();
    let subtitle_style = rtf.find(r"\pard\plain\itap0\s16\keep").unwrap();
    let page_break = rtf.find(r"\s0\pagebb").unwrap();
    let chapter_style = rtf.find(r"\pard\plain\itap0\s2\keep").unwrap();
    let chapter = rtf.find(r"{Chapter 1 \par}").unwrap();
    assert!(title_style < rtf.find(r"{Title X \par}").unwrap());
    assert!(subtitle_style < rtf.find(r"{By Jane Doe \par}").unwrap());
    assert!(page_break < chapter_style && chapter_style < chapter);

    assert!(rtf.contains(r"{Doe / Short / {\field{\*\fldinst{PAGE}}{\fldrslt}}}}"));
    assert!(rtf.contains(r"\titlepg"));
}

#[test]
fn word_count_boundary_at_two_hundred() {
    let at = convert_to_smf(&body_of(200), &ConvertOptions::default()).unwrap();
    let above = convert_to_smf(&body_of(201), &ConvertOptions::default()).unwrap();
    let below = convert_to_smf(&body_of(199), &ConvertOptions::default()).unwrap();

    assert!(at.contains(r"{Your Name \tab about 200 words \par}"));
    assert!(above.contains(r"{Your Name \tab about 200 words \par}"));
    assert!(below.contains(r"{Your Name \tab about 100 words \par}"));
}

#[test]
fn word_count_excludes_heading_and_comment_lines() {
    let rtf = convert_to_smf(&body_of(237), &ConvertOptions::default()).unwrap();
    assert!(rtf.contains(r"{Your Name \tab about 200 words \par}"));
}

#[test]
fn long_work_count_moves_to_title_page() {
    let rtf = convert_to_smf(&body_of(20_000), &ConvertOptions::default()).unwrap();
    assert!(rtf.contains(r"{Your Name \par}"));
    let tail = paragraphs_after(&rtf, "By A. Writer");
    assert_eq!(tail[10], "about 20,000 words");
    assert!(tail[1..10].iter().all(|p| p.is_empty()));
}

#[test]
fn author_missing_when_third_field_is_a_marker() {
    let err = convert_to_smf("# HEAD\nTitle\nShort\n#\nBody", &ConvertOptions::default())
        .unwrap_err();
    assert!(matches!(err, ConvertError::MissingAuthor));
    assert_eq!(err.exit_code(), ExitCode::InvalidManuscript);
}

#[test]
fn sentinel_must_match_exactly() {
    let err = convert_to_smf("#HEAD\nTitle\nShort\nAuthor", &ConvertOptions::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "first line of document must be '# HEAD', not '#HEAD'"
    );
}

#[test]
fn comments_before_sentinel_are_filtered_first() {
    let rtf = convert_to_smf(
        "> working copy\n\n# HEAD\nTitle\nShort\nAuthor\nBody.",
        &ConvertOptions::default(),
    )
    .unwrap();
    assert!(rtf.contains(r"{Body. \par}"));
}

#[test]
fn short_story_fixture() {
    let rtf = convert_to_smf(&fixture("short_story.md"), &ConvertOptions::default()).unwrap();
    let body = paragraphs_after(&rtf, "By Mara Quill");

    let visible: Vec<&str> = body.into_iter().filter(|p| !p.is_empty()).collect();
    assert_eq!(
        visible,
        vec![
            "By Mara Quill",
            "Part 1",
            "Chapter 1",
            r"The boat put in at dawn. \ldblquote You\rquote re late,\rdblquote  said the keeper.",
            r"She didn\rquote t answer \emdash the \i wind\i0  took her words.",
            "#",
            "Later, the lamp was lit.",
            "Chapter 2",
            "Rain fell on the glass.",
        ]
    );
    assert!(!rtf.contains("TODO"));
    assert!(!rtf.contains("Draft three"));
    assert_eq!(rtf.matches(r"\pagebb").count(), 3);
}

#[test]
fn named_divisions() {
    let options = ConvertOptions {
        name_chapters: true,
        name_parts: true,
        ..ConvertOptions::default()
    };
    let rtf = convert_to_smf(&fixture("short_story.md"), &options).unwrap();
    assert!(rtf.contains(r"{Part 1: The Shore \par}"));
    assert!(rtf.contains(r"{Chapter 1: Arrival \par}"));
    assert!(rtf.contains(r"{Chapter 2: The Storm \par}"));
}

#[test]
fn monospace_keeps_body_verbatim() {
    let options = ConvertOptions {
        monospace: true,
        ..ConvertOptions::default()
    };
    let rtf = convert_to_smf(&fixture("short_story.md"), &options).unwrap();
    assert!(rtf.contains(r"{She didn't answer -- the *wind* took her words. \par}"));
    assert!(rtf.contains(r"\f3"));
}

#[test]
fn supplied_head_block() {
    let options = ConvertOptions {
        head: Some(vec!["Mara Quill".into(), "1 Harbour Rd".into()]),
        ..ConvertOptions::default()
    };
    let rtf = convert_to_smf(&fixture("short_story.md"), &options).unwrap();
    let all = paragraphs(&rtf);
    assert_eq!(all[0], r"Mara Quill \tab about 0 words");
    assert_eq!(all[1], "1 Harbour Rd");
    assert!(all[2..18].iter().all(|p| p.is_empty()));
    assert_eq!(all[18], "The Lighthouse Keeper");
}
