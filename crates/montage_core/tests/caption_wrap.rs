use montage_core::{truncate_caption, wrap_caption};
use pretty_assertions::assert_eq;

#[test]
fn greedy_wrap_respects_width_limit() {
    let lines = wrap_caption("The Quick Brown Fox Jumps", 18);
    assert!(lines.len() > 1);
    for line in &lines {
        // One trailing space per line is allowed before stripping.
        assert!(
            line.chars().count() <= 19,
            "line too long: {line:?} ({} chars)",
            line.chars().count()
        );
    }
}

#[test]
fn greedy_wrap_preserves_word_sequence() {
    let original = "The Quick Brown Fox Jumps";
    let lines = wrap_caption(original, 18);
    let rejoined = lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(rejoined, original);
}

#[test]
fn word_longer_than_width_gets_its_own_line() {
    let lines = wrap_caption("Supercalifragilisticexpialidocious in Tokyo", 18);
    assert_eq!(lines[0].trim_end(), "Supercalifragilisticexpialidocious");
    assert_eq!(lines[1].trim_end(), "in Tokyo");
}

#[test]
fn truncate_then_wrap_pipeline() {
    let title = "A Very Long Manga Title That Goes On And On And On Forever";
    assert!(title.chars().count() > 50);

    let truncated = truncate_caption(title, 50, 45);
    assert_eq!(truncated.chars().count(), 48);
    assert_eq!(truncated, "A Very Long Manga Title That Goes On And On A...");

    let lines = wrap_caption(&truncated, 18);
    for line in &lines {
        assert!(line.chars().count() <= 19);
    }
}

#[test]
fn boundary_titles_pass_through_untruncated() {
    let exactly_fifty = "z".repeat(50);
    assert_eq!(truncate_caption(&exactly_fifty, 50, 45), exactly_fifty);

    let short = "Yokohama Kaidashi Kikou";
    assert_eq!(truncate_caption(short, 50, 45), short);
}
