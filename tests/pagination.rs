mod common;

use common::{has_text, sample_resume, text_pos, FailingAssets};
use resumegen::{generate_with_style, Achievement, Style};

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// A pure-red sidebar paints as the unambiguous `1 0 0 rg` fill operator,
/// so the redraw-per-page invariant is visible in the raw content streams.
fn red_sidebar_style() -> Style {
    Style {
        sidebar_fill: [255, 0, 0],
        ..Style::default()
    }
}

#[test]
fn long_skill_list_spans_pages_and_repaints_sidebar() {
    let mut data = sample_resume();
    data.skills.technical = (1..=120).map(|i| format!("Skill number {i}")).collect();

    let out = generate_with_style(&data, &FailingAssets, red_sidebar_style()).unwrap();

    assert!(out.page_count > 1, "120 sidebar entries must overflow one page");
    // One sidebar fill per page, painted when the page starts.
    assert_eq!(
        count_occurrences(&out.bytes, b"1 0 0 rg"),
        out.page_count,
        "sidebar background must be redrawn on every page"
    );

    // No entry is dropped across the break, and order survives.
    let first = text_pos(&out.bytes, "Skill number 1").unwrap();
    let last = text_pos(&out.bytes, "Skill number 120").unwrap();
    assert!(first < last);
}

#[test]
fn many_achievements_overflow_to_new_pages_in_order() {
    let mut data = sample_resume();
    data.achievements = (1..=25)
        .map(|i| Achievement {
            title: format!("Award number {i}"),
            desc: "Recognized for sustained impact across several release cycles \
                   and for unusually thorough incident writeups."
                .into(),
        })
        .collect();

    let out = generate_with_style(&data, &FailingAssets, red_sidebar_style()).unwrap();

    assert!(out.page_count > 1);
    assert_eq!(count_occurrences(&out.bytes, b"1 0 0 rg"), out.page_count);

    let mut prev = 0;
    for i in 1..=25 {
        let pos = text_pos(&out.bytes, &format!("Award number {i}"))
            .unwrap_or_else(|| panic!("achievement {i} missing"));
        assert!(pos > prev, "achievement {i} out of order");
        prev = pos;
    }
}

#[test]
fn single_page_resume_paints_sidebar_once() {
    let out = generate_with_style(&sample_resume(), &FailingAssets, red_sidebar_style()).unwrap();
    assert_eq!(out.page_count, 1);
    assert_eq!(count_occurrences(&out.bytes, b"1 0 0 rg"), 1);
    assert!(has_text(&out.bytes, "PROFESSIONAL EXPERIENCE"));
}

#[test]
fn entry_caps_are_configurable() {
    let mut data = sample_resume();
    data.projects = (1..=6)
        .map(|i| resumegen::Project {
            title: format!("Venture {}", ["One", "Two", "Three", "Four", "Five", "Six"][i - 1]),
            duration: "2024".into(),
            description: "Prototype.".into(),
            skills: vec!["Rust".into()],
            icon: None,
        })
        .collect();

    let style = Style {
        max_project_entries: 2,
        ..Style::default()
    };
    let out = generate_with_style(&data, &FailingAssets, style).unwrap();

    assert!(has_text(&out.bytes, "Venture One"));
    assert!(has_text(&out.bytes, "Venture Two"));
    assert!(!has_text(&out.bytes, "Venture Three"));
}
