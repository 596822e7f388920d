//! Status bar tests - segments, sync and transient messages

mod common;

use std::time::{Duration, Instant};

use common::{hide, status, test_model};
use heartpad::messages::{Msg, UiMsg};
use heartpad::model::status_bar::{
    sync_status_bar, SegmentContent, SegmentId, SegmentPosition, StatusBar,
};
use heartpad::update::update;

// =============================================================================
// Segments
// =============================================================================

#[test]
fn test_status_bar_new_has_default_segments() {
    let bar = StatusBar::new();
    assert!(bar.get_segment(SegmentId::StatusMessage).is_some());
    assert!(bar.get_segment(SegmentId::LastSaved).is_some());
    assert!(bar.get_segment(SegmentId::MaskCount).is_some());
    assert!(bar.get_segment(SegmentId::WordCount).is_some());
    assert_eq!(bar.all_segments().count(), 4);
}

#[test]
fn test_segments_by_position() {
    let bar = StatusBar::new();
    let left: Vec<_> = bar
        .segments_by_position(SegmentPosition::Left)
        .map(|s| s.id)
        .collect();
    let right: Vec<_> = bar
        .segments_by_position(SegmentPosition::Right)
        .map(|s| s.id)
        .collect();

    assert_eq!(left, vec![SegmentId::StatusMessage, SegmentId::LastSaved]);
    assert_eq!(right, vec![SegmentId::MaskCount, SegmentId::WordCount]);
}

#[test]
fn test_visible_segments_filters_empty() {
    let mut bar = StatusBar::new();
    assert!(!bar.visible_segments().any(|s| s.id == SegmentId::MaskCount));

    bar.update_segment(SegmentId::MaskCount, SegmentContent::Text("2 hidden".into()));
    assert!(bar.visible_segments().any(|s| s.id == SegmentId::MaskCount));
}

#[test]
fn test_line_joins_visible_segments() {
    let mut bar = StatusBar::new();
    bar.update_segment(SegmentId::MaskCount, SegmentContent::Text("2 hidden".into()));

    assert_eq!(bar.line(SegmentPosition::Right), "2 hidden \u{b7} 0 words");
    assert_eq!(bar.line(SegmentPosition::Left), "");
}

// =============================================================================
// Sync
// =============================================================================

#[test]
fn test_sync_counts_masks_and_words() {
    let mut model = test_model(&["one two three", "four"]);
    hide(&mut model, 0, 4, 7);

    let bar = &model.ui.status_bar;
    assert_eq!(
        bar.get_segment(SegmentId::MaskCount).unwrap().content,
        SegmentContent::Text("1 hidden".into())
    );
    // "one ♥ three four": the glyph counts as a word
    assert_eq!(
        bar.get_segment(SegmentId::WordCount).unwrap().content,
        SegmentContent::Text("4 words".into())
    );
    assert_eq!(
        bar.get_segment(SegmentId::StatusMessage).unwrap().content,
        SegmentContent::Text("Tucked away \u{2665}".into())
    );
}

#[test]
fn test_sync_splits_hidden_and_shown_masks() {
    let mut model = test_model(&["one two three"]);
    hide(&mut model, 0, 0, 3);
    update(&mut model, Msg::toggle_all());

    let content = |model: &heartpad::model::AppModel| {
        model
            .ui
            .status_bar
            .get_segment(SegmentId::MaskCount)
            .unwrap()
            .content
            .clone()
    };
    assert_eq!(content(&model), SegmentContent::Text("1 shown".into()));

    update(&mut model, Msg::toggle_all());
    assert_eq!(content(&model), SegmentContent::Text("1 hidden".into()));
}

#[test]
fn test_sync_shows_last_saved() {
    let mut model = test_model(&["word"]);
    model.ui.last_saved = Some("14:03:27".to_string());

    sync_status_bar(&mut model);

    let bar = &model.ui.status_bar;
    assert_eq!(bar.line(SegmentPosition::Left), "Saved 14:03:27");
    assert_eq!(bar.line(SegmentPosition::Right), "1 word");
}

// =============================================================================
// Transient messages
// =============================================================================

#[test]
fn test_status_expires_on_tick() {
    let mut model = test_model(&["secret"]);
    hide(&mut model, 0, 0, 6);
    assert!(status(&model).is_some());

    update(&mut model, Msg::tick(Instant::now() + Duration::from_millis(1500)));
    assert!(model.ui.transient_message.is_some());

    update(&mut model, Msg::tick(Instant::now() + Duration::from_secs(4)));
    assert!(model.ui.transient_message.is_none());
    assert_eq!(
        model
            .ui
            .status_bar
            .get_segment(SegmentId::StatusMessage)
            .unwrap()
            .content,
        SegmentContent::Empty
    );
}

#[test]
fn test_set_and_clear_transient_message() {
    let mut model = test_model(&[]);

    update(
        &mut model,
        Msg::Ui(UiMsg::SetTransientMessage {
            text: "Hello".to_string(),
            duration_ms: 60_000,
        }),
    );
    assert_eq!(status(&model).as_deref(), Some("Hello"));

    update(&mut model, Msg::Ui(UiMsg::ClearTransientMessage));
    assert!(status(&model).is_none());
}
