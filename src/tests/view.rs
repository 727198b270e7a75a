use url::Url;

use super::{FailingClipboard, RecordingClipboard};
use crate::view::{ViewController, ViewEvent, ViewState};

const DEFAULT: &str = "https://youtube.com/shorts/0DowVODVnJc?si=J72i9jj4PMBRDVY2";

fn location(s: &str) -> Url {
    Url::parse(s).unwrap()
}

#[test]
pub fn test_defaults_without_seed() {
    let view = ViewController::new(DEFAULT, location("https://viewer.test/"));

    assert_eq!(view.raw_input(), DEFAULT);
    assert_eq!(view.committed_input(), DEFAULT);
    assert_eq!(view.video_id().map(|id| id.as_str()), Some("0DowVODVnJc"));
    assert_eq!(view.state(), ViewState::Idle);
}

#[test]
pub fn test_seed_overrides_default() {
    let view = ViewController::new(
        DEFAULT,
        location("https://viewer.test/?url=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ"),
    );

    assert_eq!(view.raw_input(), "https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(view.committed_input(), "https://youtu.be/dQw4w9WgXcQ");
    assert_eq!(view.video_id().map(|id| id.as_str()), Some("dQw4w9WgXcQ"));
    assert_eq!(
        view.share_url(),
        "https://viewer.test/?url=https%3A%2F%2Fyoutu.be%2FdQw4w9WgXcQ"
    );
}

#[test]
pub fn test_typing_does_not_commit() {
    let mut view = ViewController::new(DEFAULT, location("https://viewer.test/"));
    let before = view.derived().clone();

    view.set_input("dQw4w9WgXcQ");

    assert_eq!(view.raw_input(), "dQw4w9WgXcQ");
    assert_eq!(view.committed_input(), DEFAULT);
    assert_eq!(view.derived(), &before);
}

#[test]
pub fn test_submit_recomputes_everything() {
    let mut view = ViewController::new(DEFAULT, location("https://viewer.test/"));

    view.set_input("https://youtube.com/watch?v=dQw4w9WgXcQ&t=5");
    view.submit();

    assert_eq!(view.committed_input(), "https://youtube.com/watch?v=dQw4w9WgXcQ&t=5");
    assert_eq!(view.video_id().map(|id| id.as_str()), Some("dQw4w9WgXcQ"));
    assert_eq!(
        view.embed_url(),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1&rel=0&playsinline=1&controls=1")
    );
    assert_eq!(
        view.share_url(),
        "https://viewer.test/?url=https%3A%2F%2Fyoutube.com%2Fwatch%3Fv%3DdQw4w9WgXcQ%26t%3D5"
    );
}

#[test]
pub fn test_state_transitions() {
    let mut view = ViewController::new("", location("https://viewer.test/"));
    assert_eq!(view.state(), ViewState::Idle);

    view.set_input("not a url");
    view.submit();
    assert_eq!(view.state(), ViewState::Committed { video_id: None });
    assert_eq!(view.embed_url(), None);

    view.set_input("dQw4w9WgXcQ");
    view.submit();
    match view.state() {
        ViewState::Committed { video_id: Some(id) } => assert_eq!(id.as_str(), "dQw4w9WgXcQ"),
        other => panic!("unexpected state {other:?}"),
    }

    // re-enterable: back to no id
    view.set_input("");
    view.submit();
    assert_eq!(view.state(), ViewState::Committed { video_id: None });
}

#[test]
pub fn test_submit_is_idempotent() {
    let mut view = ViewController::new("", location("https://viewer.test/"));

    view.set_input("https://youtube.com/embed/dQw4w9WgXcQ");
    view.submit();
    let first = view.derived().clone();
    view.submit();

    assert_eq!(view.derived(), &first);
}

#[test]
pub fn test_copy_actions() {
    let clipboard = RecordingClipboard::default();
    let mut view = ViewController::new("dQw4w9WgXcQ", location("https://viewer.test/"));

    assert!(view.handle(ViewEvent::CopyShare, &clipboard));
    assert!(view.handle(ViewEvent::CopyEmbed, &clipboard));
    assert_eq!(
        *clipboard.written.borrow(),
        vec![
            "https://viewer.test/?url=dQw4w9WgXcQ".to_string(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?modestbranding=1&rel=0&playsinline=1&controls=1"
                .to_string(),
        ]
    );

    // nothing to copy without an id
    view.handle(ViewEvent::Input("nope".into()), &clipboard);
    view.handle(ViewEvent::Submit, &clipboard);
    assert!(!view.handle(ViewEvent::CopyEmbed, &clipboard));
    assert_eq!(clipboard.written.borrow().len(), 2);
}

#[test]
pub fn test_copy_failure_is_silent() {
    let mut view = ViewController::new("dQw4w9WgXcQ", location("https://viewer.test/"));
    let before = view.derived().clone();

    assert!(!view.handle(ViewEvent::CopyShare, &FailingClipboard));
    assert!(!view.handle(ViewEvent::CopyEmbed, &FailingClipboard));

    assert_eq!(view.derived(), &before);
    assert_eq!(view.state(), ViewState::Idle);
}
