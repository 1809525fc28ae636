use ombre::prelude::*;

#[test]
fn memory_clipboard_records_writes() {
    let mut clipboard = MemoryClipboard::new();
    clipboard.write_text("a".into()).unwrap();
    clipboard.write_text("b".into()).unwrap();

    assert_eq!(clipboard.writes(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(clipboard.last().as_deref(), Some("b"));
}

#[test]
fn clones_share_history() {
    let observer = MemoryClipboard::new();
    let mut writer: Box<dyn ClipboardWriter> = Box::new(observer.clone());

    writer.write_text("background: red;".into()).unwrap();

    assert_eq!(observer.last().as_deref(), Some("background: red;"));
}

#[test]
fn failing_clipboard_reports_error() {
    let mut clipboard = MemoryClipboard::failing();
    let result = clipboard.write_text("x".into());

    assert!(matches!(result, Err(ClipboardError::Write(_))));
    assert!(clipboard.writes().is_empty());
}
