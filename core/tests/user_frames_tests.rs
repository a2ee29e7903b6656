use codetrace::errors::LookupError;
use codetrace::{CallStack, FrameInspector, StackFrame, format_user_traceback};

fn boundary() -> StackFrame {
    StackFrame::new("/lib/python3.11/site-packages/_pyodide/_base.py", "eval_code_async", 580)
}

#[test]
fn collects_contiguous_exec_frames_after_boundary() {
    let stack = vec![
        StackFrame::new("/lib/_pyodide/console.py", "run", 12),
        boundary(),
        StackFrame::new("<exec>", "f", 1),
        StackFrame::new("<exec>", "g", 2),
        StackFrame::new("host.py", "h", 3),
    ];
    let frames = codetrace::user_frames(&stack).expect("boundary is present");
    assert_eq!(
        frames,
        vec![StackFrame::new("<exec>", "f", 1), StackFrame::new("<exec>", "g", 2)]
    );
}

#[test]
fn skips_host_frames_between_boundary_and_user_code() {
    let stack = vec![
        boundary(),
        StackFrame::new("/lib/_pyodide/_base.py", "run_async", 300),
        StackFrame::new("<exec>", "<module>", 4),
        StackFrame::new("host.py", "callback", 8),
        StackFrame::new("<exec>", "later", 9),
    ];
    let frames = FrameInspector::new()
        .user_frames(&stack)
        .expect("boundary is present");
    assert_eq!(frames, vec![StackFrame::new("<exec>", "<module>", 4)]);
}

#[test]
fn exec_frames_before_boundary_are_ignored() {
    let stack = vec![
        StackFrame::new("<exec>", "outer", 1),
        boundary(),
        StackFrame::new("<exec>", "inner", 2),
    ];
    let frames = FrameInspector::new()
        .user_frames(&stack)
        .expect("boundary is present");
    assert_eq!(frames, vec![StackFrame::new("<exec>", "inner", 2)]);
}

#[test]
fn missing_boundary_gives_none() {
    let stack = vec![
        StackFrame::new("<exec>", "f", 1),
        StackFrame::new("host.py", "h", 3),
    ];
    assert_eq!(FrameInspector::new().user_frames(&stack), None);

    let err = FrameInspector::new()
        .try_user_frames(&stack)
        .expect_err("boundary is missing");
    assert!(matches!(err, LookupError::BoundaryNotFound { .. }));
}

#[test]
fn boundary_name_in_wrong_package_is_not_a_boundary() {
    let stack = vec![
        StackFrame::new("/home/user/app.py", "eval_code_async", 1),
        StackFrame::new("<exec>", "f", 1),
    ];
    assert_eq!(FrameInspector::new().user_frames(&stack), None);
}

#[test]
fn boundary_without_user_frames_gives_empty_list() {
    let stack = vec![boundary(), StackFrame::new("host.py", "h", 3)];
    assert_eq!(FrameInspector::new().user_frames(&stack), Some(Vec::new()));

    let stack = vec![boundary()];
    assert_eq!(FrameInspector::new().user_frames(&stack), Some(Vec::new()));
}

#[test]
fn empty_stack_gives_none() {
    assert_eq!(
        FrameInspector::new().try_user_frames(&[]),
        Err(LookupError::EmptyStack)
    );
    assert_eq!(FrameInspector::new().user_frames(&[]), None);
}

#[test]
fn configured_sentinels_drive_boundary_detection() {
    let inspector = FrameInspector::new()
        .with_runtime_path_marker("/sandbox/")
        .with_entry_point("run_snippet")
        .with_exec_label("<snippet>");
    let stack = vec![
        boundary(),
        StackFrame::new("/opt/sandbox/runner.py", "run_snippet", 40),
        StackFrame::new("<snippet>", "main", 6),
    ];
    assert_eq!(
        inspector.user_frames(&stack),
        Some(vec![StackFrame::new("<snippet>", "main", 6)])
    );
}

#[test]
fn call_stack_snapshot_feeds_inspector() {
    let mut stack = CallStack::new();
    stack.push_frame(boundary());
    stack.push_frame(StackFrame::new("<exec>", "<module>", 3));
    stack.push_frame(StackFrame::new("<exec>", "divide", 1));
    stack.push_frame(StackFrame::new("host.py", "trace", 50));

    let trace = stack.format_trace();
    assert!(trace.starts_with("    at trace (host.py:50)"));

    assert_eq!(stack.pop_frame().map(|frame| frame.function_name), Some("trace".to_string()));
    let frames = FrameInspector::new()
        .user_frames(&stack.snapshot())
        .expect("boundary is present");
    assert_eq!(frames.len(), 2);
}

#[test]
fn user_traceback_quotes_source_lines() {
    let code = "def divide(a, b):\n    return a / b\n\ndivide(1, 0)\n";
    let frames = vec![
        StackFrame::new("<exec>", "<module>", 4),
        StackFrame::new("<exec>", "divide", 2),
    ];
    let out = format_user_traceback(&frames, Some(code));
    assert_eq!(
        out,
        "Traceback (most recent call last):\n  File \"<exec>\", line 4, in <module>\n    divide(1, 0)\n  File \"<exec>\", line 2, in divide\n    return a / b\n"
    );

    let bare = format_user_traceback(&frames, None);
    assert!(!bare.contains("divide(1, 0)"));
    assert!(bare.contains("line 2, in divide"));
}
