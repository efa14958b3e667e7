//! Cursor selection for crop handles.
//!
//! [`cursor_for_handle`] is the pure decision; [`set_mouse_cursor`] pushes the
//! result into a [`CursorSink`], which the browser binding implements for a
//! canvas element.

use std::fmt;

use crate::HandleKind;

/// CSS cursor tokens produced for crop handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    Move,
    NsResize,
    SeResize,
    SwResize,
    WResize,
}

impl CursorStyle {
    /// The CSS `cursor` property value.
    pub fn as_str(self) -> &'static str {
        match self {
            CursorStyle::Auto => "auto",
            CursorStyle::Move => "move",
            CursorStyle::NsResize => "ns-resize",
            CursorStyle::SeResize => "se-resize",
            CursorStyle::SwResize => "sw-resize",
            CursorStyle::WResize => "w-resize",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface whose cursor can be changed.
pub trait CursorSink {
    fn set_cursor(&mut self, style: CursorStyle);
}

/// Select the cursor shown while hovering or dragging `handle`.
///
/// Corner tokens follow the widget's established look: the top-left and
/// bottom-right corners share `se-resize`, both side edges use `w-resize`.
pub fn cursor_for_handle(handle: HandleKind) -> CursorStyle {
    match handle {
        HandleKind::Move => CursorStyle::Move,
        HandleKind::TopLeft => CursorStyle::SeResize,
        HandleKind::TopCenter => CursorStyle::NsResize,
        HandleKind::TopRight => CursorStyle::SwResize,
        HandleKind::CenterLeft => CursorStyle::WResize,
        HandleKind::CenterRight => CursorStyle::WResize,
        HandleKind::BottomLeft => CursorStyle::SwResize,
        HandleKind::BottomCenter => CursorStyle::NsResize,
        HandleKind::BottomRight => CursorStyle::SeResize,
        HandleKind::Normal => CursorStyle::Auto,
    }
}

/// Apply the cursor for `handle` to `sink` and return it.
pub fn set_mouse_cursor<S: CursorSink + ?Sized>(sink: &mut S, handle: HandleKind) -> CursorStyle {
    let style = cursor_for_handle(handle);
    sink.set_cursor(style);
    style
}
