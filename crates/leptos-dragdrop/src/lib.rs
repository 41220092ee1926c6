//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The per-gesture state lives in [`DragPhase`], a plain value that can be
//! driven without a browser. [`DndSignals`] wraps it in a signal and the
//! `make_on_*` / `bind_global_*` helpers feed DOM events into it.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 8;

/// Default window after a drop during which clicks are swallowed
pub const CLICK_SUPPRESS_MS: u32 = 100;

/// The bookmark being dragged and the category it was picked up from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSource {
    pub bookmark_id: String,
    pub category_id: String,
}

impl DragSource {
    pub fn new(category_id: impl Into<String>, bookmark_id: impl Into<String>) -> Self {
        Self {
            bookmark_id: bookmark_id.into(),
            category_id: category_id.into(),
        }
    }
}

/// Drop target types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a category container
    Category { category_id: String },
    /// Drop on another bookmark card
    Bookmark { category_id: String, bookmark_id: String },
}

impl DropTarget {
    pub fn category(category_id: impl Into<String>) -> Self {
        DropTarget::Category { category_id: category_id.into() }
    }

    pub fn bookmark(category_id: impl Into<String>, bookmark_id: impl Into<String>) -> Self {
        DropTarget::Bookmark {
            category_id: category_id.into(),
            bookmark_id: bookmark_id.into(),
        }
    }

    /// Category owning the element under the pointer
    pub fn category_id(&self) -> &str {
        match self {
            DropTarget::Category { category_id } => category_id,
            DropTarget::Bookmark { category_id, .. } => category_id,
        }
    }
}

/// A completed gesture: what was dragged and what it was released over
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEnd {
    pub source: DragSource,
    pub over: Option<DropTarget>,
}

/// Per-gesture state machine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Mouse pressed on a draggable, threshold not crossed yet
    Pending { source: DragSource, start: (i32, i32) },
    /// Drag recognised; `over` is the current drop target
    Dragging {
        source: DragSource,
        pointer: (i32, i32),
        over: Option<DropTarget>,
    },
}

impl DragPhase {
    /// Mouse pressed on a draggable item
    pub fn press(source: DragSource, x: i32, y: i32) -> Self {
        DragPhase::Pending { source, start: (x, y) }
    }

    /// Feed a pointer position. Returns true when this move started the drag.
    pub fn pointer_moved(&mut self, x: i32, y: i32, threshold_px: i32) -> bool {
        match self {
            DragPhase::Pending { source, start } => {
                let dx = (x - start.0).abs();
                let dy = (y - start.1).abs();
                if dx > threshold_px || dy > threshold_px {
                    *self = DragPhase::Dragging {
                        source: source.clone(),
                        pointer: (x, y),
                        over: None,
                    };
                    true
                } else {
                    false
                }
            }
            DragPhase::Dragging { pointer, .. } => {
                *pointer = (x, y);
                false
            }
            DragPhase::Idle => false,
        }
    }

    /// Record the element under the pointer. Ignored unless dragging.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragPhase::Dragging { over, .. } = self {
            *over = target;
        }
    }

    /// Mouse released. Yields the gesture only if a drag was in progress;
    /// a press that never crossed the threshold is a click and yields nothing.
    pub fn release(&mut self) -> Option<DragEnd> {
        match std::mem::take(self) {
            DragPhase::Dragging { source, over, .. } => Some(DragEnd { source, over }),
            _ => None,
        }
    }

    /// Abort the gesture without producing a drop
    pub fn cancel(&mut self) {
        *self = DragPhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }

    /// Source of an active drag (not of a pending press)
    pub fn dragging_source(&self) -> Option<&DragSource> {
        match self {
            DragPhase::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn over(&self) -> Option<&DropTarget> {
        match self {
            DragPhase::Dragging { over, .. } => over.as_ref(),
            _ => None,
        }
    }

    pub fn pointer(&self) -> Option<(i32, i32)> {
        match self {
            DragPhase::Dragging { pointer, .. } => Some(*pointer),
            _ => None,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub phase: RwSignal<DragPhase>,
    /// Set for a short window after a drop so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
    threshold_px: i32,
    click_suppress_ms: u32,
}

pub fn create_dnd_signals(threshold_px: i32, click_suppress_ms: u32) -> DndSignals {
    DndSignals {
        phase: RwSignal::new(DragPhase::Idle),
        drag_just_ended: RwSignal::new(false),
        threshold_px,
        click_suppress_ms,
    }
}

impl DndSignals {
    /// Is this bookmark the one being dragged (tracked)
    pub fn is_dragging_bookmark(&self, bookmark_id: &str) -> bool {
        self.phase
            .with(|p| p.dragging_source().map_or(false, |s| s.bookmark_id == bookmark_id))
    }

    /// Is this target the current drop target (tracked)
    pub fn is_over(&self, target: &DropTarget) -> bool {
        self.phase.with(|p| p.over() == Some(target))
    }

    fn is_dragging_untracked(&self) -> bool {
        self.phase.with_untracked(DragPhase::is_dragging)
    }
}

/// Open the click suppression window once the phase is back to idle
fn end_drag(dnd: &DndSignals, was_dragging: bool) {
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended.set(true);
    let clear = dnd.drag_just_ended;
    gloo_timers::callback::Timeout::new(dnd.click_suppress_ms, move || {
        clear.set(false);
    })
    .forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, source: DragSource) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on controls inside the card
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                if el.closest("button").ok().flatten().is_some() { return; }
            }
        }
        // Keep the browser from starting a text selection or native link drag
        ev.prevent_default();
        dnd.phase.set(DragPhase::press(source.clone(), ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for category containers
pub fn make_on_category_mouseenter(dnd: DndSignals, category_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging_untracked() {
            dnd.phase.update(|p| p.hover(Some(DropTarget::category(category_id.clone()))));
        }
    }
}

/// Create mouseleave handler for category containers
pub fn make_on_category_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging_untracked() {
            dnd.phase.update(|p| p.hover(None));
        }
    }
}

/// Create mouseenter handler for bookmark cards
pub fn make_on_bookmark_mouseenter(
    dnd: DndSignals,
    category_id: String,
    bookmark_id: String,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging_untracked() {
            let target = DropTarget::bookmark(category_id.clone(), bookmark_id.clone());
            dnd.phase.update(|p| p.hover(Some(target)));
        }
    }
}

/// Create mouseleave handler for bookmark cards.
/// The pointer is still inside the owning column, so fall back to it.
pub fn make_on_bookmark_mouseleave(dnd: DndSignals, category_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.is_dragging_untracked() {
            dnd.phase.update(|p| p.hover(Some(DropTarget::category(category_id.clone()))));
        }
    }
}

fn add_document_listener<E>(event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document mousemove - starts drag if moved enough, then tracks the pointer
pub fn bind_global_mousemove(dnd: DndSignals) {
    add_document_listener("mousemove", move |ev: web_sys::MouseEvent| {
        let idle = dnd.phase.with_untracked(|p| *p == DragPhase::Idle);
        if idle {
            return;
        }
        let threshold = dnd.threshold_px;
        let mut started = false;
        dnd.phase.update(|p| started = p.pointer_moved(ev.client_x(), ev.client_y(), threshold));
        if started {
            if let Some(source) = dnd.phase.with_untracked(|p| p.dragging_source().cloned()) {
                log::debug!("[DND] Drag start: bookmark={}, category={}", source.bookmark_id, source.category_id);
            }
        }
    });
}

/// Drop the current gesture without producing a `DragEnd`
fn cancel_gesture(dnd: &DndSignals) {
    if dnd.phase.with_untracked(|p| *p == DragPhase::Idle) {
        return;
    }
    log::debug!("[DND] Drag cancelled");
    let was_dragging = dnd.is_dragging_untracked();
    dnd.phase.update(DragPhase::cancel);
    end_drag(dnd, was_dragging);
}

/// Bind document keydown - Escape aborts an active gesture
pub fn bind_global_escape(dnd: DndSignals) {
    add_document_listener("keydown", move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            cancel_gesture(&dnd);
        }
    });
}

/// Bind global mouseup handler for drop detection.
/// `on_drop` runs once per completed drag, after the state returns to idle.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DragEnd) + 'static,
{
    add_document_listener("mouseup", move |_ev: web_sys::MouseEvent| {
        if dnd.phase.with_untracked(|p| *p == DragPhase::Idle) {
            return;
        }
        let mut finished = None;
        dnd.phase.update(|p| finished = p.release());

        match finished {
            Some(end) => {
                end_drag(&dnd, true);
                on_drop(end);
            }
            // Not dragging - click event will fire naturally on the element
            None => end_drag(&dnd, false),
        }
    });

    bind_global_mousemove(dnd);
    bind_global_escape(dnd);
}
