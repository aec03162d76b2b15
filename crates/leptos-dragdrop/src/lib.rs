//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the slot type `T`: whatever identifies where a drag started
//! and where it may land (e.g. a column plus an index).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Bounds every slot type must satisfy to live in a signal
pub trait Slot: Copy + PartialEq + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Send + Sync + 'static> Slot for T {}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<T: Slot> {
    pub dragging_read: ReadSignal<Option<T>>,
    pub dragging_write: WriteSignal<Option<T>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<T>>,
    pub pending_write: WriteSignal<Option<T>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<T: Slot> DndSignals<T> {
    /// Is `slot` the source of the drag in progress
    pub fn is_dragging(&self, slot: T) -> bool {
        self.dragging_read.get() == Some(slot)
    }

    /// Is `slot` the currently hovered drop target
    pub fn is_target(&self, slot: T) -> bool {
        self.drop_target_read.get() == Some(slot)
    }

    /// Any drag in progress (tracked)
    pub fn active(&self) -> bool {
        self.dragging_read.get().is_some()
    }
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals<T: Slot>() -> DndSignals<T> {
    let (dragging_read, dragging_write) = signal(None::<T>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (pending_read, pending_write) = signal(None::<T>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<T: Slot>(dnd: &DndSignals<T>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<T: Slot>(dnd: DndSignals<T>, source: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep the browser from starting a text selection
            ev.prevent_default();
            dnd.pending_write.set(Some(source));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<T: Slot>(dnd: DndSignals<T>) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop zones
pub fn make_on_zone_mouseenter<T: Slot>(dnd: DndSignals<T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<T: Slot>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drop(source, target)` runs once per finished drag; `target` is `None`
/// when the pointer was released outside every drop zone. Plain clicks never
/// reach it.
pub fn bind_global_mouseup<T, F>(dnd: DndSignals<T>, on_drop: F)
where
    T: Slot,
    F: Fn(T, Option<T>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only real drags report; a click fires naturally on the element
        if let Some(source) = dragging {
            on_drop(source, drop_target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
