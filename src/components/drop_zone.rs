//! Drop Zone Component
//!
//! Trailing drop target at the end of a column's list.

use leptos::prelude::*;

use board_core::Location;
use leptos_dragdrop::{make_on_zone_mouseenter, DndSignals};

#[component]
pub fn DropZone(
    /// Gap a drop here lands in
    gap: Location,
    dnd: DndSignals<Location>,
    /// Column has no tasks; show the placeholder text
    empty: bool,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, gap);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if dnd.is_target(gap) { c.push_str(" active"); }
        if empty { c.push_str(" empty"); }
        c
    };

    view! {
        <li class=zone_class on:mouseenter=on_mouseenter>
            {empty.then(|| view! { <span class="empty-hint">"No tasks yet. Add one above!"</span> })}
        </li>
    }
}
