use leptos::prelude::*;

use crate::core::interactions::LayerStyle;

/// Layers of the hero illustration, top to bottom
const STACK_LAYERS: &[(&str, &str)] = &[
    ("Docs", "Specs, runbooks and decisions"),
    ("Tasks", "Issues and sprints in one place"),
    ("Code", "Repos linked to the work they ship"),
    ("Chat", "Threads that stay attached to context"),
];

/// Hero illustration of stacked tool layers.
///
/// Hovering a layer dims and tilts every other layer; leaving restores them.
#[component]
pub fn StackVisual() -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);

    view! {
        <div class="stack-visual" aria-hidden="true" on:mouseleave=move |_| hovered.set(None)>
            {STACK_LAYERS.iter().enumerate().map(|(index, &(title, caption))| {
                view! {
                    <div
                        class="stack-layer"
                        style=move || LayerStyle::for_layer(index, hovered.get()).to_css()
                        on:mouseenter=move |_| hovered.set(Some(index))
                        on:mouseleave=move |_| hovered.set(None)
                    >
                        <span class="stack-layer-title">{title}</span>
                        <span class="stack-layer-caption">{caption}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
