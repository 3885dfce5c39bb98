use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input with label, bound to a string signal
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input `name` attribute
    name: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Outlines the input in red while true
    #[prop(optional, into)]
    invalid: Option<Signal<bool>>,
    /// Message shown under the input while `invalid` is true
    #[prop(optional)]
    hint: Option<&'static str>,
) -> impl IntoView {
    let is_invalid = move || invalid.map(|i| i.get()).unwrap_or(false);

    view! {
        <div class="space-y-1.5">
            <label for=name class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                class="input-base"
                class:border-red-500=is_invalid
                class:ring-2=is_invalid
                class:ring-red-500=is_invalid
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || {
                hint.filter(|_| is_invalid()).map(|hint| view! {
                    <div class="flex items-center text-sm text-red-500">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{hint}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Text area bound to a string signal
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// Textarea `name` attribute
    name: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="label">{label}</label>
            <textarea
                id=name
                name=name
                class="input-base resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Select bound to a string signal. The first option is an empty "no answer".
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// Select `name` attribute
    name: &'static str,
    /// Current value
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="label">{label}</label>
            <select
                id=name
                name=name
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select one (optional)"</option>
                {options.iter().map(|(val, text)| {
                    view! {
                        <option value=*val>{*text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Checkbox tile for one entry of a multi-select
#[component]
pub fn CheckboxField(
    /// Field label text
    label: &'static str,
    /// Value submitted when checked
    value: &'static str,
    /// Current checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 p-3 rounded-lg border border-theme cursor-pointer hover:border-accent-primary/50 transition-colors">
            <input
                type="checkbox"
                name="tools"
                value=value
                class="w-4 h-4 rounded border-theme-primary text-theme-accent focus:ring-2 focus:ring-theme-accent"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="text-sm text-theme-primary">{label}</span>
        </label>
    }
}
