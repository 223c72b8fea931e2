use leptos::prelude::*;

/// Labelled text input
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows an asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Helper text below the input
    #[prop(optional)]
    hint: Option<&'static str>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm font-medium text-gray-900">
                {label}
                {required.then(|| " *")}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary/40 disabled:opacity-50"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {hint.map(|h| view! { <p class="text-xs text-gray-500">{h}</p> })}
        </div>
    }
}

/// Labelled text area
#[component]
pub fn TextAreaField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)]
    rows: u32,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm font-medium text-gray-900">{label}</label>
            <textarea
                id=id
                name=id
                class="w-full rounded-md border border-gray-300 px-3 py-2 text-sm resize-none focus:outline-none focus:ring-2 focus:ring-primary/40 disabled:opacity-50"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Labelled select with a leading empty option
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Text of the empty option
    placeholder: &'static str,
    #[prop(optional)]
    hint: Option<&'static str>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
    #[prop(into, default = Signal::from(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="block text-sm font-medium text-gray-900">
                {label}
                {required.then(|| " *")}
            </label>
            <select
                id=id
                name=id
                class="w-full rounded-md border border-gray-300 p-2 text-sm disabled:opacity-50"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
                // prop:value above is applied before the options exist, so a
                // remounted select would fall back to the placeholder; each
                // option carries its own selectedness instead
                {options.into_iter().map(|(val, text)| {
                    let option_value = val.clone();
                    view! {
                        <option value=val selected=move || value.with(|v| *v == option_value)>
                            {text}
                        </option>
                    }
                }).collect_view()}
            </select>
            {hint.map(|h| view! { <p class="text-xs text-gray-500">{h}</p> })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render_slots(current: &str) -> String {
        let owner = Owner::new();
        let current = current.to_string();
        owner.with(move || {
            view! {
                <SelectField
                    id="preferred_datetime"
                    label="Data e Horário"
                    placeholder="Selecione uma data e horário"
                    value=current
                    on_change=Callback::new(|_: String| {})
                    options=vec![
                        ("2025-10-20T09:00".to_string(), "seg., 20/10, 09:00".to_string()),
                        ("2025-10-20T10:00".to_string(), "seg., 20/10, 10:00".to_string()),
                    ]
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_select_restores_kept_value() {
        let html = render_slots("2025-10-20T10:00");

        assert!(html.contains(r#"<option value="2025-10-20T10:00" selected"#));
        assert!(!html.contains(r#"<option value="2025-10-20T09:00" selected"#));
        assert!(!html.contains(r#"<option value="" selected"#));
    }

    #[test]
    fn test_select_without_value_shows_placeholder() {
        let html = render_slots("");

        assert!(html.contains(r#"<option value="" selected"#));
        assert!(!html.contains(r#"<option value="2025-10-20T10:00" selected"#));
    }
}
