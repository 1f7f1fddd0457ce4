use leptos::prelude::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] readonly: bool,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();

    view! {
        <div>
            <label for=name.clone() class="block text-sm font-medium text-stone-700 mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-2.5 rounded-lg bg-white border border-stone-300
                       text-stone-900 placeholder-stone-400 read-only:bg-stone-100
                       focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-transparent"
            />
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-stone-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="you@example.com"
            input_type="email"
            required=true
            value=value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] hint: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name=name.unwrap_or_else(|| "password".to_string())
            placeholder="••••••••"
            input_type="password"
            required=true
            hint=hint
            value=value
        />
    }
}
