use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
    Info,
}

#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (icon, classes) = match variant {
        AlertVariant::Success => ("✓", "bg-emerald-50 border-emerald-300 text-emerald-800"),
        AlertVariant::Error => ("✕", "bg-red-50 border-red-300 text-red-700"),
        AlertVariant::Info => ("ℹ", "bg-sky-50 border-sky-300 text-sky-800"),
    };

    view! {
        <div role="alert" class=format!("mb-6 p-4 rounded-lg border text-sm {}", classes)>
            <p class="flex items-center gap-2">
                <span>{icon}</span>
                <span>{message}</span>
            </p>
            {children.map(|c| view! { <div class="mt-3">{c()}</div> })}
        </div>
    }
}

#[component]
pub fn SuccessAlert(
    #[prop(into)] message: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Success>
            {children.map(|c| c())}
        </Alert>
    }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Error />
    }
}

/// Shown where a list or detail has nothing to display.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <Alert message=message variant=AlertVariant::Info />
    }
}
