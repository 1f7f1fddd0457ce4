use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-emerald-600 text-white hover:bg-emerald-700 focus:ring-emerald-500",
            Self::Ghost => "border border-stone-300 text-stone-700 hover:bg-stone-100 focus:ring-stone-400",
            Self::Danger => "border border-red-300 text-red-700 hover:bg-red-50 focus:ring-red-400",
        }
    }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg transition-colors \
         focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed {}",
        variant.classes()
    );

    if !href.is_empty() {
        return view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any();
    }

    let loading_text = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    let label = children();
    let loading = move || loading.get().unwrap_or(false);

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get().unwrap_or(false) || loading()
        >
            <span class="flex items-center justify-center gap-2" class:hidden=move || !loading()>
                <span class="w-4 h-4 border-2 border-white/40 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
            <span class:hidden=loading>{label}</span>
        </button>
    }
    .into_any()
}
