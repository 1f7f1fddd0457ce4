use leptos::prelude::*;

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl bg-white border border-stone-200 shadow-sm
                    hover:border-emerald-400 transition-colors">
            <span class="text-4xl mb-4 block">{icon}</span>
            <h3 class="text-lg font-semibold text-stone-900 mb-2">{title}</h3>
            <p class="text-stone-500 text-sm leading-relaxed">{desc}</p>
        </div>
    }
}
