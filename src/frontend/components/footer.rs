use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-fixture="footer" class="border-t border-stone-200 bg-stone-50">
            <div class="max-w-6xl mx-auto px-6 py-10 text-center">
                <p class="text-xl font-bold text-emerald-700 mb-2">"🥗 ReciGuard"</p>
                <p class="text-stone-500 mb-4">"Recipes that respect your allergies."</p>
                <div class="flex justify-center gap-4 text-sm text-stone-500 mb-4">
                    <a href="/recipes" class="hover:text-stone-800">"Recipes"</a>
                    <span>"|"</span>
                    <a href="/users/recipe-form" class="hover:text-stone-800">"Share a recipe"</a>
                    <span>"|"</span>
                    <a href="/users/allergy" class="hover:text-stone-800">"Allergy settings"</a>
                </div>
                <p class="text-xs text-stone-400">"© ReciGuard. MIT License."</p>
            </div>
        </footer>
    }
}
