use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::Page;

const ACCOUNT_LINKS: [(Page, &str); 6] = [
    (Page::InfoUpdate, "Profile"),
    (Page::PasswordUpdate, "Password"),
    (Page::AllergyUpdate, "Allergies"),
    (Page::MyRecipes, "My recipes"),
    (Page::Scraps, "Scraps"),
    (Page::RecipeForm, "Share a recipe"),
];

/// Primary navigation between the account pages.
#[component]
pub fn AccountSidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside data-fixture="account-sidebar" class="w-48 shrink-0">
            <h2 class="text-sm font-semibold text-stone-500 uppercase tracking-wide mb-3">"My page"</h2>
            <ul class="space-y-1">
                {ACCOUNT_LINKS
                    .into_iter()
                    .map(|(page, label)| {
                        let href = page.pattern();
                        let active = move || location.pathname.get() == href;
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="block px-3 py-2 rounded-lg text-stone-700 hover:bg-stone-100"
                                    class:bg-emerald-50=active
                                    class:text-emerald-800=active
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
