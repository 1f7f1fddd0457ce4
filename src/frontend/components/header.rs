use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::frontend::{use_current_user, use_session_actions};
use crate::routing::account_href;

#[component]
fn Brand() -> impl IntoView {
    view! {
        <a href="/" class="flex items-center gap-2 group">
            <span class="text-3xl group-hover:animate-bounce">"🥗"</span>
            <span class="text-xl font-bold text-emerald-700">"ReciGuard"</span>
        </a>
    }
}

/// Links that depend on whether someone is logged in.
#[component]
fn SessionLinks() -> impl IntoView {
    let user = use_current_user();
    let logout = use_session_actions().logout;

    view! {
        <Transition fallback=|| ()>
            {move || Suspend::new(async move {
                let current = match user {
                    Some(user) => user.0.await.ok().flatten(),
                    None => None,
                };
                match current {
                    Some(current) => view! {
                        <a href=account_href(current.user_id) class="text-stone-600 hover:text-emerald-700">
                            {current.username}
                        </a>
                        <ActionForm action=logout attr:class="inline">
                            <button type="submit" class="btn-ghost text-sm px-4 py-2">"Log out"</button>
                        </ActionForm>
                    }
                    .into_any(),
                    None => view! {
                        <a href="/auth/login" class="btn-ghost text-sm px-4 py-2">"Log in"</a>
                        <a href="/auth/register" class="btn-primary text-sm px-4 py-2">"Sign up"</a>
                    }
                    .into_any(),
                }
            })}
        </Transition>
    }
}

/// Site header for the landing page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav data-fixture="main-header" class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-white/80 border-b border-stone-200">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <Brand/>
                <div class="flex items-center gap-6">
                    <a href="#features" class="text-stone-600 hover:text-stone-900">"Features"</a>
                    <a href="/recipes" class="text-stone-600 hover:text-stone-900">"Recipes"</a>
                    <SessionLinks/>
                </div>
            </div>
        </nav>
    }
}

/// Compact header with recipe search, used on browsing and account pages.
#[component]
pub fn SubHeader() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let navigate = use_navigate();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = search.get().trim().to_string();
        let target = if text.is_empty() {
            "/recipes".to_string()
        } else {
            format!("/recipes?query={}", urlencoding::encode(&text))
        };
        navigate(&target, Default::default());
    };

    view! {
        <header data-fixture="sub-header" class="border-b-2 border-stone-200 bg-white">
            <div class="max-w-6xl mx-auto px-6 py-3 flex items-center gap-6">
                <Brand/>
                <form class="flex-1 flex" on:submit=on_search>
                    <input
                        type="search"
                        name="query"
                        placeholder="Search recipes"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        class="w-full px-4 py-2 rounded-l-lg border border-stone-300 focus:outline-none focus:ring-2 focus:ring-emerald-500"
                    />
                    <button type="submit" class="px-4 rounded-r-lg bg-emerald-600 text-white">"Search"</button>
                </form>
                <div class="flex items-center gap-4 text-sm">
                    <a href="/recipes/all" class="text-stone-600 hover:text-emerald-700">"All recipes"</a>
                    <a href="/users/recipe-form" class="text-stone-600 hover:text-emerald-700">"Share a recipe"</a>
                    <SessionLinks/>
                </div>
            </div>
        </header>
    }
}
