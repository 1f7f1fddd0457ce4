use leptos::prelude::*;

use crate::frontend::use_current_user;
use crate::routing::{Page, Params, href};

/// Secondary account panel: who is logged in and a way back to the account
/// home.
#[component]
pub fn HomePanel() -> impl IntoView {
    let user = use_current_user();

    view! {
        <section data-fixture="home-panel" class="w-56 shrink-0 p-4 rounded-xl bg-stone-50 border border-stone-200 self-start">
            <Transition fallback=|| view! { <p class="text-sm text-stone-400">"Loading..."</p> }>
                {move || Suspend::new(async move {
                    let current = match user {
                        Some(user) => user.0.await.ok().flatten(),
                        None => None,
                    };
                    match current {
                        Some(current) => {
                            let home = href(
                                Page::AccountHome,
                                &Params::new().with("userid", current.user_id.to_string()),
                            )
                            .unwrap_or_else(|e| {
                                log::warn!("{}", e);
                                "/".to_string()
                            });
                            view! {
                                <p class="text-xs text-stone-500">"Signed in as"</p>
                                <p class="text-lg font-semibold text-stone-900 mb-3">{current.username}</p>
                                <a href=home class="text-sm text-emerald-700 hover:underline">"Account home →"</a>
                            }
                            .into_any()
                        }
                        None => view! {
                            <p class="text-sm text-stone-600 mb-3">"You are not logged in."</p>
                            <a href="/auth/login" class="btn-primary text-sm">"Log in"</a>
                        }
                        .into_any(),
                    }
                })}
            </Transition>
        </section>
    }
}
