use leptos::prelude::*;

use crate::api::fetch_account;
use crate::frontend::components::{EmptyState, ErrorAlert, PageFrame};
use crate::frontend::use_route_param;
use crate::routing::Page;
use crate::types::AccountSummary;

#[component]
pub fn AccountHomePage() -> impl IntoView {
    let user_id = use_route_param("userid");
    let parsed_id = Memo::new(move |_| user_id.get().and_then(|id| id.parse::<i64>().ok()));

    let account = Resource::new(
        move || parsed_id.get(),
        |id| async move {
            match id {
                Some(id) => fetch_account(id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    view! {
        <PageFrame layout=Page::AccountHome.layout()>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading account..."</p> }>
                {move || Suspend::new(async move {
                    match account.await {
                        Ok(Some(summary)) => view! { <AccountOverview summary=summary/> }.into_any(),
                        Ok(None) => view! { <EmptyState message="No such user."/> }.into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </PageFrame>
    }
}

#[component]
fn AccountOverview(summary: AccountSummary) -> impl IntoView {
    let no_allergies = summary.allergies.is_empty();

    view! {
        <h1 class="text-3xl font-bold mb-1">{summary.username}</h1>
        <p class="text-stone-500 mb-8">{summary.email.unwrap_or_default()}</p>

        <div class="grid grid-cols-2 gap-4 mb-8 max-w-md">
            <a href=Page::MyRecipes.pattern() class="p-4 rounded-xl border border-stone-200 hover:bg-stone-50">
                <p class="text-3xl font-bold text-emerald-700">{summary.recipe_count}</p>
                <p class="text-sm text-stone-500">"Recipes shared"</p>
            </a>
            <a href=Page::Scraps.pattern() class="p-4 rounded-xl border border-stone-200 hover:bg-stone-50">
                <p class="text-3xl font-bold text-emerald-700">{summary.scrap_count}</p>
                <p class="text-sm text-stone-500">"Scrapped recipes"</p>
            </a>
        </div>

        <h2 class="text-xl font-semibold mb-3">"Allergies"</h2>
        {if no_allergies {
            view! {
                <p class="text-stone-500">
                    "No allergies registered. "
                    <a href=Page::AllergyUpdate.pattern() class="text-emerald-700">"Add some"</a>
                </p>
            }
            .into_any()
        } else {
            view! {
                <ul class="flex flex-wrap gap-2">
                    {summary
                        .allergies
                        .into_iter()
                        .map(|a| view! { <li class="px-3 py-1 rounded-full bg-red-50 text-red-700 text-sm">{a}</li> })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }}
    }
}
