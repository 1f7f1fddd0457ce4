use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::api::{fetch_recipes, fetch_recommendation};
use crate::frontend::components::{ErrorAlert, PageFrame, RecipeGrid};
use crate::routing::{Page, recipe_href};
use crate::types::{Cuisine, RecipeQuery};

#[component]
pub fn RecipesPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::Recipes.layout()>
            <div class="max-w-6xl mx-auto px-6 py-8 space-y-10">
                <TodayRecipe/>
                <RecipeBrowser/>
            </div>
        </PageFrame>
    }
}

#[component]
fn TodayRecipe() -> impl IntoView {
    let recommendation = Resource::new(|| (), |_| fetch_recommendation());

    view! {
        <Transition fallback=|| ()>
            {move || Suspend::new(async move {
                let today = recommendation.await.unwrap_or_default();
                let (Some(id), Some(name)) = (today.recipe_id, today.recipe_name) else {
                    return ().into_any();
                };
                let image = today.image_path.unwrap_or_default();
                view! {
                    <a href=recipe_href(id) class="flex items-center gap-6 p-6 rounded-2xl bg-emerald-50 border border-emerald-200">
                        <img src=image alt=name.clone() class="w-40 h-28 object-cover rounded-lg bg-white"/>
                        <div>
                            <p class="text-sm font-semibold text-emerald-700 uppercase">"Today's pick for you"</p>
                            <h2 class="text-2xl font-bold">{name}</h2>
                        </div>
                    </a>
                }
                .into_any()
            })}
        </Transition>
    }
}

/// Search box, cuisine filter and the "hide my allergens" toggle over the
/// recipe list.
#[component]
fn RecipeBrowser() -> impl IntoView {
    let query_map = use_query_map();

    let text = RwSignal::new(
        query_map
            .with_untracked(|q| q.get("query"))
            .unwrap_or_default(),
    );
    let cuisine = RwSignal::new(None::<Cuisine>);
    let filtered = RwSignal::new(false);

    // The header search navigates here with ?query=...
    Effect::new(move |_| {
        let from_url = query_map.with(|q| q.get("query")).unwrap_or_default();
        text.set(from_url);
    });

    let applied = Memo::new(move |_| RecipeQuery {
        query: Some(text.get()).filter(|t| !t.trim().is_empty()),
        cuisine: cuisine.get(),
        filtered: filtered.get(),
    });

    let recipes = Resource::new(move || applied.get(), fetch_recipes);

    view! {
        <section>
            <div class="flex flex-wrap items-center gap-3 mb-6">
                <input
                    type="search"
                    placeholder="Search by name or ingredient"
                    prop:value=move || text.get()
                    on:change=move |ev| text.set(event_target_value(&ev))
                    class="flex-1 min-w-[12rem] px-4 py-2 rounded-lg border border-stone-300"
                />
                <select
                    class="px-3 py-2 rounded-lg border border-stone-300 bg-white"
                    on:change=move |ev| cuisine.set(event_target_value(&ev).parse().ok())
                >
                    <option value="">"All cuisines"</option>
                    {Cuisine::ALL
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.as_str() selected=move || cuisine.get() == Some(c)>
                                {c.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
                <label class="flex items-center gap-2 text-sm text-stone-700">
                    <input
                        type="checkbox"
                        prop:checked=move || filtered.get()
                        on:change=move |ev| filtered.set(event_target_checked(&ev))
                    />
                    "Hide my allergens"
                </label>
            </div>

            <Transition fallback=|| view! { <p class="text-stone-400">"Loading recipes..."</p> }>
                {move || Suspend::new(async move {
                    match recipes.await {
                        Ok(list) => view! {
                            <RecipeGrid recipes=list empty_message="No recipes match your search."/>
                        }
                        .into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Transition>
        </section>
    }
}
