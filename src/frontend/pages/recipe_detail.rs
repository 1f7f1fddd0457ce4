use leptos::prelude::*;

use crate::api::{ToggleScrap, fetch_allergies, fetch_recipe};
use crate::frontend::components::{Alert, AlertVariant, EmptyState, ErrorAlert, PageFrame};
use crate::frontend::use_route_param;
use crate::routing::Page;
use crate::services::flagged_ingredients;
use crate::types::RecipeDetail;

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::RecipeDetail.layout()>
            <RecipeView/>
        </PageFrame>
    }
}

#[component]
fn RecipeView() -> impl IntoView {
    let recipe_id = use_route_param("recipeId");
    let parsed_id = Memo::new(move |_| recipe_id.get().and_then(|id| id.parse::<i64>().ok()));

    let toggle = ServerAction::<ToggleScrap>::new();

    let recipe = Resource::new(
        move || (parsed_id.get(), toggle.version().get()),
        |(id, _)| async move {
            match id {
                Some(id) => fetch_recipe(id).await.map(Some),
                None => Ok(None),
            }
        },
    );

    // Anonymous visitors have no allergy list; that is not an error here.
    let allergies = Resource::new(|| (), |_| async move { fetch_allergies().await.unwrap_or_default() });

    view! {
        <article class="max-w-4xl mx-auto px-6 py-8">
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading recipe..."</p> }>
                {move || Suspend::new(async move {
                    let allergies = allergies.await;
                    match (recipe.await, parsed_id.get_untracked()) {
                        (Ok(Some(detail)), Some(id)) => view! {
                            <RecipeBody detail=detail allergies=allergies on_scrap=move || {
                                toggle.dispatch(ToggleScrap { recipe_id: id });
                            }/>
                        }
                        .into_any(),
                        (Ok(_), _) => view! { <EmptyState message="This recipe does not exist."/> }.into_any(),
                        (Err(e), _) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
            {move || {
                toggle
                    .value()
                    .get()
                    .and_then(|r| r.err())
                    .map(|e| view! { <ErrorAlert message=e.to_string()/> })
            }}
        </article>
    }
}

#[component]
fn RecipeBody(
    detail: RecipeDetail,
    allergies: Vec<String>,
    on_scrap: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let names: Vec<String> = detail
        .ingredients
        .iter()
        .map(|line| line.ingredient.clone())
        .collect();
    let flagged: Vec<String> = flagged_ingredients(&names, &allergies)
        .into_iter()
        .map(str::to_owned)
        .collect();

    let similar = detail.similar_allergy_ingredients.clone();
    let nutrition = detail.nutrition;

    view! {
        <header class="mb-8">
            {detail.image_path.clone().map(|src| view! {
                <img src=src alt=detail.recipe_name.clone() class="w-full h-80 object-cover rounded-2xl mb-6"/>
            })}
            <div class="flex items-start justify-between gap-4">
                <div>
                    <h1 class="text-4xl font-bold mb-2">{detail.recipe_name.clone()}</h1>
                    <p class="text-stone-500">
                        {format!(
                            "{} servings · {} · {} · {}",
                            detail.serving, detail.cuisine, detail.food_type, detail.cooking_style
                        )}
                    </p>
                    <p class="text-sm text-stone-400 mt-1">
                        {format!("{} views · {} scraps", detail.view_count, detail.scrap_count)}
                    </p>
                </div>
                <button
                    type="button"
                    class="btn-ghost"
                    on:click=move |_| on_scrap()
                >
                    {if detail.scrapped { "★ Scrapped" } else { "☆ Scrap" }}
                </button>
            </div>
        </header>

        {(!flagged.is_empty()).then(|| view! {
            <Alert
                message=format!("Contains your allergens: {}", flagged.join(", "))
                variant=AlertVariant::Error
            />
        })}
        {(!similar.is_empty()).then(|| view! {
            <Alert
                message=format!("May contain ingredients similar to your allergens: {}", similar.join(", "))
                variant=AlertVariant::Info
            />
        })}

        <section class="grid md:grid-cols-2 gap-8 mb-10">
            <div>
                <h2 class="text-xl font-semibold mb-3">"Ingredients"</h2>
                <ul class="divide-y divide-stone-200">
                    {detail
                        .ingredients
                        .into_iter()
                        .map(|line| {
                            let warn = flagged.contains(&line.ingredient);
                            view! {
                                <li class="py-2 flex justify-between" class:text-red-600=warn>
                                    <span>{line.ingredient}</span>
                                    <span class="text-stone-500">{line.quantity}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div>
                <h2 class="text-xl font-semibold mb-3">"Nutrition"</h2>
                <dl class="grid grid-cols-2 gap-y-1 text-sm">
                    <dt class="text-stone-500">"Calories"</dt><dd>{format!("{} kcal", nutrition.calories)}</dd>
                    <dt class="text-stone-500">"Carbohydrate"</dt><dd>{format!("{} g", nutrition.carbohydrate)}</dd>
                    <dt class="text-stone-500">"Protein"</dt><dd>{format!("{} g", nutrition.protein)}</dd>
                    <dt class="text-stone-500">"Fat"</dt><dd>{format!("{} g", nutrition.fat)}</dd>
                    <dt class="text-stone-500">"Sodium"</dt><dd>{format!("{} mg", nutrition.sodium)}</dd>
                </dl>
            </div>
        </section>

        <section>
            <h2 class="text-xl font-semibold mb-3">"Steps"</h2>
            <ol class="space-y-6">
                {detail
                    .instructions
                    .into_iter()
                    .enumerate()
                    .map(|(i, step)| view! {
                        <li class="flex gap-4">
                            <span class="shrink-0 w-8 h-8 rounded-full bg-emerald-600 text-white flex items-center justify-center">
                                {i + 1}
                            </span>
                            <div class="flex-1">
                                <p>{step.instruction}</p>
                                {step.instruction_image.map(|src| view! {
                                    <img src=src alt="" class="mt-3 w-64 rounded-lg"/>
                                })}
                            </div>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
