use leptos::prelude::*;

use crate::routing::recipe_href;
use crate::types::RecipeSummary;

const PLACEHOLDER_IMAGE: &str = "/assets/recipe-placeholder.svg";

#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let image = recipe
        .image_path
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <a
            href=recipe_href(recipe.recipe_id)
            class="block rounded-xl overflow-hidden bg-white border border-stone-200 hover:shadow-md transition-shadow"
        >
            <img src=image alt=recipe.recipe_name.clone() class="w-full h-40 object-cover bg-stone-100"/>
            <div class="p-4">
                <h3 class="font-semibold text-stone-900 truncate">{recipe.recipe_name}</h3>
                <p class="text-sm text-stone-500 flex justify-between">
                    <span>{format!("{} servings", recipe.serving)}</span>
                    {recipe.scrapped.then(|| view! { <span title="Scrapped">"★"</span> })}
                </p>
            </div>
        </a>
    }
}

#[component]
pub fn RecipeGrid(
    recipes: Vec<RecipeSummary>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    if recipes.is_empty() {
        return view! { <p class="text-stone-500 py-10 text-center">{empty_message}</p> }.into_any();
    }

    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-5">
            {recipes
                .into_iter()
                .map(|recipe| view! { <RecipeCard recipe=recipe/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
