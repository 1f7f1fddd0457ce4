use leptos::prelude::*;

use crate::api::fetch_all_recipes;
use crate::frontend::components::{ErrorAlert, PageFrame, RecipeGrid};
use crate::routing::Page;

#[component]
pub fn AllRecipesPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::AllRecipes.layout()>
            <AllRecipesList/>
        </PageFrame>
    }
}

#[component]
fn AllRecipesList() -> impl IntoView {
    let recipes = Resource::new(|| (), |_| fetch_all_recipes());

    view! {
        <section class="max-w-6xl mx-auto px-6 py-8">
            <h1 class="text-3xl font-bold mb-6">"All recipes"</h1>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading recipes..."</p> }>
                {move || Suspend::new(async move {
                    match recipes.await {
                        Ok(list) => {
                            let count = format!("{} recipes", list.len());
                            view! {
                                <p class="text-sm text-stone-500 mb-4">{count}</p>
                                <RecipeGrid recipes=list empty_message="There are no recipes yet."/>
                            }
                            .into_any()
                        }
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </section>
    }
}
