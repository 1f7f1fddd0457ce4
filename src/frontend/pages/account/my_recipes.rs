use leptos::prelude::*;

use crate::api::fetch_my_recipes;
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, PageFrame, RecipeGrid};
use crate::routing::Page;

#[component]
pub fn MyRecipesPage() -> impl IntoView {
    let recipes = Resource::new(|| (), |_| fetch_my_recipes());

    view! {
        <PageFrame layout=Page::MyRecipes.layout()>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">"My recipes"</h1>
                <Button variant=ButtonVariant::Ghost href=Page::RecipeForm.pattern()>
                    "+ New recipe"
                </Button>
            </div>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading recipes..."</p> }>
                {move || Suspend::new(async move {
                    match recipes.await {
                        Ok(list) => view! {
                            <RecipeGrid recipes=list empty_message="You have not shared any recipes yet."/>
                        }
                        .into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </PageFrame>
    }
}
