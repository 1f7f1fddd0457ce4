use leptos::prelude::*;

use crate::api::fetch_scraps;
use crate::frontend::components::{ErrorAlert, PageFrame, RecipeGrid};
use crate::routing::Page;

#[component]
pub fn ScrapsPage() -> impl IntoView {
    let recipes = Resource::new(|| (), |_| fetch_scraps());

    view! {
        <PageFrame layout=Page::Scraps.layout()>
            <h1 class="text-3xl font-bold mb-6">"Scrapped recipes"</h1>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading scraps..."</p> }>
                {move || Suspend::new(async move {
                    match recipes.await {
                        Ok(list) => view! {
                            <RecipeGrid recipes=list empty_message="Scrap recipes to find them here later."/>
                        }
                        .into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </PageFrame>
    }
}
