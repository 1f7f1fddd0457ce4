use leptos::prelude::*;

use crate::api::{UpdateAllergies, fetch_allergies};
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, PageFrame, SuccessAlert};
use crate::routing::Page;
use crate::services::{COMMON_ALLERGENS, normalize_allergies, same_allergen};

#[component]
pub fn AllergyUpdatePage() -> impl IntoView {
    let current = Resource::new(|| (), |_| fetch_allergies());

    view! {
        <PageFrame layout=Page::AllergyUpdate.layout()>
            <h1 class="text-3xl font-bold mb-2">"Allergies"</h1>
            <p class="text-stone-500 mb-6">
                "Recipes containing these ingredients are hidden when you filter by allergy."
            </p>
            <Suspense fallback=|| view! { <p class="text-stone-400">"Loading allergies..."</p> }>
                {move || Suspend::new(async move {
                    match current.await {
                        Ok(list) => view! { <AllergyEditor initial=list/> }.into_any(),
                        Err(e) => view! { <ErrorAlert message=e.to_string()/> }.into_any(),
                    }
                })}
            </Suspense>
        </PageFrame>
    }
}

fn contains(list: &[String], item: &str) -> bool {
    list.iter().any(|a| same_allergen(a, item))
}

#[component]
fn AllergyEditor(initial: Vec<String>) -> impl IntoView {
    let update = ServerAction::<UpdateAllergies>::new();

    let selected = RwSignal::new(normalize_allergies(initial));
    let custom = RwSignal::new(String::new());

    let toggle = move |name: &'static str| {
        selected.update(|list| {
            if contains(list, name) {
                list.retain(|a| !same_allergen(a, name));
            } else {
                list.push(name.to_string());
            }
        });
    };

    let add_custom = move || {
        let entry = custom.get_untracked();
        selected.update(|list| {
            list.push(entry);
            let merged = normalize_allergies(list.iter());
            *list = merged;
        });
        custom.set(String::new());
    };

    // Adopt whatever the backend stored.
    Effect::new(move |_| {
        if let Some(Ok(stored)) = update.value().get() {
            selected.set(stored);
        }
    });

    let result = update.value();
    let saved = move || matches!(result.get(), Some(Ok(_)));
    let error_message = move || result.get().and_then(|r| r.err().map(|e| e.to_string()));

    let custom_entries = move || {
        selected
            .get()
            .into_iter()
            .filter(|a| !COMMON_ALLERGENS.iter().any(|c| same_allergen(c, a)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="max-w-xl">
            <Show when=saved>
                <SuccessAlert message="Allergies saved"/>
            </Show>
            <Show when=move || error_message().is_some()>
                <ErrorAlert message=error_message().unwrap_or_default()/>
            </Show>

            <div class="grid grid-cols-3 gap-2 mb-6">
                {COMMON_ALLERGENS
                    .into_iter()
                    .map(|name| view! {
                        <label class="flex items-center gap-2 px-3 py-2 rounded-lg border border-stone-200">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|list| contains(list, name))
                                on:change=move |_| toggle(name)
                            />
                            {name}
                        </label>
                    })
                    .collect_view()}
            </div>

            <div class="flex gap-2 mb-4">
                <input
                    type="text"
                    placeholder="Other ingredient"
                    prop:value=move || custom.get()
                    on:input=move |ev| custom.set(event_target_value(&ev))
                    class="flex-1 px-3 py-2 rounded-lg border border-stone-300"
                />
                <button type="button" class="btn-ghost" on:click=move |_| add_custom()>"Add"</button>
            </div>

            <ul class="flex flex-wrap gap-2 mb-8">
                {move || custom_entries()
                    .into_iter()
                    .map(|entry| {
                        let removed = entry.clone();
                        view! {
                            <li class="flex items-center gap-1 px-3 py-1 rounded-full bg-red-50 text-red-700 text-sm">
                                {entry}
                                <button
                                    type="button"
                                    on:click=move |_| selected.update(|list| list.retain(|a| a != &removed))
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <form on:submit=move |ev| {
                ev.prevent_default();
                update.dispatch(UpdateAllergies { ingredients: selected.get_untracked() });
            }>
                <Button variant=ButtonVariant::Primary loading=update.pending() loading_text="Saving...">
                    "Save allergies"
                </Button>
            </form>
        </div>
    }
}
