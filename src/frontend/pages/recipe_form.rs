use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api::CreateRecipe;
use crate::frontend::components::{Button, ButtonVariant, ErrorAlert, PageFrame, TextInput};
use crate::routing::{Page, recipe_href};
use crate::types::{Cuisine, IngredientLine, InstructionStep, RecipeDraft};

#[derive(Clone, Copy)]
struct IngredientRow {
    id: usize,
    ingredient: RwSignal<String>,
    quantity: RwSignal<String>,
}

#[derive(Clone, Copy)]
struct StepRow {
    id: usize,
    instruction: RwSignal<String>,
    image: RwSignal<String>,
}

#[component]
pub fn RecipeFormPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::RecipeForm.layout()>
            <RecipeForm/>
        </PageFrame>
    }
}

#[component]
fn RecipeForm() -> impl IntoView {
    let create = ServerAction::<CreateRecipe>::new();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let serving = RwSignal::new("1".to_string());
    let cuisine = RwSignal::new(Cuisine::Korean);
    let food_type = RwSignal::new(String::new());
    let cooking_style = RwSignal::new(String::new());
    let image_path = RwSignal::new(String::new());

    let next_id = StoredValue::new(0usize);
    let fresh_id = move || {
        next_id.update_value(|n| *n += 1);
        next_id.get_value()
    };

    let ingredients = RwSignal::new(vec![IngredientRow {
        id: fresh_id(),
        ingredient: RwSignal::new(String::new()),
        quantity: RwSignal::new(String::new()),
    }]);
    let steps = RwSignal::new(vec![StepRow {
        id: fresh_id(),
        instruction: RwSignal::new(String::new()),
        image: RwSignal::new(String::new()),
    }]);

    let local_error = RwSignal::new(None::<String>);

    let add_ingredient = move |_| {
        let row = IngredientRow {
            id: fresh_id(),
            ingredient: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
        };
        ingredients.update(|rows| rows.push(row));
    };
    let add_step = move |_| {
        let row = StepRow {
            id: fresh_id(),
            instruction: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),
        };
        steps.update(|rows| rows.push(row));
    };

    let build_draft = move || RecipeDraft {
        recipe_name: name.get_untracked(),
        serving: serving.get_untracked().trim().parse().unwrap_or(0),
        cuisine: cuisine.get_untracked().as_str().to_string(),
        food_type: food_type.get_untracked(),
        cooking_style: cooking_style.get_untracked(),
        image_path: Some(image_path.get_untracked()),
        ingredients: ingredients.with_untracked(|rows| {
            rows.iter()
                .map(|row| IngredientLine {
                    ingredient: row.ingredient.get_untracked(),
                    quantity: row.quantity.get_untracked(),
                })
                .collect()
        }),
        instructions: steps.with_untracked(|rows| {
            rows.iter()
                .map(|row| InstructionStep {
                    instruction: row.instruction.get_untracked(),
                    instruction_image: Some(row.image.get_untracked()),
                })
                .collect()
        }),
    }
    .normalized();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = build_draft();
        match draft.validate() {
            Ok(()) => {
                local_error.set(None);
                create.dispatch(CreateRecipe { draft });
            }
            Err(problem) => local_error.set(Some(problem)),
        }
    };

    Effect::new(move |_| {
        if let Some(Ok(created)) = create.value().get() {
            log::info!("recipe {} created", created.recipe_id);
            navigate(&recipe_href(created.recipe_id), Default::default());
        }
    });

    let error_message = move || {
        local_error.get().or_else(|| {
            create
                .value()
                .get()
                .and_then(|r| r.err().map(|e| e.to_string()))
        })
    };

    view! {
        <section class="max-w-3xl mx-auto px-6 py-8">
            <h1 class="text-3xl font-bold mb-6">"Register a recipe"</h1>

            {move || error_message().map(|message| view! { <ErrorAlert message=message/> })}

            <form on:submit=on_submit class="space-y-8">
                <div class="grid md:grid-cols-2 gap-5">
                    <TextInput label="Recipe name" name="recipe_name" input_type="text" required=true value=name/>
                    <TextInput label="Servings" name="serving" input_type="number" required=true value=serving/>
                    <div>
                        <label for="cuisine" class="block text-sm font-medium text-stone-700 mb-1">"Cuisine"</label>
                        <select
                            id="cuisine"
                            class="w-full px-4 py-2.5 rounded-lg border border-stone-300 bg-white"
                            on:change=move |ev| {
                                if let Ok(c) = event_target_value(&ev).parse() {
                                    cuisine.set(c);
                                }
                            }
                        >
                            {Cuisine::ALL
                                .into_iter()
                                .map(|c| view! {
                                    <option value=c.as_str() selected=move || cuisine.get() == c>{c.label()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <TextInput label="Food type" name="food_type" input_type="text" placeholder="soup, dessert..." value=food_type/>
                    <TextInput label="Cooking style" name="cooking_style" input_type="text" placeholder="boil, grill..." value=cooking_style/>
                    <TextInput label="Image URL" name="image_path" input_type="url" value=image_path/>
                </div>

                <fieldset>
                    <legend class="text-xl font-semibold mb-3">"Ingredients"</legend>
                    <div class="space-y-3">
                        <For each=move || ingredients.get() key=|row| row.id let:row>
                            <div class="flex gap-3">
                                <input
                                    type="text"
                                    placeholder="Ingredient"
                                    prop:value=move || row.ingredient.get()
                                    on:input=move |ev| row.ingredient.set(event_target_value(&ev))
                                    class="flex-1 px-3 py-2 rounded-lg border border-stone-300"
                                />
                                <input
                                    type="text"
                                    placeholder="Quantity"
                                    prop:value=move || row.quantity.get()
                                    on:input=move |ev| row.quantity.set(event_target_value(&ev))
                                    class="w-40 px-3 py-2 rounded-lg border border-stone-300"
                                />
                                <button
                                    type="button"
                                    class="px-3 text-stone-400 hover:text-red-600"
                                    on:click=move |_| ingredients.update(|rows| rows.retain(|r| r.id != row.id))
                                >
                                    "✕"
                                </button>
                            </div>
                        </For>
                    </div>
                    <button type="button" class="mt-3 text-sm text-emerald-700" on:click=add_ingredient>
                        "+ Add ingredient"
                    </button>
                </fieldset>

                <fieldset>
                    <legend class="text-xl font-semibold mb-3">"Steps"</legend>
                    <ol class="space-y-3 list-decimal list-inside">
                        <For each=move || steps.get() key=|row| row.id let:row>
                            <li class="flex gap-3 items-start">
                                <textarea
                                    rows="2"
                                    placeholder="Describe this step"
                                    prop:value=move || row.instruction.get()
                                    on:input=move |ev| row.instruction.set(event_target_value(&ev))
                                    class="flex-1 px-3 py-2 rounded-lg border border-stone-300"
                                ></textarea>
                                <input
                                    type="url"
                                    placeholder="Image URL (optional)"
                                    prop:value=move || row.image.get()
                                    on:input=move |ev| row.image.set(event_target_value(&ev))
                                    class="w-56 px-3 py-2 rounded-lg border border-stone-300"
                                />
                                <button
                                    type="button"
                                    class="px-3 text-stone-400 hover:text-red-600"
                                    on:click=move |_| steps.update(|rows| rows.retain(|r| r.id != row.id))
                                >
                                    "✕"
                                </button>
                            </li>
                        </For>
                    </ol>
                    <button type="button" class="mt-3 text-sm text-emerald-700" on:click=add_step>
                        "+ Add step"
                    </button>
                </fieldset>

                <Button
                    variant=ButtonVariant::Primary
                    loading=create.pending()
                    loading_text="Saving recipe..."
                >
                    "Register recipe"
                </Button>
            </form>
        </section>
    }
}
