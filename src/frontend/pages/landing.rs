use leptos::prelude::*;

use crate::frontend::components::{FeatureCard, PageFrame};
use crate::routing::Page;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageFrame layout=Page::Landing.layout()>
            <LandingContent/>
        </PageFrame>
    }
}

#[component]
fn LandingContent() -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-6 flex flex-col items-center text-center">
            <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
                "Cook with confidence,"<br/>
                <span class="text-emerald-600">"skip the allergens"</span>
            </h1>
            <p class="text-xl text-stone-500 max-w-2xl mb-10">
                "ReciGuard recommends recipes that fit your allergy profile, "
                "warns you about similar ingredients, and lets you share your own dishes."
            </p>

            <div class="flex flex-wrap gap-4 justify-center">
                <a href="/auth/register" class="btn-primary btn-large">"Create an account"</a>
                <a href="/auth/login" class="btn-ghost btn-large">"Log in"</a>
            </div>
        </section>

        <section id="features" class="py-20 px-6 bg-white">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    "Why "<span class="text-emerald-600">"ReciGuard"</span>"?"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    <FeatureCard
                        icon="🛡️"
                        title="Allergy-aware"
                        desc="Tell us what you can't eat and every list can hide recipes containing it."
                    />
                    <FeatureCard
                        icon="🔍"
                        title="Similar ingredients"
                        desc="Recipe pages flag ingredients that are close relatives of your allergens."
                    />
                    <FeatureCard
                        icon="⭐"
                        title="Scraps"
                        desc="Save the recipes you love and find them again from your page."
                    />
                    <FeatureCard
                        icon="🍳"
                        title="Share yours"
                        desc="Register your own recipes with ingredients and step-by-step instructions."
                    />
                </div>
            </div>
        </section>
    }
}
