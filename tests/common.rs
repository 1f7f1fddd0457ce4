#![allow(dead_code)]

use std::cell::Cell;

use reciguard::routing::Viewport;
use reciguard::types::{IngredientLine, InstructionStep, RecipeDraft, UserPublic};

/// Counts how often it was asked to scroll.
#[derive(Default)]
pub struct RecordingViewport {
    pub resets: Cell<usize>,
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&self) {
        self.resets.set(self.resets.get() + 1);
    }
}

pub fn get_seed_user() -> UserPublic {
    UserPublic {
        user_id: 42,
        username: "kim_chef".to_string(),
        email: Some("kim@test.com".to_string()),
    }
}

pub fn get_seed_draft() -> RecipeDraft {
    RecipeDraft {
        recipe_name: "Kimchi stew".to_string(),
        serving: 2,
        cuisine: "korean".to_string(),
        food_type: "stew".to_string(),
        cooking_style: "boil".to_string(),
        image_path: None,
        ingredients: vec![
            IngredientLine {
                ingredient: "kimchi".to_string(),
                quantity: "300g".to_string(),
            },
            IngredientLine {
                ingredient: "pork belly".to_string(),
                quantity: "200g".to_string(),
            },
        ],
        instructions: vec![InstructionStep {
            instruction_image: None,
            instruction: "Simmer everything for 20 minutes".to_string(),
        }],
    }
}

/// Env-style lookup over a fixed list of pairs.
pub fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}
