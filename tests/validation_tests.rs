mod common;

#[cfg(test)]
pub mod validation_tests {
    use super::common::*;

    use reciguard::services::*;
    use reciguard::types::{IngredientLine, InstructionStep};

    #[test]
    fn test_password_policy_success() {
        assert!(PasswordPolicy::validate("Abcdefg1").is_ok());
        assert!(PasswordPolicy::validate("abcdef1!").is_ok());
    }

    #[test]
    fn test_password_policy_fails_on_short_password() {
        assert!(PasswordPolicy::validate("Ab1!").is_err());
    }

    #[test]
    fn test_password_policy_fails_on_two_classes() {
        assert!(PasswordPolicy::validate("abcdefgh1").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("kim@test.com"));
        assert!(!validate_email("kim.test.com"));
        assert!(!validate_email("kim@localhost"));
        assert!(!validate_email("@test.com"));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("kim_chef-1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"x".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_signup() {
        assert!(validate_signup(" kim_chef ", "kim@test.com", "Secret12", "Secret12").is_ok());
        assert_eq!(
            validate_signup("kim_chef", "nope", "Secret12", "Secret12"),
            Err("Invalid email address".to_string())
        );
        assert_eq!(
            validate_signup("kim_chef", "kim@test.com", "Secret12", "Secret13"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_validate_password_change() {
        assert!(validate_password_change("OldPass1", "NewPass1", "NewPass1").is_ok());
        assert_eq!(
            validate_password_change("", "NewPass1", "NewPass1"),
            Err("Enter your current password".to_string())
        );
        assert_eq!(
            validate_password_change("OldPass1", "NewPass1", "NewPass2"),
            Err("New passwords do not match".to_string())
        );
        assert_eq!(
            validate_password_change("OldPass1", "OldPass1", "OldPass1"),
            Err("New password must differ from the current one".to_string())
        );
    }

    #[test]
    fn test_recipe_draft_validate_success() {
        assert!(get_seed_draft().normalized().validate().is_ok());
    }

    #[test]
    fn test_recipe_draft_normalized_drops_blank_rows() {
        let mut draft = get_seed_draft();
        draft.recipe_name = "  Kimchi stew ".to_string();
        draft.image_path = Some("   ".to_string());
        draft.ingredients.push(IngredientLine {
            ingredient: "  ".to_string(),
            quantity: "1".to_string(),
        });
        draft.instructions.push(InstructionStep {
            instruction_image: Some(String::new()),
            instruction: String::new(),
        });

        let draft = draft.normalized();
        assert_eq!(draft.recipe_name, "Kimchi stew");
        assert_eq!(draft.image_path, None);
        assert_eq!(draft.ingredients.len(), 2);
        assert_eq!(draft.instructions.len(), 1);
    }

    #[test]
    fn test_recipe_draft_validate_fails() {
        let mut draft = get_seed_draft();
        draft.recipe_name.clear();
        assert_eq!(draft.validate(), Err("Recipe name is required".to_string()));

        let mut draft = get_seed_draft();
        draft.serving = 0;
        assert_eq!(draft.validate(), Err("Serving must be between 1 and 99".to_string()));

        let mut draft = get_seed_draft();
        draft.ingredients.clear();
        assert_eq!(draft.validate(), Err("Add at least one ingredient".to_string()));

        let mut draft = get_seed_draft();
        draft.instructions.clear();
        assert_eq!(draft.validate(), Err("Add at least one cooking step".to_string()));

        let mut draft = get_seed_draft();
        draft.recipe_name = "x".repeat(101);
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_normalize_allergies() {
        let list = normalize_allergies([" Egg", "milk", "", "egg", "MILK ", "tree nut"]);
        assert_eq!(list, ["Egg", "milk", "tree nut"]);
    }

    #[test]
    fn test_flagged_ingredients() {
        let ingredients = vec![
            "Eggs".to_string(),
            "pork belly".to_string(),
            "soy sauce".to_string(),
        ];
        let allergies = vec!["egg".to_string(), "Soy".to_string()];
        assert_eq!(flagged_ingredients(&ingredients, &allergies), ["Eggs", "soy sauce"]);
        assert!(flagged_ingredients(&ingredients, &[]).is_empty());
    }

    #[test]
    fn test_common_allergens_are_normalized() {
        assert_eq!(normalize_allergies(COMMON_ALLERGENS).len(), COMMON_ALLERGENS.len());
    }

    #[test]
    fn test_flagged_ingredients_ignores_blank_allergies() {
        let ingredients = vec!["rice".to_string(), "kimchi".to_string()];
        let blank = vec![String::new(), "   ".to_string()];
        assert!(flagged_ingredients(&ingredients, &blank).is_empty());

        let mixed = vec!["".to_string(), " Kimchi ".to_string()];
        assert_eq!(flagged_ingredients(&ingredients, &mixed), ["kimchi"]);
    }

    #[test]
    fn test_allergy_case_folding_is_unicode_aware() {
        assert_eq!(normalize_allergies(["Écrevisse", "écrevisse"]), ["Écrevisse"]);
        assert!(same_allergen("ÉCREVISSE", " écrevisse "));
        assert!(!same_allergen("egg", "eggplant"));

        let ingredients = vec!["Écrevisse tail".to_string()];
        let allergies = vec!["écrevisse".to_string()];
        assert_eq!(flagged_ingredients(&ingredients, &allergies), ["Écrevisse tail"]);
    }
}
