mod common;

#[cfg(test)]
pub mod api_tests {
    use super::common::*;

    use reciguard::api::join_url;
    use reciguard::api::session::*;
    use reciguard::common::*;
    use reciguard::types::*;

    #[test]
    fn test_api_error_from_status() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, "nope"), ApiError::Unauthorized);
        assert_eq!(
            ApiError::from_status(404, r#"{"message":"recipe"}"#),
            ApiError::NotFound("recipe".to_string())
        );
        assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound("resource".to_string()));
        assert_eq!(
            ApiError::from_status(409, " username taken \n"),
            ApiError::Rejected {
                status: 409,
                message: "username taken".to_string(),
            }
        );
        assert_eq!(
            ApiError::from_status(502, r#"{"message":"upstream"}"#),
            ApiError::Backend { status: 502 }
        );
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Please log in to continue");
        assert_eq!(
            ApiError::Validation("Invalid email address".to_string()).to_string(),
            "Invalid email address"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://b:8080/", "/recipes"), "http://b:8080/recipes");
        assert_eq!(join_url("http://b:8080", "users/info"), "http://b:8080/users/info");
    }

    #[test]
    fn test_user_cookie_round_trip() {
        let user = get_seed_user();
        let encoded = encode_user_cookie(&user);
        assert_eq!(encoded, "42|kim_chef");

        let decoded = decode_user_cookie(&encoded).unwrap();
        assert_eq!(decoded.user_id, user.user_id);
        assert_eq!(decoded.username, user.username);
        assert_eq!(decoded.email, None);
    }

    #[test]
    fn test_user_cookie_escapes_separator() {
        let user = UserPublic {
            user_id: 1,
            username: "a|b c".to_string(),
            email: None,
        };
        let decoded = decode_user_cookie(&encode_user_cookie(&user)).unwrap();
        assert_eq!(decoded.username, "a|b c");
    }

    #[test]
    fn test_decode_user_cookie_fails_on_garbage() {
        assert!(decode_user_cookie("").is_none());
        assert!(decode_user_cookie("abc|kim").is_none());
        assert!(decode_user_cookie("7|").is_none());
        assert!(decode_user_cookie("7").is_none());
    }

    #[test]
    fn test_recipe_query_pairs() {
        let query = RecipeQuery {
            query: Some("  kimchi stew ".to_string()),
            cuisine: Some(Cuisine::Korean),
            filtered: true,
        };
        assert_eq!(
            query.to_pairs(),
            [
                ("query", "kimchi stew".to_string()),
                ("cuisine", "korean".to_string()),
                ("filtered", "true".to_string()),
            ]
        );
        assert_eq!(query.to_query_string(), "query=kimchi%20stew&cuisine=korean&filtered=true");
    }

    #[test]
    fn test_recipe_query_omits_defaults() {
        let query = RecipeQuery {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(query.to_pairs().is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_cuisine_from_str() {
        assert_eq!(" Japanese ".parse::<Cuisine>(), Ok(Cuisine::Japanese));
        assert_eq!("thai".parse::<Cuisine>(), Err("invalid cuisine: thai".to_string()));
        assert_eq!(Cuisine::Fusion.to_string(), "fusion");
    }

    #[test]
    fn test_recipe_detail_deserializes_backend_json() {
        let json = r#"{
            "recipeName": "Bibimbap",
            "serving": 1,
            "cuisine": "korean",
            "foodType": "rice",
            "cookingStyle": "mix",
            "calories": 550, "sodium": 900, "carbohydrate": 80, "fat": 12, "protein": 20,
            "scrapped": false,
            "scrapCount": 3,
            "viewCount": 10,
            "ingredients": [{"ingredient": "egg", "quantity": "1"}],
            "instructions": [{"instruction": "Mix"}],
            "similarAllergyIngredients": []
        }"#;
        let detail: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.recipe_name, "Bibimbap");
        assert_eq!(detail.nutrition.calories, 550);
        assert_eq!(detail.ingredients[0].ingredient, "egg");
        assert_eq!(detail.instructions[0].instruction_image, None);
    }
}
