mod common;

#[cfg(test)]
pub mod routing_tests {
    use reciguard::common::*;
    use reciguard::routing::*;

    fn page_at(path: &str) -> Option<Page> {
        resolve(path).map(|m| m.value)
    }

    #[test]
    fn test_build_routes_success() {
        let table = build_routes().unwrap();
        assert_eq!(table.len(), Page::ALL.len());
    }

    #[test]
    fn test_resolve_every_declared_path() {
        let cases = [
            ("/", Page::Landing),
            ("/auth/login", Page::Login),
            ("/auth/register", Page::Signup),
            ("/recipes", Page::Recipes),
            ("/users/recipe-form", Page::RecipeForm),
            ("/recipes/17", Page::RecipeDetail),
            ("/users/5", Page::AccountHome),
            ("/users/info", Page::InfoUpdate),
            ("/users/password", Page::PasswordUpdate),
            ("/users/allergy", Page::AllergyUpdate),
            ("/users/myrecipes", Page::MyRecipes),
            ("/users/scraps", Page::Scraps),
            ("/recipes/all", Page::AllRecipes),
        ];

        for (path, page) in cases {
            assert_eq!(page_at(path), Some(page), "{}", path);
        }
    }

    #[test]
    fn test_resolve_binds_recipe_id() {
        let matched = resolve("/recipes/123").unwrap();
        assert_eq!(matched.value, Page::RecipeDetail);
        assert_eq!(matched.pattern, "/recipes/:recipeId");
        assert_eq!(matched.params.get("recipeId"), Some("123"));
        assert_eq!(matched.params.len(), 1);
    }

    #[test]
    fn test_resolve_binds_userid() {
        let matched = resolve("/users/abc").unwrap();
        assert_eq!(matched.value, Page::AccountHome);
        assert_eq!(matched.params.get("userid"), Some("abc"));
    }

    #[test]
    fn test_resolve_static_beats_param() {
        assert_eq!(page_at("/recipes/all"), Some(Page::AllRecipes));
        assert_eq!(page_at("/users/info"), Some(Page::InfoUpdate));
        assert_eq!(page_at("/users/recipe-form"), Some(Page::RecipeForm));
    }

    #[test]
    fn test_resolve_static_pages_have_no_params() {
        assert!(resolve("/users/scraps").unwrap().params.is_empty());
    }

    #[test]
    fn test_resolve_ignores_trailing_slash_query_and_fragment() {
        assert_eq!(page_at("/recipes/"), Some(Page::Recipes));
        assert_eq!(page_at("/recipes?query=kimchi"), Some(Page::Recipes));
        assert_eq!(page_at("/users/info#email"), Some(Page::InfoUpdate));
        assert_eq!(page_at("/recipes/9?tab=steps").unwrap(), Page::RecipeDetail);
    }

    #[test]
    fn test_resolve_static_segments_case_insensitive() {
        assert_eq!(page_at("/Auth/Login"), Some(Page::Login));
        assert_eq!(page_at("/RECIPES/ALL"), Some(Page::AllRecipes));
    }

    #[test]
    fn test_resolve_decodes_params() {
        let matched = resolve("/users/kim%20chef").unwrap();
        assert_eq!(matched.params.get("userid"), Some("kim chef"));
    }

    #[test]
    fn test_resolve_unmatched_paths() {
        assert_eq!(page_at("/nope"), None);
        assert_eq!(page_at("/recipes/1/edit"), None);
        assert_eq!(page_at("/auth"), None);
        assert_eq!(page_at("/users"), None);
    }

    #[test]
    fn test_resolve_collapses_empty_segments() {
        assert_eq!(page_at("//recipes//all"), Some(Page::AllRecipes));
        assert_eq!(page_at(""), Some(Page::Landing));
    }

    #[test]
    fn test_route_table_rejects_duplicate_shape() {
        let err = RouteTable::from_entries([("/a/:x", 1), ("/a/:y", 2)]).unwrap_err();
        assert_eq!(
            err,
            RouteError::DuplicatePattern {
                pattern: "/a/:y".to_string(),
                existing: "/a/:x".to_string(),
            }
        );
    }

    #[test]
    fn test_route_table_rejects_same_static_path_any_case() {
        assert!(RouteTable::from_entries([("/a/b", 1), ("/A/B/", 2)]).is_err());
    }

    #[test]
    fn test_route_table_most_specific_wins_regardless_of_order() {
        let table = RouteTable::from_entries([("/:a/x", "param-first"), ("/y/:b", "static-first")])
            .unwrap();
        assert_eq!(table.resolve("/y/x").unwrap().value, "static-first");

        let table = RouteTable::from_entries([("/y/:b", "static-first"), ("/:a/x", "param-first")])
            .unwrap();
        assert_eq!(table.resolve("/y/x").unwrap().value, "static-first");
    }

    #[test]
    fn test_route_table_pattern_for() {
        let table = build_routes().unwrap();
        assert_eq!(
            table.pattern_for(&Page::Scraps).map(|p| p.as_str()),
            Some("/users/scraps")
        );
    }

    #[test]
    fn test_empty_route_table_matches_nothing() {
        let table: RouteTable<u8> = RouteTable::new();
        assert!(table.is_empty());
        assert!(table.resolve("/").is_none());
    }

    #[test]
    fn test_pattern_parse_fails_on_invalid_patterns() {
        for raw in ["", "recipes", "/a//b", "/:", "/:a-b", "/:id/:id"] {
            assert!(
                matches!(RoutePattern::parse(raw), Err(RouteError::InvalidPattern { .. })),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_pattern_param_names() {
        let pattern = RoutePattern::parse("/users/:userid/recipes/:recipeId").unwrap();
        assert!(pattern.is_dynamic());
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), ["userid", "recipeId"]);
        assert!(!RoutePattern::parse("/recipes").unwrap().is_dynamic());
    }

    #[test]
    fn test_pattern_matches() {
        let pattern = RoutePattern::parse("/recipes/:recipeId").unwrap();
        assert!(pattern.matches("/recipes").is_none());
        assert_eq!(
            pattern.matches("/recipes/3"),
            Some(Params::new().with("recipeId", "3"))
        );
    }

    #[test]
    fn test_pattern_fill_success() {
        let pattern = RoutePattern::parse("/users/:userid").unwrap();
        let path = pattern.fill(&Params::new().with("userid", "kim chef")).unwrap();
        assert_eq!(path, "/users/kim%20chef");
        assert_eq!(RoutePattern::parse("/").unwrap().fill(&Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_pattern_fill_fails_on_missing_param() {
        let pattern = RoutePattern::parse("/recipes/:recipeId").unwrap();
        let expected = RouteError::MissingParam {
            pattern: "/recipes/:recipeId".to_string(),
            name: "recipeId".to_string(),
        };
        assert_eq!(pattern.fill(&Params::new()), Err(expected.clone()));
        assert_eq!(pattern.fill(&Params::new().with("recipeId", "")), Err(expected));
    }

    #[test]
    fn test_href_round_trips_through_resolve() {
        let path = href(Page::AccountHome, &Params::new().with("userid", "7")).unwrap();
        assert_eq!(path, "/users/7");
        assert_eq!(path, account_href(7));
        assert_eq!(resolve(&path).unwrap().params.get("userid"), Some("7"));
        assert_eq!(recipe_href(12), "/recipes/12");
    }

    #[test]
    fn test_params_insert_overwrites() {
        let mut params = Params::new().with("a", "1");
        params.insert("a", "2");
        assert_eq!(params.get("a"), Some("2"));
        assert_eq!(params.len(), 1);
        assert_eq!(params.iter().collect::<Vec<_>>(), [("a", "2")]);
    }

    #[test]
    fn test_split_path_and_pathname() {
        assert_eq!(split_path("/users//info/?x=1"), ["users", "info"]);
        assert!(split_path("/").is_empty());
        assert_eq!(pathname("/recipes?query=egg#top"), "/recipes");
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("all_recipes".parse::<Page>(), Ok(Page::AllRecipes));
        assert_eq!("Recipe_Detail".parse::<Page>(), Ok(Page::RecipeDetail));
        assert_eq!("admin".parse::<Page>(), Err("invalid page: admin".to_string()));
        assert_eq!(Page::InfoUpdate.to_string(), "info_update");
    }

    #[test]
    fn test_every_page_pattern_resolves_to_itself() {
        for page in Page::ALL {
            let path = href(page, &Params::new().with("recipeId", "1").with("userid", "1")).unwrap();
            assert_eq!(page_at(&path), Some(page), "{}", path);
        }
    }
}
