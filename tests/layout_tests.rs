mod common;

#[cfg(test)]
pub mod layout_tests {
    use reciguard::layout::*;
    use reciguard::routing::Page;

    #[test]
    fn test_info_update_layout() {
        let fixtures = Page::InfoUpdate.layout().fixtures();
        assert_eq!(
            fixtures,
            [
                Fixture::Header(HeaderVariant::Sub),
                Fixture::Panel(Panel::AccountSidebar),
                Fixture::Panel(Panel::HomePanel),
                Fixture::Footer,
            ]
        );
    }

    #[test]
    fn test_account_pages_share_layout() {
        let account: Vec<Page> = Page::ALL.into_iter().filter(Page::is_account_page).collect();
        assert_eq!(account.len(), 6);
        for page in account {
            assert_eq!(page.layout(), PageLayout::ACCOUNT, "{}", page);
            assert!(page.layout().has(Fixture::Panel(Panel::AccountSidebar)));
        }
    }

    #[test]
    fn test_auth_pages_are_bare() {
        for page in [Page::Login, Page::Signup] {
            assert!(page.layout().fixtures().is_empty(), "{}", page);
        }
    }

    #[test]
    fn test_landing_uses_main_header() {
        let layout = Page::Landing.layout();
        assert!(layout.has(Fixture::Header(HeaderVariant::Main)));
        assert!(!layout.has(Fixture::Header(HeaderVariant::Sub)));
        assert!(layout.has(Fixture::Footer));
    }

    #[test]
    fn test_browse_pages_have_no_panels() {
        for page in [Page::Recipes, Page::AllRecipes, Page::RecipeDetail, Page::RecipeForm] {
            let layout = page.layout();
            assert!(layout.panels.is_empty(), "{}", page);
            assert_eq!(layout.header, Some(HeaderVariant::Sub));
        }
    }
}
