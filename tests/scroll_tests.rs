mod common;

#[cfg(test)]
pub mod scroll_tests {
    use super::common::*;

    use reciguard::routing::ScrollReset;

    #[test]
    fn test_first_location_resets() {
        let viewport = RecordingViewport::default();
        let mut reset = ScrollReset::new();

        assert!(reset.on_navigate("/recipes", &viewport));
        assert_eq!(viewport.resets.get(), 1);
        assert_eq!(reset.last_path(), Some("/recipes"));
    }

    #[test]
    fn test_reset_once_per_path_change() {
        let viewport = RecordingViewport::default();
        let mut reset = ScrollReset::new();

        for path in ["/recipes", "/recipes/1", "/recipes/1", "/users/info", "/recipes/1"] {
            reset.on_navigate(path, &viewport);
        }
        assert_eq!(viewport.resets.get(), 4);
    }

    #[test]
    fn test_query_or_fragment_change_does_not_reset() {
        let viewport = RecordingViewport::default();
        let mut reset = ScrollReset::new();

        reset.on_navigate("/recipes", &viewport);
        assert!(!reset.on_navigate("/recipes?query=egg", &viewport));
        assert!(!reset.on_navigate("/recipes#top", &viewport));
        assert_eq!(viewport.resets.get(), 1);
    }

    #[test]
    fn test_trailing_or_repeated_slash_does_not_reset() {
        let viewport = RecordingViewport::default();
        let mut reset = ScrollReset::new();

        reset.on_navigate("/recipes", &viewport);
        assert!(!reset.on_navigate("/recipes/", &viewport));
        assert!(!reset.on_navigate("//recipes", &viewport));
        assert_eq!(viewport.resets.get(), 1);
        assert_eq!(reset.last_path(), Some("/recipes"));
    }

    #[test]
    fn test_root_path_is_normalized() {
        let viewport = RecordingViewport::default();
        let mut reset = ScrollReset::new();

        assert!(reset.on_navigate("", &viewport));
        assert_eq!(reset.last_path(), Some("/"));
        assert!(!reset.on_navigate("/?from=login", &viewport));
    }
}
